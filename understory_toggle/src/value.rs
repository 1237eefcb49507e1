// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection modes and the values a toggle store can hold.

use core::fmt;

use smallvec::SmallVec;

/// How many keys a group may have active at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one key is active (accordion `type="single"`, tabs, radio groups).
    Single,
    /// Any number of keys are active (accordion `type="multiple"`).
    Multiple,
    /// The group itself is open or closed (dialogs, drawers, hover cards).
    Boolean,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        })
    }
}

/// An insertion-ordered set of active keys.
///
/// Membership is what matters for equality; the order is kept stable so that
/// snapshots of the set are reproducible. Most groups keep only a handful of
/// items open, so the keys live inline until the fifth one.
#[derive(Clone, Debug)]
pub struct KeySet<K> {
    keys: SmallVec<[K; 4]>,
}

impl<K> Default for KeySet<K> {
    fn default() -> Self {
        Self {
            keys: SmallVec::new(),
        }
    }
}

impl<K: PartialEq> KeySet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is a member.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Add `key` if it is absent. Returns `true` if the set changed.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Remove `key` if present. Returns `true` if the set changed.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(index) => {
                self.keys.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the membership of `key` (symmetric difference with `{key}`).
    ///
    /// Returns `true` if `key` is a member afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.remove(&key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Members in insertion order, as a slice.
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }
}

impl<K: PartialEq> PartialEq for KeySet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|k| other.contains(k))
    }
}

impl<K: Eq> Eq for KeySet<K> {}

impl<K: PartialEq> FromIterator<K> for KeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// The value held by a toggle store; its shape follows the [`SelectionMode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleValue<K> {
    /// The active key of a single-selection group, if any.
    Single(Option<K>),
    /// The active keys of a multiple-selection group.
    Multiple(KeySet<K>),
    /// Whether a disclosure is open.
    Boolean(bool),
}

impl<K> ToggleValue<K> {
    /// The mode this value belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
            Self::Boolean(_) => SelectionMode::Boolean,
        }
    }

    /// The resting value for `mode`: nothing selected, nothing open.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(KeySet::default()),
            SelectionMode::Boolean => Self::Boolean(false),
        }
    }

    /// The open flag, for boolean values.
    pub fn as_open(&self) -> Option<bool> {
        match self {
            Self::Boolean(open) => Some(*open),
            _ => None,
        }
    }

    /// The active key, for single values.
    pub fn as_single(&self) -> Option<&K> {
        match self {
            Self::Single(key) => key.as_ref(),
            _ => None,
        }
    }

    /// The active keys, for multiple values.
    pub fn as_multiple(&self) -> Option<&KeySet<K>> {
        match self {
            Self::Multiple(keys) => Some(keys),
            _ => None,
        }
    }
}

impl<K: PartialEq> ToggleValue<K> {
    /// Whether `key` is active under this value.
    ///
    /// Boolean values have no items; they report their open flag for every key.
    pub fn is_active(&self, key: &K) -> bool {
        match self {
            Self::Single(active) => active.as_ref() == Some(key),
            Self::Multiple(keys) => keys.contains(key),
            Self::Boolean(open) => *open,
        }
    }
}
