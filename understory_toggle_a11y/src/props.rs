// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral property bags.

use alloc::borrow::Cow;
use alloc::string::String;

use smallvec::SmallVec;

/// A single property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropValue {
    /// Boolean attribute or state flag.
    Bool(bool),
    /// Integer attribute such as `tabindex`.
    Int(i64),
    /// String attribute such as `role` or `data-state`.
    Str(Cow<'static, str>),
}

impl PropValue {
    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&'static str> for PropValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for PropValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

/// An ordered bag of named properties.
///
/// Keys are unique; setting an existing key replaces its value in place, so
/// iteration order is the order keys were first set. Nested platform objects
/// (for example a native `accessibilityState`) use dotted keys such as
/// `accessibilityState.expanded`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropBag {
    entries: SmallVec<[(&'static str, PropValue); 8]>,
}

impl PropBag {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<PropValue>) {
        let value = value.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`PropBag::set`].
    pub fn with(mut self, key: &'static str, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// The value for `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether `key` is set.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in first-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<PropValue>> FromIterator<(&'static str, V)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.set(key, value);
        }
        bag
    }
}
