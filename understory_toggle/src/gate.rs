// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction gate: what a toggle request does to a store.
//!
//! Pointer presses, keyboard activation, and long presses all end up here
//! through the same entry points, so every trigger follows one policy:
//!
//! | Mode | Request on key `k` |
//! |------|--------------------|
//! | Boolean | flip the open flag (the key is ignored) |
//! | Single, `k` inactive | select `k` |
//! | Single, `k` active, collapsible | clear the selection |
//! | Single, `k` active, not collapsible | nothing, and no notification |
//! | Multiple | flip `k`'s membership |
//!
//! ## Disabled groups
//!
//! A disabled group blocks every request, even for items whose overrides
//! re-enable them for display. Item-level `disabled: Some(true)` blocks that
//! item alone.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_toggle::{ItemOverrides, ToggleConfig, ToggleOutcome, ToggleValue, request_toggle};
//!
//! let mut store = ToggleConfig::single().collapsible(true).build().unwrap();
//! let none = ItemOverrides::default();
//!
//! assert_eq!(request_toggle(&mut store, Some(&"item-1"), &none), ToggleOutcome::Changed);
//! assert_eq!(store.value(), &ToggleValue::Single(Some("item-1")));
//!
//! assert_eq!(request_toggle(&mut store, Some(&"item-1"), &none), ToggleOutcome::Changed);
//! assert_eq!(store.value(), &ToggleValue::Single(None));
//! ```

use crate::item::{ItemOverrides, derive_item_state};
use crate::store::ToggleStore;
use crate::value::ToggleValue;

/// What a request did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToggleOutcome {
    /// A new value was accepted and the change callback ran.
    Changed,
    /// The request resolved to the current value; nothing ran.
    Unchanged,
    /// The group or item is disabled; nothing ran.
    Blocked,
}

impl ToggleOutcome {
    /// Whether the change callback was invoked.
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Toggle `key` (or the group itself in boolean mode).
///
/// `key` may be `None` only for boolean stores; single and multiple stores
/// treat a missing key as a no-op.
pub fn request_toggle<K: Clone + PartialEq>(
    store: &mut ToggleStore<K>,
    key: Option<&K>,
    overrides: &ItemOverrides,
) -> ToggleOutcome {
    if is_blocked(store, key, overrides) {
        log::debug!("toggle blocked on disabled {} store", store.mode());
        return ToggleOutcome::Blocked;
    }
    let next = match (store.value(), key) {
        (ToggleValue::Boolean(open), _) => ToggleValue::Boolean(!open),
        (ToggleValue::Single(active), Some(key)) => {
            if active.as_ref() != Some(key) {
                ToggleValue::Single(Some(key.clone()))
            } else if store.collapsible() {
                ToggleValue::Single(None)
            } else {
                return ToggleOutcome::Unchanged;
            }
        }
        (ToggleValue::Multiple(keys), Some(key)) => {
            let mut next = keys.clone();
            next.toggle(key.clone());
            ToggleValue::Multiple(next)
        }
        (_, None) => {
            log::debug!("keyless toggle ignored by {} store", store.mode());
            return ToggleOutcome::Unchanged;
        }
    };
    commit(store, next)
}

/// Drive a boolean store to an explicit open state.
///
/// Dedicated open and close actions use this instead of flipping, so a close
/// button always closes. Non-boolean stores ignore it.
pub fn request_open_change<K: PartialEq>(store: &mut ToggleStore<K>, open: bool) -> ToggleOutcome {
    if store.is_disabled() {
        return ToggleOutcome::Blocked;
    }
    if store.value().as_open().is_none() {
        log::debug!("open change ignored by {} store", store.mode());
        return ToggleOutcome::Unchanged;
    }
    commit(store, ToggleValue::Boolean(open))
}

/// Make `key` active without ever deactivating anything.
///
/// Used when focus alone selects (tabs and radio groups with automatic
/// activation): landing on the active key is a no-op even when the group is
/// collapsible, and multiple stores only ever add.
pub fn request_select<K: Clone + PartialEq>(
    store: &mut ToggleStore<K>,
    key: &K,
    overrides: &ItemOverrides,
) -> ToggleOutcome {
    if is_blocked(store, Some(key), overrides) {
        return ToggleOutcome::Blocked;
    }
    let next = match store.value() {
        ToggleValue::Boolean(_) => ToggleValue::Boolean(true),
        ToggleValue::Single(_) => ToggleValue::Single(Some(key.clone())),
        ToggleValue::Multiple(keys) => {
            let mut next = keys.clone();
            next.insert(key.clone());
            ToggleValue::Multiple(next)
        }
    };
    commit(store, next)
}

fn is_blocked<K: PartialEq>(
    store: &ToggleStore<K>,
    key: Option<&K>,
    overrides: &ItemOverrides,
) -> bool {
    let item_disabled = match key {
        Some(key) => derive_item_state(store, key, overrides).is_disabled,
        None => overrides.disabled.unwrap_or(store.is_disabled()),
    };
    // The group flag is checked on its own: an item override of `false` only
    // affects display.
    store.is_disabled() || item_disabled
}

fn commit<K: PartialEq>(store: &mut ToggleStore<K>, next: ToggleValue<K>) -> ToggleOutcome {
    if *store.value() == next {
        return ToggleOutcome::Unchanged;
    }
    if store.set_value(next) {
        ToggleOutcome::Changed
    } else {
        ToggleOutcome::Blocked
    }
}
