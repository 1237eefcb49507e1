// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item state derived from a store.
//!
//! Items have no identity of their own. Each render asks the store about a key
//! and gets back a fresh [`ItemState`]; nothing is cached and the result is not
//! meant to be kept across renders.

use crate::store::ToggleStore;

/// Per-item flags that take precedence over the group's.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemOverrides {
    /// Item-level disable.
    ///
    /// `Some(false)` opts this item back in visually even when the group is
    /// disabled; `None` falls through to the group flag. The group flag is
    /// still an absolute gate for toggle requests, see
    /// [`request_toggle`](crate::gate::request_toggle).
    pub disabled: Option<bool>,
}

impl ItemOverrides {
    /// Overrides with an explicit item-level disable flag.
    pub fn disabled(disabled: bool) -> Self {
        Self {
            disabled: Some(disabled),
        }
    }
}

/// Derived state of one item for the current render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Whether the item is selected, expanded, or open.
    pub is_active: bool,
    /// Whether the item should render as disabled.
    pub is_disabled: bool,
}

/// Compute `key`'s state from the store and its overrides.
///
/// In boolean mode the group is its only item, so `is_active` reports the
/// open flag whatever the key.
///
/// ```rust
/// use understory_toggle::{ItemOverrides, ToggleConfig, ToggleValue, derive_item_state};
///
/// let store = ToggleConfig::single()
///     .default_value(ToggleValue::Single(Some("a")))
///     .disabled(true)
///     .build()
///     .unwrap();
///
/// let a = derive_item_state(&store, &"a", &ItemOverrides::default());
/// assert!(a.is_active && a.is_disabled);
///
/// // An explicit `false` beats the group flag for display purposes.
/// let b = derive_item_state(&store, &"b", &ItemOverrides::disabled(false));
/// assert!(!b.is_active && !b.is_disabled);
/// ```
pub fn derive_item_state<K: PartialEq>(
    store: &ToggleStore<K>,
    key: &K,
    overrides: &ItemOverrides,
) -> ItemState {
    ItemState {
        is_active: store.value().is_active(key),
        is_disabled: overrides.disabled.unwrap_or(store.is_disabled()),
    }
}
