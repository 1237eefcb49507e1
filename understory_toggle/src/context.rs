// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit ancestor lookup for group parts.
//!
//! Parts never find their group through ambient state. The host passes the
//! store (and, below an item, the item's [`ItemScope`]) down by reference. A
//! host walking its own element tree may come up empty; [`require`] turns that
//! into a [`UsageError`] naming both sides, so the mistake surfaces the first
//! time the part is built.
//!
//! ```rust
//! use understory_toggle::context::{ItemScope, require};
//! use understory_toggle::{ToggleConfig, ToggleStore};
//!
//! let store: ToggleStore<&str> = ToggleConfig::multiple().build().unwrap();
//! let scope = ItemScope::new(&store, &"faq-1");
//!
//! let found = require(Some(&scope), "AccordionTrigger", "AccordionItem").unwrap();
//! assert!(!found.state().is_active);
//!
//! let missing = require::<ItemScope<'_, &str>>(None, "AccordionTrigger", "AccordionItem");
//! assert!(missing.is_err());
//! ```

use crate::error::UsageError;
use crate::item::{ItemOverrides, ItemState, derive_item_state};
use crate::roving::{RovingItem, tab_stop};
use crate::store::ToggleStore;

/// Unwrap an ancestor handed to `component`, or report that it is missing.
pub fn require<'a, T: ?Sized>(
    ancestor: Option<&'a T>,
    component: &'static str,
    ancestor_name: &'static str,
) -> Result<&'a T, UsageError> {
    ancestor.ok_or(UsageError {
        component,
        ancestor: ancestor_name,
    })
}

/// What the parts of one item (trigger, content) need from their ancestors.
#[derive(Debug)]
pub struct ItemScope<'a, K> {
    /// The owning group's store.
    pub store: &'a ToggleStore<K>,
    /// This item's key.
    pub key: &'a K,
    /// This item's overrides.
    pub overrides: ItemOverrides,
    /// Whether this item holds its group's tab stop, when the group uses
    /// roving focus. `None` lets parts fall back to the item's active state.
    pub tab_stop: Option<bool>,
}

impl<'a, K> ItemScope<'a, K> {
    /// Scope for `key` with no overrides.
    pub fn new(store: &'a ToggleStore<K>, key: &'a K) -> Self {
        Self {
            store,
            key,
            overrides: ItemOverrides::default(),
            tab_stop: None,
        }
    }

    /// Replace the item's overrides.
    pub fn with_overrides(mut self, overrides: ItemOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Mark whether this item holds its group's tab stop.
    pub fn with_tab_stop(mut self, tab_stop: bool) -> Self {
        self.tab_stop = Some(tab_stop);
        self
    }
}

impl<'a, K: Clone + PartialEq> ItemScope<'a, K> {
    /// Scope for `key` inside a roving group laid out as `items`.
    ///
    /// Takes the item's overrides from `items` and decides the tab stop with
    /// [`tab_stop`], so a group with no selection still has one tabbable item.
    pub fn roving(store: &'a ToggleStore<K>, key: &'a K, items: &[RovingItem<K>]) -> Self {
        let overrides = items
            .iter()
            .find(|item| item.key == *key)
            .map(|item| item.overrides)
            .unwrap_or_default();
        let is_stop = tab_stop(store, items).as_ref() == Some(key);
        Self::new(store, key)
            .with_overrides(overrides)
            .with_tab_stop(is_stop)
    }
}

impl<K: PartialEq> ItemScope<'_, K> {
    /// The item's state for this render.
    pub fn state(&self) -> ItemState {
        derive_item_state(self.store, self.key, &self.overrides)
    }
}
