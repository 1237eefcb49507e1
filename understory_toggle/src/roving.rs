// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving keyboard navigation across the items of a group.
//!
//! Radio groups, tab lists, and accordion headers expose a single tab stop;
//! arrow keys move focus between items. This module decides which item holds
//! the tab stop ([`tab_stop`]), which key gets focus next ([`next_key`]), and,
//! for groups that activate on focus, forwards that move to the store through
//! [`request_select`].
//!
//! Items are given in display order. Disabled items are skipped.
//!
//! ```rust
//! use understory_toggle::roving::{Navigation, RovingItem, WrapMode, next_key};
//!
//! let items = [
//!     RovingItem::new("one"),
//!     RovingItem::new("two").disabled(true),
//!     RovingItem::new("three"),
//! ];
//!
//! assert_eq!(next_key(&items, Some(&"one"), Navigation::Next, WrapMode::Wrap), Some("three"));
//! assert_eq!(next_key(&items, Some(&"three"), Navigation::Next, WrapMode::Wrap), Some("one"));
//! assert_eq!(next_key(&items, Some(&"three"), Navigation::Next, WrapMode::Never), None);
//! ```

use crate::gate::{ToggleOutcome, request_select};
use crate::item::ItemOverrides;
use crate::store::ToggleStore;

/// Keyboard intent within a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Arrow right/down in the group's orientation.
    Next,
    /// Arrow left/up in the group's orientation.
    Prev,
    /// Home.
    First,
    /// End.
    Last,
}

/// What happens when navigation runs off either end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stay put at the edges.
    Never,
    /// Loop around to the other end.
    #[default]
    Wrap,
}

/// Whether moving focus also selects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivationMode {
    /// Focus selects (radio groups, tabs by default).
    #[default]
    Automatic,
    /// Focus only moves; selection waits for an explicit press.
    Manual,
}

/// One navigable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RovingItem<K> {
    /// Item key, shared with the store.
    pub key: K,
    /// Item-level overrides; `disabled: Some(true)` removes the item from navigation.
    pub overrides: ItemOverrides,
}

impl<K> RovingItem<K> {
    /// An item with no overrides.
    pub fn new(key: K) -> Self {
        Self {
            key,
            overrides: ItemOverrides::default(),
        }
    }

    /// Set the item-level disable flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.overrides = ItemOverrides::disabled(disabled);
        self
    }

    fn is_enabled(&self) -> bool {
        !self.overrides.disabled.unwrap_or(false)
    }
}

/// Key that should receive focus after `navigation` from `origin`.
///
/// The origin is located among all items, so focus sitting on an item that
/// was disabled after it got focus still moves to its neighbors. With no
/// origin (or one that is not in `items`), `Next`/`First` land on the first
/// enabled item and `Prev`/`Last` on the last one. Returns `None` when nothing
/// is enabled, or when `wrap` is [`WrapMode::Never`] and no enabled item lies
/// beyond the origin.
pub fn next_key<K: Clone + PartialEq>(
    items: &[RovingItem<K>],
    origin: Option<&K>,
    navigation: Navigation,
    wrap: WrapMode,
) -> Option<K> {
    let first = items.iter().find(|item| item.is_enabled())?;
    let last = items.iter().rev().find(|item| item.is_enabled())?;

    let origin_pos = origin.and_then(|origin| items.iter().position(|item| item.key == *origin));

    let target = match (navigation, origin_pos) {
        (Navigation::First, _) | (Navigation::Next, None) => first,
        (Navigation::Last, _) | (Navigation::Prev, None) => last,
        (Navigation::Next, Some(pos)) => {
            match items[pos + 1..].iter().find(|item| item.is_enabled()) {
                Some(item) => item,
                None if wrap == WrapMode::Wrap => first,
                None => return None,
            }
        }
        (Navigation::Prev, Some(pos)) => {
            match items[..pos].iter().rev().find(|item| item.is_enabled()) {
                Some(item) => item,
                None if wrap == WrapMode::Wrap => last,
                None => return None,
            }
        }
    };
    Some(target.key.clone())
}

/// The item that holds the group's single tab stop.
///
/// Roving groups expose exactly one tabbable item: the first enabled item
/// that is active, or the first enabled item when nothing active is
/// reachable. Keyboard users can then Tab into a group with no selection.
/// Returns `None` when every item is disabled.
///
/// ```rust
/// use understory_toggle::ToggleConfig;
/// use understory_toggle::roving::{RovingItem, tab_stop};
///
/// let radios = [RovingItem::new("s"), RovingItem::new("m"), RovingItem::new("l")];
/// let mut size = ToggleConfig::single().build().unwrap();
/// assert_eq!(tab_stop(&size, &radios), Some("s"));
///
/// size.set_value(understory_toggle::ToggleValue::Single(Some("l")));
/// assert_eq!(tab_stop(&size, &radios), Some("l"));
/// ```
pub fn tab_stop<K: Clone + PartialEq>(
    store: &ToggleStore<K>,
    items: &[RovingItem<K>],
) -> Option<K> {
    items
        .iter()
        .find(|item| item.is_enabled() && store.value().is_active(&item.key))
        .map(|item| item.key.clone())
        .or_else(|| next_key(items, None, Navigation::First, WrapMode::Never))
}

/// Move focus and, under [`ActivationMode::Automatic`], select the new key.
///
/// Returns the newly focused key together with the store outcome. Manual
/// activation and failed moves report [`ToggleOutcome::Unchanged`].
pub fn navigate<K: Clone + PartialEq>(
    store: &mut ToggleStore<K>,
    items: &[RovingItem<K>],
    origin: Option<&K>,
    navigation: Navigation,
    wrap: WrapMode,
    activation: ActivationMode,
) -> (Option<K>, ToggleOutcome) {
    let Some(focused) = next_key(items, origin, navigation, wrap) else {
        return (None, ToggleOutcome::Unchanged);
    };
    let outcome = match activation {
        ActivationMode::Automatic => {
            let overrides = items
                .iter()
                .find(|item| item.key == focused)
                .map(|item| item.overrides)
                .unwrap_or_default();
            request_select(store, &focused, &overrides)
        }
        ActivationMode::Manual => ToggleOutcome::Unchanged,
    };
    (Some(focused), outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ToggleConfig;
    use crate::value::ToggleValue;
    use alloc::vec;
    use alloc::vec::Vec;

    fn tabs() -> Vec<RovingItem<&'static str>> {
        vec![
            RovingItem::new("account"),
            RovingItem::new("password"),
            RovingItem::new("billing").disabled(true),
            RovingItem::new("team"),
        ]
    }

    #[test]
    fn next_and_prev_skip_disabled() {
        let items = tabs();
        let next = next_key(&items, Some(&"password"), Navigation::Next, WrapMode::Wrap);
        assert_eq!(next, Some("team"));
        let prev = next_key(&items, Some(&"team"), Navigation::Prev, WrapMode::Wrap);
        assert_eq!(prev, Some("password"));
    }

    #[test]
    fn home_and_end() {
        let items = tabs();
        let home = next_key(&items, Some(&"team"), Navigation::First, WrapMode::Never);
        assert_eq!(home, Some("account"));
        let end = next_key(&items, None, Navigation::Last, WrapMode::Never);
        assert_eq!(end, Some("team"));
    }

    #[test]
    fn edges_respect_wrap_mode() {
        let items = tabs();
        let team = Some(&"team");
        let account = Some(&"account");
        assert_eq!(next_key(&items, team, Navigation::Next, WrapMode::Wrap), Some("account"));
        assert_eq!(next_key(&items, team, Navigation::Next, WrapMode::Never), None);
        assert_eq!(next_key(&items, account, Navigation::Prev, WrapMode::Wrap), Some("team"));
        assert_eq!(next_key(&items, account, Navigation::Prev, WrapMode::Never), None);
    }

    #[test]
    fn unknown_origin_enters_from_the_ends() {
        let items = tabs();
        let next = next_key(&items, Some(&"archived"), Navigation::Next, WrapMode::Wrap);
        assert_eq!(next, Some("account"));
        assert_eq!(next_key(&items, None, Navigation::Prev, WrapMode::Wrap), Some("team"));
    }

    #[test]
    fn disabled_origin_moves_to_its_neighbors() {
        let items = tabs();
        let billing = Some(&"billing");
        assert_eq!(next_key(&items, billing, Navigation::Next, WrapMode::Never), Some("team"));
        assert_eq!(next_key(&items, billing, Navigation::Prev, WrapMode::Never), Some("password"));
    }

    #[test]
    fn disabled_origin_at_the_edge_respects_wrap_mode() {
        let items = [
            RovingItem::new(1_u32),
            RovingItem::new(2),
            RovingItem::new(3).disabled(true),
        ];
        assert_eq!(next_key(&items, Some(&3), Navigation::Next, WrapMode::Never), None);
        assert_eq!(next_key(&items, Some(&3), Navigation::Next, WrapMode::Wrap), Some(1));
    }

    #[test]
    fn tab_stop_falls_back_to_first_enabled_item() {
        let items = [
            RovingItem::new("s").disabled(true),
            RovingItem::new("m"),
            RovingItem::new("l"),
        ];
        let mut store = ToggleConfig::single().build().unwrap();
        assert_eq!(tab_stop(&store, &items), Some("m"));

        store.set_value(ToggleValue::Single(Some("l")));
        assert_eq!(tab_stop(&store, &items), Some("l"));

        // An active but disabled item cannot take focus.
        store.set_value(ToggleValue::Single(Some("s")));
        assert_eq!(tab_stop(&store, &items), Some("m"));
    }

    #[test]
    fn tab_stop_is_none_when_everything_is_disabled() {
        let items = [RovingItem::new(1_u32).disabled(true)];
        let store = ToggleConfig::single().build().unwrap();
        assert_eq!(tab_stop(&store, &items), None);
    }

    #[test]
    fn all_disabled_yields_nothing() {
        let items = [RovingItem::new(1_u32).disabled(true)];
        assert_eq!(next_key(&items, None, Navigation::First, WrapMode::Wrap), None);
    }

    #[test]
    fn automatic_activation_selects_on_focus() {
        let mut store = ToggleConfig::single()
            .default_value(ToggleValue::Single(Some("account")))
            .build()
            .unwrap();
        let items = tabs();

        let (focused, outcome) = navigate(
            &mut store,
            &items,
            Some(&"account"),
            Navigation::Next,
            WrapMode::Wrap,
            ActivationMode::Automatic,
        );
        assert_eq!(focused, Some("password"));
        assert_eq!(outcome, ToggleOutcome::Changed);
        assert_eq!(store.value(), &ToggleValue::Single(Some("password")));
    }

    #[test]
    fn manual_activation_leaves_store_alone() {
        let mut store = ToggleConfig::single()
            .default_value(ToggleValue::Single(Some("account")))
            .build()
            .unwrap();
        let items = tabs();

        let (focused, outcome) = navigate(
            &mut store,
            &items,
            Some(&"account"),
            Navigation::Last,
            WrapMode::Wrap,
            ActivationMode::Manual,
        );
        assert_eq!(focused, Some("team"));
        assert_eq!(outcome, ToggleOutcome::Unchanged);
        assert_eq!(store.value(), &ToggleValue::Single(Some("account")));
    }

    #[test]
    fn focus_moves_even_when_group_is_disabled() {
        let mut store = ToggleConfig::single().disabled(true).build().unwrap();
        let items = tabs();
        let (focused, outcome) = navigate(
            &mut store,
            &items,
            None,
            Navigation::First,
            WrapMode::Wrap,
            ActivationMode::Automatic,
        );
        assert_eq!(focused, Some("account"));
        assert_eq!(outcome, ToggleOutcome::Blocked);
    }
}
