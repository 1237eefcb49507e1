// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection store: owner of a group's current value.
//!
//! A store is either **controlled** or **uncontrolled**, decided once when it
//! is built:
//!
//! - Uncontrolled stores own their value. [`ToggleStore::set_value`] writes it
//!   synchronously, so the very next [`ToggleStore::value`] read observes it.
//! - Controlled stores never write their own value. Every accepted change is
//!   forwarded to the change callback, and the displayed value only moves when
//!   the host delivers the next external value through
//!   [`ToggleStore::sync_value`].
//!
//! The change callback runs in both modes, after any internal write.
//!
//! ## Re-entrancy
//!
//! The callback is invoked while the store is mutably borrowed, so it cannot
//! issue another request against the same store from inside the callback.
//! Hosts that want to react to a change by toggling again should queue that
//! request and issue it after the current one returns.

use alloc::boxed::Box;
use core::fmt;

use crate::error::ConfigError;
use crate::item::{ItemOverrides, ItemState, derive_item_state};
use crate::value::{SelectionMode, ToggleValue};

/// Change callback invoked with the accepted next value.
pub type OnChange<K> = Box<dyn FnMut(&ToggleValue<K>)>;

/// Builder for a [`ToggleStore`].
///
/// ```rust
/// use understory_toggle::{ToggleConfig, ToggleValue};
///
/// let store = ToggleConfig::single()
///     .default_value(ToggleValue::Single(Some("item-1")))
///     .collapsible(true)
///     .build()
///     .unwrap();
/// assert!(!store.is_controlled());
/// assert_eq!(store.value().as_single(), Some(&"item-1"));
///
/// // A store is either controlled or uncontrolled, never both.
/// let err = ToggleConfig::<&str>::boolean()
///     .value(ToggleValue::Boolean(true))
///     .default_value(ToggleValue::Boolean(false))
///     .build();
/// assert!(err.is_err());
/// ```
pub struct ToggleConfig<K> {
    mode: SelectionMode,
    value: Option<ToggleValue<K>>,
    default_value: Option<ToggleValue<K>>,
    collapsible: bool,
    disabled: bool,
    on_change: Option<OnChange<K>>,
}

impl<K> ToggleConfig<K> {
    /// Start configuring a store for `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            value: None,
            default_value: None,
            collapsible: false,
            disabled: false,
            on_change: None,
        }
    }

    /// At most one active key.
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Any number of active keys.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    /// Open/closed.
    pub fn boolean() -> Self {
        Self::new(SelectionMode::Boolean)
    }

    /// Make the store controlled, starting from `value`.
    pub fn value(mut self, value: ToggleValue<K>) -> Self {
        self.value = Some(value);
        self
    }

    /// Make the store uncontrolled, seeded with `value`.
    pub fn default_value(mut self, value: ToggleValue<K>) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Whether re-activating the active key clears it. Only meaningful in
    /// single mode.
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Disable the whole group.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Callback invoked with every accepted change.
    pub fn on_change(mut self, on_change: impl FnMut(&ToggleValue<K>) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Validate the configuration and build the store.
    pub fn build(self) -> Result<ToggleStore<K>, ConfigError> {
        let (controlled, initial) = match (self.value, self.default_value) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingValues),
            (Some(value), None) => (true, value),
            (None, Some(value)) => (false, value),
            (None, None) => (false, ToggleValue::empty(self.mode)),
        };
        if initial.mode() != self.mode {
            return Err(ConfigError::ModeMismatch {
                mode: self.mode,
                found: initial.mode(),
            });
        }
        Ok(ToggleStore {
            mode: self.mode,
            controlled,
            current: initial,
            collapsible: self.collapsible,
            disabled: self.disabled,
            on_change: self.on_change,
        })
    }
}

impl<K: fmt::Debug> fmt::Debug for ToggleConfig<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("collapsible", &self.collapsible)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Current value of one toggle group plus its change policy.
///
/// Built with [`ToggleConfig`]. One store per mounted group root; items never
/// own it, they read it through [`ToggleStore::item_state`].
pub struct ToggleStore<K> {
    mode: SelectionMode,
    controlled: bool,
    // Internal value when uncontrolled; last external value when controlled.
    current: ToggleValue<K>,
    collapsible: bool,
    disabled: bool,
    on_change: Option<OnChange<K>>,
}

impl<K> ToggleStore<K> {
    /// Selection mode, fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether the value is owned by the host. Fixed at construction.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The value to display now.
    ///
    /// The internal value for uncontrolled stores, the most recent external
    /// value for controlled ones.
    pub fn value(&self) -> &ToggleValue<K> {
        &self.current
    }

    /// Whether re-activating the active key clears it.
    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    /// Update the collapse policy, for example when the host re-renders with a
    /// new prop.
    pub fn set_collapsible(&mut self, collapsible: bool) {
        self.collapsible = collapsible;
    }

    /// Whether the whole group is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the whole group.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Apply `next` and notify the change callback.
    ///
    /// Returns `false` without touching anything when the group is disabled
    /// (late events after a mid-interaction disable are dropped) or when
    /// `next` has the wrong shape for this store.
    ///
    /// This does not compare against the current value; use the
    /// [`gate`](crate::gate) functions to get no-op detection.
    pub fn set_value(&mut self, next: ToggleValue<K>) -> bool {
        if self.disabled {
            log::debug!("dropped change on disabled {} store", self.mode);
            return false;
        }
        if next.mode() != self.mode {
            log::debug!("dropped {} value sent to {} store", next.mode(), self.mode);
            return false;
        }
        if self.controlled {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&next);
            }
        } else {
            self.current = next;
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&self.current);
            }
        }
        log::trace!(
            "{} store accepted a change (controlled: {})",
            self.mode,
            self.controlled
        );
        true
    }

    /// Deliver the host's value for this render.
    ///
    /// Controlled stores adopt `Some(value)`. Switching between controlled and
    /// uncontrolled after construction is unsupported: a controlled store that
    /// receives `None` keeps its last value, and an uncontrolled store ignores
    /// external values. Both cases log a warning in debug builds, as does a
    /// value whose shape does not match the store's mode.
    pub fn sync_value(&mut self, value: Option<ToggleValue<K>>) {
        match (self.controlled, value) {
            (true, Some(value)) => {
                if value.mode() == self.mode {
                    self.current = value;
                } else {
                    warn_misuse(format_args!(
                        "a {} value was synced to a controlled {} store and was ignored",
                        value.mode(),
                        self.mode
                    ));
                }
            }
            (true, None) => warn_mode_switch("controlled", "uncontrolled"),
            (false, Some(_)) => warn_mode_switch("uncontrolled", "controlled"),
            (false, None) => {}
        }
    }

    /// Replace the change callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&ToggleValue<K>) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }
}

impl<K: PartialEq> ToggleStore<K> {
    /// Derived state for the item identified by `key`.
    ///
    /// See [`derive_item_state`].
    pub fn item_state(&self, key: &K, overrides: &ItemOverrides) -> ItemState {
        derive_item_state(self, key, overrides)
    }
}

impl<K: fmt::Debug> fmt::Debug for ToggleStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleStore")
            .field("mode", &self.mode)
            .field("controlled", &self.controlled)
            .field("current", &self.current)
            .field("collapsible", &self.collapsible)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn warn_mode_switch(from: &str, to: &str) {
    warn_misuse(format_args!(
        "a toggle store built as {from} was given props for a {to} store; \
         the store stays {from} for its whole lifetime"
    ));
}

// Caller misuse is reported in debug builds only.
fn warn_misuse(message: fmt::Arguments<'_>) {
    if cfg!(debug_assertions) {
        log::warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::KeySet;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recorder<K: Clone + 'static>() -> (
        Rc<RefCell<Vec<ToggleValue<K>>>>,
        impl FnMut(&ToggleValue<K>) + 'static,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: &ToggleValue<K>| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn defaults_to_empty_uncontrolled_value() {
        let store = ToggleConfig::<u32>::multiple().build().unwrap();
        assert!(!store.is_controlled());
        assert_eq!(store.value(), &ToggleValue::Multiple(KeySet::new()));
    }

    #[test]
    fn conflicting_values_fail_at_build() {
        let err = ToggleConfig::single()
            .value(ToggleValue::Single(Some("x")))
            .default_value(ToggleValue::Single(Some("y")))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ConflictingValues);
    }

    #[test]
    fn mismatched_shape_fails_at_build() {
        let err = ToggleConfig::single()
            .default_value(ToggleValue::Multiple(["a"].into_iter().collect()))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ModeMismatch {
                mode: SelectionMode::Single,
                found: SelectionMode::Multiple,
            }
        );
    }

    #[test]
    fn uncontrolled_write_is_visible_before_callback_returns() {
        let (seen, sink) = recorder::<&str>();
        let mut store = ToggleConfig::single().on_change(sink).build().unwrap();

        assert!(store.set_value(ToggleValue::Single(Some("a"))));
        assert_eq!(store.value(), &ToggleValue::Single(Some("a")));
        assert_eq!(*seen.borrow(), [ToggleValue::Single(Some("a"))]);
    }

    #[test]
    fn controlled_store_only_forwards() {
        let (seen, sink) = recorder::<&str>();
        let mut store = ToggleConfig::boolean()
            .value(ToggleValue::Boolean(false))
            .on_change(sink)
            .build()
            .unwrap();

        assert!(store.set_value(ToggleValue::Boolean(true)));
        assert_eq!(store.value(), &ToggleValue::Boolean(false));
        assert_eq!(*seen.borrow(), [ToggleValue::Boolean(true)]);

        store.sync_value(Some(ToggleValue::Boolean(true)));
        assert_eq!(store.value(), &ToggleValue::Boolean(true));
    }

    #[test]
    fn disabled_store_drops_writes_silently() {
        let (seen, sink) = recorder::<&str>();
        let mut store = ToggleConfig::single()
            .disabled(true)
            .on_change(sink)
            .build()
            .unwrap();

        assert!(!store.set_value(ToggleValue::Single(Some("a"))));
        assert_eq!(store.value(), &ToggleValue::Single(None));
        assert!(seen.borrow().is_empty());

        store.set_disabled(false);
        assert!(store.set_value(ToggleValue::Single(Some("a"))));
    }

    #[test]
    fn wrong_shape_write_is_rejected() {
        let mut store = ToggleConfig::<&str>::boolean().build().unwrap();
        assert!(!store.set_value(ToggleValue::Single(Some("a"))));
        assert_eq!(store.value(), &ToggleValue::Boolean(false));
    }

    #[test]
    fn controlled_ness_never_changes_after_build() {
        let mut controlled = ToggleConfig::single()
            .value(ToggleValue::Single(Some("a")))
            .build()
            .unwrap();
        controlled.sync_value(None);
        assert!(controlled.is_controlled());
        assert_eq!(controlled.value(), &ToggleValue::Single(Some("a")));

        let mut uncontrolled = ToggleConfig::single()
            .default_value(ToggleValue::Single(Some("a")))
            .build()
            .unwrap();
        uncontrolled.sync_value(Some(ToggleValue::Single(Some("b"))));
        assert!(!uncontrolled.is_controlled());
        assert_eq!(uncontrolled.value(), &ToggleValue::Single(Some("a")));
    }

    mod warnings {
        extern crate std;

        use alloc::string::{String, ToString};
        use alloc::vec::Vec;
        use std::sync::{Mutex, Once};

        struct Capture;

        static CAPTURE: Capture = Capture;
        static INSTALL: Once = Once::new();
        static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

        impl log::Log for Capture {
            fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
                metadata.level() <= log::Level::Warn
            }

            fn log(&self, record: &log::Record<'_>) {
                if self.enabled(record.metadata()) {
                    WARNINGS.lock().unwrap().push(record.args().to_string());
                }
            }

            fn flush(&self) {}
        }

        /// Install the capturing logger once per test binary.
        pub(super) fn install() {
            INSTALL.call_once(|| {
                let _ = log::set_logger(&CAPTURE);
                log::set_max_level(log::LevelFilter::Warn);
            });
        }

        pub(super) fn any_containing(needle: &str) -> bool {
            WARNINGS.lock().unwrap().iter().any(|w| w.contains(needle))
        }
    }

    #[test]
    fn wrong_shape_sync_is_ignored_and_warned_about() {
        warnings::install();
        let mut store = ToggleConfig::single()
            .value(ToggleValue::Single(Some("a")))
            .build()
            .unwrap();

        store.sync_value(Some(ToggleValue::Boolean(true)));
        assert_eq!(store.value(), &ToggleValue::Single(Some("a")));
        if cfg!(debug_assertions) {
            assert!(warnings::any_containing(
                "a boolean value was synced to a controlled single store"
            ));
        }
    }
}
