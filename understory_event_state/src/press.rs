// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press recognition for toggle triggers.
//!
//! Turns raw pointer and key events into **activations**: the single logical
//! "the user pressed this trigger" signal that a toggle gate consumes. Three
//! kinds exist ([`ActivationKind`]): a pointer press, a pointer long press, and
//! keyboard activation. A host usually handles them all the same way, by
//! calling the gate for the activation's target.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::press::{ActivationKind, PressResult, PressState};
//! use kurbo::Point;
//!
//! let mut state: PressState<u32> = PressState::new();
//!
//! // Press and release on the same trigger.
//! state.on_down(None, None, 7, Point::new(10.0, 10.0), 1000);
//! let result = state.on_up(None, None, &7, Point::new(11.0, 10.0), 1080);
//! let PressResult::Activate(activation) = result else { panic!("expected activation") };
//! assert_eq!(activation.target, 7);
//! assert_eq!(activation.kind, ActivationKind::Press);
//! ```
//!
//! Long presses fire while the pointer is still down, the way native
//! pressables behave. Once a long press has fired, the matching release does
//! not produce a second activation:
//!
//! ```
//! # use understory_event_state::press::{ActivationKind, PressResult, PressState};
//! # use kurbo::Point;
//! let mut state: PressState<u32> = PressState::with_thresholds(Some(10.0), Some(500));
//!
//! state.on_down(None, None, 7, Point::new(0.0, 0.0), 1000);
//! assert!(state.poll_long_press(None, 1200).is_none());
//! let long = state.poll_long_press(None, 1500).unwrap();
//! assert_eq!(long.kind, ActivationKind::LongPress);
//!
//! let up = state.on_up(None, None, &7, Point::new(0.0, 0.0), 1600);
//! assert_eq!(up, PressResult::Suppressed(Some(7)));
//! ```
//!
//! ## Recognition rules
//!
//! 1. **Release on the pressed trigger**: activates, as a long press if the
//!    pointer was held for at least the long-press threshold and no long press
//!    fired yet, otherwise as a plain press.
//! 2. **Release elsewhere**: suppressed. Moving off a trigger is how users
//!    back out of a press.
//! 3. **Slop exceeded**: once the pointer travels farther than the slop
//!    distance from where it went down, the press is canceled for good.
//! 4. **Button mismatch** or **no active press**: suppressed.
//!
//! Each pointer is tracked independently, so two fingers can press two
//! triggers at once.
//!
//! ## Keyboard
//!
//! [`PressState::on_key`] maps Enter and Space to keyboard activations and
//! drops auto-repeat, so holding a key does not flip a toggle back and forth.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;
use kurbo::Point;

/// Pointer identifier for tracking multiple concurrent presses.
pub type PointerId = NonZeroU64;

/// Mouse button identifier.
pub type Button = u8;

const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;
const PRIMARY_BUTTON: Button = 1;

/// How an activation was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    /// Pointer pressed and released on the trigger.
    Press,
    /// Pointer held on the trigger for at least the long-press threshold.
    LongPress,
    /// Enter or Space while the trigger had focus.
    Keyboard,
}

/// A recognized activation of a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation<K> {
    /// The trigger that was activated.
    pub target: K,
    /// How it was activated.
    pub kind: ActivationKind,
}

/// Keys that activate a focused trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKey {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
}

/// Outcome of a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressResult<K> {
    /// The release activated a trigger.
    Activate(Activation<K>),
    /// No activation; carries the pressed trigger if the pointer had one.
    Suppressed(Option<K>),
}

/// State for an active pointer press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Trigger under the pointer when it went down.
    pub target: K,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Timestamp of the press, in milliseconds.
    pub down_time: u64,
    /// Button that was pressed.
    pub button: Button,
    /// True once the pointer moved past the slop distance.
    pub canceled: bool,
    /// True once a long press fired for this press.
    pub long_press_fired: bool,
}

/// Press recognizer for toggle triggers.
///
/// Tracks one [`Press`] per pointer and decides, on release or while held,
/// whether the trigger was activated.
#[derive(Clone, Debug)]
pub struct PressState<K> {
    presses: BTreeMap<PointerId, Press<K>>,
    /// Distance the pointer may travel from its down position before the press
    /// is canceled, or `None` for no limit.
    pub slop: Option<f64>,
    /// Hold duration in milliseconds that makes a press a long press, or `None`
    /// to disable long presses.
    pub long_press_threshold: Option<u64>,
}

impl<K: PartialEq + Clone> PressState<K> {
    /// Create a press state with default thresholds.
    ///
    /// Defaults to a 10-pixel slop and a 500 ms long-press threshold, matching
    /// common native pressable behavior.
    pub fn new() -> Self {
        Self::with_thresholds(Some(10.0), Some(500))
    }

    /// Create a press state with custom thresholds.
    ///
    /// # Arguments
    /// * `slop` - Travel distance that cancels a press, or `None` for unlimited
    /// * `long_press_threshold` - Hold time in milliseconds for a long press, or `None` to disable
    pub fn with_thresholds(slop: Option<f64>, long_press_threshold: Option<u64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            slop,
            long_press_threshold,
        }
    }

    /// Record a pointer down on `target`.
    ///
    /// # Arguments
    /// * `pointer_id` - Pointer identifier, defaults to the primary pointer if None
    /// * `button` - Button that was pressed, defaults to the primary button if None
    /// * `target` - Trigger under the pointer
    /// * `position` - Pointer position
    /// * `timestamp` - Event timestamp in milliseconds
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        button: Option<Button>,
        target: K,
        position: Point,
        timestamp: u64,
    ) {
        let press = Press {
            target,
            down_position: position,
            down_time: timestamp,
            button: button.unwrap_or(PRIMARY_BUTTON),
            canceled: false,
            long_press_fired: false,
        };
        self.presses
            .insert(pointer_id.unwrap_or(PRIMARY_POINTER), press);
    }

    /// Track pointer movement during a press.
    ///
    /// Returns `Some(target)` the first time the pointer leaves the slop
    /// radius, so the host can drop its pressed styling. Later moves return
    /// `None`; the press stays canceled even if the pointer comes back.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<K> {
        let press = self
            .presses
            .get_mut(&pointer_id.unwrap_or(PRIMARY_POINTER))?;
        if press.canceled {
            return None;
        }
        let slop = self.slop?;
        if press.down_position.distance(position) > slop {
            press.canceled = true;
            Some(press.target.clone())
        } else {
            None
        }
    }

    /// Fire a long press if the pointer has been held long enough.
    ///
    /// Hosts call this from a timer or on every frame while a press is active.
    /// Fires at most once per press.
    pub fn poll_long_press(
        &mut self,
        pointer_id: Option<PointerId>,
        now: u64,
    ) -> Option<Activation<K>> {
        let threshold = self.long_press_threshold?;
        let press = self
            .presses
            .get_mut(&pointer_id.unwrap_or(PRIMARY_POINTER))?;
        if press.canceled || press.long_press_fired {
            return None;
        }
        if now.saturating_sub(press.down_time) < threshold {
            return None;
        }
        press.long_press_fired = true;
        Some(Activation {
            target: press.target.clone(),
            kind: ActivationKind::LongPress,
        })
    }

    /// Process a pointer release and decide whether it activates.
    ///
    /// # Arguments
    /// * `pointer_id` - Pointer identifier, defaults to the primary pointer if None
    /// * `button` - Button that was released, defaults to the primary button if None
    /// * `current_target` - Trigger under the pointer at release
    /// * `position` - Pointer position at release
    /// * `timestamp` - Event timestamp in milliseconds
    pub fn on_up(
        &mut self,
        pointer_id: Option<PointerId>,
        button: Option<Button>,
        current_target: &K,
        position: Point,
        timestamp: u64,
    ) -> PressResult<K> {
        let Some(press) = self.presses.remove(&pointer_id.unwrap_or(PRIMARY_POINTER)) else {
            return PressResult::Suppressed(None);
        };

        if press.button != button.unwrap_or(PRIMARY_BUTTON)
            || press.canceled
            || press.long_press_fired
            || press.target != *current_target
        {
            return PressResult::Suppressed(Some(press.target));
        }

        // The release position can exceed the slop even without a move event.
        if self
            .slop
            .is_some_and(|slop| press.down_position.distance(position) > slop)
        {
            return PressResult::Suppressed(Some(press.target));
        }

        let held = timestamp.saturating_sub(press.down_time);
        let kind = if self
            .long_press_threshold
            .is_some_and(|threshold| held >= threshold)
        {
            ActivationKind::LongPress
        } else {
            ActivationKind::Press
        };
        PressResult::Activate(Activation {
            target: press.target,
            kind,
        })
    }

    /// Process an activation key on the focused trigger.
    ///
    /// Auto-repeated key events (`repeat == true`) never activate.
    pub fn on_key(&self, target: K, key: ActivationKey, repeat: bool) -> Option<Activation<K>> {
        if repeat {
            return None;
        }
        match key {
            ActivationKey::Enter | ActivationKey::Space => Some(Activation {
                target,
                kind: ActivationKind::Keyboard,
            }),
        }
    }

    /// Cancel the press for a pointer, for example on pointer cancel or when
    /// the trigger is removed.
    ///
    /// Returns `true` if a press was active.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .remove(&pointer_id.unwrap_or(PRIMARY_POINTER))
            .is_some()
    }

    /// Check if a pointer has an active press.
    pub fn is_pressed(&self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .contains_key(&pointer_id.unwrap_or(PRIMARY_POINTER))
    }

    /// Whether any live (not canceled) press is on `target`.
    ///
    /// Useful for a trigger's "pressed" styling.
    pub fn is_target_pressed(&self, target: &K) -> bool {
        self.presses
            .values()
            .any(|press| !press.canceled && press.target == *target)
    }

    /// Drop all active presses.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// The active press for a pointer, if any.
    pub fn get_press(&self, pointer_id: PointerId) -> Option<&Press<K>> {
        self.presses.get(&pointer_id)
    }
}

impl<K: PartialEq + Clone> Default for PressState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(target: u32, kind: ActivationKind) -> PressResult<u32> {
        PressResult::Activate(Activation { target, kind })
    }

    #[test]
    fn release_on_same_target_activates() {
        let mut state: PressState<u32> = PressState::new();

        state.on_down(None, None, 42, Point::new(10.0, 20.0), 1000);
        let result = state.on_up(None, None, &42, Point::new(12.0, 22.0), 1050);

        assert_eq!(result, activation(42, ActivationKind::Press));
        assert!(!state.is_pressed(None));
    }

    #[test]
    fn release_elsewhere_is_suppressed() {
        let mut state: PressState<u32> = PressState::new();

        state.on_down(None, None, 42, Point::new(10.0, 20.0), 1000);
        let result = state.on_up(None, None, &99, Point::new(10.0, 20.0), 1050);

        assert_eq!(result, PressResult::Suppressed(Some(42)));
    }

    #[test]
    fn wrong_button_is_suppressed() {
        let mut state: PressState<u32> = PressState::new();

        state.on_down(None, None, 42, Point::new(10.0, 20.0), 1000);
        let result = state.on_up(None, Some(2), &42, Point::new(10.0, 20.0), 1050);

        assert_eq!(result, PressResult::Suppressed(Some(42)));
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut state: PressState<u32> = PressState::new();
        let result = state.on_up(None, None, &42, Point::new(10.0, 20.0), 1000);
        assert_eq!(result, PressResult::Suppressed(None));
    }

    #[test]
    fn moving_past_slop_cancels_for_good() {
        let mut state: PressState<u32> = PressState::with_thresholds(Some(5.0), None);

        state.on_down(None, None, 42, Point::new(10.0, 20.0), 1000);
        assert_eq!(state.on_move(None, Point::new(13.0, 23.0)), None); // ~4.24
        assert_eq!(state.on_move(None, Point::new(20.0, 30.0)), Some(42)); // ~14.14
        assert_eq!(state.on_move(None, Point::new(30.0, 40.0)), None);
        assert!(!state.is_target_pressed(&42));

        // Coming back inside the slop does not revive the press.
        let result = state.on_up(None, None, &42, Point::new(10.0, 20.0), 1050);
        assert_eq!(result, PressResult::Suppressed(Some(42)));
    }

    #[test]
    fn release_outside_slop_is_suppressed() {
        let mut state: PressState<u32> = PressState::with_thresholds(Some(5.0), None);
        state.on_down(None, None, 42, Point::new(0.0, 0.0), 1000);
        let result = state.on_up(None, None, &42, Point::new(30.0, 0.0), 1050);
        assert_eq!(result, PressResult::Suppressed(Some(42)));
    }

    #[test]
    fn unlimited_slop_never_cancels() {
        let mut state: PressState<u32> = PressState::with_thresholds(None, None);
        state.on_down(None, None, 42, Point::new(0.0, 0.0), 1000);
        assert_eq!(state.on_move(None, Point::new(500.0, 500.0)), None);
        let result = state.on_up(None, None, &42, Point::new(500.0, 500.0), 1050);
        assert_eq!(result, activation(42, ActivationKind::Press));
    }

    #[test]
    fn long_hold_released_without_polling_is_a_long_press() {
        let mut state: PressState<u32> = PressState::with_thresholds(None, Some(500));
        state.on_down(None, None, 42, Point::new(0.0, 0.0), 1000);
        let result = state.on_up(None, None, &42, Point::new(0.0, 0.0), 1500);
        assert_eq!(result, activation(42, ActivationKind::LongPress));
    }

    #[test]
    fn long_press_fires_once_and_swallows_release() {
        let mut state: PressState<u32> = PressState::with_thresholds(None, Some(500));
        state.on_down(None, None, 42, Point::new(0.0, 0.0), 1000);

        assert!(state.poll_long_press(None, 1499).is_none());
        assert_eq!(
            state.poll_long_press(None, 1500),
            Some(Activation {
                target: 42,
                kind: ActivationKind::LongPress,
            })
        );
        assert!(state.poll_long_press(None, 1600).is_none());

        let result = state.on_up(None, None, &42, Point::new(0.0, 0.0), 1700);
        assert_eq!(result, PressResult::Suppressed(Some(42)));
    }

    #[test]
    fn long_press_disabled_reports_plain_press() {
        let mut state: PressState<u32> = PressState::with_thresholds(None, None);
        state.on_down(None, None, 42, Point::new(0.0, 0.0), 1000);
        assert!(state.poll_long_press(None, 9000).is_none());
        let result = state.on_up(None, None, &42, Point::new(0.0, 0.0), 9000);
        assert_eq!(result, activation(42, ActivationKind::Press));
    }

    #[test]
    fn pointers_are_tracked_independently() {
        let mut state: PressState<u32> = PressState::new();
        let pointer1 = NonZeroU64::new(1).unwrap();
        let pointer2 = NonZeroU64::new(2).unwrap();

        state.on_down(Some(pointer1), None, 42, Point::new(10.0, 20.0), 1000);
        state.on_down(Some(pointer2), None, 99, Point::new(50.0, 60.0), 1010);
        assert!(state.is_target_pressed(&42));
        assert!(state.is_target_pressed(&99));

        let result2 = state.on_up(Some(pointer2), None, &99, Point::new(51.0, 60.0), 1050);
        assert_eq!(result2, activation(99, ActivationKind::Press));
        assert!(state.is_pressed(Some(pointer1)));

        let result1 = state.on_up(Some(pointer1), None, &42, Point::new(10.0, 21.0), 1060);
        assert_eq!(result1, activation(42, ActivationKind::Press));
    }

    #[test]
    fn cancel_and_clear_drop_presses() {
        let mut state: PressState<u32> = PressState::new();
        let pointer2 = NonZeroU64::new(2).unwrap();

        state.on_down(None, None, 42, Point::new(10.0, 20.0), 1000);
        state.on_down(Some(pointer2), None, 99, Point::new(50.0, 60.0), 1010);

        assert!(state.cancel(None));
        assert!(!state.cancel(None));
        assert!(state.get_press(pointer2).is_some());

        state.clear();
        let result = state.on_up(Some(pointer2), None, &99, Point::new(50.0, 60.0), 1080);
        assert_eq!(result, PressResult::Suppressed(None));
    }

    #[test]
    fn keyboard_activation_ignores_repeats() {
        let state: PressState<u32> = PressState::new();
        assert_eq!(
            state.on_key(42, ActivationKey::Space, false),
            Some(Activation {
                target: 42,
                kind: ActivationKind::Keyboard,
            })
        );
        assert!(state.on_key(42, ActivationKey::Enter, true).is_none());
    }
}
