// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent: delayed open/close for hover cards and tooltips.
//!
//! A hover card should not flash open when the pointer merely crosses its
//! trigger, and should not vanish while the pointer travels from the trigger
//! to the card. [`HoverIntent`] turns enter/leave events into open and close
//! requests that only fire after a delay, and cancels a pending request when
//! the pointer changes its mind.
//!
//! The recognizer owns no timers. Hosts feed it timestamps and call
//! [`HoverIntent::poll`] whenever a deadline may have passed (see
//! [`HoverIntent::deadline`]); a `Some(open)` result is the request to apply,
//! typically through an explicit open-change on the disclosure's store. The
//! store itself is never delayed: the delay happens before the request exists.
//!
//! ```
//! use understory_event_state::hover::HoverIntent;
//!
//! let mut intent = HoverIntent::with_delays(700, 300);
//!
//! intent.on_enter(1000);
//! assert_eq!(intent.poll(1500), None);
//! assert_eq!(intent.poll(1700), Some(true));
//!
//! // Leaving and coming back before the close delay keeps the card open.
//! intent.on_leave(2000);
//! intent.on_enter(2200);
//! assert_eq!(intent.poll(2400), None);
//! assert!(intent.is_open());
//! ```

/// Default delay before opening, in milliseconds.
pub const DEFAULT_OPEN_DELAY: u64 = 700;

/// Default delay before closing, in milliseconds.
pub const DEFAULT_CLOSE_DELAY: u64 = 300;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Pending {
    open: bool,
    due: u64,
}

/// Delayed open/close recognizer.
#[derive(Clone, Debug)]
pub struct HoverIntent {
    /// Milliseconds the pointer must stay before an open request fires.
    pub open_delay: u64,
    /// Milliseconds the pointer must stay away before a close request fires.
    pub close_delay: u64,
    open: bool,
    pending: Option<Pending>,
}

impl HoverIntent {
    /// Recognizer with the default 700 ms open and 300 ms close delays.
    pub fn new() -> Self {
        Self::with_delays(DEFAULT_OPEN_DELAY, DEFAULT_CLOSE_DELAY)
    }

    /// Recognizer with custom delays in milliseconds.
    pub fn with_delays(open_delay: u64, close_delay: u64) -> Self {
        Self {
            open_delay,
            close_delay,
            open: false,
            pending: None,
        }
    }

    /// Pointer entered the trigger or the card.
    pub fn on_enter(&mut self, now: u64) {
        self.pending = (!self.open).then(|| Pending {
            open: true,
            due: now.saturating_add(self.open_delay),
        });
    }

    /// Pointer left the trigger or the card.
    pub fn on_leave(&mut self, now: u64) {
        self.pending = self.open.then(|| Pending {
            open: false,
            due: now.saturating_add(self.close_delay),
        });
    }

    /// Fire the pending request if its deadline has passed.
    ///
    /// Returns the requested open state.
    pub fn poll(&mut self, now: u64) -> Option<bool> {
        let pending = self.pending.filter(|pending| now >= pending.due)?;
        self.pending = None;
        self.open = pending.open;
        Some(pending.open)
    }

    /// When the next request would fire, if one is pending.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|pending| pending.due)
    }

    /// Whether the recognizer believes the card is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tell the recognizer the card's actual state, for example after it was
    /// dismissed with Escape or opened from the keyboard. Drops any pending
    /// request.
    pub fn sync_open(&mut self, open: bool) {
        self.open = open;
        self.pending = None;
    }
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_after_delay() {
        let mut intent = HoverIntent::with_delays(100, 50);
        intent.on_enter(0);
        assert_eq!(intent.deadline(), Some(100));
        assert_eq!(intent.poll(99), None);
        assert_eq!(intent.poll(100), Some(true));
        assert_eq!(intent.poll(200), None);
        assert!(intent.is_open());
    }

    #[test]
    fn quick_pass_never_opens() {
        let mut intent = HoverIntent::with_delays(100, 50);
        intent.on_enter(0);
        intent.on_leave(40);
        assert_eq!(intent.deadline(), None);
        assert_eq!(intent.poll(500), None);
        assert!(!intent.is_open());
    }

    #[test]
    fn closes_after_delay() {
        let mut intent = HoverIntent::with_delays(0, 50);
        intent.on_enter(0);
        assert_eq!(intent.poll(0), Some(true));
        intent.on_leave(10);
        assert_eq!(intent.poll(59), None);
        assert_eq!(intent.poll(60), Some(false));
        assert!(!intent.is_open());
    }

    #[test]
    fn reentering_cancels_pending_close() {
        let mut intent = HoverIntent::with_delays(0, 50);
        intent.on_enter(0);
        intent.poll(0);
        intent.on_leave(10);
        intent.on_enter(30);
        assert_eq!(intent.poll(100), None);
        assert!(intent.is_open());
    }

    #[test]
    fn sync_drops_pending_request() {
        let mut intent = HoverIntent::new();
        intent.on_enter(0);
        intent.sync_open(true);
        assert_eq!(intent.poll(10_000), None);
        intent.on_leave(10_000);
        assert_eq!(intent.deadline(), Some(10_000 + DEFAULT_CLOSE_DELAY));
    }
}
