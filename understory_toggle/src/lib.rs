// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Toggle: selection state for toggle widgets.
//!
//! Accordions, tabs, radio groups, dialogs, drawers, and hover cards all answer
//! the same question: which of my items are active right now? This crate
//! models that question once, independent of any rendering layer:
//!
//! - [`ToggleStore`]: the **selection store**. Holds a single key, a set of
//!   keys, or an open flag ([`SelectionMode`]) and runs either
//!   **controlled** (the host owns the value and receives change requests) or
//!   **uncontrolled** (the store owns the value). Built with [`ToggleConfig`].
//! - [`derive_item_state`]: the **item coordinator**. Per-render
//!   [`ItemState`] for one key, combining the store with [`ItemOverrides`].
//! - [`gate`]: the **interaction gate**. [`request_toggle`] and friends turn
//!   one user interaction into at most one change, honoring disabled flags and
//!   the single-mode collapse rule.
//! - [`roving`]: arrow-key focus movement among items, with optional
//!   select-on-focus.
//! - [`context`]: explicit ancestor lookup for parts such as triggers and
//!   content panels.
//!
//! ## Minimal example
//!
//! An uncontrolled multiple-selection accordion:
//!
//! ```rust
//! use understory_toggle::{ItemOverrides, ToggleConfig, request_toggle};
//!
//! let mut accordion = ToggleConfig::multiple().build().unwrap();
//! let none = ItemOverrides::default();
//!
//! request_toggle(&mut accordion, Some(&"a"), &none);
//! request_toggle(&mut accordion, Some(&"b"), &none);
//! request_toggle(&mut accordion, Some(&"a"), &none);
//!
//! let open: Vec<_> = accordion.value().as_multiple().unwrap().iter().copied().collect();
//! assert_eq!(open, ["b"]);
//! ```
//!
//! ## Controlled stores
//!
//! A controlled store never moves on its own. The host applies the change it
//! is told about and hands the new value back on its next render:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_toggle::{ItemOverrides, ToggleConfig, ToggleValue, request_toggle};
//!
//! let requested = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&requested);
//! let mut dialog = ToggleConfig::<()>::boolean()
//!     .value(ToggleValue::Boolean(false))
//!     .on_change(move |v| sink.set(v.as_open()))
//!     .build()
//!     .unwrap();
//!
//! request_toggle(&mut dialog, None, &ItemOverrides::default());
//! assert_eq!(requested.get(), Some(true));
//! // Still closed until the host re-renders with the new prop.
//! assert_eq!(dialog.value(), &ToggleValue::Boolean(false));
//!
//! dialog.sync_value(Some(ToggleValue::Boolean(true)));
//! assert_eq!(dialog.value(), &ToggleValue::Boolean(true));
//! ```
//!
//! ## Errors
//!
//! Misconfiguration fails when the store is built ([`ConfigError`]), and a
//! part built without its ancestor fails when it is built ([`UsageError`]).
//! Once a store exists, every request is total.
//!
//! ## Logging
//!
//! Accepted changes are logged at `trace`, dropped requests at `debug`, and a
//! store switching between controlled and uncontrolled is reported with `warn`
//! in debug builds, all through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod context;
pub mod gate;
pub mod roving;

mod error;
mod item;
mod store;
mod value;

pub use error::{ConfigError, UsageError};
pub use gate::{ToggleOutcome, request_open_change, request_select, request_toggle};
pub use item::{ItemOverrides, ItemState, derive_item_state};
pub use store::{OnChange, ToggleConfig, ToggleStore};
pub use value::{KeySet, SelectionMode, ToggleValue};
