// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Toggle A11y: platform accessibility props for toggle widgets.
//!
//! `understory_toggle` decides which items are active; this crate describes
//! what that means to assistive technology on each platform.
//!
//! - [`semantics`]: platform-neutral descriptions ([`ItemSemantics`],
//!   [`GroupSemantics`], [`ContentSemantics`]) built from semantic
//!   [`ItemFlags`].
//! - [`adapter`]: the [`AccessibilityAdapter`] trait with a web (ARIA) and a
//!   native variant. Pick one [`Platform`] at startup; widget code only ever
//!   talks to the trait.
//! - [`parts`]: named parts (accordion trigger, tab panel, dialog content, …)
//!   that require their ancestor and build semantics from an
//!   [`ItemScope`](understory_toggle::context::ItemScope).
//! - [`slot`]: the "as child" pattern, merging a part's props onto a
//!   caller-supplied element.
//! - [`props`]: the [`PropBag`] every adapter returns.
//!
//! ## Example
//!
//! ```
//! use understory_toggle::context::ItemScope;
//! use understory_toggle::{ToggleConfig, ToggleStore};
//! use understory_toggle_a11y::parts::ACCORDION_TRIGGER;
//! use understory_toggle_a11y::props::PropValue;
//! use understory_toggle_a11y::Platform;
//!
//! let accordion: ToggleStore<&str> = ToggleConfig::single().collapsible(true).build().unwrap();
//! let scope = ItemScope::new(&accordion, &"shipping");
//!
//! let trigger = ACCORDION_TRIGGER.semantics(Some(&scope), false).unwrap();
//! let web = Platform::Web.adapter().for_item(&trigger);
//! let native = Platform::Native.adapter().for_item(&trigger);
//!
//! assert_eq!(web.get("aria-expanded"), Some(&PropValue::Bool(false)));
//! assert_eq!(native.get("accessibilityState.expanded"), Some(&PropValue::Bool(false)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod parts;
pub mod props;
pub mod semantics;
pub mod slot;

pub use adapter::{AccessibilityAdapter, NativeAdapter, Platform, WebAdapter};
pub use props::{PropBag, PropValue};
pub use semantics::{
    ContentKind, ContentSemantics, GroupRole, GroupSemantics, ItemFlags, ItemSemantics,
    Orientation, Role,
};
