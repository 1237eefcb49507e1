// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: interaction recognizers for toggle triggers.
//!
//! These state machines sit between raw input events and a toggle gate. They
//! decide *whether* an interaction happened; what it does to a selection is
//! left to the caller (for example `understory_toggle::request_toggle`).
//!
//! - [`press`]: pointer press, long press, and keyboard activation, with
//!   slop-based cancelation and multi-pointer tracking.
//! - [`hover`]: delayed open/close requests for hover cards and tooltips.
//!
//! Both are driven by caller-supplied millisecond timestamps and own no
//! timers, so they are deterministic under test.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hover;
pub mod press;
