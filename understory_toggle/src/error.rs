// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Both kinds report programmer misuse. Neither is recoverable at runtime; the
//! call site has to be fixed.

use crate::value::SelectionMode;

/// A store was configured inconsistently.
///
/// Returned by [`ToggleConfig::build`](crate::ToggleConfig::build), before any
/// toggle request can be made against the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Both a controlled `value` and an uncontrolled `default_value` were supplied.
    #[error("both `value` and `default_value` were supplied to one store")]
    ConflictingValues,
    /// A value's shape does not match the store's selection mode.
    #[error("a {found} value was supplied to a {mode} store")]
    ModeMismatch {
        /// Mode the store was configured with.
        mode: SelectionMode,
        /// Mode implied by the supplied value.
        found: SelectionMode,
    },
}

/// A part was built outside the ancestor it depends on.
///
/// For example, an accordion trigger constructed without an accordion item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{component}` must be used within `{ancestor}`")]
pub struct UsageError {
    /// The part that was being built.
    pub component: &'static str,
    /// The ancestor it requires.
    pub ancestor: &'static str,
}
