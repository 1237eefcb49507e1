// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "As child" rendering: merge a part's props onto a caller element.
//!
//! A part normally renders its own element (a trigger renders a `button`).
//! When the caller supplies a child instead, the part's props are merged onto
//! that child and the child's element kind is kept.
//!
//! Merge rules:
//!
//! - The child's props win over the slot's for the same key.
//! - `class` values are concatenated, slot first, so both sets of styles apply.
//!
//! ```
//! use understory_toggle_a11y::props::{PropBag, PropValue};
//! use understory_toggle_a11y::slot::{Element, Slot};
//!
//! let slot = Slot::new("button", PropBag::new().with("aria-expanded", true).with("class", "trigger"));
//!
//! // Default rendering.
//! let own = slot.clone().render(None);
//! assert_eq!(own.tag, "button");
//!
//! // As child: keep the caller's `a`, merge classes.
//! let link = Element::new("a", PropBag::new().with("href", "/faq").with("class", "link"));
//! let merged = slot.render(Some(link));
//! assert_eq!(merged.tag, "a");
//! assert_eq!(merged.props.get("class"), Some(&PropValue::from("trigger link")));
//! assert_eq!(merged.props.get("aria-expanded"), Some(&PropValue::Bool(true)));
//! ```

use alloc::borrow::Cow;
use alloc::format;

use crate::props::{PropBag, PropValue};

const CLASS: &str = "class";

/// A renderable element: an element kind plus its props.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Element kind, such as a DOM tag or a native view name.
    pub tag: Cow<'static, str>,
    /// Props to render with.
    pub props: PropBag,
}

impl Element {
    /// An element of kind `tag`.
    pub fn new(tag: impl Into<Cow<'static, str>>, props: PropBag) -> Self {
        Self {
            tag: tag.into(),
            props,
        }
    }
}

/// A part's built-in element and the props it must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    tag: Cow<'static, str>,
    props: PropBag,
}

impl Slot {
    /// A slot that renders `tag` by default.
    pub fn new(tag: impl Into<Cow<'static, str>>, props: PropBag) -> Self {
        Self {
            tag: tag.into(),
            props,
        }
    }

    /// Render the built-in element, or merge onto `child` when one is given.
    pub fn render(self, child: Option<Element>) -> Element {
        let Some(child) = child else {
            return Element {
                tag: self.tag,
                props: self.props,
            };
        };
        Element {
            tag: child.tag,
            props: merge_props(self.props, child.props),
        }
    }
}

/// Merge `child` props over `slot` props.
pub fn merge_props(slot: PropBag, child: PropBag) -> PropBag {
    let mut merged = slot;
    for (key, value) in child.iter() {
        let value = match (key, merged.get(key), value) {
            (CLASS, Some(PropValue::Str(ours)), PropValue::Str(theirs)) => {
                PropValue::from(format!("{ours} {theirs}"))
            }
            _ => value.clone(),
        };
        merged.set(key, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn child_wins_for_plain_props() {
        let slot = PropBag::new().with("tabindex", 0_i64).with("data-state", "open");
        let child = PropBag::new().with("tabindex", -1_i64);
        let merged = merge_props(slot, child);
        assert_eq!(merged.get("tabindex"), Some(&PropValue::Int(-1)));
        assert_eq!(merged.get("data-state"), Some(&PropValue::from("open")));
    }

    #[test]
    fn slot_keys_keep_their_position() {
        let slot = PropBag::new().with("role", "tab").with("class", "a");
        let child = PropBag::new().with("id", "t1").with("class", "b");
        let merged = merge_props(slot, child);
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["role", "class", "id"]);
        assert_eq!(merged.get("class"), Some(&PropValue::from("a b")));
    }

    #[test]
    fn class_only_on_child_is_copied() {
        let merged = merge_props(PropBag::new(), PropBag::new().with("class", "solo"));
        assert_eq!(merged.get("class"), Some(&PropValue::from("solo")));
    }
}
