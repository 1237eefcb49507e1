// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility adapters: semantics in, platform props out.
//!
//! The same toggle widgets render on the web (ARIA attributes on DOM nodes)
//! and on native mobile (accessibility props on native views). Business logic
//! never branches on the platform; the host picks one [`Platform`] at startup
//! and asks its adapter for prop bags.
//!
//! ## Web output
//!
//! | Part | Props |
//! |------|-------|
//! | Trigger | `role`, `aria-expanded` / `aria-selected` / `aria-checked`, `aria-controls`, `aria-disabled`, `tabindex` (roving roles, `0` on the tab stop), `data-state`, `data-disabled`, `data-focus-visible` |
//! | Group | `role` (`tablist` / `radiogroup`), `aria-orientation`, `aria-disabled`, `data-orientation` |
//! | Content | `role`, `aria-labelledby`, `aria-modal`, `hidden`, `data-state` |
//!
//! ## Native output
//!
//! | Part | Props |
//! |------|-------|
//! | Trigger | `accessible`, `accessibilityRole`, `accessibilityState.{expanded,selected,checked,disabled}`, `focusable` |
//! | Group | `accessibilityRole` (`tablist` / `radiogroup`), `accessibilityState.disabled` |
//! | Content | `accessibilityViewIsModal`, `importantForAccessibility`, `accessibilityElementsHidden` |

use crate::props::PropBag;
use crate::semantics::{
    ContentKind, ContentSemantics, GroupRole, GroupSemantics, ItemFlags, ItemSemantics, Role,
};

/// Maps platform-neutral semantics to a platform prop bag.
pub trait AccessibilityAdapter {
    /// Props for a trigger item.
    fn for_item(&self, item: &ItemSemantics) -> PropBag;

    /// Props for a group root.
    fn for_group(&self, group: &GroupSemantics) -> PropBag;

    /// Props for a content panel.
    fn for_content(&self, content: &ContentSemantics) -> PropBag;
}

/// Target platform, chosen once when the host starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// DOM with ARIA.
    Web,
    /// Native views with mobile accessibility props.
    Native,
}

static WEB: WebAdapter = WebAdapter;
static NATIVE: NativeAdapter = NativeAdapter;

impl Platform {
    /// The adapter for this platform.
    pub fn adapter(self) -> &'static dyn AccessibilityAdapter {
        match self {
            Self::Web => &WEB,
            Self::Native => &NATIVE,
        }
    }
}

/// ARIA attributes for DOM rendering.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebAdapter;

impl AccessibilityAdapter for WebAdapter {
    fn for_item(&self, item: &ItemSemantics) -> PropBag {
        let active = item.flags.contains(ItemFlags::ACTIVE);
        let disabled = item.flags.contains(ItemFlags::DISABLED);
        let mut props = PropBag::new();

        match item.role {
            Role::Disclosure => {
                props.set("aria-expanded", active);
            }
            Role::DialogTrigger => {
                props.set("aria-haspopup", "dialog");
                props.set("aria-expanded", active);
            }
            Role::Tab => {
                props.set("role", "tab");
                props.set("aria-selected", active);
            }
            Role::Radio => {
                props.set("role", "radio");
                props.set("aria-checked", active);
            }
        }
        if let Some(controls) = &item.controls {
            props.set("aria-controls", controls.clone());
        }
        if disabled {
            props.set("aria-disabled", true);
        }
        if item.role.is_roving() {
            let tab_stop = item.flags.contains(ItemFlags::TAB_STOP);
            props.set("tabindex", if tab_stop { 0_i64 } else { -1 });
        }
        props.set("data-state", item.role.state_token(active));
        if disabled {
            props.set("data-disabled", "");
        }
        if item.flags.contains(ItemFlags::FOCUSED) {
            props.set("data-focus-visible", "");
        }
        props
    }

    fn for_group(&self, group: &GroupSemantics) -> PropBag {
        let mut props = PropBag::new();
        match group.role {
            GroupRole::Accordion => {}
            GroupRole::TabList => {
                props.set("role", "tablist");
                props.set("aria-orientation", group.orientation.token());
            }
            GroupRole::RadioGroup => {
                props.set("role", "radiogroup");
                props.set("aria-orientation", group.orientation.token());
            }
        }
        if group.disabled {
            props.set("aria-disabled", true);
            props.set("data-disabled", "");
        }
        props.set("data-orientation", group.orientation.token());
        props
    }

    fn for_content(&self, content: &ContentSemantics) -> PropBag {
        let shown = content.flags.contains(ItemFlags::ACTIVE);
        let mut props = PropBag::new();
        props.set(
            "role",
            match content.kind {
                ContentKind::Region => "region",
                ContentKind::TabPanel => "tabpanel",
                ContentKind::Dialog => "dialog",
                ContentKind::AlertDialog => "alertdialog",
            },
        );
        if let Some(labelled_by) = &content.labelled_by {
            props.set("aria-labelledby", labelled_by.clone());
        }
        if content.kind.is_modal() {
            props.set("aria-modal", true);
        }
        if !shown {
            props.set("hidden", true);
        }
        props.set("data-state", content.kind.state_token(shown));
        if content.flags.contains(ItemFlags::DISABLED) {
            props.set("data-disabled", "");
        }
        props
    }
}

/// Accessibility props for native mobile views.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeAdapter;

impl AccessibilityAdapter for NativeAdapter {
    fn for_item(&self, item: &ItemSemantics) -> PropBag {
        let active = item.flags.contains(ItemFlags::ACTIVE);
        let disabled = item.flags.contains(ItemFlags::DISABLED);
        let mut props = PropBag::new();

        props.set("accessible", true);
        match item.role {
            Role::Disclosure | Role::DialogTrigger => {
                props.set("accessibilityRole", "button");
                props.set("accessibilityState.expanded", active);
            }
            Role::Tab => {
                props.set("accessibilityRole", "tab");
                props.set("accessibilityState.selected", active);
            }
            Role::Radio => {
                props.set("accessibilityRole", "radio");
                props.set("accessibilityState.checked", active);
            }
        }
        props.set("accessibilityState.disabled", disabled);
        props.set("focusable", !disabled);
        props
    }

    fn for_group(&self, group: &GroupSemantics) -> PropBag {
        let mut props = PropBag::new();
        match group.role {
            GroupRole::Accordion => {}
            GroupRole::TabList => props.set("accessibilityRole", "tablist"),
            GroupRole::RadioGroup => props.set("accessibilityRole", "radiogroup"),
        }
        props.set("accessibilityState.disabled", group.disabled);
        props
    }

    fn for_content(&self, content: &ContentSemantics) -> PropBag {
        let shown = content.flags.contains(ItemFlags::ACTIVE);
        let mut props = PropBag::new();
        if content.kind.is_modal() {
            props.set("accessibilityViewIsModal", shown);
        }
        if !shown {
            // Android and iOS each need their own hint to skip hidden subtrees.
            props.set("importantForAccessibility", "no-hide-descendants");
            props.set("accessibilityElementsHidden", true);
        }
        props
    }
}
