// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral description of what a part means.
//!
//! Adapters translate these into platform props; nothing here knows about
//! ARIA or native accessibility APIs.

use alloc::borrow::Cow;

use understory_toggle::ItemState;

bitflags::bitflags! {
    /// Semantic state flags for a trigger or content part.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Selected, expanded, checked, or open, depending on the role.
        const ACTIVE = 1 << 0;
        /// Renders as disabled.
        const DISABLED = 1 << 1;
        /// Currently holds input focus. Cosmetic only.
        const FOCUSED = 1 << 2;
        /// Holds the group's single tab stop (roving roles only).
        const TAB_STOP = 1 << 3;
    }
}

impl ItemFlags {
    /// Flags for an item's derived state plus its focus.
    pub fn from_state(state: ItemState, focused: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::ACTIVE, state.is_active);
        flags.set(Self::DISABLED, state.is_disabled);
        flags.set(Self::FOCUSED, focused);
        flags
    }
}

/// What kind of control a trigger is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Expands a region in place (accordion and collapsible triggers).
    Disclosure,
    /// Opens a dialog, drawer, or alert dialog.
    DialogTrigger,
    /// A tab in a tab list.
    Tab,
    /// A radio button in a radio group.
    Radio,
}

impl Role {
    /// The `data-state` token for an active or inactive trigger.
    pub fn state_token(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Disclosure | Self::DialogTrigger, true) => "open",
            (Self::Disclosure | Self::DialogTrigger, false) => "closed",
            (Self::Tab, true) => "active",
            (Self::Tab, false) => "inactive",
            (Self::Radio, true) => "checked",
            (Self::Radio, false) => "unchecked",
        }
    }

    /// Whether items with this role share a single tab stop.
    pub fn is_roving(self) -> bool {
        matches!(self, Self::Tab | Self::Radio)
    }
}

/// Layout direction of a group, used for arrow-key mapping and announced to
/// assistive technology.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items laid out left to right.
    Horizontal,
    /// Items laid out top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// Lowercase token, as used by `aria-orientation`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// What kind of container a group root is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupRole {
    /// A stack of disclosures. Has no landmark role of its own.
    Accordion,
    /// A tab list.
    TabList,
    /// A radio group.
    RadioGroup,
}

/// Semantics of a trigger item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSemantics {
    /// The trigger's role.
    pub role: Role,
    /// Derived state flags.
    pub flags: ItemFlags,
    /// Identifier of the content this trigger controls, if any.
    pub controls: Option<Cow<'static, str>>,
}

impl ItemSemantics {
    /// Name the content this trigger controls.
    pub fn with_controls(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.controls = Some(id.into());
        self
    }
}

/// Semantics of a group root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupSemantics {
    /// The group's role.
    pub role: GroupRole,
    /// Whether the whole group is disabled.
    pub disabled: bool,
    /// Layout direction.
    pub orientation: Orientation,
}

/// What kind of panel a content part is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// The region revealed by an accordion or collapsible trigger.
    Region,
    /// The panel for a tab.
    TabPanel,
    /// A modal dialog or drawer.
    Dialog,
    /// A modal dialog that interrupts with an important message.
    AlertDialog,
}

impl ContentKind {
    /// The `data-state` token for shown or hidden content.
    pub fn state_token(self, shown: bool) -> &'static str {
        match (self, shown) {
            (Self::TabPanel, true) => "active",
            (Self::TabPanel, false) => "inactive",
            (_, true) => "open",
            (_, false) => "closed",
        }
    }

    /// Whether the content traps interaction while shown.
    pub fn is_modal(self) -> bool {
        matches!(self, Self::Dialog | Self::AlertDialog)
    }
}

/// Semantics of a content part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSemantics {
    /// The panel's kind.
    pub kind: ContentKind,
    /// `ACTIVE` when shown; `DISABLED` mirrors the owning item.
    pub flags: ItemFlags,
    /// Identifier of the trigger that labels this content, if any.
    pub labelled_by: Option<Cow<'static, str>>,
}

impl ContentSemantics {
    /// Name the trigger that labels this content.
    pub fn with_labelled_by(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }
}
