// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named parts of the toggle widget families.
//!
//! A part knows its role and which ancestor it needs. Building its semantics
//! outside that ancestor fails with a [`UsageError`] instead of producing a
//! trigger that silently controls nothing.
//!
//! ```
//! use understory_toggle::context::ItemScope;
//! use understory_toggle::{ToggleConfig, ToggleStore, ToggleValue};
//! use understory_toggle_a11y::parts::{TABS_CONTENT, TABS_TRIGGER};
//! use understory_toggle_a11y::Platform;
//!
//! let tabs: ToggleStore<&str> = ToggleConfig::single()
//!     .default_value(ToggleValue::Single(Some("account")))
//!     .build()
//!     .unwrap();
//! let scope = ItemScope::new(&tabs, &"account");
//!
//! let trigger = TABS_TRIGGER.semantics(Some(&scope), false).unwrap();
//! let props = Platform::Web.adapter().for_item(&trigger);
//! assert!(props.contains("aria-selected"));
//!
//! let err = TABS_CONTENT.semantics::<&str>(None).unwrap_err();
//! assert_eq!(err.to_string(), "`TabsContent` must be used within `Tabs`");
//! ```

use understory_toggle::UsageError;
use understory_toggle::context::{ItemScope, require};

use crate::semantics::{ContentKind, ContentSemantics, ItemFlags, ItemSemantics, Role};

/// A trigger part: something the user presses to toggle an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerPart {
    /// Display name used in usage errors.
    pub component: &'static str,
    /// Name of the ancestor the trigger requires.
    pub ancestor: &'static str,
    /// The trigger's role.
    pub role: Role,
}

/// A content part: the panel a trigger reveals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContentPart {
    /// Display name used in usage errors.
    pub component: &'static str,
    /// Name of the ancestor the content requires.
    pub ancestor: &'static str,
    /// The panel's kind.
    pub kind: ContentKind,
}

/// Accordion header button.
pub const ACCORDION_TRIGGER: TriggerPart = TriggerPart {
    component: "AccordionTrigger",
    ancestor: "AccordionItem",
    role: Role::Disclosure,
};

/// Accordion item body.
pub const ACCORDION_CONTENT: ContentPart = ContentPart {
    component: "AccordionContent",
    ancestor: "AccordionItem",
    kind: ContentKind::Region,
};

/// Tab in a tab list.
pub const TABS_TRIGGER: TriggerPart = TriggerPart {
    component: "TabsTrigger",
    ancestor: "Tabs",
    role: Role::Tab,
};

/// Panel for a tab.
pub const TABS_CONTENT: ContentPart = ContentPart {
    component: "TabsContent",
    ancestor: "Tabs",
    kind: ContentKind::TabPanel,
};

/// Radio button in a radio group.
pub const RADIO_GROUP_ITEM: TriggerPart = TriggerPart {
    component: "RadioGroupItem",
    ancestor: "RadioGroup",
    role: Role::Radio,
};

/// Button that opens a dialog.
pub const DIALOG_TRIGGER: TriggerPart = TriggerPart {
    component: "DialogTrigger",
    ancestor: "Dialog",
    role: Role::DialogTrigger,
};

/// Dialog body.
pub const DIALOG_CONTENT: ContentPart = ContentPart {
    component: "DialogContent",
    ancestor: "Dialog",
    kind: ContentKind::Dialog,
};

/// Button that opens an alert dialog.
pub const ALERT_DIALOG_TRIGGER: TriggerPart = TriggerPart {
    component: "AlertDialogTrigger",
    ancestor: "AlertDialog",
    role: Role::DialogTrigger,
};

/// Alert dialog body.
pub const ALERT_DIALOG_CONTENT: ContentPart = ContentPart {
    component: "AlertDialogContent",
    ancestor: "AlertDialog",
    kind: ContentKind::AlertDialog,
};

/// Button that opens a drawer.
pub const DRAWER_TRIGGER: TriggerPart = TriggerPart {
    component: "DrawerTrigger",
    ancestor: "Drawer",
    role: Role::DialogTrigger,
};

/// Drawer body.
pub const DRAWER_CONTENT: ContentPart = ContentPart {
    component: "DrawerContent",
    ancestor: "Drawer",
    kind: ContentKind::Dialog,
};

impl TriggerPart {
    /// Semantics for this trigger inside `scope`.
    ///
    /// `focused` feeds only the cosmetic focus flag. Roving roles get
    /// [`ItemFlags::TAB_STOP`] from the scope's tab stop, or from the item's
    /// active state when the scope has none; build scopes with
    /// [`ItemScope::roving`] so a group without a selection stays reachable.
    /// Use [`ItemSemantics::with_controls`] to name the content panel.
    pub fn semantics<K: PartialEq>(
        &self,
        scope: Option<&ItemScope<'_, K>>,
        focused: bool,
    ) -> Result<ItemSemantics, UsageError> {
        let scope = require(scope, self.component, self.ancestor)?;
        let state = scope.state();
        let mut flags = ItemFlags::from_state(state, focused);
        if self.role.is_roving() {
            flags.set(ItemFlags::TAB_STOP, scope.tab_stop.unwrap_or(state.is_active));
        }
        Ok(ItemSemantics {
            role: self.role,
            flags,
            controls: None,
        })
    }
}

impl ContentPart {
    /// Semantics for this content inside `scope`.
    ///
    /// Use [`ContentSemantics::with_labelled_by`] to name the labelling trigger.
    pub fn semantics<K: PartialEq>(
        &self,
        scope: Option<&ItemScope<'_, K>>,
    ) -> Result<ContentSemantics, UsageError> {
        let scope = require(scope, self.component, self.ancestor)?;
        Ok(ContentSemantics {
            kind: self.kind,
            flags: ItemFlags::from_state(scope.state(), false),
            labelled_by: None,
        })
    }
}
