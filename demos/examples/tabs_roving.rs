// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab list with roving focus and automatic activation.
//!
//! Arrow keys move focus across enabled tabs and select as they go. The last
//! tab renders "as child" onto a caller-provided link, so its ARIA props are
//! merged onto an `a` element instead of the default `button`.
//!
//! Run:
//! - `cargo run -p understory_demos --example tabs_roving`

use understory_toggle::context::ItemScope;
use understory_toggle::roving::{ActivationMode, Navigation, RovingItem, WrapMode, navigate};
use understory_toggle::{ToggleConfig, ToggleStore, ToggleValue};
use understory_toggle_a11y::parts::TABS_TRIGGER;
use understory_toggle_a11y::semantics::{GroupRole, GroupSemantics, Orientation};
use understory_toggle_a11y::slot::{Element, Slot};
use understory_toggle_a11y::{Platform, PropBag};

fn tabs() -> [RovingItem<&'static str>; 4] {
    [
        RovingItem::new("account"),
        RovingItem::new("password"),
        RovingItem::new("billing").disabled(true),
        RovingItem::new("help"),
    ]
}

fn render(store: &ToggleStore<&'static str>, focused: Option<&'static str>) {
    let adapter = Platform::Web.adapter();
    let group = GroupSemantics {
        role: GroupRole::TabList,
        disabled: store.is_disabled(),
        orientation: Orientation::Horizontal,
    };
    println!("<div {}>", attrs(&adapter.for_group(&group)));

    let items = tabs();
    for item in &items {
        // Overrides and the single tab stop both come from the item list.
        let scope = ItemScope::roving(store, &item.key, &items);
        let semantics = match TABS_TRIGGER.semantics(Some(&scope), focused == Some(item.key)) {
            Ok(semantics) => semantics,
            Err(err) => {
                log::error!("{err}");
                continue;
            }
        };
        let slot = Slot::new("button", adapter.for_item(&semantics));
        let child = (item.key == "help").then(|| {
            let link = PropBag::new().with("href", "/help").with("class", "tab-link");
            Element::new("a", link)
        });
        let element = slot.render(child);
        println!("  <{} {}>{}</{}>", element.tag, attrs(&element.props), item.key, element.tag);
    }
    println!("</div>");
}

fn attrs(props: &PropBag) -> String {
    props
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(text) => format!("{key}=\"{text}\""),
            None => format!("{key}={value:?}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    env_logger::init();

    let mut store = ToggleConfig::single()
        .default_value(ToggleValue::Single(Some("account")))
        .on_change(|value| log::info!("selected tab: {:?}", value.as_single()))
        .build()
        .expect("valid tabs configuration");
    let items = tabs();
    let mut focused = Some("account");

    render(&store, focused);

    for navigation in [Navigation::Next, Navigation::Next, Navigation::Next, Navigation::Prev] {
        let (next, outcome) = navigate(
            &mut store,
            &items,
            focused.as_ref(),
            navigation,
            WrapMode::Wrap,
            ActivationMode::Automatic,
        );
        println!("{navigation:?} -> {next:?} ({outcome:?})");
        if next.is_some() {
            focused = next;
        }
    }

    render(&store, focused);
}
