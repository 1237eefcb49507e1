// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion driven by pointer, long-press, and keyboard activations.
//!
//! This example shows how to combine:
//! - `understory_event_state::press` to recognize activations from raw input,
//! - `understory_toggle` to apply them to a single-selection, collapsible store,
//! - `understory_toggle_a11y` to render ARIA props for each trigger.
//!
//! Run:
//! - `cargo run -p understory_demos --example accordion_press`

use kurbo::Point;
use understory_event_state::press::{ActivationKey, PressResult, PressState};
use understory_toggle::context::ItemScope;
use understory_toggle::{ItemOverrides, ToggleConfig, ToggleStore, request_toggle};
use understory_toggle_a11y::parts::ACCORDION_TRIGGER;
use understory_toggle_a11y::{Platform, PropBag};

const ITEMS: [&str; 3] = ["shipping", "returns", "warranty"];

fn overrides(key: &str) -> ItemOverrides {
    // Warranty details are not available yet.
    if key == "warranty" {
        ItemOverrides::disabled(true)
    } else {
        ItemOverrides::default()
    }
}

fn render(store: &ToggleStore<&'static str>) {
    let adapter = Platform::Web.adapter();
    for key in ITEMS {
        let scope = ItemScope::new(store, &key).with_overrides(overrides(key));
        let props: PropBag = match ACCORDION_TRIGGER.semantics(Some(&scope), false) {
            Ok(semantics) => adapter.for_item(&semantics),
            Err(err) => {
                log::error!("{err}");
                continue;
            }
        };
        let attrs: Vec<String> = props.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
        println!("  <button {}>{key}</button>", attrs.join(" "));
    }
}

fn main() {
    env_logger::init();

    let mut accordion = ToggleConfig::single()
        .collapsible(true)
        .on_change(|value| println!("on_value_change({:?})", value.as_single()))
        .build()
        .expect("valid accordion configuration");
    let mut presses: PressState<&'static str> = PressState::new();

    println!("initial:");
    render(&accordion);

    // Tap "shipping".
    presses.on_down(None, None, "shipping", Point::new(10.0, 10.0), 0);
    if let PressResult::Activate(activation) =
        presses.on_up(None, None, &"shipping", Point::new(12.0, 11.0), 90)
    {
        request_toggle(&mut accordion, Some(&activation.target), &overrides(activation.target));
    }

    // Long-press "returns": fires while held, the release is swallowed.
    presses.on_down(None, None, "returns", Point::new(10.0, 50.0), 1000);
    if let Some(activation) = presses.poll_long_press(None, 1600) {
        request_toggle(&mut accordion, Some(&activation.target), &overrides(activation.target));
    }
    let release = presses.on_up(None, None, &"returns", Point::new(10.0, 50.0), 1700);
    assert!(matches!(release, PressResult::Suppressed(_)));

    // Keyboard on "returns" collapses it again.
    if let Some(activation) = presses.on_key("returns", ActivationKey::Enter, false) {
        request_toggle(&mut accordion, Some(&activation.target), &overrides(activation.target));
    }

    // The disabled item ignores activation.
    let outcome = request_toggle(&mut accordion, Some(&"warranty"), &overrides("warranty"));
    println!("warranty: {outcome:?}");

    println!("final:");
    render(&accordion);
}
