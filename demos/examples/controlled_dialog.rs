// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled dialog and a hover card on a native host.
//!
//! The dialog's open state lives in the host ("application state"). The store
//! only forwards requests; the host applies them and syncs the new value back
//! on its next render. The hover card uses `HoverIntent` delays in front of an
//! uncontrolled boolean store.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example controlled_dialog`

use std::cell::Cell;
use std::rc::Rc;

use understory_event_state::hover::HoverIntent;
use understory_toggle::context::ItemScope;
use understory_toggle::{
    ItemOverrides, ToggleConfig, ToggleStore, ToggleValue, request_open_change, request_toggle,
};
use understory_toggle_a11y::Platform;
use understory_toggle_a11y::parts::{DIALOG_CONTENT, DIALOG_TRIGGER};

/// Host-side application state.
#[derive(Default)]
struct App {
    dialog_open: Cell<bool>,
}

fn render_dialog(app: &App, dialog: &mut ToggleStore<()>) {
    // Every render hands the store the host's current value.
    dialog.sync_value(Some(ToggleValue::Boolean(app.dialog_open.get())));

    let adapter = Platform::Native.adapter();
    let scope = ItemScope::new(&*dialog, &());
    match (
        DIALOG_TRIGGER.semantics(Some(&scope), false),
        DIALOG_CONTENT.semantics(Some(&scope)),
    ) {
        (Ok(trigger), Ok(content)) => {
            println!("  trigger: {:?}", adapter.for_item(&trigger));
            println!("  content: {:?}", adapter.for_content(&content));
        }
        (Err(err), _) | (_, Err(err)) => log::error!("{err}"),
    }
}

fn main() {
    env_logger::init();

    let app = Rc::new(App::default());
    let host = Rc::clone(&app);
    let mut dialog = ToggleConfig::boolean()
        .value(ToggleValue::Boolean(false))
        .on_change(move |value| {
            if let Some(open) = value.as_open() {
                host.dialog_open.set(open);
            }
        })
        .build()
        .expect("valid dialog configuration");

    println!("closed:");
    render_dialog(&app, &mut dialog);

    // The trigger requests a flip. The store itself has not moved yet...
    request_toggle(&mut dialog, None, &ItemOverrides::default());
    assert_eq!(dialog.value(), &ToggleValue::Boolean(false));

    // ...until the host re-renders with its updated state.
    println!("open:");
    render_dialog(&app, &mut dialog);

    // A close button always targets `false`, even if pressed twice.
    request_open_change(&mut dialog, false);
    request_open_change(&mut dialog, false);
    println!("closed again:");
    render_dialog(&app, &mut dialog);

    // Hover card: delays live in front of the store, never inside it.
    let mut card = ToggleConfig::<()>::boolean()
        .build()
        .expect("valid hover card configuration");
    let mut intent = HoverIntent::new();

    intent.on_enter(0);
    for now in (0..=1000).step_by(100) {
        if let Some(open) = intent.poll(now) {
            request_open_change(&mut card, open);
            println!("hover card open={open} at {now}ms");
        }
    }
    intent.on_leave(1000);
    if let Some(deadline) = intent.deadline() {
        if let Some(open) = intent.poll(deadline) {
            request_open_change(&mut card, open);
            println!("hover card open={open} at {deadline}ms");
        }
    }
}
