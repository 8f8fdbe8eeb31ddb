// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open a dialog from the keyboard, let it move focus inside, then dismiss it
//! with `Escape` and watch focus return to the trigger.
//!
//! Run:
//! - `cargo run -p hinge_demos --example dialog_focus`

use hinge_disclosure::{
    Dialog, DialogButton, DialogConfig, DialogPanel, Key, KeyEvent, PanelConfig, UsageError,
};
use hinge_focus::{Document, ElementTree, FocusOptions, Tag};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), UsageError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut doc = Document::new();
    let trigger = doc.append(doc.body(), Tag::Button);
    let panel_el = doc.append(doc.body(), Tag::Div);
    let heading = doc.append(panel_el, Tag::Div);
    let name = doc.append(panel_el, Tag::Input);
    let _ok = doc.append(panel_el, Tag::Button);

    let mut dialog = Dialog::new(DialogConfig {
        inner_focus: true,
        ..DialogConfig::default()
    });
    let button = DialogButton::mount(Some(&mut dialog), trigger)?;
    let panel = DialogPanel::mount(Some(&mut dialog), panel_el, PanelConfig::default())?;
    doc.focus(trigger, FocusOptions::default());

    button.on_key_down(&mut dialog, &mut KeyEvent::new(Key::Enter));
    doc.set_hidden(panel_el, !panel.should_render(&dialog));
    dialog.after_render(&mut doc);
    tracing::info!(
        overflow = ?dialog.body_overflow(),
        focus_on_name = doc.active_element() == Some(name),
        heading_skipped = doc.active_element() != Some(heading),
        "dialog opened"
    );

    dialog.on_document_key_down(&mut KeyEvent::new(Key::Escape));
    doc.set_hidden(panel_el, !panel.should_render(&dialog));
    dialog.after_render(&mut doc);
    tracing::info!(
        overflow = ?dialog.body_overflow(),
        focus_on_trigger = doc.active_element() == Some(trigger),
        "dialog closed"
    );

    for notification in dialog.take_notifications() {
        tracing::info!(?notification, "consumer notified");
    }
    Ok(())
}
