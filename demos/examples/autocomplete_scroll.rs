// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard session on an autocomplete whose options overflow a scrolling
//! panel.
//!
//! The in-memory `Document` stands in for the host's element tree. Each key
//! press is followed by `after_render`, which is where the active option is
//! scrolled into view.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p hinge_demos --example autocomplete_scroll`

use hinge_disclosure::{
    Autocomplete, AutocompleteConfig, AutocompleteInput, AutocompleteOption, AutocompleteOptions,
    Key, KeyEvent, PanelConfig, UsageError,
};
use hinge_focus::{Document, ElementTree, Tag};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

const CITIES: [&str; 12] = [
    "Amsterdam", "Bergen", "Cork", "Dresden", "Espoo", "Faro", "Ghent", "Hamburg", "Izmir",
    "Jena", "Krakow", "Lyon",
];

const ROW: f64 = 24.0;

fn main() -> Result<(), UsageError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut doc = Document::new();
    let input_el = doc.append(doc.body(), Tag::Input);
    let panel_el = doc.append(doc.body(), Tag::Div);
    doc.set_scrollable(panel_el, true);
    doc.set_bounds(panel_el, Rect::new(0.0, 0.0, 200.0, 4.0 * ROW));

    let mut ac = Autocomplete::new(AutocompleteConfig::default(), |c: &&str| c.to_uppercase());
    let input = AutocompleteInput::mount(Some(&mut ac), input_el)?;
    let _panel = AutocompleteOptions::mount(Some(&mut ac), panel_el, PanelConfig::default())?;
    for (row, city) in CITIES.into_iter().enumerate() {
        let el = doc.append(panel_el, Tag::Div);
        let top = ROW * row as f64;
        doc.set_bounds(el, Rect::new(0.0, top, 200.0, top + ROW));
        AutocompleteOption::mount(Some(&mut ac), el, city, false)?;
    }

    let keys = [Key::ArrowDown, Key::ArrowDown, Key::End, Key::PageUp, Key::ArrowDown];
    for key in keys {
        input.on_key_down(&mut ac, &mut KeyEvent::new(key));
        ac.after_render(&mut doc);
        let active = ac.effective_active_index().map(|i| ac.options()[i].value);
        tracing::info!(
            ?key,
            open = ac.is_open(),
            ?active,
            scroll_y = doc.scroll_offset(panel_el).y,
            "key handled"
        );
    }

    input.on_key_down(&mut ac, &mut KeyEvent::new(Key::Enter));
    ac.after_render(&mut doc);
    for notification in ac.take_notifications() {
        tracing::info!(?notification, "consumer notified");
    }
    tracing::info!(
        text = ac.display_text(),
        focused_input = doc.active_element() == Some(input_el),
        "selection committed"
    );
    Ok(())
}
