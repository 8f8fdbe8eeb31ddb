// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A hover popover with open and close delays, driven by a scripted timeline.
//!
//! The pointer brushes past the trigger (too quickly to open), comes back and
//! rests, then moves into the panel and finally away. Timers fire only when
//! the host polls, so the timeline polls at each pending deadline.
//!
//! Run:
//! - `RUST_LOG=hinge_trigger=trace,debug cargo run -p hinge_demos --example popover_hover`

use hinge_disclosure::{
    PanelConfig, Popover, PopoverButton, PopoverButtonConfig, PopoverConfig, PopoverPanel,
    UsageError,
};
use hinge_focus::{Document, ElementId, Tag};
use hinge_trigger::{DomEvent, InteractionEvent, TriggerSet};
use tracing_subscriber::EnvFilter;

enum Step {
    Enter(ElementId),
    Leave(ElementId, ElementId),
}

fn main() -> Result<(), UsageError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut doc = Document::new();
    let trigger = doc.append(doc.body(), Tag::Button);
    let panel_el = doc.append(doc.body(), Tag::Div);
    let elsewhere = doc.append(doc.body(), Tag::Div);

    let mut popover = Popover::new(PopoverConfig::default());
    let button = PopoverButton::mount(
        Some(&mut popover),
        trigger,
        PopoverButtonConfig {
            triggers: TriggerSet::HOVER | TriggerSet::FOCUS,
            open_delay: 150,
            close_delay: 300,
            ..PopoverButtonConfig::default()
        },
    )?;
    let _panel = PopoverPanel::mount(Some(&mut popover), panel_el, PanelConfig::default())?;

    let timeline = [
        (0, Step::Enter(trigger)),
        (60, Step::Leave(trigger, elsewhere)),
        (500, Step::Enter(trigger)),
        (900, Step::Leave(trigger, panel_el)),
        (1400, Step::Leave(trigger, elsewhere)),
    ];

    let mut last = 0;
    for (now, step) in timeline {
        // Fire whatever came due since the previous step.
        while let Some(due) = popover.next_deadline().filter(|&d| d <= now) {
            popover.poll(due);
            tracing::info!(at = due, shown = popover.is_open(), "timer fired");
        }
        let event = match step {
            Step::Enter(el) => InteractionEvent::new(DomEvent::MouseEnter, el),
            Step::Leave(el, to) => InteractionEvent::leaving(DomEvent::MouseLeave, el, Some(to)),
        };
        button.handle_event(&mut popover, &doc, &event, now);
        tracing::info!(at = now, event = event.event.name(), shown = popover.is_open(), "step");
        last = now;
    }
    if let Some(due) = popover.next_deadline() {
        popover.poll(due.max(last));
    }

    for notification in popover.take_notifications() {
        tracing::info!(?notification, "consumer notified");
    }
    tracing::info!(shown = popover.is_open(), "timeline finished");
    Ok(())
}
