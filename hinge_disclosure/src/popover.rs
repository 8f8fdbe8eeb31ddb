// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic disclosure opened from a trigger by configurable gestures.
//!
//! The [`PopoverButton`] turns its [`TriggerSet`](hinge_trigger::TriggerSet)
//! into event bindings once, at mount. The host forwards trigger events to
//! [`PopoverButton::handle_event`] and, when any delay is configured, calls
//! [`Popover::poll`] with the current time (for example, at
//! [`Popover::next_deadline`]).

use core::fmt::Debug;

use hinge_focus::{ElementTree, FocusOptions, NodeRef};
use hinge_trigger::{
    Bindings, DebounceKind, Debouncer, InteractionEvent, Intent, build_bindings, is_inside,
};
use smallvec::SmallVec;

use crate::config::{PanelConfig, PopoverButtonConfig, PopoverConfig, RenderStrategy};
use crate::disclosure::Disclosure;
use crate::error::{UsageError, require};
use crate::event::{Key, KeyEvent, Notification, Outbox};

/// Popover controller.
#[derive(Clone, Debug)]
pub struct Popover<K> {
    disclosure: Disclosure,
    trigger: NodeRef<K>,
    panel: NodeRef<K>,
    timers: Debouncer,
    outbox: Outbox<()>,
}

impl<K> Popover<K>
where
    K: Copy + Eq + Debug,
{
    /// A popover in the state given by `config.shown`.
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            disclosure: Disclosure::new(config.shown, config.disabled),
            trigger: NodeRef::empty(),
            panel: NodeRef::empty(),
            timers: Debouncer::default(),
            outbox: Outbox::default(),
        }
    }

    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Whether transitions are suppressed.
    pub fn is_disabled(&self) -> bool {
        self.disclosure.is_disabled()
    }

    /// The trigger element, if mounted.
    pub fn trigger(&self) -> Option<K> {
        self.trigger.get()
    }

    /// The panel element, if mounted.
    pub fn panel(&self) -> Option<K> {
        self.panel.get()
    }

    /// Show the panel. Cancels a pending delayed close.
    pub fn open(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.timers.cancel(DebounceKind::Close);
        if self.disclosure.open() {
            self.outbox.push(Notification::UpdateShown(true));
        }
    }

    /// Hide the panel. Cancels a pending delayed open.
    pub fn close(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.timers.cancel(DebounceKind::Open);
        if self.disclosure.close() {
            self.outbox.push(Notification::UpdateShown(false));
        }
    }

    /// Flip the state.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Adopt the consumer's `shown` flag. A disabled popover stays closed.
    /// Nothing is reported back.
    pub fn set_shown(&mut self, shown: bool) {
        if self.disclosure.set_open(shown) {
            self.timers.cancel_all();
        }
    }

    /// Enable or disable. Disabling hides the panel and drops pending timers.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.timers.cancel_all();
        }
        if self.disclosure.set_disabled(disabled) {
            self.outbox.push(Notification::UpdateShown(false));
        }
    }

    /// Run a delayed open or close that is due at `now`.
    pub fn poll(&mut self, now: u64) {
        match self.timers.poll(now) {
            Some(DebounceKind::Open) => self.open(),
            Some(DebounceKind::Close) => self.close(),
            None => {}
        }
    }

    /// When the next delayed open or close is due.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Notifications since the last call, oldest first.
    pub fn take_notifications(&mut self) -> SmallVec<[Notification; 4]> {
        self.outbox.take()
    }

    fn owned(&self) -> [Option<K>; 2] {
        [self.trigger.get(), self.panel.get()]
    }

    fn focus_within<T>(tree: &T, region: Option<K>) -> bool
    where
        T: ElementTree<K> + ?Sized,
    {
        match (region, tree.active_element()) {
            (Some(region), Some(active)) => tree.contains(region, active),
            _ => false,
        }
    }
}

/// The element that shows and hides a [`Popover`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopoverButton<K> {
    element: K,
    bindings: Bindings,
}

impl<K> PopoverButton<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the trigger of `popover`, binding the configured
    /// triggers and delays.
    pub fn mount(
        popover: Option<&mut Popover<K>>,
        element: K,
        config: PopoverButtonConfig,
    ) -> Result<Self, UsageError> {
        let popover = require(popover, "PopoverButton", "Popover")?;
        popover.trigger.set(element);
        popover.timers = Debouncer::new(config.delays());
        let bindings = build_bindings(config.triggers, config.show_triggers, config.hide_triggers);
        Ok(Self { element, bindings })
    }

    /// The trigger element.
    pub fn element(&self) -> K {
        self.element
    }

    /// The event bindings derived from the trigger configuration.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Dispatch a trigger event at time `now` (milliseconds).
    ///
    /// Opens and closes go through the debounce delays; a click toggles
    /// immediately. Leaving the trigger for the panel (or the other way round)
    /// does not close.
    pub fn handle_event<T>(
        &self,
        popover: &mut Popover<K>,
        tree: &T,
        event: &InteractionEvent<K>,
        now: u64,
    ) where
        T: ElementTree<K> + ?Sized,
    {
        if popover.is_disabled() {
            return;
        }
        match self.bindings.get(event.event) {
            Some(Intent::Toggle) => popover.toggle(),
            Some(Intent::Open) => {
                if popover.timers.request(DebounceKind::Open, now) {
                    popover.open();
                }
            }
            Some(Intent::Close) => {
                if event.event.is_leave() && is_inside(tree, event, &popover.owned()) {
                    return;
                }
                if popover.timers.request(DebounceKind::Close, now) {
                    popover.close();
                }
            }
            None => {}
        }
    }

    /// `Escape` closes while focus is inside the trigger.
    pub fn on_key_down<T>(&self, popover: &mut Popover<K>, tree: &T, event: &mut KeyEvent)
    where
        T: ElementTree<K> + ?Sized,
    {
        if event.key != Key::Escape || !popover.is_open() {
            return;
        }
        if !Popover::focus_within(tree, popover.trigger.get()) {
            return;
        }
        event.consume();
        popover.close();
    }

    /// Release the trigger slot if it still refers to this element.
    pub fn unmount(self, popover: &mut Popover<K>) {
        if popover.trigger.get() == Some(self.element) {
            popover.trigger.clear();
        }
    }
}

/// The content shown by a [`Popover`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PopoverPanel<K> {
    element: K,
    config: PanelConfig,
}

impl<K> PopoverPanel<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the panel of `popover`.
    pub fn mount(
        popover: Option<&mut Popover<K>>,
        element: K,
        config: PanelConfig,
    ) -> Result<Self, UsageError> {
        let popover = require(popover, "PopoverPanel", "Popover")?;
        popover.panel.set(element);
        Ok(Self { element, config })
    }

    /// The panel element.
    pub fn element(&self) -> K {
        self.element
    }

    /// How the panel is kept while closed.
    pub fn strategy(&self) -> RenderStrategy {
        self.config.strategy()
    }

    /// Whether the host should render the panel now.
    pub fn should_render(&self, popover: &Popover<K>) -> bool {
        self.strategy().should_render(popover.is_open())
    }

    /// Whether the host should render the panel hidden now.
    pub fn is_hidden(&self, popover: &Popover<K>) -> bool {
        self.strategy().is_hidden(popover.is_open())
    }

    /// `Escape` closes while focus is inside the panel and returns focus to
    /// the trigger.
    pub fn on_key_down<T>(&self, popover: &mut Popover<K>, tree: &mut T, event: &mut KeyEvent)
    where
        T: ElementTree<K> + ?Sized,
    {
        if event.key != Key::Escape || !popover.is_open() {
            return;
        }
        if !Popover::focus_within(tree, popover.panel.get()) {
            return;
        }
        event.consume();
        popover.close();
        if let Some(trigger) = popover.trigger.get() {
            tree.focus(trigger, FocusOptions::default());
        }
    }

    /// Window-level `mousedown`: close when it lands outside the trigger and
    /// the panel, unless `hide_on_click_outside` is off.
    pub fn on_pointer_down<T>(
        &self,
        popover: &mut Popover<K>,
        tree: &T,
        event: &InteractionEvent<K>,
    ) where
        T: ElementTree<K> + ?Sized,
    {
        if !self.config.hide_on_click_outside || !popover.is_open() {
            return;
        }
        if !is_inside(tree, event, &popover.owned()) {
            popover.close();
        }
    }

    /// Release the panel slot if it still refers to this element.
    pub fn unmount(self, popover: &mut Popover<K>) {
        if popover.panel.get() == Some(self.element) {
            popover.panel.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_focus::{Document, ElementId, Tag};
    use hinge_trigger::{DomEvent, TriggerSet};

    struct Fixture {
        doc: Document,
        popover: Popover<ElementId>,
        button: PopoverButton<ElementId>,
        panel: PopoverPanel<ElementId>,
        link: ElementId,
        elsewhere: ElementId,
    }

    fn fixture(button: PopoverButtonConfig, panel: PanelConfig) -> Fixture {
        let mut doc = Document::new();
        let mut popover = Popover::new(PopoverConfig::default());
        let button_el = doc.append(doc.body(), Tag::Button);
        let panel_el = doc.append(doc.body(), Tag::Div);
        let link = doc.append(panel_el, Tag::Anchor);
        doc.set_href(link, true);
        let elsewhere = doc.append(doc.body(), Tag::Button);
        let button = PopoverButton::mount(Some(&mut popover), button_el, button).unwrap();
        let panel = PopoverPanel::mount(Some(&mut popover), panel_el, panel).unwrap();
        Fixture {
            doc,
            popover,
            button,
            panel,
            link,
            elsewhere,
        }
    }

    fn hover(open_delay: u64, close_delay: u64) -> PopoverButtonConfig {
        PopoverButtonConfig {
            triggers: TriggerSet::HOVER,
            open_delay,
            close_delay,
            ..PopoverButtonConfig::default()
        }
    }

    fn send(f: &mut Fixture, event: InteractionEvent<ElementId>, now: u64) {
        f.button.handle_event(&mut f.popover, &f.doc, &event, now);
    }

    #[test]
    fn click_toggles_and_reports_shown() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        let click = InteractionEvent::new(DomEvent::Click, f.button.element());
        send(&mut f, click, 0);
        assert!(f.popover.is_open());
        send(&mut f, click, 1);
        assert!(!f.popover.is_open());
        assert_eq!(
            f.popover.take_notifications().as_slice(),
            &[Notification::UpdateShown(true), Notification::UpdateShown(false)]
        );
    }

    #[test]
    fn quick_enter_leave_never_opens() {
        let mut f = fixture(hover(100, 0), PanelConfig::default());
        let trigger = f.button.element();
        send(&mut f, InteractionEvent::new(DomEvent::MouseEnter, trigger), 0);
        assert!(!f.popover.is_open());
        let leave = InteractionEvent::leaving(DomEvent::MouseLeave, trigger, Some(f.elsewhere));
        send(&mut f, leave, 30);
        f.popover.poll(500);
        assert!(!f.popover.is_open());
        assert!(f.popover.take_notifications().is_empty());
    }

    #[test]
    fn delayed_open_then_close_only_runs_close() {
        let mut f = fixture(hover(50, 50), PanelConfig::default());
        let trigger = f.button.element();
        f.popover.open();
        f.popover.take_notifications();

        let leave = InteractionEvent::leaving(DomEvent::MouseLeave, trigger, Some(f.elsewhere));
        send(&mut f, InteractionEvent::new(DomEvent::MouseEnter, trigger), 0);
        send(&mut f, leave, 10);
        assert_eq!(f.popover.next_deadline(), Some(60));
        f.popover.poll(60);
        assert!(!f.popover.is_open());
        assert_eq!(
            f.popover.take_notifications().as_slice(),
            &[Notification::UpdateShown(false)]
        );
    }

    #[test]
    fn leaving_trigger_for_panel_keeps_open() {
        let mut f = fixture(hover(0, 0), PanelConfig::default());
        let trigger = f.button.element();
        send(&mut f, InteractionEvent::new(DomEvent::MouseEnter, trigger), 0);
        assert!(f.popover.is_open());
        let into_panel =
            InteractionEvent::leaving(DomEvent::MouseLeave, trigger, Some(f.panel.element()));
        send(&mut f, into_panel, 5);
        assert!(f.popover.is_open());
        let away = InteractionEvent::leaving(DomEvent::MouseLeave, trigger, Some(f.elsewhere));
        send(&mut f, away, 9);
        assert!(!f.popover.is_open());
    }

    #[test]
    fn leaving_panel_for_trigger_keeps_open() {
        let mut f = fixture(hover(0, 80), PanelConfig::default());
        let trigger = f.button.element();
        send(&mut f, InteractionEvent::new(DomEvent::MouseEnter, trigger), 0);
        assert!(f.popover.is_open());

        let back =
            InteractionEvent::leaving(DomEvent::MouseLeave, f.panel.element(), Some(trigger));
        send(&mut f, back, 10);
        assert_eq!(f.popover.next_deadline(), None);
        f.popover.poll(500);
        assert!(f.popover.is_open());
    }

    #[test]
    fn leaving_panel_elsewhere_closes_after_delay() {
        let mut f = fixture(hover(0, 80), PanelConfig::default());
        let trigger = f.button.element();
        send(&mut f, InteractionEvent::new(DomEvent::MouseEnter, trigger), 0);
        f.popover.take_notifications();

        let away =
            InteractionEvent::leaving(DomEvent::MouseLeave, f.panel.element(), Some(f.elsewhere));
        send(&mut f, away, 10);
        assert_eq!(f.popover.next_deadline(), Some(90));
        f.popover.poll(50);
        assert!(f.popover.is_open());
        f.popover.poll(90);
        assert!(!f.popover.is_open());
        assert_eq!(
            f.popover.take_notifications().as_slice(),
            &[Notification::UpdateShown(false)]
        );
    }

    #[test]
    fn explicit_open_cancels_pending_close() {
        let mut f = fixture(hover(0, 40), PanelConfig::default());
        let trigger = f.button.element();
        f.popover.open();
        let leave = InteractionEvent::leaving(DomEvent::MouseLeave, trigger, Some(f.elsewhere));
        send(&mut f, leave, 0);
        assert_eq!(f.popover.next_deadline(), Some(40));
        f.popover.open();
        assert_eq!(f.popover.next_deadline(), None);
        f.popover.poll(100);
        assert!(f.popover.is_open());
    }

    #[test]
    fn disabling_forces_closed() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        f.popover.open();
        f.popover.take_notifications();
        f.popover.set_disabled(true);
        assert!(!f.popover.is_open());
        assert_eq!(
            f.popover.take_notifications().as_slice(),
            &[Notification::UpdateShown(false)]
        );

        f.popover.open();
        f.popover.set_shown(true);
        let click = InteractionEvent::new(DomEvent::Click, f.button.element());
        send(&mut f, click, 0);
        assert!(!f.popover.is_open());
        assert!(f.popover.take_notifications().is_empty());
    }

    #[test]
    fn set_shown_is_silent() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        f.popover.set_shown(true);
        assert!(f.popover.is_open());
        f.popover.set_shown(false);
        assert!(!f.popover.is_open());
        assert!(f.popover.take_notifications().is_empty());
    }

    #[test]
    fn trigger_escape_needs_focus_in_trigger() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        f.popover.open();
        let mut ev = KeyEvent::new(Key::Escape);
        f.button.on_key_down(&mut f.popover, &f.doc, &mut ev);
        assert!(f.popover.is_open());
        assert!(!ev.default_prevented());

        f.doc.focus(f.button.element(), FocusOptions::default());
        f.button.on_key_down(&mut f.popover, &f.doc, &mut ev);
        assert!(!f.popover.is_open());
        assert!(ev.propagation_stopped());
    }

    #[test]
    fn panel_escape_restores_trigger_focus() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        f.popover.open();
        f.doc.focus(f.link, FocusOptions::default());
        let mut ev = KeyEvent::new(Key::Escape);
        f.panel.on_key_down(&mut f.popover, &mut f.doc, &mut ev);
        assert!(!f.popover.is_open());
        assert_eq!(f.doc.active_element(), Some(f.button.element()));
    }

    #[test]
    fn outside_mousedown_closes_unless_disabled_by_config() {
        let mut f = fixture(PopoverButtonConfig::default(), PanelConfig::default());
        f.popover.open();
        let inside = InteractionEvent::new(DomEvent::MouseDown, f.link);
        f.panel.on_pointer_down(&mut f.popover, &f.doc, &inside);
        assert!(f.popover.is_open());
        let outside = InteractionEvent::new(DomEvent::MouseDown, f.elsewhere);
        f.panel.on_pointer_down(&mut f.popover, &f.doc, &outside);
        assert!(!f.popover.is_open());

        let keep = PanelConfig {
            hide_on_click_outside: false,
            ..PanelConfig::default()
        };
        let mut f = fixture(PopoverButtonConfig::default(), keep);
        f.popover.open();
        let outside = InteractionEvent::new(DomEvent::MouseDown, f.elsewhere);
        f.panel.on_pointer_down(&mut f.popover, &f.doc, &outside);
        assert!(f.popover.is_open());
    }

    #[test]
    fn missing_parent_is_reported() {
        let err = PopoverPanel::<u8>::mount(None, 1, PanelConfig::default()).unwrap_err();
        assert_eq!(
            err,
            UsageError::MissingParent {
                component: "PopoverPanel",
                parent: "Popover"
            }
        );
    }
}
