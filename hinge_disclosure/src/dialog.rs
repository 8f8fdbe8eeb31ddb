// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal disclosure with initial focus, focus restore and a body scroll lock.

use core::fmt::Debug;

use hinge_focus::{
    ElementTree, FocusBehavior, FocusOptions, FocusScope, NodeRef, WrapMode,
    focus_element_or_first, focus_in,
};
use hinge_trigger::{InteractionEvent, is_inside};
use smallvec::SmallVec;

use crate::config::{DialogConfig, PanelConfig, RenderStrategy};
use crate::disclosure::Disclosure;
use crate::error::{UsageError, require};
use crate::event::{ClickEvent, Key, KeyEvent, Notification, Outbox};
use crate::queue::RenderQueue;

/// What the host should apply to the document body's `overflow`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyOverflow {
    /// Scrolling allowed.
    Visible,
    /// Scrolling locked while a dialog is open.
    Hidden,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DialogEffect {
    InitialFocus,
    RestoreFocus,
}

/// Dialog controller.
#[derive(Clone, Debug)]
pub struct Dialog<K> {
    disclosure: Disclosure,
    inner_focus: bool,
    initial_focus: Option<K>,
    button: NodeRef<K>,
    panel: NodeRef<K>,
    effects: RenderQueue<DialogEffect>,
    outbox: Outbox<()>,
}

impl<K> Dialog<K>
where
    K: Copy + Eq + Debug,
{
    /// A dialog, open if `config.open` is set (initial focus then applies on
    /// the first [`Dialog::after_render`]).
    pub fn new(config: DialogConfig<K>) -> Self {
        let disclosure = Disclosure::new(config.open, config.disabled);
        let mut effects = RenderQueue::default();
        if disclosure.is_open() {
            effects.schedule(DialogEffect::InitialFocus);
        }
        Self {
            disclosure,
            inner_focus: config.inner_focus,
            initial_focus: config.initial_focus,
            button: NodeRef::empty(),
            panel: NodeRef::empty(),
            effects,
            outbox: Outbox::default(),
        }
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Whether transitions are suppressed.
    pub fn is_disabled(&self) -> bool {
        self.disclosure.is_disabled()
    }

    /// Enable or disable. Disabling an open dialog closes it, reports the
    /// close, and restores focus to the trigger.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disclosure.set_disabled(disabled) {
            self.closed();
        }
    }

    /// The trigger element, if mounted.
    pub fn button(&self) -> Option<K> {
        self.button.get()
    }

    /// The panel element, if mounted.
    pub fn panel(&self) -> Option<K> {
        self.panel.get()
    }

    /// Change the element focused on open.
    pub fn set_initial_focus(&mut self, element: Option<K>) {
        self.initial_focus = element;
    }

    /// Open and schedule initial focus.
    pub fn open(&mut self) {
        if !self.disclosure.open() {
            return;
        }
        self.outbox.push(Notification::Open(true));
        self.effects.schedule(DialogEffect::InitialFocus);
    }

    /// Close and schedule focus restore to the trigger.
    pub fn close(&mut self) {
        if self.disclosure.close() {
            self.closed();
        }
    }

    fn closed(&mut self) {
        self.outbox.push(Notification::Close);
        self.outbox.push(Notification::UpdateOpen(false));
        self.effects.schedule(DialogEffect::RestoreFocus);
    }

    /// Flip the state.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// The body scroll lock.
    pub fn body_overflow(&self) -> BodyOverflow {
        if self.is_open() {
            BodyOverflow::Hidden
        } else {
            BodyOverflow::Visible
        }
    }

    /// Document-level `keydown`. `Escape` closes an open dialog unless
    /// something already handled the event.
    pub fn on_document_key_down(&mut self, event: &mut KeyEvent) {
        if event.default_prevented()
            || event.key != Key::Escape
            || !self.is_open()
            || self.is_disabled()
        {
            return;
        }
        event.consume();
        self.close();
    }

    /// Notifications since the last call, oldest first.
    pub fn take_notifications(&mut self) -> SmallVec<[Notification; 4]> {
        self.outbox.take()
    }

    /// Effects waiting for the next [`Dialog::after_render`].
    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Apply deferred focus changes once the host has committed a render.
    pub fn after_render<T>(&mut self, tree: &mut T)
    where
        T: ElementTree<K> + ?Sized,
    {
        for effect in self.effects.drain() {
            match effect {
                DialogEffect::InitialFocus if self.is_open() => {
                    if let Some(element) = self.initial_focus {
                        tree.focus(element, FocusOptions::default());
                    } else if let Some(panel) = self.panel.get().filter(|_| self.inner_focus) {
                        focus_in(
                            tree,
                            FocusScope::Container(panel),
                            FocusBehavior::First,
                            WrapMode::Never,
                        );
                    }
                }
                DialogEffect::RestoreFocus if !self.is_open() => match self.button.get() {
                    Some(button) => {
                        focus_element_or_first(tree, button);
                    }
                    None => tracing::trace!(?effect, "deferred effect dropped"),
                },
                _ => tracing::trace!(?effect, "deferred effect dropped"),
            }
        }
    }
}

/// The element that opens a [`Dialog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DialogButton<K> {
    element: K,
}

impl<K> DialogButton<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the trigger of `dialog`. Focus returns here on close.
    pub fn mount(dialog: Option<&mut Dialog<K>>, element: K) -> Result<Self, UsageError> {
        let dialog = require(dialog, "DialogButton", "Dialog")?;
        dialog.button.set(element);
        Ok(Self { element })
    }

    /// The trigger element.
    pub fn element(&self) -> K {
        self.element
    }

    /// A click opens. Ignored while disabled.
    pub fn on_click(&self, dialog: &mut Dialog<K>, event: &mut ClickEvent) {
        if dialog.is_disabled() {
            return;
        }
        event.prevent_default();
        dialog.open();
    }

    /// `Space` and `Enter` open. Ignored while disabled.
    pub fn on_key_down(&self, dialog: &mut Dialog<K>, event: &mut KeyEvent) {
        if dialog.is_disabled() {
            return;
        }
        if matches!(event.key, Key::Space | Key::Enter) {
            event.prevent_default();
            dialog.open();
        }
    }

    /// Release the trigger slot if it still refers to this element.
    pub fn unmount(self, dialog: &mut Dialog<K>) {
        if dialog.button.get() == Some(self.element) {
            dialog.button.clear();
        }
    }
}

/// The modal content of a [`Dialog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DialogPanel<K> {
    element: K,
    strategy: RenderStrategy,
}

impl<K> DialogPanel<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the panel of `dialog`.
    ///
    /// `hide_on_click_outside` in `config` is not consulted: a click outside a
    /// modal panel always closes it.
    pub fn mount(
        dialog: Option<&mut Dialog<K>>,
        element: K,
        config: PanelConfig,
    ) -> Result<Self, UsageError> {
        let dialog = require(dialog, "DialogPanel", "Dialog")?;
        dialog.panel.set(element);
        Ok(Self {
            element,
            strategy: config.strategy(),
        })
    }

    /// The panel element.
    pub fn element(&self) -> K {
        self.element
    }

    /// Whether the host should render the panel now.
    pub fn should_render(&self, dialog: &Dialog<K>) -> bool {
        self.strategy.should_render(dialog.is_open())
    }

    /// Whether the host should render the panel hidden now.
    pub fn is_hidden(&self, dialog: &Dialog<K>) -> bool {
        self.strategy.is_hidden(dialog.is_open())
    }

    /// Document-level `mousedown`: close when it lands outside the panel.
    pub fn on_pointer_down<T>(&self, dialog: &mut Dialog<K>, tree: &T, event: &InteractionEvent<K>)
    where
        T: ElementTree<K> + ?Sized,
    {
        if dialog.is_open() && !is_inside(tree, event, &[dialog.panel.get()]) {
            dialog.close();
        }
    }

    /// Release the panel slot if it still refers to this element.
    pub fn unmount(self, dialog: &mut Dialog<K>) {
        if dialog.panel.get() == Some(self.element) {
            dialog.panel.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_focus::{Document, ElementId, Tag};
    use hinge_trigger::DomEvent;

    struct Fixture {
        doc: Document,
        dialog: Dialog<ElementId>,
        button: DialogButton<ElementId>,
        panel: DialogPanel<ElementId>,
        first: ElementId,
        second: ElementId,
    }

    fn fixture(config: DialogConfig<ElementId>) -> Fixture {
        let mut doc = Document::new();
        let mut dialog = Dialog::new(config);
        let button_el = doc.append(doc.body(), Tag::Button);
        let panel_el = doc.append(doc.body(), Tag::Div);
        let first = doc.append(panel_el, Tag::Input);
        let second = doc.append(panel_el, Tag::Button);
        let button = DialogButton::mount(Some(&mut dialog), button_el).unwrap();
        let panel =
            DialogPanel::mount(Some(&mut dialog), panel_el, PanelConfig::default()).unwrap();
        Fixture {
            doc,
            dialog,
            button,
            panel,
            first,
            second,
        }
    }

    fn inner_focus() -> DialogConfig<ElementId> {
        DialogConfig {
            inner_focus: true,
            ..DialogConfig::default()
        }
    }

    #[test]
    fn open_focuses_first_inner_element() {
        let mut f = fixture(inner_focus());
        let mut click = ClickEvent::new();
        f.button.on_click(&mut f.dialog, &mut click);
        assert!(click.default_prevented());
        assert!(f.dialog.is_open());
        assert_eq!(f.dialog.body_overflow(), BodyOverflow::Hidden);
        assert_eq!(f.doc.active_element(), None);

        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.first));
        assert_eq!(
            f.dialog.take_notifications().as_slice(),
            &[Notification::Open(true)]
        );
    }

    #[test]
    fn initial_focus_wins_over_inner_focus() {
        let mut f = fixture(inner_focus());
        f.dialog.set_initial_focus(Some(f.second));
        f.dialog.open();
        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.second));
    }

    #[test]
    fn no_focus_target_leaves_focus_alone() {
        let mut f = fixture(DialogConfig::default());
        f.dialog.open();
        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), None);
    }

    #[test]
    fn escape_closes_and_restores_trigger_focus() {
        let mut f = fixture(inner_focus());
        f.dialog.open();
        f.dialog.after_render(&mut f.doc);
        f.dialog.take_notifications();

        let mut esc = KeyEvent::new(Key::Escape);
        f.dialog.on_document_key_down(&mut esc);
        assert!(!f.dialog.is_open());
        assert!(esc.propagation_stopped());
        assert_eq!(f.dialog.body_overflow(), BodyOverflow::Visible);
        assert_eq!(
            f.dialog.take_notifications().as_slice(),
            &[Notification::Close, Notification::UpdateOpen(false)]
        );

        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.button.element()));
    }

    #[test]
    fn handled_escape_is_ignored() {
        let mut f = fixture(DialogConfig::default());
        f.dialog.open();
        let mut esc = KeyEvent::new(Key::Escape);
        esc.prevent_default();
        f.dialog.on_document_key_down(&mut esc);
        assert!(f.dialog.is_open());
    }

    #[test]
    fn repeated_close_reports_once() {
        let mut f = fixture(DialogConfig::default());
        f.dialog.open();
        f.dialog.close();
        f.dialog.close();
        assert_eq!(
            f.dialog.take_notifications().as_slice(),
            &[
                Notification::Open(true),
                Notification::Close,
                Notification::UpdateOpen(false)
            ]
        );
    }

    #[test]
    fn restore_skipped_when_reopened_before_render() {
        let mut f = fixture(inner_focus());
        f.dialog.open();
        f.dialog.close();
        f.dialog.open();
        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.first));
    }

    #[test]
    fn outside_mousedown_closes() {
        let mut f = fixture(DialogConfig::default());
        f.dialog.open();
        let inside = InteractionEvent::new(DomEvent::MouseDown, f.second);
        f.panel.on_pointer_down(&mut f.dialog, &f.doc, &inside);
        assert!(f.dialog.is_open());
        let outside = InteractionEvent::new(DomEvent::MouseDown, f.doc.body());
        f.panel.on_pointer_down(&mut f.dialog, &f.doc, &outside);
        assert!(!f.dialog.is_open());
    }

    #[test]
    fn starts_open_with_pending_initial_focus() {
        let mut f = fixture(DialogConfig {
            open: true,
            ..inner_focus()
        });
        assert!(f.panel.should_render(&f.dialog));
        assert_eq!(f.dialog.pending_effects(), 1);
        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.first));
    }

    #[test]
    fn keyboard_trigger_opens() {
        let mut f = fixture(DialogConfig::default());
        let mut ev = KeyEvent::new(Key::Enter);
        f.button.on_key_down(&mut f.dialog, &mut ev);
        assert!(f.dialog.is_open());
        assert!(ev.default_prevented());
        assert!(!f.panel.is_hidden(&f.dialog));
    }

    #[test]
    fn disabling_open_dialog_closes_and_blocks_reopen() {
        let mut f = fixture(inner_focus());
        f.dialog.open();
        f.dialog.after_render(&mut f.doc);
        f.dialog.take_notifications();

        f.dialog.set_disabled(true);
        assert!(f.dialog.is_disabled());
        assert!(!f.dialog.is_open());
        assert_eq!(
            f.dialog.take_notifications().as_slice(),
            &[Notification::Close, Notification::UpdateOpen(false)]
        );
        f.dialog.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.button.element()));

        f.dialog.open();
        let mut click = ClickEvent::new();
        f.button.on_click(&mut f.dialog, &mut click);
        let mut enter = KeyEvent::new(Key::Enter);
        f.button.on_key_down(&mut f.dialog, &mut enter);
        assert!(!f.dialog.is_open());
        assert!(!click.default_prevented());
        assert!(!enter.default_prevented());
        assert!(f.dialog.take_notifications().is_empty());

        f.dialog.set_disabled(false);
        f.dialog.open();
        assert!(f.dialog.is_open());
    }

    #[test]
    fn disabled_config_starts_closed() {
        let f = fixture(DialogConfig {
            open: true,
            disabled: true,
            ..DialogConfig::default()
        });
        assert!(!f.dialog.is_open());
        assert_eq!(f.dialog.pending_effects(), 0);
    }

    #[test]
    fn missing_parent_is_reported() {
        assert!(DialogButton::<u8>::mount(None, 0).is_err());
    }
}
