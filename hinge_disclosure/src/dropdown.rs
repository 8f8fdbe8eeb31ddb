// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-select dropdown (listbox) controller and its child primitives.
//!
//! A [`Dropdown`] owns the open state, the registered options, and the
//! active option. The host mounts a [`DropdownButton`], a [`DropdownOptions`]
//! panel, and one [`DropdownOption`] per option, forwards their events, and
//! calls [`Dropdown::after_render`] after each render pass.
//!
//! The selected value is controlled: [`Notification::Input`] reports the
//! user's choice and the host feeds the new value back through
//! [`Dropdown::set_value`].

use core::fmt::Debug;

use hinge_focus::ElementTree;
use hinge_listbox::{Action, OptionEntry, OptionId};
use smallvec::SmallVec;

use crate::config::{DropdownConfig, PanelConfig, RenderStrategy};
use crate::error::{UsageError, require};
use crate::event::{ClickEvent, Key, KeyEvent, Notification};
use crate::list::{ListEffect, ListState, PanelKey};

/// Dropdown controller.
#[derive(Clone, Debug)]
pub struct Dropdown<K, V> {
    list: ListState<K, V>,
    value: Option<V>,
}

impl<K, V> Dropdown<K, V>
where
    K: Copy + Eq + Debug,
    V: Clone + PartialEq,
{
    /// A closed dropdown without a value.
    pub fn new(config: DropdownConfig) -> Self {
        Self {
            list: ListState::new(config.disabled),
            value: None,
        }
    }

    /// Whether the options panel is open.
    pub fn is_open(&self) -> bool {
        self.list.is_open()
    }

    /// Whether transitions are suppressed.
    pub fn is_disabled(&self) -> bool {
        self.list.is_disabled()
    }

    /// The current (controlled) value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Registered options in visual order.
    pub fn options(&self) -> &[OptionEntry<V>] {
        self.list.registry.entries()
    }

    /// The explicitly active option index.
    pub fn active_index(&self) -> Option<usize> {
        self.list.registry.active_index()
    }

    /// The active index, or the first enabled option when none is active.
    pub fn effective_active_index(&self) -> Option<usize> {
        self.list.registry.effective_active_index()
    }

    /// The explicitly active option.
    pub fn active_option(&self) -> Option<&OptionEntry<V>> {
        self.list.registry.active()
    }

    /// The trigger element, if mounted.
    pub fn button(&self) -> Option<K> {
        self.list.trigger.get()
    }

    /// The options panel element, if mounted.
    pub fn panel(&self) -> Option<K> {
        self.list.panel.get()
    }

    /// Open the panel and highlight the option matching the current value.
    pub fn open(&mut self) {
        if self.list.open() {
            self.list.sync_selected(self.value.as_ref());
        }
    }

    /// Close the panel and clear the active option.
    pub fn close(&mut self) {
        self.list.close();
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Enable or disable. Disabling closes the panel.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.list.set_disabled(disabled);
    }

    /// Move the active option. Ignored while closed or disabled.
    pub fn go_to_option(&mut self, action: Action<OptionId>) {
        self.list.go_to_option(&action);
    }

    /// Report `value` as chosen. Ignored while disabled.
    pub fn select(&mut self, value: V) {
        self.list.emit_input(value);
    }

    /// Adopt a new controlled value.
    pub fn set_value(&mut self, value: Option<V>) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.list.sync_selected(self.value.as_ref());
    }

    /// Register an option rendered as `element`. Returns its fresh id.
    pub fn register(&mut self, element: K, value: V, disabled: bool) -> OptionId {
        let selected = self.value.as_ref() == Some(&value);
        let id = self.list.register(element, value, disabled);
        if selected {
            self.list.sync_selected(self.value.as_ref());
        }
        id
    }

    /// Remove an option, keeping the active option stable.
    pub fn unregister(&mut self, id: OptionId) {
        self.list.unregister(id);
    }

    /// Notifications since the last call, oldest first.
    pub fn take_notifications(&mut self) -> SmallVec<[Notification<V>; 4]> {
        self.list.outbox.take()
    }

    /// Number of deferred effects waiting for [`Self::after_render`].
    pub fn pending_effects(&self) -> usize {
        self.list.effects.len()
    }

    /// Run deferred focus and scroll effects. Call once the render pass that
    /// follows an event has committed.
    pub fn after_render<T>(&mut self, tree: &mut T)
    where
        T: ElementTree<K> + ?Sized,
    {
        let has_value = self.value.is_some();
        self.list.after_render(tree, has_value);
    }

    fn select_active(&mut self) {
        if let Some(value) = self.list.registry.active().map(|e| e.value.clone()) {
            self.select(value);
        }
    }

    fn close_and_restore_focus(&mut self) {
        self.close();
        self.list.effects.schedule(ListEffect::FocusTrigger);
    }
}

/// The element that opens and closes a [`Dropdown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropdownButton<K> {
    element: K,
}

impl<K> DropdownButton<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the trigger of `dropdown`.
    pub fn mount<V>(dropdown: Option<&mut Dropdown<K, V>>, element: K) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let dropdown = require(dropdown, "DropdownButton", "Dropdown")?;
        dropdown.list.trigger.set(element);
        Ok(Self { element })
    }

    /// The trigger element.
    pub fn element(&self) -> K {
        self.element
    }

    /// `Space`, `Enter`, and `ArrowDown` open and highlight the first option;
    /// `ArrowUp` opens and highlights the last. Options are only highlighted
    /// when the dropdown has no value.
    pub fn on_key_down<V>(&self, dropdown: &mut Dropdown<K, V>, event: &mut KeyEvent)
    where
        V: Clone + PartialEq,
    {
        let action = match event.key {
            Key::Space | Key::Enter | Key::ArrowDown => Action::First,
            Key::ArrowUp => Action::Last,
            _ => return,
        };
        event.prevent_default();
        // Queued ahead of the open so a selected option focused by the open
        // ends up with focus.
        dropdown.list.effects.schedule(ListEffect::FocusPanel);
        dropdown.open();
        dropdown
            .list
            .effects
            .schedule(ListEffect::NavigateIfEmpty(action));
    }

    /// Toggle, moving focus into the panel on open and back on close.
    pub fn on_click<V>(&self, dropdown: &mut Dropdown<K, V>, event: &mut ClickEvent)
    where
        V: Clone + PartialEq,
    {
        if dropdown.is_disabled() {
            return;
        }
        event.prevent_default();
        if dropdown.is_open() {
            dropdown.close_and_restore_focus();
        } else {
            dropdown.list.effects.schedule(ListEffect::FocusPanel);
            dropdown.open();
        }
    }

    /// Report trigger focus.
    pub fn on_focus<V>(&self, dropdown: &mut Dropdown<K, V>)
    where
        V: Clone + PartialEq,
    {
        dropdown.list.emit_focus();
    }

    /// Release the trigger slot if it still refers to this element.
    pub fn unmount<V>(self, dropdown: &mut Dropdown<K, V>)
    where
        V: Clone + PartialEq,
    {
        if dropdown.list.trigger.get() == Some(self.element) {
            dropdown.list.trigger.clear();
        }
    }
}

/// The panel listing the options of a [`Dropdown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropdownOptions<K> {
    element: K,
    strategy: RenderStrategy,
}

impl<K> DropdownOptions<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the options panel of `dropdown`.
    pub fn mount<V>(
        dropdown: Option<&mut Dropdown<K, V>>,
        element: K,
        config: PanelConfig,
    ) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let dropdown = require(dropdown, "DropdownOptions", "Dropdown")?;
        dropdown.list.panel.set(element);
        dropdown.list.strategy = config.strategy();
        Ok(Self {
            element,
            strategy: config.strategy(),
        })
    }

    /// The panel element.
    pub fn element(&self) -> K {
        self.element
    }

    /// How the panel is kept while closed.
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Whether the host should render the panel now.
    pub fn should_render<V>(&self, dropdown: &Dropdown<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        self.strategy.should_render(dropdown.is_open())
    }

    /// Whether the host should render the panel hidden now.
    pub fn is_hidden<V>(&self, dropdown: &Dropdown<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        self.strategy.is_hidden(dropdown.is_open())
    }

    /// Listbox keys: select, navigate, dismiss. Every handled key is consumed.
    pub fn on_key_down<V>(&self, dropdown: &mut Dropdown<K, V>, event: &mut KeyEvent)
    where
        V: Clone + PartialEq,
    {
        let Some(key) = PanelKey::from_key(event.key) else {
            return;
        };
        event.consume();
        match key {
            PanelKey::Select => {
                dropdown.select_active();
                dropdown.close_and_restore_focus();
            }
            PanelKey::Navigate(action) => dropdown.go_to_option(action),
            PanelKey::Dismiss => dropdown.close_and_restore_focus(),
            PanelKey::Swallow => {}
        }
    }

    /// Release the panel slot if it still refers to this element.
    pub fn unmount<V>(self, dropdown: &mut Dropdown<K, V>)
    where
        V: Clone + PartialEq,
    {
        if dropdown.list.panel.get() == Some(self.element) {
            dropdown.list.panel.clear();
        }
    }
}

/// One option of a [`Dropdown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption<K> {
    id: OptionId,
    element: K,
}

impl<K> DropdownOption<K>
where
    K: Copy + Eq + Debug,
{
    /// Register `value` rendered as `element` with `dropdown`.
    pub fn mount<V>(
        dropdown: Option<&mut Dropdown<K, V>>,
        element: K,
        value: V,
        disabled: bool,
    ) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let dropdown = require(dropdown, "DropdownOption", "Dropdown")?;
        let id = dropdown.register(element, value, disabled);
        Ok(Self { id, element })
    }

    /// Registry id of this option.
    pub fn id(&self) -> OptionId {
        self.id
    }

    /// The option element.
    pub fn element(&self) -> K {
        self.element
    }

    /// Re-render with a new payload, disabled flag, or element. Identity and
    /// position are kept.
    pub fn update<V>(&mut self, dropdown: &mut Dropdown<K, V>, element: K, value: V, disabled: bool)
    where
        V: Clone + PartialEq,
    {
        self.element = element;
        dropdown.list.set_option_element(self.id, element);
        dropdown.list.registry.update(self.id, value, disabled);
    }

    /// Whether this is the keyboard-highlighted option.
    pub fn is_active<V>(&self, dropdown: &Dropdown<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        dropdown.list.registry.is_active(self.id)
    }

    /// Whether this option holds the dropdown's value.
    pub fn is_selected<V>(&self, dropdown: &Dropdown<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        self.entry(dropdown)
            .is_some_and(|e| dropdown.value.as_ref() == Some(&e.value))
    }

    /// Choose this option and close. A click on a disabled option only has
    /// its default prevented.
    pub fn on_click<V>(&self, dropdown: &mut Dropdown<K, V>, event: &mut ClickEvent)
    where
        V: Clone + PartialEq,
    {
        let Some(entry) = self.entry(dropdown) else {
            return;
        };
        if entry.disabled {
            event.prevent_default();
            return;
        }
        let value = entry.value.clone();
        dropdown.select(value);
        dropdown.close_and_restore_focus();
    }

    /// Unregister; pending effects for this option are dropped.
    pub fn unmount<V>(self, dropdown: &mut Dropdown<K, V>)
    where
        V: Clone + PartialEq,
    {
        dropdown.unregister(self.id);
    }

    fn entry<'a, V>(&self, dropdown: &'a Dropdown<K, V>) -> Option<&'a OptionEntry<V>>
    where
        V: Clone + PartialEq,
    {
        let registry = &dropdown.list.registry;
        registry.index_of(self.id).and_then(|i| registry.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use hinge_focus::{Document, ElementId, Tag};

    struct Fixture {
        doc: Document,
        dropdown: Dropdown<ElementId, &'static str>,
        button: DropdownButton<ElementId>,
        panel: DropdownOptions<ElementId>,
        options: Vec<DropdownOption<ElementId>>,
    }

    fn fixture(values: &[(&'static str, bool)]) -> Fixture {
        let mut doc = Document::new();
        let mut dropdown = Dropdown::new(DropdownConfig::default());
        let button_el = doc.append(doc.body(), Tag::Button);
        let panel_el = doc.append(doc.body(), Tag::Div);
        doc.set_tab_index(panel_el, Some(0));
        let button = DropdownButton::mount(Some(&mut dropdown), button_el).unwrap();
        let panel =
            DropdownOptions::mount(Some(&mut dropdown), panel_el, PanelConfig::default()).unwrap();
        let options = values
            .iter()
            .map(|&(value, disabled)| {
                let el = doc.append(panel_el, Tag::Div);
                doc.set_tab_index(el, Some(-1));
                DropdownOption::mount(Some(&mut dropdown), el, value, disabled).unwrap()
            })
            .collect();
        Fixture {
            doc,
            dropdown,
            button,
            panel,
            options,
        }
    }

    fn key(f: &mut Fixture, key: Key) -> KeyEvent {
        let mut ev = KeyEvent::new(key);
        f.panel.on_key_down(&mut f.dropdown, &mut ev);
        ev
    }

    #[test]
    fn children_need_a_parent() {
        let err = DropdownOption::<u32>::mount::<u8>(None, 1, 0, false).unwrap_err();
        assert_eq!(
            err,
            UsageError::MissingParent {
                component: "DropdownOption",
                parent: "Dropdown"
            }
        );
        assert!(DropdownButton::<u32>::mount::<u8>(None, 1).is_err());
        assert!(DropdownOptions::<u32>::mount::<u8>(None, 1, PanelConfig::default()).is_err());
    }

    #[test]
    fn button_arrow_down_opens_focuses_panel_and_highlights_first() {
        let mut f = fixture(&[("a", true), ("b", false), ("c", false)]);
        let mut ev = KeyEvent::new(Key::ArrowDown);
        f.button.on_key_down(&mut f.dropdown, &mut ev);
        assert!(ev.default_prevented());
        assert!(f.dropdown.is_open());
        assert_eq!(f.dropdown.active_index(), None);

        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.panel.element()));
        assert_eq!(f.dropdown.active_index(), Some(1));
    }

    #[test]
    fn button_arrow_up_highlights_last_unless_valued() {
        let mut f = fixture(&[("a", false), ("b", false)]);
        let mut ev = KeyEvent::new(Key::ArrowUp);
        f.button.on_key_down(&mut f.dropdown, &mut ev);
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.dropdown.active_index(), Some(1));

        let mut f = fixture(&[("a", false), ("b", false)]);
        f.dropdown.set_value(Some("a"));
        f.button.on_key_down(&mut f.dropdown, &mut KeyEvent::new(Key::ArrowUp));
        // Opening highlights the selected option instead.
        assert_eq!(f.dropdown.active_index(), Some(0));
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.dropdown.active_index(), Some(0));
        assert_eq!(f.doc.active_element(), Some(f.options[0].element()));
    }

    #[test]
    fn panel_keys_navigate_without_wrapping() {
        let mut f = fixture(&[("a", false), ("b", true), ("c", false)]);
        f.dropdown.open();
        key(&mut f, Key::ArrowDown);
        assert_eq!(f.dropdown.active_index(), Some(0));
        let ev = key(&mut f, Key::ArrowDown);
        assert!(ev.default_prevented() && ev.propagation_stopped());
        assert_eq!(f.dropdown.active_index(), Some(2));
        key(&mut f, Key::ArrowDown);
        assert_eq!(f.dropdown.active_index(), Some(2));
        key(&mut f, Key::Home);
        assert_eq!(f.dropdown.active_index(), Some(0));
        key(&mut f, Key::PageDown);
        assert_eq!(f.dropdown.active_index(), Some(2));
        key(&mut f, Key::ArrowUp);
        assert_eq!(f.dropdown.active_index(), Some(0));
    }

    #[test]
    fn enter_selects_active_closes_and_restores_focus() {
        let mut f = fixture(&[("a", false), ("b", false)]);
        f.dropdown.open();
        key(&mut f, Key::End);
        f.dropdown.take_notifications();

        key(&mut f, Key::Enter);
        assert!(!f.dropdown.is_open());
        assert_eq!(f.dropdown.active_index(), None);
        assert_eq!(
            f.dropdown.take_notifications().as_slice(),
            &[
                Notification::Input("b"),
                Notification::Blur,
                Notification::Open(false)
            ]
        );
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.button.element()));
    }

    #[test]
    fn escape_and_tab_are_consumed() {
        let mut f = fixture(&[("a", false)]);
        f.dropdown.open();
        let ev = key(&mut f, Key::Tab);
        assert!(ev.default_prevented() && ev.propagation_stopped());
        assert!(f.dropdown.is_open());

        let ev = key(&mut f, Key::Escape);
        assert!(ev.propagation_stopped());
        assert!(!f.dropdown.is_open());

        let ev = key(&mut f, Key::Other);
        assert!(!ev.default_prevented());
    }

    #[test]
    fn click_toggles_and_moves_focus() {
        let mut f = fixture(&[("a", false)]);
        let mut click = ClickEvent::new();
        f.button.on_click(&mut f.dropdown, &mut click);
        assert!(click.default_prevented());
        assert!(f.dropdown.is_open());
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.panel.element()));

        f.button.on_click(&mut f.dropdown, &mut ClickEvent::new());
        assert!(!f.dropdown.is_open());
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.button.element()));
    }

    #[test]
    fn option_click_selects_unless_disabled() {
        let mut f = fixture(&[("a", true), ("b", false)]);
        f.dropdown.open();
        f.dropdown.take_notifications();

        let mut click = ClickEvent::new();
        f.options[0].on_click(&mut f.dropdown, &mut click);
        assert!(click.default_prevented());
        assert!(f.dropdown.is_open());
        assert!(f.dropdown.take_notifications().is_empty());

        f.options[1].on_click(&mut f.dropdown, &mut ClickEvent::new());
        assert!(!f.dropdown.is_open());
        assert_eq!(
            f.dropdown.take_notifications().first(),
            Some(&Notification::Input("b"))
        );
    }

    #[test]
    fn removing_earlier_option_keeps_active_identity() {
        let mut f = fixture(&[("a", false), ("b", false), ("c", false)]);
        f.dropdown.open();
        f.dropdown.go_to_option(Action::Last);
        let c = f.options[2];
        assert!(c.is_active(&f.dropdown));

        let a = f.options.remove(0);
        a.unmount(&mut f.dropdown);
        assert_eq!(f.dropdown.active_index(), Some(1));
        assert!(c.is_active(&f.dropdown));

        c.unmount(&mut f.dropdown);
        assert_eq!(f.dropdown.active_index(), None);
    }

    #[test]
    fn selected_option_is_highlighted_and_focused_on_open() {
        let mut f = fixture(&[("a", false), ("b", false)]);
        f.dropdown.set_value(Some("b"));
        assert!(f.options[1].is_selected(&f.dropdown));
        f.dropdown.open();
        assert_eq!(f.dropdown.active_index(), Some(1));
        f.dropdown.after_render(&mut f.doc);
        assert_eq!(f.doc.active_element(), Some(f.options[1].element()));
    }

    #[test]
    fn disabled_dropdown_ignores_everything() {
        let mut f = fixture(&[("a", false)]);
        f.dropdown.open();
        f.dropdown.take_notifications();
        f.dropdown.set_disabled(true);
        assert!(!f.dropdown.is_open());
        assert_eq!(
            f.dropdown.take_notifications().as_slice(),
            &[Notification::Blur, Notification::Open(false)]
        );

        f.dropdown.open();
        f.dropdown.select("a");
        let mut click = ClickEvent::new();
        f.button.on_click(&mut f.dropdown, &mut click);
        assert!(!click.default_prevented());
        assert!(!f.dropdown.is_open());
        assert!(f.dropdown.take_notifications().is_empty());
    }

    #[test]
    fn render_strategy_follows_open_state() {
        let mut f = fixture(&[]);
        assert!(!f.panel.should_render(&f.dropdown));
        f.dropdown.open();
        assert!(f.panel.should_render(&f.dropdown));
        assert!(!f.panel.is_hidden(&f.dropdown));
    }
}
