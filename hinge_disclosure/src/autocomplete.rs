// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autocomplete: a text input driving a single-select option list.
//!
//! Unlike [`Dropdown`](crate::Dropdown), the highlighted option defaults to
//! the first enabled one, so `Enter` picks something as soon as the list has
//! options. Choosing an option goes through a [`ValueBinding`], which keeps
//! the input text formatted for the chosen value.

use alloc::string::String;
use core::fmt::Debug;

use hinge_focus::ElementTree;
use hinge_listbox::{Action, OptionEntry, OptionId};
use hinge_trigger::{InteractionEvent, is_inside};
use smallvec::SmallVec;

use crate::binding::ValueBinding;
use crate::config::{AutocompleteConfig, PanelConfig, RenderStrategy};
use crate::error::{UsageError, require};
use crate::event::{ClickEvent, Key, KeyEvent, Notification};
use crate::list::{ListEffect, ListState, PanelKey, navigation_action};

/// Autocomplete controller.
#[derive(Debug)]
pub struct Autocomplete<K, V> {
    list: ListState<K, V>,
    binding: ValueBinding<V>,
}

impl<K, V> Autocomplete<K, V>
where
    K: Copy + Eq + Debug,
    V: Clone + PartialEq,
{
    /// A closed autocomplete showing values through `display`.
    pub fn new(config: AutocompleteConfig, display: impl Fn(&V) -> String + 'static) -> Self {
        Self {
            list: ListState::new(config.disabled),
            binding: ValueBinding::new(display),
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

    /// The bound value.
    pub fn value(&self) -> Option<&V> {
        self.binding.value()
    }

    /// The text shown in the input.
    pub fn display_text(&self) -> &str {
        self.binding.text()
    }

    /// Registered options in visual order.
    pub fn options(&self) -> &[OptionEntry<V>] {
        self.list.registry.entries()
    }

    /// The highlighted option index, defaulting to the first enabled option.
    pub fn effective_active_index(&self) -> Option<usize> {
        self.list.registry.effective_active_index()
    }

    /// The input element, if mounted.
    pub fn input(&self) -> Option<K> {
        self.list.trigger.get()
    }

    /// The options panel element, if mounted.
    pub fn panel(&self) -> Option<K> {
        self.list.panel.get()
    }

    /// Open the panel.
    pub fn open(&mut self) {
        if self.list.open() {
            self.list.sync_selected(self.binding.value());
        }
    }

    /// Close the panel and clear the highlighted option.
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

    /// Move the highlighted option. Ignored while closed or disabled.
    pub fn go_to_option(&mut self, action: Action<OptionId>) {
        self.list.go_to_option(&action);
    }

    /// Choose `value`: update the input text and report it. Ignored while
    /// disabled.
    pub fn select(&mut self, value: V) {
        if self.is_disabled() {
            return;
        }
        let value = self.binding.select(value);
        self.list.emit_input(value);
    }

    /// Choose the highlighted option, if there is one.
    pub fn select_active_option(&mut self) {
        let Some((id, value)) = self
            .list
            .registry
            .effective_active()
            .map(|e| (e.id, e.value.clone()))
        else {
            return;
        };
        self.select(value);
        self.go_to_option(Action::Specific(id));
    }

    /// Adopt a value from the consumer. The input text is re-formatted but no
    /// [`Notification::Input`] is emitted.
    pub fn set_value(&mut self, value: Option<V>) {
        if self.binding.sync(value) {
            self.list.sync_selected(self.binding.value());
        }
    }

    /// Register an option rendered as `element`. Returns its fresh id.
    pub fn register(&mut self, element: K, value: V, disabled: bool) -> OptionId {
        let selected = self.binding.value() == Some(&value);
        let id = self.list.register(element, value, disabled);
        if selected {
            self.list.sync_selected(self.binding.value());
        }
        id
    }

    /// Remove an option, keeping the highlighted option stable.
    pub fn unregister(&mut self, id: OptionId) {
        self.list.unregister(id);
    }

    /// Close on a pointer press outside both the panel and the input.
    pub fn on_pointer_down<T>(&mut self, tree: &T, event: &InteractionEvent<K>)
    where
        T: ElementTree<K> + ?Sized,
    {
        if !self.is_open() {
            return;
        }
        let owned = [self.list.panel.get(), self.list.trigger.get()];
        if !is_inside(tree, event, &owned) {
            self.close();
        }
    }

    /// Notifications since the last call, oldest first.
    pub fn take_notifications(&mut self) -> SmallVec<[Notification<V>; 4]> {
        self.list.outbox.take()
    }

    /// Run deferred focus and scroll effects. Call once the render pass that
    /// follows an event has committed.
    pub fn after_render<T>(&mut self, tree: &mut T)
    where
        T: ElementTree<K> + ?Sized,
    {
        let has_value = self.binding.value().is_some();
        self.list.after_render(tree, has_value);
    }

    fn close_and_restore_focus(&mut self) {
        self.close();
        self.list.effects.schedule(ListEffect::FocusTrigger);
    }
}

/// The text input of an [`Autocomplete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutocompleteInput<K> {
    element: K,
}

impl<K> AutocompleteInput<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the input of `autocomplete`.
    pub fn mount<V>(
        autocomplete: Option<&mut Autocomplete<K, V>>,
        element: K,
    ) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let autocomplete = require(autocomplete, "AutocompleteInput", "Autocomplete")?;
        autocomplete.list.trigger.set(element);
        Ok(Self { element })
    }

    /// The input element.
    pub fn element(&self) -> K {
        self.element
    }

    /// Keyboard handling while focus is in the input.
    pub fn on_key_down<V>(&self, autocomplete: &mut Autocomplete<K, V>, event: &mut KeyEvent)
    where
        V: Clone + PartialEq,
    {
        let open = autocomplete.is_open();
        match event.key {
            Key::Enter if open => {
                event.consume();
                autocomplete.select_active_option();
                autocomplete.close();
            }
            Key::Escape if open => {
                event.consume();
                autocomplete.close();
            }
            Key::ArrowDown | Key::ArrowUp if !open => {
                event.consume();
                autocomplete.open();
                if event.key == Key::ArrowUp {
                    autocomplete
                        .list
                        .effects
                        .schedule(ListEffect::NavigateIfEmpty(Action::Last));
                }
            }
            key => {
                if let Some(action) = navigation_action(key) {
                    event.consume();
                    autocomplete.go_to_option(action);
                }
            }
        }
    }

    /// Clicking a closed input opens the panel.
    pub fn on_click<V>(&self, autocomplete: &mut Autocomplete<K, V>, event: &mut ClickEvent)
    where
        V: Clone + PartialEq,
    {
        if autocomplete.is_disabled() || autocomplete.is_open() {
            return;
        }
        event.prevent_default();
        autocomplete.open();
    }

    /// Typing opens the panel and replaces the shown text.
    pub fn on_input<V>(&self, autocomplete: &mut Autocomplete<K, V>, text: &str)
    where
        V: Clone + PartialEq,
    {
        autocomplete.open();
        autocomplete.binding.set_text(text);
    }

    /// Report input focus.
    pub fn on_focus<V>(&self, autocomplete: &mut Autocomplete<K, V>)
    where
        V: Clone + PartialEq,
    {
        autocomplete.list.emit_focus();
    }

    /// Release the input slot if it still refers to this element.
    pub fn unmount<V>(self, autocomplete: &mut Autocomplete<K, V>)
    where
        V: Clone + PartialEq,
    {
        if autocomplete.list.trigger.get() == Some(self.element) {
            autocomplete.list.trigger.clear();
        }
    }
}

/// The panel listing the options of an [`Autocomplete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutocompleteOptions<K> {
    element: K,
    strategy: RenderStrategy,
}

impl<K> AutocompleteOptions<K>
where
    K: Copy + Eq + Debug,
{
    /// Mount `element` as the options panel of `autocomplete`.
    pub fn mount<V>(
        autocomplete: Option<&mut Autocomplete<K, V>>,
        element: K,
        config: PanelConfig,
    ) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let autocomplete = require(autocomplete, "AutocompleteOptions", "Autocomplete")?;
        autocomplete.list.panel.set(element);
        autocomplete.list.strategy = config.strategy();
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
    pub fn should_render<V>(&self, autocomplete: &Autocomplete<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        self.strategy.should_render(autocomplete.is_open())
    }

    /// Whether the host should render the panel hidden now.
    pub fn is_hidden<V>(&self, autocomplete: &Autocomplete<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        self.strategy.is_hidden(autocomplete.is_open())
    }

    /// Listbox keys while focus is in the panel. Every handled key is consumed.
    pub fn on_key_down<V>(&self, autocomplete: &mut Autocomplete<K, V>, event: &mut KeyEvent)
    where
        V: Clone + PartialEq,
    {
        let Some(key) = PanelKey::from_key(event.key) else {
            return;
        };
        event.consume();
        match key {
            PanelKey::Select => {
                autocomplete.select_active_option();
                autocomplete.close_and_restore_focus();
            }
            PanelKey::Navigate(action) => autocomplete.go_to_option(action),
            PanelKey::Dismiss => autocomplete.close_and_restore_focus(),
            PanelKey::Swallow => {}
        }
    }

    /// Release the panel slot if it still refers to this element.
    pub fn unmount<V>(self, autocomplete: &mut Autocomplete<K, V>)
    where
        V: Clone + PartialEq,
    {
        if autocomplete.list.panel.get() == Some(self.element) {
            autocomplete.list.panel.clear();
        }
    }
}

/// One option of an [`Autocomplete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutocompleteOption<K> {
    id: OptionId,
    element: K,
}

impl<K> AutocompleteOption<K>
where
    K: Copy + Eq + Debug,
{
    /// Register `value` rendered as `element` with `autocomplete`.
    pub fn mount<V>(
        autocomplete: Option<&mut Autocomplete<K, V>>,
        element: K,
        value: V,
        disabled: bool,
    ) -> Result<Self, UsageError>
    where
        V: Clone + PartialEq,
    {
        let autocomplete = require(autocomplete, "AutocompleteOption", "Autocomplete")?;
        let id = autocomplete.register(element, value, disabled);
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

    /// Whether this is the highlighted option (defaulted).
    pub fn is_active<V>(&self, autocomplete: &Autocomplete<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        autocomplete
            .list
            .registry
            .effective_active()
            .is_some_and(|e| e.id == self.id)
    }

    /// Whether this option holds the bound value.
    pub fn is_selected<V>(&self, autocomplete: &Autocomplete<K, V>) -> bool
    where
        V: Clone + PartialEq,
    {
        let registry = &autocomplete.list.registry;
        registry
            .index_of(self.id)
            .and_then(|i| registry.get(i))
            .is_some_and(|e| autocomplete.binding.value() == Some(&e.value))
    }

    /// Choose this option and close. A click on a disabled option only has
    /// its default prevented.
    pub fn on_click<V>(&self, autocomplete: &mut Autocomplete<K, V>, event: &mut ClickEvent)
    where
        V: Clone + PartialEq,
    {
        let registry = &autocomplete.list.registry;
        let Some(entry) = registry.index_of(self.id).and_then(|i| registry.get(i)) else {
            return;
        };
        if entry.disabled {
            event.prevent_default();
            return;
        }
        let value = entry.value.clone();
        autocomplete.select(value);
        autocomplete.close_and_restore_focus();
    }

    /// Unregister; pending effects for this option are dropped.
    pub fn unmount<V>(self, autocomplete: &mut Autocomplete<K, V>)
    where
        V: Clone + PartialEq,
    {
        autocomplete.unregister(self.id);
    }
}
