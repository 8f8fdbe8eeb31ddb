// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State shared by the single-select list controllers.

use alloc::vec::Vec;
use core::fmt::Debug;

use hinge_focus::{ElementTree, FocusOptions, NodeRef};
use hinge_listbox::{Action, OptionId, OptionRegistry};

use crate::config::RenderStrategy;
use crate::disclosure::Disclosure;
use crate::event::{Key, Notification, Outbox};
use crate::queue::RenderQueue;

/// Deferred work of a list controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListEffect {
    /// Return focus to the trigger, if the list is still closed.
    FocusTrigger,
    /// Focus the options panel, if the list is still open.
    FocusPanel,
    /// Navigate, if the controller has no value.
    NavigateIfEmpty(Action<OptionId>),
    /// Focus an option element, if the list is open and the option mounted.
    FocusOption(OptionId),
    /// Scroll the active option into view, if the list is open.
    ScrollActive,
}

/// What a key does inside an options panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PanelKey {
    Select,
    Navigate(Action<OptionId>),
    Dismiss,
    Swallow,
}

impl PanelKey {
    pub(crate) fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space | Key::Enter => Some(Self::Select),
            Key::Escape => Some(Self::Dismiss),
            Key::Tab => Some(Self::Swallow),
            other => navigation_action(other).map(Self::Navigate),
        }
    }
}

/// Listbox navigation keys.
pub(crate) fn navigation_action(key: Key) -> Option<Action<OptionId>> {
    match key {
        Key::ArrowDown => Some(Action::Next),
        Key::ArrowUp => Some(Action::Previous),
        Key::Home | Key::PageUp => Some(Action::First),
        Key::End | Key::PageDown => Some(Action::Last),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ListState<K, V> {
    pub(crate) disclosure: Disclosure,
    pub(crate) registry: OptionRegistry<V>,
    pub(crate) trigger: NodeRef<K>,
    pub(crate) panel: NodeRef<K>,
    pub(crate) strategy: RenderStrategy,
    elements: Vec<(OptionId, K)>,
    pub(crate) effects: RenderQueue<ListEffect>,
    pub(crate) outbox: Outbox<V>,
}

impl<K, V> ListState<K, V>
where
    K: Copy + Eq + Debug,
    V: Clone + PartialEq,
{
    pub(crate) fn new(disabled: bool) -> Self {
        Self {
            disclosure: Disclosure::new(false, disabled),
            registry: OptionRegistry::new(),
            trigger: NodeRef::empty(),
            panel: NodeRef::empty(),
            strategy: RenderStrategy::default(),
            elements: Vec::new(),
            effects: RenderQueue::default(),
            outbox: Outbox::default(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.disclosure.is_disabled()
    }

    /// Opening keeps the active index.
    pub(crate) fn open(&mut self) -> bool {
        if !self.disclosure.open() {
            return false;
        }
        self.outbox.push(Notification::Open(true));
        true
    }

    /// Closing always clears the active index.
    pub(crate) fn close(&mut self) -> bool {
        if !self.disclosure.close() {
            return false;
        }
        self.closed();
        true
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        if self.disclosure.set_disabled(disabled) {
            self.closed();
        }
    }

    fn closed(&mut self) {
        self.registry.clear_active();
        self.outbox.push(Notification::Blur);
        self.outbox.push(Notification::Open(false));
    }

    pub(crate) fn go_to_option(&mut self, action: &Action<OptionId>) {
        if self.is_disabled() || !self.is_open() {
            return;
        }
        if self.registry.navigate(action) {
            tracing::trace!(?action, active = ?self.registry.active_index(), "active option moved");
            self.effects.schedule(ListEffect::ScrollActive);
        }
    }

    pub(crate) fn emit_input(&mut self, value: V) {
        if self.is_disabled() {
            return;
        }
        self.outbox.push(Notification::Input(value));
    }

    pub(crate) fn emit_focus(&mut self) {
        self.outbox.push(Notification::Focus);
    }

    pub(crate) fn register(&mut self, element: K, value: V, disabled: bool) -> OptionId {
        let id = self.registry.next_id();
        self.registry.register(id, value, disabled);
        self.elements.push((id, element));
        id
    }

    /// Also drops the option's own pending effects.
    pub(crate) fn unregister(&mut self, id: OptionId) {
        self.registry.unregister(id);
        self.elements.retain(|&(other, _)| other != id);
        let dropped = self
            .effects
            .cancel(|e| matches!(e, ListEffect::FocusOption(other) if *other == id));
        if dropped > 0 {
            tracing::trace!(?id, dropped, "deferred effects of unmounted option cancelled");
        }
    }

    pub(crate) fn element_of(&self, id: OptionId) -> Option<K> {
        self.elements
            .iter()
            .find(|&&(other, _)| other == id)
            .map(|&(_, element)| element)
    }

    pub(crate) fn set_option_element(&mut self, id: OptionId, element: K) {
        if let Some(slot) = self.elements.iter_mut().find(|(other, _)| *other == id) {
            slot.1 = element;
        }
    }

    /// Make the option whose value equals `value` active and focus it after
    /// render. Only while open.
    pub(crate) fn sync_selected(&mut self, value: Option<&V>) {
        if !self.is_open() {
            return;
        }
        let Some(value) = value else {
            return;
        };
        let Some(id) = self
            .registry
            .entries()
            .iter()
            .find(|e| e.value == *value)
            .map(|e| e.id)
        else {
            return;
        };
        self.go_to_option(&Action::Specific(id));
        self.effects.schedule(ListEffect::FocusOption(id));
    }

    /// Run deferred effects against the current state, until none are left.
    ///
    /// An effect may queue another (moving the active option queues a
    /// scroll); those run in the same call.
    pub(crate) fn after_render<T>(&mut self, tree: &mut T, has_value: bool)
    where
        T: ElementTree<K> + ?Sized,
    {
        while !self.effects.is_empty() {
            for effect in self.effects.drain() {
                self.run_effect(tree, effect, has_value);
            }
        }
    }

    fn run_effect<T>(&mut self, tree: &mut T, effect: ListEffect, has_value: bool)
    where
        T: ElementTree<K> + ?Sized,
    {
        let quiet = FocusOptions {
            prevent_scroll: true,
        };
        match effect {
            ListEffect::FocusTrigger => match self.trigger.get() {
                Some(trigger) if !self.is_open() => tree.focus(trigger, quiet),
                _ => tracing::trace!(?effect, "deferred effect dropped"),
            },
            ListEffect::FocusPanel => match self.panel.get() {
                Some(panel) if self.is_open() => tree.focus(panel, quiet),
                _ => tracing::trace!(?effect, "deferred effect dropped"),
            },
            ListEffect::NavigateIfEmpty(action) => {
                if !has_value {
                    self.go_to_option(&action);
                }
            }
            ListEffect::FocusOption(id) => match self.element_of(id) {
                Some(element) if self.is_open() => {
                    tree.focus(element, FocusOptions::default());
                }
                _ => tracing::trace!(?effect, "deferred effect dropped"),
            },
            ListEffect::ScrollActive => {
                let active = self.registry.active().map(|e| e.id);
                match active.and_then(|id| self.element_of(id)) {
                    Some(element) if self.is_open() => tree.scroll_into_view(element),
                    _ => tracing::trace!(?effect, "deferred effect dropped"),
                }
            }
        }
    }
}
