// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered option registry with an identity-stable active pointer.

use alloc::vec::Vec;

use crate::resolve::{Action, ListItem, resolve};

/// Identifier of a registered option.
///
/// Ids are opaque; [`OptionRegistry::next_id`] hands out fresh ones in
/// increasing order so each mounted option can own a unique id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(pub u64);

/// A single registered option.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionEntry<V> {
    /// Identity of the option. Stable for as long as the option is mounted.
    pub id: OptionId,
    /// Payload selected when this option is chosen. May change without
    /// affecting identity.
    pub value: V,
    /// Disabled options are skipped by directional navigation.
    pub disabled: bool,
}

impl<V> ListItem for OptionEntry<V> {
    type Id = OptionId;

    fn id(&self) -> &OptionId {
        &self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Ordered options of one list plus its active pointer.
///
/// Insertion order is the visual order. The active index, when set, always
/// points at an option that is currently registered.
#[derive(Clone, Debug)]
pub struct OptionRegistry<V> {
    entries: Vec<OptionEntry<V>>,
    active: Option<usize>,
    next_id: u64,
}

impl<V> Default for OptionRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OptionRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Allocate a fresh option id.
    pub fn next_id(&mut self) -> OptionId {
        let id = OptionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an option.
    ///
    /// Callers guarantee `id` is not already registered.
    pub fn register(&mut self, id: OptionId, value: V, disabled: bool) {
        debug_assert!(
            self.index_of(id).is_none(),
            "option {id:?} registered twice"
        );
        self.entries.push(OptionEntry {
            id,
            value,
            disabled,
        });
    }

    /// Remove the option with `id`, returning it if it was registered.
    ///
    /// If the removed option was the active one, the active index is cleared.
    /// Otherwise the active index is moved to wherever the previously active
    /// option now lives, so removing an earlier option does not shift the
    /// highlight onto a different option.
    pub fn unregister(&mut self, id: OptionId) -> Option<OptionEntry<V>> {
        let removed_at = self.index_of(id)?;
        let active_id = self.active.map(|i| self.entries[i].id);
        let removed = self.entries.remove(removed_at);

        self.active = match active_id {
            None => None,
            Some(active_id) if active_id == id => None,
            Some(active_id) => self.index_of(active_id),
        };
        tracing::trace!(?id, removed_at, active = ?self.active, "option unregistered");
        Some(removed)
    }

    /// Replace the payload and disabled flag of an option, keeping its identity
    /// and position. Returns `false` if `id` is not registered.
    pub fn update(&mut self, id: OptionId, value: V, disabled: bool) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        let entry = &mut self.entries[i];
        entry.value = value;
        entry.disabled = disabled;
        true
    }

    /// All options in order.
    pub fn entries(&self) -> &[OptionEntry<V>] {
        &self.entries
    }

    /// Option at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&OptionEntry<V>> {
        self.entries.get(index)
    }

    /// Position of the option with `id`.
    pub fn index_of(&self, id: OptionId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The explicitly set active index.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Set the active index directly. Out-of-range indices clear it.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.entries.len());
    }

    /// The active index, falling back to the first enabled option when none
    /// has been set explicitly.
    pub fn effective_active_index(&self) -> Option<usize> {
        self.active
            .or_else(|| self.entries.iter().position(|e| !e.disabled))
    }

    /// The explicitly active option.
    pub fn active(&self) -> Option<&OptionEntry<V>> {
        self.active.and_then(|i| self.entries.get(i))
    }

    /// The option at [`Self::effective_active_index`].
    pub fn effective_active(&self) -> Option<&OptionEntry<V>> {
        self.effective_active_index()
            .and_then(|i| self.entries.get(i))
    }

    /// Whether the option with `id` is the explicitly active one.
    pub fn is_active(&self, id: OptionId) -> bool {
        self.active().is_some_and(|e| e.id == id)
    }

    /// Apply a navigation action to the active index.
    ///
    /// Returns `true` if the active index changed.
    pub fn navigate(&mut self, action: &Action<OptionId>) -> bool {
        let next = resolve(action, &self.entries, self.active);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    /// Clear the active index.
    pub fn clear_active(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(disabled: &[bool]) -> (OptionRegistry<&'static str>, Vec<OptionId>) {
        const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];
        let mut reg = OptionRegistry::new();
        let mut ids = Vec::new();
        for (name, &disabled) in NAMES.iter().zip(disabled) {
            let id = reg.next_id();
            reg.register(id, *name, disabled);
            ids.push(id);
        }
        (reg, ids)
    }

    #[test]
    fn ids_are_monotonic() {
        let mut reg: OptionRegistry<()> = OptionRegistry::new();
        let a = reg.next_id();
        let b = reg.next_id();
        assert!(a < b);
    }

    #[test]
    fn removing_active_option_clears_active() {
        let (mut reg, ids) = registry(&[false, false, false]);
        reg.set_active_index(Some(1));
        reg.unregister(ids[1]);
        assert_eq!(reg.active_index(), None);
    }

    #[test]
    fn removing_earlier_option_keeps_active_identity() {
        let (mut reg, ids) = registry(&[false, false, false, false]);
        reg.set_active_index(Some(2));
        reg.unregister(ids[0]);
        assert_eq!(reg.active_index(), Some(1));
        assert_eq!(reg.active().map(|e| e.id), Some(ids[2]));
    }

    #[test]
    fn removing_later_option_keeps_active_index() {
        let (mut reg, ids) = registry(&[false, false, false]);
        reg.set_active_index(Some(0));
        reg.unregister(ids[2]);
        assert_eq!(reg.active_index(), Some(0));
        assert_eq!(reg.active().map(|e| e.id), Some(ids[0]));
    }

    #[test]
    fn removing_without_active_leaves_none() {
        let (mut reg, ids) = registry(&[false, false]);
        assert!(reg.unregister(ids[0]).is_some());
        assert_eq!(reg.active_index(), None);
    }

    #[test]
    fn removing_unknown_id_is_noop() {
        let (mut reg, _) = registry(&[false, false]);
        reg.set_active_index(Some(1));
        assert!(reg.unregister(OptionId(999)).is_none());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.active_index(), Some(1));
    }

    #[test]
    fn effective_index_defaults_to_first_enabled() {
        let (mut reg, _) = registry(&[true, false, false]);
        assert_eq!(reg.effective_active_index(), Some(1));
        reg.set_active_index(Some(2));
        assert_eq!(reg.effective_active_index(), Some(2));

        let (all_disabled, _) = registry(&[true, true]);
        assert_eq!(all_disabled.effective_active_index(), None);
    }

    #[test]
    fn set_active_index_rejects_out_of_range() {
        let (mut reg, _) = registry(&[false]);
        reg.set_active_index(Some(4));
        assert_eq!(reg.active_index(), None);
    }

    #[test]
    fn navigate_reports_change() {
        let (mut reg, ids) = registry(&[false, true, false]);
        assert!(reg.navigate(&Action::First));
        assert!(!reg.navigate(&Action::First));
        assert!(reg.navigate(&Action::Next));
        assert_eq!(reg.active_index(), Some(2));
        assert!(reg.navigate(&Action::Specific(ids[0])));
        assert!(reg.navigate(&Action::Nothing));
        assert_eq!(reg.active_index(), None);
    }

    #[test]
    fn update_keeps_identity_and_position() {
        let (mut reg, ids) = registry(&[false, false]);
        reg.set_active_index(Some(1));
        assert!(reg.update(ids[1], "z", true));
        assert_eq!(reg.get(1).map(|e| e.value), Some("z"));
        assert!(reg.is_active(ids[1]));
        assert!(!reg.update(OptionId(77), "x", false));
    }
}
