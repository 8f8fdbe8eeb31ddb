// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inside/outside checks against a set of owned elements.
//!
//! A disclosure owns several disjoint regions (its trigger, its panel, and for
//! dialogs a wrapper). Pointer and focus movement between those regions must
//! not count as leaving, while interaction anywhere else should.
//!
//! For "leave" events ([`DomEvent::is_leave`]) the element that matters is the
//! one pointer or focus moved *to* (the related target); for everything else it
//! is the event target.

use hinge_focus::ElementTree;

use crate::binding::DomEvent;

/// A pointer or focus event as seen by a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionEvent<K> {
    /// Event type.
    pub event: DomEvent,
    /// Element the event was dispatched to.
    pub target: Option<K>,
    /// For leave events, the element pointer or focus moved to.
    pub related_target: Option<K>,
}

impl<K: Copy> InteractionEvent<K> {
    /// A pointer or focus event on `target` without a related target.
    pub fn new(event: DomEvent, target: K) -> Self {
        Self {
            event,
            target: Some(target),
            related_target: None,
        }
    }

    /// A leave-style event from `target` towards `related_target`.
    pub fn leaving(event: DomEvent, target: K, related_target: Option<K>) -> Self {
        Self {
            event,
            target: Some(target),
            related_target,
        }
    }

    /// The element whose position decides inside vs. outside.
    pub fn relevant_target(&self) -> Option<K> {
        if self.event.is_leave() {
            self.related_target
        } else {
            self.target
        }
    }
}

/// Whether `event` happened inside any of the `owned` elements.
///
/// Unset entries in `owned` (unmounted elements) are ignored. An event without
/// a relevant target (for example, focus leaving the window) is outside.
pub fn is_inside<K, T>(tree: &T, event: &InteractionEvent<K>, owned: &[Option<K>]) -> bool
where
    K: Copy + Eq,
    T: ElementTree<K> + ?Sized,
{
    let Some(target) = event.relevant_target() else {
        return false;
    };
    owned
        .iter()
        .flatten()
        .any(|&region| tree.contains(region, target))
}
