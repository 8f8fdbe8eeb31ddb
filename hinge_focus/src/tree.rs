// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing element tree abstraction.

use alloc::vec::Vec;

/// Options passed to [`ElementTree::focus`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FocusOptions {
    /// Ask the host not to scroll the element into view as part of focusing.
    pub prevent_scroll: bool,
}

/// A read/focus view of a DOM-like element tree.
///
/// Hosts implement this on top of their view layer. `K` is a small, copyable
/// element handle. Every method must tolerate handles that no longer refer to
/// a mounted element: queries answer `false`/empty and mutations do nothing.
pub trait ElementTree<K>
where
    K: Copy + Eq,
{
    /// Whether `node` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: K, node: K) -> bool;

    /// Focusable descendants of `container` in document order.
    ///
    /// "Focusable" means interactive, not hidden, and without a negative tab
    /// index. The container itself is not included.
    fn focusable_within(&self, container: K) -> Vec<K>;

    /// Whether `node` would be part of a [`Self::focusable_within`] result.
    fn is_focusable(&self, node: K) -> bool;

    /// The element that currently has focus.
    fn active_element(&self) -> Option<K>;

    /// Try to focus `node`. Hosts may refuse; callers check
    /// [`Self::active_element`] afterwards.
    fn focus(&mut self, node: K, options: FocusOptions);

    /// Scroll the nearest scrollable ancestor so that `node` is visible,
    /// moving as little as possible.
    fn scroll_into_view(&mut self, node: K);
}

/// A slot holding a possibly-unset element handle.
///
/// The view layer owns element lifetimes and may swap the handle behind a slot
/// on every render, or clear it on unmount. Controllers resolve the slot at the
/// moment they need it instead of caching the handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef<K>(Option<K>);

impl<K: Copy> NodeRef<K> {
    /// An unset slot.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Point the slot at `node`.
    pub fn set(&mut self, node: K) {
        self.0 = Some(node);
    }

    /// Clear the slot (the element was unmounted).
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// The current handle, if the element is mounted.
    pub fn get(&self) -> Option<K> {
        self.0
    }

    /// Whether the slot currently holds a handle.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl<K> Default for NodeRef<K> {
    fn default() -> Self {
        Self(None)
    }
}

impl<K> From<Option<K>> for NodeRef<K> {
    fn from(node: Option<K>) -> Self {
        Self(node)
    }
}
