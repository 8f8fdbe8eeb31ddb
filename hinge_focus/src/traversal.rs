// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional focus movement inside a container.

use alloc::vec::Vec;

use crate::tree::{ElementTree, FocusOptions};

/// Where [`focus_in`] should move focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusBehavior {
    /// The first focusable element, starting from the current focus if it is
    /// already inside the scope.
    First,
    /// The element after the currently focused one (for example, Tab).
    Next,
    /// The element before the currently focused one (for example, Shift+Tab).
    Previous,
}

impl FocusBehavior {
    fn offset(self) -> isize {
        match self {
            Self::First => 0,
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Wrap behavior at the ends of the focusable sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the edges; moving past them does nothing.
    #[default]
    Never,
    /// Continue from the opposite end.
    Loop,
}

/// The set of elements [`focus_in`] walks over.
#[derive(Copy, Clone, Debug)]
pub enum FocusScope<'a, K> {
    /// All focusable descendants of a container, in document order.
    Container(K),
    /// An explicit, already ordered list.
    Elements(&'a [K]),
}

/// Move focus within `scope`.
///
/// The walk starts at the position of the currently focused element (or the
/// first position when focus is elsewhere), shifted by `behavior`. Elements
/// that refuse focus are skipped in the direction of travel. The walk visits
/// each element at most once and gives up silently when it runs off the end
/// with [`WrapMode::Never`] or has tried every element.
///
/// Focus is always requested with [`FocusOptions::prevent_scroll`].
///
/// Returns the element that ended up focused, or `None` if the walk aborted.
pub fn focus_in<K, T>(
    tree: &mut T,
    scope: FocusScope<'_, K>,
    behavior: FocusBehavior,
    wrap: WrapMode,
) -> Option<K>
where
    K: Copy + Eq + core::fmt::Debug,
    T: ElementTree<K> + ?Sized,
{
    let owned: Vec<K>;
    let elements: &[K] = match scope {
        FocusScope::Container(container) => {
            owned = tree.focusable_within(container);
            &owned
        }
        FocusScope::Elements(list) => list,
    };

    let len = elements.len() as isize;
    let active = tree.active_element();
    let current = elements
        .iter()
        .position(|&e| Some(e) == active)
        .unwrap_or(0) as isize;
    let start = current + behavior.offset();
    // `First` keeps walking forward when its candidate refuses focus.
    let step = match behavior.offset() {
        0 => 1,
        d => d,
    };

    let options = FocusOptions {
        prevent_scroll: true,
    };
    let mut offset = 0_isize;
    loop {
        if offset >= len || offset + len <= 0 {
            tracing::trace!(?behavior, len, "focus walk exhausted");
            return None;
        }

        let mut index = start + offset;
        match wrap {
            WrapMode::Loop => index = index.rem_euclid(len),
            WrapMode::Never => {
                if index < 0 || index >= len {
                    return None;
                }
            }
        }

        let candidate = elements[index as usize];
        tree.focus(candidate, options);
        if tree.active_element() == Some(candidate) {
            return Some(candidate);
        }
        offset += step;
    }
}

/// Focus `element` itself when it is focusable, otherwise its first focusable
/// descendant.
///
/// This is how focus is returned to a trigger: a plain button is focused
/// directly, while a composite trigger (for example, a wrapper around an input)
/// hands focus to its first focusable child.
pub fn focus_element_or_first<K, T>(tree: &mut T, element: K) -> Option<K>
where
    K: Copy + Eq + core::fmt::Debug,
    T: ElementTree<K> + ?Sized,
{
    if tree.is_focusable(element) {
        tree.focus(element, FocusOptions::default());
        return (tree.active_element() == Some(element)).then_some(element);
    }
    focus_in(
        tree,
        FocusScope::Container(element),
        FocusBehavior::First,
        WrapMode::Never,
    )
}
