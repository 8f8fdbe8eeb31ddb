// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-index resolution.

/// Navigation intent for the active option of a list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action<I> {
    /// Move to the first enabled item.
    First,
    /// Move to the closest enabled item before the active one.
    Previous,
    /// Move to the closest enabled item after the active one.
    Next,
    /// Move to the last enabled item.
    Last,
    /// Move to the item with the given id.
    Specific(I),
    /// Clear the active item.
    Nothing,
}

/// An item that [`resolve`] can navigate over.
pub trait ListItem {
    /// Identity of the item, used by [`Action::Specific`].
    type Id: PartialEq;

    /// Identity of this item.
    fn id(&self) -> &Self::Id;

    /// Whether this item is skipped by directional navigation.
    fn is_disabled(&self) -> bool;
}

/// Compute the next active index for `action`.
///
/// - An empty `items` slice always yields `None`.
/// - [`Action::Next`] and [`Action::Previous`] only consider items strictly
///   after/before `current` and never wrap. With no current item the whole list
///   is eligible.
/// - [`Action::Nothing`] yields `None`.
/// - Any action that finds no match returns `current` unchanged.
/// - A `current` outside `items` (left over from a longer list) is treated as
///   no current item.
///
/// ```rust
/// use hinge_listbox::{Action, ListItem, resolve};
///
/// struct Item(u32, bool);
/// impl ListItem for Item {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.0 }
///     fn is_disabled(&self) -> bool { self.1 }
/// }
///
/// let items = [Item(1, false), Item(2, true), Item(3, false)];
/// assert_eq!(resolve(&Action::Next, &items, Some(0)), Some(2));
/// assert_eq!(resolve(&Action::Previous, &items, Some(2)), Some(0));
/// // No wrap at the end.
/// assert_eq!(resolve(&Action::Next, &items, Some(2)), Some(2));
/// ```
pub fn resolve<T: ListItem>(
    action: &Action<T::Id>,
    items: &[T],
    current: Option<usize>,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let current = current.filter(|&i| i < items.len());
    let enabled = |item: &T| !item.is_disabled();

    let found = match action {
        Action::First => items.iter().position(enabled),
        Action::Last => items.iter().rposition(enabled),
        Action::Next => {
            let start = current.map_or(0, |i| i.saturating_add(1));
            items
                .iter()
                .enumerate()
                .skip(start)
                .find(|(_, item)| enabled(*item))
                .map(|(i, _)| i)
        }
        Action::Previous => {
            let end = current.unwrap_or(items.len()).min(items.len());
            items[..end].iter().rposition(enabled)
        }
        Action::Specific(id) => items.iter().position(|item| item.id() == id),
        Action::Nothing => return None,
    };

    found.or(current)
}
