// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory element tree with browser-like focus rules.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Vec2};

use crate::scroll::scroll_into_view_nearest;
use crate::tree::{ElementTree, FocusOptions};

/// Handle to an element of a [`Document`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

/// Element kind, as far as focusability is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The document body. Only the root has this tag.
    Body,
    /// Generic container (`div`, `ul`, `li`, …).
    Div,
    /// `button`.
    Button,
    /// `input`.
    Input,
    /// `select`.
    Select,
    /// `textarea`.
    Textarea,
    /// `a`.
    Anchor,
    /// `area`.
    Area,
    /// `iframe`.
    Iframe,
}

impl Tag {
    fn is_form_control(self) -> bool {
        matches!(self, Self::Button | Self::Input | Self::Select | Self::Textarea)
    }
}

#[derive(Clone, Debug)]
struct Element {
    tag: Tag,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    disabled: bool,
    hidden: bool,
    href: bool,
    content_editable: bool,
    tab_index: Option<i32>,
    bounds: Rect,
    scrollable: bool,
    scroll_offset: Vec2,
}

impl Element {
    fn new(tag: Tag, parent: Option<ElementId>) -> Self {
        Self {
            tag,
            parent,
            children: Vec::new(),
            disabled: false,
            hidden: false,
            href: false,
            content_editable: false,
            tab_index: None,
            bounds: Rect::ZERO,
            scrollable: false,
            scroll_offset: Vec2::ZERO,
        }
    }

    /// Matches the tab-order selector set, ignoring visibility.
    fn matches_focusable(&self) -> bool {
        if self.tab_index.is_some_and(|t| t < 0) {
            return false;
        }
        self.content_editable
            || self.tab_index.is_some()
            || (matches!(self.tag, Tag::Anchor | Tag::Area) && self.href)
            || (self.tag.is_form_control() && !self.disabled)
            || self.tag == Tag::Iframe
    }

    /// Programmatic focus also reaches `tabindex="-1"` elements.
    fn accepts_focus(&self) -> bool {
        if self.tag.is_form_control() && self.disabled {
            return false;
        }
        self.matches_focusable() || self.tab_index.is_some()
    }
}

/// A simple element tree implementing [`ElementTree`].
///
/// Bounds and scroll offsets are expressed in one shared content coordinate
/// space; a scrollable element shows the part of that space covered by its
/// bounds translated by its scroll offset.
#[derive(Clone, Debug)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    body: ElementId,
    active: Option<ElementId>,
    next_id: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only a body element.
    pub fn new() -> Self {
        let body = ElementId(0);
        let mut elements = HashMap::new();
        elements.insert(body, Element::new(Tag::Body, None));
        Self {
            elements,
            body,
            active: None,
            next_id: 1,
        }
    }

    /// The root element.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Append a new element as the last child of `parent`.
    ///
    /// Appending to an element that is no longer in the document creates a
    /// detached element.
    pub fn append(&mut self, parent: ElementId, tag: Tag) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let parent = match self.elements.get_mut(&parent) {
            Some(p) => {
                p.children.push(id);
                Some(parent)
            }
            None => None,
        };
        self.elements.insert(id, Element::new(tag, parent));
        id
    }

    /// Remove `id` and its subtree. Focus inside the subtree is dropped.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.body {
            return;
        }
        if let Some(parent) = self.elements.get(&id).and_then(|e| e.parent)
            && let Some(p) = self.elements.get_mut(&parent)
        {
            p.children.retain(|&c| c != id);
        }
        if self.active.is_some_and(|a| self.contains(id, a)) {
            self.active = None;
        }
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.elements.remove(&next) {
                stack.extend(el.children);
            }
        }
    }

    /// Whether `id` is part of this document.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Set the `disabled` attribute.
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.disabled = disabled;
        }
    }

    /// Set or clear the `hidden` attribute. Hidden elements and their
    /// descendants cannot take focus.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.hidden = hidden;
        }
    }

    /// Set or clear the `href` attribute.
    pub fn set_href(&mut self, id: ElementId, href: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.href = href;
        }
    }

    /// Set `contenteditable`.
    pub fn set_content_editable(&mut self, id: ElementId, editable: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.content_editable = editable;
        }
    }

    /// Set or clear `tabindex`.
    pub fn set_tab_index(&mut self, id: ElementId, tab_index: Option<i32>) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.tab_index = tab_index;
        }
    }

    /// Set the layout bounds of an element in content coordinates.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.bounds = bounds;
        }
    }

    /// Mark an element as a scroll container.
    pub fn set_scrollable(&mut self, id: ElementId, scrollable: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.scrollable = scrollable;
        }
    }

    /// Current scroll offset of an element.
    pub fn scroll_offset(&self, id: ElementId) -> Vec2 {
        self.elements
            .get(&id)
            .map_or(Vec2::ZERO, |el| el.scroll_offset)
    }

    /// Drop focus.
    pub fn blur(&mut self) {
        self.active = None;
    }

    fn is_rendered(&self, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            let Some(el) = self.elements.get(&c) else {
                return false;
            };
            if el.hidden {
                return false;
            }
            cursor = el.parent;
        }
        true
    }

    fn collect_descendants(&self, root: ElementId, out: &mut Vec<ElementId>) {
        let Some(el) = self.elements.get(&root) else {
            return;
        };
        // Pre-order, so `out` ends up in document order.
        let mut stack: Vec<ElementId> = el.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(child) = self.elements.get(&next) {
                stack.extend(child.children.iter().rev().copied());
            }
        }
    }
}

impl ElementTree<ElementId> for Document {
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.elements.contains_key(&ancestor) {
            return false;
        }
        let mut cursor = Some(node);
        while let Some(c) = cursor {
            if c == ancestor {
                return true;
            }
            cursor = self.elements.get(&c).and_then(|e| e.parent);
        }
        false
    }

    fn focusable_within(&self, container: ElementId) -> Vec<ElementId> {
        let mut all = Vec::new();
        self.collect_descendants(container, &mut all);
        all.retain(|&id| self.is_focusable(id));
        all
    }

    fn is_focusable(&self, node: ElementId) -> bool {
        self.elements
            .get(&node)
            .is_some_and(Element::matches_focusable)
            && self.is_rendered(node)
    }

    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn focus(&mut self, node: ElementId, options: FocusOptions) {
        let accepts = self
            .elements
            .get(&node)
            .is_some_and(Element::accepts_focus);
        if !accepts || !self.is_rendered(node) {
            return;
        }
        self.active = Some(node);
        if !options.prevent_scroll {
            self.scroll_into_view(node);
        }
    }

    fn scroll_into_view(&mut self, node: ElementId) {
        let Some(target) = self.elements.get(&node).map(|e| e.bounds) else {
            return;
        };
        let mut cursor = self.elements.get(&node).and_then(|e| e.parent);
        while let Some(c) = cursor {
            let Some(el) = self.elements.get_mut(&c) else {
                return;
            };
            if el.scrollable {
                let visible = el.bounds + el.scroll_offset;
                el.scroll_offset += scroll_into_view_nearest(visible, target);
                return;
            }
            cursor = el.parent;
        }
    }
}
