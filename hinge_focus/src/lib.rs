// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hinge Focus: focus traversal over DOM-like element trees.
//!
//! This crate models keyboard focus movement as a combination of:
//! - An **element tree** ([`ElementTree`]) that the host implements on top of
//!   its real view layer. It answers containment and focusability queries and
//!   performs the actual focus call.
//! - A **focus walk** ([`focus_in`]) that moves focus to the first, next, or
//!   previous focusable element in a container (or an explicit list), with an
//!   optional [`WrapMode::Loop`], skipping elements that refuse focus.
//! - **Element slots** ([`NodeRef`]) that hold a possibly-unset element handle
//!   so controllers can refer to "the trigger" or "the panel" across renders.
//! - A **reference tree** ([`Document`]) that follows browser focusability
//!   rules and is handy for tests and for hosts without their own tree.
//!
//! ## Minimal example
//!
//! ```rust
//! use hinge_focus::{Document, ElementTree, FocusBehavior, FocusScope, Tag, WrapMode, focus_in};
//!
//! let mut doc = Document::new();
//! let panel = doc.append(doc.body(), Tag::Div);
//! let ok = doc.append(panel, Tag::Button);
//! let cancel = doc.append(panel, Tag::Button);
//!
//! // Focus the first button in the panel…
//! assert_eq!(
//!     focus_in(&mut doc, FocusScope::Container(panel), FocusBehavior::First, WrapMode::Never),
//!     Some(ok)
//! );
//! // …move to the next one…
//! focus_in(&mut doc, FocusScope::Container(panel), FocusBehavior::Next, WrapMode::Never);
//! assert_eq!(doc.active_element(), Some(cancel));
//! // …and wrap around when looping.
//! focus_in(&mut doc, FocusScope::Container(panel), FocusBehavior::Next, WrapMode::Loop);
//! assert_eq!(doc.active_element(), Some(ok));
//! ```
//!
//! Scrolling is never a side effect of focusing: [`focus_in`] always asks for
//! [`FocusOptions::prevent_scroll`]. Use [`ElementTree::scroll_into_view`] (or
//! the pure [`scroll_into_view_nearest`] helper) as a separate step.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod scroll;
mod traversal;
mod tree;

pub use document::{Document, ElementId, Tag};
pub use scroll::scroll_into_view_nearest;
pub use traversal::{FocusBehavior, FocusScope, WrapMode, focus_element_or_first, focus_in};
pub use tree::{ElementTree, FocusOptions, NodeRef};
