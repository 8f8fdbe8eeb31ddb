// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hinge Disclosure: headless dropdown, autocomplete, popover, and dialog
//! controllers.
//!
//! Every controller wraps the same [`Disclosure`] state machine (open/closed
//! plus a disabled override) and composes it with the pieces from the sibling
//! crates: option bookkeeping from `hinge_listbox`, focus traversal from
//! `hinge_focus`, and trigger bindings, debounce timers, and the
//! outside-interaction check from `hinge_trigger`.
//!
//! Controllers own no markup. The host renders whatever it likes, mounts the
//! child primitives (`*Button`, `*Options`, `*Option`, `*Panel`) against their
//! controller, forwards events to them, and after each committed render calls
//! `after_render` so that deferred focus and scroll effects run against the
//! new element tree. State changes the consumer should hear about are queued
//! as [`Notification`]s and collected with `take_notifications`.
//!
//! ## Dropdown session
//!
//! ```rust
//! use hinge_disclosure::{
//!     Dropdown, DropdownButton, DropdownConfig, DropdownOption, DropdownOptions, Key,
//!     KeyEvent, Notification, PanelConfig,
//! };
//! use hinge_focus::{Document, ElementTree, Tag};
//!
//! let mut doc = Document::new();
//! let button_el = doc.append(doc.body(), Tag::Button);
//! let panel_el = doc.append(doc.body(), Tag::Div);
//! doc.set_tab_index(panel_el, Some(-1));
//!
//! let mut dropdown = Dropdown::new(DropdownConfig::default());
//! let button = DropdownButton::mount(Some(&mut dropdown), button_el)?;
//! let options = DropdownOptions::mount(Some(&mut dropdown), panel_el, PanelConfig::default())?;
//! for fruit in ["apple", "banana", "cherry"] {
//!     let el = doc.append(panel_el, Tag::Div);
//!     DropdownOption::mount(Some(&mut dropdown), el, fruit, false)?;
//! }
//!
//! // ArrowDown on the trigger opens; after the render the panel has focus
//! // and the first option is active.
//! button.on_key_down(&mut dropdown, &mut KeyEvent::new(Key::ArrowDown));
//! dropdown.after_render(&mut doc);
//! assert_eq!(doc.active_element(), Some(panel_el));
//! assert_eq!(dropdown.active_index(), Some(0));
//!
//! // Move down and pick.
//! options.on_key_down(&mut dropdown, &mut KeyEvent::new(Key::ArrowDown));
//! options.on_key_down(&mut dropdown, &mut KeyEvent::new(Key::Enter));
//! dropdown.after_render(&mut doc);
//! assert!(!dropdown.is_open());
//! assert_eq!(doc.active_element(), Some(button_el));
//! assert_eq!(
//!     dropdown.take_notifications().as_slice(),
//!     &[
//!         Notification::Open(true),
//!         Notification::Input("banana"),
//!         Notification::Blur,
//!         Notification::Open(false),
//!     ]
//! );
//! # Ok::<(), hinge_disclosure::UsageError>(())
//! ```
//!
//! ## Errors
//!
//! Mounting a child primitive without its controller is the only error:
//! [`UsageError::MissingParent`]. Every other misuse (closing a closed
//! controller, navigating while disabled, focusing an unmounted element) is a
//! silent no-op.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the data-only configuration
//!   types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod autocomplete;
mod binding;
mod config;
mod dialog;
mod disclosure;
mod dropdown;
mod error;
mod event;
mod list;
mod popover;
mod queue;

pub use autocomplete::{Autocomplete, AutocompleteInput, AutocompleteOption, AutocompleteOptions};
pub use binding::ValueBinding;
pub use config::{
    AutocompleteConfig, DialogConfig, DropdownConfig, PanelConfig, PopoverButtonConfig,
    PopoverConfig, RenderStrategy,
};
pub use dialog::{BodyOverflow, Dialog, DialogButton, DialogPanel};
pub use disclosure::Disclosure;
pub use dropdown::{Dropdown, DropdownButton, DropdownOption, DropdownOptions};
pub use error::UsageError;
pub use event::{ClickEvent, Key, KeyEvent, Notification};
pub use popover::{Popover, PopoverButton, PopoverPanel};
pub use queue::RenderQueue;
