// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hinge Listbox: option bookkeeping for headless single-select lists.
//!
//! This crate owns the two pieces of list state that dropdowns, comboboxes and
//! autocompletes share:
//!
//! - [`resolve`]: a pure function that maps a navigation [`Action`] plus a
//!   snapshot of items to the next active index. Navigation never wraps;
//!   arrow keys stop at the first/last enabled option the way assistive
//!   technology expects a listbox to behave.
//! - [`OptionRegistry`]: the ordered set of mounted options together with the
//!   active pointer. Options register in mount order and unregister on unmount;
//!   removing an option keeps the active pointer attached to the same logical
//!   option rather than to the same position.
//!
//! ## Minimal example
//!
//! ```rust
//! use hinge_listbox::{Action, OptionRegistry};
//!
//! let mut options = OptionRegistry::new();
//! let apple = options.next_id();
//! let banana = options.next_id();
//! let cherry = options.next_id();
//! options.register(apple, "apple", false);
//! options.register(banana, "banana", true);
//! options.register(cherry, "cherry", false);
//!
//! // Nothing is active yet, but the first enabled option is the effective default.
//! assert_eq!(options.active_index(), None);
//! assert_eq!(options.effective_active_index(), Some(0));
//!
//! options.navigate(&Action::First);
//! // `Next` skips the disabled banana.
//! options.navigate(&Action::Next);
//! assert_eq!(options.active_index(), Some(2));
//!
//! // Removing apple shifts cherry to index 1; the active pointer follows it.
//! options.unregister(apple);
//! assert_eq!(options.active_index(), Some(1));
//! assert_eq!(options.active().map(|o| o.id), Some(cherry));
//! ```
//!
//! [`resolve`] is generic over [`ListItem`], so hosts that keep their own item
//! storage can use it without the registry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod resolve;

pub use registry::{OptionEntry, OptionId, OptionRegistry};
pub use resolve::{Action, ListItem, resolve};
