// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hinge Trigger: turn abstract "show/hide" triggers into concrete event bindings.
//!
//! A disclosure (popover, tooltip, menu) is usually opened by some gesture on
//! its trigger element and closed by the matching opposite gesture. This crate
//! provides the small, framework-agnostic pieces for that:
//!
//! - [`binding`]: map a [`TriggerSet`] (hover, focus, click, touch, focus-within)
//!   to concrete [`DomEvent`] → [`Intent`] bindings, with per-direction
//!   overrides.
//! - [`debounce`]: a [`Debouncer`] holding at most one pending open timer and
//!   one pending close timer, where scheduling one direction cancels the other.
//! - [`outside`]: decide whether an [`InteractionEvent`] happened inside any of
//!   a set of owned elements, so moving between a trigger and its panel is not
//!   treated as leaving.
//!
//! ## Usage
//!
//! ```rust
//! use hinge_trigger::{DomEvent, Intent, TriggerOverride, TriggerSet, build_bindings};
//!
//! let bindings = build_bindings(TriggerSet::HOVER | TriggerSet::CLICK, None, None);
//! assert_eq!(bindings.get(DomEvent::MouseEnter), Some(Intent::Open));
//! assert_eq!(bindings.get(DomEvent::MouseLeave), Some(Intent::Close));
//! assert_eq!(bindings.get(DomEvent::Click), Some(Intent::Toggle));
//!
//! // Hide only on focus loss, whatever the default triggers are.
//! let bindings = build_bindings(
//!     TriggerSet::HOVER,
//!     None,
//!     Some(TriggerOverride::Static(TriggerSet::FOCUS)),
//! );
//! assert_eq!(bindings.get(DomEvent::MouseLeave), None);
//! assert_eq!(bindings.get(DomEvent::Blur), Some(Intent::Close));
//! ```
//!
//! Timers are driven by the host: pass monotonically increasing millisecond
//! timestamps to [`Debouncer::request`] and [`Debouncer::poll`].
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`TriggerSet`] and
//!   [`Delays`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod binding;
pub mod debounce;
pub mod outside;

pub use binding::{Bindings, DomEvent, Intent, TriggerOverride, TriggerSet, build_bindings};
pub use debounce::{DebounceKind, Debouncer, Delays};
pub use outside::{InteractionEvent, is_inside};
