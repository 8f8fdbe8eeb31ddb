// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The open/closed state machine every controller is built on.

/// Open/closed state plus the disabled override.
///
/// All transitions are guarded: they return `false` without doing anything
/// when the controller is disabled or already in the target state. Callers use
/// the return value to decide whether to emit notifications, so a repeated
/// `close()` produces exactly one close notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Disclosure {
    open: bool,
    disabled: bool,
}

impl Disclosure {
    /// A state machine in the given state. A disabled one always starts closed.
    pub const fn new(open: bool, disabled: bool) -> Self {
        Self {
            open: open && !disabled,
            disabled,
        }
    }

    /// Whether the disclosure is open.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether transitions are suppressed.
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// `CLOSED → OPEN`. Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        if self.disabled || self.open {
            return false;
        }
        self.open = true;
        tracing::debug!("disclosure opened");
        true
    }

    /// `OPEN → CLOSED`. Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        if self.disabled || !self.open {
            return false;
        }
        self.open = false;
        tracing::debug!("disclosure closed");
        true
    }

    /// Open when closed, close when open. Returns `true` if the state changed.
    pub fn toggle(&mut self) -> bool {
        if self.open { self.close() } else { self.open() }
    }

    /// Adopt an externally controlled open flag, bypassing the idempotence
    /// guards but not the disabled override. Returns `true` if the state
    /// changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let open = open && !self.disabled;
        if self.open == open {
            return false;
        }
        self.open = open;
        tracing::debug!(open, "disclosure state adopted");
        true
    }

    /// Enable or disable. Disabling forces the disclosure closed.
    ///
    /// Returns `true` if this closed an open disclosure.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        self.disabled = disabled;
        if disabled && self.open {
            self.open = false;
            tracing::debug!("disclosure closed by disable");
            return true;
        }
        false
    }
}
