// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events handed to controllers and notifications they emit.
//!
//! Handlers never return "handled" flags. Like a DOM listener, they record
//! what they did on the event (`prevent_default`, `stop_propagation`) and the
//! host applies it after the handler returns.

use smallvec::SmallVec;

/// Keys that the primitives react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Anything else.
    Other,
}

/// A `keydown` event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    /// A fresh event for `key`.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Suppress the host's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Keep the event from reaching ancestor listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Both of the above, the common case for handled navigation keys.
    pub fn consume(&mut self) {
        self.prevent_default();
        self.stop_propagation();
    }

    /// Whether a handler called [`Self::prevent_default`].
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether a handler called [`Self::stop_propagation`].
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// A `click` event on a trigger or option.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    /// A fresh click.
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the host's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler called [`Self::prevent_default`].
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something a controller reports to its consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification<V = ()> {
    /// The panel opened (`true`) or closed (`false`).
    Open(bool),
    /// The dialog closed.
    Close,
    /// The list lost its panel (emitted on close, before `Open(false)`).
    Blur,
    /// A value was chosen.
    Input(V),
    /// The trigger received focus.
    Focus,
    /// New value for a two-way bound `shown` flag.
    UpdateShown(bool),
    /// New value for a two-way bound `open` flag.
    UpdateOpen(bool),
}

/// Pending notifications, oldest first.
#[derive(Clone, Debug)]
pub(crate) struct Outbox<V> {
    pending: SmallVec<[Notification<V>; 4]>,
}

impl<V> Default for Outbox<V> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
        }
    }
}

impl<V> Outbox<V> {
    pub(crate) fn push(&mut self, notification: Notification<V>) {
        self.pending.push(notification);
    }

    pub(crate) fn take(&mut self) -> SmallVec<[Notification<V>; 4]> {
        core::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_flags() {
        let mut ev = KeyEvent::new(Key::ArrowDown);
        assert!(!ev.default_prevented() && !ev.propagation_stopped());
        ev.prevent_default();
        assert!(ev.default_prevented() && !ev.propagation_stopped());
        ev.consume();
        assert!(ev.propagation_stopped());
    }

    #[test]
    fn outbox_drains_in_order() {
        let mut out = Outbox::<u8>::default();
        out.push(Notification::Blur);
        out.push(Notification::Open(false));
        let got = out.take();
        assert_eq!(got.as_slice(), &[Notification::Blur, Notification::Open(false)]);
        assert!(out.take().is_empty());
    }
}
