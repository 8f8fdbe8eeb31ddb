// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced open/close timers.
//!
//! A [`Debouncer`] tracks at most one pending open and one pending close. The
//! host supplies timestamps (milliseconds, monotonically increasing) and polls
//! for due timers; nothing here reads a clock.
//!
//! ## Rules
//!
//! 1. **Zero delay runs now**: [`Debouncer::request`] returns `true` and nothing
//!    is left pending.
//! 2. **Same kind restarts**: requesting a kind that is already pending
//!    replaces its deadline.
//! 3. **Opposite kind cancels**: requesting an open drops a pending close and
//!    vice versa, so a quick enter+leave never fires a stale open after the
//!    leave was processed.
//!
//! ```
//! use hinge_trigger::{DebounceKind, Debouncer, Delays};
//!
//! let mut timers = Debouncer::new(Delays { open: 100, close: 50 });
//!
//! // Pointer enters at t=0, leaves at t=30.
//! assert!(!timers.request(DebounceKind::Open, 0));
//! assert!(!timers.request(DebounceKind::Close, 30));
//!
//! // The open never fires; the close fires 50ms after the leave.
//! assert_eq!(timers.poll(79), None);
//! assert_eq!(timers.poll(80), Some(DebounceKind::Close));
//! assert_eq!(timers.poll(200), None);
//! ```

/// Which handler a timer belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebounceKind {
    /// The open handler.
    Open,
    /// The close handler.
    Close,
}

impl DebounceKind {
    /// The other kind.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Open => Self::Close,
            Self::Close => Self::Open,
        }
    }
}

/// Open and close delays in milliseconds. Zero means synchronous.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delays {
    /// Delay before an open request runs.
    pub open: u64,
    /// Delay before a close request runs.
    pub close: u64,
}

/// Pending open/close timers for one controller.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    /// Configured delays.
    pub delays: Delays,
    open_due: Option<u64>,
    close_due: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer with the given delays.
    pub fn new(delays: Delays) -> Self {
        Self {
            delays,
            open_due: None,
            close_due: None,
        }
    }

    /// Ask for `kind` to run, at time `now`.
    ///
    /// Cancels any pending timer of the opposite kind. Returns `true` if the
    /// handler should run immediately (zero delay); otherwise a timer is
    /// (re)started and `false` is returned.
    pub fn request(&mut self, kind: DebounceKind, now: u64) -> bool {
        self.cancel(kind.opposite());
        let delay = match kind {
            DebounceKind::Open => self.delays.open,
            DebounceKind::Close => self.delays.close,
        };
        if delay == 0 {
            *self.slot(kind) = None;
            return true;
        }
        *self.slot(kind) = Some(now.saturating_add(delay));
        false
    }

    /// Return (and clear) a timer that is due at `now`.
    ///
    /// At most one timer can be pending at a time, since requesting one kind
    /// cancels the other.
    pub fn poll(&mut self, now: u64) -> Option<DebounceKind> {
        for kind in [DebounceKind::Open, DebounceKind::Close] {
            let slot = self.slot(kind);
            if slot.is_some_and(|due| due <= now) {
                *slot = None;
                tracing::trace!(?kind, now, "debounce fired");
                return Some(kind);
            }
        }
        None
    }

    /// Drop a pending timer of `kind`. Returns `true` if one was pending.
    pub fn cancel(&mut self, kind: DebounceKind) -> bool {
        let cancelled = self.slot(kind).take().is_some();
        if cancelled {
            tracing::trace!(?kind, "debounce cancelled");
        }
        cancelled
    }

    /// Drop all pending timers.
    pub fn cancel_all(&mut self) {
        self.open_due = None;
        self.close_due = None;
    }

    /// Deadline of the pending timer of `kind`, if any.
    pub fn pending(&self, kind: DebounceKind) -> Option<u64> {
        match kind {
            DebounceKind::Open => self.open_due,
            DebounceKind::Close => self.close_due,
        }
    }

    /// Earliest pending deadline, so a host knows when to poll next.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.open_due, self.close_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn slot(&mut self, kind: DebounceKind) -> &mut Option<u64> {
        match kind {
            DebounceKind::Open => &mut self.open_due,
            DebounceKind::Close => &mut self.close_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_runs_synchronously() {
        let mut d = Debouncer::default();
        assert!(d.request(DebounceKind::Open, 10));
        assert!(d.request(DebounceKind::Close, 10));
        assert_eq!(d.next_deadline(), None);
    }

    #[test]
    fn open_then_close_only_runs_close() {
        let mut d = Debouncer::new(Delays {
            open: 20,
            close: 20,
        });
        assert!(!d.request(DebounceKind::Open, 0));
        assert!(!d.request(DebounceKind::Close, 1));
        assert_eq!(d.pending(DebounceKind::Open), None);
        assert_eq!(d.poll(100), Some(DebounceKind::Close));
        assert_eq!(d.poll(100), None);
    }

    #[test]
    fn synchronous_close_cancels_pending_open() {
        let mut d = Debouncer::new(Delays { open: 50, close: 0 });
        assert!(!d.request(DebounceKind::Open, 0));
        assert!(d.request(DebounceKind::Close, 10));
        assert_eq!(d.poll(1_000), None);
    }

    #[test]
    fn same_kind_restarts_deadline() {
        let mut d = Debouncer::new(Delays { open: 30, close: 0 });
        d.request(DebounceKind::Open, 0);
        d.request(DebounceKind::Open, 20);
        assert_eq!(d.pending(DebounceKind::Open), Some(50));
        assert_eq!(d.poll(30), None);
        assert_eq!(d.poll(50), Some(DebounceKind::Open));
    }

    #[test]
    fn cancel_reports_whether_pending() {
        let mut d = Debouncer::new(Delays { open: 5, close: 5 });
        assert!(!d.cancel(DebounceKind::Close));
        d.request(DebounceKind::Close, 0);
        assert_eq!(d.next_deadline(), Some(5));
        assert!(d.cancel(DebounceKind::Close));
        assert_eq!(d.next_deadline(), None);
    }

    #[test]
    fn deadline_saturates() {
        let mut d = Debouncer::new(Delays {
            open: 10,
            close: 0,
        });
        d.request(DebounceKind::Open, u64::MAX - 1);
        assert_eq!(d.pending(DebounceKind::Open), Some(u64::MAX));
    }
}
