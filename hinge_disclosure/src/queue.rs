// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-render deferral.
//!
//! Some side effects need the view to have caught up with a state change: a
//! panel must exist before it can be focused, and an option must be laid out
//! before it can be scrolled to. Controllers push such effects onto a
//! [`RenderQueue`] and run them from their `after_render` method, which the
//! host calls once the render pass that follows an event has committed.
//!
//! Effects are plain data. They are interpreted against the controller's state
//! *at flush time*, so each one re-checks its preconditions (still open, option
//! still registered, element still mounted) and turns into a no-op otherwise.

use smallvec::SmallVec;

/// FIFO of deferred effects.
#[derive(Clone, Debug)]
pub struct RenderQueue<E> {
    pending: SmallVec<[E; 4]>,
}

impl<E> Default for RenderQueue<E> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
        }
    }
}

impl<E: PartialEq> RenderQueue<E> {
    /// Queue `effect` unless an equal effect is already waiting.
    pub fn schedule(&mut self, effect: E) {
        if !self.pending.contains(&effect) {
            self.pending.push(effect);
        }
    }
}

impl<E> RenderQueue<E> {
    /// Drop every queued effect matching `pred`. Returns how many were dropped.
    pub fn cancel(&mut self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|e| !pred(e));
        before - self.pending.len()
    }

    /// Take all queued effects, oldest first.
    ///
    /// Effects scheduled while the returned batch is being processed stay
    /// queued for the next flush.
    pub fn drain(&mut self) -> SmallVec<[E; 4]> {
        core::mem::take(&mut self.pending)
    }

    /// Number of queued effects.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queued effects, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.pending.iter()
    }
}
