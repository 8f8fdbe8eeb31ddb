// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger sets and their concrete event bindings.
//!
//! Each abstract trigger maps to a pair of concrete events: one that shows the
//! disclosure and one that hides it.
//!
//! | trigger        | show            | hide            |
//! |----------------|-----------------|-----------------|
//! | `HOVER`        | `mouseenter`    | `mouseleave`    |
//! | `FOCUS`        | `focus`         | `blur`          |
//! | `CLICK`        | `click`         | `click`         |
//! | `TOUCH`        | `touchstart`    | `touchend`      |
//! | `FOCUS_WITHIN` | `focusin`       | `focusout`      |
//!
//! Click shows and hides through the same event, so it is bound to
//! [`Intent::Toggle`] rather than to open or close.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// A set of abstract triggers.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TriggerSet: u8 {
        /// Pointer enters/leaves the trigger.
        const HOVER = 1 << 0;
        /// Trigger gains/loses focus.
        const FOCUS = 1 << 1;
        /// Trigger is clicked.
        const CLICK = 1 << 2;
        /// Touch starts/ends on the trigger.
        const TOUCH = 1 << 3;
        /// Focus enters/leaves the trigger's subtree.
        const FOCUS_WITHIN = 1 << 4;
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self::CLICK
    }
}

/// Concrete events a host delivers to a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomEvent {
    /// `mousedown`.
    MouseDown,
    /// `mouseenter`.
    MouseEnter,
    /// `mouseleave`.
    MouseLeave,
    /// `click`.
    Click,
    /// `focus`.
    Focus,
    /// `blur`.
    Blur,
    /// `focusin`.
    FocusIn,
    /// `focusout`.
    FocusOut,
    /// `touchstart`.
    TouchStart,
    /// `touchend`.
    TouchEnd,
}

impl DomEvent {
    /// The DOM event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
        }
    }

    /// Whether the event describes something moving *away*, so its related
    /// target (where the pointer or focus went) is the interesting element.
    pub const fn is_leave(self) -> bool {
        matches!(self, Self::MouseLeave | Self::Blur | Self::FocusOut)
    }

    /// `(trigger, show, hide)` for every single trigger.
    const PAIRS: [(TriggerSet, Self, Self); 5] = [
        (TriggerSet::HOVER, Self::MouseEnter, Self::MouseLeave),
        (TriggerSet::FOCUS, Self::Focus, Self::Blur),
        (TriggerSet::CLICK, Self::Click, Self::Click),
        (TriggerSet::TOUCH, Self::TouchStart, Self::TouchEnd),
        (TriggerSet::FOCUS_WITHIN, Self::FocusIn, Self::FocusOut),
    ];

    fn show_for(trigger: TriggerSet) -> Option<Self> {
        Self::PAIRS
            .iter()
            .find(|(t, _, _)| *t == trigger)
            .map(|&(_, show, _)| show)
    }

    fn hide_for(trigger: TriggerSet) -> Option<Self> {
        Self::PAIRS
            .iter()
            .find(|(t, _, _)| *t == trigger)
            .map(|&(_, _, hide)| hide)
    }
}

/// What a bound event asks the controller to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Open (debounced by the open delay).
    Open,
    /// Close (debounced by the close delay).
    Close,
    /// Flip the current state immediately.
    Toggle,
}

/// Replacement for the default trigger set in one direction.
#[derive(Copy, Clone, Debug)]
pub enum TriggerOverride {
    /// Use exactly this set.
    Static(TriggerSet),
    /// Derive the set from the defaults.
    Derive(fn(TriggerSet) -> TriggerSet),
}

impl TriggerOverride {
    /// The effective trigger set given the defaults.
    pub fn apply(self, defaults: TriggerSet) -> TriggerSet {
        match self {
            Self::Static(set) => set,
            Self::Derive(f) => f(defaults),
        }
    }
}

/// Concrete event → intent table.
///
/// Each event appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: SmallVec<[(DomEvent, Intent); 10]>,
}

impl Bindings {
    /// Bind `event`, replacing any previous binding for it.
    pub fn insert(&mut self, event: DomEvent, intent: Intent) {
        match self.entries.iter_mut().find(|(e, _)| *e == event) {
            Some(slot) => slot.1 = intent,
            None => self.entries.push((event, intent)),
        }
    }

    /// The intent bound to `event`.
    pub fn get(&self, event: DomEvent) -> Option<Intent> {
        self.entries
            .iter()
            .find(|(e, _)| *e == event)
            .map(|&(_, intent)| intent)
    }

    /// All bindings, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DomEvent, Intent)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of bound events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the event bindings for a trigger element.
///
/// `show` and `hide`, when present, replace (or derive from) `triggers` for
/// their direction. Show events bind to [`Intent::Open`] and hide events to
/// [`Intent::Close`], except click, which binds to [`Intent::Toggle`] in both.
/// When both directions bind the same event, the hide binding wins.
pub fn build_bindings(
    triggers: TriggerSet,
    show: Option<TriggerOverride>,
    hide: Option<TriggerOverride>,
) -> Bindings {
    let show = show.map_or(triggers, |o| o.apply(triggers));
    let hide = hide.map_or(triggers, |o| o.apply(triggers));

    let mut bindings = Bindings::default();
    for trigger in show.iter() {
        if let Some(event) = DomEvent::show_for(trigger) {
            let intent = match event {
                DomEvent::Click => Intent::Toggle,
                _ => Intent::Open,
            };
            bindings.insert(event, intent);
        }
    }
    for trigger in hide.iter() {
        if let Some(event) = DomEvent::hide_for(trigger) {
            let intent = match event {
                DomEvent::Click => Intent::Toggle,
                _ => Intent::Close,
            };
            bindings.insert(event, intent);
        }
    }
    bindings
}
