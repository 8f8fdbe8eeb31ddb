// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller and panel configuration.

use hinge_trigger::{Delays, TriggerOverride, TriggerSet};

/// How a panel is kept in the view while its controller is closed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderStrategy {
    /// Always rendered; visibility is up to the caller.
    Static,
    /// Removed from the view while closed.
    #[default]
    Unmount,
    /// Rendered but hidden while closed.
    Hidden,
}

impl RenderStrategy {
    /// Derive the strategy from `static`/`unmount` flags. `static` wins.
    pub const fn from_flags(static_panel: bool, unmount: bool) -> Self {
        if static_panel {
            Self::Static
        } else if unmount {
            Self::Unmount
        } else {
            Self::Hidden
        }
    }

    /// Whether the panel is part of the view given the open state.
    pub const fn should_render(self, open: bool) -> bool {
        match self {
            Self::Static | Self::Hidden => true,
            Self::Unmount => open,
        }
    }

    /// Whether the panel is rendered but hidden given the open state.
    pub const fn is_hidden(self, open: bool) -> bool {
        matches!(self, Self::Hidden) && !open
    }
}

/// Options shared by all panels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelConfig {
    /// Keep the panel rendered regardless of the open state.
    pub static_panel: bool,
    /// Remove the panel while closed instead of hiding it.
    pub unmount: bool,
    /// Close on a `mousedown` outside the trigger and panel (popover panels).
    pub hide_on_click_outside: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            static_panel: false,
            unmount: true,
            hide_on_click_outside: true,
        }
    }
}

impl PanelConfig {
    /// The render strategy these flags select.
    pub const fn strategy(&self) -> RenderStrategy {
        RenderStrategy::from_flags(self.static_panel, self.unmount)
    }
}

/// Options for a [`Dropdown`](crate::Dropdown).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropdownConfig {
    /// Suppress every transition.
    pub disabled: bool,
}

/// Options for an [`Autocomplete`](crate::Autocomplete).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutocompleteConfig {
    /// Suppress every transition.
    pub disabled: bool,
}

/// Options for a [`Popover`](crate::Popover).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopoverConfig {
    /// Suppress every transition and keep the popover closed.
    pub disabled: bool,
    /// Initial (and controlled) open flag.
    pub shown: bool,
}

/// Options for a [`PopoverButton`](crate::PopoverButton).
#[derive(Copy, Clone, Debug, Default)]
pub struct PopoverButtonConfig {
    /// Default triggers for both directions.
    pub triggers: TriggerSet,
    /// Replacement triggers for showing.
    pub show_triggers: Option<TriggerOverride>,
    /// Replacement triggers for hiding.
    pub hide_triggers: Option<TriggerOverride>,
    /// Milliseconds before a hover/focus/touch open runs.
    pub open_delay: u64,
    /// Milliseconds before a hover/focus/touch close runs.
    pub close_delay: u64,
}

impl PopoverButtonConfig {
    /// The debounce delays.
    pub const fn delays(&self) -> Delays {
        Delays {
            open: self.open_delay,
            close: self.close_delay,
        }
    }
}

/// Options for a [`Dialog`](crate::Dialog).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DialogConfig<K> {
    /// Start open.
    pub open: bool,
    /// Suppress every transition and keep the dialog closed.
    pub disabled: bool,
    /// On open, focus the first focusable element of the panel.
    pub inner_focus: bool,
    /// On open, focus this element. Takes precedence over `inner_focus`.
    pub initial_focus: Option<K>,
}

impl<K> Default for DialogConfig<K> {
    fn default() -> Self {
        Self {
            open: false,
            disabled: false,
            inner_focus: false,
            initial_focus: None,
        }
    }
}
