// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way bridge between a controlled value and the text shown for it.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Keeps the displayed text of an input in step with a controlled value.
///
/// - [`ValueBinding::select`] is the outward path: the user picked a value, the
///   text is re-formatted, and the caller reports the value to its consumer.
/// - [`ValueBinding::sync`] is the inward path: the consumer changed the value,
///   the text is re-formatted, and nothing is reported back. Echoing a value
///   that was just selected is therefore a no-op rather than a second report.
/// - [`ValueBinding::set_text`] records free typing without touching the value.
///
/// ```rust
/// use hinge_disclosure::ValueBinding;
///
/// let mut binding = ValueBinding::new(|city: &&str| city.to_uppercase());
/// assert_eq!(binding.select("oslo"), "oslo");
/// assert_eq!(binding.text(), "OSLO");
///
/// // The consumer echoes the value back: nothing changes.
/// assert!(!binding.sync(Some("oslo")));
///
/// // The consumer replaces it: the text follows.
/// assert!(binding.sync(Some("bergen")));
/// assert_eq!(binding.text(), "BERGEN");
/// ```
pub struct ValueBinding<V> {
    value: Option<V>,
    text: String,
    display: Box<dyn Fn(&V) -> String>,
}

impl<V: fmt::Debug> fmt::Debug for ValueBinding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("value", &self.value)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl<V: Clone + PartialEq> ValueBinding<V> {
    /// An empty binding that formats values with `display`.
    pub fn new(display: impl Fn(&V) -> String + 'static) -> Self {
        Self {
            value: None,
            text: String::new(),
            display: Box::new(display),
        }
    }

    /// The bound value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The text currently shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a user choice. Returns the value to report outward.
    pub fn select(&mut self, value: V) -> V {
        self.text = (self.display)(&value);
        self.value = Some(value.clone());
        value
    }

    /// Adopt a value from the consumer without reporting it.
    ///
    /// Returns `true` if the value changed (and the text was re-formatted).
    pub fn sync(&mut self, value: Option<V>) -> bool {
        if self.value == value {
            return false;
        }
        self.text = value.as_ref().map(|v| (self.display)(v)).unwrap_or_default();
        self.value = value;
        true
    }

    /// Replace the shown text (the user is typing).
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
