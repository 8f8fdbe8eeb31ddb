// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup errors.

/// Misuse of a primitive that is caught while mounting it.
///
/// This is the only error the crate reports. Everything else (transitions
/// while disabled, unset element references, empty lists) is a silent no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// A child primitive was mounted without its controller.
    #[error("<{component} /> is missing a parent <{parent} /> component.")]
    MissingParent {
        /// The primitive being mounted, e.g. `DropdownOption`.
        component: &'static str,
        /// The controller it needs, e.g. `Dropdown`.
        parent: &'static str,
    },
}

/// Unwrap a parent handle or report which primitive is missing it.
pub(crate) fn require<'a, P>(
    parent: Option<&'a mut P>,
    component: &'static str,
    parent_name: &'static str,
) -> Result<&'a mut P, UsageError> {
    parent.ok_or(UsageError::MissingParent {
        component,
        parent: parent_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn message_names_component_and_parent() {
        let err = UsageError::MissingParent {
            component: "DropdownOption",
            parent: "Dropdown",
        };
        assert_eq!(
            err.to_string(),
            "<DropdownOption /> is missing a parent <Dropdown /> component."
        );
    }

    #[test]
    fn require_passes_through_present_parent() {
        let mut parent = 7_u8;
        let got = require(Some(&mut parent), "Child", "Parent").map(|p| *p);
        assert_eq!(got, Ok(7));
        let missing = require::<u8>(None, "Child", "Parent");
        assert!(missing.is_err());
    }
}
