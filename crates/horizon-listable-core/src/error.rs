//! Error types for Horizon Listable.
//!
//! Building content is infallible. Errors only surface where a type-erased
//! value crosses back into typed code, or when a finished snapshot is checked
//! for identity collisions before being handed to a backing view.

use thiserror::Error;

use crate::key::Key;

/// Errors reported by content validation and view descriptions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListableError {
    /// A view description was applied to a view of another type.
    #[error("view description for `{expected}` applied to a `{found}` view")]
    ViewTypeMismatch {
        /// The view type the description builds and updates.
        expected: &'static str,
        /// The view type that was actually passed in.
        found: &'static str,
    },

    /// Two sections in the same content share an identifier.
    #[error("duplicate section identifier {identifier}")]
    DuplicateSection {
        /// The repeated identifier.
        identifier: Key,
    },

    /// Two rows of the same element type share an identifier within a section.
    #[error("duplicate row identifier {identifier} ({element}) in section {section}")]
    DuplicateRow {
        /// The section containing both rows.
        section: Key,
        /// The element type name of the rows.
        element: &'static str,
        /// The repeated identifier.
        identifier: Key,
    },
}

/// Result type for Horizon Listable operations.
pub type ListableResult<T> = Result<T, ListableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ListableError::ViewTypeMismatch {
            expected: "ListView",
            found: "Label",
        };
        assert_eq!(
            err.to_string(),
            "view description for `ListView` applied to a `Label` view"
        );

        let err = ListableError::DuplicateRow {
            section: Key::from("podcasts"),
            element: "PodcastRow",
            identifier: Key::from(7),
        };
        assert_eq!(
            err.to_string(),
            "duplicate row identifier 7 (PodcastRow) in section podcasts"
        );
    }
}
