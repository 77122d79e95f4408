//! Error types for the labboard-protocol crate.
//!
//! This module defines the errors raised while building column sets and
//! validating item records before they are sent to the data service.

use thiserror::Error;

/// Errors that can occur when working with protocol types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A board was configured without any column.
    #[error("a board needs at least one column")]
    EmptyColumnSet,

    /// A column was configured with an empty identifier.
    #[error("column identifiers cannot be empty")]
    EmptyColumnId,

    /// Two columns share the same identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(String),

    /// A status does not name any configured column.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A due date could not be parsed.
    #[error("invalid due date '{value}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDueDate {
        /// The rejected input.
        value: String,
    },

    /// An item title was empty or blank.
    #[error("invalid title: title cannot be empty")]
    EmptyTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            ProtocolError::EmptyColumnSet.to_string(),
            "a board needs at least one column"
        );
        assert_eq!(
            ProtocolError::DuplicateColumn("done".to_string()).to_string(),
            "duplicate column identifier: done"
        );

        let err = ProtocolError::InvalidDueDate {
            value: "tomorrow".to_string(),
        };
        assert!(err.to_string().contains("'tomorrow'"));
    }
}
