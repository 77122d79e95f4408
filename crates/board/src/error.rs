//! Error types for board operations.

use labboard_protocol::{ItemId, ProtocolError};
use labboard_service::ServiceError;

use crate::report::Operation;

/// Errors that can occur while driving a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The column configuration is unusable.
    #[error("invalid board configuration: {0}")]
    Configuration(ProtocolError),

    /// A drop was attempted without a drag in progress.
    #[error("no item is being dragged")]
    NoDragSession,

    /// A drop targeted a column the board does not have.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The item is not on the board.
    #[error("item {0} is not on the board")]
    UnknownItem(ItemId),

    /// A locally built item or draft was rejected before being sent.
    #[error("invalid item: {0}")]
    Invalid(ProtocolError),

    /// The data service failed.
    #[error("could not {operation}: {source}")]
    Service {
        /// The operation that failed.
        operation: Operation,
        /// The classified service failure.
        #[source]
        source: ServiceError,
    },
}

impl BoardError {
    /// Returns the service failure behind this error, if any.
    #[must_use]
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service { source, .. } => Some(source),
            _ => None,
        }
    }

    /// A short, user-facing description.
    ///
    /// # Examples
    ///
    /// ```
    /// use labboard_board::{BoardError, Operation};
    /// use labboard_service::ServiceError;
    ///
    /// let err = BoardError::Service {
    ///     operation: Operation::Update,
    ///     source: ServiceError::Conflict { id: 3 },
    /// };
    /// assert_eq!(err.summary(), "could not update: the item was changed elsewhere, reload and retry");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Service { operation, source } => {
                format!("could not {operation}: {}", source.summary())
            }
            other => other.to_string(),
        }
    }
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(BoardError::NoDragSession.to_string(), "no item is being dragged");
        assert_eq!(
            BoardError::Configuration(ProtocolError::EmptyColumnSet).to_string(),
            "invalid board configuration: a board needs at least one column"
        );

        let err = BoardError::Service {
            operation: Operation::Load,
            source: ServiceError::NotFound { id: None },
        };
        assert_eq!(err.to_string(), "could not load: resource not found");
        assert!(err.service_error().is_some());
    }
}
