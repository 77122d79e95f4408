//! Error types for data service operations.
//!
//! Every failure is classified so callers can tell an unreachable service
//! from a slow one, a rejected request from a server fault, and a stale
//! update from a missing item.

use labboard_protocol::ItemId;
use reqwest::StatusCode;

/// Errors that can occur while talking to the data service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service could not be reached.
    #[error("could not connect to {url}: {message}")]
    Connect {
        /// The URL of the failed request.
        url: String,
        /// The underlying transport message.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// The URL of the timed out request.
        url: String,
    },

    /// The service refused the request (4xx other than 404, 409 and 412).
    #[error("request rejected with status {status}: {message}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The response body, or the status reason when empty.
        message: String,
    },

    /// The requested item or collection does not exist.
    #[error("{}", format_not_found(*.id))]
    NotFound {
        /// The item the request was about, if any.
        id: Option<ItemId>,
    },

    /// The item was changed by someone else since it was loaded.
    #[error("item {id} was modified concurrently")]
    Conflict {
        /// The item whose update was refused.
        id: ItemId,
    },

    /// The service failed while handling the request (5xx).
    #[error("service error {status}: {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The response body, or the status reason when empty.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response from service: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The configured service URL cannot be used.
    #[error("invalid service URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

fn format_not_found(id: Option<ItemId>) -> String {
    match id {
        Some(id) => format!("item {id} not found"),
        None => "resource not found".to_string(),
    }
}

impl ServiceError {
    /// Classifies an unsuccessful HTTP status.
    ///
    /// `id` is the item the request targeted; conflicts are only reported
    /// for item requests.
    #[must_use]
    pub fn from_status(status: StatusCode, id: Option<ItemId>, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no details")
                .to_string()
        } else {
            body.trim().to_string()
        };

        match (status, id) {
            (StatusCode::NOT_FOUND, _) => Self::NotFound { id },
            (StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED, Some(id)) => {
                Self::Conflict { id }
            }
            (status, _) if status.is_server_error() => Self::Server {
                status: status.as_u16(),
                message,
            },
            (status, _) if status.is_client_error() => Self::Rejected {
                status: status.as_u16(),
                message,
            },
            (status, _) => Self::Transport(format!("unexpected status {status}")),
        }
    }

    /// A short, user-facing description of the failure kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use labboard_service::ServiceError;
    ///
    /// let err = ServiceError::Timeout { url: "http://localhost:3000/projects".into() };
    /// assert_eq!(err.summary(), "the service did not answer in time");
    /// ```
    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "the service is unreachable",
            Self::Timeout { .. } => "the service did not answer in time",
            Self::Rejected { .. } => "the service rejected the request",
            Self::NotFound { .. } => "the item no longer exists",
            Self::Conflict { .. } => "the item was changed elsewhere, reload and retry",
            Self::Server { .. } => "the service failed to handle the request",
            Self::Decode(_) => "the service sent an unexpected response",
            Self::Transport(_) => "the request could not be completed",
            Self::InvalidUrl { .. } => "the service URL is invalid",
        }
    }

    /// Returns the HTTP status code behind this error, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        let url = value
            .url()
            .map(ToString::to_string)
            .unwrap_or_default();

        if value.is_timeout() {
            Self::Timeout { url }
        } else if value.is_connect() {
            Self::Connect {
                url,
                message: value.to_string(),
            }
        } else if value.is_decode() {
            Self::Decode(value.to_string())
        } else if value.is_builder() {
            Self::InvalidUrl {
                url,
                reason: value.to_string(),
            }
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// A specialized Result type for data service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
