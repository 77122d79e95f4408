//! Error reporting.
//!
//! Failed board operations are handed to an [`ErrorReporter`] in addition to
//! being returned to the caller, so failures are never silent even when the
//! caller ignores the result.

use std::error::Error;
use std::fmt;

use tracing::error;

/// The board operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetching the item collection.
    Load,
    /// Sending a changed item, by drop or edit.
    Update,
    /// Creating an item.
    Create,
    /// Deleting an item.
    Delete,
}

impl Operation {
    /// Returns the lowercase verb, as used in messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Update => "update",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// A sink for failed operations.
///
/// The error is passed through untouched.
pub trait ErrorReporter: Send + Sync {
    /// Records that `operation` failed with `error`.
    fn report(&self, operation: Operation, error: &(dyn Error + 'static));
}

/// Reports failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: Operation, error: &(dyn Error + 'static)) {
        error!(operation = %operation, error = %error, "board operation failed");
    }
}
