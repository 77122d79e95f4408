//! Configuration errors.

use std::path::PathBuf;

use labboard_protocol::ProtocolError;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON5 or does not match the
    /// expected shape.
    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parser error, with line and column.
        #[source]
        source: serde_json5::Error,
    },

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The service URL is not an absolute http(s) URL.
    #[error("invalid service URL '{url}': {reason}")]
    InvalidServiceUrl {
        /// The configured URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request timeout is out of range.
    #[error("invalid request timeout: {reason}")]
    InvalidTimeout {
        /// The reason the timeout is invalid.
        reason: String,
    },

    /// Endpoint paths lack their id placeholders.
    #[error("invalid endpoint layout: missing placeholder in {}", .paths.join(", "))]
    InvalidEndpoints {
        /// The offending path names.
        paths: Vec<&'static str>,
    },

    /// A board's columns are unusable.
    #[error("invalid {board} board columns: {source}")]
    InvalidColumns {
        /// Which board, `projects` or `tasks`.
        board: &'static str,
        /// What is wrong with the columns.
        #[source]
        source: ProtocolError,
    },

    /// The log level is not a level or filter directive.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// No user configuration directory exists on this platform.
    #[error("could not determine the user configuration directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
