//! Logging settings.
//!
//! The terminal board owns the screen, so logs go to a file when one is
//! configured. The `LABBOARD_LOG` environment variable takes precedence over
//! the configured level.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Where and how much to log.
///
/// # Examples
///
/// ```
/// use labboard_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// A level (`info`) or filter directives (`labboard_service=debug,warn`).
    #[serde(default = "default_level")]
    pub level: String,

    /// File to append logs to instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Validates the level.
    ///
    /// Each comma separated directive must be a level, or a target with
    /// `=level`. A bare word that is not a level is rejected, so a misspelled
    /// level never turns into a target filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if a directive is malformed.
    pub fn validate(&self) -> Result<()> {
        let invalid = || ConfigError::InvalidLogLevel(self.level.clone());

        if self.level.trim().is_empty() {
            return Err(invalid());
        }

        for directive in self.level.split(',').map(str::trim) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if target.is_empty() || !is_level(level) {
                        return Err(invalid());
                    }
                }
                None if !is_level(directive) => return Err(invalid()),
                None => {}
            }
        }
        Ok(())
    }
}

fn is_level(value: &str) -> bool {
    LEVELS.iter().any(|level| level.eq_ignore_ascii_case(value))
}
