//! Data service connection settings.

use std::time::Duration;

use labboard_service::EndpointLayout;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default service location, the development server of the REST backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum allowed request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Where the data service lives and how to talk to it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use labboard_config::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(config.base_url, "http://localhost:3000");
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL every endpoint path is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Endpoint paths, relative to the base URL.
    #[serde(default)]
    pub endpoints: EndpointLayout,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: EndpointLayout::default(),
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration for the service at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL, the
    /// timeout is outside the allowed range, or an item path lacks its
    /// placeholder.
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;

        if self.timeout_secs < MIN_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                reason: format!(
                    "timeout {} is below minimum of {} seconds",
                    self.timeout_secs, MIN_TIMEOUT_SECS
                ),
            });
        }

        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                reason: format!(
                    "timeout {} exceeds maximum of {} seconds",
                    self.timeout_secs, MAX_TIMEOUT_SECS
                ),
            });
        }

        let missing = self.endpoints.missing_placeholders();
        if !missing.is_empty() {
            return Err(ConfigError::InvalidEndpoints { paths: missing });
        }

        Ok(())
    }
}

fn validate_base_url(url: &str) -> Result<()> {
    let invalid = |reason: &str| ConfigError::InvalidServiceUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| invalid("must start with http:// or https://"))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.endpoints, EndpointLayout::default());
    }

    #[test]
    fn validate_accepts_http_and_https() {
        assert!(ServiceConfig::with_base_url("https://lab.example.org/api").validate().is_ok());
        assert!(ServiceConfig::with_base_url("http://10.0.0.2:8080").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_urls() {
        for url in ["localhost:3000", "ftp://host", "http://", "http://a b"] {
            let err = ServiceConfig::with_base_url(url).validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidServiceUrl { .. }),
                "{url} gave {err}"
            );
        }
    }

    #[test]
    fn validate_below_minimum_timeout() {
        let config = ServiceConfig {
            timeout_secs: 0,
            ..ServiceConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("below minimum"));
    }

    #[test]
    fn validate_above_maximum_timeout() {
        let config = ServiceConfig {
            timeout_secs: MAX_TIMEOUT_SECS + 1,
            ..ServiceConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn validate_endpoint_placeholders() {
        let mut config = ServiceConfig::default();
        config.endpoints.project = "/projects".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoints { paths } if paths == ["project"]));
    }

    #[test]
    fn deserialize_partial() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://lab:4000"}"#).unwrap();
        assert_eq!(config.base_url, "http://lab:4000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
