//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates the
//! service, board and logging settings of the application.

use std::path::{Path, PathBuf};

use labboard_protocol::{ColumnSet, ItemKind};
use serde::{Deserialize, Serialize};

use crate::board::BoardConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::service::ServiceConfig;

/// Environment variable overriding [`ServiceConfig::base_url`].
pub const BASE_URL_ENV: &str = "LABBOARD_BASE_URL";

/// The main configuration struct for the application.
///
/// # Examples
///
/// ```
/// use labboard_config::{BoardConfig, Config, ServiceConfig};
/// use labboard_protocol::{Column, ItemKind};
///
/// let config = Config::default();
/// assert_eq!(config.service.base_url, "http://localhost:3000");
///
/// let config = Config {
///     service: ServiceConfig::with_base_url("https://lab.example.org"),
///     projects: BoardConfig::with_columns(vec![Column::from_id("todo"), Column::from_id("done")]),
///     ..Config::default()
/// };
/// assert_eq!(config.columns(ItemKind::Project).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the data service lives.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Layout of the projects board.
    #[serde(default)]
    pub projects: BoardConfig,

    /// Layout of the tasks board.
    #[serde(default)]
    pub tasks: BoardConfig,

    /// Log level and destination.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./labboard.json5` or `./labboard.json`
    /// 2. User: `~/.config/labboard/config.json5` or `~/.config/labboard/config.json`
    ///
    /// If no configuration file is found, the defaults are used. The
    /// `LABBOARD_BASE_URL` environment variable is applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the result does not validate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use labboard_config::Config;
    ///
    /// # fn example() -> labboard_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Talking to {}", config.service.base_url);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        Self::resolve(None)
    }

    /// Loads configuration from `explicit` if given, else from the default
    /// locations, then applies the environment and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result does not validate.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path: Option<PathBuf> = explicit.map(Path::to_path_buf).or_else(find_config_file);

        let mut config = match path {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use labboard_config::Config;
    ///
    /// # fn example() -> labboard_config::Result<()> {
    /// Config::default().save_to("labboard.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.service.base_url = url.trim().to_string();
        }
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first error found in the service, board or logging
    /// settings.
    pub fn validate(&self) -> Result<()> {
        self.service.validate()?;
        self.columns(ItemKind::Project)?;
        self.columns(ItemKind::Task)?;
        self.logging.validate()
    }

    /// Returns the board layout for `kind`.
    #[must_use]
    pub fn board(&self, kind: ItemKind) -> &BoardConfig {
        match kind {
            ItemKind::Project => &self.projects,
            ItemKind::Task => &self.tasks,
        }
    }

    /// Builds the column set for the board of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidColumns`] if the configured
    /// columns are unusable.
    pub fn columns(&self, kind: ItemKind) -> Result<ColumnSet> {
        self.board(kind).column_set(kind)
    }
}

#[cfg(test)]
mod tests {
    use labboard_protocol::{Column, UnknownStatusPolicy};
    use tempfile::TempDir;

    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config, Config::default());
        assert_eq!(config.columns(ItemKind::Project).unwrap().first().id(), "todo");
        assert_eq!(config.columns(ItemKind::Task).unwrap().first().id(), "planning");
    }

    #[test]
    fn validate_reports_bad_task_columns() {
        let config = Config {
            tasks: BoardConfig::with_columns(vec![Column::from_id("a"), Column::from_id("a")]),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColumns { board: "tasks", .. }));
    }

    #[test]
    fn validate_reports_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn env_overrides_base_url() {
        let mut config = Config::default();
        config.apply_env(|name| (name == BASE_URL_ENV).then(|| " http://lab:9000 ".to_string()));
        assert_eq!(config.service.base_url, "http://lab:9000");
    }

    #[test]
    fn empty_env_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"projects": {"unknown_status": "surface"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.projects.unknown_status, UnknownStatusPolicy::Surface);
        assert_eq!(config.tasks, BoardConfig::default());
        assert_eq!(config.service, ServiceConfig::default());
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labboard.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Staging backend
                service: { base_url: "https://staging.lab.example.org", timeout_secs: 30 },
                tasks: {
                    columns: ["planning", { id: "running", name: "Running" }, "completed"],
                },
                logging: { level: "labboard_service=debug", file: "/tmp/labboard.log" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.service.timeout_secs, 30);
        let tasks = config.columns(ItemKind::Task).unwrap();
        assert_eq!(tasks.get(1).map(Column::name), Some("Running"));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/labboard.log")));
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labboard.json");
        std::fs::write(&path, r#"{"service": {"base_url": "localhost"}}"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidServiceUrl { .. }));
    }

    #[test]
    fn resolve_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::resolve(Some(&dir.path().join("absent.json5"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config::default();
        original.projects = BoardConfig::with_columns(vec![
            Column::new("todo", "Backlog"),
            Column::from_id("done"),
        ]);
        original.tasks.unknown_status = UnknownStatusPolicy::Surface;

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(original, loaded);
    }
}
