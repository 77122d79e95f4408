//! Configuration management for labboard.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, the environment and built-in defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`service`]: Data service location, timeout and endpoint paths
//! - [`board`]: Columns and unknown-status policy of each board
//! - [`logging`]: Log level and destination
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment (`LABBOARD_BASE_URL`)
//! 2. An explicit `--config` path, else local config (`./labboard.json5` or `./labboard.json`)
//! 3. User config (`~/.config/labboard/config.json5` or `~/.config/labboard/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   service: { base_url: "http://localhost:3000", timeout_secs: 10 },
//!   projects: {
//!     columns: ["todo", { id: "in-progress", name: "Doing" }, "done"],
//!     unknown_status: "surface",
//!   },
//!   logging: { level: "info", file: "/tmp/labboard.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use labboard_config::Config;
//! use labboard_protocol::ItemKind;
//!
//! # fn example() -> labboard_config::Result<()> {
//! let config = Config::load()?;
//! for column in &config.columns(ItemKind::Project)? {
//!     println!("{}", column.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod service;

pub use board::BoardConfig;
pub use config::{BASE_URL_ENV, Config};
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use service::ServiceConfig;
