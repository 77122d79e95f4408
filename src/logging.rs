//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use labboard_config::LoggingConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "LABBOARD_LOG";

/// Returns the filter directives to use: `env` when set and not blank,
/// otherwise the configured level.
#[must_use]
pub fn directives(config: &LoggingConfig, env: Option<String>) -> String {
    env.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| config.level.clone())
}

/// Installs the global subscriber.
///
/// Logs go to the configured file when there is one. Otherwise they go to
/// stderr, except for the interactive board, which owns the terminal and
/// runs without logging.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened
/// or a subscriber is already installed.
pub fn init(config: &LoggingConfig, interactive: bool) -> anyhow::Result<()> {
    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if interactive => return Ok(()),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let directives = directives(config, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(config.file.is_none())
                .with_writer(writer),
        )
        .try_init()
        .context("could not install the log subscriber")
}
