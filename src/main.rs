//! labboard - kanban boards for research projects and their tasks.

use anyhow::Context;
use clap::Parser;
use labboard::backend::Backend;
use labboard::cli::{self, Cli};
use labboard::logging;
use labboard_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command_or_board();

    // Configuration errors are fatal before anything is drawn
    let config = Config::resolve(cli.config.as_deref()).context("invalid configuration")?;
    logging::init(&config.logging, command.is_interactive())?;

    let backend = Backend::from_config(&config, cli.demo)?;
    cli::run(command, &config, &backend).await
}
