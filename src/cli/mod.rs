//! The `labboard` command line.
//!
//! Without a subcommand the interactive board opens on the projects. Every
//! command takes `--project ID` to work on the tasks of that project
//! instead.

pub mod args;
pub mod edit;
pub mod handlers;
pub mod output;
pub mod prompt;

use std::io;

use labboard_config::Config;
use labboard_protocol::{Project, Task};
use labboard_tui::{App, terminal};

pub use args::{Cli, Command};
pub use edit::EditableItem;
pub use prompt::StdioPrompt;

use crate::backend::{self, Backend, Board};

/// Runs a command against the backend.
///
/// # Errors
///
/// Returns an error if the configuration is unusable, the terminal cannot
/// be set up, or a non-interactive command fails.
pub async fn run(command: Command, config: &Config, backend: &Backend) -> anyhow::Result<()> {
    match command.project() {
        Some(project) => {
            let board = backend::board::<Task>(config, backend.tasks(project))?;
            dispatch(command, board, backend, Some(format!("project #{project}"))).await
        }
        None => {
            let board = backend::board::<Project>(config, backend.projects())?;
            dispatch(command, board, backend, None).await
        }
    }
}

async fn dispatch<T: EditableItem>(
    command: Command,
    mut board: Board<T>,
    backend: &Backend,
    subtitle: Option<String>,
) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match command {
        Command::Board(_) => run_board(board, subtitle).await,
        Command::List(_) => handlers::list(&mut board, &mut out).await,
        Command::Add(args) => handlers::add(&mut board, args, &mut out).await,
        Command::Edit(args) => handlers::edit(&mut board, args, &mut out).await,
        Command::Move(args) => handlers::move_item(&mut board, args, &mut out).await,
        Command::Delete(args) => {
            let mut prompt = StdioPrompt::new(io::BufReader::new(io::stdin()), io::stdout());
            handlers::delete(&mut board, args, &mut prompt, &mut out).await
        }
        Command::Researchers => {
            handlers::researchers(backend.researchers().as_ref(), &mut out).await
        }
    }
}

async fn run_board<T: EditableItem>(board: Board<T>, subtitle: Option<String>) -> anyhow::Result<()> {
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(board);
    if let Some(subtitle) = subtitle {
        app = app.with_subtitle(subtitle);
    }
    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if the loop failed
    terminal::restore_terminal(&mut terminal)?;
    result
}
