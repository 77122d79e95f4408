//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use labboard_protocol::ItemId;

/// labboard - kanban boards for research projects and their tasks
#[derive(Parser, Debug)]
#[command(name = "labboard", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the default locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Serve sample data from memory instead of the REST service
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the command to run, the board when none was given.
    #[must_use]
    pub fn command_or_board(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Board(BoardArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive board
    Board(BoardArgs),
    /// Print the columns and their items
    List(BoardArgs),
    /// Create a project, or a task with --project
    Add(AddArgs),
    /// Change the fields of an item
    Edit(EditArgs),
    /// Move an item to another column
    Move(MoveArgs),
    /// Delete an item
    Delete(DeleteArgs),
    /// List the researchers
    Researchers,
}

impl Command {
    /// Returns the project whose tasks the command works on, if any.
    #[must_use]
    pub fn project(&self) -> Option<ItemId> {
        match self {
            Self::Board(args) | Self::List(args) => args.project,
            Self::Add(args) => args.project,
            Self::Edit(args) => args.project,
            Self::Move(args) => args.project,
            Self::Delete(args) => args.project,
            Self::Researchers => None,
        }
    }

    /// Returns `true` for the interactive board.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Board(_))
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardArgs {
    /// Work on the tasks of this project instead of the projects
    #[arg(short, long)]
    pub project: Option<ItemId>,
}

/// Item fields settable from the command line.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    /// Longer description
    #[arg(long)]
    pub description: Option<String>,

    /// Due date, as YYYY-MM-DD; empty to clear
    #[arg(long)]
    pub due: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Column id
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Add a task to this project
    #[arg(short, long)]
    pub project: Option<ItemId>,

    /// Title of the new item
    #[arg(long)]
    pub title: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Item id
    pub id: ItemId,

    /// The item is a task of this project
    #[arg(short, long)]
    pub project: Option<ItemId>,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MoveArgs {
    /// Item id
    pub id: ItemId,

    /// Id of the target column
    pub status: String,

    /// The item is a task of this project
    #[arg(short, long)]
    pub project: Option<ItemId>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    /// Item id
    pub id: ItemId,

    /// The item is a task of this project
    #[arg(short, long)]
    pub project: Option<ItemId>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("labboard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn board_is_the_default() {
        let cli = parse(&[]);
        assert_eq!(cli.command_or_board(), Command::Board(BoardArgs::default()));
        assert!(cli.command_or_board().is_interactive());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--demo", "--project", "2"]);
        assert!(cli.demo);
        assert_eq!(cli.command_or_board().project(), Some(2));
    }

    #[test]
    fn move_takes_id_and_status() {
        let cli = parse(&["move", "4", "done"]);
        assert_eq!(
            cli.command_or_board(),
            Command::Move(MoveArgs {
                id: 4,
                status: "done".into(),
                project: None,
            })
        );
    }

    #[test]
    fn add_requires_title() {
        let result = Cli::try_parse_from(["labboard", "add", "--status", "todo"]);
        assert!(result.is_err());

        let cli = parse(&["add", "--title", "Seed bank", "--due", "2025-03-01"]);
        let Command::Add(args) = cli.command_or_board() else {
            panic!("expected add");
        };
        assert_eq!(args.title, "Seed bank");
        assert_eq!(args.fields.due.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn delete_with_yes() {
        let cli = parse(&["delete", "3", "-p", "1", "--yes"]);
        assert_eq!(
            cli.command_or_board(),
            Command::Delete(DeleteArgs {
                id: 3,
                project: Some(1),
                yes: true,
            })
        );
    }
}
