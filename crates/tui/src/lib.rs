//! Terminal UI for labboard.
//!
//! This crate provides a Ratatui-based kanban board over any
//! [`BoardController`](labboard_board::BoardController). Cards are moved with
//! the keyboard (pick up, choose a lane, drop) or by dragging them with the
//! mouse.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, drag and toast state
//! - [`layout`]: Screen areas and mouse hit-testing
//! - [`widgets`]: Lanes, cards, detail panel and overlays
//! - [`prompt`]: Modal yes/no dialog
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use labboard_board::BoardController;
//! use labboard_protocol::{ColumnSet, dummy::dummy_projects};
//! use labboard_service::InMemoryService;
//! use labboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let service = InMemoryService::new(dummy_projects());
//!     let board = BoardController::with_column_set(ColumnSet::project_defaults(), service);
//!     let mut app = App::new(board);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod prompt;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{Action, App};
pub use prompt::TerminalPrompt;
pub use state::{AppState, Toast, ToastKind};
