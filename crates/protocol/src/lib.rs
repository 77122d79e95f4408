//! Shared protocol types for the labboard application.
//!
//! This crate defines the records exchanged with the REST service, the
//! columns a board groups them into, and the messages the TUI works with.
//!
//! # Overview
//!
//! - [`item`]: the [`BoardItem`] abstraction shared by projects and tasks
//! - [`project`], [`task`], [`researcher`]: the concrete records
//! - [`column`]: columns, column sets and the unknown status policy
//! - [`due_date`]: lenient due date parsing
//! - [`message`]: TUI event messages
//! - [`dummy`]: sample data for the demo mode
//! - [`error`]: error types for protocol operations
//!
//! # Examples
//!
//! Grouping projects by column:
//!
//! ```
//! use labboard_protocol::{BoardItem, ColumnSet, Project};
//!
//! let columns = ColumnSet::project_defaults();
//! let projects = vec![
//!     Project::new(1, "Soil survey", "todo"),
//!     Project::new(2, "Reef study", "done"),
//! ];
//!
//! for column in &columns {
//!     let count = projects.iter().filter(|p| p.status() == column.id()).count();
//!     println!("{}: {count}", column.name());
//! }
//! ```

pub mod column;
pub mod due_date;
pub mod dummy;
pub mod error;
pub mod item;
pub mod message;
pub mod project;
pub mod researcher;
pub mod task;

// Re-export primary types at crate root for convenience
pub use column::{
    Column, ColumnSet, UnknownStatusPolicy, default_project_columns, default_task_columns,
    display_name_from_id,
};
pub use due_date::{format_due_date, parse_due_date};
pub use error::{ProtocolError, Result};
pub use item::{BoardItem, ItemDraft, ItemId, ItemKind, Version};
pub use message::Message;
pub use project::{NewProject, Project};
pub use researcher::Researcher;
pub use task::{NewTask, Task};
