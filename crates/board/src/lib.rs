//! Kanban board controller for labboard.
//!
//! This crate turns a collection served by a
//! [`DataService`](labboard_service::DataService) into a kanban board: items
//! are grouped into columns by their status, and dragging an item onto
//! another column changes its status on the service.
//!
//! # Overview
//!
//! - [`BoardController`]: load, group, drag and drop, edit, create and
//!   remove items
//! - [`lanes`]: deriving column contents from the item list
//! - [`DragSession`]: the item currently being dragged
//! - [`Interaction`]: yes/no confirmation and acknowledgments
//! - [`ErrorReporter`]: where failed operations are reported
//! - [`BoardError`]: error types for board operations
//!
//! The same controller drives the project board and the task board of a
//! project; only the columns, the item type and the service differ.

pub mod controller;
pub mod drag;
pub mod error;
pub mod interaction;
pub mod lanes;
pub mod report;

pub use controller::{BoardController, DropOutcome, RemoveOutcome};
pub use drag::DragSession;
pub use error::{BoardError, Result};
pub use interaction::{Acknowledgment, AutoConfirm, Interaction};
pub use lanes::{ColumnItems, Lane, UNSORTED_LANE_NAME, UnplacedItems, derive_lanes};
pub use report::{ErrorReporter, Operation, TracingReporter};
