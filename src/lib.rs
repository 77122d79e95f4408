//! labboard - kanban boards for research projects and their tasks.
//!
//! The binary wires the workspace crates together: configuration, logging,
//! the data backend and the commands.
//!
//! - [`cli`]: argument parsing and one handler per command
//! - [`backend`]: the REST service or the in-memory demo data
//! - [`logging`]: the tracing subscriber

pub mod backend;
pub mod cli;
pub mod logging;
