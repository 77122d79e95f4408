//! Widget components for the labboard TUI.
//!
//! Each widget is a function that renders borrowed state into a buffer, so
//! it can be tested by rendering into a [`ratatui::buffer::Buffer`].
//!
//! # Modules
//!
//! - [`board`]: The lanes side by side
//! - [`card`]: One item card
//! - [`detail`]: The detail panel of the selected item
//! - [`status_bar`]: The last toast and the keys that apply
//! - [`help`]: The help overlay
//! - [`confirm`]: The yes/no dialog

pub mod board;
pub mod card;
pub mod confirm;
pub mod detail;
pub mod help;
pub mod status_bar;

pub use board::{BoardFocus, card_at, render_board};
pub use card::{CardHighlight, render_card};
pub use confirm::render_confirm_dialog;
pub use detail::render_detail_panel;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
