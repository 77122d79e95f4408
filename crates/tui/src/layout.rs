//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing both go through [`ScreenLayout`] and
//! [`lane_areas`], so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each card in rows: two borders, the title and the summary.
pub const CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
pub const MIN_HEIGHT: u16 = 10;

/// Below this height the header is hidden to make room for cards.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// The regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The header, hidden on short terminals.
    pub header: Option<Rect>,
    /// The lanes, or the detail panel.
    pub content: Rect,
    /// The status bar at the bottom.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area, or returns `None` if it is too small.
    #[must_use]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            return None;
        }

        if area.height >= MIN_HEIGHT_WITH_HEADER {
            let [header, content, status] = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            Some(Self {
                header: Some(header),
                content,
                status,
            })
        } else {
            let [content, status] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                    .areas(area);
            Some(Self {
                header: None,
                content,
                status,
            })
        }
    }
}

/// Splits the board area into `count` lanes of equal width.
#[must_use]
pub fn lane_areas(area: Rect, count: usize) -> Vec<Rect> {
    let Ok(count) = u32::try_from(count) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Returns the index of the lane containing the point, if any.
#[must_use]
pub fn lane_at(lanes: &[Rect], column: u16, row: u16) -> Option<usize> {
    lanes
        .iter()
        .position(|lane| lane.contains((column, row).into()))
}

/// Returns a `width` by `height` area centered in `area`, shrunk to fit.
#[must_use]
pub fn popup_area(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
