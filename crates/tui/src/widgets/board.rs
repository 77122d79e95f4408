//! Board and lane widgets.
//!
//! One lane is drawn per column, left to right, plus the unsorted lane when
//! the board surfaces unknown statuses.

use labboard_board::Lane;
use labboard_protocol::{BoardItem, ItemId};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::card::{CardHighlight, render_card};
use crate::layout::{CARD_HEIGHT, lane_areas};

/// What the board highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFocus {
    /// Index of the selected lane.
    pub selected_lane: usize,
    /// Index of the selected card in that lane.
    pub selected_item: Option<usize>,
    /// Lane a carried card would be dropped on.
    pub drop_target: Option<usize>,
    /// Id of the carried card.
    pub carried: Option<ItemId>,
}

/// Renders the lanes side by side.
///
/// # Examples
///
/// ```
/// use labboard_board::derive_lanes;
/// use labboard_protocol::{ColumnSet, Project, UnknownStatusPolicy};
/// use labboard_tui::widgets::{BoardFocus, render_board};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let columns = ColumnSet::project_defaults();
/// let items = vec![Project::new(1, "Soil survey", "todo")];
/// let lanes = derive_lanes(&columns, &items, UnknownStatusPolicy::Hide);
///
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
/// render_board(&lanes, BoardFocus::default(), area, &mut buf);
/// ```
pub fn render_board<T: BoardItem>(
    lanes: &[Lane<'_, T>],
    focus: BoardFocus,
    area: Rect,
    buf: &mut Buffer,
) {
    for (index, (lane, lane_area)) in lanes.iter().zip(lane_areas(area, lanes.len())).enumerate() {
        let selected = focus.selected_lane == index;
        let border_color = if focus.drop_target == Some(index) {
            Color::Yellow
        } else if selected && focus.drop_target.is_none() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        render_lane(
            lane,
            selected.then_some(focus.selected_item).flatten(),
            focus.carried,
            border_color,
            lane_area,
            buf,
        );
    }
}

fn render_lane<T: BoardItem>(
    lane: &Lane<'_, T>,
    selected_item: Option<usize>,
    carried: Option<ItemId>,
    border_color: Color,
    area: Rect,
    buf: &mut Buffer,
) {
    let mut title_style = Style::default()
        .fg(border_color)
        .add_modifier(Modifier::BOLD);
    if !lane.accepts_drop() {
        title_style = title_style.add_modifier(Modifier::ITALIC);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ({}) ", lane.name(), lane.len()),
            title_style,
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    if lane.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "Empty",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(inner, buf);
        return;
    }

    let visible = visible_cards(inner);
    let offset = scroll_offset(selected_item, lane.len(), visible);
    let card_areas = Layout::vertical((0..visible).map(|_| Constraint::Length(CARD_HEIGHT)))
        .split(inner);

    for (slot, item) in lane.items.iter().skip(offset).take(visible).enumerate() {
        let index = offset + slot;
        let highlight = if carried == Some(item.id()) {
            CardHighlight::Carried
        } else if selected_item == Some(index) {
            CardHighlight::Selected
        } else {
            CardHighlight::None
        };
        render_card(*item, highlight, card_areas[slot], buf);
    }
}

/// Returns how many cards fit in a lane's inner area.
#[must_use]
pub fn visible_cards(inner: Rect) -> usize {
    usize::from(inner.height / CARD_HEIGHT).max(1)
}

/// Returns the index of the first card shown so the selection stays visible.
#[must_use]
pub fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible || selected < visible / 2 {
        return 0;
    }
    (selected - visible / 2).min(total - visible)
}

/// Returns the index of the card drawn at `row` in a lane, if any.
///
/// `lane_area` is the whole lane including borders; `selected` is the lane's
/// selected card, which decides the scroll offset.
#[must_use]
pub fn card_at(lane_area: Rect, total: usize, selected: Option<usize>, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(lane_area);
    if row < inner.y || row >= inner.y.saturating_add(inner.height) {
        return None;
    }
    let visible = visible_cards(inner);
    let slot = usize::from((row - inner.y) / CARD_HEIGHT);
    if slot >= visible {
        return None;
    }
    let index = scroll_offset(selected, total, visible) + slot;
    (index < total).then_some(index)
}
