//! Item detail panel.
//!
//! Replaces the lanes with everything known about the selected item.

use labboard_protocol::{BoardItem, format_due_date};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Renders the detail panel of `item`, shown in the lane named `lane_name`.
///
/// # Examples
///
/// ```
/// use labboard_protocol::Task;
/// use labboard_tui::widgets::render_detail_panel;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let task = Task::new(4, 1, "Collect samples", "planning");
/// let area = Rect::new(0, 0, 60, 20);
/// let mut buf = Buffer::empty(area);
/// render_detail_panel(&task, "Planning", area, &mut buf);
/// ```
pub fn render_detail_panel<T: BoardItem>(item: &T, lane_name: &str, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} #{} ", T::KIND, item.id()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(" Esc to close ", Style::default().fg(Color::DarkGray)))
                .right_aligned(),
        );
    let inner = block.inner(area);
    block.render(area, buf);

    let fields = metadata_lines(item, lane_name);
    let [meta_area, body_area] = Layout::vertical([
        Constraint::Length(u16::try_from(fields.len() + 1).unwrap_or(u16::MAX)),
        Constraint::Min(0),
    ])
    .areas(inner);

    Paragraph::new(fields).render(meta_area, buf);
    Paragraph::new(body_lines(item))
        .wrap(Wrap { trim: false })
        .render(body_area, buf);
}

fn metadata_lines<T: BoardItem>(item: &T, lane_name: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let field = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<12}"), label),
            Span::styled(text, value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            item.title().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        field("Status", format!("{lane_name} ({})", item.status())),
    ];
    if item.due_date().is_some() {
        lines.push(field("Due", format_due_date(item.due_date())));
    }
    lines.extend(
        item.detail_fields()
            .into_iter()
            .map(|(name, text)| field(name, text)),
    );
    lines
}

fn body_lines<T: BoardItem>(item: &T) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (title, text) in [("Description", item.summary()), ("Notes", item.notes())] {
        if text.trim().is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(title, heading)));
        lines.extend(text.lines().map(|line| Line::from(line.to_string())));
        lines.push(Line::from(""));
    }
    lines
}
