//! Item card widget.

use labboard_protocol::{BoardItem, format_due_date};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHighlight {
    /// Not selected.
    #[default]
    None,
    /// The keyboard selection.
    Selected,
    /// Picked up and being dragged.
    Carried,
}

impl CardHighlight {
    /// Returns the border color.
    #[must_use]
    pub const fn border_color(self) -> Color {
        match self {
            Self::None => Color::DarkGray,
            Self::Selected => Color::Cyan,
            Self::Carried => Color::Yellow,
        }
    }
}

/// Renders an item card.
///
/// ```text
/// ╭#3──────────────╮
/// │Soil survey     │
/// │Sample the so...│
/// ╰──────2025-03-01╯
/// ```
///
/// # Examples
///
/// ```
/// use labboard_protocol::Project;
/// use labboard_tui::widgets::{CardHighlight, render_card};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let project = Project::new(3, "Soil survey", "todo");
/// let area = Rect::new(0, 0, 18, 4);
/// let mut buf = Buffer::empty(area);
/// render_card(&project, CardHighlight::Selected, area, &mut buf);
/// ```
pub fn render_card<T: BoardItem>(item: &T, highlight: CardHighlight, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let inner_width = usize::from(area.width.saturating_sub(2));
    let title_style = match highlight {
        CardHighlight::None => Style::default().fg(Color::White),
        _ => Style::default()
            .fg(highlight.border_color())
            .add_modifier(Modifier::BOLD),
    };
    let summary_style = Style::default().fg(Color::Gray);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(highlight.border_color()))
        .title(Span::styled(
            format!("#{}", item.id()),
            Style::default().fg(Color::DarkGray),
        ));
    if item.due_date().is_some() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format_due_date(item.due_date()),
                Style::default().fg(Color::LightMagenta),
            ))
            .right_aligned(),
        );
    }

    let content = vec![
        Line::from(Span::styled(truncate(item.title(), inner_width), title_style)),
        Line::from(Span::styled(
            truncate(first_line(item.summary()), inner_width),
            summary_style,
        )),
    ];

    Paragraph::new(content).block(block).render(area, buf);
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

/// Truncates a string to `max_width` characters, with an ellipsis if cut.
#[must_use]
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use labboard_protocol::Project;

    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Survey", 10), "Survey");
        assert_eq!(truncate("Survey", 6), "Survey");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Groundwater sampling", 10), "Groundw...");
        assert_eq!(truncate("Groundwater", 3), "Gro");
    }

    #[test]
    fn card_shows_id_title_summary_and_due_date() {
        let mut project = Project::new(7, "Soil survey", "todo");
        project.description = "Sample the north field\nthen the south".to_string();
        project.due_date = NaiveDate::from_ymd_opt(2025, 3, 1);

        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        render_card(&project, CardHighlight::None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("#7"));
        assert!(content.contains("Soil survey"));
        assert!(content.contains("Sample the north field"));
        assert!(!content.contains("south"));
        assert!(content.contains("2025-03-01"));
    }

    #[test]
    fn carried_card_uses_carry_color() {
        let project = Project::new(1, "Soil survey", "todo");
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        render_card(&project, CardHighlight::Carried, area, &mut buf);

        let corner = buf.cell((0, 0)).unwrap();
        assert_eq!(corner.fg, Color::Yellow);
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let project = Project::new(1, "Soil survey", "todo");
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_card(&project, CardHighlight::None, area, &mut buf);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }
}
