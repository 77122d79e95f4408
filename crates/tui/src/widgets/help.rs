//! Key and mouse bindings overlay, toggled with `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::popup_area;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 22;

/// Width of the key column.
const KEY_WIDTH: usize = 10;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: [Section; 3] = [
    (
        "Board",
        &[
            ("←→", "Select lane"),
            ("↑↓", "Select card"),
            ("Enter", "Open details"),
            ("r", "Reload"),
        ],
    ),
    (
        "Moving cards",
        &[
            ("Space", "Pick up card"),
            ("←→", "Choose target lane"),
            ("Enter", "Drop card"),
            ("Esc", "Put card back"),
            ("Mouse", "Drag a card to a lane"),
        ],
    ),
    (
        "Other",
        &[("d", "Delete card"), ("?", "Toggle help"), ("q", "Quit")],
    ),
];

/// Renders the bindings in a panel centered over `area`.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use labboard_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let panel = popup_area(WIDTH, HEIGHT, area);
    Clear.render(panel, buf);

    let accent = Style::default().fg(Color::LightYellow);
    let block = Block::default()
        .title(Span::styled(" Help ", accent.add_modifier(Modifier::BOLD)))
        .title_bottom(Line::styled(" any key closes ", Style::default().fg(Color::DarkGray)).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent);

    Paragraph::new(help_lines()).block(block).render(panel, buf);
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Green);

    SECTIONS
        .iter()
        .flat_map(|(title, bindings)| {
            let header = [Line::default(), Line::styled(format!(" {title}"), heading)];
            let rows = bindings.iter().map(move |(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("   {keys:<KEY_WIDTH$}"), key),
                    Span::raw(*action),
                ])
            });
            header.into_iter().chain(rows)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn lists_bindings_by_section() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        for text in ["Help", "Moving cards", "Space", "Drop card", "any key closes"] {
            assert!(content.contains(text), "missing {text}");
        }
    }

    #[test]
    fn covers_what_was_behind() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        for y in 0..24 {
            buf.set_string(0, y, "#".repeat(80), Style::default());
        }
        render_help_overlay(area, &mut buf);

        let hash = |x: u16| buf.cell((x, 12)).is_some_and(|cell| cell.symbol() == "#");
        assert!(hash(19) && hash(60));
        assert!((20..60).all(|x| !hash(x)));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn bindings_fit_the_panel() {
        assert!(help_lines().len() <= usize::from(HEIGHT - 2));
    }
}
