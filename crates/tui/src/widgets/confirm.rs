//! Yes/no confirmation dialog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::layout::popup_area;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 6;

/// Renders a centered dialog asking `question`.
pub fn render_confirm_dialog(question: &str, area: Rect, buf: &mut Buffer) {
    let popup = popup_area(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " Confirm ",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(question.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key),
            Span::raw(" yes    "),
            Span::styled("n", key),
            Span::raw(" no"),
        ]),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}
