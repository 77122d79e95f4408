//! Status bar widget: the last toast and the keys that apply right now.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::{Toast, ToastKind};

/// Returns the color of a toast.
#[must_use]
pub const fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => Color::Cyan,
        ToastKind::Success => Color::Green,
        ToastKind::Failure => Color::Red,
    }
}

/// Renders the status bar.
///
/// # Examples
///
/// ```
/// use labboard_tui::state::Toast;
/// use labboard_tui::widgets::render_status_bar;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
/// render_status_bar(Some(&Toast::success("Moved")), false, area, &mut buf);
/// ```
pub fn render_status_bar(toast: Option<&Toast>, carrying: bool, area: Rect, buf: &mut Buffer) {
    let hints = hint_line(carrying);
    let hints_width = u16::try_from(hints.width()).unwrap_or(u16::MAX);
    let [message_area, hints_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

    if let Some(toast) = toast {
        Paragraph::new(Line::from(Span::styled(
            toast.message.as_str(),
            Style::default().fg(toast_color(toast.kind)),
        )))
        .render(message_area, buf);
    }
    Paragraph::new(hints).render(hints_area, buf);
}

fn hint_line(carrying: bool) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::Gray);
    let pairs: &[(&'static str, &'static str)] = if carrying {
        &[("←→", " target  "), ("Enter", " drop  "), ("Esc", " cancel ")]
    } else {
        &[("Space", " pick up  "), ("d", " delete  "), ("?", " help ")]
    };
    Line::from(
        pairs
            .iter()
            .flat_map(|(k, t)| [Span::styled(*k, key), Span::styled(*t, text)])
            .collect::<Vec<_>>(),
    )
}
