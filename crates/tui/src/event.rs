//! Terminal events to board messages.
//!
//! Only key presses and the left mouse button matter; everything else is
//! dropped here.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use labboard_protocol::Message;

/// How long a poll waits before the loop redraws.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button drives drag and drop.
#[must_use]
pub fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `q`, `Ctrl+C` | Quit |
/// | `Esc` | Cancel drag, close panel |
/// | Arrows | Navigate, or move the drop target while carrying |
/// | `Space` | Pick up the selected card |
/// | `Enter` | Drop the carried card, or open details |
/// | `d`, `Delete` | Delete the selected card |
/// | `r` | Reload |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char(' ') => Some(Message::PickUp),
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::Delete),

        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Reads a confirmation dialog answer from an event.
///
/// `y` confirms; `n` and `Esc` decline. Anything else is ignored.
#[must_use]
pub fn confirm_answer(event: &Event) -> Option<bool> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(true),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(false),
        _ => None,
    }
}
