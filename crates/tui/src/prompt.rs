//! Modal confirmation over the board.
//!
//! [`TerminalPrompt`] answers [`Interaction::confirm`] by drawing a dialog on
//! top of a snapshot of the board and waiting for `y` or `n`. Nothing else
//! runs while the dialog is up.

use std::io;

use crossterm::event::Event;
use labboard_board::{Acknowledgment, Interaction};
use ratatui::{Terminal, backend::Backend, buffer::Buffer};
use tracing::{debug, warn};

use crate::event::{confirm_answer, poll_event};
use crate::widgets::render_confirm_dialog;

/// Source of terminal events, polled with a timeout.
pub type EventSource = fn() -> io::Result<Option<Event>>;

/// A blocking yes/no dialog drawn over a snapshot of the board.
pub struct TerminalPrompt<'a, B: Backend, E = EventSource> {
    terminal: &'a mut Terminal<B>,
    backdrop: Buffer,
    next_event: E,
}

impl<'a, B: Backend> TerminalPrompt<'a, B> {
    /// Creates a prompt reading events from the real terminal.
    pub fn new(terminal: &'a mut Terminal<B>, backdrop: Buffer) -> Self {
        Self::with_events(terminal, backdrop, poll_event)
    }
}

impl<'a, B, E> TerminalPrompt<'a, B, E>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    /// Creates a prompt reading events from `next_event`.
    pub fn with_events(terminal: &'a mut Terminal<B>, backdrop: Buffer, next_event: E) -> Self {
        Self {
            terminal,
            backdrop,
            next_event,
        }
    }

    fn draw(&mut self, question: &str) -> bool {
        let backdrop = &self.backdrop;
        let drawn = self.terminal.draw(|frame| {
            let area = frame.area();
            paint_backdrop(backdrop, frame.buffer_mut());
            render_confirm_dialog(question, area, frame.buffer_mut());
        });
        match drawn {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "could not draw confirmation dialog");
                false
            }
        }
    }
}

impl<B, E> Interaction for TerminalPrompt<'_, B, E>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    fn confirm(&mut self, question: &str) -> bool {
        loop {
            if !self.draw(question) {
                return false;
            }
            match (self.next_event)() {
                Ok(Some(event)) => {
                    if let Some(answer) = confirm_answer(&event) {
                        debug!(answer, "confirmation answered");
                        return answer;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "could not read confirmation answer");
                    return false;
                }
            }
        }
    }

    fn acknowledge(&mut self, acknowledgment: Acknowledgment) {
        debug!(message = acknowledgment.message(), "acknowledged");
    }
}

/// Copies the snapshot into the frame, clipped to both areas.
fn paint_backdrop(backdrop: &Buffer, buf: &mut Buffer) {
    let area = backdrop.area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(source), Some(target)) = (backdrop.cell((x, y)), buf.cell_mut((x, y))) {
                *target = source.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, layout::Rect, style::Style};

    use super::*;
    use crate::test_utils::buffer_to_string;

    fn scripted(events: Vec<Option<Event>>) -> impl FnMut() -> io::Result<Option<Event>> {
        let mut events = events.into_iter();
        move || Ok(events.next().flatten())
    }

    fn key(c: char) -> Option<Event> {
        Some(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    fn backdrop() -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        buf.set_string(0, 0, "Todo (2)", Style::default());
        buf
    }

    #[test]
    fn yes_confirms_after_ignoring_other_keys() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut prompt =
            TerminalPrompt::with_events(&mut terminal, backdrop(), scripted(vec![None, key('x'), key('y')]));

        assert!(prompt.confirm("Delete project \"Seed bank\"?"));
    }

    #[test]
    fn no_declines() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut prompt = TerminalPrompt::with_events(&mut terminal, backdrop(), scripted(vec![key('n')]));

        assert!(!prompt.confirm("Delete?"));
    }

    #[test]
    fn read_error_declines() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut prompt = TerminalPrompt::with_events(&mut terminal, backdrop(), || {
            Err(io::Error::other("terminal gone"))
        });

        assert!(!prompt.confirm("Delete?"));
    }

    #[test]
    fn dialog_is_drawn_over_the_board() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        {
            let mut prompt =
                TerminalPrompt::with_events(&mut terminal, backdrop(), scripted(vec![key('n')]));
            prompt.confirm("Delete task \"Collect samples\"?");
        }

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Todo (2)"));
        assert!(content.contains("Delete task \"Collect samples\"?"));
    }
}
