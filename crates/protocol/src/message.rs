//! Input messages of the terminal board.
//!
//! Key presses and mouse events are translated into [`Message`]s; the board
//! never sees raw terminal events.

/// A user action on the board.
///
/// # Examples
///
/// ```
/// use labboard_protocol::Message;
///
/// assert!(Message::Quit.is_terminating());
/// assert!(!Message::MouseUp { column: 3, row: 7 }.is_terminating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Select the lane to the left, or move the drop target while carrying.
    NavigateLeft,
    /// Select the lane to the right, or move the drop target while carrying.
    NavigateRight,
    NavigateUp,
    NavigateDown,
    /// Pick up the selected card.
    PickUp,
    /// Drop the carried card, or open the details of the selected one.
    Select,
    /// Put the carried card back, close the details, or dismiss the toast.
    Escape,
    /// Delete the selected card after confirmation.
    Delete,
    /// Reload the board from the service.
    Refresh,
    ToggleHelp,
    Quit,
    /// Left button pressed at a screen cell.
    MouseDown { column: u16, row: u16 },
    /// Pointer moved with the left button held.
    MouseDrag { column: u16, row: u16 },
    /// Left button released.
    MouseUp { column: u16, row: u16 },
}

impl Message {
    /// Returns `true` if the application should exit.
    #[must_use]
    pub fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_quit_terminates() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::Delete.is_terminating());
    }
}
