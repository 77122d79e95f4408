//! Confirmation and acknowledgment.
//!
//! Destructive operations ask the user first and tell them how it went.
//! The terminal board shows a modal dialog, the command line reads stdin.

/// The outcome shown to the user after a confirmed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    /// The operation succeeded.
    Success(String),
    /// The operation failed.
    Failure(String),
}

impl Acknowledgment {
    /// Returns the message to show.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    /// Returns `true` for a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The user-facing side of a destructive operation.
pub trait Interaction {
    /// Asks a yes/no question and blocks until the user answers.
    fn confirm(&mut self, question: &str) -> bool;

    /// Tells the user how the operation went. Must not block.
    fn acknowledge(&mut self, acknowledgment: Acknowledgment);
}

/// Answers every question the same way and keeps the acknowledgments.
///
/// Used for non-interactive runs such as `delete --yes`.
///
/// # Examples
///
/// ```
/// use labboard_board::{Acknowledgment, AutoConfirm, Interaction};
///
/// let mut interaction = AutoConfirm::new(true);
/// assert!(interaction.confirm("Delete?"));
/// interaction.acknowledge(Acknowledgment::Success("deleted".into()));
/// assert_eq!(interaction.acknowledgments().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutoConfirm {
    answer: bool,
    questions: Vec<String>,
    acknowledgments: Vec<Acknowledgment>,
}

impl AutoConfirm {
    /// Creates an interaction that gives `answer` to every question.
    #[must_use]
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    /// Returns the questions asked so far.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Returns the acknowledgments received so far.
    #[must_use]
    pub fn acknowledgments(&self) -> &[Acknowledgment] {
        &self.acknowledgments
    }
}

impl Interaction for AutoConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answer
    }

    fn acknowledge(&mut self, acknowledgment: Acknowledgment) {
        self.acknowledgments.push(acknowledgment);
    }
}
