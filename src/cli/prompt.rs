//! Confirmation on the command line.

use std::io::{BufRead, Write};

use labboard_board::{Acknowledgment, Interaction};
use tracing::warn;

/// Asks on `output` and reads the answer from `input`.
///
/// Only `y` and `yes` confirm; anything else, end of input included,
/// declines.
///
/// # Examples
///
/// ```
/// use labboard::cli::StdioPrompt;
/// use labboard_board::Interaction;
///
/// let mut output = Vec::new();
/// let mut prompt = StdioPrompt::new(&b"y\n"[..], &mut output);
/// assert!(prompt.confirm("Delete project \"Soil survey\"?"));
/// ```
#[derive(Debug)]
pub struct StdioPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Interaction for StdioPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if let Err(err) = write!(self.output, "{question} [y/N] ").and_then(|()| self.output.flush())
        {
            warn!(error = %err, "could not ask for confirmation");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }

    fn acknowledge(&mut self, acknowledgment: Acknowledgment) {
        if let Err(err) = writeln!(self.output, "{}", acknowledgment.message()) {
            warn!(error = %err, "could not print acknowledgment");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_variants_confirm() {
        for input in ["y\n", "Y\n", " yes \n", "YES"] {
            let mut prompt = StdioPrompt::new(input.as_bytes(), Vec::new());
            assert!(prompt.confirm("Delete?"), "{input:?}");
        }
    }

    #[test]
    fn anything_else_declines() {
        for input in ["n\n", "\n", "yep\n", ""] {
            let mut prompt = StdioPrompt::new(input.as_bytes(), Vec::new());
            assert!(!prompt.confirm("Delete?"), "{input:?}");
        }
    }

    #[test]
    fn question_and_acknowledgment_are_printed() {
        let mut output = Vec::new();
        let mut prompt = StdioPrompt::new(&b"y\n"[..], &mut output);
        prompt.confirm("Delete task \"Dive schedule\"?");
        prompt.acknowledge(Acknowledgment::Success("Task \"Dive schedule\" deleted".into()));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(
            printed,
            "Delete task \"Dive schedule\"? [y/N] Task \"Dive schedule\" deleted\n"
        );
    }
}
