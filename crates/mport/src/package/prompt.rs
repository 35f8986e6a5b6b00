//! Operator disambiguation port
//!
//! When an install specifier matches several index entries, the resolver asks
//! a [`Prompter`] to pick one. The CLI reads from the terminal; tests script
//! the answers.

use thiserror::Error;

use crate::package::IndexEntry;

/// Port for choosing one of several index entries
pub trait Prompter {
    /// Show the numbered candidate list
    fn present(&self, candidates: &[IndexEntry]);

    /// Block until the operator enters a line
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] when input is exhausted.
    fn read_selection(&self, count: usize) -> Result<String, PromptError>;

    /// Tell the operator their input was not usable
    fn reject(&self, error: &SelectionError);

    /// Present `candidates` and keep asking until a valid index is entered
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if input ends or fails before a valid choice.
    fn select_one(&self, candidates: &[IndexEntry]) -> Result<usize, PromptError> {
        self.present(candidates);

        loop {
            let input = self.read_selection(candidates.len())?;
            match parse_selection(&input, candidates.len()) {
                Ok(index) => return Ok(index),
                Err(e) => {
                    tracing::debug!(input = %input.trim(), "rejected selection");
                    self.reject(&e);
                }
            }
        }
    }
}

/// A line of operator input that does not name a candidate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{input}' is not a number. Please select an entry 0 - {}", count.saturating_sub(1))]
    NotANumber { input: String, count: usize },

    #[error("Please select an entry 0 - {}", count.saturating_sub(1))]
    OutOfRange { value: i64, count: usize },
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input closed before a package was selected")]
    Closed,

    #[error("Failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one line of input into an index in `[0, count)`.
///
/// # Errors
///
/// Returns [`SelectionError`] for non-numeric or out-of-range input.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| SelectionError::NotANumber {
        input: trimmed.to_string(),
        count,
    })?;

    usize::try_from(value)
        .ok()
        .filter(|index| *index < count)
        .ok_or(SelectionError::OutOfRange { value, count })
}
