//! Error types.

use crate::automaton::StateId;
use thiserror::Error;

/// Errors raised while assembling an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A start, final or transition endpoint lies outside `0..num_states`.
    #[error("State {state} not in universe of {num_states} states")]
    StateNotInUniverse { state: StateId, num_states: StateId },
}

/// Result type for automaton construction.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors raised by subset construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeterminizeError {
    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error("determinized automaton exceeds {limit} states")]
    StateLimitExceeded { limit: usize },
}

/// Errors raised while compiling a regular expression.
///
/// Every syntax variant carries the code-unit offset into the pattern at
/// which the violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("No matching group close for index {index}")]
    UnmatchedGroup { index: usize },

    #[error("Stray closing group at index {index}")]
    StrayClosingGroup { index: usize },

    #[error("Stray opening group at index {index}")]
    StrayOpeningGroup { index: usize },

    #[error("No expression preceeds Kleene star at index {index}")]
    NothingToRepeat { index: usize },

    #[error("Non-quantifiable expression preceeding Kleene star at index {index}")]
    NotQuantifiable { index: usize },

    #[error("determinized automaton exceeds {limit} states")]
    TooManyStates { limit: usize },

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}

impl RegexError {
    /// The pattern offset a syntax error was detected at.
    pub fn index(&self) -> Option<usize> {
        match *self {
            RegexError::UnmatchedGroup { index }
            | RegexError::StrayClosingGroup { index }
            | RegexError::StrayOpeningGroup { index }
            | RegexError::NothingToRepeat { index }
            | RegexError::NotQuantifiable { index } => Some(index),
            RegexError::TooManyStates { .. } | RegexError::Automaton(_) => None,
        }
    }
}

impl From<DeterminizeError> for RegexError {
    fn from(err: DeterminizeError) -> Self {
        match err {
            DeterminizeError::Automaton(err) => RegexError::Automaton(err),
            DeterminizeError::StateLimitExceeded { limit } => RegexError::TooManyStates { limit },
        }
    }
}

/// Result type for regex compilation.
pub type RegexResult<T> = Result<T, RegexError>;
