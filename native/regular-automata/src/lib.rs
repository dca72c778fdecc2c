//! Regular expressions built from finite-automaton first principles.
//!
//! A pattern is parsed by recursive descent into a Thompson NFA, assembled
//! from small automata with the [`automaton::concatenation`],
//! [`automaton::union`] and [`automaton::kleene_star`] combinators. The NFA
//! is then determinized by subset construction and the resulting DFA decides
//! whole-input matches.
//!
//! Supported syntax: literals, `.` (any code unit), `*`, `|` and
//! non-nested `( )` groups.

pub mod automaton;
mod error;
mod regex;

pub use error::{AutomatonError, AutomatonResult, DeterminizeError, RegexError, RegexResult};
pub use regex::{Regex, RegexBuilder};
