//! Compiled regular expressions.

mod compiler;

use crate::automaton::{Automaton, CodeUnit, determinize_with_limit};
use crate::error::RegexResult;
use compiler::Compiler;
use log::debug;

/// A compiled regular expression.
///
/// The pattern is compiled to an NFA and determinized once, at build time.
/// Matching then runs the resulting DFA over the UTF-16 code units of the
/// input; the whole input must match. A `Regex` is immutable and can be
/// shared freely between threads.
///
/// ```
/// use regular_automata::Regex;
///
/// let re = Regex::new("(ab)*|c").unwrap();
/// assert!(re.is_match("abab"));
/// assert!(re.is_match("c"));
/// assert!(!re.is_match("abc"));
/// ```
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    automaton: Automaton<CodeUnit>,
}

impl Regex {
    /// Compile `pattern` with the default configuration.
    pub fn new(pattern: &str) -> RegexResult<Self> {
        RegexBuilder::new(pattern).build()
    }

    /// Whether `input`, in its entirety, belongs to the language of the
    /// pattern.
    pub fn is_match(&self, input: &str) -> bool {
        self.automaton.accepts(input.encode_utf16())
    }

    /// The pattern this regex was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The deterministic automaton backing this regex.
    pub fn automaton(&self) -> &Automaton<CodeUnit> {
        &self.automaton
    }
}

/// Configures and compiles a [`Regex`].
#[derive(Debug, Clone)]
pub struct RegexBuilder {
    pattern: String,
    dfa_state_limit: Option<usize>,
}

impl RegexBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            dfa_state_limit: None,
        }
    }

    /// Cap the number of states the determinized automaton may have.
    ///
    /// Subset construction can blow up exponentially; with a limit set,
    /// [`build`](Self::build) fails instead. Unlimited by default.
    pub fn dfa_state_limit(&mut self, limit: Option<usize>) -> &mut Self {
        self.dfa_state_limit = limit;
        self
    }

    pub fn build(&self) -> RegexResult<Regex> {
        let units: Vec<CodeUnit> = self.pattern.encode_utf16().collect();
        let nfa = Compiler::new(&units).compile()?;
        let automaton = determinize_with_limit(&nfa, self.dfa_state_limit)?;

        debug!(
            "compiled {:?}: {} NFA states, {} DFA states",
            self.pattern,
            nfa.num_states(),
            automaton.num_states()
        );

        Ok(Regex {
            pattern: self.pattern.clone(),
            automaton,
        })
    }
}
