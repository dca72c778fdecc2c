//! Finite automata over arbitrary symbol types.
//!
//! This module provides:
//! - an immutable automaton with epsilon transitions and its acceptance
//!   simulation
//! - a builder validating state references once at build time
//! - Thompson combinators (concatenation, union, Kleene star)
//! - subset construction (NFA to DFA conversion)

mod builder;
mod combinators;
mod finite_automaton;
mod state;
mod subset_construction;
mod symbol;

pub use builder::AutomatonBuilder;
pub use combinators::{
    accepting_all_symbols, accepting_empty_input, accepting_single_symbol, concatenation,
    kleene_star, union,
};
pub use finite_automaton::Automaton;
pub use state::{StateId, StateSet};
pub use subset_construction::{determinize, determinize_with_limit};
pub use symbol::{Alphabet, CodeUnit, Symbol};
