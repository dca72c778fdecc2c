//! Symbol types for automata transitions.

use std::fmt::Debug;
use std::hash::Hash;

/// A value that can label a transition.
///
/// Blanket-implemented for every small, hashable, copyable type.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// A symbol type with a finite, enumerable domain.
///
/// Needed wherever an automaton has to accept "any symbol", since every
/// symbol of the domain is then materialized as its own transition.
pub trait Alphabet: Symbol {
    /// Iterate over every symbol in the domain.
    fn symbols() -> impl Iterator<Item = Self>;
}

/// A UTF-16 code unit, the symbol type regular expressions are compiled over.
pub type CodeUnit = u16;

impl Alphabet for u16 {
    fn symbols() -> impl Iterator<Item = Self> {
        u16::MIN..=u16::MAX
    }
}

impl Alphabet for u8 {
    fn symbols() -> impl Iterator<Item = Self> {
        u8::MIN..=u8::MAX
    }
}

impl Alphabet for bool {
    fn symbols() -> impl Iterator<Item = Self> {
        [false, true].into_iter()
    }
}
