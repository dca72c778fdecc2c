//! Recursive-descent compilation of a pattern into an NFA.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr       := branch ('|' branch)*
//! branch     := quantified*
//! quantified := atom '*'?
//! atom       := '(' expr ')' | '.' | literal
//! ```
//!
//! Groups do not nest: an `(` met while looking for the `)` closing a group
//! is an error.

use crate::automaton::{
    Automaton, CodeUnit, accepting_all_symbols, accepting_empty_input, accepting_single_symbol,
    concatenation, kleene_star, union,
};
use crate::error::{AutomatonResult, RegexError, RegexResult};

const UNION: CodeUnit = b'|' as CodeUnit;
const KLEENE_STAR: CodeUnit = b'*' as CodeUnit;
const GROUP_OPEN: CodeUnit = b'(' as CodeUnit;
const GROUP_CLOSE: CodeUnit = b')' as CodeUnit;
const ANY: CodeUnit = b'.' as CodeUnit;

/// Compiles a pattern, given as UTF-16 code units, into a (raw) NFA.
pub(crate) struct Compiler<'p> {
    pattern: &'p [CodeUnit],
}

impl<'p> Compiler<'p> {
    pub(crate) fn new(pattern: &'p [CodeUnit]) -> Self {
        Self { pattern }
    }

    pub(crate) fn compile(&self) -> RegexResult<Automaton<CodeUnit>> {
        self.compile_range(0, self.pattern.len())
    }

    /// Compile `pattern[start..end]`.
    fn compile_range(&self, start: usize, end: usize) -> RegexResult<Automaton<CodeUnit>> {
        let mut branches: Vec<Automaton<CodeUnit>> = Vec::new();
        // Atoms of the branch being parsed, concatenated when it closes.
        let mut atoms: Vec<Automaton<CodeUnit>> = Vec::new();
        let mut quantifiable = true;

        let mut index = start;
        while index < end {
            match self.pattern[index] {
                GROUP_CLOSE => return Err(RegexError::StrayClosingGroup { index }),
                GROUP_OPEN => {
                    let (group, next) = self.compile_group(index, end)?;
                    atoms.push(group);
                    quantifiable = true;
                    index = next;
                }
                UNION => {
                    close_branch(&mut atoms, &mut branches)?;
                    index += 1;
                }
                KLEENE_STAR => {
                    let Some(last) = atoms.pop() else {
                        return Err(RegexError::NothingToRepeat { index });
                    };
                    if !quantifiable {
                        return Err(RegexError::NotQuantifiable { index });
                    }
                    atoms.push(kleene_star(&last)?);
                    quantifiable = false;
                    index += 1;
                }
                ANY => {
                    atoms.push(accepting_all_symbols()?);
                    quantifiable = true;
                    index += 1;
                }
                literal => {
                    atoms.push(accepting_single_symbol(literal)?);
                    quantifiable = true;
                    index += 1;
                }
            }
        }
        close_branch(&mut atoms, &mut branches)?;

        fold(branches, union::<CodeUnit>)
    }

    /// Compile the group opened at `open`. Returns the group's automaton and
    /// the index just past its closing `)`.
    fn compile_group(&self, open: usize, end: usize) -> RegexResult<(Automaton<CodeUnit>, usize)> {
        let mut index = open + 1;
        while index < end {
            match self.pattern[index] {
                GROUP_OPEN => return Err(RegexError::StrayOpeningGroup { index }),
                GROUP_CLOSE => {
                    let group = self.compile_range(open + 1, index)?;
                    return Ok((group, index + 1));
                }
                _ => index += 1,
            }
        }
        Err(RegexError::UnmatchedGroup { index: open })
    }
}

/// Concatenate the pending atoms into one branch; an empty run becomes the
/// empty-input automaton.
fn close_branch(
    atoms: &mut Vec<Automaton<CodeUnit>>,
    branches: &mut Vec<Automaton<CodeUnit>>,
) -> RegexResult<()> {
    branches.push(fold(std::mem::take(atoms), concatenation::<CodeUnit>)?);
    Ok(())
}

/// Left fold of `automata` through a binary combinator.
fn fold<F>(automata: Vec<Automaton<CodeUnit>>, combine: F) -> RegexResult<Automaton<CodeUnit>>
where
    F: Fn(&Automaton<CodeUnit>, &Automaton<CodeUnit>) -> AutomatonResult<Automaton<CodeUnit>>,
{
    let mut automata = automata.into_iter();
    let Some(first) = automata.next() else {
        return Ok(accepting_empty_input()?);
    };
    Ok(automata.try_fold(first, |acc, next| combine(&acc, &next))?)
}
