//! Subset construction algorithm for converting an ε-NFA to a DFA.

use crate::automaton::builder::AutomatonBuilder;
use crate::automaton::finite_automaton::Automaton;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use crate::error::DeterminizeError;
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::VecDeque;

/// Convert an automaton to an equivalent one with no epsilon transitions
/// and at most one destination per `(state, symbol)`.
pub fn determinize<S: Symbol>(nfa: &Automaton<S>) -> Result<Automaton<S>, DeterminizeError> {
    determinize_with_limit(nfa, None)
}

/// Like [`determinize`], but fails once more than `limit` DFA states would
/// be needed.
pub fn determinize_with_limit<S: Symbol>(
    nfa: &Automaton<S>,
    limit: Option<usize>,
) -> Result<Automaton<S>, DeterminizeError> {
    let capacity = nfa.num_states() as usize;

    // Each DFA state corresponds to a set of NFA states, keyed by its sorted
    // members. Ids are handed out in discovery order.
    let mut state_mapping: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut worklist: VecDeque<(StateId, StateSet)> = VecDeque::new();
    let mut transitions: Vec<(StateId, S, StateId)> = Vec::new();
    let mut final_states: Vec<StateId> = Vec::new();

    let initial_set = nfa.epsilon_closure_of(nfa.initial_state());
    check_limit(0, limit)?;
    state_mapping.insert(initial_set.to_vec(), 0);
    worklist.push_back((0, initial_set));

    // A composite state is enqueued only when it is first assigned an id,
    // so each one is processed exactly once.
    while let Some((current_dfa_state, current_nfa_set)) = worklist.pop_front() {
        if current_nfa_set.intersects(nfa.final_states()) {
            final_states.push(current_dfa_state);
        }

        // Raw destinations per symbol, across every member of the set.
        let mut moves: IndexMap<S, StateSet> = IndexMap::new();
        for state in current_nfa_set.iter() {
            for (symbol, destinations) in nfa.state_transitions(state) {
                moves
                    .entry(*symbol)
                    .or_insert_with(|| StateSet::with_capacity(capacity))
                    .union_with(destinations);
            }
        }

        for (symbol, reached) in moves {
            let next_nfa_set = nfa.epsilon_closure(&reached);
            let next_vec = next_nfa_set.to_vec();

            let next_dfa_state = match state_mapping.get(&next_vec) {
                Some(&existing) => existing,
                None => {
                    check_limit(state_mapping.len(), limit)?;
                    let new_state = state_mapping.len() as StateId;
                    trace!("composite state {new_state} = {next_nfa_set:?}");
                    state_mapping.insert(next_vec, new_state);
                    worklist.push_back((new_state, next_nfa_set));
                    new_state
                }
            };

            transitions.push((current_dfa_state, symbol, next_dfa_state));
        }
    }

    debug!(
        "determinized {} NFA states into {} DFA states ({} transitions)",
        nfa.num_states(),
        state_mapping.len(),
        transitions.len()
    );

    let mut builder = AutomatonBuilder::new(state_mapping.len() as StateId);
    builder.set_initial_state(0).add_final_states(final_states);
    for (source, symbol, destination) in transitions {
        builder.add_transition(source, symbol, destination);
    }
    Ok(builder.build()?)
}

/// Fail if a DFA that already has `discovered` states may not grow.
fn check_limit(discovered: usize, limit: Option<usize>) -> Result<(), DeterminizeError> {
    match limit {
        Some(limit) if discovered >= limit => Err(DeterminizeError::StateLimitExceeded { limit }),
        _ => Ok(()),
    }
}
