//! Finite automaton with epsilon transitions, and its acceptance simulation.

use crate::automaton::builder::AutomatonBuilder;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

/// An immutable finite automaton over symbols of type `S`.
///
/// Transitions may be non-deterministic and epsilon edges are allowed, so
/// the same type represents both the NFAs produced by the combinators and
/// the DFAs produced by subset construction. Values are only ever created
/// by an [`AutomatonBuilder`].
#[derive(Debug, Clone)]
pub struct Automaton<S> {
    /// Number of states (states are numbered 0..num_states)
    num_states: StateId,
    /// Labeled transitions, one row per source state
    transitions: Vec<IndexMap<S, StateSet>>,
    /// Epsilon transitions, one destination set per source state
    epsilon_transitions: Vec<StateSet>,
    initial_state: StateId,
    final_states: StateSet,
}

impl<S: Symbol> Automaton<S> {
    /// Start assembling an automaton over states `0..num_states`.
    pub fn builder(num_states: StateId) -> AutomatonBuilder<S> {
        AutomatonBuilder::new(num_states)
    }

    pub(crate) fn from_parts(
        num_states: StateId,
        transitions: Vec<IndexMap<S, StateSet>>,
        epsilon_transitions: Vec<StateSet>,
        initial_state: StateId,
        final_states: StateSet,
    ) -> Self {
        Self {
            num_states,
            transitions,
            epsilon_transitions,
            initial_state,
            final_states,
        }
    }

    /// Get the number of states.
    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Run the automaton over `input` and report whether it ends in a final
    /// state.
    ///
    /// The whole input is always consumed: reaching a final state part way
    /// through does not accept.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = self.epsilon_closure_of(self.initial_state);

        for symbol in input {
            if current.is_empty() {
                return false;
            }
            current = self.move_on_symbol(&current, &symbol);
        }

        current.intersects(&self.final_states)
    }

    /// Get the epsilon closure of a single state.
    pub fn epsilon_closure_of(&self, state: StateId) -> StateSet {
        self.epsilon_closure(&StateSet::singleton(state, self.num_states as usize))
    }

    /// Get the epsilon closure of a set of states: every state reachable
    /// from a member through zero or more epsilon transitions.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states as usize);
        let mut queue: VecDeque<StateId> = states.iter().collect();

        while let Some(state) = queue.pop_front() {
            if !closure.insert(state) {
                continue;
            }
            if let Some(destinations) = self.epsilon_transitions.get(state as usize) {
                queue.extend(destinations.iter().filter(|dest| !closure.contains(*dest)));
            }
        }

        closure
    }

    /// Get the states reachable from a set of states on a given symbol.
    /// Returns the epsilon closure of the reached states.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: &S) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states as usize);

        for state in states.iter() {
            if let Some(destinations) = self.adjacent(state, symbol) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// The destinations of `state` on `symbol`; `None` when there is no
    /// such edge.
    fn adjacent(&self, state: StateId, symbol: &S) -> Option<&StateSet> {
        self.transitions.get(state as usize)?.get(symbol)
    }

    /// The labeled edges leaving `state`, grouped by symbol.
    pub fn state_transitions(&self, state: StateId) -> impl Iterator<Item = (&S, &StateSet)> + '_ {
        self.transitions
            .get(state as usize)
            .into_iter()
            .flat_map(|row| row.iter())
    }

    /// Get all labeled transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, S, StateId)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .flat_map(|(src, row)| {
                row.iter().flat_map(move |(&sym, dests)| {
                    dests.iter().map(move |dst| (src as StateId, sym, dst))
                })
            })
    }

    /// Get all epsilon transitions as `(source, destination)`.
    pub fn epsilon_transitions(&self) -> impl Iterator<Item = (StateId, StateId)> + '_ {
        self.epsilon_transitions
            .iter()
            .enumerate()
            .flat_map(|(src, dests)| dests.iter().map(move |dst| (src as StateId, dst)))
    }

    /// Get the alphabet: every symbol labeling at least one transition.
    pub fn alphabet(&self) -> IndexSet<S> {
        self.transitions
            .iter()
            .flat_map(|row| row.keys().copied())
            .collect()
    }

    /// Whether the automaton has no epsilon transitions and at most one
    /// destination per `(state, symbol)`.
    pub fn is_deterministic(&self) -> bool {
        self.epsilon_transitions.iter().all(StateSet::is_empty)
            && self
                .transitions
                .iter()
                .all(|row| row.values().all(|dests| dests.len() <= 1))
    }

    /// Check if the automaton accepts no string at all.
    /// Uses BFS from the initial state following all transitions.
    pub fn is_empty(&self) -> bool {
        let mut visited = StateSet::with_capacity(self.num_states as usize);
        let mut queue: VecDeque<StateId> = self.epsilon_closure_of(self.initial_state).iter().collect();

        while let Some(state) = queue.pop_front() {
            if !visited.insert(state) {
                continue;
            }

            if self.final_states.contains(state) {
                return false;
            }

            for (_, destinations) in self.state_transitions(state) {
                let closure = self.epsilon_closure(destinations);
                queue.extend(closure.iter().filter(|dest| !visited.contains(*dest)));
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(builder: &mut AutomatonBuilder<char>) -> Automaton<char> {
        builder.clone().build().unwrap()
    }

    #[test]
    fn test_single_non_final_state_accepts_nothing() {
        let automaton = build(Automaton::builder(1).add_transition(0, 'a', 0));

        assert!(!automaton.accepts(['a']));
        assert!(!automaton.accepts([]));
        assert!(automaton.is_empty());
    }

    #[test]
    fn test_single_final_state_loops() {
        let automaton = build(
            Automaton::builder(1)
                .add_final_state(0)
                .add_transition(0, 'a', 0)
                .add_transition(0, 'b', 0),
        );

        assert!(automaton.accepts(['a']));
        assert!(automaton.accepts(['b']));
        assert!(automaton.accepts(['a', 'b']));
        assert!(automaton.accepts("ba".chars()));
        assert!(automaton.accepts([]));
        assert!(!automaton.accepts(['c']));
    }

    #[test]
    fn test_partial_input_is_rejected() {
        let automaton = build(
            Automaton::builder(3)
                .add_final_state(2)
                .add_transition(0, 'a', 1)
                .add_transition(1, 'b', 2),
        );

        assert!(!automaton.accepts(['a']));
        assert!(automaton.accepts(['a', 'b']));
        assert!(!automaton.accepts(['a', 'b', 'b']));
    }

    #[test]
    fn test_final_state_mid_input_does_not_accept() {
        // 0 -a-> 1(final) -a-> 2
        let automaton = build(
            Automaton::builder(3)
                .add_final_state(1)
                .add_transition(0, 'a', 1)
                .add_transition(1, 'a', 2),
        );

        assert!(automaton.accepts(['a']));
        assert!(!automaton.accepts(['a', 'a']));
    }

    #[test]
    fn test_jumps_through_epsilon_transitions() {
        let automaton = build(
            Automaton::builder(4)
                .add_final_state(3)
                .add_epsilon_transition(0, 1)
                .add_epsilon_transition(1, 2)
                .add_transition(2, 'b', 3),
        );

        assert!(automaton.accepts(['b']));
        assert!(!automaton.accepts([]));
        assert!(!automaton.is_deterministic());
    }

    #[test]
    fn test_epsilon_closure() {
        // 0 -ε-> 1 -ε-> 2, 3 isolated
        let automaton = build(
            Automaton::builder(4)
                .add_epsilon_transition(0, 1)
                .add_epsilon_transition(1, 2),
        );

        assert_eq!(automaton.epsilon_closure_of(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(automaton.epsilon_closure_of(2).to_vec(), vec![2]);
        assert_eq!(automaton.epsilon_closure_of(3).to_vec(), vec![3]);
    }

    #[test]
    fn test_epsilon_closure_terminates_on_cycles() {
        let automaton = build(
            Automaton::builder(3)
                .add_epsilon_transition(0, 1)
                .add_epsilon_transition(1, 2)
                .add_epsilon_transition(2, 0)
                .add_epsilon_transition(2, 2),
        );

        let closure = automaton.epsilon_closure_of(1);
        assert_eq!(closure.to_vec(), vec![0, 1, 2]);
        assert_eq!(automaton.epsilon_closure(&closure), closure);
    }

    #[test]
    fn test_move_on_symbol() {
        // 0 -a-> 1, 0 -a-> 2, 1 -ε-> 3
        let automaton = build(
            Automaton::builder(4)
                .add_transition(0, 'a', 1)
                .add_transition(0, 'a', 2)
                .add_epsilon_transition(1, 3),
        );

        let start = StateSet::singleton(0, 4);
        assert_eq!(automaton.move_on_symbol(&start, &'a').to_vec(), vec![1, 2, 3]);
        assert!(automaton.move_on_symbol(&start, &'b').is_empty());
    }

    #[test]
    fn test_state_transitions_and_alphabet() {
        let automaton = build(
            Automaton::builder(3)
                .add_transition(0, 'a', 1)
                .add_transition(0, 'b', 2)
                .add_transition(1, 'c', 2),
        );

        let row: Vec<_> = automaton
            .state_transitions(0)
            .map(|(sym, dests)| (*sym, dests.to_vec()))
            .collect();
        assert_eq!(row, vec![('a', vec![1]), ('b', vec![2])]);
        assert_eq!(automaton.state_transitions(7).count(), 0);

        let alphabet: Vec<char> = automaton.alphabet().into_iter().collect();
        assert_eq!(alphabet, vec!['a', 'b', 'c']);
        assert!(automaton.is_deterministic());
    }

    #[test]
    fn test_is_empty() {
        let mut builder = Automaton::builder(2);
        builder.add_final_state(1);
        assert!(build(&mut builder).is_empty());

        builder.add_transition(0, 'a', 1);
        assert!(!build(&mut builder).is_empty());
    }
}
