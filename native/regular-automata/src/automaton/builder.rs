//! Staged construction of automata.

use crate::automaton::finite_automaton::Automaton;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use crate::error::{AutomatonError, AutomatonResult};
use indexmap::IndexMap;

/// Accumulates the states and edges of an automaton.
///
/// Nothing is checked while edges are added; [`build`](Self::build)
/// validates every state reference against the declared universe once and
/// consumes the builder. The initial state defaults to `0`.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder<S> {
    num_states: StateId,
    initial_state: StateId,
    final_states: StateSet,
    /// Transitions: (source, symbol) -> set of destination states
    transitions: IndexMap<(StateId, S), StateSet>,
    epsilon_transitions: IndexMap<StateId, StateSet>,
}

impl<S: Symbol> AutomatonBuilder<S> {
    /// Create a builder for an automaton over states `0..num_states`.
    pub fn new(num_states: StateId) -> Self {
        Self {
            num_states,
            initial_state: 0,
            final_states: StateSet::with_capacity(num_states as usize),
            transitions: IndexMap::new(),
            epsilon_transitions: IndexMap::new(),
        }
    }

    /// Get the declared number of states.
    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    /// Redeclare the size of the state universe.
    pub fn set_num_states(&mut self, num_states: StateId) -> &mut Self {
        self.num_states = num_states;
        self
    }

    /// Set the initial state.
    pub fn set_initial_state(&mut self, state: StateId) -> &mut Self {
        self.initial_state = state;
        self
    }

    /// Add a final (accepting) state.
    pub fn add_final_state(&mut self, state: StateId) -> &mut Self {
        self.final_states.insert(state);
        self
    }

    /// Add several final states at once.
    pub fn add_final_states(&mut self, states: impl IntoIterator<Item = StateId>) -> &mut Self {
        self.final_states.extend(states);
        self
    }

    /// Add a transition from source to destination on the given symbol.
    pub fn add_transition(&mut self, source: StateId, symbol: S, destination: StateId) -> &mut Self {
        let capacity = self.num_states as usize;
        self.transitions
            .entry((source, symbol))
            .or_insert_with(|| StateSet::with_capacity(capacity))
            .insert(destination);
        self
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) -> &mut Self {
        let capacity = self.num_states as usize;
        self.epsilon_transitions
            .entry(source)
            .or_insert_with(|| StateSet::with_capacity(capacity))
            .insert(destination);
        self
    }

    /// Validate every state reference and freeze the automaton.
    pub fn build(self) -> AutomatonResult<Automaton<S>> {
        self.validate()?;

        let num_states = self.num_states as usize;
        let mut transitions: Vec<IndexMap<S, StateSet>> =
            (0..num_states).map(|_| IndexMap::new()).collect();
        for ((source, symbol), destinations) in self.transitions {
            transitions[source as usize].insert(symbol, destinations);
        }

        let mut epsilon_transitions = vec![StateSet::default(); num_states];
        for (source, destinations) in self.epsilon_transitions {
            epsilon_transitions[source as usize] = destinations;
        }

        Ok(Automaton::from_parts(
            self.num_states,
            transitions,
            epsilon_transitions,
            self.initial_state,
            self.final_states,
        ))
    }

    fn validate(&self) -> AutomatonResult<()> {
        self.validate_state_in_universe(self.initial_state)?;

        for state in self.final_states.iter() {
            self.validate_state_in_universe(state)?;
        }

        for ((source, _), destinations) in &self.transitions {
            self.validate_state_in_universe(*source)?;
            for destination in destinations.iter() {
                self.validate_state_in_universe(destination)?;
            }
        }

        for (source, destinations) in &self.epsilon_transitions {
            self.validate_state_in_universe(*source)?;
            for destination in destinations.iter() {
                self.validate_state_in_universe(destination)?;
            }
        }

        Ok(())
    }

    fn validate_state_in_universe(&self, state: StateId) -> AutomatonResult<()> {
        if state < self.num_states {
            Ok(())
        } else {
            Err(AutomatonError::StateNotInUniverse {
                state,
                num_states: self.num_states,
            })
        }
    }
}
