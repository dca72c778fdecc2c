//! Thompson-style constructions: atomic automata and the structural
//! combinators that compose them.
//!
//! Every combinator builds a brand new automaton. Operand states are copied
//! in at a fixed offset so the index spaces of the operands never collide,
//! then a few fresh epsilon transitions splice the pieces together.

use crate::automaton::builder::AutomatonBuilder;
use crate::automaton::finite_automaton::Automaton;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{Alphabet, Symbol};
use crate::error::AutomatonResult;

/// An automaton accepting only the empty input.
pub fn accepting_empty_input<S: Symbol>() -> AutomatonResult<Automaton<S>> {
    let mut builder = AutomatonBuilder::new(1);
    builder
        .set_initial_state(0)
        .add_final_state(0)
        .add_epsilon_transition(0, 0);
    builder.build()
}

/// An automaton accepting exactly the one-symbol input `symbol`.
pub fn accepting_single_symbol<S: Symbol>(symbol: S) -> AutomatonResult<Automaton<S>> {
    let mut builder = AutomatonBuilder::new(2);
    builder
        .set_initial_state(0)
        .add_final_state(1)
        .add_transition(0, symbol, 1);
    builder.build()
}

/// An automaton accepting any one-symbol input.
///
/// Materializes one transition per symbol of the alphabet.
pub fn accepting_all_symbols<S: Alphabet>() -> AutomatonResult<Automaton<S>> {
    let mut builder = AutomatonBuilder::new(2);
    builder.set_initial_state(0).add_final_state(1);
    for symbol in S::symbols() {
        builder.add_transition(0, symbol, 1);
    }
    builder.build()
}

/// An automaton accepting `xy` for every `x` accepted by `first` and `y`
/// accepted by `second`.
pub fn concatenation<S: Symbol>(
    first: &Automaton<S>,
    second: &Automaton<S>,
) -> AutomatonResult<Automaton<S>> {
    let offset = first.num_states();
    let num_states = offset + second.num_states() + 2;
    let initial_state = num_states - 2;
    let final_state = num_states - 1;

    let mut builder = AutomatonBuilder::new(num_states);
    builder
        .set_initial_state(initial_state)
        .add_final_state(final_state)
        .add_epsilon_transition(initial_state, first.initial_state());

    add_epsilon_transitions(
        &mut builder,
        first.final_states(),
        second.initial_state() + offset,
        0,
    );
    copy_transitions(first, &mut builder, 0);
    copy_epsilon_transitions(first, &mut builder, 0);

    add_epsilon_transitions(&mut builder, second.final_states(), final_state, offset);
    copy_transitions(second, &mut builder, offset);
    copy_epsilon_transitions(second, &mut builder, offset);

    builder.build()
}

/// An automaton accepting everything `first` or `second` accepts.
pub fn union<S: Symbol>(first: &Automaton<S>, second: &Automaton<S>) -> AutomatonResult<Automaton<S>> {
    let offset = first.num_states();
    let num_states = offset + second.num_states() + 2;
    let initial_state = num_states - 2;
    let final_state = num_states - 1;

    let mut builder = AutomatonBuilder::new(num_states);
    builder
        .set_initial_state(initial_state)
        .add_final_state(final_state)
        .add_epsilon_transition(initial_state, first.initial_state())
        .add_epsilon_transition(initial_state, second.initial_state() + offset);

    add_epsilon_transitions(&mut builder, first.final_states(), final_state, 0);
    copy_transitions(first, &mut builder, 0);
    copy_epsilon_transitions(first, &mut builder, 0);

    add_epsilon_transitions(&mut builder, second.final_states(), final_state, offset);
    copy_transitions(second, &mut builder, offset);
    copy_epsilon_transitions(second, &mut builder, offset);

    builder.build()
}

/// An automaton accepting zero or more repetitions of what `body` accepts.
pub fn kleene_star<S: Symbol>(body: &Automaton<S>) -> AutomatonResult<Automaton<S>> {
    // One new initial state and one new final state.
    let num_states = body.num_states() + 2;
    let initial_state = num_states - 2;
    let final_state = num_states - 1;

    let mut builder = AutomatonBuilder::new(num_states);
    builder
        .set_initial_state(initial_state)
        .add_final_state(final_state)
        .add_epsilon_transition(initial_state, final_state)
        .add_epsilon_transition(initial_state, body.initial_state());

    for state in body.final_states().iter() {
        builder
            .add_epsilon_transition(state, final_state)
            .add_epsilon_transition(state, body.initial_state());
    }

    copy_transitions(body, &mut builder, 0);
    copy_epsilon_transitions(body, &mut builder, 0);

    builder.build()
}

fn add_epsilon_transitions<S: Symbol>(
    builder: &mut AutomatonBuilder<S>,
    sources: &StateSet,
    destination: StateId,
    offset: StateId,
) {
    for source in sources.iter() {
        builder.add_epsilon_transition(source + offset, destination);
    }
}

fn copy_transitions<S: Symbol>(input: &Automaton<S>, builder: &mut AutomatonBuilder<S>, offset: StateId) {
    for (source, symbol, destination) in input.transitions() {
        builder.add_transition(source + offset, symbol, destination + offset);
    }
}

fn copy_epsilon_transitions<S: Symbol>(
    input: &Automaton<S>,
    builder: &mut AutomatonBuilder<S>,
    offset: StateId,
) {
    for (source, destination) in input.epsilon_transitions() {
        builder.add_epsilon_transition(source + offset, destination + offset);
    }
}
