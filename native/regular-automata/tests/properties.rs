//! Randomized checks of the automaton laws.

use quickcheck::{QuickCheck, TestResult};
use regular_automata::automaton::{
    Automaton, StateId, accepting_single_symbol, concatenation, determinize, kleene_star, union,
};

const NUM_STATES: StateId = 6;

/// A small random NFA over the alphabet `{false, true}`.
fn random_nfa(
    initial: u8,
    finals: &[u8],
    edges: &[(u8, bool, u8)],
    epsilons: &[(u8, u8)],
) -> Automaton<bool> {
    let state = |s: u8| StateId::from(s) % NUM_STATES;

    let mut builder = Automaton::builder(NUM_STATES);
    builder
        .set_initial_state(state(initial))
        .add_final_states(finals.iter().map(|&s| state(s)));
    for &(from, symbol, to) in edges {
        builder.add_transition(state(from), symbol, state(to));
    }
    for &(from, to) in epsilons {
        builder.add_epsilon_transition(state(from), state(to));
    }
    builder.build().unwrap()
}

#[test]
fn prop_determinize_preserves_language() {
    fn prop(
        initial: u8,
        finals: Vec<u8>,
        edges: Vec<(u8, bool, u8)>,
        epsilons: Vec<(u8, u8)>,
        inputs: Vec<Vec<bool>>,
    ) -> TestResult {
        let nfa = random_nfa(initial, &finals, &edges, &epsilons);
        let dfa = determinize(&nfa).unwrap();

        if !dfa.is_deterministic() {
            return TestResult::failed();
        }
        let agree = inputs
            .iter()
            .chain(std::iter::once(&Vec::new()))
            .all(|input| nfa.accepts(input.iter().copied()) == dfa.accepts(input.iter().copied()));
        TestResult::from_bool(agree)
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(u8, Vec<u8>, Vec<(u8, bool, u8)>, Vec<(u8, u8)>, Vec<Vec<bool>>) -> TestResult);
}

#[test]
fn prop_epsilon_closure_is_idempotent() {
    fn prop(epsilons: Vec<(u8, u8)>, state: u8) -> bool {
        let nfa = random_nfa(0, &[], &[], &epsilons);
        let closure = nfa.epsilon_closure_of(StateId::from(state) % NUM_STATES);
        closure.contains(StateId::from(state) % NUM_STATES) && nfa.epsilon_closure(&closure) == closure
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<(u8, u8)>, u8) -> bool);
}

#[test]
fn prop_kleene_star_accepts_only_repetitions() {
    fn prop(input: Vec<bool>) -> bool {
        let star = kleene_star(&accepting_single_symbol(true).unwrap()).unwrap();
        star.accepts(input.iter().copied()) == input.iter().all(|&symbol| symbol)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<bool>) -> bool);
}

#[test]
fn prop_concatenation_and_union_on_single_symbols() {
    fn prop(input: Vec<bool>) -> bool {
        let t = accepting_single_symbol(true).unwrap();
        let f = accepting_single_symbol(false).unwrap();
        let tf = concatenation(&t, &f).unwrap();
        let t_or_f = union(&t, &f).unwrap();

        tf.accepts(input.iter().copied()) == (input == [true, false])
            && t_or_f.accepts(input.iter().copied()) == (input.len() == 1)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<bool>) -> bool);
}
