use tracing::debug;

use crate::prelude::*;

/// Generates a random [`NFA`] with `size` states over `symbols` symbols. For every state,
/// symbol and potential target, the transition is inserted with probability `density`, and
/// every state is accepting with probability one half. State `0` is the initial state.
///
/// Uses the thread-local generator of `fastrand`, so calling `fastrand::seed` beforehand makes
/// the result reproducible.
pub fn generate_random_nfa(symbols: usize, size: usize, density: f64) -> NFA {
    assert!(symbols > 0, "alphabet must not be empty");
    assert!(size > 0, "automaton needs at least one state");

    let mut builder = NFA::builder()
        .alphabet_size(symbols)
        .with_state_colors((0..size).map(|_| fastrand::bool()));
    let mut transitions = 0;
    for source in 0..size {
        for symbol in 0..symbols {
            for target in 0..size {
                if fastrand::f64() < density {
                    builder.add_transition(source, symbol, target);
                    transitions += 1;
                }
            }
        }
    }
    debug!("generated random NFA with {size} states and {transitions} transitions");

    match builder.into_nfa(0) {
        Ok(nfa) => nfa,
        Err(e) => unreachable!("randomly generated NFA is malformed: {e}"),
    }
}

/// Generates a random [`DFA`] with `size` states over `symbols` symbols by drawing the target of
/// every transition uniformly. Every state is accepting with probability one half and state
/// `0` is the initial state. Depending on the draw, some states may be unreachable.
pub fn generate_random_dfa(symbols: usize, size: usize) -> DFA {
    assert!(symbols > 0, "alphabet must not be empty");
    assert!(size > 0, "automaton needs at least one state");

    let delta = (0..size * symbols)
        .map(|_| fastrand::usize(..size))
        .collect();
    let accepting: math::OrderedSet<_> = (0..size).filter(|_| fastrand::bool()).collect();
    DFA::from_parts(symbols, delta, accepting, 0)
}

/// Generates a random word over `symbols` symbols, its length is drawn uniformly from the range
/// `min_len..=max_len`.
pub fn generate_random_word(symbols: usize, min_len: usize, max_len: usize) -> Vec<Symbol> {
    let length = fastrand::usize(min_len..=max_len);
    (0..length).map(|_| fastrand::usize(..symbols)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn random_automata_are_well_formed() {
        fastrand::seed(0x5eed);
        for size in 1..6 {
            let nfa = generate_random_nfa(2, size, 0.3);
            assert_eq!(nfa.size(), size);
            assert_eq!(nfa.alphabet_size(), 2);

            let dfa = generate_random_dfa(3, size);
            assert_eq!(dfa.size(), size);
            assert_eq!(dfa.delta().len(), 3 * size);
            assert!(dfa.delta().iter().all(|&q| q < size));
        }
    }

    #[test]
    fn random_words_respect_bounds() {
        fastrand::seed(7);
        for _ in 0..20 {
            let word = generate_random_word(3, 2, 5);
            assert!((2..=5).contains(&word.len()));
            assert!(word.iter().all(|&symbol| symbol < 3));
        }
    }
}
