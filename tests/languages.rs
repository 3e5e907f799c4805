#![cfg(all(feature = "random", feature = "minimize"))]

use finite_automata::{
    prelude::*,
    random::{generate_random_dfa, generate_random_nfa, generate_random_word},
};

fn agree_up_to(nfa: &NFA, dfa: &DFA, max_len: usize) {
    for word in word::words_up_to(nfa.alphabet_size(), max_len) {
        assert_eq!(
            nfa.accepts(word.iter().copied()),
            dfa.accepts(word.iter().copied()),
            "disagreement on {}",
            word.show()
        );
    }
}

fn assert_total(dfa: &DFA) {
    assert_eq!(dfa.delta().len(), dfa.size() * dfa.alphabet_size());
    assert!(dfa.delta().iter().all(|&target| target < dfa.size()));
    assert!(dfa.initial() < dfa.size());
    assert!(dfa.accepting_states().all(|state| state < dfa.size()));
}

#[test_log::test]
fn subset_construction_preserves_languages() {
    fastrand::seed(0xa11ce);
    for size in 1..=6 {
        for _ in 0..10 {
            let nfa = generate_random_nfa(2, size, 0.25);
            let dfa = nfa_to_dfa(&nfa);
            assert_total(&dfa);
            assert!(dfa.size() <= 1 << size);
            agree_up_to(&nfa, &dfa, 7);
            assert_eq!(dfa, nfa_to_dfa(&nfa));
        }
    }
}

#[test_log::test]
fn minimization_preserves_languages() {
    fastrand::seed(42);
    for size in 1..=12 {
        for _ in 0..5 {
            let dfa = generate_random_dfa(3, size);
            let minimized = dfa.minimize();
            assert_total(&minimized);
            assert!(minimized.size() <= dfa.size());
            assert_eq!(minimized.equivalent(&dfa), Ok(true));
            assert_eq!(minimized.minimize(), minimized);

            for _ in 0..20 {
                let word = generate_random_word(3, 0, 12);
                assert_eq!(
                    minimized.accepts(word.iter().copied()),
                    dfa.accepts(word.iter().copied())
                );
            }
        }
    }
}

#[test]
fn minimal_states_are_pairwise_distinguishable() {
    fastrand::seed(3);
    for _ in 0..20 {
        let minimized = generate_random_dfa(2, 8).minimize();
        for p in 0..minimized.size() {
            for q in (p + 1)..minimized.size() {
                let left = DFA::from_table(
                    2,
                    minimized.delta().to_vec(),
                    minimized.accepting_states(),
                    p,
                )
                .unwrap();
                let right = DFA::from_table(
                    2,
                    minimized.delta().to_vec(),
                    minimized.accepting_states(),
                    q,
                )
                .unwrap();
                assert_eq!(left.equivalent(&right), Ok(false));
            }
        }
    }
}

#[test]
fn worked_example_end_to_end() {
    let alphabet = Alphabet::from_symbols(['A', 'B']);
    let nfa = NFA::builder()
        .with_state_colors([false, true])
        .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
        .into_nfa(0)
        .unwrap();
    let dfa = nfa_to_dfa(&nfa);
    let minimized = dfa.minimize();
    assert_eq!(dfa.size(), 3);
    assert_eq!(minimized.size(), 2);

    for (text, expected) in [("ABBA", false), ("BABA", false), ("BABB", true)] {
        let word = alphabet.translate(text.chars()).unwrap();
        assert_eq!(nfa.accepts(word.iter().copied()), Ok(expected));
        assert_eq!(dfa.accepts(word.iter().copied()), Ok(expected));
        assert_eq!(minimized.accepts(word), Ok(expected));
    }
    assert!(matches!(
        alphabet.translate("ABC".chars()),
        Err(AutomatonError::UnknownSymbol(_))
    ));
    assert_eq!(
        minimized.accepts([0, 2]),
        Err(AutomatonError::InvalidSymbol {
            symbol: 2,
            alphabet_size: 2
        })
    );
}
