//! Conversion of an [`NFA`] into an equivalent [`DFA`] through the subset (powerset)
//! construction.
//!
//! Every state of the resulting DFA stands for the set of NFA states that a run may be in
//! after reading the same word. Before the construction starts, the NFA states from which no
//! accepting state can be reached are removed from consideration. They never contribute to
//! acceptance, and dropping them lets all sets that consist of such dead states alone collapse
//! into a single rejecting sink.
//!
//! In the worst case the DFA has `2^n` states for an NFA with `n` states.

use tracing::{debug, trace};

use crate::{
    automaton::{FiniteAutomaton, StateIndex, DFA, NFA},
    math::{Map, OrderedSet, StateSet},
    Show,
};

/// Computes a [`DFA`] that accepts precisely the words accepted by `nfa`. The initial state of
/// the result is `0` and its states are numbered in the order in which their sets are
/// discovered, so repeated runs on the same NFA produce identical tables. The set of NFA states
/// behind each DFA state is available through [`DFA::state_sets`].
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let nfa = NFA::builder()
///     .with_state_colors([false, true])
///     .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
///     .into_nfa(0)
///     .unwrap();
/// let dfa = nfa_to_dfa(&nfa);
/// assert_eq!(dfa.size(), 3);
/// assert_eq!(dfa.accepts([1, 0, 1, 1]), Ok(true));
/// ```
pub fn nfa_to_dfa(nfa: &NFA) -> DFA {
    let k = nfa.alphabet_size();
    let live = nfa.live_states();
    trace!("{} of {} NFA states are live", live.len(), nfa.size());

    let initial: StateSet = std::iter::once(nfa.initial())
        .filter(|&q| live.contains(q))
        .collect();
    let mut indices: Map<StateSet, StateIndex> = Map::default();
    indices.insert(initial.clone(), 0);
    let mut discovered = vec![initial];

    let mut delta = Vec::with_capacity(k);
    let mut accepting = OrderedSet::new();

    // `discovered` grows while it is scanned, every set is processed exactly once
    let mut cursor = 0;
    while cursor < discovered.len() {
        let current = discovered[cursor].clone();
        if current.iter().any(|q| nfa.is_accepting(q)) {
            accepting.insert(cursor);
        }

        for symbol in 0..k {
            let successors: StateSet = current
                .iter()
                .flat_map(|q| nfa.successors(q, symbol))
                .filter(|&q| live.contains(q))
                .collect();

            let target = match indices.get(&successors) {
                Some(&idx) => idx,
                None => {
                    let idx = discovered.len();
                    trace!(
                        "discovered {} as state {idx} from {} on {symbol}",
                        successors.show(),
                        current.show()
                    );
                    indices.insert(successors.clone(), idx);
                    discovered.push(successors);
                    idx
                }
            };
            delta.push(target);
        }
        cursor += 1;
    }

    debug!(
        "subset construction turned NFA with {} states into DFA with {} states",
        nfa.size(),
        discovered.len()
    );
    DFA::from_parts(k, delta, accepting, 0).with_state_sets(discovered)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn worked_example() -> NFA {
        NFA::builder()
            .with_state_colors([false, true])
            .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
            .into_nfa(0)
            .unwrap()
    }

    #[test_log::test]
    fn worked_example_is_preserved() {
        let nfa = worked_example();
        let dfa = nfa_to_dfa(&nfa);

        assert_eq!(dfa.initial(), 0);
        assert_eq!(dfa.size(), 3);
        assert_eq!(
            dfa.state_sets().unwrap(),
            &[
                StateSet::singleton(0),
                StateSet::singleton(1),
                [0, 1].into_iter().collect()
            ]
        );
        assert_eq!(dfa.delta(), &[0, 1, 0, 2, 0, 2]);
        assert_eq!(dfa.accepting_states().collect::<Vec<_>>(), vec![1, 2]);

        for word in [[0, 1, 1, 0], [1, 0, 1, 0], [1, 0, 1, 1]] {
            assert_eq!(dfa.accepts(word), nfa.accepts(word));
        }
        assert_eq!(dfa.accepts([1, 0, 1, 1]), Ok(true));
    }

    #[test]
    fn accepting_initial_state() {
        let nfa = NFA::builder()
            .alphabet_size(1)
            .with_state_colors([true])
            .into_nfa(0)
            .unwrap();
        let dfa = nfa_to_dfa(&nfa);
        assert_eq!(dfa.accepts(Vec::<Symbol>::new()), Ok(true));
        assert_eq!(dfa.accepts([0]), Ok(false));
        assert_eq!(dfa.size(), 2);
    }

    #[test]
    fn transition_free_nfa_becomes_a_sink() {
        let nfa = NFA::builder()
            .alphabet_size(2)
            .with_state_colors([false])
            .into_nfa(0)
            .unwrap();
        let dfa = nfa_to_dfa(&nfa);
        assert_eq!(dfa.size(), 1);
        assert_eq!(dfa.delta(), &[0, 0]);
        assert_eq!(dfa.accepting_states().count(), 0);
        assert_eq!(dfa.accepts(Vec::<Symbol>::new()), Ok(false));
        assert_eq!(dfa.accepts([1, 0, 1]), Ok(false));
    }

    #[test]
    fn deduplication_ignores_discovery_order() {
        // state 0 reaches {1, 2} on `0` and {2, 1} (in the opposite order) on `1`
        let nfa = NFA::builder()
            .with_state_colors([false, true, true])
            .with_transitions([(0, 0, 1), (0, 0, 2), (0, 1, 2), (0, 1, 1)])
            .into_nfa(0)
            .unwrap();
        let dfa = nfa_to_dfa(&nfa);
        assert_eq!(dfa.successor(0, 0), dfa.successor(0, 1));
        assert_eq!(dfa.size(), 3);
    }

    #[test]
    fn construction_is_deterministic() {
        let nfa = worked_example();
        assert_eq!(nfa_to_dfa(&nfa), nfa_to_dfa(&nfa));
        assert_eq!(nfa.determinize(), nfa_to_dfa(&nfa));
    }

    #[test]
    fn state_sets_do_not_affect_equality() {
        let dfa = nfa_to_dfa(&worked_example());
        assert!(dfa.state_sets().is_some());
        let plain = DFA::from_table(2, vec![0, 1, 0, 2, 0, 2], [1, 2], 0).unwrap();
        assert!(plain.state_sets().is_none());
        assert_eq!(dfa, plain);
    }
}
