use crate::{
    alphabet::Symbol,
    automaton::{NfaState, StateIndex, NFA},
    error::AutomatonError,
};

/// Helper struct for the construction of an [`NFA`]. It stores a list of transitions and the
/// acceptance of each state, the [`NFA`] is only validated once [`NFABuilder::into_nfa`] is
/// called.
///
/// # Example
///
/// We want to create an NFA with two states 0 and 1 over the alphabet `{0, 1}`, where state 1 is
/// accepting. State 0 moves to itself on `0` and to state 1 on `1`, state 1 moves to state 0 on
/// either symbol and also to itself on `1`.
/// ```
/// use finite_automata::prelude::*;
///
/// let nfa = NFA::builder()
///     .with_state_colors([false, true]) // acceptance given in the order of the states
///     .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
///     .into_nfa(0) // 0 is the initial state
///     .unwrap();
/// assert_eq!(nfa.size(), 2);
/// assert_eq!(nfa.alphabet_size(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NFABuilder {
    alphabet_size: Option<usize>,
    colors: Vec<bool>,
    edges: Vec<(StateIndex, Symbol, StateIndex)>,
}

impl NFABuilder {
    /// Fixes the size of the alphabet. By default, the alphabet consists precisely of the
    /// symbols up to the largest one that appears on some transition.
    pub fn alphabet_size(mut self, size: usize) -> Self {
        self.alphabet_size = Some(size);
        self
    }

    /// Sets the acceptance of the states in the order in which they are given. States that
    /// only appear in transitions are not accepting.
    pub fn with_state_colors<I: IntoIterator<Item = bool>>(mut self, iter: I) -> Self {
        self.colors = iter.into_iter().collect();
        self
    }

    /// Adds a list of `(source, symbol, target)` transitions.
    pub fn with_transitions<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (StateIndex, Symbol, StateIndex)>,
    {
        self.edges.extend(iter);
        self
    }

    /// Adds a single transition.
    pub fn add_transition(&mut self, source: StateIndex, symbol: Symbol, target: StateIndex) {
        self.edges.push((source, symbol, target));
    }

    /// Builds the [`NFA`] with `start` as its initial state. Fails if the result is not a
    /// well-formed automaton, see [`NFA::new`].
    pub fn into_nfa(self, start: StateIndex) -> Result<NFA, AutomatonError> {
        let size = self
            .edges
            .iter()
            .map(|&(source, _, target)| source.max(target) + 1)
            .chain(std::iter::once(self.colors.len()))
            .max()
            .unwrap_or(0);
        let alphabet_size = self.alphabet_size.unwrap_or_else(|| {
            self.edges
                .iter()
                .map(|&(_, symbol, _)| symbol + 1)
                .max()
                .unwrap_or(0)
        });

        let mut states: Vec<_> = (0..size)
            .map(|q| NfaState::new(self.colors.get(q).copied().unwrap_or(false)))
            .collect();
        for (source, symbol, target) in self.edges {
            states[source].add_transition(symbol, target);
        }

        NFA::new(alphabet_size, states, start)
    }
}
