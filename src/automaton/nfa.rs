use std::collections::{BTreeMap, BTreeSet, VecDeque};

use bit_set::BitSet;
use itertools::Itertools;
use tracing::trace;

use crate::{
    alphabet::Symbol,
    builder::NFABuilder,
    error::{AutomatonError, MalformedAutomaton},
    math::StateSet,
    Show,
};

use super::{FiniteAutomaton, StateIndex, DFA};

/// A single state of an [`NFA`]. It maps every symbol to a (possibly empty) set of successor
/// states, an absent entry simply means that the state has no transition on that symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaState {
    transitions: BTreeMap<Symbol, BTreeSet<StateIndex>>,
    accepting: bool,
}

impl NfaState {
    /// Creates a state without any outgoing transitions.
    pub fn new(accepting: bool) -> Self {
        Self {
            transitions: BTreeMap::new(),
            accepting,
        }
    }

    /// Creates a state from a list of `(symbol, target)` pairs. A symbol may appear in any
    /// number of pairs, which is where the nondeterminism comes from.
    pub fn with_transitions<I>(accepting: bool, transitions: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, StateIndex)>,
    {
        transitions
            .into_iter()
            .fold(Self::new(accepting), |mut state, (symbol, target)| {
                state.add_transition(symbol, target);
                state
            })
    }

    pub(crate) fn add_transition(&mut self, symbol: Symbol, target: StateIndex) {
        self.transitions.entry(symbol).or_default().insert(target);
    }

    /// Returns true if the state is accepting.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Iterates over all states that can be reached on `symbol`.
    pub fn successors(&self, symbol: Symbol) -> impl Iterator<Item = StateIndex> + '_ {
        self.transitions
            .get(&symbol)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Iterates over all outgoing transitions as `(symbol, target)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, StateIndex)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&symbol, targets)| targets.iter().map(move |&target| (symbol, target)))
    }
}

/// A nondeterministic finite automaton without epsilon transitions. It owns the size of its
/// alphabet and is validated on construction, so every transition symbol lies in the alphabet
/// and every transition as well as the initial state refer to existing states.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let nfa = NFA::new(
///     2,
///     vec![
///         NfaState::with_transitions(false, [(0, 0), (1, 1)]),
///         NfaState::with_transitions(true, [(0, 0), (1, 0), (1, 1)]),
///     ],
///     0,
/// )
/// .unwrap();
/// assert_eq!(nfa.accepts([1, 0, 1, 1]), Ok(true));
/// assert_eq!(nfa.accepts([0, 1, 1, 0]), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    alphabet_size: usize,
    states: Vec<NfaState>,
    start: StateIndex,
}

impl NFA {
    /// Creates a new NFA over `alphabet_size` symbols, checking that all transitions are
    /// labelled with symbols from the alphabet and lead to existing states. An NFA without
    /// states has no initial state and is rejected with [`MalformedAutomaton::InvalidStart`].
    pub fn new(
        alphabet_size: usize,
        states: Vec<NfaState>,
        start: StateIndex,
    ) -> Result<Self, AutomatonError> {
        if alphabet_size == 0 {
            return Err(MalformedAutomaton::EmptyAlphabet.into());
        }
        let size = states.len();
        if start >= size {
            return Err(MalformedAutomaton::InvalidStart { start, size }.into());
        }
        for (state, record) in states.iter().enumerate() {
            for (symbol, target) in record.transitions() {
                if symbol >= alphabet_size {
                    return Err(MalformedAutomaton::InvalidTransitionSymbol {
                        state,
                        symbol,
                        alphabet_size,
                    }
                    .into());
                }
                if target >= size {
                    return Err(MalformedAutomaton::InvalidTarget {
                        state,
                        symbol,
                        target,
                        size,
                    }
                    .into());
                }
            }
        }

        Ok(Self {
            alphabet_size,
            states,
            start,
        })
    }

    /// Creates an empty [`NFABuilder`].
    pub fn builder() -> NFABuilder {
        NFABuilder::default()
    }

    /// Returns all states, the position of a state is its index.
    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    /// Returns the state with index `state`, if it exists.
    pub fn state(&self, state: StateIndex) -> Option<&NfaState> {
        self.states.get(state)
    }

    /// Returns true if `state` exists and is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.state(state).is_some_and(NfaState::is_accepting)
    }

    /// Iterates over the successors of `state` on `symbol`. Yields nothing if the state does
    /// not exist.
    pub fn successors(
        &self,
        state: StateIndex,
        symbol: Symbol,
    ) -> impl Iterator<Item = StateIndex> + '_ {
        self.state(state)
            .into_iter()
            .flat_map(move |record| record.successors(symbol))
    }

    /// Runs `word` and returns the set of states the automaton may be in afterwards. The set
    /// is empty once no run can be continued, in which case it stays empty.
    pub fn reached_states<W>(&self, word: W) -> Result<StateSet, AutomatonError>
    where
        W: IntoIterator<Item = Symbol>,
    {
        let mut current = BitSet::with_capacity(self.size());
        current.insert(self.start);

        for symbol in word {
            let symbol = self.check_symbol(symbol)?;
            let mut next = BitSet::with_capacity(self.size());
            for state in current.iter() {
                next.extend(self.successors(state, symbol));
            }
            trace!(
                "read {symbol}, moving from {} to {}",
                StateSet::from(&current).show(),
                StateSet::from(&next).show()
            );
            current = next;
        }

        Ok(StateSet::from(&current))
    }

    /// Computes the states from which some accepting state can be reached. The remaining
    /// states are dead, no run passing through them can ever accept.
    pub fn live_states(&self) -> BitSet {
        let mut predecessors = vec![Vec::new(); self.size()];
        for (source, record) in self.states.iter().enumerate() {
            for (_, target) in record.transitions() {
                predecessors[target].push(source);
            }
        }

        let mut live = BitSet::with_capacity(self.size());
        let mut queue: VecDeque<_> = self
            .states
            .iter()
            .positions(NfaState::is_accepting)
            .collect();
        live.extend(queue.iter().copied());

        while let Some(state) = queue.pop_front() {
            for &source in &predecessors[state] {
                if live.insert(source) {
                    queue.push_back(source);
                }
            }
        }
        live
    }

    /// Converts `self` into an equivalent [`DFA`] using the subset construction, see
    /// [`crate::determinization::nfa_to_dfa`].
    pub fn determinize(&self) -> DFA {
        crate::determinization::nfa_to_dfa(self)
    }
}

impl FiniteAutomaton for NFA {
    fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    fn size(&self) -> usize {
        self.states.len()
    }

    fn initial(&self) -> StateIndex {
        self.start
    }

    fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> Result<bool, AutomatonError> {
        Ok(self
            .reached_states(word)?
            .iter()
            .any(|state| self.is_accepting(state)))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn worked_example() -> NFA {
        NFA::new(
            2,
            vec![
                NfaState::with_transitions(false, [(0, 0), (1, 1)]),
                NfaState::with_transitions(true, [(0, 0), (1, 0), (1, 1)]),
            ],
            0,
        )
        .unwrap()
    }

    #[test_log::test]
    fn nondeterministic_runs() {
        let nfa = worked_example();
        assert_eq!(nfa.accepts([0, 1, 1, 0]), Ok(false));
        assert_eq!(nfa.accepts([1, 0, 1, 0]), Ok(false));
        assert_eq!(nfa.accepts([1, 0, 1, 1]), Ok(true));
        assert_eq!(nfa.accepts(Vec::<Symbol>::new()), Ok(false));
        assert_eq!(
            nfa.reached_states([1, 1]).unwrap(),
            [0, 1].into_iter().collect::<StateSet>()
        );
    }

    #[test]
    fn dying_runs_stay_dead() {
        let nfa = NFA::new(
            2,
            vec![
                NfaState::with_transitions(true, [(0, 1)]),
                NfaState::new(true),
            ],
            0,
        )
        .unwrap();
        assert_eq!(nfa.accepts([0]), Ok(true));
        assert!(nfa.reached_states([1]).unwrap().is_empty());
        assert_eq!(nfa.accepts([1, 0, 0]), Ok(false));
    }

    #[test]
    fn rejects_symbols_outside_of_alphabet() {
        let nfa = worked_example();
        assert_eq!(
            nfa.accepts([0, 2, 1]),
            Err(AutomatonError::InvalidSymbol {
                symbol: 2,
                alphabet_size: 2
            })
        );
    }

    #[test]
    fn malformed_automata_are_rejected() {
        assert_eq!(
            NFA::new(2, vec![], 0),
            Err(MalformedAutomaton::InvalidStart { start: 0, size: 0 }.into())
        );
        assert_eq!(
            NFA::new(2, vec![NfaState::new(false)], 1),
            Err(MalformedAutomaton::InvalidStart { start: 1, size: 1 }.into())
        );
        assert_eq!(
            NFA::new(2, vec![NfaState::with_transitions(false, [(1, 3)])], 0),
            Err(MalformedAutomaton::InvalidTarget {
                state: 0,
                symbol: 1,
                target: 3,
                size: 1
            }
            .into())
        );
        assert_eq!(
            NFA::new(1, vec![NfaState::with_transitions(false, [(1, 0)])], 0),
            Err(MalformedAutomaton::InvalidTransitionSymbol {
                state: 0,
                symbol: 1,
                alphabet_size: 1
            }
            .into())
        );
        assert_eq!(
            NFA::new(0, vec![NfaState::new(true)], 0),
            Err(MalformedAutomaton::EmptyAlphabet.into())
        );
    }

    #[test]
    fn live_states() {
        let nfa = NFA::new(
            2,
            vec![
                NfaState::with_transitions(false, [(0, 1), (1, 2)]),
                NfaState::with_transitions(true, [(0, 1)]),
                NfaState::with_transitions(false, [(0, 2), (1, 3)]),
                NfaState::new(false),
            ],
            0,
        )
        .unwrap();
        let live = nfa.live_states();
        assert_eq!(live.iter().collect::<Vec<_>>(), vec![0, 1]);
    }
}
