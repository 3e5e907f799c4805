use std::collections::VecDeque;

use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::trace;

use crate::{
    alphabet::Symbol,
    error::{AutomatonError, MalformedAutomaton},
    math::{OrderedSet, StateSet},
    Show,
};

use super::{FiniteAutomaton, StateIndex};

/// A deterministic finite automaton whose transitions are stored in a flat table: the successor
/// of state `q` on symbol `a` lives at position `q * alphabet_size + a`. The automaton is total,
/// i.e. the table consists of complete rows, one for each state.
///
/// A [`DFA`] is usually obtained through [`crate::determinization::nfa_to_dfa`] or
/// [`DFA::minimize`], but it can also be built directly with [`DFA::from_table`].
#[derive(Debug, Clone)]
pub struct DFA {
    alphabet_size: usize,
    delta: Vec<StateIndex>,
    accepting: OrderedSet<StateIndex>,
    start: StateIndex,
    state_sets: Option<Vec<StateSet>>,
}

impl DFA {
    /// Builds a DFA from a flat transition table. Fails if the alphabet is empty, if the table
    /// does not consist of complete rows, or if the initial state, an accepting state or an
    /// entry of the table refers to a state that does not exist.
    ///
    /// # Example
    /// ```
    /// use finite_automata::prelude::*;
    ///
    /// // accepts all words with an odd number of `1`s
    /// let dfa = DFA::from_table(2, vec![0, 1, 1, 0], [1], 0).unwrap();
    /// assert_eq!(dfa.size(), 2);
    /// assert_eq!(dfa.accepts([1, 0, 1, 1]), Ok(true));
    /// ```
    pub fn from_table<I>(
        alphabet_size: usize,
        delta: Vec<StateIndex>,
        accepting: I,
        start: StateIndex,
    ) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = StateIndex>,
    {
        if alphabet_size == 0 {
            return Err(MalformedAutomaton::EmptyAlphabet.into());
        }
        if delta.len() % alphabet_size != 0 {
            return Err(MalformedAutomaton::TableSize {
                len: delta.len(),
                alphabet_size,
            }
            .into());
        }
        let size = delta.len() / alphabet_size;
        if start >= size {
            return Err(MalformedAutomaton::InvalidStart { start, size }.into());
        }
        if let Some((position, &target)) = delta.iter().find_position(|&&target| target >= size) {
            return Err(MalformedAutomaton::InvalidTarget {
                state: position / alphabet_size,
                symbol: position % alphabet_size,
                target,
                size,
            }
            .into());
        }
        let accepting: OrderedSet<_> = accepting.into_iter().collect();
        if let Some(&state) = accepting.iter().find(|&&state| state >= size) {
            return Err(MalformedAutomaton::InvalidAcceptingState { state, size }.into());
        }

        Ok(Self::from_parts(alphabet_size, delta, accepting, start))
    }

    /// Assembles a DFA whose invariants are upheld by the caller.
    pub(crate) fn from_parts(
        alphabet_size: usize,
        delta: Vec<StateIndex>,
        accepting: OrderedSet<StateIndex>,
        start: StateIndex,
    ) -> Self {
        debug_assert!(alphabet_size > 0 && delta.len() % alphabet_size == 0);
        debug_assert!(start < delta.len() / alphabet_size);
        Self {
            alphabet_size,
            delta,
            accepting,
            start,
            state_sets: None,
        }
    }

    pub(crate) fn with_state_sets(mut self, state_sets: Vec<StateSet>) -> Self {
        debug_assert_eq!(state_sets.len(), self.size());
        self.state_sets = Some(state_sets);
        self
    }

    /// Returns the flat transition table.
    pub fn delta(&self) -> &[StateIndex] {
        &self.delta
    }

    /// Returns the row of the transition table that belongs to `state`, i.e. the successors
    /// of `state` ordered by symbol.
    pub fn row(&self, state: StateIndex) -> Option<&[StateIndex]> {
        let offset = state.checked_mul(self.alphabet_size)?;
        let end = offset.checked_add(self.alphabet_size)?;
        self.delta.get(offset..end)
    }

    /// Returns the successor of `state` on `symbol`.
    pub fn successor(
        &self,
        state: StateIndex,
        symbol: Symbol,
    ) -> Result<StateIndex, AutomatonError> {
        let symbol = self.check_symbol(symbol)?;
        self.row(state)
            .map(|row| row[symbol])
            .ok_or(AutomatonError::UnknownState {
                state,
                size: self.size(),
            })
    }

    /// Iterates over the accepting states in ascending order.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.accepting.iter().copied()
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting.contains(&state)
    }

    /// For a DFA that was obtained through subset construction, this returns for every state
    /// the set of (live) NFA states it represents. `None` for all other DFAs. The sets are
    /// bookkeeping only and do not take part in comparing two DFAs for equality.
    pub fn state_sets(&self) -> Option<&[StateSet]> {
        self.state_sets.as_deref()
    }

    /// Runs `word` from the initial state and returns the state that is reached.
    pub fn reached_state<W>(&self, word: W) -> Result<StateIndex, AutomatonError>
    where
        W: IntoIterator<Item = Symbol>,
    {
        let mut current = self.start;
        for symbol in word {
            let symbol = self.check_symbol(symbol)?;
            let next = self.delta[current * self.alphabet_size + symbol];
            trace!("read {symbol}, moving from {current} to {next}");
            current = next;
        }
        Ok(current)
    }

    /// Returns the states that are reachable from the initial state, in the order in which a
    /// breadth-first search that explores symbols in ascending order discovers them.
    pub fn reachable_states(&self) -> Vec<StateIndex> {
        let mut seen = vec![false; self.size()];
        let mut order = vec![self.start];
        seen[self.start] = true;

        let mut cursor = 0;
        while cursor < order.len() {
            let state = order[cursor];
            for &target in &self.delta[state * self.alphabet_size..(state + 1) * self.alphabet_size]
            {
                if !seen[target] {
                    seen[target] = true;
                    order.push(target);
                }
            }
            cursor += 1;
        }
        order
    }

    /// Removes all states that are not reachable from the initial state. The remaining states
    /// are renumbered in the order given by [`DFA::reachable_states`], so the initial state of
    /// the result is always `0`.
    pub fn trim(&self) -> DFA {
        let k = self.alphabet_size;
        let mut renamed: Vec<Option<StateIndex>> = vec![None; self.size()];
        let mut queue = VecDeque::from([self.start]);
        renamed[self.start] = Some(0);
        let mut delta = Vec::with_capacity(self.delta.len());
        let mut accepting = OrderedSet::new();
        let mut discovered = 1;

        while let Some(state) = queue.pop_front() {
            if self.is_accepting(state) {
                accepting.insert(delta.len() / k);
            }
            for &target in &self.delta[state * k..(state + 1) * k] {
                let new = match renamed[target] {
                    Some(new) => new,
                    None => {
                        let new = discovered;
                        discovered += 1;
                        renamed[target] = Some(new);
                        queue.push_back(target);
                        new
                    }
                };
                delta.push(new);
            }
        }

        if discovered < self.size() {
            trace!("removed {} unreachable states", self.size() - discovered);
        }
        DFA::from_parts(k, delta, accepting, 0)
    }

    /// Searches for a shortest word on which `self` and `other` disagree, i.e. a word in the
    /// symmetric difference of the two accepted languages. Returns `Ok(None)` if the two are
    /// equivalent, and fails if they are not built over alphabets of the same size.
    pub fn separate(&self, other: &DFA) -> Result<Option<Vec<Symbol>>, AutomatonError> {
        if self.alphabet_size != other.alphabet_size {
            return Err(AutomatonError::AlphabetMismatch {
                left: self.alphabet_size,
                right: other.alphabet_size,
            });
        }
        let k = self.alphabet_size;
        let index = |(p, q): (StateIndex, StateIndex)| p * other.size() + q;

        // for each visited pair, the pair and symbol it was first reached from
        let mut parent: Vec<Option<Option<((StateIndex, StateIndex), Symbol)>>> =
            vec![None; self.size() * other.size()];
        let initial = (self.start, other.start);
        parent[index(initial)] = Some(None);
        let mut queue = VecDeque::from([initial]);

        while let Some(pair @ (p, q)) = queue.pop_front() {
            if self.is_accepting(p) != other.is_accepting(q) {
                let mut word = Vec::new();
                let mut current = pair;
                while let Some(Some((previous, symbol))) = parent[index(current)] {
                    word.push(symbol);
                    current = previous;
                }
                word.reverse();
                return Ok(Some(word));
            }
            for symbol in 0..k {
                let next = (self.delta[p * k + symbol], other.delta[q * k + symbol]);
                if parent[index(next)].is_none() {
                    parent[index(next)] = Some(Some((pair, symbol)));
                    queue.push_back(next);
                }
            }
        }
        Ok(None)
    }

    /// Returns true if `self` and `other` accept the same language.
    pub fn equivalent(&self, other: &DFA) -> Result<bool, AutomatonError> {
        Ok(self.separate(other)?.is_none())
    }

    /// Renders the transition table for debugging. Accepting states are highlighted and the
    /// initial state is marked with an arrow.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string())
                .chain((0..self.alphabet_size).map(|symbol| symbol.show())),
        );
        for state in 0..self.size() {
            let name = match (state == self.start, self.is_accepting(state)) {
                (true, true) => format!("-> {}", state.green()),
                (true, false) => format!("-> {state}"),
                (false, true) => state.green().to_string(),
                (false, false) => state.to_string(),
            };
            builder.push_record(
                std::iter::once(name).chain(
                    self.delta[state * self.alphabet_size..(state + 1) * self.alphabet_size]
                        .iter()
                        .map(|target| target.show()),
                ),
            );
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl FiniteAutomaton for DFA {
    fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    fn size(&self) -> usize {
        self.delta.len() / self.alphabet_size
    }

    fn initial(&self) -> StateIndex {
        self.start
    }

    fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> Result<bool, AutomatonError> {
        let reached = self.reached_state(word)?;
        Ok(self.is_accepting(reached))
    }
}

/// Two DFAs are equal if they have the same table, accepting states and initial state.
impl PartialEq for DFA {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet_size == other.alphabet_size
            && self.start == other.start
            && self.delta == other.delta
            && self.accepting == other.accepting
    }
}

impl Eq for DFA {}

/// Lists every state with its transition row, one `symbol:target` line per symbol.
impl std::fmt::Display for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in 0..self.size() {
            writeln!(
                f,
                "State {state}{}:",
                if self.is_accepting(state) {
                    " (accepting)"
                } else {
                    ""
                }
            )?;
            for symbol in 0..self.alphabet_size {
                writeln!(
                    f,
                    "{symbol}:{}",
                    self.delta[state * self.alphabet_size + symbol]
                )?;
            }
        }
        Ok(())
    }
}
