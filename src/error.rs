use thiserror::Error;

use crate::{alphabet::Symbol, automaton::StateIndex};

/// Errors that can occur when constructing or running an automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// A word contains a symbol that lies outside of the alphabet of the automaton.
    #[error("symbol {symbol} is not part of an alphabet of size {alphabet_size}")]
    InvalidSymbol {
        /// The offending symbol index.
        symbol: Symbol,
        /// Size of the alphabet the automaton was built over.
        alphabet_size: usize,
    },
    /// A state was requested that does not exist.
    #[error("state {state} does not exist in an automaton with {size} states")]
    UnknownState {
        /// The requested state.
        state: StateIndex,
        /// Number of states of the automaton.
        size: usize,
    },
    /// A symbol value could not be found when translating a word into symbol indices.
    #[error("symbol {0} does not appear in the alphabet")]
    UnknownSymbol(String),
    /// Two automata that are compared are built over alphabets of different size.
    #[error("alphabet sizes {left} and {right} do not match")]
    AlphabetMismatch {
        /// Alphabet size of the left automaton.
        left: usize,
        /// Alphabet size of the right automaton.
        right: usize,
    },
    /// The automaton was rejected on construction.
    #[error("malformed automaton: {0}")]
    Malformed(#[from] MalformedAutomaton),
}

/// Invariant violations that are detected when an automaton is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAutomaton {
    /// Automata must be built over at least one symbol.
    #[error("alphabet is empty")]
    EmptyAlphabet,
    /// The initial state does not exist, this includes automata without any states.
    #[error("initial state {start} does not exist, there are {size} states")]
    InvalidStart {
        /// The designated initial state.
        start: StateIndex,
        /// Number of states.
        size: usize,
    },
    /// A transition leads to a state that does not exist.
    #[error("transition from {state} on {symbol} leads to {target}, but there are {size} states")]
    InvalidTarget {
        /// Source of the transition.
        state: StateIndex,
        /// Symbol of the transition.
        symbol: Symbol,
        /// The nonexistent target.
        target: StateIndex,
        /// Number of states.
        size: usize,
    },
    /// A transition is labelled with a symbol outside of the alphabet.
    #[error("transition from {state} uses symbol {symbol}, but the alphabet has size {alphabet_size}")]
    InvalidTransitionSymbol {
        /// Source of the transition.
        state: StateIndex,
        /// The offending symbol.
        symbol: Symbol,
        /// Size of the alphabet.
        alphabet_size: usize,
    },
    /// The transition table does not consist of complete rows.
    #[error("transition table of length {len} does not consist of complete rows of length {alphabet_size}")]
    TableSize {
        /// Length of the table.
        len: usize,
        /// Size of the alphabet, which is the length of a row.
        alphabet_size: usize,
    },
    /// A state that is marked as accepting does not exist.
    #[error("accepting state {state} does not exist, there are {size} states")]
    InvalidAcceptingState {
        /// The nonexistent state.
        state: StateIndex,
        /// Number of states.
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = AutomatonError::InvalidSymbol {
            symbol: 3,
            alphabet_size: 2,
        };
        assert_eq!(err.to_string(), "symbol 3 is not part of an alphabet of size 2");

        let err: AutomatonError = MalformedAutomaton::InvalidStart { start: 0, size: 0 }.into();
        assert_eq!(
            err.to_string(),
            "malformed automaton: initial state 0 does not exist, there are 0 states"
        );
    }
}
