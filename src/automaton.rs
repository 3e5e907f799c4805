use crate::{alphabet::Symbol, error::AutomatonError};

mod dfa;
pub use dfa::DFA;

mod nfa;
pub use nfa::{NfaState, NFA};

/// States of an automaton are identified by their position, i.e. an automaton with `n` states
/// has the states `0..n`.
pub type StateIndex = usize;

/// Common interface of [`NFA`] and [`DFA`]. Both own the size of the alphabet they are built
/// over, so every word can be checked against it before the automaton is run.
pub trait FiniteAutomaton {
    /// Returns the number of symbols the automaton reads.
    fn alphabet_size(&self) -> usize;

    /// Returns the number of states.
    fn size(&self) -> usize;

    /// Returns the designated initial state.
    fn initial(&self) -> StateIndex;

    /// Decides whether `word` is accepted. Fails with [`AutomatonError::InvalidSymbol`] as
    /// soon as a symbol outside of the alphabet is encountered, in which case the remainder
    /// of the word is not read.
    fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> Result<bool, AutomatonError>;

    /// Ensures that `symbol` is part of the alphabet.
    fn check_symbol(&self, symbol: Symbol) -> Result<Symbol, AutomatonError> {
        if symbol < self.alphabet_size() {
            Ok(symbol)
        } else {
            Err(AutomatonError::InvalidSymbol {
                symbol,
                alphabet_size: self.alphabet_size(),
            })
        }
    }
}
