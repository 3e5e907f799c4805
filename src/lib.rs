//! Library for working with finite automata on finite words in Rust.
//!
//! An automaton reads words over a finite alphabet. Internally, symbols are dense indices, so an
//! alphabet of size `k` consists of the symbols `0..k`; an [`alphabet::Alphabet`] can be used to
//! translate between arbitrary symbol values and these indices. Both kinds of automata own the
//! size of their alphabet and are validated on construction, so running a word either succeeds
//! or reports the offending symbol through an [`error::AutomatonError`].
//!
//! The crate offers
//! - [`automaton::NFA`], a nondeterministic automaton (without epsilon transitions) whose states
//!   map each symbol to a set of successors. Evaluation keeps track of the set of states that a
//!   run may currently be in.
//! - [`automaton::DFA`], a total deterministic automaton whose transitions are stored in a flat
//!   table with one row per state. Evaluation is a sequence of table lookups.
//! - [`determinization::nfa_to_dfa`], which turns an NFA into an equivalent DFA through the subset
//!   construction.
//! - [`automaton::DFA::minimize`], which computes the minimal equivalent DFA using the
//!   table-filling algorithm. This is feature gated behind the `minimize` feature.
//!
//! Every operation is a pure function, it produces a new automaton and leaves its input
//! untouched.
//!
//! ```
//! use finite_automata::prelude::*;
//!
//! let alphabet = Alphabet::from_symbols(['A', 'B']);
//! let nfa = NFA::builder()
//!     .with_state_colors([false, true])
//!     .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
//!     .into_nfa(0)
//!     .unwrap();
//! let dfa = nfa_to_dfa(&nfa).minimize();
//!
//! let word = alphabet.translate("BABB".chars()).unwrap();
//! assert_eq!(nfa.accepts(word.clone()), Ok(true));
//! assert_eq!(dfa.accepts(word), Ok(true));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use finite_automata::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{FiniteAutomaton, NfaState, StateIndex, DFA, NFA},
        builder::NFABuilder,
        determinization::nfa_to_dfa,
        error::{AutomatonError, MalformedAutomaton},
        math,
        math::{Partition, StateSet},
        word, Show,
    };

    #[cfg(feature = "minimize")]
    pub use super::minimization::minimize;
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Defines the two kinds of automata and their common interface.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;

/// Fluent construction of nondeterministic automata.
pub mod builder;

/// Errors that are reported by construction and evaluation of automata.
pub mod error;

pub mod determinization;

/// Contains the implementation of DFA minimization. This is feature gated behind the `minimize` feature.
#[cfg(feature = "minimize")]
pub mod minimization;

/// Implements the generation of random automata and words.
#[cfg(feature = "random")]
pub mod random;

/// Module that contains definitions for dealing with words.
pub mod word;

use itertools::Itertools;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example 0, 1, 2, ... and for a set of states it should be {0, 1, 2}.
    /// Just use something that makes sense. This is mainly used for debugging purposes.
    fn show(&self) -> String;
    /// Show a collection of the thing, for a collection of states this should be [0, 1, 2, ...].
    /// By default the elements are shown one after another, separated by commas.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        format!("[{}]", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }

    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
        I::IntoIter: DoubleEndedIterator,
    {
        format!("{{{}}}", iter.into_iter().map(Show::show).join(", "))
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn show() {
        assert_eq!(3usize.show(), "3");
        assert_eq!((1usize, true).show(), "(1, +)");
        assert_eq!(usize::show_collection(&[0, 2]), "[0, 2]");
        assert_eq!(bool::show_collection(&[true, false]), "{+, -}");
    }
}
