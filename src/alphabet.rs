use std::borrow::Borrow;

use itertools::Itertools;

use crate::{error::AutomatonError, math::Bijection, Show};

/// Symbols are dense indices into an alphabet, i.e. for an alphabet of size `k` every symbol
/// lies in `0..k`. Automata only ever see symbols, the actual symbol values live in an
/// [`Alphabet`].
pub type Symbol = usize;

/// Associates each symbol value of type `S` with a unique [`Symbol`] index. The indices
/// are dense and assigned in the order in which the values are first given.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let alphabet = Alphabet::from_symbols(['A', 'B']);
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet.translate("BAB".chars()), Ok(vec![1, 0, 1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet<S: Ord = char> {
    symbols: Bijection<S, Symbol>,
}

impl<S: Ord> Alphabet<S> {
    /// Builds an alphabet from the given symbol values. Values that appear more than once
    /// keep the index of their first occurrence.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut bijection = Bijection::new();
        for sym in symbols {
            if !bijection.contains_left(&sym) {
                let idx = bijection.len();
                bijection.insert(sym, idx);
            }
        }
        Self { symbols: bijection }
    }

    /// Returns the number of distinct symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the index of `sym`, if it is part of the alphabet.
    pub fn index_of(&self, sym: &S) -> Option<Symbol> {
        self.symbols.get_by_left(sym).copied()
    }

    /// Returns the value behind the index `symbol`.
    pub fn symbol_at(&self, symbol: Symbol) -> Option<&S> {
        self.symbols.get_by_right(&symbol)
    }

    /// Iterates over all symbol values, ordered by their index.
    pub fn universe(&self) -> impl Iterator<Item = &S> + '_ {
        (0..self.size()).filter_map(move |symbol| self.symbol_at(symbol))
    }
}

impl<S: Ord + Show> Alphabet<S> {
    /// Translates a word over symbol values into the corresponding sequence of indices.
    /// Fails on the first value that is not part of the alphabet.
    pub fn translate<W>(&self, word: W) -> Result<Vec<Symbol>, AutomatonError>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        word.into_iter()
            .map(|sym| {
                let sym = sym.borrow();
                self.index_of(sym)
                    .ok_or_else(|| AutomatonError::UnknownSymbol(sym.show()))
            })
            .collect()
    }

    /// Translates a sequence of indices back into symbol values, which is mainly useful
    /// for displaying words.
    pub fn show_word<W: IntoIterator<Item = Symbol>>(&self, word: W) -> String {
        word.into_iter()
            .map(|symbol| match self.symbol_at(symbol) {
                Some(sym) => sym.show(),
                None => format!("<{symbol}>"),
            })
            .join("")
    }
}

impl Alphabet<char> {
    /// Creates a new alphabet of the given size. The symbols are just the first `size` letters
    /// of the latin alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self::from_symbols((0..size).map(|i| (b'a' + i as u8) as char))
    }
}

impl<S: Ord> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_symbols(iter)
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
    {
        format!(
            "\"{}\"",
            iter.into_iter().map(|sym| sym.to_string()).join("")
        )
    }
}
