use itertools::Itertools;

use crate::{alphabet::Symbol, Show};

/// Enumerates all words over `symbols` symbols whose length is at most `max_len`, shortest
/// words first and words of equal length in lexicographic order. The empty word comes first.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let words: Vec<_> = word::words_up_to(2, 2).collect();
/// assert_eq!(words.len(), 7);
/// assert_eq!(words[0], Vec::<Symbol>::new());
/// assert_eq!(words[6], vec![1, 1]);
/// ```
pub fn words_up_to(symbols: usize, max_len: usize) -> impl Iterator<Item = Vec<Symbol>> {
    std::iter::once(Vec::new()).chain((1..=max_len).flat_map(move |len| {
        std::iter::repeat(0..symbols)
            .take(len)
            .multi_cartesian_product()
    }))
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(|x| x.show()).join(""))
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order() {
        let words: Vec<_> = words_up_to(2, 3).collect();
        assert_eq!(words.len(), 1 + 2 + 4 + 8);
        assert_eq!(words[1], vec![0]);
        assert_eq!(words[3], vec![0, 0]);
        assert_eq!(words[14], vec![1, 1, 1]);
        assert_eq!(words_up_to(3, 0).count(), 1);
        assert_eq!(vec![1usize, 0, 2].show(), "\"102\"");
    }
}
