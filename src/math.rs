use std::{collections::BTreeSet, hash::Hash};

use bit_set::BitSet;
use itertools::Itertools;

use crate::{automaton::StateIndex, Show};

/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;
/// Type alias for ordered sets, used wherever iteration order has to be deterministic.
pub type OrderedSet<S> = BTreeSet<S>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A set of states in canonical form, i.e. sorted and without duplicates. Two sets with
/// the same members compare (and hash) equal regardless of the order in which the members
/// were inserted, which is what subset construction relies on when deduplicating.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet(Vec<StateIndex>);

impl StateSet {
    /// Creates the empty set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a set containing only `state`.
    pub fn singleton(state: StateIndex) -> Self {
        Self(vec![state])
    }

    /// Returns true if `state` is a member of `self`.
    pub fn contains(&self, state: StateIndex) -> bool {
        self.0.binary_search(&state).is_ok()
    }

    /// Returns the number of states in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.0.iter().copied()
    }

    /// Returns the members as a sorted slice.
    pub fn as_slice(&self) -> &[StateIndex] {
        &self.0
    }
}

impl FromIterator<StateIndex> for StateSet {
    fn from_iter<T: IntoIterator<Item = StateIndex>>(iter: T) -> Self {
        let mut states: Vec<_> = iter.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        Self(states)
    }
}

impl From<&BitSet> for StateSet {
    fn from(value: &BitSet) -> Self {
        // `BitSet::iter` already yields in ascending order
        Self(value.iter().collect())
    }
}

impl std::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

impl Show for StateSet {
    fn show(&self) -> String {
        format!("{{{}}}", self.iter().map(|q| q.show()).join(", "))
    }
}

/// A partition is a different view on a congruence relation, by grouping elements of
/// type `I` into their respective classes under the relation.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq>(Vec<OrderedSet<I>>);

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = Vec<OrderedSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a OrderedSet<I>;
    type IntoIter = std::slice::Iter<'a, OrderedSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord> Partition<I> {
    /// Returns the size of the partition, i.e. the number of classes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Builds a new partition from an iterator that yields iterators
    /// which yield elements of type `I`.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        Self(
            iter.into_iter()
                .map(|it| it.into_iter().collect::<OrderedSet<_>>())
                .collect(),
        )
    }
}

/// Orders a pair of distinct states such that the smaller one comes first. Returns `None`
/// if both states are the same, as such a pair has no place in a [`PairTable`].
pub fn ordered_pair(p: StateIndex, q: StateIndex) -> Option<(StateIndex, StateIndex)> {
    match p.cmp(&q) {
        std::cmp::Ordering::Less => Some((p, q)),
        std::cmp::Ordering::Greater => Some((q, p)),
        std::cmp::Ordering::Equal => None,
    }
}

/// Stores one bit for every unordered pair of distinct states out of `size` many. The bits
/// live in a flat, upper triangular table, so a pair `(i, j)` with `i < j` is found at
/// position `i * (2 * size - i - 1) / 2 + (j - i - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    size: usize,
    bits: BitSet,
}

impl PairTable {
    /// Creates a table for `size` states in which no pair is marked.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bits: BitSet::with_capacity(size * size.saturating_sub(1) / 2),
        }
    }

    /// Returns the number of states the table was created for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Computes the position of the pair `(i, j)` in the flat table. Returns `None` unless
    /// `i < j < size`.
    pub fn index(&self, i: StateIndex, j: StateIndex) -> Option<usize> {
        if i >= j || j >= self.size {
            return None;
        }
        Some(i * (2 * self.size - i - 1) / 2 + (j - i - 1))
    }

    /// Returns true if the pair of `p` and `q` is marked, the order of the two does not matter.
    /// A state is never marked against itself.
    pub fn is_marked(&self, p: StateIndex, q: StateIndex) -> bool {
        ordered_pair(p, q)
            .and_then(|(i, j)| self.index(i, j))
            .map(|idx| self.bits.contains(idx))
            .unwrap_or(false)
    }

    /// Marks the pair of `p` and `q` and returns true if it was not marked before. Pairs
    /// that do not exist in the table are ignored.
    pub fn mark(&mut self, p: StateIndex, q: StateIndex) -> bool {
        match ordered_pair(p, q).and_then(|(i, j)| self.index(i, j)) {
            Some(idx) => self.bits.insert(idx),
            None => false,
        }
    }

    /// Returns the number of marked pairs.
    pub fn marked(&self) -> usize {
        self.bits.len()
    }
}
