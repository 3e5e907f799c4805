pub(crate) mod table_filling;

use crate::automaton::DFA;

impl DFA {
    /// Returns the unique minimal DFA that accepts the same language as `self`. Unreachable
    /// states are dropped first, the remaining states are then merged into classes of
    /// indistinguishable states using the table-filling algorithm.
    ///
    /// States of the result are numbered in breadth-first order from the initial state, which
    /// is `0`. Minimizing a minimal DFA thus yields exactly the same table again.
    pub fn minimize(&self) -> DFA {
        table_filling::table_filling(self)
    }
}

/// Minimizes `dfa`, see [`DFA::minimize`].
pub fn minimize(dfa: &DFA) -> DFA {
    dfa.minimize()
}
