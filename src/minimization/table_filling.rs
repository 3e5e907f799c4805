use bit_set::BitSet;
use tracing::{debug, trace};

use crate::{
    automaton::{FiniteAutomaton, StateIndex, DFA},
    math::{OrderedSet, PairTable, Partition},
};

/// Marks every pair of states that can be told apart by some word. A pair is distinguishable
/// right away if exactly one of the two states is accepting, afterwards full passes over all
/// unmarked pairs are made until no pair changes. A pair becomes marked once some symbol leads
/// it to a marked pair. There are at most as many passes as there are states.
pub(crate) fn distinguishable_pairs(dfa: &DFA) -> PairTable {
    let n = dfa.size();
    let k = dfa.alphabet_size();
    let delta = dfa.delta();
    let mut table = PairTable::new(n);

    for i in 0..n {
        for j in (i + 1)..n {
            if dfa.is_accepting(i) != dfa.is_accepting(j) {
                table.mark(i, j);
            }
        }
    }

    let mut pass = 0;
    loop {
        pass += 1;
        let mut changed = false;
        for i in 0..n {
            for j in (i + 1)..n {
                if table.is_marked(i, j) {
                    continue;
                }
                if (0..k).any(|symbol| table.is_marked(delta[i * k + symbol], delta[j * k + symbol]))
                {
                    table.mark(i, j);
                    changed = true;
                }
            }
        }
        trace!("refinement pass {pass} leaves {} pairs marked", table.marked());
        if !changed {
            break;
        }
    }
    table
}

/// Groups the states of `dfa` into classes of pairwise indistinguishable states. Classes are
/// ordered by their smallest member.
pub(crate) fn equivalence_classes(dfa: &DFA, table: &PairTable) -> Partition<StateIndex> {
    let n = dfa.size();
    let mut assigned = BitSet::with_capacity(n);
    let mut classes = Vec::new();

    for i in 0..n {
        if assigned.contains(i) {
            continue;
        }
        // indistinguishability is an equivalence once the table is saturated, so every member
        // of the class of `i` is unmarked against `i` itself
        let class: Vec<_> = (i..n)
            .filter(|&j| !assigned.contains(j) && !table.is_marked(i, j))
            .collect();
        assigned.extend(class.iter().copied());
        classes.push(class);
    }
    Partition::new(classes)
}

/// Computes the minimal DFA for the language of `dfa`.
pub(crate) fn table_filling(dfa: &DFA) -> DFA {
    let trimmed = dfa.trim();
    let k = trimmed.alphabet_size();
    let table = distinguishable_pairs(&trimmed);
    let partition = equivalence_classes(&trimmed, &table);

    let mut class_of = vec![0; trimmed.size()];
    for (idx, class) in partition.iter().enumerate() {
        for &state in class {
            class_of[state] = idx;
        }
    }

    let mut delta = Vec::with_capacity(partition.size() * k);
    let mut accepting = OrderedSet::new();
    for (idx, class) in partition.iter().enumerate() {
        // all members agree on acceptance and on the class of every successor
        let Some(&representative) = class.first() else {
            continue;
        };
        if trimmed.is_accepting(representative) {
            accepting.insert(idx);
        }
        delta.extend(
            trimmed.delta()[representative * k..(representative + 1) * k]
                .iter()
                .map(|&target| class_of[target]),
        );
    }

    let minimized = DFA::from_parts(k, delta, accepting, class_of[trimmed.initial()]).trim();
    debug!(
        "minimized DFA with {} states ({} reachable) to {} states",
        dfa.size(),
        trimmed.size(),
        minimized.size()
    );
    minimized
}
