// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use indexmap::IndexMap;
use itertools::Itertools;
use petgraph::graphmap::NodeTrait;

/// A matching of a bipartite graph, stored as top to bottom pairs.
///
/// Every top vertex appears at most once as a key and every bottom vertex
/// at most once as a value. Matchings are immutable once constructed; the
/// enumerators derive sibling matchings by value copy with local edits.
///
/// Two matchings are equal when they contain the same pairs, regardless of
/// the order the pairs were inserted in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matching<N: NodeTrait> {
    pairs: IndexMap<N, N>,
}

impl<N: NodeTrait> Matching<N> {
    pub(crate) fn new(pairs: IndexMap<N, N>) -> Self {
        Self { pairs }
    }

    /// Returns the bottom vertex the given top vertex is matched to, if
    /// any.
    pub fn mate_of(&self, top: N) -> Option<N> {
        self.pairs.get(&top).copied()
    }

    /// Returns true if the given top vertex is matched.
    pub fn contains_top(&self, top: N) -> bool {
        self.pairs.contains_key(&top)
    }

    /// Iterates over the (top, bottom) pairs of this matching.
    pub fn pairs(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.pairs.iter().map(|(&top, &bottom)| (top, bottom))
    }

    /// Returns the pairs sorted by top vertex.
    ///
    /// A canonical form, handy for comparing and collecting matchings
    /// across an enumeration.
    pub fn sorted_pairs(&self) -> Vec<(N, N)> {
        self.pairs().sorted().collect()
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing is matched.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rematches every top vertex on the cycle to the bottom vertex that
    /// precedes it, exchanging matched and unmatched edges along the cycle.
    ///
    /// The cycle must alternate sides and start at a top vertex; the result
    /// has the same cardinality and differs from `self` exactly on the
    /// cycle's edges.
    pub(crate) fn flip_cycle(&self, cycle: &[N]) -> Self {
        let mut pairs = self.pairs.clone();
        for i in (0..cycle.len()).step_by(2) {
            let bottom = if i == 0 {
                cycle[cycle.len() - 1]
            } else {
                cycle[i - 1]
            };
            pairs.insert(cycle[i], bottom);
        }
        Self { pairs }
    }

    /// Hands `from_top`'s partner over to `to_top`, unmatching `from_top`.
    ///
    /// The exchange along an alternating path of length two.
    pub(crate) fn rematch(&self, from_top: N, to_top: N) -> Self {
        let mut pairs = self.pairs.clone();
        if let Some(bottom) = pairs.shift_remove(&from_top) {
            pairs.insert(to_top, bottom);
        }
        Self { pairs }
    }
}
