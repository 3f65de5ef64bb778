// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bipartite graphs, matchings, and matching enumeration.
//!
//! The main entry point is [`BipartiteGraph`](struct.BipartiteGraph.html).
//! See its documentation for more details.

mod bipartite;
mod directed;
mod enumerate;
mod matching;
#[cfg(feature = "proptest1")]
mod proptest1;

pub use bipartite::BipartiteGraph;
pub use directed::DirectedMatchGraph;
pub use enumerate::{MaximumMatchings, PerfectMatchings};
pub use matching::Matching;
#[cfg(feature = "proptest1")]
pub use proptest1::*;

/// The side of a bipartite graph a vertex belongs to.
///
/// Every vertex carries an immutable side label, and every edge joins a
/// `Top` vertex to a `Bottom` vertex. Matchings are expressed as top to
/// bottom mappings.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "proptest1", derive(proptest_derive::Arbitrary))]
pub enum Side {
    /// The top part of the graph.
    Top,
    /// The bottom part of the graph.
    Bottom,
}

impl Side {
    /// Returns the opposite side to this one.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}
