// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Enumerate all perfect and maximum matchings in bipartite graphs.
//!
//! `bimatch` implements the algorithms of Takeaki Uno ("Algorithms for
//! Enumerating All Perfect, Maximum and Maximal Matchings in Bipartite
//! Graphs", ISAAC '97), which produce every matching exactly once with
//! polynomial delay between successive outputs. Graphs are built up from
//! side-labeled vertices, and the enumerators are lazy: each call to `next`
//! performs a bounded amount of work, so a consumer can stop early without
//! paying for the matchings it never asked for.
//!
//! # Optional features
//!
//! * `proptest1`: Support for [property-based
//!   testing](https://altsysrq.github.io/proptest-book/intro.html) using the
//!   [`proptest`](https://docs.rs/proptest/1) framework, including strategies
//!   that generate arbitrary bipartite graphs.
//!
//! # Examples
//!
//! Enumerate the perfect matchings of the complete bipartite graph K(2, 2):
//!
//! ```
//! use bimatch::BipartiteGraph;
//!
//! // Top vertices 0 and 1, bottom vertices 10 and 11, all four edges.
//! let graph = BipartiteGraph::complete(0..2, 10..12)?;
//!
//! let matchings: Vec<_> = graph.enum_perfect_matchings().collect();
//! assert_eq!(matchings.len(), 2);
//! for matching in &matchings {
//!     // Every perfect matching covers both top vertices.
//!     assert_eq!(matching.len(), 2);
//! }
//! # Ok::<(), bimatch::Error<i32>>(())
//! ```

#![warn(missing_docs)]

pub mod errors;
pub mod graph;
pub(crate) mod petgraph_support;
#[cfg(test)]
mod unit_tests;

pub use errors::Error;
pub use graph::{
    BipartiteGraph, DirectedMatchGraph, Matching, MaximumMatchings, PerfectMatchings, Side,
};
