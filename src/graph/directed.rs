// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{BipartiteGraph, Matching};
use crate::petgraph_support::cycle::find_cycle;
use crate::petgraph_support::scc::Sccs;
use once_cell::sync::OnceCell;
use petgraph::graphmap::NodeTrait;
use petgraph::prelude::*;

/// The directed matching graph of a bipartite graph and a matching.
///
/// For each edge {t, b} of the underlying graph, this graph carries the arc
/// t -> b when (t, b) is part of the matching and the arc b -> t otherwise. A
/// directed cycle here therefore alternates matched and unmatched edges,
/// which makes it an alternating cycle of the underlying graph; the same
/// goes for directed paths and alternating paths.
///
/// Constructed through [`DirectedMatchGraph::new`], rebuilt rather than
/// mutated as enumeration walks through subgraphs.
#[derive(Clone, Debug)]
pub struct DirectedMatchGraph<N: NodeTrait> {
    graph: DiGraphMap<N, ()>,
    // The strongly connected components, computed on demand.
    sccs: OnceCell<Sccs<N>>,
}

impl<N: NodeTrait> DirectedMatchGraph<N> {
    /// Builds the directed matching graph of `graph` and `matching`.
    ///
    /// Every vertex of `graph` is present, isolated or not. Matching pairs
    /// whose edge is not in `graph` contribute nothing; the arc count
    /// always equals the underlying edge count.
    pub fn new(graph: &BipartiteGraph<N>, matching: &Matching<N>) -> Self {
        let mut directed = DiGraphMap::with_capacity(graph.vertex_count(), graph.edge_count());
        for vertex in graph.vertices() {
            directed.add_node(vertex);
        }
        for (top, bottom) in graph.edges() {
            if matching.mate_of(top) == Some(bottom) {
                directed.add_edge(top, bottom, ());
            } else {
                directed.add_edge(bottom, top, ());
            }
        }
        Self {
            graph: directed,
            sccs: OnceCell::new(),
        }
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.graph.nodes()
    }

    /// Iterates over all arcs as (from, to) pairs.
    pub fn arcs(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.graph.all_edges().map(|(from, to, _)| (from, to))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the arc from -> to is present.
    pub fn contains_arc(&self, from: N, to: N) -> bool {
        self.graph.contains_edge(from, to)
    }

    fn sccs(&self) -> &Sccs<N> {
        self.sccs.get_or_init(|| Sccs::new(&self.graph))
    }

    /// Returns the subgraph keeping exactly the arcs whose endpoints share
    /// a non-trivial strongly connected component.
    ///
    /// An arc that crosses components lies on no directed cycle, so the
    /// edge it stands for lies on no alternating cycle and its matched
    /// status is the same in every matching reachable from here. All
    /// vertices survive; trimming twice yields the same graph as trimming
    /// once.
    pub fn trim(&self) -> Self {
        let sccs = self.sccs();
        let mut trimmed = DiGraphMap::with_capacity(self.vertex_count(), self.arc_count());
        for vertex in self.graph.nodes() {
            trimmed.add_node(vertex);
        }
        for (from, to, _) in self.graph.all_edges() {
            if sccs.is_same_scc(from, to) {
                trimmed.add_edge(from, to, ());
            }
        }
        Self {
            graph: trimmed,
            sccs: OnceCell::new(),
        }
    }

    /// Returns one directed cycle as a vertex list in arc order, or `None`
    /// if the graph is acyclic.
    pub(crate) fn find_cycle(&self) -> Option<Vec<N>> {
        find_cycle(&self.graph)
    }
}
