// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::Error;
use crate::graph::{DirectedMatchGraph, Matching, MaximumMatchings, PerfectMatchings, Side};
use indexmap::IndexMap;
use petgraph::graphmap::NodeTrait;
use petgraph::prelude::*;

/// An undirected bipartite graph with side-labeled vertices.
///
/// Vertices are opaque handles of any type implementing
/// [`NodeTrait`](petgraph::graphmap::NodeTrait) (`Copy + Ord + Hash`). Each
/// vertex belongs to exactly one [`Side`], fixed when it is first
/// registered, and every edge joins a top vertex to a bottom vertex.
///
/// The derivation methods [`without_edge`](Self::without_edge) and
/// [`without_endpoints`](Self::without_endpoints) return fresh graphs; the
/// receiver is never mutated, so derived subgraphs can be explored
/// independently.
///
/// Constructed empty via [`new`](Self::new), or through the
/// [`from_edges`](Self::from_edges) and [`complete`](Self::complete)
/// shorthands.
#[derive(Clone, Debug)]
pub struct BipartiteGraph<N: NodeTrait> {
    // Source of truth data.
    graph: UnGraphMap<N, ()>,
    // Insertion-ordered side registry; keys are exactly the vertices of
    // `graph`.
    sides: IndexMap<N, Side>,
}

impl<N: NodeTrait> BipartiteGraph<N> {
    /// Creates a new, empty bipartite graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraphMap::new(),
            sides: IndexMap::new(),
        }
    }

    /// Creates a graph from (top, bottom) edge pairs.
    ///
    /// Endpoints are registered with the side their position implies.
    pub fn from_edges<I>(edges: I) -> Result<Self, Error<N>>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (top, bottom) in edges {
            graph.add_edge(top, bottom)?;
        }
        Ok(graph)
    }

    /// Creates the complete bipartite graph on the given vertex sets: every
    /// top vertex is adjacent to every bottom vertex.
    pub fn complete<T, B>(tops: T, bottoms: B) -> Result<Self, Error<N>>
    where
        T: IntoIterator<Item = N>,
        B: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        let tops: Vec<_> = tops.into_iter().collect();
        let bottoms: Vec<_> = bottoms.into_iter().collect();
        for &top in &tops {
            graph.add_vertex(top, Side::Top)?;
        }
        for &bottom in &bottoms {
            graph.add_vertex(bottom, Side::Bottom)?;
        }
        for &top in &tops {
            for &bottom in &bottoms {
                graph.add_edge(top, bottom)?;
            }
        }
        Ok(graph)
    }

    /// Registers a vertex on the given side.
    ///
    /// Registering a vertex again with the same side is a no-op; with the
    /// opposite side it returns [`Error::SideConflict`].
    pub fn add_vertex(&mut self, vertex: N, side: Side) -> Result<(), Error<N>> {
        match self.sides.get(&vertex) {
            Some(&existing) if existing != side => Err(Error::SideConflict {
                vertex,
                existing,
                requested: side,
            }),
            Some(_) => Ok(()),
            None => {
                self.sides.insert(vertex, side);
                self.graph.add_node(vertex);
                Ok(())
            }
        }
    }

    /// Adds the edge {top, bottom}, registering unknown endpoints with the
    /// side their position implies.
    ///
    /// Adding an existing edge is a no-op. Returns [`Error::SideConflict`]
    /// if a known endpoint sits on the other side.
    pub fn add_edge(&mut self, top: N, bottom: N) -> Result<(), Error<N>> {
        self.add_vertex(top, Side::Top)?;
        self.add_vertex(bottom, Side::Bottom)?;
        self.graph.add_edge(top, bottom, ());
        Ok(())
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.graph.nodes()
    }

    /// Iterates over the top vertices in insertion order.
    pub fn top_vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.sides
            .iter()
            .filter(|(_, &side)| side == Side::Top)
            .map(|(&vertex, _)| vertex)
    }

    /// Iterates over the bottom vertices in insertion order.
    pub fn bottom_vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.sides
            .iter()
            .filter(|(_, &side)| side == Side::Bottom)
            .map(|(&vertex, _)| vertex)
    }

    /// Returns the side the vertex is registered on, or `None` for an
    /// unknown vertex.
    pub fn side(&self, vertex: N) -> Option<Side> {
        self.sides.get(&vertex).copied()
    }

    /// Returns true if the vertex is part of this graph.
    pub fn contains_vertex(&self, vertex: N) -> bool {
        self.graph.contains_node(vertex)
    }

    /// Iterates over the vertices adjacent to the given vertex.
    pub fn neighbors(&self, vertex: N) -> impl Iterator<Item = N> + '_ {
        self.graph.neighbors(vertex)
    }

    /// Returns true if the edge {u, v} is present.
    pub fn has_edge(&self, u: N, v: N) -> bool {
        self.graph.contains_edge(u, v)
    }

    /// Iterates over all edges as (top, bottom) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.graph.all_edges().map(move |(a, b, _)| {
            match self.sides.get(&a) {
                Some(Side::Top) => (a, b),
                _ => (b, a),
            }
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns a copy of this graph with the edge {top, bottom} removed.
    ///
    /// Returns [`Error::EdgeNotFound`] if the edge is absent.
    pub fn without_edge(&self, top: N, bottom: N) -> Result<Self, Error<N>> {
        if !self.graph.contains_edge(top, bottom) {
            return Err(Error::EdgeNotFound { top, bottom });
        }
        let mut derived = self.clone();
        derived.graph.remove_edge(top, bottom);
        Ok(derived)
    }

    /// Returns a copy of this graph with both endpoints removed along with
    /// all their incident edges.
    pub fn without_endpoints(&self, top: N, bottom: N) -> Self {
        let mut derived = self.clone();
        derived.graph.remove_node(top);
        derived.graph.remove_node(bottom);
        derived.sides.shift_remove(&top);
        derived.sides.shift_remove(&bottom);
        derived
    }

    /// Reinterprets a directed matching graph as an undirected bipartite
    /// graph: same vertices, one edge per arc, side labels carried over
    /// from this graph.
    pub(crate) fn from_directed(&self, directed: &DirectedMatchGraph<N>) -> Self {
        let mut graph = UnGraphMap::with_capacity(directed.vertex_count(), directed.arc_count());
        let mut sides = IndexMap::with_capacity(directed.vertex_count());
        for vertex in directed.vertices() {
            let side = self
                .side(vertex)
                .expect("directed matching graph vertices come from this graph");
            sides.insert(vertex, side);
            graph.add_node(vertex);
        }
        for (from, to) in directed.arcs() {
            graph.add_edge(from, to, ());
        }
        Self { graph, sides }
    }

    /// Computes one maximum cardinality matching of this graph, expressed
    /// as top to bottom pairs.
    ///
    /// This is the matching the enumerators start from; any maximum
    /// matching works equally well as a starting point.
    pub fn maximum_matching(&self) -> Matching<N> {
        let matching = petgraph::algo::maximum_matching(&self.graph);
        let mut pairs = IndexMap::new();
        for top in self.top_vertices() {
            if let Some(bottom) = matching.mate(top) {
                pairs.insert(top, bottom);
            }
        }
        Matching::new(pairs)
    }

    /// Returns an iterator over every perfect matching of this graph.
    ///
    /// The iterator is empty when no perfect matching exists (in
    /// particular, whenever the two sides differ in size). Emission order
    /// is unspecified; no matching is produced twice.
    pub fn enum_perfect_matchings(&self) -> PerfectMatchings<N> {
        PerfectMatchings::new(self)
    }

    /// Returns an iterator over every maximum cardinality matching of this
    /// graph.
    ///
    /// The iterator is empty exactly when the graph has no edges. Emission
    /// order is unspecified; no matching is produced twice.
    pub fn enum_maximum_matchings(&self) -> MaximumMatchings<N> {
        MaximumMatchings::new(self)
    }
}

impl<N: NodeTrait> Default for BipartiteGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
