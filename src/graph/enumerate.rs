// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy enumeration of perfect and maximum matchings.
//!
//! Both iterators drive the branch-and-recurse scheme of Takeaki Uno's
//! "Algorithms for Enumerating All Perfect, Maximum and Maximal Matchings
//! in Bipartite Graphs" (ISAAC '97) with an explicit frame stack. Every
//! frame either terminates or emits exactly one new matching and leaves
//! behind two smaller frames: one where a chosen edge is forced into all
//! further matchings (both endpoints removed), one where it is forbidden
//! (the edge removed). The two branches are disjoint and together cover
//! everything, which is what makes the enumeration duplicate-free.

use crate::graph::{BipartiteGraph, DirectedMatchGraph, Matching, Side};
use petgraph::graphmap::NodeTrait;

/// Iterator over every perfect matching of a bipartite graph.
///
/// Created by
/// [`BipartiteGraph::enum_perfect_matchings`](crate::BipartiteGraph::enum_perfect_matchings).
/// Matchings are produced lazily; each call to `next` performs a bounded
/// amount of work up to the next matching. Emission order is unspecified,
/// and no matching is produced twice.
#[derive(Clone, Debug)]
pub struct PerfectMatchings<N: NodeTrait> {
    seed: Option<Matching<N>>,
    stack: Vec<PerfectFrame<N>>,
}

#[derive(Clone, Debug)]
struct PerfectFrame<N: NodeTrait> {
    graph: BipartiteGraph<N>,
    matching: Matching<N>,
}

impl<N: NodeTrait> PerfectMatchings<N> {
    pub(crate) fn new(graph: &BipartiteGraph<N>) -> Self {
        let empty = Self {
            seed: None,
            stack: Vec::new(),
        };
        let top_count = graph.top_vertices().count();
        if top_count != graph.bottom_vertices().count() {
            return empty;
        }
        let matching = graph.maximum_matching();
        if matching.is_empty() || matching.len() < top_count {
            // No perfect matching exists. The empty graph lands here too.
            return empty;
        }
        let frame = trimmed_frame(graph, matching.clone());
        Self {
            seed: Some(matching),
            stack: vec![frame],
        }
    }
}

impl<N: NodeTrait + std::fmt::Debug> Iterator for PerfectMatchings<N> {
    type Item = Matching<N>;

    fn next(&mut self) -> Option<Matching<N>> {
        if let Some(matching) = self.seed.take() {
            return Some(matching);
        }
        while let Some(frame) = self.stack.pop() {
            if frame.graph.edge_count() == 0 {
                continue;
            }
            let directed = DirectedMatchGraph::new(&frame.graph, &frame.matching);
            let cycle = match directed.find_cycle() {
                Some(raw) => start_cycle_at_top(&frame.graph, raw),
                None => continue,
            };
            // Branch on the cycle's first edge, which the current matching
            // contains.
            let (top, bottom) = (cycle[0], cycle[1]);
            let flipped = frame.matching.flip_cycle(&cycle);

            // Forbid the edge: continue from the flipped matching, which
            // avoids it.
            let graph_minus = frame
                .graph
                .without_edge(top, bottom)
                .expect("the cycle's first edge is present in the current subgraph");
            self.stack
                .push(trimmed_frame(&graph_minus, flipped.clone()));

            // Force the edge: both endpoints leave the graph while their
            // pair stays in the matching, completing every matching found
            // below.
            let graph_plus = frame.graph.without_endpoints(top, bottom);
            self.stack
                .push(trimmed_frame(&graph_plus, frame.matching));

            return Some(flipped);
        }
        None
    }
}

/// Builds a recursion frame: the directed matching graph of `graph` and
/// `matching` is trimmed to its alternating cycles and reinterpreted as an
/// undirected graph again.
fn trimmed_frame<N: NodeTrait>(graph: &BipartiteGraph<N>, matching: Matching<N>) -> PerfectFrame<N> {
    let trimmed = DirectedMatchGraph::new(graph, &matching).trim();
    PerfectFrame {
        graph: graph.from_directed(&trimmed),
        matching,
    }
}

/// Iterator over every maximum cardinality matching of a bipartite graph.
///
/// Created by
/// [`BipartiteGraph::enum_maximum_matchings`](crate::BipartiteGraph::enum_maximum_matchings).
/// Matchings are produced lazily; each call to `next` performs a bounded
/// amount of work up to the next matching. Emission order is unspecified,
/// and no matching is produced twice.
#[derive(Clone, Debug)]
pub struct MaximumMatchings<N: NodeTrait> {
    seed: Option<Matching<N>>,
    stack: Vec<MaximumFrame<N>>,
}

#[derive(Clone, Debug)]
struct MaximumFrame<N: NodeTrait> {
    graph: BipartiteGraph<N>,
    matching: Matching<N>,
    directed: DirectedMatchGraph<N>,
}

impl<N: NodeTrait> MaximumMatchings<N> {
    pub(crate) fn new(graph: &BipartiteGraph<N>) -> Self {
        let matching = graph.maximum_matching();
        if matching.is_empty() {
            return Self {
                seed: None,
                stack: Vec::new(),
            };
        }
        let directed = DirectedMatchGraph::new(graph, &matching).trim();
        let frame = MaximumFrame {
            graph: graph.clone(),
            matching: matching.clone(),
            directed,
        };
        Self {
            seed: Some(matching),
            stack: vec![frame],
        }
    }
}

impl<N: NodeTrait + std::fmt::Debug> Iterator for MaximumMatchings<N> {
    type Item = Matching<N>;

    fn next(&mut self) -> Option<Matching<N>> {
        if let Some(matching) = self.seed.take() {
            return Some(matching);
        }
        while let Some(frame) = self.stack.pop() {
            if frame.graph.edge_count() == 0 {
                continue;
            }
            if let Some(raw) = frame.directed.find_cycle() {
                let cycle = start_cycle_at_top(&frame.graph, raw);
                let (top, bottom) = (cycle[0], cycle[1]);
                let flipped = frame.matching.flip_cycle(&cycle);

                let graph_minus = frame
                    .graph
                    .without_edge(top, bottom)
                    .expect("the cycle's first edge is present in the current subgraph");
                let directed_minus = DirectedMatchGraph::new(&graph_minus, &flipped);
                self.stack.push(MaximumFrame {
                    graph: graph_minus,
                    matching: flipped.clone(),
                    directed: directed_minus,
                });

                let graph_plus = frame.graph.without_endpoints(top, bottom);
                let directed_plus = DirectedMatchGraph::new(&graph_plus, &frame.matching);
                self.stack.push(MaximumFrame {
                    graph: graph_plus,
                    matching: frame.matching,
                    directed: directed_plus,
                });

                return Some(flipped);
            }

            // No alternating cycle left: any further maximum matching
            // differs by an alternating path, and a shortest one has
            // length two.
            let (matched_top, bottom, free_top) =
                match find_two_edge_path(&frame.graph, &frame.matching) {
                    Some(path) => path,
                    None => continue,
                };
            let rerouted = frame.matching.rematch(matched_top, free_top);

            // Branch on the path's unmatched edge, which the rerouted
            // matching contains.
            let graph_minus = frame
                .graph
                .without_edge(free_top, bottom)
                .expect("the path's closing edge is present in the current subgraph");
            let directed_minus = DirectedMatchGraph::new(&graph_minus, &frame.matching);
            self.stack.push(MaximumFrame {
                graph: graph_minus,
                matching: frame.matching,
                directed: directed_minus,
            });

            let graph_plus = frame.graph.without_endpoints(free_top, bottom);
            let directed_plus = DirectedMatchGraph::new(&graph_plus, &rerouted);
            self.stack.push(MaximumFrame {
                graph: graph_plus,
                matching: rerouted.clone(),
                directed: directed_plus,
            });

            return Some(rerouted);
        }
        None
    }
}

/// Rotates a raw cycle so it starts at a top vertex.
///
/// Cycles of the directed matching graph alternate sides, so rotating by
/// one suffices. Afterwards even positions hold top vertices, odd positions
/// bottom vertices, and the arc from position 0 to position 1 stands for a
/// matched edge.
fn start_cycle_at_top<N: NodeTrait>(graph: &BipartiteGraph<N>, mut cycle: Vec<N>) -> Vec<N> {
    if graph.side(cycle[0]) != Some(Side::Top) {
        let last = cycle.pop().expect("cycles are non-empty");
        cycle.insert(0, last);
    }
    cycle
}

/// Finds a directed path t1 -> b -> t2 where t1 is matched to b and t2 is an
/// unmatched top vertex adjacent to b.
///
/// Pairs whose endpoints were settled by earlier endpoint removals are
/// skipped; they no longer take part in the subgraph at hand.
fn find_two_edge_path<N: NodeTrait>(
    graph: &BipartiteGraph<N>,
    matching: &Matching<N>,
) -> Option<(N, N, N)> {
    matching.pairs().find_map(|(matched_top, bottom)| {
        if !graph.contains_vertex(matched_top) || !graph.contains_vertex(bottom) {
            return None;
        }
        graph
            .neighbors(bottom)
            .find(|&candidate| !matching.contains_top(candidate))
            .map(|free_top| (matched_top, bottom, free_top))
    })
}
