// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simple cycle extraction for directed graphs.
//!
//! petgraph can say whether a directed graph is cyclic but does not hand
//! the cycle back, which matching enumeration needs.

use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};

/// Returns one simple directed cycle as a vertex list in arc order, or
/// `None` if the graph is acyclic.
///
/// Depth-first search with discovered/finished marking: the first arc back
/// into the active search path closes a cycle, and the cycle is the suffix
/// of the path starting at that arc's target.
pub fn find_cycle<G>(graph: G) -> Option<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
{
    let mut discovered = graph.visit_map();
    let mut finished = graph.visit_map();

    for start in graph.node_identifiers() {
        if discovered.is_visited(&start) {
            continue;
        }
        discovered.visit(start);
        let mut path = vec![start];
        let mut stack = vec![(start, graph.neighbors(start))];
        loop {
            let (node, next) = match stack.last_mut() {
                Some((node, neighbors)) => (*node, neighbors.next()),
                None => break,
            };
            match next {
                Some(succ) if !discovered.is_visited(&succ) => {
                    discovered.visit(succ);
                    path.push(succ);
                    stack.push((succ, graph.neighbors(succ)));
                }
                Some(succ) if !finished.is_visited(&succ) => {
                    // A discovered but unfinished vertex is on the active
                    // path: the cycle runs from it down to `node`.
                    let position = path
                        .iter()
                        .position(|&on_path| on_path == succ)
                        .expect("unfinished discovered vertices are on the active path");
                    return Some(path.split_off(position));
                }
                Some(_) => {
                    // Arc into an exhausted subtree.
                }
                None => {
                    finished.visit(node);
                    path.pop();
                    stack.pop();
                }
            }
        }
    }
    None
}
