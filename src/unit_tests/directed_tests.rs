// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{BipartiteGraph, DirectedMatchGraph, Side};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn arc_set(directed: &DirectedMatchGraph<u32>) -> HashSet<(u32, u32)> {
    directed.arcs().collect()
}

#[test]
fn builder_preserves_vertices_and_edges() {
    let graph =
        BipartiteGraph::from_edges([(0, 10), (0, 11), (1, 10), (2, 12)]).expect("valid edges");
    let matching = graph.maximum_matching();
    let directed = DirectedMatchGraph::new(&graph, &matching);

    assert_eq!(directed.vertex_count(), graph.vertex_count());
    assert_eq!(directed.arc_count(), graph.edge_count());
    let graph_vertices: HashSet<_> = graph.vertices().collect();
    let directed_vertices: HashSet<_> = directed.vertices().collect();
    assert_eq!(directed_vertices, graph_vertices);
}

#[test]
fn matched_edges_point_from_top_to_bottom() {
    let graph = BipartiteGraph::from_edges([(0, 10), (0, 11), (1, 11)]).expect("valid edges");
    let matching = graph.maximum_matching();
    let directed = DirectedMatchGraph::new(&graph, &matching);

    for (top, bottom) in graph.edges() {
        if matching.mate_of(top) == Some(bottom) {
            assert!(directed.contains_arc(top, bottom));
            assert!(!directed.contains_arc(bottom, top));
        } else {
            assert!(directed.contains_arc(bottom, top));
            assert!(!directed.contains_arc(top, bottom));
        }
    }
}

#[test]
fn isolated_vertices_survive_the_builder() {
    let mut graph = BipartiteGraph::from_edges([(0, 10)]).expect("valid edges");
    graph.add_vertex(1, Side::Top).expect("fresh vertex");
    let directed = DirectedMatchGraph::new(&graph, &graph.maximum_matching());
    assert_eq!(directed.vertex_count(), 3);
    assert_eq!(directed.arc_count(), 1);
}

#[test]
fn trim_keeps_only_alternating_cycles() {
    // K(2, 2) with one edge missing has no alternating cycle at all.
    let graph = BipartiteGraph::from_edges([(0, 10), (0, 11), (1, 11)]).expect("valid edges");
    let matching = graph.maximum_matching();
    let trimmed = DirectedMatchGraph::new(&graph, &matching).trim();
    assert_eq!(trimmed.arc_count(), 0);
    assert_eq!(trimmed.vertex_count(), graph.vertex_count());

    // The full K(2, 2) is a single alternating cycle; nothing to drop.
    let complete = BipartiteGraph::complete(0..2, 10..12).expect("disjoint labels");
    let matching = complete.maximum_matching();
    let directed = DirectedMatchGraph::new(&complete, &matching);
    let trimmed = directed.trim();
    assert_eq!(arc_set(&trimmed), arc_set(&directed));
}

#[test]
fn trim_is_idempotent() {
    let graph =
        BipartiteGraph::from_edges([(0, 10), (0, 11), (1, 10), (1, 11), (2, 11), (2, 12)])
            .expect("valid edges");
    let matching = graph.maximum_matching();
    let once = DirectedMatchGraph::new(&graph, &matching).trim();
    let twice = once.trim();
    assert_eq!(arc_set(&twice), arc_set(&once));
    assert_eq!(twice.vertex_count(), once.vertex_count());
}
