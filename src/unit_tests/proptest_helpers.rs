// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{
    balanced_bipartite_graph_strategy, bipartite_graph_strategy, BipartiteGraph,
    DirectedMatchGraph, Matching,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Checks the universal enumeration properties: pairs come from the graph,
/// no vertex is matched twice, all matchings share one cardinality, and no
/// matching shows up twice.
fn check_enumeration<I>(graph: &BipartiteGraph<u32>, matchings: I) -> Result<(), TestCaseError>
where
    I: Iterator<Item = Matching<u32>>,
{
    let mut seen = HashSet::new();
    let mut size = None;
    for matching in matchings {
        for (top, bottom) in matching.pairs() {
            prop_assert!(
                graph.has_edge(top, bottom),
                "pair ({}, {}) is not an edge",
                top,
                bottom
            );
        }
        let bottoms: HashSet<_> = matching.pairs().map(|(_, bottom)| bottom).collect();
        prop_assert_eq!(bottoms.len(), matching.len(), "a bottom vertex is reused");

        let len = matching.len();
        prop_assert_eq!(*size.get_or_insert(len), len, "matching sizes differ");

        prop_assert!(
            seen.insert(matching.sorted_pairs()),
            "duplicate matching emitted"
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn maximum_matchings_are_valid(graph in bipartite_graph_strategy(4, 5)) {
        check_enumeration(&graph, graph.enum_maximum_matchings())?;
    }

    #[test]
    fn perfect_matchings_are_valid(graph in balanced_bipartite_graph_strategy(4)) {
        check_enumeration(&graph, graph.enum_perfect_matchings())?;
        let tops = graph.top_vertices().count();
        for matching in graph.enum_perfect_matchings() {
            prop_assert_eq!(matching.len(), tops, "perfect matchings cover every top vertex");
        }
    }

    #[test]
    fn perfect_matchings_agree_with_maximum_matchings(
        graph in balanced_bipartite_graph_strategy(4),
    ) {
        let perfect: HashSet<_> = graph
            .enum_perfect_matchings()
            .map(|matching| matching.sorted_pairs())
            .collect();
        if !perfect.is_empty() {
            let maximum: HashSet<_> = graph
                .enum_maximum_matchings()
                .map(|matching| matching.sorted_pairs())
                .collect();
            prop_assert_eq!(perfect, maximum);
        }
    }

    #[test]
    fn directed_builder_preserves_vertices_and_edges(graph in bipartite_graph_strategy(4, 5)) {
        let matching = graph.maximum_matching();
        let directed = DirectedMatchGraph::new(&graph, &matching);
        prop_assert_eq!(directed.vertex_count(), graph.vertex_count());
        prop_assert_eq!(directed.arc_count(), graph.edge_count());
        let graph_vertices: HashSet<_> = graph.vertices().collect();
        let directed_vertices: HashSet<_> = directed.vertices().collect();
        prop_assert_eq!(directed_vertices, graph_vertices);
    }

    #[test]
    fn trim_is_idempotent(graph in bipartite_graph_strategy(4, 5)) {
        let matching = graph.maximum_matching();
        let once = DirectedMatchGraph::new(&graph, &matching).trim();
        let twice = once.trim();
        let once_arcs: HashSet<_> = once.arcs().collect();
        let twice_arcs: HashSet<_> = twice.arcs().collect();
        prop_assert_eq!(twice_arcs, once_arcs);
        prop_assert_eq!(twice.vertex_count(), once.vertex_count());
    }
}
