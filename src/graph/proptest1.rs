// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ## Helpers for property testing
//!
//! Strategies that generate arbitrary bipartite graphs, available if the
//! `proptest1` feature is enabled.

use crate::graph::{BipartiteGraph, Side};
use proptest::prelude::*;

/// Returns a strategy generating bipartite graphs with 1 to `max_tops` top
/// vertices labeled from 0, 1 to `max_bottoms` bottom vertices labeled from
/// 10, and an arbitrary subset of the possible edges.
///
/// ## Panics
///
/// Panics if `max_tops` is larger than 10, where the two label ranges would
/// collide.
pub fn bipartite_graph_strategy(
    max_tops: usize,
    max_bottoms: usize,
) -> impl Strategy<Value = BipartiteGraph<u32>> {
    assert!(max_tops <= 10, "top labels would collide with bottom labels");
    (1..=max_tops, 1..=max_bottoms).prop_flat_map(|(tops, bottoms)| {
        proptest::collection::vec(any::<bool>(), tops * bottoms)
            .prop_map(move |picks| build_graph(tops, bottoms, &picks))
    })
}

/// Returns a strategy generating bipartite graphs with the same number of
/// vertices (1 to `max_size`) on both sides, the shape a perfect matching
/// needs.
///
/// ## Panics
///
/// Panics if `max_size` is larger than 10, where the two label ranges would
/// collide.
pub fn balanced_bipartite_graph_strategy(
    max_size: usize,
) -> impl Strategy<Value = BipartiteGraph<u32>> {
    assert!(max_size <= 10, "top labels would collide with bottom labels");
    (1..=max_size).prop_flat_map(|size| {
        proptest::collection::vec(any::<bool>(), size * size)
            .prop_map(move |picks| build_graph(size, size, &picks))
    })
}

fn build_graph(tops: usize, bottoms: usize, picks: &[bool]) -> BipartiteGraph<u32> {
    let mut graph = BipartiteGraph::new();
    for top in 0..tops {
        graph
            .add_vertex(top as u32, Side::Top)
            .expect("fresh top vertex");
    }
    for bottom in 0..bottoms {
        graph
            .add_vertex(10 + bottom as u32, Side::Bottom)
            .expect("fresh bottom vertex");
    }
    for (index, &present) in picks.iter().enumerate() {
        if present {
            let top = (index / bottoms) as u32;
            let bottom = 10 + (index % bottoms) as u32;
            graph
                .add_edge(top, bottom)
                .expect("sides are disjoint by construction");
        }
    }
    graph
}
