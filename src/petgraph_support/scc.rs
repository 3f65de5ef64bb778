// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use petgraph::algo::kosaraju_scc;
use petgraph::graphmap::NodeTrait;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers, Visitable};
use std::collections::HashMap;

/// The strongly connected components of a directed graph, keyed by node
/// value.
#[derive(Clone, Debug)]
pub(crate) struct Sccs<N: NodeTrait> {
    sccs: Vec<Vec<N>>,
    multi_map: HashMap<N, usize>,
}

impl<N: NodeTrait> Sccs<N> {
    /// Creates a new instance from the provided graph.
    pub fn new<G>(graph: G) -> Self
    where
        G: IntoNeighborsDirected<NodeId = N> + Visitable + IntoNodeIdentifiers,
    {
        // Use kosaraju_scc since it is iterative (tarjan_scc is recursive)
        // and the graphs handed in here have unbounded depth.
        let sccs = kosaraju_scc(graph);
        let mut multi_map = HashMap::new();
        for (idx, scc) in sccs.iter().enumerate() {
            if scc.len() > 1 {
                multi_map.extend(scc.iter().map(|&node| (node, idx)));
            }
        }
        Self { sccs, multi_map }
    }

    /// Returns true if `a` and `b` are in the same scc.
    pub fn is_same_scc(&self, a: N, b: N) -> bool {
        if a == b {
            return true;
        }
        match (self.multi_map.get(&a), self.multi_map.get(&b)) {
            (Some(a_scc), Some(b_scc)) => a_scc == b_scc,
            _ => false,
        }
    }

    /// Returns all the SCCs in this graph.
    pub fn sccs(&self) -> &[Vec<N>] {
        &self.sccs
    }

    /// Returns all the SCCs with more than one element.
    pub fn multi_sccs(&self) -> impl Iterator<Item = &[N]> {
        self.sccs.iter().filter_map(|scc| {
            if scc.len() > 1 {
                Some(scc.as_slice())
            } else {
                None
            }
        })
    }
}
