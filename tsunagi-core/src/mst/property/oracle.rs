//! Independent minimum spanning forest oracle.
//!
//! Runs Prim's algorithm over a dense adjacency matrix so the reference
//! shares no code with the Kruskal implementation under test.

use crate::{Edge, NodeIndexing};

/// Weight and shape of a minimum spanning forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Sum of the forest's edge weights.
    pub total_weight: u64,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest weight with Prim's algorithm.
///
/// Self-loops are ignored and only the cheapest of any parallel edges is kept.
pub(super) fn prim_forest(
    node_count: usize,
    indexing: NodeIndexing,
    edges: &[Edge<u32>],
) -> OracleForest {
    let base = indexing.base();
    let mut cheapest: Vec<Vec<Option<u32>>> = vec![vec![None; node_count]; node_count];
    for edge in edges {
        let (left, right) = (edge.u() - base, edge.v() - base);
        if left == right {
            continue;
        }
        let weight = edge.weight();
        let slot = &mut cheapest[left][right];
        if slot.is_none_or(|current| weight < current) {
            *slot = Some(weight);
            cheapest[right][left] = Some(weight);
        }
    }

    let mut in_forest = vec![false; node_count];
    let mut distance: Vec<Option<u32>> = vec![None; node_count];
    let mut forest = OracleForest {
        total_weight: 0,
        component_count: 0,
    };
    for _ in 0..node_count {
        // Nodes reachable from the current forest are taken before new roots.
        let Some(next) = (0..node_count)
            .filter(|&node| !in_forest[node])
            .min_by_key(|&node| distance[node].map_or((1, 0), |d| (0, d)))
        else {
            break;
        };
        match distance[next] {
            Some(weight) => forest.total_weight += u64::from(weight),
            None => forest.component_count += 1,
        }
        in_forest[next] = true;
        for other in 0..node_count {
            if in_forest[other] {
                continue;
            }
            if let Some(weight) = cheapest[next][other]
                && distance[other].is_none_or(|current| weight < current)
            {
                distance[other] = Some(weight);
            }
        }
    }
    forest
}
