//! Neighbourhood overlap scoring.

use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashSet;

/// Number of common neighbours shared by two nodes.
///
/// Neighbour lists are treated as sets, so parallel edges never inflate the
/// score. The score is symmetric in `a` and `b` and cannot exceed the
/// smaller of the two degrees.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either index is absent from `graph`.
pub fn overlap<N, E>(graph: &UnGraph<N, E>, a: NodeIndex, b: NodeIndex) -> Result<usize> {
    for node in [a, b] {
        if graph.node_weight(node).is_none() {
            return Err(Error::NodeNotFound {
                index: node.index(),
            });
        }
    }

    let neighbours_a: HashSet<NodeIndex> = graph.neighbors(a).collect();
    let neighbours_b: HashSet<NodeIndex> = graph.neighbors(b).collect();
    Ok(neighbours_a.intersection(&neighbours_b).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Path 0-1-2-3-4 with chords 0-2 and 1-3.
    fn chordal_path() -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 2), (1, 3)] {
            let _ = graph.add_edge(nodes[a], nodes[b], ());
        }
        graph
    }

    #[test]
    fn test_overlap_counts_common_neighbours() {
        let graph = chordal_path();
        // 1 and 2 share both 0 and 3.
        let score = overlap(&graph, NodeIndex::new(1), NodeIndex::new(2)).unwrap();
        assert_eq!(score, 2);
        // 3 and 4 share nothing.
        let score = overlap(&graph, NodeIndex::new(3), NodeIndex::new(4)).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let graph = chordal_path();
        for a in graph.node_indices() {
            for b in graph.node_indices() {
                assert_eq!(
                    overlap(&graph, a, b).unwrap(),
                    overlap(&graph, b, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_overlap_bounded_by_min_degree() {
        let graph = chordal_path();
        for a in graph.node_indices() {
            for b in graph.node_indices() {
                let bound = graph
                    .neighbors(a)
                    .count()
                    .min(graph.neighbors(b).count());
                assert!(overlap(&graph, a, b).unwrap() <= bound);
            }
        }
    }

    #[test]
    fn test_overlap_collapses_parallel_edges() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let _ = graph.add_edge(a, c, ());
        let _ = graph.add_edge(a, c, ());
        let _ = graph.add_edge(b, c, ());

        assert_eq!(overlap(&graph, a, b).unwrap(), 1);
    }

    #[test]
    fn test_overlap_missing_node() {
        let graph = chordal_path();
        let result = overlap(&graph, NodeIndex::new(0), NodeIndex::new(17));
        assert_eq!(result, Err(Error::NodeNotFound { index: 17 }));
    }
}
