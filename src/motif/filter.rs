//! Motif edge filtering.
//!
//! Keeps the edges of a graph whose endpoints share at least `cutoff`
//! common neighbours and materializes the survivors as a new graph.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Graph of motif edges.
///
/// Each node's weight is the index of the node it mirrors in the graph the
/// motif graph was filtered from.
pub type MotifGraph = UnGraph<NodeIndex, ()>;

/// Filter `graph` down to its motif edges.
///
/// Every edge is visited exactly once, in insertion order, and scored by
/// the same exact neighbour-set intersection [`overlap`](super::overlap)
/// reports; edges scoring at least `cutoff` survive. The motif graph's node
/// set is exactly the endpoints of surviving edges, so nodes whose every
/// incident edge was filtered out are absent rather than isolated. A
/// `cutoff` of zero reproduces the edge-induced subgraph of `graph`.
///
/// Neighbour sets are collected once up front; the scoring loop is the
/// dominant cost of the whole pipeline at O(E · average degree). With the
/// `parallel` feature the loop fans out over rayon; scoring is independent
/// per edge, so the retained edge set does not depend on scoring order.
pub fn motif_graph<N, E>(graph: &UnGraph<N, E>, cutoff: usize) -> MotifGraph {
    let pairs: Vec<(NodeIndex, NodeIndex)> = graph
        .edge_references()
        .map(|edge| (edge.source(), edge.target()))
        .collect();

    let neighbourhoods: Vec<HashSet<NodeIndex>> = graph
        .node_indices()
        .map(|node| graph.neighbors(node).collect())
        .collect();
    let common = |&(u, v): &(NodeIndex, NodeIndex)| -> usize {
        neighbourhoods[u.index()]
            .intersection(&neighbourhoods[v.index()])
            .count()
    };

    #[cfg(feature = "parallel")]
    let scores: Vec<usize> = pairs.par_iter().map(common).collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<usize> = pairs.iter().map(common).collect();

    let mut motif = MotifGraph::new_undirected();
    let mut mirrors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    for (&(u, v), &score) in pairs.iter().zip(&scores) {
        if score < cutoff {
            continue;
        }
        let mu = *mirrors.entry(u).or_insert_with(|| motif.add_node(u));
        let mv = *mirrors.entry(v).or_insert_with(|| motif.add_node(v));
        let _ = motif.add_edge(mu, mv, ());
    }
    motif
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::overlap;

    fn chordal_path() -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 2), (1, 3)] {
            let _ = graph.add_edge(nodes[a], nodes[b], ());
        }
        graph
    }

    #[test]
    fn test_motif_edges_are_subset_of_input() {
        let graph = chordal_path();
        for cutoff in 0..4 {
            let motif = motif_graph(&graph, cutoff);
            for edge in motif.edge_references() {
                let u = motif[edge.source()];
                let v = motif[edge.target()];
                assert!(graph.contains_edge(u, v));
            }
        }
    }

    #[test]
    fn test_cutoff_zero_keeps_every_edge() {
        let graph = chordal_path();
        let motif = motif_graph(&graph, 0);
        assert_eq!(motif.edge_count(), graph.edge_count());
        assert_eq!(motif.node_count(), graph.node_count());
    }

    #[test]
    fn test_raising_cutoff_never_adds_edges() {
        let graph = chordal_path();
        let mut previous = usize::MAX;
        for cutoff in 0..5 {
            let retained = motif_graph(&graph, cutoff).edge_count();
            assert!(retained <= previous);
            previous = retained;
        }
    }

    #[test]
    fn test_retention_matches_overlap_scores() {
        let graph = chordal_path();
        let cutoff = 1;
        let motif = motif_graph(&graph, cutoff);
        let retained = motif.edge_count();

        let expected = graph
            .edge_references()
            .filter(|e| overlap(&graph, e.source(), e.target()).unwrap() >= cutoff)
            .count();
        assert_eq!(retained, expected);
    }

    #[test]
    fn test_filtered_out_nodes_are_absent() {
        let graph = chordal_path();
        // Only 1-2 shares two common neighbours; everything else drops.
        let motif = motif_graph(&graph, 2);
        assert_eq!(motif.edge_count(), 1);
        assert_eq!(motif.node_count(), 2);

        let members: Vec<usize> = motif.node_indices().map(|n| motif[n].index()).collect();
        assert!(members.contains(&1));
        assert!(members.contains(&2));
    }

    #[test]
    fn test_construction_is_deterministic() {
        let graph = chordal_path();
        let first = motif_graph(&graph, 1);
        let second = motif_graph(&graph, 1);

        let edges = |m: &MotifGraph| -> Vec<(usize, usize)> {
            m.edge_references()
                .map(|e| (m[e.source()].index(), m[e.target()].index()))
                .collect()
        };
        assert_eq!(edges(&first), edges(&second));
    }
}
