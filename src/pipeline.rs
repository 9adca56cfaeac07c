//! Edge-motif clustering driver.
//!
//! Wires the three augmentation stages together and hands the result to a
//! [`CommunityDetection`] backend.
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use edmot::EdMot;
//!
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! let c = graph.add_node(());
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//! graph.add_edge(a, c, ());
//!
//! let partition = EdMot::new(1, 1).fit(&graph).unwrap();
//! // Three original nodes plus one dense copy of the triangle.
//! assert_eq!(partition.len(), 6);
//! ```

use crate::community::{CommunityDetection, Louvain};
use crate::error::Result;
use crate::motif::{densify, motif_graph, select_components, AugmentedGraph, AugmentedNode};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Edge-motif clustering driver.
///
/// Holds configuration only; the graph is borrowed per call and no stage
/// mutates it, so repeated [`fit`](EdMot::fit) calls always start from the
/// caller's input rather than an already-densified graph.
#[derive(Debug, Clone)]
pub struct EdMot<P = Louvain> {
    /// Number of motif components to densify.
    component_count: usize,
    /// Minimum neighbourhood overlap for an edge to survive filtering.
    cutoff: usize,
    /// Community detection backend for the augmented graph.
    partitioner: P,
}

impl EdMot<Louvain> {
    /// Create a driver that keeps the `component_count` largest motif
    /// components and drops edges with fewer than `cutoff` common
    /// neighbours, partitioning with default-configured [`Louvain`].
    pub fn new(component_count: usize, cutoff: usize) -> Self {
        Self {
            component_count,
            cutoff,
            partitioner: Louvain::new(),
        }
    }
}

impl<P> EdMot<P> {
    /// Swap in a different community detection backend.
    pub fn with_partitioner<Q: CommunityDetection>(self, partitioner: Q) -> EdMot<Q> {
        EdMot {
            component_count: self.component_count,
            cutoff: self.cutoff,
            partitioner,
        }
    }
}

impl<P: CommunityDetection> EdMot<P> {
    /// Run the three-stage transform: filter, select, densify.
    ///
    /// Returns the augmented graph without partitioning it. Useful for
    /// inspecting what the partitioner will see.
    ///
    /// # Errors
    ///
    /// Propagates the component selector's configuration errors:
    /// requesting zero components, or more components than the motif graph
    /// contains.
    pub fn augment<N, E>(&self, graph: &UnGraph<N, E>) -> Result<AugmentedGraph> {
        let motif = motif_graph(graph, self.cutoff);
        let blocks = select_components(&motif, self.component_count)?;
        Ok(densify(graph, &blocks))
    }

    /// Cluster `graph`.
    ///
    /// Augments the graph, then delegates to the partitioner and returns
    /// its assignment verbatim. Any stage failure aborts the call; there
    /// are no retries and no partial results.
    pub fn fit<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Partition> {
        let augmented = self.augment(graph)?;
        let labels = self.partitioner.detect(&augmented)?;
        Ok(Partition::from_labels(&augmented, labels))
    }
}

/// Final node → community assignment over an augmented graph.
///
/// Covers every node of the union (the input graph's nodes and the block
/// copies introduced by densification) exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    assignments: Vec<(AugmentedNode, usize)>,
}

impl Partition {
    fn from_labels(augmented: &AugmentedGraph, labels: Vec<usize>) -> Self {
        let assignments = augmented
            .node_indices()
            .map(|node| (augmented[node], labels[node.index()]))
            .collect();
        Self { assignments }
    }

    /// Community of one augmented node, if the node is in the mapping.
    pub fn community_of(&self, node: AugmentedNode) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(candidate, _)| *candidate == node)
            .map(|&(_, community)| community)
    }

    /// Every node paired with its community, each node exactly once.
    pub fn iter(&self) -> impl Iterator<Item = (AugmentedNode, usize)> + '_ {
        self.assignments.iter().copied()
    }

    /// Number of nodes in the mapping.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of distinct communities.
    pub fn community_count(&self) -> usize {
        let mut ids: Vec<usize> = self.assignments.iter().map(|&(_, c)| c).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Restriction of the mapping to the input graph's own nodes.
    pub fn original_communities(&self) -> HashMap<NodeIndex, usize> {
        self.assignments
            .iter()
            .filter_map(|&(node, community)| match node {
                AugmentedNode::Original(index) => Some((index, community)),
                AugmentedNode::Block(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::LabelPropagation;
    use crate::error::Error;
    use petgraph::visit::EdgeRef;
    use std::collections::HashSet;

    // Path 0-1-2-3-4 with chords 0-2 and 1-3. With cutoff 1 the motif
    // graph keeps everything except 3-4, leaving one component {0,1,2,3}.
    fn chordal_path() -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 2), (1, 3)] {
            let _ = graph.add_edge(nodes[a], nodes[b], ());
        }
        graph
    }

    fn edge_set(graph: &AugmentedGraph) -> HashSet<(AugmentedNode, AugmentedNode)> {
        graph
            .edge_references()
            .map(|e| {
                let a = graph[e.source()];
                let b = graph[e.target()];
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect()
    }

    #[test]
    fn test_augment_unions_block_with_input() {
        let graph = chordal_path();
        let augmented = EdMot::new(1, 1).augment(&graph).unwrap();

        // 5 originals + 4 block copies; 6 input edges + C(4,2) block edges.
        assert_eq!(augmented.node_count(), 9);
        assert_eq!(augmented.edge_count(), 6 + 6);
    }

    #[test]
    fn test_fit_assigns_every_node_exactly_once() {
        let graph = chordal_path();
        let partition = EdMot::new(1, 1).fit(&graph).unwrap();

        assert_eq!(partition.len(), 9);
        let nodes: HashSet<AugmentedNode> = partition.iter().map(|(node, _)| node).collect();
        assert_eq!(nodes.len(), 9);
        for node in graph.node_indices() {
            assert!(partition
                .community_of(AugmentedNode::Original(node))
                .is_some());
        }
    }

    #[test]
    fn test_repeated_fit_starts_from_the_input() {
        let graph = chordal_path();
        let driver = EdMot::new(1, 1);

        let first = driver.augment(&graph).unwrap();
        let second = driver.augment(&graph).unwrap();
        assert_eq!(first.node_count(), second.node_count());
        assert_eq!(edge_set(&first), edge_set(&second));
    }

    #[test]
    fn test_over_request_surfaces_configuration_error() {
        let graph = chordal_path();
        let result = EdMot::new(2, 1).fit(&graph);
        assert_eq!(
            result,
            Err(Error::InvalidComponentCount {
                requested: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_zero_component_count_is_rejected() {
        let graph = chordal_path();
        assert!(matches!(
            EdMot::new(0, 1).fit(&graph),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_partitioner_swap() {
        let graph = chordal_path();
        let partition = EdMot::new(1, 1)
            .with_partitioner(LabelPropagation::new().with_seed(42))
            .fit(&graph)
            .unwrap();

        assert_eq!(partition.len(), 9);
        assert!(partition.community_count() >= 1);
    }

    #[test]
    fn test_original_communities_cover_input_nodes() {
        let graph = chordal_path();
        let partition = EdMot::new(1, 1).fit(&graph).unwrap();

        let originals = partition.original_communities();
        assert_eq!(originals.len(), graph.node_count());
        for node in graph.node_indices() {
            assert!(originals.contains_key(&node));
        }
    }

    #[test]
    fn test_cutoff_zero_densifies_whole_graph() {
        let graph = chordal_path();
        let augmented = EdMot::new(1, 0).augment(&graph).unwrap();

        // Every edge survives, one component of all 5 nodes, C(5,2) block.
        assert_eq!(augmented.node_count(), 10);
        assert_eq!(augmented.edge_count(), 6 + 10);
    }
}
