//! Block densification and disjoint graph union.
//!
//! Each selected motif component becomes a "block": the complete graph over
//! the component's nodes. All blocks merge with the input graph through a
//! disjoint union whose node spaces stay distinguishable.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Node of an augmented graph, tagged with the side of the union it came
/// from.
///
/// Both sides refer to input-graph indices, so the tag is what keeps the
/// two identifier spaces from colliding in the union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AugmentedNode {
    /// Node carried over from the input graph.
    Original(NodeIndex),
    /// Copy of an input node introduced by a dense block.
    Block(NodeIndex),
}

/// Disjoint union of an input graph with the complete-graph blocks of its
/// selected motif components.
pub type AugmentedGraph = UnGraph<AugmentedNode, ()>;

/// Merge `graph` with one complete block per node set in `blocks`.
///
/// The input graph's nodes land first, in index order, so augmented index
/// `i` mirrors input index `i`; every input edge is carried over. Block
/// nodes follow, one fresh [`AugmentedNode::Block`] copy per distinct node
/// appearing in any block, and each block contributes every unordered pair
/// of its members exactly once. Self-pairs are never generated, so the
/// union cannot gain self-loops.
///
/// The blowup is deliberate: a block over `n` nodes adds `n·(n-1)/2` edges,
/// which is the densification the downstream partitioner is meant to see.
pub fn densify<N, E>(graph: &UnGraph<N, E>, blocks: &[Vec<NodeIndex>]) -> AugmentedGraph {
    let mut augmented = AugmentedGraph::new_undirected();

    let originals: Vec<NodeIndex> = graph
        .node_indices()
        .map(|node| augmented.add_node(AugmentedNode::Original(node)))
        .collect();
    for edge in graph.edge_references() {
        let _ = augmented.add_edge(
            originals[edge.source().index()],
            originals[edge.target().index()],
            (),
        );
    }

    let mut copies: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    for members in blocks {
        for &node in members {
            copies
                .entry(node)
                .or_insert_with(|| augmented.add_node(AugmentedNode::Block(node)));
        }
    }
    for members in blocks {
        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                let _ = augmented.add_edge(copies[&a], copies[&b], ());
            }
        }
    }

    augmented
}
