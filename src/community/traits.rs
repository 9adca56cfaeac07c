//! Partitioner interface.

use crate::error::Result;
use petgraph::graph::UnGraph;

/// Community detection backend.
///
/// Implementations assign every node of an undirected graph to exactly one
/// community. The returned vector holds one label per node, indexed by node
/// index, renumbered to the consecutive range `0..k`.
pub trait CommunityDetection {
    /// Partition `graph` into communities.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;
}
