//! # edmot
//!
//! Motif-aware graph clustering via edge enhancement.
//!
//! Modularity-style community detection treats all edges alike, so regions
//! that are dense in small motifs but sparsely wired to the outside are
//! easily split apart. EdMot ([Li et al. 2019](https://dl.acm.org/doi/10.1145/3292500.3330882))
//! strengthens those regions before partitioning:
//!
//! 1. keep only edges whose endpoints share at least `cutoff` common
//!    neighbours (the *motif graph*),
//! 2. rank the motif graph's connected components by size and keep the
//!    largest `component_count` of them,
//! 3. inject a complete "block" per kept component and merge the blocks
//!    with the input graph via disjoint union.
//!
//! The augmented graph then goes to an ordinary community detection
//! backend, which sees the dense regions as unambiguous clusters.
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use edmot::EdMot;
//!
//! // Two triangles joined by a bridge.
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! for (a, b) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
//!     graph.add_edge(nodes[a], nodes[b], ());
//! }
//!
//! let partition = EdMot::new(2, 1).fit(&graph).unwrap();
//! // Every node of the augmented graph gets exactly one community.
//! assert_eq!(partition.len(), 12);
//! ```
//!
//! The partitioner is pluggable: anything implementing
//! [`CommunityDetection`] can consume the augmented graph, and the
//! individual stages ([`motif_graph`], [`select_components`], [`densify`])
//! are exposed for callers who want the transform without the clustering.
//!
//! ## References
//!
//! - Li, Huang, Wang, Lai (2019). "EdMot: An Edge Enhancement Approach for
//!   Motif-aware Community Detection." KDD 2019.
//! - Blondel et al. (2008). "Fast unfolding of communities in large
//!   networks."

pub mod community;
pub mod error;
pub mod metrics;
pub mod motif;
pub mod pipeline;

pub use community::{CommunityDetection, LabelPropagation, Louvain};
pub use error::{Error, Result};
pub use metrics::modularity;
pub use motif::{densify, motif_graph, overlap, select_components};
pub use motif::{AugmentedGraph, AugmentedNode, MotifGraph};
pub use pipeline::{EdMot, Partition};
