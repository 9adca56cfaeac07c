//! Partition quality metrics.

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Modularity of a node partition of an unweighted undirected graph.
///
/// ```text
/// Q = Σ_c [ e_c/m − (d_c/2m)² ]
/// ```
///
/// where `e_c` is the number of edges inside community `c`, `d_c` the sum
/// of its members' degrees, and `m` the total edge count. Positive values
/// mean more internal edges than a degree-preserving random graph would
/// have; the single-community partition scores exactly zero.
///
/// `labels` holds one community id per node, indexed by node index.
/// Returns 0.0 for an edgeless graph or when `labels` does not cover the
/// node set.
pub fn modularity<N, E>(graph: &UnGraph<N, E>, labels: &[usize]) -> f64 {
    if labels.len() != graph.node_count() {
        return 0.0;
    }
    let m = graph.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let groups = labels.iter().copied().max().map_or(0, |c| c + 1);
    let mut internal = vec![0.0; groups];
    let mut degree = vec![0.0; groups];
    for edge in graph.edge_references() {
        let a = labels[edge.source().index()];
        let b = labels[edge.target().index()];
        degree[a] += 1.0;
        degree[b] += 1.0;
        if a == b {
            internal[a] += 1.0;
        }
    }

    (0..groups)
        .map(|c| internal[c] / m - (degree[c] / (2.0 * m)).powi(2))
        .sum()
}
