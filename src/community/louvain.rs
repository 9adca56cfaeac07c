//! Greedy modularity optimization (Louvain).
//!
//! Two alternating phases (Blondel et al. 2008): *local moving*, where each
//! node greedily hops to the neighbouring community with the largest
//! modularity gain, and *aggregation*, where every community collapses into
//! one node of a coarser weighted graph whose self-loops carry the
//! community-internal edge weight. Levels repeat until the modularity gain
//! dries up or the graph stops shrinking.
//!
//! ## References
//!
//! Blondel, Guillaume, Lambiotte, Lefebvre (2008). "Fast unfolding of
//! communities in large networks." J. Stat. Mech. P10008.

use super::renumber;
use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Louvain modularity optimizer.
#[derive(Debug, Clone)]
pub struct Louvain {
    /// Resolution parameter (gamma). Higher values favour smaller
    /// communities.
    resolution: f64,
    /// Maximum local-moving sweeps per level.
    max_sweeps: usize,
    /// Maximum aggregation levels.
    max_levels: usize,
    /// Minimum modularity improvement to start another level.
    min_gain: f64,
}

impl Louvain {
    /// Create an optimizer with default settings.
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            max_sweeps: 100,
            max_levels: 20,
            min_gain: 1e-7,
        }
    }

    /// Set the resolution parameter.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the maximum local-moving sweeps per level.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Set the maximum number of aggregation levels.
    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Local moving: sweep nodes until no move improves modularity.
    ///
    /// Returns the community of each level node. Candidate communities are
    /// evaluated in first-neighbour order with a strict improvement test,
    /// so the outcome is deterministic for a given level.
    fn sweep(&self, level: &Level) -> Vec<usize> {
        let n = level.node_count();
        let m = level.total_weight;
        let degrees: Vec<f64> = (0..n).map(|node| level.degree(node)).collect();

        let mut community: Vec<usize> = (0..n).collect();
        let mut community_degree = degrees.clone();

        for _sweep in 0..self.max_sweeps {
            let mut moved = false;

            for node in 0..n {
                let home = community[node];
                let k = degrees[node];
                community_degree[home] -= k;

                // Edge weight from `node` into each neighbouring community,
                // candidates kept in first-seen order.
                let mut weight_to: HashMap<usize, f64> = HashMap::new();
                let mut candidates: Vec<usize> = Vec::new();
                for &(neighbour, w) in &level.adjacency[node] {
                    let target = community[neighbour];
                    if !weight_to.contains_key(&target) {
                        candidates.push(target);
                    }
                    *weight_to.entry(target).or_insert(0.0) += w;
                }

                // Staying put (possibly alone) has gain zero.
                let mut best = home;
                let mut best_gain = 0.0;
                for &target in &candidates {
                    let k_in = weight_to[&target];
                    let gain = k_in / m
                        - self.resolution * community_degree[target] * k / (2.0 * m * m);
                    if gain > best_gain {
                        best_gain = gain;
                        best = target;
                    }
                }

                community_degree[best] += k;
                if best != home {
                    community[node] = best;
                    moved = true;
                }
            }

            if !moved {
                break;
            }
        }

        community
    }

    /// Modularity of a level partition: for each community, internal weight
    /// over m minus the squared degree fraction.
    fn modularity(&self, level: &Level, community: &[usize]) -> f64 {
        let m = level.total_weight;
        if m == 0.0 {
            return 0.0;
        }

        let groups = community.iter().copied().max().map_or(0, |c| c + 1);
        let mut internal = vec![0.0; groups];
        let mut degree = vec![0.0; groups];
        for node in 0..level.node_count() {
            let c = community[node];
            degree[c] += level.degree(node);
            internal[c] += level.loops[node];
            for &(neighbour, w) in &level.adjacency[node] {
                if neighbour > node && community[neighbour] == c {
                    internal[c] += w;
                }
            }
        }

        (0..groups)
            .map(|c| internal[c] / m - self.resolution * (degree[c] / (2.0 * m)).powi(2))
            .sum()
    }
}

impl Default for Louvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for Louvain {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if graph.edge_count() == 0 {
            return Ok((0..n).collect());
        }

        let mut level = Level::from_graph(graph);
        // membership[i] = community of input node i, in current-level ids.
        let mut membership: Vec<usize> = (0..n).collect();
        let mut best_q = f64::NEG_INFINITY;

        for _pass in 0..self.max_levels {
            let community = self.sweep(&level);
            let q = self.modularity(&level, &community);
            if best_q.is_finite() && q - best_q < self.min_gain {
                break;
            }
            best_q = q;

            let (coarser, compact) = aggregate(&level, &community);
            for slot in membership.iter_mut() {
                *slot = compact[*slot];
            }
            let stalled = coarser.node_count() == level.node_count();
            level = coarser;
            if stalled {
                break;
            }
        }

        let mut labels = membership;
        renumber(&mut labels);
        Ok(labels)
    }
}

/// Weighted graph for one aggregation level.
///
/// Self-loops carry the weight of edges internal to a collapsed community
/// and count twice towards a node's degree.
struct Level {
    adjacency: Vec<Vec<(usize, f64)>>,
    loops: Vec<f64>,
    total_weight: f64,
}

impl Level {
    fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        let n = graph.node_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut loops = vec![0.0; n];
        let mut total_weight = 0.0;

        for edge in graph.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            if a == b {
                loops[a] += 1.0;
            } else {
                adjacency[a].push((b, 1.0));
                adjacency[b].push((a, 1.0));
            }
            total_weight += 1.0;
        }

        Self {
            adjacency,
            loops,
            total_weight,
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn degree(&self, node: usize) -> f64 {
        let adjacent: f64 = self.adjacency[node].iter().map(|&(_, w)| w).sum();
        adjacent + 2.0 * self.loops[node]
    }
}

/// Collapse each community into one coarser node.
///
/// Returns the coarser level and the mapping from level node id to coarser
/// node id (communities numbered in first-seen order).
fn aggregate(level: &Level, community: &[usize]) -> (Level, Vec<usize>) {
    let mut compact = community.to_vec();
    let groups = renumber(&mut compact);

    let mut loops = vec![0.0; groups];
    let mut pair_weight: HashMap<(usize, usize), f64> = HashMap::new();
    for node in 0..level.node_count() {
        let a = compact[node];
        loops[a] += level.loops[node];
        for &(neighbour, w) in &level.adjacency[node] {
            if neighbour <= node {
                continue;
            }
            let b = compact[neighbour];
            if a == b {
                loops[a] += w;
            } else {
                let key = if a < b { (a, b) } else { (b, a) };
                *pair_weight.entry(key).or_insert(0.0) += w;
            }
        }
    }

    let mut adjacency = vec![Vec::new(); groups];
    for (&(a, b), &w) in &pair_weight {
        adjacency[a].push((b, w));
        adjacency[b].push((a, w));
    }

    (
        Level {
            adjacency,
            loops,
            total_weight: level.total_weight,
        },
        compact,
    )
}
