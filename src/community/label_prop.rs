//! Label propagation partitioning.
//!
//! O(E) per sweep: each node adopts the most frequent label among its
//! neighbours (Raghavan et al. 2007). Ties go to the smallest label, so a
//! run is reproducible for a fixed seed.

use super::renumber;
use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::prelude::*;
use std::collections::HashMap;

/// Label propagation community detection.
#[derive(Debug, Clone)]
pub struct LabelPropagation {
    /// Maximum sweeps over the node set.
    max_sweeps: usize,
    /// Seed for the sweep order shuffle.
    seed: Option<u64>,
}

impl LabelPropagation {
    /// Create a detector with default settings.
    pub fn new() -> Self {
        Self {
            max_sweeps: 100,
            seed: None,
        }
    }

    /// Set the maximum number of sweeps.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Set the shuffle seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for LabelPropagation {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for LabelPropagation {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let mut labels: Vec<usize> = (0..n).collect();
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        let mut order: Vec<usize> = (0..n).collect();

        for _sweep in 0..self.max_sweeps {
            order.shuffle(&mut rng);
            let mut changed = false;

            for &node in &order {
                let mut counts: HashMap<usize, usize> = HashMap::new();
                for neighbour in graph.neighbors(NodeIndex::new(node)) {
                    *counts.entry(labels[neighbour.index()]).or_insert(0) += 1;
                }
                if counts.is_empty() {
                    continue;
                }

                // Most frequent label, smallest on ties.
                let mut best = labels[node];
                let mut best_count = 0;
                for (&label, &count) in &counts {
                    if count > best_count || (count == best_count && label < best) {
                        best = label;
                        best_count = count;
                    }
                }

                if labels[node] != best {
                    labels[node] = best;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        renumber(&mut labels);
        Ok(labels)
    }
}
