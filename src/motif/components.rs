//! Connected-component extraction and ranking for motif graphs.

use super::MotifGraph;
use crate::error::{Error, Result};
use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Extract the `count` largest connected components of a motif graph.
///
/// Components come back in the node-id space of the graph the motif graph
/// was filtered from, ordered by descending size. Size ties break by
/// ascending minimum original node index, so the ranking is fully
/// deterministic for a given motif graph.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `count` is zero, and
/// [`Error::InvalidComponentCount`] if the motif graph has fewer than
/// `count` components; over-requesting fails rather than silently
/// truncating, since a shorter selection would change what gets densified.
pub fn select_components(motif: &MotifGraph, count: usize) -> Result<Vec<Vec<NodeIndex>>> {
    if count == 0 {
        return Err(Error::InvalidParameter {
            name: "component_count",
            message: "must be at least 1",
        });
    }

    let mut components = component_sweep(motif);
    if components.len() < count {
        return Err(Error::InvalidComponentCount {
            requested: count,
            available: components.len(),
        });
    }

    components.sort_by_cached_key(|members| {
        let min_index = members.iter().map(|n| n.index()).min().unwrap_or(usize::MAX);
        (Reverse(members.len()), min_index)
    });
    components.truncate(count);
    Ok(components)
}

/// BFS labelling of every component, visiting start nodes in index order.
fn component_sweep(motif: &MotifGraph) -> Vec<Vec<NodeIndex>> {
    let mut seen = vec![false; motif.node_count()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in motif.node_indices() {
        if seen[start.index()] {
            continue;
        }
        seen[start.index()] = true;
        queue.push_back(start);

        let mut members = Vec::new();
        while let Some(node) = queue.pop_front() {
            members.push(motif[node]);
            for next in motif.neighbors(node) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }
    components
}
