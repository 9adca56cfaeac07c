//! Community detection backends for the clustering pipeline.
//!
//! The pipeline treats its partitioner as a black box behind
//! [`CommunityDetection`]: anything that maps every node of an undirected
//! graph to a community label can consume the augmented graph. Two backends
//! ship with the crate:
//!
//! - [`Louvain`]: greedy modularity optimization (Blondel et al. 2008),
//!   the default. Modularity compares the edges inside each community to
//!   the number a degree-preserving random graph would place there, so the
//!   dense blocks the pipeline injects pull their components together.
//! - [`LabelPropagation`]: O(E) per sweep; nodes adopt the most frequent
//!   label among their neighbours. Approximate but fast, and fully
//!   reproducible when seeded.
//!
//! ## References
//!
//! - Blondel, Guillaume, Lambiotte, Lefebvre (2008). "Fast unfolding of
//!   communities in large networks."
//! - Raghavan, Albert, Kumara (2007). "Near linear time algorithm to detect
//!   community structures in large-scale networks."

mod label_prop;
mod louvain;
mod traits;

pub use label_prop::LabelPropagation;
pub use louvain::Louvain;
pub use traits::CommunityDetection;

/// Renumber arbitrary community labels to `0..k` in first-seen order.
pub(crate) fn renumber(labels: &mut [usize]) -> usize {
    use std::collections::HashMap;

    let mut ids: HashMap<usize, usize> = HashMap::new();
    let mut next = 0;
    for label in labels.iter_mut() {
        let id = *ids.entry(*label).or_insert_with(|| {
            let assigned = next;
            next += 1;
            assigned
        });
        *label = id;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::renumber;

    #[test]
    fn test_renumber_first_seen_order() {
        let mut labels = vec![7, 7, 3, 7, 9, 3];
        let count = renumber(&mut labels);
        assert_eq!(count, 3);
        assert_eq!(labels, vec![0, 0, 1, 0, 2, 1]);
    }

    #[test]
    fn test_renumber_empty() {
        let mut labels: Vec<usize> = Vec::new();
        assert_eq!(renumber(&mut labels), 0);
    }
}
