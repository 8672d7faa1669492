//! Evaluator
//!
//! Decides whether a node is a leaf, and computes majority classes with the
//! fixed preference order `0 > 1 > 2` on equal counts.
use crate::constants::N_CLASSES;
use crate::data::Datapoint;
use crate::node::Node;

/// Count the class labels of the given examples.
#[inline]
pub fn class_counts(examples: &[Datapoint]) -> [usize; N_CLASSES] {
    let mut counts = [0; N_CLASSES];
    for e in examples {
        counts[e.classification as usize] += 1;
    }
    counts
}

/// Majority class of a count vector.
///
/// Class 0 wins whenever its count is at least the other two, otherwise
/// class 1 wins whenever its count is at least class 2's.
#[inline]
pub fn majority_class(counts: &[usize; N_CLASSES]) -> u8 {
    if counts[0] >= counts[1] && counts[0] >= counts[2] {
        0
    } else if counts[1] >= counts[2] {
        1
    } else {
        2
    }
}

/// Classify a node if it is a leaf.
///
/// Returns the class label when no attributes remain (majority vote over the
/// node's range) or when every example in the range has the same class.
/// Returns `None` when the node should be split further.
///
/// * `dataset` - The dataset store.
/// * `node` - The node whose range `[l, r]` is inspected.
/// * `remaining_params` - Attributes not yet used on the path to this node.
///
/// # Panics
///
/// Panics if `node.r` is outside `dataset`.
pub fn classify_node(dataset: &[Datapoint], node: &Node, remaining_params: &[usize]) -> Option<u8> {
    let examples = &dataset[node.l..=node.r];
    if remaining_params.is_empty() {
        return Some(majority_class(&class_counts(examples)));
    }
    let dominate_class = examples[0].classification;
    if examples[1..].iter().all(|e| e.classification == dominate_class) {
        Some(dominate_class)
    } else {
        None
    }
}

/// Majority class over the whole dataset, with the same tie-break as leaves.
pub fn global_majority(dataset: &[Datapoint]) -> u8 {
    majority_class(&class_counts(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(labels: &[u8]) -> Vec<Datapoint> {
        labels.iter().map(|c| Datapoint::new(vec![0], *c)).collect()
    }

    #[test]
    fn test_majority_tie_break() {
        assert_eq!(majority_class(&[2, 2, 0]), 0);
        assert_eq!(majority_class(&[2, 0, 2]), 0);
        assert_eq!(majority_class(&[2, 2, 2]), 0);
        assert_eq!(majority_class(&[0, 2, 2]), 1);
        assert_eq!(majority_class(&[1, 2, 2]), 1);
        assert_eq!(majority_class(&[1, 1, 2]), 2);
        assert_eq!(majority_class(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_exhausted_leaf_tie() {
        let dataset = labeled(&[1, 0, 1, 0]);
        let node = Node::new(0, 3, 0).unwrap();
        assert_eq!(classify_node(&dataset, &node, &[]), Some(0));
    }

    #[test]
    fn test_pure_leaf() {
        let dataset = labeled(&[0, 2, 2, 2, 1]);
        let node = Node::new(1, 3, 0).unwrap();
        assert_eq!(classify_node(&dataset, &node, &[0]), Some(2));
        let node = Node::new(1, 4, 0).unwrap();
        assert_eq!(classify_node(&dataset, &node, &[0]), None);
        // With no attributes left, the majority is used instead.
        assert_eq!(classify_node(&dataset, &node, &[]), Some(2));
        let node = Node::new(4, 4, 0).unwrap();
        assert_eq!(classify_node(&dataset, &node, &[0]), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_classify_node_range_past_end_panics() {
        let dataset = labeled(&[0, 1]);
        let node = Node::new(1, 2, 0).unwrap();
        classify_node(&dataset, &node, &[0]);
    }

    #[test]
    fn test_global_majority() {
        assert_eq!(global_majority(&labeled(&[2, 1, 2, 1])), 1);
        assert_eq!(global_majority(&labeled(&[2, 2, 0])), 2);
        assert_eq!(class_counts(&labeled(&[2, 2, 0])), [1, 0, 2]);
    }
}
