//! Information gain
//!
//! Entropy based scoring of candidate split attributes.
use crate::constants::{GAIN_EPSILON, INVALID_GAIN, N_CLASSES, N_VALUES};
use crate::data::Datapoint;
use crate::node::Node;

/// Given a probability `p`, calculate `-p * log2(p)`, with `0` at `p = 0`.
#[inline]
pub fn entropy_term(p: f64) -> f64 {
    if p <= 0.0 {
        0.0
    } else {
        -p * p.log2()
    }
}

/// Entropy in bits of a class count vector. An empty vector has entropy 0.
#[inline]
pub fn entropy(counts: &[usize; N_CLASSES]) -> f64 {
    let total = counts.iter().sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts.iter().map(|c| entropy_term(*c as f64 / total)).sum()
}

/// Calculate the information gain of splitting `node` on attribute `param`.
///
/// Returns `-1.0` if `param` is not in `remaining_params`, otherwise the
/// entropy of the node minus the size weighted entropies of the three
/// attribute-value subgroups. Empty subgroups contribute nothing.
/// The subgroup terms are summed smallest first, so relabelling the values
/// of an attribute gives a bit-identical gain.
///
/// * `dataset` - The dataset store.
/// * `node` - Node waiting to be split.
/// * `param` - Candidate attribute.
/// * `remaining_params` - Attributes still available at this node.
///
/// # Panics
///
/// Panics if `node.r` is outside `dataset`, or if `param` is in
/// `remaining_params` but not an attribute of the examples.
pub fn information_gain(dataset: &[Datapoint], node: &Node, param: usize, remaining_params: &[usize]) -> f64 {
    if !remaining_params.contains(&param) {
        return INVALID_GAIN;
    }

    let mut node_counts = [0usize; N_CLASSES];
    let mut value_counts = [[0usize; N_CLASSES]; N_VALUES];
    for e in &dataset[node.l..=node.r] {
        let c = e.classification as usize;
        node_counts[c] += 1;
        value_counts[e.value(param) as usize][c] += 1;
    }

    let total = node.size() as f64;
    let mut terms = [0.0; N_VALUES];
    for (term, counts) in terms.iter_mut().zip(value_counts.iter()) {
        let size = counts.iter().sum::<usize>();
        if size > 0 {
            *term = (size as f64 / total) * entropy(counts);
        }
    }
    terms.sort_by(f64::total_cmp);
    let conditional = terms.iter().sum::<f64>();

    entropy(&node_counts) - conditional
}

/// Pick the attribute with the largest information gain at `node`.
///
/// Ties go to the attribute that comes first in `remaining_params`. A later
/// attribute only wins if its gain is larger by more than `GAIN_EPSILON`.
/// Returns `None` when `remaining_params` is empty.
pub fn best_param(dataset: &[Datapoint], node: &Node, remaining_params: &[usize]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for &param in remaining_params {
        let g = information_gain(dataset, node, param, remaining_params);
        match best {
            Some((_, best_gain)) if g <= best_gain + GAIN_EPSILON => {}
            _ => best = Some((param, g)),
        }
    }
    best
}
