//! Tree
//!
//! The decision tree: it owns the dataset store, grows the tree by recursive
//! ID3 splitting, and classifies new examples.
use crate::data::{validate_examples, Datapoint, Dataset};
use crate::errors::Id3Error;
use crate::evaluator::{classify_node, global_majority};
use crate::gain::best_param;
use crate::node::Node;
use crate::partition::ternary_partition;
use log::{debug, info};
use rayon::prelude::*;
use std::fmt::{self, Display};
use std::sync::OnceLock;

/// ID3 decision tree over ternary attributes.
///
/// Build it once with [`DTree::build_tree`], then classify with
/// [`DTree::classify`]. Rebuilding needs a fresh instance.
#[derive(Debug)]
pub struct DTree {
    /// Attribute names, one per column.
    param_names: Vec<String>,
    /// The dataset store. Reordered in place while the tree is built.
    dataset: Vec<Datapoint>,
    root: Option<Node>,
    /// Majority class over the whole dataset, computed on first use.
    global_majority: OnceLock<u8>,
    /// Emit a debug line for every node built.
    log_nodes: bool,
    n_nodes: usize,
    n_leaves: usize,
    depth: usize,
}

impl DTree {
    /// Create an unbuilt tree that takes ownership of the dataset.
    /// The examples are checked again when the tree is built.
    pub fn new(dataset: Dataset) -> Self {
        DTree {
            param_names: dataset.param_names,
            dataset: dataset.examples,
            root: None,
            global_majority: OnceLock::new(),
            log_nodes: false,
            n_nodes: 0,
            n_leaves: 0,
            depth: 0,
        }
    }

    /// Set whether every constructed node is logged at debug level.
    /// * `log_nodes` - Log each node while building.
    pub fn set_log_nodes(mut self, log_nodes: bool) -> Self {
        self.log_nodes = log_nodes;
        self
    }

    /// Build the tree over the whole dataset and return its root.
    ///
    /// Calling this again after a successful build returns the existing root.
    pub fn build_tree(&mut self) -> Result<&Node, Id3Error> {
        if self.root.is_none() {
            validate_examples(&self.dataset, self.param_names.len())?;
            let remaining_params: Vec<usize> = (0..self.param_names.len()).collect();
            let root = self.build(0, self.dataset.len() - 1, &remaining_params, 0)?;

            self.n_nodes = root.count_nodes();
            self.n_leaves = root.count_leaves();
            self.depth = root.max_depth();
            info!(
                "Finished building a tree over {} examples: {} nodes, {} leaves, depth {}.",
                self.dataset.len(),
                self.n_nodes,
                self.n_leaves,
                self.depth
            );
            self.root = Some(root);
        }
        self.root.as_ref().ok_or(Id3Error::UninitializedTree)
    }

    /// Grow the subtree for the range `[l, r]`.
    fn build(&mut self, l: usize, r: usize, remaining_params: &[usize], depth: usize) -> Result<Node, Id3Error> {
        let mut node = Node::new(l, r, depth)?;

        if let Some(c) = classify_node(&self.dataset, &node, remaining_params) {
            node.make_leaf(c);
            if self.log_nodes {
                debug!("{}{}", "  ".repeat(depth), node);
            }
            return Ok(node);
        }

        // `classify_node` only declines when attributes remain, so there is a candidate.
        let (param, gain) = best_param(&self.dataset, &node, remaining_params).ok_or_else(|| {
            Id3Error::InvalidInput(format!("no attribute left to split range [{}, {}]", l, r))
        })?;
        debug!(
            "Splitting [{}, {}] on attribute {} ({}) with gain {:.4}.",
            l, r, param, self.param_names[param], gain
        );

        let (b2, b3) = ternary_partition(&mut self.dataset, l, r, param)?;
        let child_params: Vec<usize> = remaining_params.iter().copied().filter(|p| *p != param).collect();

        let mut children: [Option<Box<Node>>; 3] = [None, None, None];
        let bounds = [(l, b2), (b2, b3), (b3, r + 1)];
        for (slot, (lo, stop)) in children.iter_mut().zip(bounds) {
            if lo < stop {
                *slot = Some(Box::new(self.build(lo, stop - 1, &child_params, depth + 1)?));
            }
        }
        node.make_parent_node(param, children);
        if self.log_nodes {
            debug!("{}{}", "  ".repeat(depth), node);
        }
        Ok(node)
    }

    /// Classify an example by walking the tree from the root.
    ///
    /// If the example reaches a branch that no training example took, the
    /// majority class of the whole dataset is returned.
    pub fn classify(&self, datapoint: &Datapoint) -> Result<u8, Id3Error> {
        let root = self.root.as_ref().ok_or(Id3Error::UninitializedTree)?;
        datapoint.validate(self.param_names.len())?;

        let mut node = root;
        loop {
            if let Some(c) = node.classification {
                return Ok(c);
            }
            let param = node.splitting_param.ok_or(Id3Error::UninitializedTree)?;
            let value = datapoint.value(param);
            match node.get_child(value) {
                Some(child) => node = child,
                None => {
                    debug!(
                        "No training example had {} = {} at [{}, {}], using the global majority.",
                        self.param_names[param], value, node.l, node.r
                    );
                    return Ok(self.global_majority());
                }
            }
        }
    }

    /// Classify a batch of examples.
    ///
    /// * `datapoints` - Examples to classify.
    /// * `parallel` - Classify in parallel.
    pub fn classify_all(&self, datapoints: &[Datapoint], parallel: bool) -> Result<Vec<u8>, Id3Error> {
        if parallel {
            // Fill the memo before the threads share it.
            self.global_majority();
            datapoints.par_iter().map(|d| self.classify(d)).collect()
        } else {
            datapoints.iter().map(|d| self.classify(d)).collect()
        }
    }

    /// Majority class over the entire dataset, computed once.
    pub fn global_majority(&self) -> u8 {
        *self.global_majority.get_or_init(|| global_majority(&self.dataset))
    }

    /// Root of the built tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The dataset store, in its current (possibly permuted) order.
    pub fn dataset(&self) -> &[Datapoint] {
        &self.dataset
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn param_count(&self) -> usize {
        self.param_names.len()
    }

    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Display for DTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let root = match &self.root {
            Some(root) => root,
            None => return writeln!(f, "<unbuilt tree>"),
        };
        let mut print_buffer: Vec<(Option<usize>, &Node)> = vec![(None, root)];
        let mut r = String::new();
        while let Some((value, node)) = print_buffer.pop() {
            let indent = "      ".repeat(node.depth);
            let branch = match value {
                Some(v) => format!("={} ", v),
                None => String::new(),
            };
            match (node.classification, node.splitting_param) {
                (Some(c), _) => {
                    r += format!("{}{}[{}, {}] class {}\n", indent, branch, node.l, node.r, c).as_str();
                }
                (None, Some(p)) => {
                    r += format!("{}{}[{}, {}] split on {}\n", indent, branch, node.l, node.r, self.param_names[p])
                        .as_str();
                    for (v, child) in node.iter_children().collect::<Vec<_>>().into_iter().rev() {
                        print_buffer.push((Some(v), child));
                    }
                }
                (None, None) => {
                    r += format!("{}{}[{}, {}] undecided\n", indent, branch, node.l, node.r).as_str();
                }
            }
        }
        write!(f, "{}", r)
    }
}
