use crate::constants::N_VALUES;
use crate::errors::Id3Error;
use std::fmt::{self, Debug};

/// A node of the decision tree.
///
/// The node covers the inclusive index range `[l, r]` of the dataset store.
/// It is either a leaf (`classification` set) or an internal node
/// (`splitting_param` set, at least one child present).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub l: usize,
    pub r: usize,
    pub depth: usize,
    pub splitting_param: Option<usize>,
    pub classification: Option<u8>,
    /// Child subtrees indexed by attribute value. An empty slot means no
    /// training example took that branch.
    pub children: [Option<Box<Node>>; N_VALUES],
}

impl Node {
    /// Create an undecided node for the range `[l, r]`.
    pub fn new(l: usize, r: usize, depth: usize) -> Result<Self, Id3Error> {
        if l > r {
            return Err(Id3Error::EmptyRange(l, r));
        }
        Ok(Node {
            l,
            r,
            depth,
            splitting_param: None,
            classification: None,
            children: [None, None, None],
        })
    }

    /// Number of examples routed to this node.
    pub fn size(&self) -> usize {
        self.r - self.l + 1
    }

    /// Turn the node into a leaf predicting `classification`.
    pub fn make_leaf(&mut self, classification: u8) {
        self.classification = Some(classification);
        self.splitting_param = None;
    }

    /// Turn the node into an internal node splitting on `param`.
    pub fn make_parent_node(&mut self, param: usize, children: [Option<Box<Node>>; N_VALUES]) {
        self.splitting_param = Some(param);
        self.classification = None;
        self.children = children;
    }

    pub fn is_leaf(&self) -> bool {
        self.classification.is_some()
    }

    /// Get the child that should be traveled down, given an attribute value.
    pub fn get_child(&self, value: u8) -> Option<&Node> {
        self.children.get(value as usize).and_then(|c| c.as_deref())
    }

    /// Iterate over the present children along with the attribute value leading to each.
    pub fn iter_children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(v, c)| c.as_deref().map(|n| (v, n)))
    }

    /// Number of nodes in this subtree, this node included.
    pub fn count_nodes(&self) -> usize {
        1 + self.iter_children().map(|(_, c)| c.count_nodes()).sum::<usize>()
    }

    /// Number of leaves in this subtree.
    pub fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.iter_children().map(|(_, c)| c.count_leaves()).sum()
        }
    }

    /// Depth of the deepest node in this subtree.
    pub fn max_depth(&self) -> usize {
        self.iter_children()
            .map(|(_, c)| c.max_depth())
            .max()
            .unwrap_or(self.depth)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.classification, self.splitting_param) {
            (Some(c), _) => write!(f, "[{}..={}]:leaf={}", self.l, self.r, c),
            (None, Some(p)) => write!(f, "[{}..={}]:split={}", self.l, self.r, p),
            (None, None) => write!(f, "[{}..={}]:undecided", self.l, self.r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_empty_range() {
        assert_eq!(Node::new(4, 3, 0), Err(Id3Error::EmptyRange(4, 3)));
        assert_eq!(Node::new(3, 3, 0).unwrap().size(), 1);
    }

    #[test]
    fn test_node_counts() {
        let mut root = Node::new(0, 3, 0).unwrap();
        let mut left = Node::new(0, 1, 1).unwrap();
        left.make_leaf(0);
        let mut right = Node::new(2, 3, 1).unwrap();
        right.make_leaf(1);
        root.make_parent_node(5, [Some(Box::new(left)), None, Some(Box::new(right))]);

        assert!(!root.is_leaf());
        assert_eq!(root.count_nodes(), 3);
        assert_eq!(root.count_leaves(), 2);
        assert_eq!(root.max_depth(), 1);
        assert!(root.get_child(1).is_none());
        assert_eq!(root.get_child(2).unwrap().classification, Some(1));
        assert_eq!(root.iter_children().map(|(v, _)| v).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(root.to_string(), "[0..=3]:split=5");
    }
}
