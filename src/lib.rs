//! ID3 decision trees over ternary-valued attributes and a 3-class label space.
//!
//! A [`DTree`] takes ownership of a [`Dataset`], grows a tree by repeatedly
//! splitting on the attribute with the highest information gain, and then
//! classifies new [`Datapoint`]s by walking that tree.

mod constants;

// Modules
pub mod curve;
pub mod data;
pub mod errors;
pub mod evaluator;
pub mod gain;
pub mod metric;
pub mod node;
pub mod partition;
pub mod reader;
pub mod sampler;
pub mod tree;

// Individual classes, and functions
pub use data::{Datapoint, Dataset};
pub use errors::Id3Error;
pub use node::Node;
pub use reader::{parse_dataset, read_dataset};
pub use tree::DTree;
