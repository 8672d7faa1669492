//! Errors
//!
//! Custom error types used throughout the `ternary_id3` crate.
use thiserror::Error;

/// Errors that can occur while loading data, building or querying a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// Malformed dataset or datapoint.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A node or partition was requested for an empty index range.
    #[error("Empty range requested: left bound {0} is past right bound {1}.")]
    EmptyRange(usize, usize),
    /// Classification was requested before the tree was built.
    #[error("The decision tree has not been built yet.")]
    UninitializedTree,
    /// Unable to read data or configuration.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to write a report.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected {2}.")]
    ParseString(String, String, String),
}
