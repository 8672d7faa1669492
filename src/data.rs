//! Data
//!
//! Labeled examples over ternary attributes, and the dataset store that owns them.
use crate::constants::{CLASS_COLUMN, N_CLASSES, N_VALUES, PRINT_WIDTH};
use crate::errors::Id3Error;
use std::fmt::{self, Display};

/// A single labeled example.
///
/// Every attribute value and the class label lie in `{0, 1, 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Datapoint {
    /// Attribute values, one per attribute column.
    pub params: Vec<u8>,
    /// Class label.
    pub classification: u8,
}

impl Datapoint {
    /// Create a new datapoint.
    ///
    /// * `params` - The attribute values.
    /// * `classification` - The class label.
    pub fn new(params: Vec<u8>, classification: u8) -> Self {
        Datapoint { params, classification }
    }

    /// Value of the attribute at index `param`.
    ///
    /// # Panics
    ///
    /// Panics if `param` is not below the attribute count. Use
    /// [`Datapoint::validate`] first on untrusted input.
    #[inline]
    pub fn value(&self, param: usize) -> u8 {
        self.params[param]
    }

    /// Check the example against the expected attribute count.
    ///
    /// Values outside `{0, 1, 2}` and length mismatches are rejected, never coerced.
    pub fn validate(&self, param_count: usize) -> Result<(), Id3Error> {
        if self.params.len() != param_count {
            return Err(Id3Error::InvalidInput(format!(
                "expected {} attribute values, found {}",
                param_count,
                self.params.len()
            )));
        }
        if let Some((i, v)) = self.params.iter().enumerate().find(|(_, v)| **v as usize >= N_VALUES) {
            return Err(Id3Error::InvalidInput(format!(
                "attribute {} has value {}, expected one of 0, 1, 2",
                i, v
            )));
        }
        if self.classification as usize >= N_CLASSES {
            return Err(Id3Error::InvalidInput(format!(
                "class label {} is outside 0, 1, 2",
                self.classification
            )));
        }
        Ok(())
    }
}

/// The attribute names together with the labeled examples.
///
/// This is what a data loader hands over to [`DTree`](crate::tree::DTree).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// One name per attribute column.
    pub param_names: Vec<String>,
    /// The labeled examples, in load order.
    pub examples: Vec<Datapoint>,
}

impl Dataset {
    /// Create a validated dataset.
    ///
    /// * `param_names` - Attribute names, `param_count` entries.
    /// * `examples` - Labeled examples; must be non-empty and each must
    ///   carry exactly `param_count` values in `{0, 1, 2}`.
    pub fn new(param_names: Vec<String>, examples: Vec<Datapoint>) -> Result<Self, Id3Error> {
        validate_examples(&examples, param_names.len())?;
        Ok(Dataset { param_names, examples })
    }

    /// Number of attribute columns.
    pub fn param_count(&self) -> usize {
        self.param_names.len()
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

/// Check that there is at least one example and that every example is well formed.
pub fn validate_examples(examples: &[Datapoint], param_count: usize) -> Result<(), Id3Error> {
    if examples.is_empty() {
        return Err(Id3Error::InvalidInput("dataset has no examples".to_string()));
    }
    for (row, example) in examples.iter().enumerate() {
        if let Err(Id3Error::InvalidInput(msg)) = example.validate(param_count) {
            return Err(Id3Error::InvalidInput(format!("example {}: {}", row, msg)));
        }
    }
    Ok(())
}

impl Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for name in &self.param_names {
            write!(f, "{:>width$}", name, width = PRINT_WIDTH)?;
        }
        writeln!(f, "{:>width$}", CLASS_COLUMN, width = PRINT_WIDTH)?;
        for example in &self.examples {
            for v in &example.params {
                write!(f, "{:>width$}", v, width = PRINT_WIDTH)?;
            }
            writeln!(f, "{:>width$}", example.classification, width = PRINT_WIDTH)?;
        }
        Ok(())
    }
}
