//! Reader
//!
//! Loads a dataset from whitespace separated text.
//!
//! The first non-blank line names the attributes, followed by a final name for
//! the class column. Each following non-blank line holds one integer per
//! attribute and the class label last. Blank lines are skipped anywhere.
//!
//! ```text
//! outlook humidity wind class
//! 0 1 0 0
//! 2 0 1 1
//! ```
use crate::data::{Datapoint, Dataset};
use crate::errors::Id3Error;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a dataset from text.
pub fn parse_dataset(text: &str) -> Result<Dataset, Id3Error> {
    let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

    let param_names: Vec<String> = match lines.next() {
        Some((_, header)) => {
            let mut names: Vec<String> = header.split_whitespace().map(String::from).collect();
            // The last column is the class.
            names.pop();
            names
        }
        None => return Err(Id3Error::InvalidInput("no header line found".to_string())),
    };
    let param_count = param_names.len();

    let mut examples = Vec::new();
    for (line_no, line) in lines {
        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| {
                    Id3Error::ParseString(
                        token.to_string(),
                        format!("line {}", line_no + 1),
                        "an integer in 0, 1, 2".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<u8>, Id3Error>>()?;
        if values.len() != param_count + 1 {
            return Err(Id3Error::InvalidInput(format!(
                "line {} has {} values, expected {}",
                line_no + 1,
                values.len(),
                param_count + 1
            )));
        }
        let (params, classification) = values.split_at(param_count);
        examples.push(Datapoint::new(params.to_vec(), classification[0]));
    }

    debug!("Parsed {} examples over {} attributes.", examples.len(), param_count);
    Dataset::new(param_names, examples)
}

/// Read a dataset from a file.
///
/// * `path` - Path to the data file.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, Id3Error> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(s) => Ok(s),
        Err(e) => Err(Id3Error::UnableToRead(format!("{}: {}", path.display(), e))),
    }?;
    parse_dataset(&text)
}
