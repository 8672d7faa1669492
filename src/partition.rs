//! Partition
//!
//! Three-way in-place partitioning of a sub-range of the dataset store by one
//! attribute's value.
use crate::data::Datapoint;
use crate::errors::Id3Error;

/// Partition `dataset[left..=right]` around the values of attribute `param`,
/// so all of the 0 values come first, then the 1 values, then the 2 values.
///
/// Returns the tuple `(b2, b3)`: the first index holding a 1, and the first
/// index holding a 2. The partitions are `[left, b2 - 1]`, `[b2, b3 - 1]` and
/// `[b3, right]`; any of them may be empty. The relative order inside a
/// partition is not preserved.
///
/// * `dataset` - The dataset store to reorder.
/// * `left` - First index of the sub-range.
/// * `right` - Last index of the sub-range, inclusive.
/// * `param` - The attribute to partition on.
pub fn ternary_partition(
    dataset: &mut [Datapoint],
    left: usize,
    right: usize,
    param: usize,
) -> Result<(usize, usize), Id3Error> {
    if left > right {
        return Err(Id3Error::EmptyRange(left, right));
    }
    if right >= dataset.len() {
        return Err(Id3Error::InvalidInput(format!(
            "range end {} is past the dataset size {}",
            right,
            dataset.len()
        )));
    }
    let sub = &mut dataset[left..=right];
    if let Some(d) = sub.iter().find(|d| param >= d.params.len()) {
        return Err(Id3Error::InvalidInput(format!(
            "attribute {} does not exist, examples have {} attributes",
            param,
            d.params.len()
        )));
    }

    // Everything below `low` is a 0, everything in `low..mid` is a 1,
    // and everything from `high` on is a 2. `mid..high` is unexamined.
    let mut low = 0;
    let mut mid = 0;
    let mut high = sub.len();
    while mid < high {
        match sub[mid].value(param) {
            0 => {
                sub.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            2 => {
                // The swapped in value is unexamined, so `mid` stays.
                high -= 1;
                sub.swap(mid, high);
            }
            v => {
                return Err(Id3Error::InvalidInput(format!(
                    "attribute {} has value {}, expected one of 0, 1, 2",
                    param, v
                )))
            }
        }
    }
    Ok((left + low, left + mid))
}
