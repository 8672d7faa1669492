/// Number of distinct values an attribute can take.
pub const N_VALUES: usize = 3;
/// Number of distinct class labels.
pub const N_CLASSES: usize = 3;
/// Gain reported for an attribute that is not a valid split candidate.
pub const INVALID_GAIN: f64 = -1.0;
/// Gains closer than this are treated as equal when choosing a split.
pub const GAIN_EPSILON: f64 = 1e-12;
/// Column width used when printing a dataset.
pub const PRINT_WIDTH: usize = 15;
/// Name of the trailing label column in data files and printouts.
pub const CLASS_COLUMN: &str = "class";
