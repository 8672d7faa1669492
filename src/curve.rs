//! Learning curve
//!
//! Measures test accuracy as a function of how much of the training data is kept.
//! Each point builds a fresh [`DTree`] on a random subset of the training set.
use crate::data::{Datapoint, Dataset};
use crate::errors::Id3Error;
use crate::metric::accuracy;
use crate::sampler::keep_percent;
use crate::tree::DTree;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_keeps() -> Vec<u32> {
    (5..=100).step_by(5).collect()
}
fn default_repeats() -> usize {
    1
}
fn default_seed() -> u64 {
    0
}

/// Settings for a learning curve experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Percent of the training data to keep at each point.
    #[serde(default = "default_keeps")]
    pub keeps: Vec<u32>,
    /// How many times the whole sweep is repeated.
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Integer value used to seed the subsampling.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig {
            keeps: default_keeps(),
            repeats: default_repeats(),
            seed: default_seed(),
        }
    }
}

impl CurveConfig {
    /// Load settings from a JSON string. Missing fields take their defaults.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        match serde_json::from_str::<CurveConfig>(json_str) {
            Ok(c) => Ok(c),
            Err(e) => Err(Id3Error::UnableToRead(e.to_string())),
        }
    }

    /// Load settings from a JSON file.
    ///
    /// * `path` - Path to the JSON file.
    pub fn load(path: &str) -> Result<Self, Id3Error> {
        let json_str = match fs::read_to_string(path) {
            Ok(s) => Ok(s),
            Err(e) => Err(Id3Error::UnableToRead(e.to_string())),
        }?;
        Self::from_json(&json_str)
    }

    /// Set the keep percentages.
    /// * `keeps` - Percent of the training data to keep at each point.
    pub fn set_keeps(mut self, keeps: Vec<u32>) -> Self {
        self.keeps = keeps;
        self
    }

    /// Set the number of repeats.
    pub fn set_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Set the seed.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One measured point of a learning curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub repeat: usize,
    pub keep_pct: u32,
    pub train_size: usize,
    /// Test accuracy in percent.
    pub accuracy_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LearningCurve {
    pub points: Vec<CurvePoint>,
}

impl LearningCurve {
    /// Dump the curve as a json string.
    pub fn json_dump(&self) -> Result<String, Id3Error> {
        match serde_json::to_string(self) {
            Ok(s) => Ok(s),
            Err(e) => Err(Id3Error::UnableToWrite(e.to_string())),
        }
    }

    /// Average accuracy over repeats for every keep percentage, in first seen order.
    pub fn mean_accuracy_by_keep(&self) -> Vec<(u32, f64)> {
        let mut sums: Vec<(u32, f64, usize)> = Vec::new();
        for p in &self.points {
            match sums.iter_mut().find(|(k, _, _)| *k == p.keep_pct) {
                Some(entry) => {
                    entry.1 += p.accuracy_pct;
                    entry.2 += 1;
                }
                None => sums.push((p.keep_pct, p.accuracy_pct, 1)),
            }
        }
        sums.into_iter().map(|(k, s, n)| (k, s / n as f64)).collect()
    }
}

/// Run a learning curve experiment.
///
/// * `train` - Full training set; each point subsamples it.
/// * `test` - Labeled examples the trees are scored on.
/// * `config` - Keep percentages, repeats and seed.
pub fn learning_curve(train: &Dataset, test: &[Datapoint], config: &CurveConfig) -> Result<LearningCurve, Id3Error> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut curve = LearningCurve::default();

    for repeat in 0..config.repeats {
        for &keep in &config.keeps {
            let examples = keep_percent(&train.examples, keep as f64, &mut rng);
            if examples.is_empty() {
                warn!(
                    "Keeping {}% of {} examples leaves none, skipping this point.",
                    keep,
                    train.len()
                );
                continue;
            }
            let train_size = examples.len();
            let mut tree = DTree::new(Dataset::new(train.param_names.clone(), examples)?);
            tree.build_tree()?;
            let (_, acc) = accuracy(&tree, test, false)?;
            curve.points.push(CurvePoint {
                repeat,
                keep_pct: keep,
                train_size,
                accuracy_pct: 100.0 * acc,
            });
        }
    }

    info!(
        "Finished a learning curve with {} points over {} repeats.",
        curve.points.len(),
        config.repeats
    );
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_dataset;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_config_json() {
        let config = CurveConfig::from_json(r#"{"keeps": [50, 100], "seed": 3}"#).unwrap();
        assert_eq!(config.keeps, vec![50, 100]);
        assert_eq!(config.repeats, 1);
        assert_eq!(config.seed, 3);

        let defaults = CurveConfig::from_json("{}").unwrap();
        assert_eq!(defaults, CurveConfig::default());
        assert_eq!(defaults.keeps.len(), 20);
        assert_eq!(defaults.keeps[0], 5);
        assert_eq!(*defaults.keeps.last().unwrap(), 100);

        assert!(matches!(CurveConfig::from_json("{"), Err(Id3Error::UnableToRead(_))));
        assert!(matches!(
            CurveConfig::load("resources/does_not_exist.json"),
            Err(Id3Error::UnableToRead(_))
        ));
    }

    #[test]
    fn test_learning_curve() {
        let train = read_dataset("resources/train.dat").unwrap();
        let test = read_dataset("resources/test.dat").unwrap();
        let config = CurveConfig::default().set_keeps(vec![1, 50, 100]).set_repeats(2).set_seed(9);

        let curve = learning_curve(&train, &test.examples, &config).unwrap();
        // 1% of 24 rounds to zero examples and is skipped.
        assert_eq!(curve.points.len(), 4);
        assert!(curve.points.iter().all(|p| p.keep_pct != 1));
        for p in &curve.points {
            assert!((0.0..=100.0).contains(&p.accuracy_pct));
            match p.keep_pct {
                50 => assert_eq!(p.train_size, 12),
                _ => {
                    assert_eq!(p.train_size, 24);
                    assert_relative_eq!(p.accuracy_pct, 75.0);
                }
            }
        }

        let means = curve.mean_accuracy_by_keep();
        assert_eq!(means.len(), 2);
        assert_eq!(means[1].0, 100);
        assert_relative_eq!(means[1].1, 75.0);

        // Same seed, same curve.
        assert_eq!(curve, learning_curve(&train, &test.examples, &config).unwrap());

        let dumped = curve.json_dump().unwrap();
        let loaded: LearningCurve = serde_json::from_str(&dumped).unwrap();
        assert_eq!(loaded, curve);
    }
}
