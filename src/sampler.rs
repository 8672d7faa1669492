//! Sampler
//!
//! Strategies for subsetting the training data before a tree is built, used to
//! measure how accuracy depends on training set size.
use crate::data::Datapoint;
use rand::rngs::StdRng;
use rand::seq::index::sample as sample_indices;

// A sampler can be used to subset the data prior to building a tree.
pub trait Sampler {
    /// Sample the data, returning a tuple, where the first item is the samples
    /// chosen for training, and the second are the samples excluded.
    /// Both keep the relative order of `index`.
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>);
}

/// Keeps an exact share of the rows, chosen uniformly without replacement.
pub struct KeepPercentSampler {
    keep_pct: f64,
}

impl KeepPercentSampler {
    /// * `keep_pct` - Percent of rows to keep, clamped to `[0, 100]`.
    pub fn new(keep_pct: f64) -> Self {
        KeepPercentSampler {
            keep_pct: keep_pct.clamp(0.0, 100.0),
        }
    }

    /// Number of rows kept out of `n`.
    pub fn target(&self, n: usize) -> usize {
        ((n as f64) * (self.keep_pct / 100.0)).round() as usize
    }
}

impl Sampler for KeepPercentSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let target = self.target(index.len());
        let mut keep = vec![false; index.len()];
        for i in sample_indices(rng, index.len(), target) {
            keep[i] = true;
        }
        let mut chosen = Vec::with_capacity(target);
        let mut excluded = Vec::with_capacity(index.len() - target);
        for (i, k) in index.iter().zip(keep) {
            if k {
                chosen.push(*i);
            } else {
                excluded.push(*i);
            }
        }
        (chosen, excluded)
    }
}

/// Keep `round(n * keep_pct / 100)` of the examples, in their original order.
pub fn keep_percent(examples: &[Datapoint], keep_pct: f64, rng: &mut StdRng) -> Vec<Datapoint> {
    let index: Vec<usize> = (0..examples.len()).collect();
    let (chosen, _) = KeepPercentSampler::new(keep_pct).sample(rng, &index);
    chosen.into_iter().map(|i| examples[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_keep_percent_sampler() {
        let mut rng = StdRng::seed_from_u64(42);
        let index = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut sampler = KeepPercentSampler::new(50.0);
        let (chosen, excluded) = sampler.sample(&mut rng, &index);
        assert_eq!(chosen.len(), 5);
        assert_eq!(excluded.len(), 5);
        assert!(chosen.windows(2).all(|w| w[0] < w[1]));
        assert!(excluded.windows(2).all(|w| w[0] < w[1]));

        // Test with 100 percent (all should be chosen)
        let mut sampler_all = KeepPercentSampler::new(100.0);
        let (chosen_all, excluded_all) = sampler_all.sample(&mut rng, &index);
        assert_eq!(chosen_all, index);
        assert!(excluded_all.is_empty());

        // Test with 0 percent (none should be chosen)
        let mut sampler_none = KeepPercentSampler::new(0.0);
        let (chosen_none, excluded_none) = sampler_none.sample(&mut rng, &index);
        assert!(chosen_none.is_empty());
        assert_eq!(excluded_none, index);
    }

    #[test]
    fn test_keep_percent_rounding() {
        assert_eq!(KeepPercentSampler::new(5.0).target(24), 1);
        assert_eq!(KeepPercentSampler::new(25.0).target(10), 3);
        assert_eq!(KeepPercentSampler::new(150.0).target(10), 10);
        assert_eq!(KeepPercentSampler::new(1.0).target(10), 0);
    }

    #[test]
    fn test_keep_percent_examples() {
        let examples: Vec<Datapoint> = (0..20).map(|i| Datapoint::new(vec![i % 3], (i % 3) as u8)).collect();
        let mut rng = StdRng::seed_from_u64(0);
        let kept = keep_percent(&examples, 40.0, &mut rng);
        assert_eq!(kept.len(), 8);
        assert!(kept.iter().all(|k| examples.contains(k)));

        // Same seed, same subset.
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(kept, keep_percent(&examples, 40.0, &mut rng));
    }
}
