use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Samples indices in a random order drawn from a fixed seed.
///
/// Every call to [`Sampler::iter`] restarts the generator, so a sampler
/// always yields the same order for the same dataset length.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    seed: u64,
    replacement: bool,
    num_samples: Option<usize>,
}

impl RandomSampler {
    /// A permutation of the whole dataset, without replacement.
    pub fn new(seed: u64) -> Self {
        RandomSampler {
            seed,
            replacement: false,
            num_samples: None,
        }
    }

    /// Draws `num_samples` indices (dataset length if `None`); with
    /// `replacement` an index may repeat.
    pub fn with_replacement(mut self, replacement: bool, num_samples: Option<usize>) -> Self {
        self.replacement = replacement;
        self.num_samples = num_samples;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let num_samples = self.len(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }

        if num_samples > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                num_samples, dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices.truncate(num_samples);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
