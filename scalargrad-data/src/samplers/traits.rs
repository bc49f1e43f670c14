use std::fmt::Debug;

/// Defines the order in which the indices of a dataset are visited.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over indices in `0..dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices [`Sampler::iter`] yields for a dataset of `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
