//! # scalargrad-data
//!
//! In-memory datasets and index samplers feeding the `scalargrad-core`
//! training loop.

pub mod dataset;
pub mod samplers;
pub mod vec_dataset;

pub use dataset::{Dataset, Sample};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use vec_dataset::VecDataset;
