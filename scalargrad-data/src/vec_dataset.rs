use crate::dataset::{Dataset, Sample};
use scalargrad_core::ScalarGradError;

/// A dataset of [`Sample`]s held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset {
    samples: Vec<Sample>,
}

impl VecDataset {
    /// Pairs `inputs[i]` with `targets[i]`.
    ///
    /// # Errors
    /// `InputLengthMismatch` if the two vectors differ in length.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self, ScalarGradError> {
        if inputs.len() != targets.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: inputs.len(),
                actual: targets.len(),
                operation: "VecDataset::new".to_string(),
            });
        }
        let samples = inputs
            .into_iter()
            .zip(targets)
            .map(|(input, target)| Sample { input, target })
            .collect();
        Ok(VecDataset { samples })
    }

    /// The four points of the XOR truth table.
    pub fn xor() -> Self {
        let samples = [([0.0, 0.0], 0.0), ([0.0, 1.0], 1.0), ([1.0, 0.0], 1.0), ([1.0, 1.0], 0.0)]
            .iter()
            .map(|(input, target)| Sample {
                input: input.to_vec(),
                target: *target,
            })
            .collect();
        VecDataset { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Splits into the `(inputs, targets)` pair expected by `scalargrad_core::train::fit`.
    pub fn split(&self) -> (Vec<Vec<f64>>, Vec<f64>) {
        self.samples
            .iter()
            .map(|sample| (sample.input.clone(), sample.target))
            .unzip()
    }
}

impl Dataset for VecDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Sample, ScalarGradError> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.samples.len(),
            })
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
