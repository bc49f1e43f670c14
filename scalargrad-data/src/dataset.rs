use scalargrad_core::ScalarGradError;

/// One labelled example: a feature vector and its scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: f64,
}

/// Trait representing a dataset.
///
/// A dataset provides access to individual samples by index.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
