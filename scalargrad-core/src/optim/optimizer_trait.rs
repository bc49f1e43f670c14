use crate::autograd::Graph;
use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter leaves of a [`Graph`] from their accumulated
/// gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    fn step(&mut self, graph: &Graph) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&self, graph: &Graph) -> Result<(), ScalarGradError>;
}
