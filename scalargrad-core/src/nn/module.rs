use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::Operand;

/// The base trait for all neural network modules.
///
/// A module owns parameter leaves allocated in a [`Graph`]; it does not own
/// the graph itself, so one graph can hold the parameters of several modules.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, returning one node per output.
    fn forward(&self, graph: &Graph, inputs: &[Operand]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Returns every learnable parameter leaf, including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self, graph: &Graph) -> Result<(), ScalarGradError> {
        for param in self.parameters() {
            graph.zero_grad(param)?;
        }
        Ok(())
    }
}

/// Converts forward outputs into operands for the next module.
pub(crate) fn as_operands(nodes: &[NodeId]) -> Vec<Operand> {
    nodes.iter().map(Operand::from).collect()
}
