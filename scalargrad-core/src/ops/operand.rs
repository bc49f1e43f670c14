use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;

/// Either side of an operation: an existing node or a bare number.
///
/// Numbers are promoted to fresh leaves when the operation is built, on
/// either side, so `g.mul(2.0, x)` and `g.mul(x, 2.0)` record the same
/// computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Number(f64),
}

impl Operand {
    /// Resolves to a node of `graph`, allocating a leaf for a number.
    pub fn resolve(self, graph: &Graph) -> Result<NodeId, ScalarGradError> {
        match self {
            Operand::Node(id) => {
                graph.check(id)?;
                Ok(id)
            }
            Operand::Number(value) => Ok(graph.leaf(value)),
        }
    }
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

#[cfg(test)]
#[path = "operand_test.rs"]
mod tests;
