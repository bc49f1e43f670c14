use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `e^a`. Local derivative: the output itself.
    pub fn exp(&self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = a.into().resolve(self)?;
        let data = self.data(a)?.exp();
        Ok(self.record(data, Op::Exp(a)))
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
