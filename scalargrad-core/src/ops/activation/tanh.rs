use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// Hyperbolic tangent. Local derivative: `1 - tanh(x)^2`.
    ///
    /// In `f64` the result rounds to exactly `±1.0` once `|x|` exceeds about
    /// 19, and the local derivative is then exactly 0. The open bound
    /// `(-1, 1)` only holds below that point.
    pub fn tanh(&self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = a.into().resolve(self)?;
        let data = self.data(a)?.tanh();
        Ok(self.record(data, Op::Tanh(a)))
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
