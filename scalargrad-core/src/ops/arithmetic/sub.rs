use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `-a`, recorded as `a * -1`.
    pub fn neg(&self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        self.mul(a, -1.0)
    }

    /// `a - b`, recorded as `a + (b * -1)`.
    pub fn sub(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = (a.into(), b.into());
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let negated = g.neg(b)?;
            g.add(a, negated)
        })
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
