use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `a * b`. Local derivatives: `b` and `a`.
    ///
    /// Symmetric in its operand kinds: a number on the left is promoted
    /// exactly like a number on the right.
    pub fn mul(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = (a.into(), b.into());
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let b = b.resolve(g)?;
            let data = g.data(a)? * g.data(b)?;
            Ok(g.record(data, Op::Mul(a, b)))
        })
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
