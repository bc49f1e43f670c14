use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `a / b`, recorded as `a * b^-1`.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is 0.
    pub fn div(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = (a.into(), b.into());
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let b = b.resolve(g)?;
            if g.data(b)? == 0.0 {
                return Err(ScalarGradError::DivisionByZero {
                    operation: "div".to_string(),
                });
            }
            let reciprocal = g.pow(b, -1.0)?;
            g.mul(a, reciprocal)
        })
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
