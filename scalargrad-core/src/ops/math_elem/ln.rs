use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// Natural logarithm. Local derivative: `1 / x`.
    ///
    /// # Errors
    /// `Domain` when `x <= 0`. No clamping is applied.
    pub fn log(&self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = a.into();
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let x = g.data(a)?;
            if x <= 0.0 {
                return Err(ScalarGradError::Domain {
                    operation: "log".to_string(),
                    value: x,
                });
            }
            Ok(g.record(x.ln(), Op::Log(a)))
        })
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
