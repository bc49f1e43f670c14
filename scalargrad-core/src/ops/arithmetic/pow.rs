use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `a^exponent` for a constant exponent. Local derivative: `k * x^(k-1)`.
    ///
    /// The exponent is a plain `f64`, never a node: the gradient with respect
    /// to the exponent is not computed.
    ///
    /// # Errors
    /// * `InvalidOperand` for a NaN or infinite exponent.
    /// * `DivisionByZero` when the base is 0 and the exponent negative.
    /// * `Domain` when the base is non-positive and the exponent not an integer.
    pub fn pow(&self, a: impl Into<Operand>, exponent: f64) -> Result<NodeId, ScalarGradError> {
        if !exponent.is_finite() {
            return Err(ScalarGradError::InvalidOperand(format!(
                "pow exponent must be finite, got {}",
                exponent
            )));
        }
        let a = a.into();
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let x = g.data(a)?;
            if x == 0.0 && exponent < 0.0 {
                return Err(ScalarGradError::DivisionByZero {
                    operation: "pow".to_string(),
                });
            }
            if x <= 0.0 && exponent.fract() != 0.0 {
                return Err(ScalarGradError::Domain {
                    operation: "pow".to_string(),
                    value: x,
                });
            }
            Ok(g.record(x.powf(exponent), Op::Pow(a, exponent)))
        })
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
