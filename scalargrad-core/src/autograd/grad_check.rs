use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against centered finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the scalar output node. The derivative with respect to input `i`
/// is estimated as `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// A mismatch is reported only when both the absolute difference and the
/// relative difference exceed `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&id| graph.grad(id))
        .collect::<Result<_, _>>()?;

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward value of `func` with input `index` shifted by `delta`, on a fresh graph.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.data(output)?)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
