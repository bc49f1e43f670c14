// src/nn/losses/mse.rs

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;

/// Mean squared error `Σ (ŷᵢ - yᵢ)² / n`, built from engine operations so it
/// can be differentiated.
///
/// # Errors
/// * `EmptyInput` if there are no predictions.
/// * `InputLengthMismatch` if `predictions` and `targets` differ in length.
pub fn mse_loss(graph: &Graph, predictions: &[NodeId], targets: &[f64]) -> Result<NodeId, ScalarGradError> {
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::InputLengthMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "mse_loss".to_string(),
        });
    }

    let mut total: Option<NodeId> = None;
    for (&prediction, &target) in predictions.iter().zip(targets) {
        let diff = graph.sub(prediction, target)?;
        let squared = graph.pow(diff, 2.0)?;
        total = Some(match total {
            Some(acc) => graph.add(acc, squared)?,
            None => squared,
        });
    }
    match total {
        Some(sum) => graph.div(sum, predictions.len() as f64),
        None => Err(ScalarGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
