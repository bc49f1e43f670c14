//! Full-batch gradient-descent training loop.

use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::{mse_loss, Module};
use crate::ops::Operand;
use crate::optim::{Optimizer, SgdOptimizer};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hyperparameters of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Emit a progress line every `log_every` epochs.
    pub log_every: usize,
    /// Seed for parameter initialisation.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.05,
            epochs: 5000,
            log_every: 100,
            seed: 42,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deterministic generator seeded from [`TrainConfig::seed`].
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ScalarGradError::InvalidOperand(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidOperand(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(ScalarGradError::InvalidOperand(
                "log_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loss history of a [`fit`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Loss of each epoch, measured before that epoch's update.
    pub losses: Vec<f64>,
    pub final_loss: f64,
}

/// Trains `model` on `(inputs, targets)` with full-batch SGD on the MSE loss.
///
/// Each epoch builds its graph on top of the model's parameter leaves and
/// truncates it afterwards, so the arena does not grow across epochs.
/// The model must have exactly one output.
///
/// # Errors
/// Invalid configuration, mismatched or empty data, and any engine error
/// raised while building or differentiating the loss.
pub fn fit<M: Module>(
    graph: &Graph,
    model: &M,
    inputs: &[Vec<f64>],
    targets: &[f64],
    config: &TrainConfig,
) -> Result<TrainReport, ScalarGradError> {
    config.validate()?;
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "fit".to_string(),
        });
    }
    if inputs.len() != targets.len() {
        return Err(ScalarGradError::InputLengthMismatch {
            expected: inputs.len(),
            actual: targets.len(),
            operation: "fit".to_string(),
        });
    }

    let mut optimizer = SgdOptimizer::new(model.parameters(), config.learning_rate);
    let mark = graph.checkpoint();
    debug!(
        "fit: {} samples, {} parameters, graph checkpoint at {}",
        inputs.len(),
        optimizer.params().len(),
        mark
    );

    let mut losses = Vec::with_capacity(config.epochs);
    for epoch in 0..config.epochs {
        let result = train_epoch(graph, model, &mut optimizer, inputs, targets);
        graph.truncate(mark);
        let loss = result?;

        if epoch % config.log_every == 0 {
            info!("epoch {} loss {}", epoch, loss);
        }
        losses.push(loss);
    }

    let final_loss = losses.last().copied().unwrap_or(f64::NAN);
    Ok(TrainReport { losses, final_loss })
}

fn train_epoch<M: Module>(
    graph: &Graph,
    model: &M,
    optimizer: &mut SgdOptimizer,
    inputs: &[Vec<f64>],
    targets: &[f64],
) -> Result<f64, ScalarGradError> {
    let mut predictions = Vec::with_capacity(inputs.len());
    for input in inputs {
        let operands: Vec<Operand> = input.iter().copied().map(Operand::from).collect();
        let outputs = model.forward(graph, &operands)?;
        match outputs.as_slice() {
            [single] => predictions.push(*single),
            _ => {
                return Err(ScalarGradError::InputLengthMismatch {
                    expected: 1,
                    actual: outputs.len(),
                    operation: "fit (model outputs)".to_string(),
                })
            }
        }
    }
    let loss = mse_loss(graph, &predictions, targets)?;
    let loss_value = graph.data(loss)?;

    optimizer.zero_grad(graph)?;
    graph.backward(loss)?;
    optimizer.step(graph)?;
    Ok(loss_value)
}

/// Forward values of `model` for one input, without keeping the graph.
pub fn predict<M: Module>(graph: &Graph, model: &M, input: &[f64]) -> Result<Vec<f64>, ScalarGradError> {
    let mark = graph.checkpoint();
    let operands: Vec<Operand> = input.iter().copied().map(Operand::from).collect();
    let result = model
        .forward(graph, &operands)
        .and_then(|outputs| outputs.iter().map(|&id| graph.data(id)).collect());
    graph.truncate(mark);
    result
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
