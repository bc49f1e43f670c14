use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use log::trace;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. With the defaults
/// from [`SgdOptimizer::new`] the update is plain `data -= lr * grad`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<NodeId>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    nesterov: bool,
    momentum_buffers: HashMap<NodeId, f64>,
}

impl SgdOptimizer {
    /// Plain gradient descent over `params`.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn with_momentum(mut self, momentum: f64, nesterov: bool) -> Self {
        self.momentum = momentum;
        self.nesterov = nesterov;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &Graph) -> Result<(), ScalarGradError> {
        for &param in &self.params {
            let data = graph.data(param)?;
            let mut d_p = graph.grad(param)?;

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * data;
            }

            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = if self.nesterov {
                    d_p + self.momentum * *buffer
                } else {
                    *buffer
                };
            }

            trace!("sgd step {}: data={} update={}", param, data, self.lr * d_p);
            graph.set_data(param, data - self.lr * d_p)?;
        }
        Ok(())
    }

    fn zero_grad(&self, graph: &Graph) -> Result<(), ScalarGradError> {
        for &param in &self.params {
            graph.zero_grad(param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
