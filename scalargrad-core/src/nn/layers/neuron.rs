use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::Operand;
use rand::Rng;

/// A single unit computing `tanh(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias, each drawn
    /// uniformly from `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(graph: &Graph, n_inputs: usize, rng: &mut R) -> Self {
        let weights = init::uniform_vec(graph, rng, n_inputs, 0.0, 1.0);
        let bias = init::uniform(graph, rng, 0.0, 1.0);
        Neuron { weights, bias }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Forward pass returning the single activation node.
    ///
    /// # Errors
    /// `InputLengthMismatch` if `inputs.len()` differs from the fan-in.
    pub fn activate(&self, graph: &Graph, inputs: &[Operand]) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let mut sum = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let product = graph.mul(w, x)?;
            sum = graph.add(sum, product)?;
        }
        graph.tanh(sum)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &Graph, inputs: &[Operand]) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
