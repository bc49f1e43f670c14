use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::ops::Operand;
use rand::Rng;

/// A fully connected layer of independent [`Neuron`]s sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(graph: &Graph, in_features: usize, out_features: usize, rng: &mut R) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, in_features, rng))
            .collect();
        Layer {
            neurons,
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One activation per neuron, in neuron order.
    fn forward(&self, graph: &Graph, inputs: &[Operand]) -> Result<Vec<NodeId>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
