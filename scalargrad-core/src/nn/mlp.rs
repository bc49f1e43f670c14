use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::layers::Layer;
use crate::nn::module::{as_operands, Module};
use crate::ops::Operand;
use rand::Rng;

/// Multi-layer perceptron: a chain of [`Layer`]s with tanh activations.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds one layer per consecutive pair of `dims`, e.g. `[2, 4, 3, 1]`
    /// gives layers 2→4, 4→3 and 3→1.
    ///
    /// # Errors
    /// `EmptyInput` if `dims` has fewer than two entries or contains a zero.
    pub fn new<R: Rng + ?Sized>(graph: &Graph, dims: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        if dims.len() < 2 || dims.contains(&0) {
            return Err(ScalarGradError::EmptyInput {
                operation: format!("Mlp::new with dims {:?}", dims),
            });
        }
        let layers = dims
            .windows(2)
            .map(|pair| Layer::new(graph, pair[0], pair[1], rng))
            .collect();
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers[0].in_features()
    }

    pub fn out_features(&self) -> usize {
        self.layers[self.layers.len() - 1].out_features()
    }

    /// Forward pass for a network with exactly one output.
    ///
    /// # Errors
    /// `InputLengthMismatch` if the network has more than one output.
    pub fn forward_scalar(&self, graph: &Graph, inputs: &[Operand]) -> Result<NodeId, ScalarGradError> {
        let outputs = self.forward(graph, inputs)?;
        match outputs.as_slice() {
            [single] => Ok(*single),
            _ => Err(ScalarGradError::InputLengthMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "Mlp::forward_scalar".to_string(),
            }),
        }
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &Graph, inputs: &[Operand]) -> Result<Vec<NodeId>, ScalarGradError> {
        let mut x = inputs.to_vec();
        let mut outputs = Vec::new();
        for layer in &self.layers {
            outputs = layer.forward(graph, &x)?;
            x = as_operands(&outputs);
        }
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
