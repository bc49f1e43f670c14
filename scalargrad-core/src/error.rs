use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Numerical failures (`Domain`, `DivisionByZero`) are raised when the offending
/// node is built; `GraphCycle` is raised by `backward`. None of them are
/// recovered inside the engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Domain error in {operation}: derivative undefined at {value}")]
    Domain { operation: String, value: f64 },

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },

    #[error("Cycle detected in the computation graph at node {node}")]
    GraphCycle { node: NodeId },

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Node {node} is not a leaf; only leaf data may be mutated")]
    NotALeaf { node: NodeId },

    #[error("Input length mismatch in {operation}: expected {expected}, got {actual}")]
    InputLengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Empty input for {operation}")]
    EmptyInput { operation: String },
}
