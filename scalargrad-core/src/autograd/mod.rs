//! Reverse-mode differentiation over a scalar computation graph.
//!
//! Nodes live in a [`Graph`] arena and are addressed by [`NodeId`]. The
//! operation builders in [`crate::ops`] grow the graph; [`Graph::backward`]
//! propagates gradients from a root to every node that contributed to it.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::Graph;
pub use node::{GraphId, Node, NodeId, Op};
