//! # scalargrad-core
//!
//! A scalar reverse-mode automatic-differentiation engine. Operations on
//! [`NodeId`]s record a computation graph in a [`Graph`] arena;
//! [`Graph::backward`] computes the gradient of one output with respect to
//! every node that contributed to it.
//!
//! On top of the engine sit a small feed-forward network ([`nn`]), a
//! gradient-descent optimizer ([`optim`]) and a training loop ([`train`]).

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;

pub use autograd::{check_grad, Graph, GraphId, Node, NodeId, Op};
pub use error::ScalarGradError;
pub use ops::Operand;
