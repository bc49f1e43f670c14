//! # Operation builders
//!
//! Each builder is a method on [`Graph`](crate::autograd::Graph) that
//! computes the forward value, records the operands and the [`Op`](crate::autograd::Op)
//! tag, and returns the id of the new node. The matching derivative rule is
//! applied by the backward pass.
//!
//! Only five rules are primitive (`add`, `mul`, `pow`, `exp`, `log`, plus
//! the `tanh` activation); `neg`, `sub` and `div` are compositions of them.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, div, pow.
//! - [`math_elem`]: exp, log.
//! - [`activation`]: tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;

pub use operand::Operand;

use crate::autograd::{Graph, Node, NodeId, Op};
use crate::error::ScalarGradError;

impl Graph {
    /// Stores a derived node.
    pub(crate) fn record(&self, data: f64, op: Op) -> NodeId {
        self.push(Node::new(data, op, None))
    }

    /// Runs `build`, dropping every node it allocated if it fails.
    ///
    /// A rejected operation leaves the arena as it found it, including the
    /// leaves promoted from number operands.
    pub(crate) fn build_atomic<F>(&self, build: F) -> Result<NodeId, ScalarGradError>
    where
        F: FnOnce(&Graph) -> Result<NodeId, ScalarGradError>,
    {
        let mark = self.checkpoint();
        let result = build(self);
        if result.is_err() {
            self.truncate(mark);
        }
        result
    }
}
