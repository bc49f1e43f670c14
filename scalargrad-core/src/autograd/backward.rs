use crate::autograd::backward_op::apply_backward;
use crate::autograd::graph::{topological_sort, Graph};
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use log::debug;

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root.grad = 1.0`, then runs every reachable node's backward rule
    /// exactly once in reverse topological order, so each node's gradient is
    /// complete before it is propagated to its operands.
    ///
    /// Gradients are accumulated, not replaced: calling `backward` again
    /// without [`Graph::zero_grads`] adds a second contribution to every
    /// non-root node.
    ///
    /// # Errors
    /// * `InvalidOperand` if `root` is not a node of this graph.
    /// * `GraphCycle` if the reachable graph is not acyclic.
    pub fn backward(&self, root: NodeId) -> Result<(), ScalarGradError> {
        let sorted = topological_sort(self, root)?;
        debug!("backward from {}: {} reachable nodes", root, sorted.len());

        let mut nodes = self.nodes_mut();
        nodes[root.index()].grad = 1.0;
        for &id in sorted.iter().rev() {
            apply_backward(&mut nodes, id);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
