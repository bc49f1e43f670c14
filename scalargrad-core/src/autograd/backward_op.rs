use crate::autograd::node::{Node, NodeId, Op};
use log::trace;

/// Runs the local backward rule of node `id`.
///
/// Reads the node's accumulated `grad` and adds `local_derivative * grad` to
/// each operand. Every derivative formula of the engine lives in this match;
/// it is evaluated at the `data` recorded in the arena, so the op and its
/// rule cannot drift apart.
pub(crate) fn apply_backward(nodes: &mut [Node], id: NodeId) {
    let (op, out_data, out_grad) = {
        let node = &nodes[id.index];
        (node.op, node.data, node.grad)
    };
    trace!("backward {} ({}) grad={}", id, op.symbol(), out_grad);

    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            nodes[a.index].grad += out_grad;
            nodes[b.index].grad += out_grad;
        }
        Op::Mul(a, b) => {
            let x = nodes[a.index].data;
            let y = nodes[b.index].data;
            nodes[a.index].grad += y * out_grad;
            nodes[b.index].grad += x * out_grad;
        }
        // x^0 is constant; skip so that x = 0 does not yield 0 * inf.
        Op::Pow(_, k) if k == 0.0 => {}
        Op::Pow(a, k) => {
            let x = nodes[a.index].data;
            nodes[a.index].grad += k * x.powf(k - 1.0) * out_grad;
        }
        Op::Exp(a) => {
            nodes[a.index].grad += out_data * out_grad;
        }
        Op::Log(a) => {
            let x = nodes[a.index].data;
            nodes[a.index].grad += out_grad / x;
        }
        Op::Tanh(a) => {
            nodes[a.index].grad += (1.0 - out_data * out_data) * out_grad;
        }
    }
}
