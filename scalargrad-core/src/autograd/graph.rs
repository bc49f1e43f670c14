use crate::autograd::node::{GraphId, Node, NodeId, Op};
use crate::error::ScalarGradError;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Arena holding every node of one computation graph.
///
/// Nodes reference their operands by index, and an index is only handed out
/// once its node is stored, so operands always precede their consumers.
/// Builders take `&self`; the nodes live behind a `RefCell` so expressions can
/// be nested (`g.add(g.mul(w, x)?, b)?`).
///
/// Every graph draws a fresh [`GraphId`] from a process-wide counter and
/// stamps it on the ids it hands out, so an id from another graph is rejected
/// even when its index is in range. No node data is shared between graphs:
/// dropping the `Graph` drops every node.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    nodes: RefCell<Vec<Node>>,
}

impl Default for Graph {
    fn default() -> Self {
        Graph {
            id: GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)),
            nodes: RefCell::new(Vec::new()),
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// The id this graph gives to the node at `index`, whether or not it exists yet.
    pub(crate) fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }

    /// Creates a leaf wrapping `value`, with `grad = 0`.
    pub fn leaf(&self, value: f64) -> NodeId {
        self.push(Node::new(value, Op::Leaf, None))
    }

    /// Creates a leaf carrying a display label.
    pub fn leaf_labeled(&self, value: f64, label: impl Into<String>) -> NodeId {
        self.push(Node::new(value, Op::Leaf, Some(label.into())))
    }

    pub(crate) fn push(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        self.id_at(nodes.len() - 1)
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails with `InvalidOperand` if `id` does not name a node of this graph.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::InvalidOperand(format!(
                "node {} belongs to another graph",
                id
            )));
        }
        let len = self.len();
        if id.index < len {
            Ok(())
        } else {
            Err(ScalarGradError::InvalidOperand(format!(
                "node {} is past the end of this graph ({} nodes)",
                id, len
            )))
        }
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }

    /// Forward value of `id`.
    pub fn data(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].data)
    }

    /// Accumulated gradient of `id`.
    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op, ScalarGradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].op)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<String>, ScalarGradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].label.clone())
    }

    /// Snapshot of the node record.
    pub fn node(&self, id: NodeId) -> Result<Node, ScalarGradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].clone())
    }

    /// Overwrites the forward value of a leaf (parameter update).
    ///
    /// Derived nodes built from this leaf keep their old `data`; rebuild them
    /// (see [`Graph::truncate`]) before the next backward pass.
    ///
    /// # Errors
    /// `NotALeaf` if `id` was produced by an operation.
    pub fn set_data(&self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        self.check(id)?;
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[id.index];
        if !node.op.is_leaf() {
            return Err(ScalarGradError::NotALeaf { node: id });
        }
        node.data = value;
        Ok(())
    }

    /// Resets the gradient of `id` to 0.
    pub fn zero_grad(&self, id: NodeId) -> Result<(), ScalarGradError> {
        self.check(id)?;
        self.nodes.borrow_mut()[id.index].grad = 0.0;
        Ok(())
    }

    /// Resets the gradient of every node in the arena.
    pub fn zero_grads(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> usize {
        self.len()
    }

    /// Drops every node allocated after `mark`.
    ///
    /// Ids at or beyond `mark` become invalid and will be reused by later
    /// allocations. Nodes before `mark` never reference later ones, so the
    /// remaining graph stays consistent.
    pub fn truncate(&self, mark: usize) {
        let mut nodes = self.nodes.borrow_mut();
        if mark < nodes.len() {
            debug!("Truncating graph from {} to {} nodes", nodes.len(), mark);
            nodes.truncate(mark);
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Postorder of every node reachable from `root`: each node appears after all
/// of its operands, `root` last.
///
/// Uses an explicit stack, so depth is bounded only by memory. A node met
/// again while still on the stack is reported as `GraphCycle`.
pub(crate) fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.check(root)?;
    let nodes = graph.nodes();
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut sorted = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    marks[root.index] = Mark::OnStack;

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        match nodes[id.index].op.operand(next) {
            Some(child) => {
                frame.1 += 1;
                let mark = marks.get(child.index).copied().ok_or_else(|| {
                    ScalarGradError::InvalidOperand(format!(
                        "node {} references missing operand {}",
                        id, child
                    ))
                })?;
                match mark {
                    Mark::Unvisited => {
                        marks[child.index] = Mark::OnStack;
                        stack.push((child, 0));
                    }
                    Mark::OnStack => return Err(ScalarGradError::GraphCycle { node: child }),
                    Mark::Done => {}
                }
            }
            None => {
                marks[id.index] = Mark::Done;
                sorted.push(id);
                stack.pop();
            }
        }
    }
    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
