use std::fmt;

/// Identity of one [`Graph`](super::Graph), unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(pub(crate) u64);

/// Index of a node inside its [`Graph`](super::Graph) arena, tagged with the
/// graph that allocated it.
///
/// Ids are handed out in allocation order, so an operation can only ever
/// reference ids smaller than its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// The graph this id was allocated by.
    pub fn graph(self) -> GraphId {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// The operation that produced a node, together with its operands.
///
/// Negation, subtraction and division have no variant of their own: they are
/// built from `Mul`, `Add` and `Pow`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Constant exponent. Differentiating with respect to it is unsupported.
    Pow(NodeId, f64),
    Exp(NodeId),
    Log(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Operand ids in the order they were passed to the builder.
    pub fn children(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Exp(a) | Op::Log(a) | Op::Tanh(a) => vec![a],
        }
    }

    /// The `i`-th operand, if any. Allocation-free counterpart of [`Op::children`].
    pub fn operand(&self, i: usize) -> Option<NodeId> {
        match (*self, i) {
            (Op::Add(a, _), 0) | (Op::Mul(a, _), 0) => Some(a),
            (Op::Add(_, b), 1) | (Op::Mul(_, b), 1) => Some(b),
            (Op::Pow(a, _), 0) | (Op::Exp(a), 0) | (Op::Log(a), 0) | (Op::Tanh(a), 0) => Some(a),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short display tag (`""` for leaves).
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow(..) => "**",
            Op::Exp(_) => "exp",
            Op::Log(_) => "log",
            Op::Tanh(_) => "tanh",
        }
    }
}

/// One scalar value in the computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op, label: Option<String>) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label,
        }
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data)
    }
}
