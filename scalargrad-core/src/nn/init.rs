use crate::autograd::{Graph, NodeId};
use rand::Rng;

/// Allocates a parameter leaf drawn uniformly from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(graph: &Graph, rng: &mut R, low: f64, high: f64) -> NodeId {
    graph.leaf(rng.gen_range(low..high))
}

/// Allocates `n` parameter leaves drawn uniformly from `[low, high)`.
pub fn uniform_vec<R: Rng + ?Sized>(
    graph: &Graph,
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Vec<NodeId> {
    (0..n).map(|_| uniform(graph, rng, low, high)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
