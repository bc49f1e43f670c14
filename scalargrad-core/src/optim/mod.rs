// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built on the scalar graph.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
