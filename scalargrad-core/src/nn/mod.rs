// src/nn/mod.rs
// Neural network building blocks expressed over the scalar graph.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

// Re-export common items
pub use layers::{Layer, Neuron};
pub use losses::mse_loss;
pub use mlp::Mlp;
pub use module::Module;
