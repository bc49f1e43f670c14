//! # Training a 2-4-3-1 MLP on XOR
//!
//! Builds the network's parameters in one [`Graph`], trains it with
//! full-batch gradient descent on the mean squared error and prints the
//! prediction for each of the four XOR inputs.
//!
//! ## Running
//! `RUST_LOG=info cargo run -p scalargrad-data --example train_xor`

use scalargrad_core::nn::Mlp;
use scalargrad_core::train::{fit, predict, TrainConfig};
use scalargrad_core::{Graph, ScalarGradError};
use scalargrad_data::{Dataset, RandomSampler, Sampler, VecDataset};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let config = TrainConfig::default();
    config.validate()?;

    let dataset = VecDataset::xor();
    let (inputs, targets) = dataset.split();

    let graph = Graph::new();
    let model = Mlp::new(&graph, &[2, 4, 3, 1], &mut config.rng())?;

    let report = fit(&graph, &model, &inputs, &targets, &config)?;
    println!(
        "Trained for {} epochs, final loss {:.6}",
        report.losses.len(),
        report.final_loss
    );

    // Shuffled order, to show the fit does not depend on sample position.
    let sampler = RandomSampler::new(config.seed);
    for index in sampler.iter(dataset.len()) {
        let sample = dataset.get(index)?;
        let output = predict(&graph, &model, &sample.input)?;
        println!(
            "{:?} -> {:.4} (target {})",
            sample.input, output[0], sample.target
        );
    }
    Ok(())
}
