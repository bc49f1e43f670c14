mod common;

use common::init_logger;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::train::{fit, predict, TrainConfig};
use scalargrad_core::{Graph, Operand, ScalarGradError};

fn xor() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        vec![0.0, 1.0, 1.0, 0.0],
    )
}

#[test]
fn test_fit_xor_network() -> Result<(), ScalarGradError> {
    init_logger();
    let config = TrainConfig::default().with_epochs(1000).with_log_every(250);
    let g = Graph::new();
    let mlp = Mlp::new(&g, &[2, 4, 3, 1], &mut config.rng())?;
    let (inputs, targets) = xor();

    let report = fit(&g, &mlp, &inputs, &targets, &config)?;
    assert!(report.final_loss.is_finite());
    assert!(report.final_loss < report.losses[0]);
    assert_eq!(g.len(), mlp.parameters().len());

    for input in &inputs {
        let out = predict(&g, &mlp, input)?;
        assert!(out[0] > -1.0 && out[0] < 1.0);
    }
    Ok(())
}

#[test]
fn test_manual_loop_matches_fit() -> Result<(), ScalarGradError> {
    let config = TrainConfig::default().with_epochs(5);
    let (inputs, targets) = xor();

    let g_fit = Graph::new();
    let mlp_fit = Mlp::new(&g_fit, &[2, 3, 1], &mut config.rng())?;
    let report = fit(&g_fit, &mlp_fit, &inputs, &targets, &config)?;

    let g = Graph::new();
    let mlp = Mlp::new(&g, &[2, 3, 1], &mut StdRng::seed_from_u64(config.seed))?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), config.learning_rate);
    let mark = g.checkpoint();
    let mut losses = Vec::new();
    for _ in 0..config.epochs {
        let mut predictions = Vec::new();
        for input in &inputs {
            let operands: Vec<Operand> = input.iter().copied().map(Operand::from).collect();
            predictions.push(mlp.forward_scalar(&g, &operands)?);
        }
        let loss = scalargrad_core::nn::mse_loss(&g, &predictions, &targets)?;
        losses.push(g.data(loss)?);
        mlp.zero_grad(&g)?;
        g.backward(loss)?;
        optimizer.step(&g)?;
        g.truncate(mark);
    }

    assert_eq!(losses, report.losses);
    Ok(())
}
