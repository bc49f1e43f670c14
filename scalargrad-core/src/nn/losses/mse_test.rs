#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::ScalarGradError;
    use crate::nn::losses::mse::mse_loss;
    use approx::assert_relative_eq;

    #[test]
    fn test_mse_loss_forward_basic() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let preds = [g.leaf(1.0), g.leaf(2.0)];
        let loss = mse_loss(&g, &preds, &[1.5, 1.0])?;
        assert_relative_eq!(g.data(loss)?, 0.625, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_mse_loss_backward() -> Result<(), ScalarGradError> {
        // d/dp (p - t)^2 / n = 2 (p - t) / n
        let g = Graph::new();
        let preds = [g.leaf(1.0), g.leaf(2.0)];
        let loss = mse_loss(&g, &preds, &[1.5, 1.0])?;
        g.backward(loss)?;
        assert_relative_eq!(g.grad(preds[0])?, -0.5, epsilon = 1e-12);
        assert_relative_eq!(g.grad(preds[1])?, 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_mse_loss_single_prediction() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let p = g.leaf(0.0);
        let loss = mse_loss(&g, &[p], &[3.0])?;
        assert_relative_eq!(g.data(loss)?, 9.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_mse_loss_forward_mismatched_lengths() {
        let g = Graph::new();
        let preds = [g.leaf(1.0), g.leaf(2.0)];
        let result = mse_loss(&g, &preds, &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(ScalarGradError::InputLengthMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn test_mse_loss_empty() {
        let g = Graph::new();
        assert!(matches!(mse_loss(&g, &[], &[]), Err(ScalarGradError::EmptyInput { .. })));
    }
}
