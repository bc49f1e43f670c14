#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use crate::error::ScalarGradError;
    use std::cell::Cell;

    #[test]
    fn test_check_grad_accepts_correct_gradients() {
        let result = check_grad(
            |g, x| {
                let p = g.mul(x[0], x[1])?;
                let t = g.tanh(p)?;
                g.add(t, x[0])
            },
            &[0.3, -1.2],
            1e-6,
            1e-4,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_reports_mismatch() {
        // The first (analytical) call builds x^2, later calls build 3x.
        let first = Cell::new(true);
        let result = check_grad(
            |g, x| {
                if first.replace(false) {
                    g.mul(x[0], x[0])
                } else {
                    g.mul(x[0], 3.0)
                }
            },
            &[5.0],
            1e-6,
            1e-4,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_reports_forward_failure() {
        let result = check_grad(|g, x| g.log(x[0]), &[-1.0], 1e-6, 1e-4);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(ScalarGradError::Domain { .. }))
        ));
    }
}
