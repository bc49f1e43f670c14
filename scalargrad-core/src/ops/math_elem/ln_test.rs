#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, Graph, Op};
    use crate::error::ScalarGradError;
    use approx::assert_relative_eq;
    use std::f64::consts::E;

    #[test]
    fn test_log_forward_and_backward() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let a = g.leaf(E);
        let b = g.log(a)?;
        assert_relative_eq!(g.data(b)?, 1.0, epsilon = 1e-12);
        assert_eq!(g.op(b)?, Op::Log(a));

        g.backward(b)?;
        assert_relative_eq!(g.grad(a)?, 1.0 / E, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_log_domain_error() {
        let g = Graph::new();
        let neg = g.leaf(-1.0);
        assert_eq!(
            g.log(neg),
            Err(ScalarGradError::Domain {
                operation: "log".to_string(),
                value: -1.0
            })
        );
        assert!(matches!(g.log(0.0), Err(ScalarGradError::Domain { .. })));
        // The rejected number operand is not left behind as a leaf.
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_log_gradient_check() {
        for &x in &[0.1, 1.0, 2.5, 40.0] {
            let result = check_grad(|g, inputs| g.log(inputs[0]), &[x], 1e-6, 1e-4);
            assert!(result.is_ok(), "log({}): {:?}", x, result);
        }
    }
}
