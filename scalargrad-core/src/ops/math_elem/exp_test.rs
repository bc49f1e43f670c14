#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, Graph, Op};
    use crate::error::ScalarGradError;
    use approx::assert_relative_eq;
    use std::f64::consts::E;

    #[test]
    fn test_exp_forward_and_backward() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let a = g.leaf(1.0);
        let b = g.exp(a)?;
        assert_relative_eq!(g.data(b)?, E, epsilon = 1e-12);
        assert_eq!(g.op(b)?, Op::Exp(a));

        g.backward(b)?;
        assert_relative_eq!(g.grad(a)?, E, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_exp_of_zero() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let b = g.exp(0.0)?;
        assert_eq!(g.data(b)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_exp_gradient_check() {
        for &x in &[-2.0, 0.0, 0.5, 3.0] {
            let result = check_grad(|g, inputs| g.exp(inputs[0]), &[x], 1e-6, 1e-4);
            assert!(result.is_ok(), "exp({}): {:?}", x, result);
        }
    }
}
