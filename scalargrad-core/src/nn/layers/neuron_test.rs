#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::ScalarGradError;
    use crate::nn::layers::Neuron;
    use crate::nn::module::Module;
    use crate::ops::Operand;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_parameters() {
        let g = Graph::new();
        let neuron = Neuron::new(&g, 3, &mut StdRng::seed_from_u64(0));
        assert_eq!(neuron.n_inputs(), 3);
        let params = neuron.parameters();
        assert_eq!(params.len(), 4);
        assert_eq!(params[3], neuron.bias());
        for p in params {
            let value = g.data(p).unwrap();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_neuron_forward_matches_closed_form() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let neuron = Neuron::new(&g, 2, &mut StdRng::seed_from_u64(3));
        let x = [0.5, -1.0];
        let out = neuron.activate(&g, &[Operand::from(x[0]), Operand::from(x[1])])?;

        let w0 = g.data(neuron.weights()[0])?;
        let w1 = g.data(neuron.weights()[1])?;
        let b = g.data(neuron.bias())?;
        let expected = (w0 * x[0] + w1 * x[1] + b).tanh();
        assert_relative_eq!(g.data(out)?, expected, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_neuron_backward_weight_gradients() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let neuron = Neuron::new(&g, 2, &mut StdRng::seed_from_u64(5));
        let x = [0.25, 2.0];
        let outputs = neuron.forward(&g, &[Operand::from(x[0]), Operand::from(x[1])])?;
        assert_eq!(outputs.len(), 1);
        g.backward(outputs[0])?;

        let t = g.data(outputs[0])?;
        let local = 1.0 - t * t;
        assert_relative_eq!(g.grad(neuron.weights()[0])?, local * x[0], epsilon = 1e-12);
        assert_relative_eq!(g.grad(neuron.weights()[1])?, local * x[1], epsilon = 1e-12);
        assert_relative_eq!(g.grad(neuron.bias())?, local, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_neuron_input_length_mismatch() {
        let g = Graph::new();
        let neuron = Neuron::new(&g, 2, &mut StdRng::seed_from_u64(0));
        let result = neuron.activate(&g, &[Operand::from(1.0)]);
        assert_eq!(
            result,
            Err(ScalarGradError::InputLengthMismatch {
                expected: 2,
                actual: 1,
                operation: "Neuron::activate".to_string()
            })
        );
    }

    #[test]
    fn test_neuron_zero_grad() -> Result<(), ScalarGradError> {
        let g = Graph::new();
        let neuron = Neuron::new(&g, 1, &mut StdRng::seed_from_u64(0));
        let out = neuron.activate(&g, &[Operand::from(1.0)])?;
        g.backward(out)?;
        assert!(g.grad(neuron.bias())? != 0.0);
        neuron.zero_grad(&g)?;
        for p in neuron.parameters() {
            assert_eq!(g.grad(p)?, 0.0);
        }
        Ok(())
    }
}
