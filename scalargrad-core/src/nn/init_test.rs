#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::nn::init::{uniform, uniform_vec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_allocates_leaves_in_range() {
        let g = Graph::new();
        let mut rng = StdRng::seed_from_u64(7);
        let ids = uniform_vec(&g, &mut rng, 50, -0.5, 0.5);
        assert_eq!(ids.len(), 50);
        assert_eq!(g.len(), 50);
        for id in ids {
            let value = g.data(id).unwrap();
            assert!((-0.5..0.5).contains(&value));
            assert!(g.op(id).unwrap().is_leaf());
        }
    }

    #[test]
    fn test_uniform_is_deterministic_for_seed() {
        let g = Graph::new();
        let a = uniform(&g, &mut StdRng::seed_from_u64(1), 0.0, 1.0);
        let b = uniform(&g, &mut StdRng::seed_from_u64(1), 0.0, 1.0);
        assert_eq!(g.data(a).unwrap(), g.data(b).unwrap());
    }
}
