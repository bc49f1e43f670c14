use scalargrad_core::{check_grad, Graph, NodeId, ScalarGradError};

#[allow(dead_code)]
pub const EPSILON: f64 = 1e-6;
#[allow(dead_code)]
pub const TOLERANCE: f64 = 1e-4;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs the finite-difference check of `func` at every point, panicking with
/// the operation name and point on the first failure.
#[allow(dead_code)]
pub fn assert_grads_at<F>(name: &str, func: F, points: &[&[f64]])
where
    F: Fn(&Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    for point in points {
        if let Err(err) = check_grad(&func, point, EPSILON, TOLERANCE) {
            panic!("gradient check for {} at {:?} failed: {}", name, point, err);
        }
    }
}
