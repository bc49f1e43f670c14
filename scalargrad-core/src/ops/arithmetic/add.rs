use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::Operand;

impl Graph {
    /// `a + b`. Local derivatives: 1 and 1.
    pub fn add(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = (a.into(), b.into());
        self.build_atomic(|g| {
            let a = a.resolve(g)?;
            let b = b.resolve(g)?;
            let data = g.data(a)? + g.data(b)?;
            Ok(g.record(data, Op::Add(a, b)))
        })
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
