//! Adapter that exposes an `argmin` problem as a bundle [`Oracle`].
//!
//! Any type implementing `argmin`'s `CostFunction` and `Gradient` over
//! `Array1<f64>` can be minimized by the bundle method. For non-smooth
//! objectives, `Gradient::gradient` is expected to return a subgradient.
use argmin::core::{CostFunction, Gradient};

use crate::optimization::{
    bundle::{
        traits::Oracle,
        types::{Grad, Weights},
    },
    errors::OptResult,
};

/// Bridges an `argmin` problem to [`Oracle`].
///
/// - `evaluate(w)` returns `(cost(w), gradient(w))`.
/// - `argmin` errors are converted into [`crate::optimization::errors::OptError`],
///   recovering the original variant when the problem raised one.
#[derive(Debug, Clone)]
pub struct ArgminOracle<P> {
    problem: P,
}

impl<P> ArgminOracle<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }
}

impl<P> Oracle<Weights> for ArgminOracle<P>
where
    P: CostFunction<Param = Weights, Output = f64> + Gradient<Param = Weights, Gradient = Grad>,
{
    fn evaluate(&mut self, point: &Weights) -> OptResult<(f64, Grad)> {
        let value = self.problem.cost(point)?;
        let grad = self.problem.gradient(point)?;
        Ok((value, grad))
    }
}
