//! Validation helpers for the bundle optimizer.
//!
//! - **Configuration**: [`verify_lambda`], [`verify_min_gap`] require finite,
//!   strictly positive values.
//! - **Oracle output**: [`validate_value`] and [`validate_grad`] reject
//!   non-finite values and gradients of the wrong arity before they reach
//!   the hyperplane store.
use crate::optimization::{
    bundle::types::WeightVector,
    errors::{OptError, OptResult},
};

/// Validate the regularizer weight.
///
/// # Errors
/// Returns [`OptError::InvalidLambda`] if the value is non-finite or ≤ 0.0.
pub fn verify_lambda(lambda: f64) -> OptResult<()> {
    if !lambda.is_finite() {
        return Err(OptError::InvalidLambda { value: lambda, reason: "Lambda must be finite." });
    }
    if lambda <= 0.0 {
        return Err(OptError::InvalidLambda { value: lambda, reason: "Lambda must be positive." });
    }
    Ok(())
}

/// Validate the convergence threshold.
///
/// # Errors
/// Returns [`OptError::InvalidMinGap`] if the value is non-finite or ≤ 0.0.
pub fn verify_min_gap(min_gap: f64) -> OptResult<()> {
    if !min_gap.is_finite() {
        return Err(OptError::InvalidMinGap { value: min_gap, reason: "Gap must be finite." });
    }
    if min_gap <= 0.0 {
        return Err(OptError::InvalidMinGap { value: min_gap, reason: "Gap must be positive." });
    }
    Ok(())
}

/// Validate an oracle value.
///
/// # Errors
/// Returns [`OptError::NonFiniteValue`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteValue { value });
    }
    Ok(())
}

/// Validate an oracle subgradient against dimension and finiteness.
///
/// # Errors
/// - [`OptError::DimensionMismatch`] if the arity differs from `dim`.
/// - [`OptError::InvalidGradient`] with the first non-finite entry.
pub fn validate_grad<W: WeightVector>(grad: &W, dim: usize) -> OptResult<()> {
    let found = grad.number_of_parameters();
    if found != dim {
        return Err(OptError::DimensionMismatch { expected: dim, found });
    }
    for index in 0..dim {
        let value = grad[index];
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}
