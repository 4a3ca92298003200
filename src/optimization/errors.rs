//! optimization::errors — unified error surface for the bundle optimizer.
//!
//! Purpose
//! -------
//! Collect every failure the optimization layer can produce (invalid
//! configuration, misbehaving oracles, QP backend problems, and errors
//! bridged from `argmin`) into a single enum, [`OptError`], with a shared
//! result alias [`OptResult`].
//!
//! Key behaviors
//! -------------
//! - Attach a human-readable `Display` message (via `thiserror`) to each
//!   variant, embedding the offending values.
//! - Convert `argmin::core::Error` values into [`OptError`], recovering our
//!   own variants when they were wrapped on the way through argmin.
//! - Map [`OptError`] into `PyValueError` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Variants are cheap to clone and compare; payloads are plain numbers or
//!   strings.
//! - Dimension and construction failures abort an `optimize` call; QP
//!   non-optimality is only an error under the strict solve policy.
//!
//! Testing notes
//! -------------
//! - Unit tests check payload embedding in `Display` and the argmin
//!   conversion paths.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use argmin::core::{ArgminError, Error};
use thiserror::Error;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptError {
    // ---- Configuration ----
    /// Regularizer weight needs to be positive and finite.
    #[error("Invalid regularizer weight lambda {value}: {reason}")]
    InvalidLambda { value: f64, reason: &'static str },

    /// Convergence threshold needs to be positive and finite.
    #[error("Invalid minimal gap {value}: {reason}")]
    InvalidMinGap { value: f64, reason: &'static str },

    /// QP tolerance needs to be positive and finite.
    #[error("Invalid QP tolerance {value}: {reason}")]
    InvalidQpTolerance { value: f64, reason: &'static str },

    /// QP iteration cap needs to be positive.
    #[error("Invalid QP iteration cap {value}: {reason}")]
    InvalidQpMaxIter { value: usize, reason: &'static str },

    // ---- Oracle ----
    /// Oracle returned a non-finite objective value.
    #[error("Oracle returned a non-finite value: {value}")]
    NonFiniteValue { value: f64 },

    /// Oracle returned a gradient with a non-finite entry.
    #[error("Invalid gradient at index {index}: {value}: {reason}")]
    InvalidGradient { index: usize, value: f64, reason: &'static str },

    /// Oracle could not evaluate the point.
    #[error("Oracle failure: {text}")]
    OracleFailure { text: String },

    // ---- Bundle method ----
    /// The QP backend could not be created.
    #[error("QP solver could not be constructed: {reason}")]
    SolverConstruction { reason: String },

    /// The QP backend did not reach optimality (strict policy only).
    #[error("QP could not be solved to optimality ({status}): {message}")]
    SolverNonOptimal { status: String, message: String },

    /// Two vectors that must share an arity do not.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The convergence gap became negative beyond tolerance.
    #[error(
        "Negative convergence gap {gap} at iteration {iteration}: oracle is not convex or the QP was under-solved"
    )]
    GradientInconsistency { gap: f64, iteration: usize },

    // ---- QP capability ----
    /// `solve`/`set_objective` called before `initialize`.
    #[error("QP solver was not initialized")]
    SolverNotInitialized,

    /// `solve` called before an objective was installed.
    #[error("QP objective was not set")]
    ObjectiveNotSet,

    /// The backend only handles the listed variable domain.
    #[error("Unsupported variable type {found}: only continuous variables are supported")]
    UnsupportedVariableType { found: String },

    /// Objective outside the class the backend can solve.
    #[error("Unsupported QP objective: {reason}")]
    UnsupportedObjective { reason: &'static str },

    /// Constraint outside the class the backend can solve.
    #[error("Unsupported QP constraint {index}: {reason}")]
    UnsupportedConstraint { index: usize, reason: &'static str },

    /// A coefficient refers to a variable the problem does not have.
    #[error("Variable index {index} out of range for {num_variables} variables")]
    VariableOutOfRange { index: usize, num_variables: usize },

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    #[error("Invalid parameter: {text}")]
    InvalidParameter { text: String },

    /// Wrapper for argmin::NotImplemented
    #[error("Not implemented: {text}")]
    NotImplemented { text: String },

    /// Wrapper for argmin::NotInitialized
    #[error("Not initialized: {text}")]
    NotInitialized { text: String },

    /// Wrapper for argmin::ConditionViolated
    #[error("Condition violated: {text}")]
    ConditionViolated { text: String },

    /// Wrapper for argmin::PotentialBug
    #[error("Potential bug: {text}")]
    PotentialBug { text: String },

    /// Wrapper for other argmin::Error types
    #[error("Backend error: {text}")]
    BackendError { text: String },
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                other => OptError::BackendError { text: other.to_string() },
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(format!("OptError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` messages.
    // - Conversion of argmin errors (and wrapped `OptError`s) into `OptError`.
    //
    // They intentionally DO NOT cover:
    // - The `From<OptError> for PyErr` conversion, which needs the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `DimensionMismatch` reports both arities.
    //
    // Given
    // -----
    // - `OptError::DimensionMismatch { expected: 3, found: 4 }`.
    //
    // Expect
    // ------
    // - The message contains "3" and "4".
    fn dimension_mismatch_display_embeds_both_lengths() {
        // Arrange
        let err = OptError::DimensionMismatch { expected: 3, found: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3') && msg.contains('4'), "unexpected message: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure a wrapped argmin error is mapped onto the matching variant.
    //
    // Given
    // -----
    // - `ArgminError::NotImplemented` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from` yields `OptError::NotImplemented` with the same text.
    fn argmin_not_implemented_maps_to_not_implemented() {
        // Arrange
        let err: Error = ArgminError::NotImplemented { text: "hessian".to_string() }.into();

        // Act
        let converted = OptError::from(err);

        // Assert
        assert_eq!(converted, OptError::NotImplemented { text: "hessian".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Ensure an `OptError` that travelled through argmin comes back intact.
    //
    // Given
    // -----
    // - `OptError::NonFiniteValue` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - Converting back yields the original variant, not `BackendError`.
    fn wrapped_opt_error_round_trips_through_argmin() {
        // Arrange
        let original = OptError::NonFiniteValue { value: f64::INFINITY };
        let err: Error = original.clone().into();

        // Act
        let converted = OptError::from(err);

        // Assert
        assert_eq!(converted, original);
    }

    #[test]
    // Purpose
    // -------
    // Check that foreign errors fall back to `BackendError`.
    //
    // Given
    // -----
    // - An `std::io::Error` wrapped in `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::BackendError` containing the io error text.
    fn foreign_error_falls_back_to_backend_error() {
        // Arrange
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: Error = io.into();

        // Act
        let converted = OptError::from(err);

        // Assert
        match converted {
            OptError::BackendError { text } => assert!(text.contains("disk on fire")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
