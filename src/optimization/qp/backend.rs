//! qp::backend — QP solver capability, settings, and factory.
//!
//! Purpose
//! -------
//! Describe what the bundle driver needs from a quadratic-programming
//! solver without committing to an implementation. A backend is
//! initialized with a variable count and domain, receives a fixed
//! objective once, receives a full constraint set on every iteration, and
//! returns a [`Solution`].
//!
//! Key behaviors
//! -------------
//! - [`QuadraticSolverBackend`]: the four-call contract
//!   (`initialize`, `set_objective`, `set_constraints`, `solve`).
//! - [`Solution`]: point, objective value, [`QpStatus`], and a diagnostic
//!   message; a non-optimal status is data, not an error.
//! - [`QpSettings`]: validated tolerance / iteration cap shared by backends.
//! - [`QuadraticSolverFactory`]: builds the default backend
//!   ([`SimplexDualSolver`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `set_constraints` replaces the active set; backends keep no memory of
//!   earlier constraint sets.
//! - `Solution::x` has one entry per initialized variable.
//! - Backends are exclusive mutable state; they are not shared between
//!   drivers and need not be `Sync`.
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::optimization::{
    errors::{OptError, OptResult},
    qp::{
        constraints::LinearConstraints, objective::QuadraticObjective,
        simplex_dual::SimplexDualSolver,
    },
};

/// Default stopping tolerance for backends (relative duality gap).
pub const DEFAULT_QP_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for backends.
pub const DEFAULT_QP_MAX_ITER: usize = 100_000;

/// Domain of the QP variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Continuous,
    Integer,
    Binary,
}

/// Termination status reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QpStatus {
    /// Solved to the configured tolerance.
    Optimal,
    /// The objective is unbounded below on the feasible set.
    Unbounded,
    /// Iteration cap hit before the tolerance was met.
    MaxIterations,
}

impl std::fmt::Display for QpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QpStatus::Optimal => write!(f, "optimal"),
            QpStatus::Unbounded => write!(f, "unbounded"),
            QpStatus::MaxIterations => write!(f, "max iterations"),
        }
    }
}

/// Result of one `solve` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Assignment to every variable, in initialization order.
    pub x: Array1<f64>,
    /// Objective value at `x`.
    pub value: f64,
    pub status: QpStatus,
    /// Human-readable diagnostic; empty when there is nothing to report.
    pub message: String,
}

impl Solution {
    pub fn is_optimal(&self) -> bool {
        self.status == QpStatus::Optimal
    }
}

/// The QP solver capability consumed by the bundle driver.
pub trait QuadraticSolverBackend {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Prepare for a problem with `num_variables` variables over `domain`.
    /// Discards any previously installed objective and constraints.
    fn initialize(&mut self, num_variables: usize, domain: VariableType) -> OptResult<()>;

    /// Install the objective. It is not expected to change afterwards.
    fn set_objective(&mut self, objective: &QuadraticObjective) -> OptResult<()>;

    /// Replace the active constraint set wholesale.
    fn set_constraints(&mut self, constraints: &LinearConstraints) -> OptResult<()>;

    /// Solve the current problem.
    ///
    /// A non-optimal outcome is reported through [`Solution::status`];
    /// `Err` is reserved for problems the backend cannot attempt at all.
    fn solve(&mut self) -> OptResult<Solution>;
}

/// Numerical settings shared by QP backends.
///
/// - `tolerance`: relative duality-gap threshold for declaring optimality.
/// - `max_iter`: hard cap on inner iterations per `solve`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QpSettings {
    pub tolerance: f64,
    pub max_iter: usize,
}

impl QpSettings {
    /// Construct validated settings.
    ///
    /// # Errors
    /// - [`OptError::InvalidQpTolerance`] if `tolerance` is non-finite or ≤ 0.
    /// - [`OptError::InvalidQpMaxIter`] if `max_iter == 0`.
    pub fn new(tolerance: f64, max_iter: usize) -> OptResult<Self> {
        let settings = Self { tolerance, max_iter };
        settings.validate()?;
        Ok(settings)
    }

    /// Re-check settings, e.g. after deserialization.
    pub fn validate(&self) -> OptResult<()> {
        if !self.tolerance.is_finite() {
            return Err(OptError::InvalidQpTolerance {
                value: self.tolerance,
                reason: "Tolerance must be finite.",
            });
        }
        if self.tolerance <= 0.0 {
            return Err(OptError::InvalidQpTolerance {
                value: self.tolerance,
                reason: "Tolerance must be positive.",
            });
        }
        if self.max_iter == 0 {
            return Err(OptError::InvalidQpMaxIter {
                value: self.max_iter,
                reason: "Iteration cap must be greater than zero.",
            });
        }
        Ok(())
    }
}

impl Default for QpSettings {
    fn default() -> Self {
        Self { tolerance: DEFAULT_QP_TOLERANCE, max_iter: DEFAULT_QP_MAX_ITER }
    }
}

/// Builds the default QP backend.
pub struct QuadraticSolverFactory;

impl QuadraticSolverFactory {
    /// Create the default backend configured with `settings`.
    ///
    /// # Errors
    /// [`OptError::SolverConstruction`] if the settings are rejected.
    pub fn create(settings: &QpSettings) -> OptResult<Box<dyn QuadraticSolverBackend>> {
        let solver = SimplexDualSolver::new(*settings)
            .map_err(|err| OptError::SolverConstruction { reason: err.to_string() })?;
        Ok(Box::new(solver))
    }
}
