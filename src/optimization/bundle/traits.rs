//! bundle::traits — oracle contract, configuration, and run results.
//!
//! Purpose
//! -------
//! Define the user-facing types of the bundle optimizer: the [`Oracle`]
//! capability callers implement, the [`BundleOptions`] configuration, the
//! enumerated [`OptimizerResult`], and the [`BundleOutcome`] diagnostics
//! recorded for every run.
//!
//! Key behaviors
//! -------------
//! - Any `FnMut(&W) -> OptResult<(f64, W)>` closure is an [`Oracle`].
//! - [`BundleOptions`] is validated on construction and deserializable with
//!   `serde` (missing fields take their defaults).
//! - [`SolvePolicy`] makes the treatment of non-optimal QP solves explicit.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lambda > 0` and `min_gap > 0` for every validated [`BundleOptions`].
//! - `steps == 0` means no iteration cap.
//! - [`BundleOutcome::trace`] holds one record per completed iteration, in
//!   order; its `min_value` column is non-increasing.
use serde::{Deserialize, Serialize};

use crate::optimization::{
    bundle::validation::{verify_lambda, verify_min_gap},
    errors::{OptError, OptResult},
    qp::QpSettings,
};

/// First-order oracle for a convex, possibly non-smooth objective `L(w)`.
///
/// `evaluate(w)` returns `(L(w), a)` with `a ∈ ∂L(w)`. The gradient must
/// have the same arity as `w`. Convexity is assumed, not checked; a
/// violation typically shows up as [`OptError::GradientInconsistency`].
pub trait Oracle<W> {
    fn evaluate(&mut self, point: &W) -> OptResult<(f64, W)>;
}

impl<W, F> Oracle<W> for F
where
    F: FnMut(&W) -> OptResult<(f64, W)>,
{
    fn evaluate(&mut self, point: &W) -> OptResult<(f64, W)> {
        self(point)
    }
}

/// How the driver reacts to a QP solve that is not optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolvePolicy {
    /// Log a warning and adopt the returned point.
    #[default]
    BestEffort,
    /// Abort the run with [`OptError::SolverNonOptimal`].
    Strict,
}

/// Bundle-method configuration.
///
/// - `lambda`: regularizer weight, `0.5·lambda·|w|²`.
/// - `min_gap`: stop once `min_value − min_lower ≤ min_gap`.
/// - `steps`: iteration cap, `0` = unlimited.
/// - `policy`: reaction to non-optimal QP solves.
/// - `qp`: settings handed to the default QP backend.
/// - `verbose`: log per-iteration progress at `info` instead of `debug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleOptions {
    pub lambda: f64,
    pub min_gap: f64,
    pub steps: usize,
    pub policy: SolvePolicy,
    pub qp: QpSettings,
    pub verbose: bool,
}

impl BundleOptions {
    /// Create validated options with the default policy and QP settings.
    ///
    /// # Errors
    /// - [`OptError::InvalidLambda`] if `lambda` is non-finite or ≤ 0.
    /// - [`OptError::InvalidMinGap`] if `min_gap` is non-finite or ≤ 0.
    pub fn new(lambda: f64, min_gap: f64, steps: usize) -> OptResult<Self> {
        let opts = Self { lambda, min_gap, steps, ..Self::default() };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_policy(mut self, policy: SolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// # Errors
    /// Propagates [`QpSettings::validate`] failures.
    pub fn with_qp_settings(mut self, qp: QpSettings) -> OptResult<Self> {
        qp.validate()?;
        self.qp = qp;
        Ok(self)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Re-check every field, e.g. after deserialization.
    pub fn validate(&self) -> OptResult<()> {
        verify_lambda(self.lambda)?;
        verify_min_gap(self.min_gap)?;
        self.qp.validate()
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            lambda: 1.0,
            min_gap: 1e-5,
            steps: 0,
            policy: SolvePolicy::BestEffort,
            qp: QpSettings::default(),
            verbose: false,
        }
    }
}

/// How an `optimize` call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizerResult {
    /// The convergence gap fell to `min_gap` or below.
    ReachedMinGap,
    /// The iteration cap was hit first.
    ReachedSteps,
    /// The run was aborted.
    Error(OptError),
}

impl OptimizerResult {
    pub fn is_converged(&self) -> bool {
        matches!(self, OptimizerResult::ReachedMinGap)
    }

    pub fn error(&self) -> Option<&OptError> {
        match self {
            OptimizerResult::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptimizerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizerResult::ReachedMinGap => write!(f, "ReachedMinGap"),
            OptimizerResult::ReachedSteps => write!(f, "ReachedSteps"),
            OptimizerResult::Error(err) => write!(f, "Error: {err}"),
        }
    }
}

/// Diagnostics of one bundle iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    /// `L(w_{t−1})`.
    pub value: f64,
    /// `min_i L(w_i) + ½λ|w_i|²` so far.
    pub min_value: f64,
    /// Optimal value of the current subproblem.
    pub min_lower: f64,
    /// `min_value − min_lower`.
    pub gap: f64,
}

/// Summary of the most recent `optimize` call.
///
/// - `iterations`: completed iterations.
/// - `min_value`, `min_lower`, `gap`: values at the last iteration
///   (`+∞`, `−∞`, `+∞` before the first one completes).
/// - `bundle_size`: hyperplanes held by the driver, including those kept
///   from earlier runs.
/// - `non_optimal_solves`: QP solves adopted despite a non-optimal status.
/// - `grad_norm`: Euclidean norm of the last subgradient, if any.
/// - `trace`: one [`IterationRecord`] per iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOutcome {
    pub iterations: usize,
    pub min_value: f64,
    pub min_lower: f64,
    pub gap: f64,
    pub bundle_size: usize,
    pub non_optimal_solves: usize,
    pub grad_norm: Option<f64>,
    pub trace: Vec<IterationRecord>,
}

impl BundleOutcome {
    pub(crate) fn new(bundle_size: usize) -> Self {
        Self {
            iterations: 0,
            min_value: f64::INFINITY,
            min_lower: f64::NEG_INFINITY,
            gap: f64::INFINITY,
            bundle_size,
            non_optimal_solves: 0,
            grad_norm: None,
            trace: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, record: IterationRecord, bundle_size: usize) {
        self.iterations = record.iteration;
        self.min_value = record.min_value;
        self.min_lower = record.min_lower;
        self.gap = record.gap;
        self.bundle_size = bundle_size;
        self.trace.push(record);
    }
}
