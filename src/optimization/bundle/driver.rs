//! bundle::driver — the cutting-plane iteration.
//!
//! Purpose
//! -------
//! Minimize `F(w) = ½λ|w|² + L(w)` for a convex, possibly non-smooth `L`
//! known only through a first-order [`Oracle`]. Every iteration adds the
//! supporting hyperplane of `L` at the current point to a
//! [`HyperplaneStore`] and re-solves the regularized cutting-plane model
//!
//! ```text
//! min_w ½λ|w|² + max_i (⟨w,a_i⟩ + b_i)
//! ```
//!
//! through a [`QuadraticSolverBackend`].
//!
//! Key behaviors
//! -------------
//! - [`BundleOptimizer::optimize`] never returns `Err`; failures surface as
//!   [`OptimizerResult::Error`] and are logged with `tracing::error!`.
//! - The QP backend is created lazily, on the first run, from the
//!   configured factory; the objective is installed once per run
//!   ([`BundleOptimizer::setup_qp`]) and the constraint set is rebuilt every
//!   iteration ([`BundleOptimizer::find_min_lower_bound`]).
//! - Non-optimal QP solves follow [`SolvePolicy`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The store only grows during a run. It survives across runs of the same
//!   driver until [`BundleOptimizer::reset`] is called.
//! - `min_value` is non-increasing within a run.
//! - A gap below `−min_gap`, or a non-finite gap, aborts with
//!   [`OptError::GradientInconsistency`]; for a convex oracle and an exact
//!   solver the gap is finite and never negative.
//! - The weight vector is written element-wise; its length never changes.
//!
//! Conventions
//! -----------
//! - Iterations are counted from 1. `steps == 0` disables the cap; otherwise
//!   the cap is tested after the gap test, so converging on the last allowed
//!   step reports [`OptimizerResult::ReachedMinGap`].
//! - A driver is exclusive mutable state; it is neither shared nor `Sync`.
use std::fmt;

use argmin_math::ArgminL2Norm;
use tracing::{debug, error, info, info_span, warn};

use crate::optimization::{
    bundle::{
        hyperplanes::HyperplaneStore,
        subproblem::{epigraph_constraints, epigraph_objective},
        traits::{BundleOptions, BundleOutcome, IterationRecord, Oracle, OptimizerResult, SolvePolicy},
        types::WeightVector,
        validation::{validate_grad, validate_value},
    },
    errors::{OptError, OptResult},
    qp::{QpSettings, QuadraticSolverBackend, QuadraticSolverFactory, VariableType},
};

/// Constructor for the QP backend, invoked lazily on first use.
pub type SolverFactory =
    Box<dyn Fn(&QpSettings) -> OptResult<Box<dyn QuadraticSolverBackend>>>;

pub struct BundleOptimizer {
    options: BundleOptions,
    bundle: HyperplaneStore,
    solver: Option<Box<dyn QuadraticSolverBackend>>,
    factory: SolverFactory,
    outcome: Option<BundleOutcome>,
}

impl fmt::Debug for BundleOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleOptimizer")
            .field("options", &self.options)
            .field("bundle_size", &self.bundle.len())
            .field("solver", &self.solver.as_ref().map(|s| s.name()))
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl BundleOptimizer {
    /// Driver using the default QP backend.
    ///
    /// # Errors
    /// Propagates [`BundleOptions::validate`] failures.
    pub fn new(options: BundleOptions) -> OptResult<Self> {
        Self::with_solver_factory(options, Box::new(QuadraticSolverFactory::create))
    }

    /// Driver whose QP backend is built by `factory`.
    ///
    /// # Errors
    /// Propagates [`BundleOptions::validate`] failures.
    pub fn with_solver_factory(options: BundleOptions, factory: SolverFactory) -> OptResult<Self> {
        options.validate()?;
        Ok(Self { options, bundle: HyperplaneStore::new(), solver: None, factory, outcome: None })
    }

    pub fn options(&self) -> &BundleOptions {
        &self.options
    }

    pub fn bundle(&self) -> &HyperplaneStore {
        &self.bundle
    }

    /// Diagnostics of the most recent run, including aborted ones.
    pub fn outcome(&self) -> Option<&BundleOutcome> {
        self.outcome.as_ref()
    }

    /// Forget every stored hyperplane and the last outcome. The QP backend
    /// is kept.
    pub fn reset(&mut self) {
        self.bundle.clear();
        self.outcome = None;
    }

    /// Minimize `½λ|w|² + L(w)` starting from `weights`, which receives the
    /// final iterate.
    ///
    /// Returns [`OptimizerResult::ReachedMinGap`] on convergence,
    /// [`OptimizerResult::ReachedSteps`] when the iteration cap is hit, and
    /// [`OptimizerResult::Error`] when the run is aborted; `weights` then
    /// holds the last accepted iterate.
    pub fn optimize<W, O>(&mut self, oracle: &mut O, weights: &mut W) -> OptimizerResult
    where
        W: WeightVector,
        O: Oracle<W>,
    {
        let span = info_span!(
            "bundle_optimize",
            dimension = weights.number_of_parameters(),
            lambda = self.options.lambda,
            min_gap = self.options.min_gap
        );
        let _guard = span.enter();
        match self.run(oracle, weights) {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, "bundle optimization aborted");
                OptimizerResult::Error(err)
            }
        }
    }

    fn run<W, O>(&mut self, oracle: &mut O, weights: &mut W) -> OptResult<OptimizerResult>
    where
        W: WeightVector,
        O: Oracle<W>,
    {
        let dim = weights.number_of_parameters();
        self.outcome = Some(BundleOutcome::new(self.bundle.len()));
        self.setup_qp(dim)?;

        let lambda = self.options.lambda;
        let mut min_value = f64::INFINITY;
        let mut t = 0;
        loop {
            t += 1;
            let (value, grad) = oracle.evaluate(weights)?;
            validate_value(value)?;
            validate_grad(&grad, dim)?;

            min_value = min_value.min(value + 0.5 * lambda * dot(&*weights, &*weights)?);
            let intercept = value - dot(&*weights, &grad)?;
            let slope = grad.to_array();
            let grad_norm: f64 = slope.l2_norm();
            self.bundle.add_hyperplane(slope, intercept)?;

            let min_lower = self.find_min_lower_bound(weights)?;
            let gap = min_value - min_lower;
            self.log_iteration(t, value, min_value, min_lower, gap);
            if let Some(outcome) = self.outcome.as_mut() {
                outcome.grad_norm = Some(grad_norm);
                outcome.record(
                    IterationRecord { iteration: t, value, min_value, min_lower, gap },
                    self.bundle.len(),
                );
            }

            if !gap.is_finite() || gap < -self.options.min_gap {
                return Err(OptError::GradientInconsistency { gap, iteration: t });
            }
            if gap <= self.options.min_gap {
                return Ok(OptimizerResult::ReachedMinGap);
            }
            if self.options.steps > 0 && t >= self.options.steps {
                return Ok(OptimizerResult::ReachedSteps);
            }
        }
    }

    /// Install the epigraph objective for `dim` weights, creating the QP
    /// backend on first use.
    ///
    /// # Errors
    /// - [`OptError::DimensionMismatch`] if stored hyperplanes have another
    ///   arity.
    /// - [`OptError::SolverConstruction`] if the factory fails.
    /// - Backend errors from `initialize` / `set_objective`.
    pub fn setup_qp(&mut self, dim: usize) -> OptResult<()> {
        if let Some(expected) = self.bundle.dimension() {
            if expected != dim {
                return Err(OptError::DimensionMismatch { expected, found: dim });
            }
        }
        let solver = match self.solver.take() {
            Some(solver) => solver,
            None => (self.factory)(&self.options.qp).map_err(|err| match err {
                OptError::SolverConstruction { .. } => err,
                other => OptError::SolverConstruction { reason: other.to_string() },
            })?,
        };
        let solver = self.solver.insert(solver);
        solver.initialize(dim + 1, VariableType::Continuous)?;
        solver.set_objective(&epigraph_objective(dim, self.options.lambda)?)?;
        Ok(())
    }

    /// Re-solve the subproblem over every stored hyperplane, write the new
    /// weights, and return the attained lower bound.
    ///
    /// # Errors
    /// - [`OptError::SolverNotInitialized`] if [`Self::setup_qp`] was not run.
    /// - [`OptError::SolverNonOptimal`] under [`SolvePolicy::Strict`].
    /// - [`OptError::DimensionMismatch`] if the solution is too short.
    /// - Backend errors from `set_constraints` / `solve`.
    pub fn find_min_lower_bound<W: WeightVector>(&mut self, weights: &mut W) -> OptResult<f64> {
        let solver = self.solver.as_mut().ok_or(OptError::SolverNotInitialized)?;
        solver.set_constraints(&epigraph_constraints(&self.bundle))?;
        let solution = solver.solve()?;

        if !solution.is_optimal() {
            match self.options.policy {
                SolvePolicy::Strict => {
                    return Err(OptError::SolverNonOptimal {
                        status: solution.status.to_string(),
                        message: solution.message,
                    });
                }
                SolvePolicy::BestEffort => {
                    warn!(
                        solver = solver.name(),
                        status = %solution.status,
                        message = %solution.message,
                        "QP subproblem not solved to optimality; continuing with returned point"
                    );
                    if let Some(outcome) = self.outcome.as_mut() {
                        outcome.non_optimal_solves += 1;
                    }
                }
            }
        }

        let dim = weights.number_of_parameters();
        if solution.x.len() < dim {
            return Err(OptError::DimensionMismatch { expected: dim + 1, found: solution.x.len() });
        }
        for i in 0..dim {
            weights[i] = solution.x[i];
        }
        Ok(solution.value)
    }

    fn log_iteration(&self, t: usize, value: f64, min_value: f64, min_lower: f64, gap: f64) {
        if self.options.verbose {
            info!(iteration = t, value, min_value, min_lower, gap, bundle = self.bundle.len());
        } else {
            debug!(iteration = t, value, min_value, min_lower, gap, bundle = self.bundle.len());
        }
    }
}

/// Inner product `Σ a_i b_i`.
///
/// # Errors
/// [`OptError::DimensionMismatch`] if the arities differ.
pub fn dot<W: WeightVector>(a: &W, b: &W) -> OptResult<f64> {
    let (na, nb) = (a.number_of_parameters(), b.number_of_parameters());
    if na != nb {
        return Err(OptError::DimensionMismatch { expected: na, found: nb });
    }
    Ok((0..na).map(|i| a[i] * b[i]).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::qp::{
        LinearConstraints, QpStatus, QuadraticObjective, SimplexDualSolver, Solution,
    };
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The iteration on small closed-form problems.
    // - Step cap, solve policy, and abort paths.
    // - History retention across runs and `reset`.
    // - `dot`.
    //
    // They intentionally DO NOT cover:
    // - QP numerics (see `qp::simplex_dual`).
    // - Larger end-to-end problems (see the integration tests).
    // -------------------------------------------------------------------------

    fn constant_oracle(w: &Array1<f64>) -> OptResult<(f64, Array1<f64>)> {
        Ok((5.0, Array1::zeros(w.len())))
    }

    fn abs_oracle(w: &Array1<f64>) -> OptResult<(f64, Array1<f64>)> {
        let d = w[0] - 3.0;
        let slope = if d > 0.0 {
            1.0
        } else if d < 0.0 {
            -1.0
        } else {
            0.0
        };
        Ok((d.abs(), array![slope]))
    }

    /// Delegates to the default backend but reports every solve as capped.
    struct CappedSolver(SimplexDualSolver);

    impl QuadraticSolverBackend for CappedSolver {
        fn name(&self) -> &'static str {
            "capped"
        }

        fn initialize(&mut self, n: usize, domain: VariableType) -> OptResult<()> {
            self.0.initialize(n, domain)
        }

        fn set_objective(&mut self, objective: &QuadraticObjective) -> OptResult<()> {
            self.0.set_objective(objective)
        }

        fn set_constraints(&mut self, constraints: &LinearConstraints) -> OptResult<()> {
            self.0.set_constraints(constraints)
        }

        fn solve(&mut self) -> OptResult<Solution> {
            let mut solution = self.0.solve()?;
            solution.status = QpStatus::MaxIterations;
            solution.message = "forced".to_string();
            Ok(solution)
        }
    }

    fn capped_factory() -> SolverFactory {
        Box::new(|settings: &QpSettings| -> OptResult<Box<dyn QuadraticSolverBackend>> {
            Ok(Box::new(CappedSolver(SimplexDualSolver::new(*settings)?)))
        })
    }

    /// Delegates to the default backend but reports a NaN objective value.
    struct NanValueSolver(SimplexDualSolver);

    impl QuadraticSolverBackend for NanValueSolver {
        fn name(&self) -> &'static str {
            "nan-value"
        }

        fn initialize(&mut self, n: usize, domain: VariableType) -> OptResult<()> {
            self.0.initialize(n, domain)
        }

        fn set_objective(&mut self, objective: &QuadraticObjective) -> OptResult<()> {
            self.0.set_objective(objective)
        }

        fn set_constraints(&mut self, constraints: &LinearConstraints) -> OptResult<()> {
            self.0.set_constraints(constraints)
        }

        fn solve(&mut self) -> OptResult<Solution> {
            let mut solution = self.0.solve()?;
            solution.value = f64::NAN;
            Ok(solution)
        }
    }

    #[test]
    // Purpose
    // -------
    // A constant oracle converges in exactly one iteration.
    //
    // Given
    // -----
    // - L ≡ 5, ∇L ≡ 0, lambda = 1, min_gap = 1e-5, w = [0].
    //
    // Expect
    // ------
    // - `ReachedMinGap` after 1 iteration; stored plane (0, 5); w = 0; gap 0.
    fn constant_oracle_converges_in_one_iteration() {
        // Arrange
        let mut opt = BundleOptimizer::new(BundleOptions::default()).unwrap();
        let mut w = array![0.0];

        // Act
        let result = opt.optimize(&mut constant_oracle, &mut w);

        // Assert
        assert_eq!(result, OptimizerResult::ReachedMinGap);
        let outcome = opt.outcome().unwrap();
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.bundle_size, 1);
        let plane = opt.bundle().iter().next().unwrap();
        assert_eq!(plane.slope(), &array![0.0]);
        assert_eq!(plane.intercept(), 5.0);
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outcome.gap, 0.0, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // The kink of |w − 3| is found and the trace is monotone.
    //
    // Given
    // -----
    // - L(w) = |w − 3|, lambda = 0.1, w = [0].
    //
    // Expect
    // ------
    // - `ReachedMinGap`; w ≈ 3 (the minimizer of 0.05 w² + |w − 3|).
    // - `min_value` never increases along the trace; every gap ≥ −min_gap.
    fn absolute_value_converges_to_kink() {
        // Arrange
        let opts = BundleOptions::new(0.1, 1e-5, 0).unwrap();
        let mut opt = BundleOptimizer::new(opts).unwrap();
        let mut w = array![0.0];

        // Act
        let result = opt.optimize(&mut abs_oracle, &mut w);

        // Assert
        assert!(result.is_converged());
        assert_abs_diff_eq!(w[0], 3.0, epsilon = 1e-3);
        let trace = &opt.outcome().unwrap().trace;
        assert!(trace.windows(2).all(|p| p[1].min_value <= p[0].min_value));
        assert!(trace.iter().all(|r| r.gap >= -1e-5));
    }

    #[test]
    // Purpose
    // -------
    // The step cap ends the run and caps the trace length.
    //
    // Given
    // -----
    // - L(w) = |w − 3| with lambda = 0.1 and steps = 1.
    //
    // Expect
    // ------
    // - `ReachedSteps` after exactly one iteration.
    fn step_cap_stops_the_run() {
        // Arrange
        let opts = BundleOptions::new(0.1, 1e-5, 1).unwrap();
        let mut opt = BundleOptimizer::new(opts).unwrap();
        let mut w = array![0.0];

        // Act
        let result = opt.optimize(&mut abs_oracle, &mut w);

        // Assert
        assert_eq!(result, OptimizerResult::ReachedSteps);
        assert_eq!(opt.outcome().unwrap().iterations, 1);
        assert_eq!(opt.outcome().unwrap().trace.len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Converging on the last allowed step reports convergence, not the cap.
    //
    // Given
    // -----
    // - Constant oracle with steps = 1.
    //
    // Expect
    // ------
    // - `ReachedMinGap`.
    fn convergence_on_last_step_wins_over_cap() {
        // Arrange
        let opts = BundleOptions::new(1.0, 1e-5, 1).unwrap();
        let mut opt = BundleOptimizer::new(opts).unwrap();
        let mut w = array![0.0, 0.0];

        // Act / Assert
        assert_eq!(opt.optimize(&mut constant_oracle, &mut w), OptimizerResult::ReachedMinGap);
    }

    #[test]
    // Purpose
    // -------
    // Non-optimal solves abort under `Strict` and are counted under
    // `BestEffort`.
    //
    // Given
    // -----
    // - A backend that flags every solve as `MaxIterations`, constant oracle.
    //
    // Expect
    // ------
    // - Strict: `Error(SolverNonOptimal)`.
    // - Best effort: `ReachedMinGap` with one non-optimal solve recorded.
    fn solve_policy_controls_non_optimal_solves() {
        // Arrange
        let strict = BundleOptions::default().with_policy(SolvePolicy::Strict);
        let mut strict_opt = BundleOptimizer::with_solver_factory(strict, capped_factory()).unwrap();
        let mut lenient_opt =
            BundleOptimizer::with_solver_factory(BundleOptions::default(), capped_factory())
                .unwrap();

        // Act
        let strict_result = strict_opt.optimize(&mut constant_oracle, &mut array![0.0]);
        let lenient_result = lenient_opt.optimize(&mut constant_oracle, &mut array![0.0]);

        // Assert
        assert!(matches!(
            strict_result,
            OptimizerResult::Error(OptError::SolverNonOptimal { ref message, .. }) if message == "forced"
        ));
        assert_eq!(lenient_result, OptimizerResult::ReachedMinGap);
        assert_eq!(lenient_opt.outcome().unwrap().non_optimal_solves, 1);
    }

    #[test]
    // Purpose
    // -------
    // A failing factory aborts before the oracle is called.
    //
    // Given
    // -----
    // - A factory returning `InvalidParameter`.
    //
    // Expect
    // ------
    // - `Error(SolverConstruction)`; the store stays empty.
    fn factory_failure_is_a_construction_error() {
        // Arrange
        let factory: SolverFactory =
            Box::new(|_: &QpSettings| -> OptResult<Box<dyn QuadraticSolverBackend>> {
                Err(OptError::InvalidParameter { text: "no backend".to_string() })
            });
        let mut opt = BundleOptimizer::with_solver_factory(BundleOptions::default(), factory).unwrap();

        // Act
        let result = opt.optimize(&mut constant_oracle, &mut array![0.0]);

        // Assert
        assert!(matches!(result, OptimizerResult::Error(OptError::SolverConstruction { .. })));
        assert!(opt.bundle().is_empty());
    }

    #[test]
    // Purpose
    // -------
    // An oracle whose gradient contradicts its values is reported.
    //
    // Given
    // -----
    // - L ≡ 5 but ∇L ≡ 1, lambda = 1, w = [0].
    //
    // Expect
    // ------
    // - `Error(GradientInconsistency)` at iteration 2 with gap −0.5.
    fn inconsistent_oracle_is_reported() {
        // Arrange
        let mut oracle = |_: &Array1<f64>| -> OptResult<(f64, Array1<f64>)> { Ok((5.0, array![1.0])) };
        let mut opt = BundleOptimizer::new(BundleOptions::default()).unwrap();

        // Act
        let result = opt.optimize(&mut oracle, &mut array![0.0]);

        // Assert
        match result {
            OptimizerResult::Error(OptError::GradientInconsistency { gap, iteration }) => {
                assert_eq!(iteration, 2);
                assert_abs_diff_eq!(gap, -0.5, epsilon = 1e-6);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // A NaN gap is rejected instead of slipping past every comparison.
    //
    // Given
    // -----
    // - A backend whose solutions report a NaN objective value, and a
    //   constant oracle with a step cap of 5.
    //
    // Expect
    // ------
    // - `GradientInconsistency` at iteration 1 carrying the NaN gap, with a
    //   single stored plane.
    fn non_finite_gap_is_an_inconsistency() {
        // Arrange
        let factory: SolverFactory =
            Box::new(|settings: &QpSettings| -> OptResult<Box<dyn QuadraticSolverBackend>> {
                Ok(Box::new(NanValueSolver(SimplexDualSolver::new(*settings)?)))
            });
        let options = BundleOptions { steps: 5, ..BundleOptions::default() };
        let mut opt = BundleOptimizer::with_solver_factory(options, factory).unwrap();

        // Act
        let result = opt.optimize(&mut constant_oracle, &mut array![0.0]);

        // Assert
        match result {
            OptimizerResult::Error(OptError::GradientInconsistency { gap, iteration }) => {
                assert_eq!(iteration, 1);
                assert!(gap.is_nan());
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(opt.bundle().len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // History persists across runs until `reset`, and a run of another
    // dimension is rejected while it does.
    //
    // Given
    // -----
    // - One 1-d run, then a 2-d run, then `reset` and the 2-d run again.
    //
    // Expect
    // ------
    // - `DimensionMismatch { expected: 1, found: 2 }`, then `ReachedMinGap`.
    fn history_is_kept_until_reset() {
        // Arrange
        let mut opt = BundleOptimizer::new(BundleOptions::default()).unwrap();
        opt.optimize(&mut constant_oracle, &mut array![0.0]);
        assert_eq!(opt.bundle().len(), 1);

        // Act
        let mismatch = opt.optimize(&mut constant_oracle, &mut array![0.0, 0.0]);
        opt.reset();
        let fresh = opt.optimize(&mut constant_oracle, &mut array![0.0, 0.0]);

        // Assert
        assert_eq!(
            mismatch,
            OptimizerResult::Error(OptError::DimensionMismatch { expected: 1, found: 2 })
        );
        assert_eq!(fresh, OptimizerResult::ReachedMinGap);
        assert_eq!(opt.bundle().dimension(), Some(2));
        assert_eq!(opt.options(), &BundleOptions::default());
    }

    #[test]
    // Purpose
    // -------
    // Oracle errors and bad gradients abort the run.
    //
    // Given
    // -----
    // - An oracle returning a gradient of the wrong length.
    // - An oracle failing outright.
    //
    // Expect
    // ------
    // - `DimensionMismatch`, then the oracle's own error.
    fn oracle_errors_abort() {
        // Arrange
        let mut short = |_: &Vec<f64>| -> OptResult<(f64, Vec<f64>)> { Ok((1.0, vec![0.0])) };
        let mut failing = |_: &Vec<f64>| -> OptResult<(f64, Vec<f64>)> {
            Err(OptError::OracleFailure { text: "boom".to_string() })
        };
        let mut opt = BundleOptimizer::new(BundleOptions::default()).unwrap();

        // Act
        let r1 = opt.optimize(&mut short, &mut vec![0.0, 0.0]);
        let r2 = opt.optimize(&mut failing, &mut vec![0.0, 0.0]);

        // Assert
        assert_eq!(r1, OptimizerResult::Error(OptError::DimensionMismatch { expected: 2, found: 1 }));
        assert_eq!(r2, OptimizerResult::Error(OptError::OracleFailure { text: "boom".to_string() }));
    }

    #[test]
    // Purpose
    // -------
    // `dot` is the standard inner product and checks arity.
    //
    // Given
    // -----
    // - (1, 2, 3)·(4, 5, 6) and a 3-vector against a 4-vector.
    //
    // Expect
    // ------
    // - 32; `DimensionMismatch { expected: 3, found: 4 }`.
    fn dot_is_product_sum() {
        assert_eq!(dot(&vec![1.0, 2.0, 3.0], &vec![4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(
            dot(&vec![1.0, 2.0, 3.0], &vec![1.0, 2.0, 3.0, 4.0]).unwrap_err(),
            OptError::DimensionMismatch { expected: 3, found: 4 }
        );
    }
}
