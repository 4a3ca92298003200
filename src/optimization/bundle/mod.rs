//! bundle — regularized cutting-plane (bundle) method for convex,
//! possibly non-smooth objectives.
//!
//! Purpose
//! -------
//! Minimize `F(w) = ½λ|w|² + L(w)` where `L` is convex and known only
//! through a first-order oracle returning `(L(w), a ∈ ∂L(w))`. Callers
//! implement (or close over) [`Oracle`], configure [`BundleOptions`], and run
//! [`BundleOptimizer::optimize`].
//!
//! Key behaviors
//! -------------
//! - Each iteration turns the oracle answer into the supporting hyperplane
//!   `⟨w,a_t⟩ + b_t`, `b_t = L(w_{t−1}) − ⟨w_{t−1},a_t⟩`, appends it to the
//!   [`HyperplaneStore`], and re-solves the QP built by [`subproblem`].
//! - Stops with [`OptimizerResult::ReachedMinGap`] once the best regularized
//!   value seen minus the model's lower bound is at most `min_gap`, or with
//!   [`OptimizerResult::ReachedSteps`] at the configured cap.
//! - `argmin` problems plug in through [`adapter::ArgminOracle`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `L` is convex; this is assumed, not checked. Inconsistent oracles are
//!   caught by the negative-gap test.
//! - Weights and gradients share one arity for the lifetime of a driver's
//!   hyperplane history.
//!
//! Conventions
//! -----------
//! - Weight containers are generic over [`WeightVector`]; stored planes and
//!   QP solutions use `Array1<f64>` ([`Weights`], [`Grad`]).
//! - Errors are [`OptError`](crate::optimization::errors::OptError) values;
//!   the top-level `optimize` folds them into [`OptimizerResult::Error`].
//!
//! Downstream usage
//! ----------------
//! - Rust callers: `BundleOptimizer::new(opts)?.optimize(&mut oracle, &mut w)`,
//!   then inspect [`BundleOptimizer::outcome`].
//! - Python callers go through the `BundleMethod` class of the crate root.
//!
//! Testing notes
//! -------------
//! - Unit tests next to each submodule cover validation, store bookkeeping,
//!   QP formulation, and driver control flow on closed-form problems.
//! - `tests/integration_bundle_pipeline.rs` runs full problems end to end.

pub mod adapter;
pub mod driver;
pub mod hyperplanes;
pub mod subproblem;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adapter::ArgminOracle;
pub use self::driver::{BundleOptimizer, SolverFactory, dot};
pub use self::hyperplanes::{Hyperplane, HyperplaneStore};
pub use self::traits::{
    BundleOptions, BundleOutcome, IterationRecord, Oracle, OptimizerResult, SolvePolicy,
};
pub use self::types::{Grad, WeightVector, Weights};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_bundle::optimization::bundle::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::adapter::ArgminOracle;
    pub use super::driver::BundleOptimizer;
    pub use super::traits::{BundleOptions, Oracle, OptimizerResult, SolvePolicy};
    pub use super::types::{Grad, WeightVector, Weights};
}
