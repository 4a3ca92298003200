//! rust_bundle — regularized bundle method for convex, non-smooth
//! minimization, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the bundle optimizer to Python via the `_rust_bundle` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing class and submodule used by the `rust_bundle` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`optimization`) as the public crate
//!   surface.
//! - Define the `BundleMethod` `#[pyclass]` and the `#[pymodule]`
//!   initializer for the `_rust_bundle` Python extension.
//! - Register the `rust_bundle.bundle` submodule in `sys.modules` so that
//!   dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in `optimization`; this file performs only FFI
//!   glue, input conversion, and error mapping.
//! - Python oracles are called synchronously while the GIL is held.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are `OptError` values internally and become
//!   `ValueError` at the PyO3 boundary; exceptions raised by a Python oracle
//!   are re-raised unchanged.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `optimization` directly and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_bundle_pipeline.rs`.

pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::bundle::{BundleOptimizer, BundleOptions, OptimizerResult, SolvePolicy},
    utils::{PyOracle, extract_f64_array},
};

/// BundleMethod — Python-facing wrapper around [`BundleOptimizer`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `BundleMethod(lambda_=1.0, min_gap=1e-5, steps=0, strict=False)`:
/// - `lambda_`: regularizer weight, finite and > 0.
/// - `min_gap`: convergence threshold, finite and > 0.
/// - `steps`: iteration cap, `0` for none.
/// - `strict`: abort on non-optimal QP solves instead of continuing.
///
/// Notes
/// -----
/// - Hyperplanes accumulate across `optimize` calls until `reset()`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_bundle.bundle", unsendable)]
pub struct BundleMethod {
    inner: BundleOptimizer,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl BundleMethod {
    #[new]
    #[pyo3(
        signature = (lambda_ = 1.0, min_gap = 1e-5, steps = 0, strict = false),
        text_signature = "(lambda_=1.0, min_gap=1e-5, steps=0, strict=False)"
    )]
    pub fn new(lambda_: f64, min_gap: f64, steps: usize, strict: bool) -> PyResult<Self> {
        let policy = if strict { SolvePolicy::Strict } else { SolvePolicy::BestEffort };
        let opts = BundleOptions::new(lambda_, min_gap, steps)?.with_policy(policy);
        Ok(BundleMethod { inner: BundleOptimizer::new(opts)? })
    }

    /// Minimize `0.5 * lambda_ * |w|^2 + oracle(w)` starting from `w0`.
    ///
    /// `oracle(w)` must return `(value, subgradient)`. Returns
    /// `(status, weights)` with status `"ReachedMinGap"` or `"ReachedSteps"`;
    /// aborted runs raise.
    #[pyo3(signature = (oracle, w0), text_signature = "(self, oracle, w0, /)")]
    pub fn optimize<'py>(
        &mut self, py: Python<'py>, oracle: &Bound<'py, PyAny>, w0: &Bound<'py, PyAny>,
    ) -> PyResult<(String, Bound<'py, PyArray1<f64>>)> {
        if !oracle.is_callable() {
            return Err(PyTypeError::new_err("oracle must be callable"));
        }
        let mut weights = extract_f64_array(py, w0)?.as_array().to_owned();
        let mut py_oracle = PyOracle::new(oracle.clone());

        let result = self.inner.optimize(&mut py_oracle, &mut weights);
        if let Some(err) = py_oracle.take_error() {
            return Err(err);
        }
        match result {
            OptimizerResult::Error(err) => Err(err.into()),
            done => Ok((done.to_string(), weights.into_pyarray(py))),
        }
    }

    /// Drop all stored hyperplanes.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.outcome().map_or(0, |o| o.iterations)
    }

    #[getter]
    pub fn gap(&self) -> Option<f64> {
        self.inner.outcome().map(|o| o.gap)
    }

    #[getter]
    pub fn bundle_size(&self) -> usize {
        self.inner.bundle().len()
    }
}

/// Python module initializer for `_rust_bundle`.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_bundle<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let bundle_mod = PyModule::new(_py, "bundle")?;
    bundle_mod.add_class::<BundleMethod>()?;
    m.add_submodule(&bundle_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_bundle.bundle", bundle_mod)?;
    Ok(())
}
