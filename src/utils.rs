//! utils — PyO3 glue shared by the Python bindings.
//!
//! - [`extract_f64_array`]: accept numpy arrays, pandas Series, or plain
//!   sequences as a contiguous `float64` view.
//! - [`PyOracle`]: a Python callable `f(w) -> (value, gradient)` as a bundle
//!   [`Oracle`](crate::optimization::bundle::Oracle).
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::optimization::{
    bundle::Oracle,
    errors::{OptError, OptResult},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Python callable `f(w) -> (value, gradient)` used as an oracle.
///
/// The first Python exception raised by the callable is kept so the binding
/// can re-raise it unchanged; the driver only sees
/// [`OptError::OracleFailure`].
#[cfg(feature = "python-bindings")]
pub struct PyOracle<'py> {
    callable: Bound<'py, PyAny>,
    error: Option<PyErr>,
}

#[cfg(feature = "python-bindings")]
impl<'py> PyOracle<'py> {
    pub fn new(callable: Bound<'py, PyAny>) -> Self {
        Self { callable, error: None }
    }

    /// The Python exception that aborted the run, if any.
    pub fn take_error(&mut self) -> Option<PyErr> {
        self.error.take()
    }

    fn fail(&mut self, err: PyErr) -> OptError {
        let text = err.to_string();
        if self.error.is_none() {
            self.error = Some(err);
        }
        OptError::OracleFailure { text }
    }

    fn call(&self, point: &Array1<f64>) -> PyResult<(f64, Array1<f64>)> {
        let py = self.callable.py();
        let arg = point.clone().into_pyarray(py);
        let (value, raw_grad): (f64, Bound<'py, PyAny>) = self.callable.call1((arg,))?.extract()?;
        let grad = extract_f64_array(py, &raw_grad)?.as_array().to_owned();
        Ok((value, grad))
    }
}

#[cfg(feature = "python-bindings")]
impl<'py> Oracle<Array1<f64>> for PyOracle<'py> {
    fn evaluate(&mut self, point: &Array1<f64>) -> OptResult<(f64, Array1<f64>)> {
        self.call(point).map_err(|err| self.fail(err))
    }
}
