//! bundle::types — numeric aliases and the weight-vector capability.
//!
//! Purpose
//! -------
//! Fix the canonical vector types of the bundle optimizer and describe the
//! minimal contract a caller's weight container must satisfy.
//!
//! Key behaviors
//! -------------
//! - [`Weights`] / [`Grad`]: `ndarray` aliases used for stored hyperplanes
//!   and QP solutions.
//! - [`WeightVector`]: "indexable real-valued sequence with fixed arity",
//!   implemented for `Array1<f64>` and `Vec<f64>`.
//!
//! Invariants & assumptions
//! ------------------------
//! - A weight vector never changes length during a run; the driver writes
//!   element-wise and never resizes.
//! - `zeros(n)` yields a vector with `number_of_parameters() == n`.
use std::ops::{Index, IndexMut};

use ndarray::Array1;

/// Parameter vector `w`.
pub type Weights = Array1<f64>;

/// Subgradient vector `∂L(w)`, same shape as [`Weights`].
pub type Grad = Array1<f64>;

/// Caller-supplied numeric container for weights and gradients.
pub trait WeightVector: Clone + Index<usize, Output = f64> + IndexMut<usize> {
    /// Zero-initialized vector of length `len`.
    fn zeros(len: usize) -> Self;

    /// Number of components.
    fn number_of_parameters(&self) -> usize;

    /// Copy into the canonical `ndarray` representation.
    fn to_array(&self) -> Array1<f64> {
        Array1::from_iter((0..self.number_of_parameters()).map(|i| self[i]))
    }
}

impl WeightVector for Array1<f64> {
    fn zeros(len: usize) -> Self {
        Array1::zeros(len)
    }

    fn number_of_parameters(&self) -> usize {
        self.len()
    }

    fn to_array(&self) -> Array1<f64> {
        self.clone()
    }
}

impl WeightVector for Vec<f64> {
    fn zeros(len: usize) -> Self {
        vec![0.0; len]
    }

    fn number_of_parameters(&self) -> usize {
        self.len()
    }
}
