//! Quadratic objective description handed to a QP backend.
//!
//! An objective over `n` variables is
//!
//! ```text
//! f(x) = constant + Σ_j c_j x_j + Σ_{(i,j)} q_ij x_i x_j
//! ```
//!
//! with an optimization [`Sense`]. Quadratic terms are keyed by the
//! unordered pair `(min(i,j), max(i,j))`; setting a pair twice overwrites it.
use std::collections::BTreeMap;

use crate::optimization::errors::{OptError, OptResult};

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticObjective {
    num_variables: usize,
    constant: f64,
    linear: Vec<f64>,
    quadratic: BTreeMap<(usize, usize), f64>,
    sense: Sense,
}

impl QuadraticObjective {
    /// Zero objective over `num_variables` variables, minimization sense.
    pub fn new(num_variables: usize) -> Self {
        Self {
            num_variables,
            constant: 0.0,
            linear: vec![0.0; num_variables],
            quadratic: BTreeMap::new(),
            sense: Sense::Minimize,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Set the linear coefficient of variable `index`.
    ///
    /// # Errors
    /// [`OptError::VariableOutOfRange`] if `index >= num_variables`.
    pub fn set_coefficient(&mut self, index: usize, value: f64) -> OptResult<()> {
        self.check_index(index)?;
        self.linear[index] = value;
        Ok(())
    }

    /// Set the coefficient of the product `x_i x_j` (`x_i²` when `i == j`).
    ///
    /// # Errors
    /// [`OptError::VariableOutOfRange`] if either index is out of range.
    pub fn set_quadratic_coefficient(&mut self, i: usize, j: usize, value: f64) -> OptResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.quadratic.insert((i.min(j), i.max(j)), value);
        Ok(())
    }

    pub fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.linear
    }

    /// Quadratic coefficient of `x_i x_j`, zero if unset.
    pub fn quadratic_coefficient(&self, i: usize, j: usize) -> f64 {
        self.quadratic.get(&(i.min(j), i.max(j))).copied().unwrap_or(0.0)
    }

    /// Iterate over the stored quadratic terms as `((i, j), q_ij)` with `i <= j`.
    pub fn quadratic_terms(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.quadratic.iter().map(|(&key, &value)| (key, value))
    }

    /// Evaluate `f(x)`.
    ///
    /// # Errors
    /// [`OptError::DimensionMismatch`] if `x.len() != num_variables`.
    pub fn evaluate(&self, x: &[f64]) -> OptResult<f64> {
        if x.len() != self.num_variables {
            return Err(OptError::DimensionMismatch {
                expected: self.num_variables,
                found: x.len(),
            });
        }
        let linear: f64 = self.linear.iter().zip(x).map(|(c, v)| c * v).sum();
        let quadratic: f64 = self.quadratic.iter().map(|(&(i, j), q)| q * x[i] * x[j]).sum();
        Ok(self.constant + linear + quadratic)
    }

    fn check_index(&self, index: usize) -> OptResult<()> {
        if index >= self.num_variables {
            return Err(OptError::VariableOutOfRange { index, num_variables: self.num_variables });
        }
        Ok(())
    }
}
