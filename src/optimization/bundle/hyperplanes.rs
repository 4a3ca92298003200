//! bundle::hyperplanes — append-only store of cutting planes.
//!
//! Purpose
//! -------
//! Keep every supporting hyperplane `⟨w,a_i⟩ + b_i` produced by the bundle
//! iteration. Together they form the piecewise-linear model
//! `ℒ_t(w) = max_i ⟨w,a_i⟩ + b_i`, a lower bound on a convex objective.
//!
//! Invariants & assumptions
//! ------------------------
//! - Planes are never removed, merged, or modified; only
//!   [`HyperplaneStore::clear`] empties the store, on explicit request.
//! - All stored slopes share one arity, fixed by the first plane.
use ndarray::Array1;

use crate::optimization::errors::{OptError, OptResult};

/// Affine function `w ↦ ⟨w,slope⟩ + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperplane {
    slope: Array1<f64>,
    intercept: f64,
}

impl Hyperplane {
    pub fn new(slope: Array1<f64>, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> &Array1<f64> {
        &self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn dimension(&self) -> usize {
        self.slope.len()
    }

    /// Value of the plane at `w`.
    ///
    /// # Errors
    /// [`OptError::DimensionMismatch`] if `w` has a different arity.
    pub fn evaluate(&self, w: &Array1<f64>) -> OptResult<f64> {
        if w.len() != self.slope.len() {
            return Err(OptError::DimensionMismatch { expected: self.slope.len(), found: w.len() });
        }
        Ok(self.slope.dot(w) + self.intercept)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyperplaneStore {
    hyperplanes: Vec<Hyperplane>,
}

impl HyperplaneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `(slope, intercept)`.
    ///
    /// # Errors
    /// [`OptError::DimensionMismatch`] if the slope arity differs from the
    /// planes already stored.
    pub fn add_hyperplane(&mut self, slope: Array1<f64>, intercept: f64) -> OptResult<()> {
        if let Some(dim) = self.dimension() {
            if slope.len() != dim {
                return Err(OptError::DimensionMismatch { expected: dim, found: slope.len() });
            }
        }
        self.hyperplanes.push(Hyperplane::new(slope, intercept));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.hyperplanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hyperplanes.is_empty()
    }

    /// Arity of the stored slopes, `None` while empty.
    pub fn dimension(&self) -> Option<usize> {
        self.hyperplanes.first().map(Hyperplane::dimension)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.hyperplanes.iter()
    }

    pub fn clear(&mut self) {
        self.hyperplanes.clear();
    }

    /// Cutting-plane model `max_i ⟨w,a_i⟩ + b_i`; `−∞` when empty.
    ///
    /// # Errors
    /// [`OptError::DimensionMismatch`] if `w` has the wrong arity.
    pub fn lower_bound(&self, w: &Array1<f64>) -> OptResult<f64> {
        self.hyperplanes
            .iter()
            .try_fold(f64::NEG_INFINITY, |acc, plane| Ok(acc.max(plane.evaluate(w)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The store grows by one per insertion and evaluates the max of its
    // planes.
    //
    // Given
    // -----
    // - Planes (−1)·w + 3 and (1)·w − 3, i.e. |w − 3|.
    //
    // Expect
    // ------
    // - len 1 then 2; model value 3 at w = 0, 0 at w = 3, 2 at w = 5.
    fn store_grows_and_models_the_max() {
        // Arrange
        let mut store = HyperplaneStore::new();
        assert_eq!(store.lower_bound(&array![0.0]).unwrap(), f64::NEG_INFINITY);

        // Act
        store.add_hyperplane(array![-1.0], 3.0).unwrap();
        assert_eq!(store.len(), 1);
        store.add_hyperplane(array![1.0], -3.0).unwrap();

        // Assert
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimension(), Some(1));
        assert_eq!(store.lower_bound(&array![0.0]).unwrap(), 3.0);
        assert_eq!(store.lower_bound(&array![3.0]).unwrap(), 0.0);
        assert_eq!(store.lower_bound(&array![5.0]).unwrap(), 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Mixed arities are rejected and leave the store unchanged.
    //
    // Given
    // -----
    // - A 2-d plane followed by a 3-d plane.
    //
    // Expect
    // ------
    // - `DimensionMismatch { expected: 2, found: 3 }`, len stays 1.
    fn mixed_arity_is_rejected() {
        // Arrange
        let mut store = HyperplaneStore::new();
        store.add_hyperplane(array![1.0, 0.0], 0.0).unwrap();

        // Act
        let err = store.add_hyperplane(array![1.0, 0.0, 0.0], 0.0).unwrap_err();

        // Assert
        assert_eq!(err, OptError::DimensionMismatch { expected: 2, found: 3 });
        assert_eq!(store.len(), 1);
    }
}
