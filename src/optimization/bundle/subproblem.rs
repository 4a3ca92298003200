//! bundle::subproblem — QP formulation of the bundle step.
//!
//! The step solves
//!
//! ```text
//! w* = argmin ½λ|w|² + ξ   s.t.  ⟨w,a_i⟩ + b_i ≤ ξ  ∀i
//! ```
//!
//! over `n + 1` variables: the `n` weights followed by `ξ` at index `n`.
//! The objective is built once per run; the constraints are rebuilt from the
//! full hyperplane history on every iteration.
use crate::optimization::{
    bundle::hyperplanes::HyperplaneStore,
    errors::OptResult,
    qp::{LinearConstraint, LinearConstraints, QuadraticObjective, Relation, Sense},
};

/// Regularizer `½λ w_i²` on every weight plus the epigraph variable `ξ`.
pub fn epigraph_objective(num_weights: usize, lambda: f64) -> OptResult<QuadraticObjective> {
    let mut objective = QuadraticObjective::new(num_weights + 1);
    for i in 0..num_weights {
        objective.set_quadratic_coefficient(i, i, 0.5 * lambda)?;
    }
    objective.set_coefficient(num_weights, 1.0)?;
    objective.set_sense(Sense::Minimize);
    Ok(objective)
}

/// One row `⟨w,a_i⟩ − ξ ≤ −b_i` per stored hyperplane, in insertion order.
pub fn epigraph_constraints(store: &HyperplaneStore) -> LinearConstraints {
    let mut constraints = LinearConstraints::with_capacity(store.len());
    for plane in store.iter() {
        let epigraph = plane.dimension();
        let mut entries = Vec::with_capacity(epigraph + 1);
        entries.extend(plane.slope().iter().copied().enumerate());
        entries.push((epigraph, -1.0));
        constraints.add(LinearConstraint::from_coefficients(
            entries,
            Relation::LessEqual,
            -plane.intercept(),
        ));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::qp::{
        QpSettings, QpStatus, QuadraticSolverBackend, SimplexDualSolver, VariableType,
    };
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The objective carries ½λ on each weight and 1 on ξ, nothing else.
    //
    // Given
    // -----
    // - Two weights, lambda = 0.4.
    //
    // Expect
    // ------
    // - Three variables; q_00 = q_11 = 0.2; c = (0, 0, 1); minimize.
    fn objective_has_regularizer_and_epigraph_cost() {
        // Act
        let obj = epigraph_objective(2, 0.4).unwrap();

        // Assert
        assert_eq!(obj.num_variables(), 3);
        assert_eq!(obj.quadratic_coefficient(0, 0), 0.2);
        assert_eq!(obj.quadratic_coefficient(1, 1), 0.2);
        assert_eq!(obj.quadratic_coefficient(2, 2), 0.0);
        assert_eq!(obj.coefficients(), &[0.0, 0.0, 1.0]);
        assert_eq!(obj.sense(), Sense::Minimize);
    }

    #[test]
    // Purpose
    // -------
    // Each plane becomes one `≤` row with −1 on ξ and −b on the right.
    //
    // Given
    // -----
    // - Planes (1, 2)·w + 3 and (0, −1)·w − 4.
    //
    // Expect
    // ------
    // - Two rows: (1, 2, −1) ≤ −3 and (0, −1, −1) ≤ 4.
    fn constraints_mirror_the_store() {
        // Arrange
        let mut store = HyperplaneStore::new();
        store.add_hyperplane(array![1.0, 2.0], 3.0).unwrap();
        store.add_hyperplane(array![0.0, -1.0], -4.0).unwrap();

        // Act
        let cs = epigraph_constraints(&store);

        // Assert
        assert_eq!(cs.len(), 2);
        let rows: Vec<_> = cs.iter().collect();
        assert_eq!(rows[0].relation(), Relation::LessEqual);
        assert_eq!(
            (rows[0].coefficient(0), rows[0].coefficient(1), rows[0].coefficient(2)),
            (1.0, 2.0, -1.0)
        );
        assert_eq!(rows[0].value(), -3.0);
        assert_eq!(rows[1].coefficient(2), -1.0);
        assert_eq!(rows[1].value(), 4.0);
    }

    #[test]
    // Purpose
    // -------
    // With an empty store the subproblem leaves only the regularizer for w,
    // whose minimum is the zero vector.
    //
    // Given
    // -----
    // - Four weights, lambda = 1, no hyperplanes.
    //
    // Expect
    // ------
    // - The default backend returns w = 0 (and flags ξ as unbounded).
    fn empty_store_gives_zero_weights() {
        // Arrange
        let store = HyperplaneStore::new();
        let mut solver = SimplexDualSolver::new(QpSettings::default()).unwrap();
        solver.initialize(5, VariableType::Continuous).unwrap();
        solver.set_objective(&epigraph_objective(4, 1.0).unwrap()).unwrap();
        solver.set_constraints(&epigraph_constraints(&store)).unwrap();

        // Act
        let sol = solver.solve().unwrap();

        // Assert
        assert_eq!(sol.status, QpStatus::Unbounded);
        assert!(sol.x.iter().take(4).all(|&v| v == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Rows for high-dimensional planes carry every slope entry plus ξ.
    //
    // Given
    // -----
    // - One plane in 50_000 dimensions with slope `a_j = j mod 7` and b = 1.
    //
    // Expect
    // ------
    // - One row of 50_001 entries in index order, ending with −1 on ξ, and
    //   right-hand side −1.
    fn large_planes_become_full_rows() {
        // Arrange
        let n = 50_000;
        let slope = ndarray::Array1::from_iter((0..n).map(|j| (j % 7) as f64));
        let mut store = HyperplaneStore::new();
        store.add_hyperplane(slope, 1.0).unwrap();

        // Act
        let cs = epigraph_constraints(&store);

        // Assert
        let row = cs.iter().next().unwrap();
        assert_eq!(row.coefficients().len(), n + 1);
        assert!(row.coefficients().iter().enumerate().all(|(k, &(i, _))| k == i));
        assert_eq!(row.coefficients()[n - 1].1, ((n - 1) % 7) as f64);
        assert_eq!(row.coefficients()[n], (n, -1.0));
        assert_eq!(row.value(), -1.0);
    }
}
