//! qp::simplex_dual — native backend for epigraph-form QPs.
//!
//! Purpose
//! -------
//! Solve the regularized epigraph subproblem of the bundle method without an
//! external solver:
//!
//! ```text
//! min_x  Σ_j q_j x_j² + Σ_j c_j x_j + c_ξ ξ
//! s.t.   Σ_j g_ij x_j − ξ ≤ h_i        (after row normalization)
//! ```
//!
//! where `q_j > 0` for every variable except the single epigraph variable
//! `ξ`, and `c_ξ > 0`.
//!
//! Key behaviors
//! -------------
//! - Rows are normalized so that `ξ` carries coefficient −1; both `≤` and
//!   `≥` rows are accepted as long as `ξ` bounds them from above.
//! - The Lagrangian dual is a convex QP over the scaled simplex
//!   `{α ≥ 0, Σ α_i = c_ξ}`:
//!   `min_α ½ αᵀKα + ℓᵀα`, `K = G D Gᵀ`, `ℓ = G D c + h`, `D = diag(1/(2q))`.
//!   It is solved by maximal-violating-pair coordinate steps with exact line
//!   search, starting from the best simplex vertex.
//! - Optimality is declared when the Frank–Wolfe gap
//!   `αᵀ∇ − c_ξ min_i ∇_i`, which equals the primal–dual gap, falls below
//!   `tolerance · (1 + |dual value|)`.
//! - The primal point is recovered as `x = −D (c + Gᵀα)` and
//!   `ξ = max_i (g_i·x − h_i)`; the reported value is the primal objective.
//!
//! Invariants & assumptions
//! ------------------------
//! - With no constraints the epigraph variable is unbounded below; the
//!   backend then returns the regularizer-only minimizer, `ξ = 0`, value
//!   `−∞`, and status [`QpStatus::Unbounded`].
//! - Anything outside the class above (maximization, off-diagonal or
//!   negative quadratic terms, equality rows, several linear-only variables,
//!   non-continuous domains) is rejected with an `Unsupported*` error.
use ndarray::{Array1, Array2};

use crate::optimization::{
    errors::{OptError, OptResult},
    qp::{
        backend::{QpSettings, QpStatus, QuadraticSolverBackend, Solution, VariableType},
        constraints::{LinearConstraints, Relation},
        objective::{QuadraticObjective, Sense},
    },
};

/// Separable objective split into its quadratic block and the epigraph variable.
#[derive(Debug, Clone)]
struct EpigraphObjective {
    epigraph: usize,
    epigraph_cost: f64,
    constant: f64,
    quadratic: Array1<f64>,
    linear: Array1<f64>,
    /// `1 / (2 q_j)`; zero at the epigraph index.
    half_inv_quadratic: Array1<f64>,
}

/// Constraint rows normalized to `g_i·x − ξ ≤ h_i`; the epigraph column of `g` is zero.
#[derive(Debug, Clone)]
struct NormalizedRows {
    g: Array2<f64>,
    h: Array1<f64>,
}

#[derive(Debug, Clone)]
pub struct SimplexDualSolver {
    settings: QpSettings,
    num_variables: Option<usize>,
    objective: Option<EpigraphObjective>,
    rows: Option<NormalizedRows>,
}

impl SimplexDualSolver {
    /// Create a backend with validated `settings`.
    ///
    /// # Errors
    /// Propagates [`QpSettings::validate`] failures.
    pub fn new(settings: QpSettings) -> OptResult<Self> {
        settings.validate()?;
        Ok(Self { settings, num_variables: None, objective: None, rows: None })
    }

    fn unbounded_solution(&self, objective: &EpigraphObjective) -> Solution {
        let mut x = -(&objective.linear * &objective.half_inv_quadratic);
        x[objective.epigraph] = 0.0;
        Solution {
            x,
            value: f64::NEG_INFINITY,
            status: QpStatus::Unbounded,
            message: "no constraints: the epigraph variable is unbounded below".to_string(),
        }
    }

    fn solve_dual(&self, objective: &EpigraphObjective, rows: &NormalizedRows) -> Solution {
        let m = rows.h.len();
        let c_xi = objective.epigraph_cost;

        let gd = &rows.g * &objective.half_inv_quadratic;
        let k: Array2<f64> = gd.dot(&rows.g.t());
        let lin: Array1<f64> = gd.dot(&objective.linear) + &rows.h;

        // Best vertex of the scaled simplex.
        let start = (0..m)
            .map(|i| (i, c_xi * lin[i] + 0.5 * c_xi * c_xi * k[[i, i]]))
            .fold((0, f64::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best })
            .0;
        let mut alpha = Array1::<f64>::zeros(m);
        alpha[start] = c_xi;
        let mut grad = &lin + &(&k.column(start) * c_xi);

        let mut iterations = 0usize;
        let mut converged = false;
        let mut fw_gap;
        loop {
            let (j, g_min) = argmin(&grad);
            let (i, g_max) = argmax_on_support(&grad, &alpha);
            let dual_value = 0.5
                * alpha
                    .iter()
                    .zip(grad.iter().zip(lin.iter()))
                    .map(|(a, (g, l))| a * (g + l))
                    .sum::<f64>();
            fw_gap = alpha.dot(&grad) - c_xi * g_min;
            if fw_gap <= self.settings.tolerance * (1.0 + dual_value.abs()) || i == j {
                converged = true;
                break;
            }
            if iterations >= self.settings.max_iter {
                break;
            }

            let curvature = k[[i, i]] + k[[j, j]] - 2.0 * k[[i, j]];
            let step = if curvature > 0.0 {
                ((g_max - g_min) / curvature).min(alpha[i])
            } else {
                alpha[i]
            };
            alpha[i] = if step >= alpha[i] { 0.0 } else { alpha[i] - step };
            alpha[j] += step;
            grad.scaled_add(step, &k.column(j));
            grad.scaled_add(-step, &k.column(i));
            iterations += 1;
        }

        let mut x = -((&objective.linear + &rows.g.t().dot(&alpha)) * &objective.half_inv_quadratic);
        x[objective.epigraph] = 0.0;
        let xi = (rows.g.dot(&x) - &rows.h).fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        x[objective.epigraph] = xi;

        let mut value = objective.constant + c_xi * xi;
        for j in 0..x.len() {
            if j != objective.epigraph {
                value += objective.quadratic[j] * x[j] * x[j] + objective.linear[j] * x[j];
            }
        }

        let (status, message) = if converged {
            (QpStatus::Optimal, format!("converged after {iterations} iterations"))
        } else {
            (
                QpStatus::MaxIterations,
                format!("stopped after {iterations} iterations with duality gap {fw_gap:.3e}"),
            )
        };
        Solution { x, value, status, message }
    }
}

impl QuadraticSolverBackend for SimplexDualSolver {
    fn name(&self) -> &'static str {
        "simplex-dual"
    }

    fn initialize(&mut self, num_variables: usize, domain: VariableType) -> OptResult<()> {
        if domain != VariableType::Continuous {
            return Err(OptError::UnsupportedVariableType { found: format!("{domain:?}") });
        }
        self.num_variables = Some(num_variables);
        self.objective = None;
        self.rows = None;
        Ok(())
    }

    fn set_objective(&mut self, objective: &QuadraticObjective) -> OptResult<()> {
        let n = self.num_variables.ok_or(OptError::SolverNotInitialized)?;
        if objective.num_variables() != n {
            return Err(OptError::DimensionMismatch {
                expected: n,
                found: objective.num_variables(),
            });
        }
        if objective.sense() != Sense::Minimize {
            return Err(OptError::UnsupportedObjective { reason: "only minimization is supported" });
        }

        let mut quadratic = Array1::<f64>::zeros(n);
        for ((i, j), q) in objective.quadratic_terms() {
            if !q.is_finite() {
                return Err(OptError::UnsupportedObjective { reason: "coefficients must be finite" });
            }
            if i != j {
                if q != 0.0 {
                    return Err(OptError::UnsupportedObjective {
                        reason: "off-diagonal quadratic terms are not supported",
                    });
                }
                continue;
            }
            if q < 0.0 {
                return Err(OptError::UnsupportedObjective {
                    reason: "quadratic coefficients must be non-negative",
                });
            }
            quadratic[i] = q;
        }
        let mut linear = Array1::from(objective.coefficients().to_vec());
        if linear.iter().any(|c| !c.is_finite()) || !objective.constant().is_finite() {
            return Err(OptError::UnsupportedObjective { reason: "coefficients must be finite" });
        }

        let linear_only: Vec<usize> = (0..n).filter(|&j| quadratic[j] == 0.0).collect();
        let epigraph = match linear_only.as_slice() {
            [e] => *e,
            _ => {
                return Err(OptError::UnsupportedObjective {
                    reason: "exactly one variable must be linear-only (the epigraph variable)",
                });
            }
        };
        let epigraph_cost = linear[epigraph];
        if epigraph_cost <= 0.0 {
            return Err(OptError::UnsupportedObjective {
                reason: "the epigraph variable needs a positive cost",
            });
        }
        linear[epigraph] = 0.0;
        let half_inv_quadratic =
            quadratic.mapv(|q| if q > 0.0 { 0.5 / q } else { 0.0 });

        self.objective = Some(EpigraphObjective {
            epigraph,
            epigraph_cost,
            constant: objective.constant(),
            quadratic,
            linear,
            half_inv_quadratic,
        });
        Ok(())
    }

    fn set_constraints(&mut self, constraints: &LinearConstraints) -> OptResult<()> {
        let n = self.num_variables.ok_or(OptError::SolverNotInitialized)?;
        let epigraph = self.objective.as_ref().ok_or(OptError::ObjectiveNotSet)?.epigraph;

        let m = constraints.len();
        let mut g = Array2::<f64>::zeros((m, n));
        let mut h = Array1::<f64>::zeros(m);
        for (row, constraint) in constraints.iter().enumerate() {
            let sign = match constraint.relation() {
                Relation::LessEqual => 1.0,
                Relation::GreaterEqual => -1.0,
                Relation::Equal => {
                    return Err(OptError::UnsupportedConstraint {
                        index: row,
                        reason: "equality constraints are not supported",
                    });
                }
            };
            for &(j, coefficient) in constraint.coefficients() {
                if j >= n {
                    return Err(OptError::VariableOutOfRange { index: j, num_variables: n });
                }
                if !coefficient.is_finite() {
                    return Err(OptError::UnsupportedConstraint {
                        index: row,
                        reason: "coefficients must be finite",
                    });
                }
            }
            if !constraint.value().is_finite() {
                return Err(OptError::UnsupportedConstraint {
                    index: row,
                    reason: "right-hand side must be finite",
                });
            }
            let epigraph_coefficient = sign * constraint.coefficient(epigraph);
            if epigraph_coefficient >= 0.0 {
                return Err(OptError::UnsupportedConstraint {
                    index: row,
                    reason: "the epigraph variable must bound the row from above",
                });
            }
            let scale = -epigraph_coefficient;
            for &(j, coefficient) in constraint.coefficients() {
                if j != epigraph {
                    g[[row, j]] = sign * coefficient / scale;
                }
            }
            h[row] = sign * constraint.value() / scale;
        }
        self.rows = Some(NormalizedRows { g, h });
        Ok(())
    }

    fn solve(&mut self) -> OptResult<Solution> {
        self.num_variables.ok_or(OptError::SolverNotInitialized)?;
        let objective = self.objective.as_ref().ok_or(OptError::ObjectiveNotSet)?;
        match self.rows.as_ref() {
            Some(rows) if !rows.h.is_empty() => Ok(self.solve_dual(objective, rows)),
            _ => Ok(self.unbounded_solution(objective)),
        }
    }
}

// ---- Helper Methods ----

fn argmin(values: &Array1<f64>) -> (usize, f64) {
    values
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, &v)| if v < best.1 { (i, v) } else { best })
}

/// Largest gradient entry among coordinates with positive weight.
fn argmax_on_support(values: &Array1<f64>, alpha: &Array1<f64>) -> (usize, f64) {
    values
        .iter()
        .zip(alpha.iter())
        .enumerate()
        .filter(|(_, (_, a))| **a > 0.0)
        .fold((0, f64::NEG_INFINITY), |best, (i, (&v, _))| if v > best.1 { (i, v) } else { best })
}
