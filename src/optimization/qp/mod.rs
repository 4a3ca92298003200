//! qp — quadratic-programming capability used by the bundle method.
//!
//! Purpose
//! -------
//! Model the QP subsolver as a capability: problem description types
//! ([`QuadraticObjective`], [`LinearConstraints`]), the backend contract
//! ([`QuadraticSolverBackend`]), and a native backend
//! ([`SimplexDualSolver`]) for the epigraph-form problems the bundle driver
//! produces.
//!
//! Conventions
//! -----------
//! - Objectives are minimized unless their [`Sense`] says otherwise.
//! - Constraint sets are replaced wholesale on every iteration.
//! - Non-optimal solves are reported through [`QpStatus`]; `Err` means the
//!   backend could not attempt the problem.

pub mod backend;
pub mod constraints;
pub mod objective;
pub mod simplex_dual;

pub use self::backend::{
    QpSettings, QpStatus, QuadraticSolverBackend, QuadraticSolverFactory, Solution, VariableType,
};
pub use self::constraints::{LinearConstraint, LinearConstraints, Relation};
pub use self::objective::{QuadraticObjective, Sense};
pub use self::simplex_dual::SimplexDualSolver;
