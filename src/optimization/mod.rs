//! optimization — bundle method, QP capability, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive layer for minimizing regularized convex objectives
//! with the bundle method. The driver ([`bundle`]) talks to a pluggable
//! quadratic-programming capability ([`qp`]), and every failure is reported
//! through one enum ([`errors::OptError`]).
//!
//! Key behaviors
//! -------------
//! - [`bundle`]: oracle contract, configuration, hyperplane store, QP
//!   formulation, and the iteration itself.
//! - [`qp`]: problem description types, the backend trait, and the native
//!   simplex-dual backend.
//! - [`errors`]: configuration, oracle, solver, and `argmin` failures in a
//!   single `OptError` with the `OptResult<T>` alias.
//!
//! Conventions
//! -----------
//! - Public entrypoints that can fail return `OptResult<T>`, except
//!   `BundleOptimizer::optimize`, whose enumerated result carries the error.
//! - Progress is reported through `tracing`; the crate never installs a
//!   subscriber.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.

pub mod bundle;
pub mod errors;
pub mod qp;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_bundle::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::bundle::prelude::*;
    pub use super::errors::{OptError, OptResult};
    pub use super::qp::{QpSettings, QuadraticSolverBackend};
}
