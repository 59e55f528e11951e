//! Destructive solvers for dense linear systems
//!
//! Two paths with different cost profiles:
//! - [`lu_factorize`]: O(n³) once, then O(n²) per right-hand side via
//!   [`LuFactorization::solve`] — the right choice for repeated solves
//! - [`gauss_jordan`]: O(n³) per call, but produces the explicit inverse
//!   alongside the solution columns

mod gauss_jordan;
mod lu;

pub use gauss_jordan::{gauss_jordan, gauss_jordan_solve, invert};
pub use lu::{
    lu_factorize, lu_factorize_in_place, lu_factorize_with, lu_solve, LuConfig, LuFactorization,
};
