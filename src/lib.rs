//! Dense matrix and vector algebra for small linear systems
//!
//! This crate provides the numerical core used by matrix-viewer widgets and
//! constraint solvers: dense matrix construction and predicates, matrix
//! composition and arithmetic, and two destructive solver paths:
//!
//! - **LU decomposition** (Crout's method with implicit scaling and partial
//!   pivoting) plus O(n²) back-substitution, for repeated solves against the
//!   same coefficient matrix
//! - **Gauss-Jordan elimination** with full pivoting, for the "I need the
//!   explicit inverse" use case
//!
//! Matrices are [`ndarray::Array2`], vectors are [`ndarray::Array1`], both
//! generic over [`RealField`] (`f32` or `f64`). All solvers mutate their
//! operands in place; allocating wrappers are provided for callers that want
//! to keep the original.
//!
//! # Example
//!
//! ```
//! use math_matrix::lu_solve;
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, -1.0], [5.0, -3.0]];
//! let b = array![7.0_f64, 18.0];
//!
//! let x = lu_solve(&a, &b).expect("non-singular");
//! assert!((x[0] - 3.0).abs() < 1e-12);
//! assert!((x[1] + 1.0).abs() < 1e-12);
//! ```

pub mod dense;
pub mod display;
pub mod error;
pub mod solve;
pub mod traits;

// Re-export the main types
pub use error::MatrixError;
pub use traits::RealField;

// Re-export dense matrix operations
pub use dense::{
    accumulate, compose_block, compose_horizontal, compose_vertical, copy_into, direct_sum, fill,
    hadamard, hadamard_into, identity, is_identity, is_lower_triangular, is_strictly_lower_triangular,
    is_strictly_upper_triangular, is_symmetric, is_unit_lower_triangular, is_unit_upper_triangular,
    is_upper_triangular, is_zero, matmul, matmul_into, resize, set_identity, trace, transpose, zeros,
};

// Re-export solvers
pub use solve::{
    gauss_jordan, gauss_jordan_solve, invert, lu_factorize, lu_factorize_in_place,
    lu_factorize_with, lu_solve, LuConfig, LuFactorization,
};

// Re-export debug formatting
pub use display::{format_matrix, format_vector};
