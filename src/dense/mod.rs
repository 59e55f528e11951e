//! Dense matrix construction, predicates, arithmetic, and composition
//!
//! Matrices are [`ndarray::Array2`] values owned by the caller; operations
//! that mutate take `&mut` and operations that allocate return a fresh
//! array. Structural predicates are pure O(m·n) scans that short-circuit on
//! the first violating element.

mod arithmetic;
mod compose;

pub use arithmetic::{
    accumulate, copy_into, hadamard, hadamard_into, matmul, matmul_into, trace, transpose,
};
pub use compose::{compose_block, compose_horizontal, compose_vertical, direct_sum};

use crate::error::MatrixError;
use crate::traits::RealField;
use ndarray::Array2;

/// Allocate a zero-filled `rows`×`cols` matrix.
///
/// `rows = 0` or `cols = 0` is allowed and yields an empty matrix.
pub fn zeros<T: RealField>(rows: usize, cols: usize) -> Array2<T> {
    Array2::zeros((rows, cols))
}

/// Reallocate `a` to `rows`×`cols`, discarding its contents.
///
/// The new contents are zero-filled; any previous values are lost.
pub fn resize<T: RealField>(a: &mut Array2<T>, rows: usize, cols: usize) {
    *a = Array2::zeros((rows, cols));
}

/// Fill every element of `a` with `value`.
pub fn fill<T: RealField>(a: &mut Array2<T>, value: T) {
    a.fill(value);
}

/// Overwrite square `a` with the identity matrix.
///
/// Returns [`MatrixError::NotSquare`] if `a` is not square.
pub fn set_identity<T: RealField>(a: &mut Array2<T>) -> Result<(), MatrixError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    for i in 0..rows {
        for j in 0..cols {
            a[[i, j]] = if i == j { T::one() } else { T::zero() };
        }
    }
    Ok(())
}

/// Allocate the `n`×`n` identity matrix.
pub fn identity<T: RealField>(n: usize) -> Array2<T> {
    let mut a = Array2::zeros((n, n));
    for i in 0..n {
        a[[i, i]] = T::one();
    }
    a
}

/// True if `a` is square with ones on the diagonal and zeros elsewhere.
///
/// Comparison is exact; a numerically-almost-identity matrix is not
/// detected.
pub fn is_identity<T: RealField>(a: &Array2<T>) -> bool {
    let (rows, cols) = a.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in 0..cols {
            let want = if i == j { T::one() } else { T::zero() };
            if a[[i, j]] != want {
                return false;
            }
        }
    }
    true
}

/// True if every element strictly above the diagonal is zero.
pub fn is_lower_triangular<T: RealField>(a: &Array2<T>) -> bool {
    let (rows, cols) = a.dim();
    for i in 0..rows {
        for j in (i + 1)..cols {
            if a[[i, j]] != T::zero() {
                return false;
            }
        }
    }
    true
}

/// True if `a` is lower triangular with a unit diagonal.
pub fn is_unit_lower_triangular<T: RealField>(a: &Array2<T>) -> bool {
    if !is_lower_triangular(a) {
        return false;
    }
    let (rows, cols) = a.dim();
    for i in 0..rows.min(cols) {
        if a[[i, i]] != T::one() {
            return false;
        }
    }
    true
}

/// True if `a` is lower triangular with a zero diagonal as well.
pub fn is_strictly_lower_triangular<T: RealField>(a: &Array2<T>) -> bool {
    if !is_lower_triangular(a) {
        return false;
    }
    let (rows, cols) = a.dim();
    for i in 0..rows.min(cols) {
        if a[[i, i]] != T::zero() {
            return false;
        }
    }
    true
}

/// True if every element strictly below the diagonal is zero.
pub fn is_upper_triangular<T: RealField>(a: &Array2<T>) -> bool {
    let (rows, cols) = a.dim();
    for i in 0..rows {
        for j in 0..cols.min(i) {
            if a[[i, j]] != T::zero() {
                return false;
            }
        }
    }
    true
}

/// True if `a` is upper triangular with a unit diagonal.
pub fn is_unit_upper_triangular<T: RealField>(a: &Array2<T>) -> bool {
    if !is_upper_triangular(a) {
        return false;
    }
    let (rows, cols) = a.dim();
    for i in 0..rows.min(cols) {
        if a[[i, i]] != T::one() {
            return false;
        }
    }
    true
}

/// True if `a` is upper triangular with a zero diagonal as well.
pub fn is_strictly_upper_triangular<T: RealField>(a: &Array2<T>) -> bool {
    if !is_upper_triangular(a) {
        return false;
    }
    let (rows, cols) = a.dim();
    for i in 0..rows.min(cols) {
        if a[[i, i]] != T::zero() {
            return false;
        }
    }
    true
}

/// True if every element of `a` is zero.
pub fn is_zero<T: RealField>(a: &Array2<T>) -> bool {
    a.iter().all(|&v| v == T::zero())
}

/// True if `a` is square and `a[i][j] == a[j][i]` for all pairs.
///
/// A non-square matrix is never symmetric; this returns `false` rather
/// than erroring.
pub fn is_symmetric<T: RealField>(a: &Array2<T>) -> bool {
    let (rows, cols) = a.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            if a[[i, j]] != a[[j, i]] {
                return false;
            }
        }
    }
    true
}
