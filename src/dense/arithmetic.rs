//! Element-wise and product arithmetic over dense matrices
//!
//! The kernels here are plain nested loops over row-major storage; matrix
//! dimensions are expected to be modest (viewer-sized), so no blocking or
//! tiling is attempted.

use crate::error::MatrixError;
use crate::traits::RealField;
use ndarray::Array2;

/// Copy `src` into `dst` element-wise.
///
/// Both matrices must already have identical dimensions; this never
/// reallocates `dst`.
pub fn copy_into<T: RealField>(src: &Array2<T>, dst: &mut Array2<T>) -> Result<(), MatrixError> {
    if src.dim() != dst.dim() {
        return Err(MatrixError::ShapeMismatch {
            expected: src.dim(),
            got: dst.dim(),
        });
    }
    dst.assign(src);
    Ok(())
}

/// Accumulate `a` into `b`: `b := a + b` element-wise.
///
/// The second operand is both input and output; this avoids allocating a
/// result matrix. Shapes must match.
pub fn accumulate<T: RealField>(a: &Array2<T>, b: &mut Array2<T>) -> Result<(), MatrixError> {
    if a.dim() != b.dim() {
        return Err(MatrixError::ShapeMismatch {
            expected: a.dim(),
            got: b.dim(),
        });
    }
    let (rows, cols) = a.dim();
    for i in 0..rows {
        for j in 0..cols {
            b[[i, j]] += a[[i, j]];
        }
    }
    Ok(())
}

/// Allocate and return the transpose of `a`.
///
/// `a` itself is not modified.
pub fn transpose<T: RealField>(a: &Array2<T>) -> Array2<T> {
    let (rows, cols) = a.dim();
    let mut t = Array2::zeros((cols, rows));
    for i in 0..rows {
        for j in 0..cols {
            t[[j, i]] = a[[i, j]];
        }
    }
    t
}

/// Sum of the diagonal elements of square `a`.
///
/// Returns [`MatrixError::NotSquare`] for a non-square matrix rather than
/// summing a partial diagonal.
pub fn trace<T: RealField>(a: &Array2<T>) -> Result<T, MatrixError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let mut sum = T::zero();
    for i in 0..rows {
        sum += a[[i, i]];
    }
    Ok(sum)
}

/// Matrix product `c := a · b`.
///
/// Requires `a.cols == b.rows` and `c` pre-shaped to `(a.rows, b.cols)`.
/// Standard O(m·n·p) triple loop with a scalar accumulator per cell.
pub fn matmul_into<T: RealField>(
    a: &Array2<T>,
    b: &Array2<T>,
    c: &mut Array2<T>,
) -> Result<(), MatrixError> {
    let (am, an) = a.dim();
    let (bm, bn) = b.dim();
    if an != bm {
        return Err(MatrixError::ShapeMismatch {
            expected: (an, bn),
            got: (bm, bn),
        });
    }
    if c.dim() != (am, bn) {
        return Err(MatrixError::ShapeMismatch {
            expected: (am, bn),
            got: c.dim(),
        });
    }
    for i in 0..am {
        for j in 0..bn {
            let mut sum = T::zero();
            for k in 0..an {
                sum += a[[i, k]] * b[[k, j]];
            }
            c[[i, j]] = sum;
        }
    }
    Ok(())
}

/// Allocating matrix product: returns `a · b` as a fresh `(a.rows, b.cols)`
/// matrix.
pub fn matmul<T: RealField>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>, MatrixError> {
    let mut c = Array2::zeros((a.nrows(), b.ncols()));
    matmul_into(a, b, &mut c)?;
    Ok(c)
}

/// Hadamard (element-wise) product `c := a ∘ b`.
///
/// All three matrices must share identical dimensions.
pub fn hadamard_into<T: RealField>(
    a: &Array2<T>,
    b: &Array2<T>,
    c: &mut Array2<T>,
) -> Result<(), MatrixError> {
    if a.dim() != b.dim() {
        return Err(MatrixError::ShapeMismatch {
            expected: a.dim(),
            got: b.dim(),
        });
    }
    if c.dim() != a.dim() {
        return Err(MatrixError::ShapeMismatch {
            expected: a.dim(),
            got: c.dim(),
        });
    }
    let (rows, cols) = a.dim();
    for i in 0..rows {
        for j in 0..cols {
            c[[i, j]] = a[[i, j]] * b[[i, j]];
        }
    }
    Ok(())
}

/// Allocating Hadamard product.
pub fn hadamard<T: RealField>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>, MatrixError> {
    let mut c = Array2::zeros(a.dim());
    hadamard_into(a, b, &mut c)?;
    Ok(c)
}
