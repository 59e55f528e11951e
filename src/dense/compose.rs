//! Block composition of matrices
//!
//! Builds supermatrices out of caller-pre-sized destinations. The shape a
//! block layout implies is validated up front; a wrong destination returns
//! [`MatrixError::ShapeMismatch`] with nothing written.

use crate::error::MatrixError;
use crate::traits::RealField;
use ndarray::Array2;

fn copy_block<T: RealField>(
    src: &Array2<T>,
    dst: &mut Array2<T>,
    row_offset: usize,
    col_offset: usize,
) {
    let (rows, cols) = src.dim();
    for i in 0..rows {
        for j in 0..cols {
            dst[[row_offset + i, col_offset + j]] = src[[i, j]];
        }
    }
}

/// Direct sum: allocate a `(a.rows + b.rows, a.cols + b.cols)` matrix with
/// `a` in the top-left block, `b` in the bottom-right block, and zeros
/// elsewhere.
pub fn direct_sum<T: RealField>(a: &Array2<T>, b: &Array2<T>) -> Array2<T> {
    let (am, an) = a.dim();
    let (bm, bn) = b.dim();
    let mut out = Array2::zeros((am + bm, an + bn));
    copy_block(a, &mut out, 0, 0);
    copy_block(b, &mut out, am, an);
    out
}

/// Stack `top` over `bottom` into `dst`.
///
/// `dst` must be pre-sized to `(top.rows + bottom.rows, top.cols)` and the
/// column counts of `top` and `bottom` must agree.
pub fn compose_vertical<T: RealField>(
    top: &Array2<T>,
    bottom: &Array2<T>,
    dst: &mut Array2<T>,
) -> Result<(), MatrixError> {
    let (tm, tn) = top.dim();
    let (bm, bn) = bottom.dim();
    if tn != bn {
        return Err(MatrixError::ShapeMismatch {
            expected: (bm, tn),
            got: (bm, bn),
        });
    }
    if dst.dim() != (tm + bm, tn) {
        return Err(MatrixError::ShapeMismatch {
            expected: (tm + bm, tn),
            got: dst.dim(),
        });
    }
    copy_block(top, dst, 0, 0);
    copy_block(bottom, dst, tm, 0);
    Ok(())
}

/// Place `left` beside `right` in `dst`.
///
/// `dst` must be pre-sized to `(left.rows, left.cols + right.cols)` and the
/// row counts of `left` and `right` must agree.
pub fn compose_horizontal<T: RealField>(
    left: &Array2<T>,
    right: &Array2<T>,
    dst: &mut Array2<T>,
) -> Result<(), MatrixError> {
    let (lm, ln) = left.dim();
    let (rm, rn) = right.dim();
    if lm != rm {
        return Err(MatrixError::ShapeMismatch {
            expected: (lm, rn),
            got: (rm, rn),
        });
    }
    if dst.dim() != (lm, ln + rn) {
        return Err(MatrixError::ShapeMismatch {
            expected: (lm, ln + rn),
            got: dst.dim(),
        });
    }
    copy_block(left, dst, 0, 0);
    copy_block(right, dst, 0, ln);
    Ok(())
}

/// Assemble a 2×2 block matrix `[[a11, a12], [a21, a22]]` into `dst`.
///
/// Blocks sharing a row must agree on row count, blocks sharing a column
/// must agree on column count, and `dst` must be pre-sized to the combined
/// shape.
pub fn compose_block<T: RealField>(
    a11: &Array2<T>,
    a12: &Array2<T>,
    a21: &Array2<T>,
    a22: &Array2<T>,
    dst: &mut Array2<T>,
) -> Result<(), MatrixError> {
    let (m11, n11) = a11.dim();
    let (m12, n12) = a12.dim();
    let (m21, n21) = a21.dim();
    let (m22, n22) = a22.dim();
    if m11 != m12 || m21 != m22 {
        return Err(MatrixError::ShapeMismatch {
            expected: (m11, n12),
            got: (m12, n12),
        });
    }
    if n11 != n21 || n12 != n22 {
        return Err(MatrixError::ShapeMismatch {
            expected: (m21, n11),
            got: (m21, n21),
        });
    }
    if dst.dim() != (m11 + m21, n11 + n12) {
        return Err(MatrixError::ShapeMismatch {
            expected: (m11 + m21, n11 + n12),
            got: dst.dim(),
        });
    }
    copy_block(a11, dst, 0, 0);
    copy_block(a12, dst, 0, n11);
    copy_block(a21, dst, m11, 0);
    copy_block(a22, dst, m11, n11);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::zeros;
    use ndarray::array;

    #[test]
    fn test_direct_sum_shape_and_blocks() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let b = array![[5.0_f64]];
        let s = direct_sum(&a, &b);
        assert_eq!(s.dim(), (3, 3));
        // Top-left block is a
        assert_eq!(s[[0, 0]], 1.0);
        assert_eq!(s[[0, 1]], 2.0);
        assert_eq!(s[[1, 0]], 3.0);
        assert_eq!(s[[1, 1]], 4.0);
        // Bottom-right block is b
        assert_eq!(s[[2, 2]], 5.0);
        // Off-diagonal blocks are zero
        assert_eq!(s[[0, 2]], 0.0);
        assert_eq!(s[[1, 2]], 0.0);
        assert_eq!(s[[2, 0]], 0.0);
        assert_eq!(s[[2, 1]], 0.0);
    }

    #[test]
    fn test_direct_sum_with_empty() {
        let a = array![[1.0_f64]];
        let empty = zeros::<f64>(0, 0);
        let s = direct_sum(&a, &empty);
        assert_eq!(s.dim(), (1, 1));
        assert_eq!(s[[0, 0]], 1.0);
    }

    #[test]
    fn test_compose_vertical() {
        let top = array![[1.0_f64, 2.0]];
        let bottom = array![[3.0_f64, 4.0], [5.0, 6.0]];
        let mut dst = zeros(3, 2);
        compose_vertical(&top, &bottom, &mut dst).unwrap();
        assert_eq!(dst, array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);

        let mut wrong = zeros::<f64>(2, 2);
        assert!(matches!(
            compose_vertical(&top, &bottom, &mut wrong),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_compose_horizontal() {
        let left = array![[1.0_f64], [3.0]];
        let right = array![[2.0_f64, 9.0], [4.0, 9.0]];
        let mut dst = zeros(2, 3);
        compose_horizontal(&left, &right, &mut dst).unwrap();
        assert_eq!(dst, array![[1.0, 2.0, 9.0], [3.0, 4.0, 9.0]]);
    }

    #[test]
    fn test_compose_block() {
        let a11 = array![[1.0_f64]];
        let a12 = array![[2.0_f64, 3.0]];
        let a21 = array![[4.0_f64], [7.0]];
        let a22 = array![[5.0_f64, 6.0], [8.0, 9.0]];
        let mut dst = zeros(3, 3);
        compose_block(&a11, &a12, &a21, &a22, &mut dst).unwrap();
        assert_eq!(
            dst,
            array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
        );
    }

    #[test]
    fn test_compose_block_rejects_ragged_blocks() {
        let a11 = array![[1.0_f64]];
        let a12 = array![[2.0_f64, 3.0], [0.0, 0.0]]; // row count disagrees with a11
        let a21 = array![[4.0_f64]];
        let a22 = array![[5.0_f64, 6.0]];
        let mut dst = zeros::<f64>(2, 3);
        assert!(matches!(
            compose_block(&a11, &a12, &a21, &a22, &mut dst),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }
}
