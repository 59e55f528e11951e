//! Gauss-Jordan elimination with full pivoting
//!
//! Simultaneously computes the inverse of a square matrix and the solutions
//! for a block of right-hand-side columns. Full pivoting scans the entire
//! remaining submatrix (rows and columns) for the largest-magnitude pivot,
//! which is more stable than partial pivoting at the cost of the column
//! bookkeeping needed to unscramble the result.
//!
//! This path is O(n³) per call even for a single right-hand side; prefer
//! [`crate::solve::lu_factorize`] for repeated solves. It exists for the
//! "I need the explicit inverse matrix" use case.

use crate::error::MatrixError;
use crate::traits::RealField;
use ndarray::Array2;

/// Invert `a` in place and solve for every column of `b` in place.
///
/// On success `a` holds `A⁻¹` and `b` holds `A⁻¹·B`. `a` must be square and
/// `b` must have the same row count (any column count, including zero). On
/// [`MatrixError::SingularMatrix`] both operands are left in a destroyed,
/// unspecified state and must be discarded.
pub fn gauss_jordan<T: RealField>(
    a: &mut Array2<T>,
    b: &mut Array2<T>,
) -> Result<(), MatrixError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let n = rows;
    let m = b.ncols();
    if b.nrows() != n {
        return Err(MatrixError::ShapeMismatch {
            expected: (n, m),
            got: b.dim(),
        });
    }

    // Pivot bookkeeping: how often each column has been used as pivot, and
    // the row/column interchanged at each iteration (for the final
    // unscramble).
    let mut pivot_used = vec![0usize; n];
    let mut row_index = vec![0usize; n];
    let mut col_index = vec![0usize; n];

    for iter in 0..n {
        // Full pivot search over all rows and columns not yet pivoted.
        let mut big = T::zero();
        let mut irow = 0;
        let mut icol = 0;
        for j in 0..n {
            if pivot_used[j] != 1 {
                for k in 0..n {
                    if pivot_used[k] == 0 {
                        if a[[j, k]].abs() >= big {
                            big = a[[j, k]].abs();
                            irow = j;
                            icol = k;
                        }
                    } else if pivot_used[k] > 1 {
                        log::debug!("gauss_jordan: column {} pivoted more than once", k);
                        return Err(MatrixError::SingularMatrix);
                    }
                }
            }
        }
        pivot_used[icol] += 1;

        // Move the pivot onto the diagonal by a row interchange, recorded
        // so the column permutation can be undone at the end.
        if irow != icol {
            for l in 0..n {
                let tmp = a[[irow, l]];
                a[[irow, l]] = a[[icol, l]];
                a[[icol, l]] = tmp;
            }
            for l in 0..m {
                let tmp = b[[irow, l]];
                b[[irow, l]] = b[[icol, l]];
                b[[icol, l]] = tmp;
            }
        }
        row_index[iter] = irow;
        col_index[iter] = icol;

        if a[[icol, icol]] == T::zero() {
            log::debug!("gauss_jordan: zero pivot at iteration {}", iter);
            return Err(MatrixError::SingularMatrix);
        }

        // Normalize the pivot row. Setting the pivot cell to 1 first makes
        // the uniform scaling drop 1/pivot into place, which is exactly the
        // inverse's entry there.
        let pivinv = a[[icol, icol]].recip();
        a[[icol, icol]] = T::one();
        for l in 0..n {
            a[[icol, l]] = a[[icol, l]] * pivinv;
        }
        for l in 0..m {
            b[[icol, l]] = b[[icol, l]] * pivinv;
        }

        // Eliminate the pivot column from every other row, zeroing the
        // eliminated cell first so the inverse's entry accumulates there.
        for row in 0..n {
            if row != icol {
                let factor = a[[row, icol]];
                a[[row, icol]] = T::zero();
                for l in 0..n {
                    let delta = a[[icol, l]] * factor;
                    a[[row, l]] = a[[row, l]] - delta;
                }
                for l in 0..m {
                    let delta = b[[icol, l]] * factor;
                    b[[row, l]] = b[[row, l]] - delta;
                }
            }
        }
    }

    // Undo the column interchanges in reverse order to restore original
    // column order.
    for iter in (0..n).rev() {
        if row_index[iter] != col_index[iter] {
            for k in 0..n {
                let tmp = a[[k, row_index[iter]]];
                a[[k, row_index[iter]]] = a[[k, col_index[iter]]];
                a[[k, col_index[iter]]] = tmp;
            }
        }
    }

    Ok(())
}

/// Allocating inverse: returns `A⁻¹` without touching `a`.
pub fn invert<T: RealField>(a: &Array2<T>) -> Result<Array2<T>, MatrixError> {
    let mut inv = a.clone();
    let mut rhs = Array2::zeros((a.nrows(), 0));
    gauss_jordan(&mut inv, &mut rhs)?;
    Ok(inv)
}

/// Allocating solve: returns `(A⁻¹, A⁻¹·B)` without touching the operands.
pub fn gauss_jordan_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> Result<(Array2<T>, Array2<T>), MatrixError> {
    let mut inv = a.clone();
    let mut x = b.clone();
    gauss_jordan(&mut inv, &mut x)?;
    Ok((inv, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::{identity, is_identity, matmul, zeros};
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_dominant(n: usize, rng: &mut StdRng) -> Array2<f64> {
        let mut a = zeros::<f64>(n, n);
        for i in 0..n {
            let mut row_sum = 0.0;
            for j in 0..n {
                if i != j {
                    let v: f64 = rng.gen_range(-1.0..1.0);
                    a[[i, j]] = v;
                    row_sum += v.abs();
                }
            }
            a[[i, i]] = row_sum + 1.0;
        }
        a
    }

    #[test]
    fn test_identity_inputs_pass_through() {
        let mut a = identity::<f64>(3);
        let mut b = identity::<f64>(3);
        gauss_jordan(&mut a, &mut b).unwrap();
        assert!(is_identity(&a));
        assert!(is_identity(&b));
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 3, 5, 8, 20] {
            let a = random_dominant(n, &mut rng);
            let inv = invert(&a).expect("inversion should succeed");

            let product = matmul(&a, &inv).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let want = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(product[[i, j]], want, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_identity_rhs_yields_inverse_in_both() {
        // A⁻¹·I = A⁻¹, so both outputs must match.
        let mut a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let mut b = identity::<f64>(2);
        gauss_jordan(&mut a, &mut b).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(a[[i, j]], b[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_solve_columns() {
        // Two right-hand sides solved simultaneously.
        let a = array![[2.0_f64, -1.0], [5.0, -3.0]];
        let b = array![[7.0_f64, 1.0], [18.0, 1.0]];
        let (inv, x) = gauss_jordan_solve(&a, &b).unwrap();

        assert_relative_eq!(x[[0, 0]], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[[1, 0]], -1.0, epsilon = 1e-10);

        // The inverse solves the same system
        let x_again = matmul(&inv, &b).unwrap();
        assert_relative_eq!(x_again[[0, 0]], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x_again[[1, 0]], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rejects_non_square() {
        let mut a = zeros::<f64>(2, 3);
        let mut b = zeros::<f64>(2, 1);
        assert_eq!(
            gauss_jordan(&mut a, &mut b).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_rejects_rhs_row_mismatch() {
        let mut a = identity::<f64>(3);
        let mut b = zeros::<f64>(2, 1);
        assert!(matches!(
            gauss_jordan(&mut a, &mut b),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_singular_matrix_fails() {
        let mut a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let mut b = identity::<f64>(2);
        assert_eq!(
            gauss_jordan(&mut a, &mut b).unwrap_err(),
            MatrixError::SingularMatrix
        );

        let mut z = zeros::<f64>(3, 3);
        let mut b = identity::<f64>(3);
        assert_eq!(
            gauss_jordan(&mut z, &mut b).unwrap_err(),
            MatrixError::SingularMatrix
        );
    }

    #[test]
    fn test_full_pivoting_handles_zero_diagonal() {
        // Partial pivoting on the first column alone would still work here,
        // but the zero diagonal forces at least one interchange.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let inv = invert(&a).unwrap();
        assert_relative_eq!(inv[[0, 0]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(inv[[0, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 1]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_and_gauss_jordan_agree() {
        let mut rng = StdRng::seed_from_u64(99);
        let a = random_dominant(6, &mut rng);
        let b = ndarray::Array1::from_iter((0..6).map(|i| i as f64 - 2.5));

        let x_lu = crate::solve::lu_solve(&a, &b).unwrap();

        let b_col = b.clone().insert_axis(ndarray::Axis(1));
        let (_, x_gj) = gauss_jordan_solve(&a, &b_col).unwrap();
        for i in 0..6 {
            assert_relative_eq!(x_lu[i], x_gj[[i, 0]], epsilon = 1e-9);
        }
    }
}
