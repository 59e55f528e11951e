//! LU decomposition via Crout's method
//!
//! Factors a square matrix in place into combined L/U form following a row
//! permutation, using partial pivoting with implicit scaling: candidate
//! pivots are compared after dividing by the largest magnitude in their row,
//! so pivot selection is not biased toward naturally large rows.
//!
//! Factorization is O(n³); each subsequent solve against the same factors is
//! O(n²), which is why factorization and solve are separate entry points.

use crate::error::MatrixError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Pivot value substituted for an exact zero when zero-pivot patching is
/// enabled (see [`LuConfig::patch_zero_pivot`]).
pub const TINY_PIVOT: f64 = 1e-22;

/// Configuration for LU factorization
#[derive(Debug, Clone, Copy, Default)]
pub struct LuConfig {
    /// Replace an exactly-zero pivot with [`TINY_PIVOT`] instead of failing.
    ///
    /// This trades a hard [`MatrixError::SingularMatrix`] for numerically
    /// garbage (but non-crashing) output; the substitution is logged at
    /// `warn` level. Off by default.
    pub patch_zero_pivot: bool,
}

/// LU factorization result
///
/// Stores the combined L/U factors along with the row permutation and its
/// sign.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Combined L and U factors (L is unit lower triangular, stored below
    /// the diagonal)
    pub lu: Array2<T>,
    /// Pivot row chosen at each elimination column
    pub pivots: Vec<usize>,
    /// Sign of the permutation: +1 for an even number of row swaps, −1 for
    /// odd
    pub sign: T,
    /// Matrix dimension
    pub n: usize,
}

impl<T: RealField> LuFactorization<T> {
    /// Overwrite `b` with the solution `x` of `A·x = b`.
    ///
    /// Two O(n²) passes: forward substitution (undoing the recorded row
    /// permutation on the fly, and skipping leading zeros in `b` so sparse
    /// right-hand sides cost less), then backward substitution dividing by
    /// the U diagonal.
    pub fn solve_in_place(&self, b: &mut Array1<T>) -> Result<(), MatrixError> {
        if b.len() != self.n {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.n, 1),
                got: (b.len(), 1),
            });
        }

        // Forward substitution, applying the permutation as we go. `first`
        // is the index of the first nonzero entry seen so far; until then
        // the inner loop can be skipped entirely.
        let mut first: Option<usize> = None;
        for i in 0..self.n {
            let ip = self.pivots[i];
            let mut sum = b[ip];
            b[ip] = b[i];
            if let Some(start) = first {
                for j in start..i {
                    sum = sum - self.lu[[i, j]] * b[j];
                }
            } else if sum != T::zero() {
                first = Some(i);
            }
            b[i] = sum;
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            let mut sum = b[i];
            for j in (i + 1)..self.n {
                sum = sum - self.lu[[i, j]] * b[j];
            }
            b[i] = sum / self.lu[[i, i]];
        }

        Ok(())
    }

    /// Solve `A·x = b`, returning a fresh solution vector.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, MatrixError> {
        let mut x = b.clone();
        self.solve_in_place(&mut x)?;
        Ok(x)
    }

    /// Determinant of the original matrix: the permutation sign times the
    /// product of the U diagonal.
    pub fn determinant(&self) -> T {
        let mut det = self.sign;
        for i in 0..self.n {
            det = det * self.lu[[i, i]];
        }
        det
    }
}

/// Factor square `a` in place into combined L/U form (Crout's method).
///
/// On success `a` holds the factors and the return value is the pivot
/// record plus the permutation sign. On failure (`NotSquare`, or
/// `SingularMatrix` from a fully-zero row or an unpatched zero pivot) `a`
/// is left partially modified and must be discarded.
pub fn lu_factorize_in_place<T: RealField>(
    a: &mut Array2<T>,
    config: &LuConfig,
) -> Result<(Vec<usize>, T), MatrixError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let n = rows;
    let mut pivots = vec![0usize; n];
    let mut sign = T::one();

    // Implicit scaling pass: record 1/|largest element| per row. A fully
    // zero row has no pivot anywhere, so the matrix is singular.
    let mut scale = vec![T::zero(); n];
    for i in 0..n {
        let mut big = T::zero();
        for j in 0..n {
            let tmp = a[[i, j]].abs();
            if tmp > big {
                big = tmp;
            }
        }
        if big == T::zero() {
            log::debug!("lu_factorize: row {} is entirely zero", i);
            return Err(MatrixError::SingularMatrix);
        }
        scale[i] = big.recip();
    }

    // Crout's reduction, column by column.
    for j in 0..n {
        for i in 0..j {
            let mut sum = a[[i, j]];
            for k in 0..i {
                sum = sum - a[[i, k]] * a[[k, j]];
            }
            a[[i, j]] = sum;
        }

        // Remaining column entries, tracking the scaled pivot candidate.
        let mut big = T::zero();
        let mut imax = j;
        for i in j..n {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum = sum - a[[i, k]] * a[[k, j]];
            }
            a[[i, j]] = sum;
            let dum = scale[i] * sum.abs();
            if dum >= big {
                big = dum;
                imax = i;
            }
        }

        if j != imax {
            for k in 0..n {
                let tmp = a[[imax, k]];
                a[[imax, k]] = a[[j, k]];
                a[[j, k]] = tmp;
            }
            sign = -sign;
            scale.swap(imax, j);
        }
        pivots[j] = imax;

        if a[[j, j]] == T::zero() {
            if config.patch_zero_pivot {
                log::warn!(
                    "lu_factorize: zero pivot at column {}, substituting {:e}",
                    j,
                    TINY_PIVOT
                );
                a[[j, j]] = T::from_f64(TINY_PIVOT).unwrap();
            } else {
                return Err(MatrixError::SingularMatrix);
            }
        }

        // Normalize the L sub-column below the pivot.
        if j != n - 1 {
            let dum = a[[j, j]].recip();
            for i in (j + 1)..n {
                a[[i, j]] = a[[i, j]] * dum;
            }
        }
    }

    Ok((pivots, sign))
}

/// Factor `a` with an explicit [`LuConfig`], leaving `a` untouched.
pub fn lu_factorize_with<T: RealField>(
    a: &Array2<T>,
    config: &LuConfig,
) -> Result<LuFactorization<T>, MatrixError> {
    let mut lu = a.clone();
    let (pivots, sign) = lu_factorize_in_place(&mut lu, config)?;
    let n = lu.nrows();
    Ok(LuFactorization {
        lu,
        pivots,
        sign,
        n,
    })
}

/// Factor `a` with the default configuration (strict failure on a zero
/// pivot), leaving `a` untouched.
pub fn lu_factorize<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>, MatrixError> {
    lu_factorize_with(a, &LuConfig::default())
}

/// Solve `A·x = b` in one call.
///
/// Convenience wrapper combining factorization and solve; use
/// [`lu_factorize`] directly when solving against the same matrix more than
/// once.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, MatrixError> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}
