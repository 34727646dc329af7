//! LU decomposition with partial pivoting
//!
//! Factors a square matrix as `P·A = L·U`, where `L` is unit lower triangular,
//! `U` is upper triangular and `P` is a row permutation. The factorization backs
//! [`Matrix::inverse`], [`Matrix::solve`], [`Matrix::divide`] and
//! [`Matrix::determinant`].
//!
//! # Singularity
//!
//! A pivot that is exactly zero (or not finite) marks the matrix singular. The
//! factorization still completes so the determinant can be reported as zero, but
//! `solve` and `inverse` fail with [`MatrixError::SingularMatrix`]. No
//! regularization is applied: a badly conditioned matrix still factors and yields
//! an inverse with amplified rounding error.
//!
//! [`LuDecomposition::with_tolerance`] treats pivots up to a caller-chosen
//! magnitude as zero, for inputs whose elimination leaves rounding residue.
//!
//! # Example
//!
//! ```
//! use densegrid::{LuDecomposition, Matrix};
//!
//! let a = Matrix::<f64>::from_rows(&[[0.0, 2.0], [3.0, 1.0]]).unwrap();
//! let lu = LuDecomposition::new(&a).unwrap();
//!
//! assert_eq!(lu.pivots(), &[1, 0]);
//! assert!((lu.determinant() + 6.0).abs() < 1e-12);
//! ```

use crate::{Backend, Element, Matrix, MatrixError, Result};

/// Packed LU factorization of a square matrix
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    n: usize,
    /// `L` strictly below the diagonal (unit diagonal implied), `U` on and above
    lu: Vec<T>,
    /// Row `i` of `P·A` is row `pivots[i]` of `A`
    pivots: Vec<usize>,
    /// Determinant of `P`: +1 or -1
    sign: T,
    singular: bool,
    backend: Backend,
}

impl<T: Element> LuDecomposition<T> {
    /// Factors `matrix`; only exactly-zero or non-finite pivots are singular
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `matrix` is not square (the right operand
    /// is reported as the square shape that was expected)
    pub fn new(matrix: &Matrix<T>) -> Result<Self> {
        Self::with_tolerance(matrix, T::zero())
    }

    /// Factors `matrix`, treating any pivot with `|pivot| <= tolerance` as zero
    ///
    /// # Errors
    ///
    /// Same as [`LuDecomposition::new`]
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::{LuDecomposition, Matrix};
    ///
    /// // Elimination leaves a rounding-level residue instead of an exact zero
    /// let a = Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 6.0]]).unwrap();
    /// let lu = LuDecomposition::with_tolerance(&a, 1e-12).unwrap();
    /// assert!(lu.is_singular());
    /// ```
    pub fn with_tolerance(matrix: &Matrix<T>, tolerance: T) -> Result<Self> {
        if !matrix.is_square() {
            return Err(MatrixError::DimensionMismatch {
                operation: "lu",
                left: matrix.shape(),
                right: (matrix.rows(), matrix.rows()),
            });
        }

        let n = matrix.rows();
        let mut lu = matrix.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut sign = T::one();
        let mut singular = false;

        for k in 0..n {
            // Partial pivoting: largest magnitude in column k at or below the diagonal
            let mut p = k;
            let mut max = lu[k * n + k].abs();
            for i in (k + 1)..n {
                let v = lu[i * n + k].abs();
                if v > max {
                    max = v;
                    p = i;
                }
            }

            if p != k {
                for j in 0..n {
                    lu.swap(k * n + j, p * n + j);
                }
                pivots.swap(k, p);
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            // Negated comparison so NaN pivots count as singular too
            if !(pivot.abs() > tolerance) || !pivot.is_finite() {
                #[cfg(feature = "tracing")]
                tracing::debug!(column = k, pivot = ?pivot, "singular pivot");
                singular = true;
                continue;
            }

            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                if factor == T::zero() {
                    continue;
                }
                for j in (k + 1)..n {
                    lu[i * n + j] = lu[i * n + j] - factor * lu[k * n + j];
                }
            }
        }

        Ok(Self {
            n,
            lu,
            pivots,
            sign,
            singular,
            backend: matrix.backend(),
        })
    }

    /// Order of the factored matrix
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Row permutation: row `i` of `P·A` is row `pivots()[i]` of `A`
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Returns `true` if a vanishing pivot was encountered
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Determinant of the factored matrix; zero when singular
    pub fn determinant(&self) -> T {
        if self.singular {
            return T::zero();
        }
        (0..self.n).fold(self.sign, |acc, i| acc * self.lu[i * self.n + i])
    }

    /// Solves `A·X = b`, one column of `b` at a time
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `b.rows()` differs from the order of `A`
    /// - `SingularMatrix` if `A` is singular
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        let n = self.n;
        if b.rows() != n {
            return Err(MatrixError::DimensionMismatch {
                operation: "solve",
                left: (n, n),
                right: b.shape(),
            });
        }
        if self.singular {
            return Err(MatrixError::SingularMatrix);
        }

        let m = b.cols();
        let rhs = b.as_slice();
        let mut out = vec![T::zero(); n * m];
        let mut x = vec![T::zero(); n];

        for col in 0..m {
            for (i, xi) in x.iter_mut().enumerate() {
                *xi = rhs[self.pivots[i] * m + col];
            }

            // Forward substitution with unit-diagonal L
            for i in 0..n {
                let mut acc = x[i];
                for p in 0..i {
                    acc = acc - self.lu[i * n + p] * x[p];
                }
                x[i] = acc;
            }

            // Back substitution with U
            for i in (0..n).rev() {
                let mut acc = x[i];
                for p in (i + 1)..n {
                    acc = acc - self.lu[i * n + p] * x[p];
                }
                x[i] = acc / self.lu[i * n + i];
            }

            for (i, &xi) in x.iter().enumerate() {
                out[i * m + col] = xi;
            }
        }

        Ok(Matrix::from_vec(n, m, out)?.with_backend(self.backend))
    }

    /// Inverse of the factored matrix
    ///
    /// # Errors
    ///
    /// Returns `SingularMatrix` if `A` is singular
    pub fn inverse(&self) -> Result<Matrix<T>> {
        if self.singular {
            return Err(MatrixError::SingularMatrix);
        }
        let identity = Matrix::identity(self.n)?.with_backend(self.backend);
        self.solve(&identity)
    }
}
