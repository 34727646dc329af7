//! Dense matrix type
//!
//! Provides a 2D matrix with row-major storage, bounds-checked accessors, and the
//! arithmetic and linear-algebra operations built on the backend kernels.
//!
//! # Example
//!
//! ```
//! use densegrid::Matrix;
//!
//! // Create a 2x3 matrix
//! let m = Matrix::<f64>::zeros(2, 3).unwrap();
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use std::fmt;

#[cfg(feature = "parallel")]
use crate::backends::parallel::ParallelBackend;
use crate::backends::scalar::ScalarBackend;
use crate::backends::MatrixBackend;
use crate::{Backend, Element, LuDecomposition, MatrixError, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Minimum output rows before a product is split across threads
#[cfg(feature = "parallel")]
const PARALLEL_GEMM_THRESHOLD: usize = 64;

/// Minimum element count before axpy/scal are split across threads
#[cfg(feature = "parallel")]
const PARALLEL_ELEMENTWISE_THRESHOLD: usize = 1 << 16;

/// Axis along which [`Matrix::sum`] reduces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Collapse each row to a scalar, giving a `rows×1` matrix
    Row,
    /// Collapse each column to a scalar, giving a `1×cols` matrix
    #[default]
    Column,
}

/// A 2D matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// Both dimensions are always non-zero and `as_slice().len() == rows * cols`.
/// Equality compares shape and elements exactly; the backend tag is ignored.
///
/// # Example
///
/// ```
/// use densegrid::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(0, 0), Ok(1.0));
/// assert_eq!(m.get(0, 1), Ok(2.0));
/// assert_eq!(m.get(1, 0), Ok(3.0));
/// assert_eq!(m.get(1, 1), Ok(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    backend: Backend,
}

impl<T> Matrix<T> {
    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` if the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a reference to the underlying row-major data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Iterates over all elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a copy of this matrix tagged with a specific backend
    ///
    /// `Backend::Auto` is resolved immediately.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend.resolve();
        self
    }

    /// Flat offset of (row, col), or `IndexOutOfRange`
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: col,
                bound: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix with every element set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if either dimension is zero
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::new(3, 4, 1.5).unwrap();
    /// assert_eq!(m.shape(), (3, 4));
    /// assert!(m.iter().all(|&x| x == 1.5));
    /// ```
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyInput);
        }
        Ok(Self::filled_with_backend(
            rows,
            cols,
            fill,
            Backend::select_best(),
        ))
    }

    /// Creates a matrix filled with zeros
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::<f32>::zeros(3, 3).unwrap();
    /// assert_eq!(m.get(1, 1), Ok(0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, T::zero())
    }

    /// Creates an identity matrix (square matrix with 1s on diagonal)
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(m.get(0, 0), Ok(1.0));
    /// assert_eq!(m.get(0, 1), Ok(0.0));
    /// assert_eq!(m.get(1, 1), Ok(1.0));
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Creates a matrix from row-major data
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if either dimension is zero
    /// - `DimensionMismatch` if `data.len() != rows * cols` (the data is reported
    ///   as a `1 x len` operand)
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyInput);
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                operation: "from_vec",
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Matrix {
            rows,
            cols,
            data,
            backend: Backend::select_best(),
        })
    }

    /// Creates a matrix from a row-major slice by copying the data
    ///
    /// Same validation as [`Matrix::from_vec`].
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix from nested rows, rejecting ragged input
    ///
    /// The row count is the outer length and the column count is the length of
    /// the first row. Every row must have exactly that length.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if there are no rows or the first row is empty
    /// - `DimensionMismatch` if any row length differs from the first
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), Ok(3.0));
    ///
    /// let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::EmptyInput);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    operation: "from_rows",
                    left: (1, cols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }

        Self::from_vec(rows.len(), cols, data)
    }

    /// Creates a matrix from nested rows, padding or truncating ragged rows
    ///
    /// The column count is taken from the first row. Each row contributes its
    /// first `min(cols, row.len())` elements; shorter rows leave trailing zeros
    /// and longer rows are truncated.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if there are no rows or the first row is empty
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_rows_padded(&[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0]);
    /// ```
    pub fn from_rows_padded<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::EmptyInput);
        }

        let mut m = Self::zeros(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.len().min(cols);
            m.data[i * cols..i * cols + len].copy_from_slice(&row[..len]);
        }
        Ok(m)
    }

    /// Internal constructor; callers guarantee non-zero dimensions
    fn filled_with_backend(rows: usize, cols: usize, fill: T, backend: Backend) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![fill; rows * cols],
            backend,
        }
    }

    /// Gets the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `row < rows` and `col < cols`
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `row < rows` and `col < cols`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Gets a mutable reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let idx = self.offset(row, col).ok()?;
        self.data.get_mut(idx)
    }

    /// Borrows row `row` as a contiguous slice of length `cols`
    pub fn row_slice(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: row,
                bound: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Copies row `row` out as a vector of length `cols`
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.row(1).unwrap(), vec![3.0, 4.0]);
    /// ```
    pub fn row(&self, row: usize) -> Result<Vec<T>> {
        self.row_slice(row).map(<[T]>::to_vec)
    }

    /// Overwrites row `row` with `values`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row >= rows` or `values.len() != cols`
    /// (in the latter case `index` is the supplied length and `bound` the
    /// required one)
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: row,
                bound: self.rows,
            });
        }
        if values.len() != self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: values.len(),
                bound: self.cols,
            });
        }
        let start = row * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Gathers column `col` (stride `cols`) into a vector of length `rows`
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.column(1).unwrap(), vec![2.0, 4.0]);
    /// ```
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: col,
                bound: self.cols,
            });
        }
        Ok(self
            .data
            .iter()
            .skip(col)
            .step_by(self.cols)
            .copied()
            .collect())
    }

    /// Scatters `values` into column `col`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `col >= cols` or `values.len() != rows`
    pub fn set_column(&mut self, col: usize, values: &[T]) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                index: col,
                bound: self.cols,
            });
        }
        if values.len() != self.rows {
            return Err(MatrixError::IndexOutOfRange {
                index: values.len(),
                bound: self.rows,
            });
        }
        for (dst, &v) in self
            .data
            .iter_mut()
            .skip(col)
            .step_by(self.cols)
            .zip(values)
        {
            *dst = v;
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Elementwise addition
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both matrices have the same shape
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[10.0, 20.0], [30.0, 40.0]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[11.0, 22.0, 33.0, 44.0]);
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "add")?;
        let mut result = other.clone().with_backend(self.backend);
        axpy(self.backend, T::one(), &self.data, &mut result.data);
        Ok(result)
    }

    /// Elementwise subtraction (`self - other`)
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both matrices have the same shape
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "sub")?;
        let mut result = self.clone();
        axpy(self.backend, -T::one(), &other.data, &mut result.data);
        Ok(result)
    }

    /// Multiplies every element by `alpha`
    pub fn scalar_multiply(&self, alpha: T) -> Self {
        let mut result = self.clone();
        scal(self.backend, alpha, &mut result.data);
        result
    }

    /// Divides every element by `alpha`
    pub fn scalar_divide(&self, alpha: T) -> Self {
        self.map(|x| x / alpha)
    }

    /// Elementwise (Hadamard) product
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both matrices have the same shape
    pub fn elementwise_multiply(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "elementwise_multiply")?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| x * y)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
            backend: self.backend,
        })
    }

    /// Negates every element
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    /// Applies `f` to every element independently
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[0.0, 1.0]]).unwrap();
    /// let c = m.map(f64::cos);
    /// assert_eq!(c.get(0, 0), Ok(1.0));
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
            backend: self.backend,
        }
    }

    /// Raises every element to the power `y`
    pub fn pow(&self, y: T) -> Self {
        self.map(|x| x.powf(y))
    }

    /// Elementwise natural exponential
    pub fn exp(&self) -> Self {
        self.map(T::exp)
    }

    /// Returns the `cols x rows` transpose
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.cols(), 2);
    /// assert_eq!(t.get(0, 1), Ok(4.0));
    /// assert_eq!(t.get(1, 0), Ok(2.0));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %format!("{}x{}", self.rows, self.cols))))]
    pub fn transpose(&self) -> Self {
        let mut result = Self::filled_with_backend(self.cols, self.rows, T::zero(), self.backend);
        transpose(self.backend, self.rows, self.cols, &self.data, &mut result.data);
        result
    }

    /// Sums along `axis`
    ///
    /// `Axis::Row` gives a `rows x 1` matrix of row sums; `Axis::Column` gives a
    /// `1 x cols` matrix of column sums. Accumulation runs in index order.
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::{Axis, Matrix};
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.sum(Axis::Row).as_slice(), &[6.0, 15.0]);
    /// assert_eq!(m.sum(Axis::Column).as_slice(), &[5.0, 7.0, 9.0]);
    /// ```
    pub fn sum(&self, axis: Axis) -> Self {
        match axis {
            Axis::Row => {
                let data = self
                    .data
                    .chunks_exact(self.cols)
                    .map(|row| sum(self.backend, row))
                    .collect();
                Matrix {
                    rows: self.rows,
                    cols: 1,
                    data,
                    backend: self.backend,
                }
            }
            Axis::Column => {
                let data = (0..self.cols)
                    .map(|c| {
                        let column: Vec<T> = self
                            .data
                            .iter()
                            .skip(c)
                            .step_by(self.cols)
                            .copied()
                            .collect();
                        sum(self.backend, &column)
                    })
                    .collect();
                Matrix {
                    rows: 1,
                    cols: self.cols,
                    data,
                    backend: self.backend,
                }
            }
        }
    }

    /// Matrix multiplication
    ///
    /// Computes `C = A × B` where A is `m×n`, B is `n×p`, and C is `m×p`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols != other.rows`
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dims = %format!("{}x{} @ {}x{}", self.rows, self.cols, other.rows, other.cols))))]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut result = Self::filled_with_backend(m, n, T::zero(), self.backend);

        match self.backend {
            #[cfg(feature = "parallel")]
            Backend::Parallel if m >= PARALLEL_GEMM_THRESHOLD => {
                ParallelBackend::gemm(m, k, n, &self.data, &other.data, &mut result.data);
            }
            _ => ScalarBackend::gemm(m, k, n, &self.data, &other.data, &mut result.data),
        }

        Ok(result)
    }

    /// Right division: `self × other⁻¹`
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `other` is not square
    /// - `SingularMatrix` if `other` is not invertible
    /// - `DimensionMismatch` if `self.cols != other.rows`
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[2.0, 4.0], [6.0, 8.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
    /// assert_eq!(a.divide(&b).unwrap().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn divide(&self, other: &Self) -> Result<Self> {
        let inverse = other.inverse()?;
        if self.cols != inverse.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "divide",
                left: self.shape(),
                right: other.shape(),
            });
        }
        self.multiply(&inverse)
    }

    /// Inverse via LU decomposition with partial pivoting
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if the matrix is not square
    /// - `SingularMatrix` if a pivot vanishes during factorization
    ///
    /// # Example
    ///
    /// ```
    /// use densegrid::{Matrix, MatrixError};
    ///
    /// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// let id = a.multiply(&inv).unwrap();
    /// assert!(id.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
    ///
    /// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    /// assert_eq!(singular.inverse(), Err(MatrixError::SingularMatrix));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dims = %format!("{}x{}", self.rows, self.cols))))]
    pub fn inverse(&self) -> Result<Self> {
        LuDecomposition::new(self)?.inverse()
    }

    /// Solves `self × X = b` for `X`
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::inverse`], plus `DimensionMismatch` if
    /// `b.rows() != self.rows()`
    #[cfg_attr(feature = "tracing", instrument(skip(self, b), fields(dims = %format!("{}x{} \\ {}x{}", self.rows, self.cols, b.rows, b.cols))))]
    pub fn solve(&self, b: &Self) -> Result<Self> {
        LuDecomposition::new(self)?.solve(b)
    }

    /// Determinant via LU decomposition; zero for singular matrices
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square
    pub fn determinant(&self) -> Result<T> {
        Ok(LuDecomposition::new(self)?.determinant())
    }

    /// Returns `true` if shapes match and every pair of elements differs by at
    /// most `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

fn axpy<T: Element>(backend: Backend, alpha: T, x: &[T], y: &mut [T]) {
    match backend {
        #[cfg(feature = "parallel")]
        Backend::Parallel if x.len() >= PARALLEL_ELEMENTWISE_THRESHOLD => {
            ParallelBackend::axpy(alpha, x, y)
        }
        _ => ScalarBackend::axpy(alpha, x, y),
    }
}

fn scal<T: Element>(backend: Backend, alpha: T, x: &mut [T]) {
    match backend {
        #[cfg(feature = "parallel")]
        Backend::Parallel if x.len() >= PARALLEL_ELEMENTWISE_THRESHOLD => {
            ParallelBackend::scal(alpha, x)
        }
        _ => ScalarBackend::scal(alpha, x),
    }
}

fn transpose<T: Element>(backend: Backend, rows: usize, cols: usize, src: &[T], dst: &mut [T]) {
    match backend {
        #[cfg(feature = "parallel")]
        Backend::Parallel if src.len() >= PARALLEL_ELEMENTWISE_THRESHOLD => {
            ParallelBackend::transpose(rows, cols, src, dst)
        }
        _ => ScalarBackend::transpose(rows, cols, src, dst),
    }
}

fn sum<T: Element>(backend: Backend, x: &[T]) -> T {
    match backend {
        #[cfg(feature = "parallel")]
        Backend::Parallel => ParallelBackend::sum(x),
        _ => ScalarBackend::sum(x),
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            let (open, close) = match (i, self.rows) {
                (0, 1) => ("(", ")"),
                (0, _) => ("⎛", "⎞"),
                (i, rows) if i == rows - 1 => ("⎝", "⎠"),
                _ => ("⎜", "⎥"),
            };
            write!(f, "{open}\t")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "\t{close}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
