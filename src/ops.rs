//! Operator overloads for infallible matrix operations
//!
//! Shape-checked operations (`add`, `multiply`, `divide`, ...) stay as methods
//! returning `Result`. Only operations that cannot fail get operators.

use std::ops::{Div, Index, IndexMut, Mul, Neg};

use crate::{Element, Matrix};

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows(),
            self.cols()
        );
        &self.as_slice()[row * self.cols() + col]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, cols) = self.shape();
        match self.get_mut(row, col) {
            Some(value) => value,
            None => panic!("index ({row}, {col}) out of bounds for {rows}x{cols} matrix"),
        }
    }
}

impl<T: Element> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Element> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, alpha: T) -> Matrix<T> {
        self.scalar_multiply(alpha)
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, alpha: T) -> Matrix<T> {
        self.scalar_multiply(alpha)
    }
}

impl<T: Element> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, alpha: T) -> Matrix<T> {
        self.scalar_divide(alpha)
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, alpha: T) -> Matrix<T> {
        self.scalar_divide(alpha)
    }
}

// `alpha * matrix` needs concrete scalar types (orphan rule).
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_multiply(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_multiply(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn m2x2() -> Matrix<f64> {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_index() {
        let m = m2x2();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn test_index_mut() {
        let mut m = m2x2();
        m[(1, 1)] = 10.0;
        assert_eq!(m.get(1, 1), Ok(10.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = m2x2();
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_mut_out_of_bounds_panics() {
        let mut m = m2x2();
        m[(0, 2)] = 1.0;
    }

    #[test]
    fn test_neg_operator() {
        let m = m2x2();
        assert_eq!((-&m).as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(-(-m.clone()), m);
    }

    #[test]
    fn test_scalar_operators() {
        let m = m2x2();
        assert_eq!((&m * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((2.0 * &m).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((m.clone() / 2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);

        let f = Matrix::from_rows(&[[1.0f32, -1.0]]).unwrap();
        assert_eq!((3.0f32 * f).as_slice(), &[3.0f32, -3.0]);
    }
}
