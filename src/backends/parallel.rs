//! Rayon-parallel backend implementation
//!
//! Splits `gemm` and `transpose` over output rows. Each row is written by exactly
//! one task; `gemm` uses the same row kernel as [`ScalarBackend`], so results are
//! bitwise identical to the scalar backend regardless of thread count.

use rayon::prelude::*;

use super::scalar::{gemm_row, ScalarBackend};
use super::MatrixBackend;
use crate::Element;

/// Parallel backend (rayon global pool)
pub struct ParallelBackend;

impl MatrixBackend for ParallelBackend {
    fn axpy<T: Element>(alpha: T, x: &[T], y: &mut [T]) {
        debug_assert_eq!(x.len(), y.len());
        y.par_iter_mut()
            .zip(x.par_iter())
            .for_each(|(yi, &xi)| *yi = alpha * xi + *yi);
    }

    fn scal<T: Element>(alpha: T, x: &mut [T]) {
        x.par_iter_mut().for_each(|xi| *xi = alpha * *xi);
    }

    fn gemm<T: Element>(m: usize, k: usize, n: usize, a: &[T], b: &[T], c: &mut [T]) {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        debug_assert_eq!(c.len(), m * n);

        if n == 0 {
            return;
        }
        c.par_chunks_mut(n).enumerate().for_each(|(i, c_row)| {
            gemm_row(&a[i * k..(i + 1) * k], b, n, c_row);
        });
    }

    fn transpose<T: Element>(rows: usize, cols: usize, src: &[T], dst: &mut [T]) {
        debug_assert_eq!(src.len(), rows * cols);
        debug_assert_eq!(dst.len(), rows * cols);

        if rows == 0 {
            return;
        }
        // One task per output row, i.e. per source column
        dst.par_chunks_mut(rows).enumerate().for_each(|(j, dst_row)| {
            for (i, d) in dst_row.iter_mut().enumerate() {
                *d = src[i * cols + j];
            }
        });
    }

    // Kept sequential: a parallel tree reduction would change the summation order.
    fn sum<T: Element>(a: &[T]) -> T {
        ScalarBackend::sum(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_gemm_matches_scalar() {
        let (m, k, n) = (37, 19, 23);
        let a: Vec<f64> = (0..m * k).map(|i| ((i * 7) % 13) as f64 - 6.5).collect();
        let b: Vec<f64> = (0..k * n).map(|i| ((i * 5) % 11) as f64 * 0.25).collect();

        let mut c_scalar = vec![0.0; m * n];
        let mut c_parallel = vec![0.0; m * n];
        ScalarBackend::gemm(m, k, n, &a, &b, &mut c_scalar);
        ParallelBackend::gemm(m, k, n, &a, &b, &mut c_parallel);

        assert_eq!(c_scalar, c_parallel);
    }

    #[test]
    fn test_parallel_transpose_matches_scalar() {
        for (rows, cols) in [(1, 1), (1, 9), (9, 1), (70, 131)] {
            let src: Vec<f32> = (0..rows * cols).map(|i| i as f32).collect();
            let mut t_scalar = vec![0.0; rows * cols];
            let mut t_parallel = vec![0.0; rows * cols];
            ScalarBackend::transpose(rows, cols, &src, &mut t_scalar);
            ParallelBackend::transpose(rows, cols, &src, &mut t_parallel);
            assert_eq!(t_scalar, t_parallel, "{rows}x{cols}");
        }
    }

    #[test]
    fn test_parallel_sum_matches_scalar() {
        let a: Vec<f64> = (0..10_001).map(|i| 1.0 / (i as f64 + 1.0)).collect();
        assert_eq!(ParallelBackend::sum(&a), ScalarBackend::sum(&a));
        assert_eq!(ParallelBackend::sum::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_parallel_axpy_and_scal() {
        let x: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let mut y = vec![1.0f32; 1000];
        ParallelBackend::axpy(2.0, &x, &mut y);
        ParallelBackend::scal(0.5, &mut y);
        for (i, v) in y.iter().enumerate() {
            assert_eq!(*v, (2.0 * i as f32 + 1.0) * 0.5);
        }
    }
}
