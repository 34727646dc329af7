//! Scalar (single-threaded) backend implementation
//!
//! This is the portable baseline implementation that works on all platforms.
//! It uses simple loops and lets LLVM auto-vectorize the inner ones.
//!
//! # Performance
//!
//! `gemm` uses i-k-j loop order: for each output row it accumulates scaled rows
//! of `b`, so both operands are walked contiguously.

use super::MatrixBackend;
use crate::Element;

/// Scalar backend (portable, single-threaded)
pub struct ScalarBackend;

/// Block edge for the cache-blocked transpose
///
/// 64×64 f64 elements is 32KB, roughly one L1 data cache.
const TRANSPOSE_BLOCK: usize = 64;

/// Computes one output row of `a × b`
///
/// `a_row` is row `i` of `a` (length `k`), `b` is `k×n`, `c_row` has length `n`.
/// Shared with the parallel backend so both produce bitwise identical results.
pub(crate) fn gemm_row<T: Element>(a_row: &[T], b: &[T], n: usize, c_row: &mut [T]) {
    c_row.fill(T::zero());
    for (p, &a_ip) in a_row.iter().enumerate() {
        let b_row = &b[p * n..(p + 1) * n];
        for (c, &b_pj) in c_row.iter_mut().zip(b_row) {
            *c = *c + a_ip * b_pj;
        }
    }
}

impl MatrixBackend for ScalarBackend {
    fn axpy<T: Element>(alpha: T, x: &[T], y: &mut [T]) {
        debug_assert_eq!(x.len(), y.len());
        for (yi, &xi) in y.iter_mut().zip(x) {
            *yi = alpha * xi + *yi;
        }
    }

    fn scal<T: Element>(alpha: T, x: &mut [T]) {
        for xi in x.iter_mut() {
            *xi = alpha * *xi;
        }
    }

    fn gemm<T: Element>(m: usize, k: usize, n: usize, a: &[T], b: &[T], c: &mut [T]) {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        debug_assert_eq!(c.len(), m * n);

        if n == 0 {
            return;
        }
        for (i, c_row) in c.chunks_exact_mut(n).enumerate() {
            gemm_row(&a[i * k..(i + 1) * k], b, n, c_row);
        }
    }

    fn transpose<T: Element>(rows: usize, cols: usize, src: &[T], dst: &mut [T]) {
        debug_assert_eq!(src.len(), rows * cols);
        debug_assert_eq!(dst.len(), rows * cols);

        for i_block in (0..rows).step_by(TRANSPOSE_BLOCK) {
            for j_block in (0..cols).step_by(TRANSPOSE_BLOCK) {
                let i_end = (i_block + TRANSPOSE_BLOCK).min(rows);
                let j_end = (j_block + TRANSPOSE_BLOCK).min(cols);

                for i in i_block..i_end {
                    let src_row = i * cols;
                    for j in j_block..j_end {
                        // dst[j, i] = src[i, j]
                        dst[j * rows + i] = src[src_row + j];
                    }
                }
            }
        }
    }

    fn sum<T: Element>(a: &[T]) -> T {
        a.iter().copied().sum()
    }
}
