//! Backend implementations of the dense matrix kernels
//!
//! `Matrix` never loops over its storage for the heavy operations itself; it hands
//! contiguous row-major slices to a [`MatrixBackend`]. This mirrors the classic
//! BLAS split (axpy/scal/gemm) and keeps the kernels swappable.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation
//! - `parallel`: Row-chunked rayon implementation (`parallel` feature)

pub mod scalar;

#[cfg(feature = "parallel")]
pub mod parallel;

use crate::Element;

/// Kernel trait implemented by every backend
///
/// All slices are row-major and sized exactly as described per method.
/// Implementations must produce the same result for the same input on every
/// call (accumulation order is fixed per output element).
pub trait MatrixBackend {
    /// `y[i] += alpha * x[i]`
    ///
    /// `x` and `y` must have the same length.
    fn axpy<T: Element>(alpha: T, x: &[T], y: &mut [T]);

    /// `x[i] *= alpha`
    fn scal<T: Element>(alpha: T, x: &mut [T]);

    /// `c = a × b` where `a` is `m×k`, `b` is `k×n` and `c` is `m×n`
    ///
    /// `c` is overwritten.
    fn gemm<T: Element>(m: usize, k: usize, n: usize, a: &[T], b: &[T], c: &mut [T]);

    /// Writes the `cols×rows` transpose of the `rows×cols` matrix `src` into `dst`
    fn transpose<T: Element>(rows: usize, cols: usize, src: &[T], dst: &mut [T]);

    /// Sum reduction over `a`, accumulated in index order
    fn sum<T: Element>(a: &[T]) -> T;
}
