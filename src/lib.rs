//! densegrid: Dense Row-Major Matrices
//!
//! **densegrid** provides a small, strongly-typed dense matrix for `f32` and `f64`:
//!
//! 1. **Construction & indexing** - bounds-checked element, row and column access
//! 2. **Arithmetic** - elementwise, scalar and axis-reduction operations
//! 3. **Linear algebra** - matrix product, transpose, LU-based inverse, solve and divide
//!
//! # Design Principles
//!
//! - **Row-major, owned storage**: one contiguous `Vec<T>`, no aliasing between matrices
//! - **Fail fast**: every shape or index violation is a [`MatrixError`], never a silent result
//! - **Pluggable kernels**: heavy loops run through a [`backends::MatrixBackend`]
//! - **Deterministic**: the same input always produces the same bits, on every backend
//!
//! # Quick Start
//!
//! ```rust
//! use densegrid::{Axis, Matrix};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::identity(2).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c, a);
//!
//! let col_sums = a.sum(Axis::Column);
//! assert_eq!(col_sums.as_slice(), &[4.0, 6.0]);
//! ```

pub mod backends;
pub mod element;
pub mod error;
pub mod lu;
pub mod matrix;
mod ops;

pub use element::Element;
pub use error::{MatrixError, Result};
pub use lu::LuDecomposition;
pub use matrix::{Axis, Matrix};

/// Backend execution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Single-threaded portable kernels
    Scalar,
    /// Rayon-parallel kernels (falls back to `Scalar` without the `parallel` feature)
    Parallel,
    /// Auto-select best available
    Auto,
}

impl Backend {
    /// Select the best available backend for the current build
    ///
    /// This is a convenience wrapper around `select_best_available_backend()`
    pub fn select_best() -> Self {
        select_best_available_backend()
    }

    /// Resolves `Auto` to a concrete backend, leaving other variants untouched
    pub fn resolve(self) -> Self {
        match self {
            Backend::Auto => select_best_available_backend(),
            other => other,
        }
    }
}

/// Select the best available backend for the current build
///
/// Returns [`Backend::Parallel`] when the crate is built with the `parallel`
/// feature, otherwise [`Backend::Scalar`].
///
/// # Examples
///
/// ```
/// use densegrid::{select_best_available_backend, Backend};
///
/// let backend = select_best_available_backend();
/// assert_ne!(backend, Backend::Auto);
/// ```
pub fn select_best_available_backend() -> Backend {
    #[cfg(feature = "parallel")]
    {
        Backend::Parallel
    }

    #[cfg(not(feature = "parallel"))]
    {
        Backend::Scalar
    }
}
