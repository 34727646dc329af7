//! Scalar element bound for matrices

use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// Floating-point element type a [`Matrix`](crate::Matrix) can hold.
///
/// Implemented for `f32` and `f64` only.
pub trait Element: Float + Sum + Debug + Display + Send + Sync + 'static {}

impl Element for f32 {}

impl Element for f64 {}
