use std::fmt::{Debug, Display};

use num_traits::Float;

/// The element type a matrix kernel works with.
pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {
  /// Maximum absolute per element difference for two values to be considered equal.
  fn eq_tolerance() -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn eq_tolerance() -> Self {
    1e-4
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn eq_tolerance() -> Self {
    1e-4
  }
}
