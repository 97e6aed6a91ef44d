use crate::{MatrixError, Scalar};

pub trait SquareMatrix<T: Scalar>: Sized + Copy {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// Fails with [`MatrixError::Singular`] when the determinant is exactly zero.
  fn inverse(&self) -> Result<Self, MatrixError>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or(Self::identity())
  }

  #[must_use]
  fn det(&self) -> T;

  /// Sum of the main diagonal.
  #[must_use]
  fn trace(&self) -> T;
}
