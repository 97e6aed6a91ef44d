#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
  /// The determinant is exactly zero, so no inverse exists.
  #[error("matrix is singular (determinant is zero) and has no inverse")]
  Singular,
  #[error("submatrix index ({row}, {col}) is out of range for a 3x3 matrix")]
  IndexOutOfRange { row: usize, col: usize },
}
