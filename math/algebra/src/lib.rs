//! A fixed size matrix kernel: 3x3 matrices (with 2x2 intermediates) supporting
//! element wise and matrix products, scalar ops, transpose, trace, cofactor
//! determinant and adjugate inverse.
//!
//! Every operation takes its inputs by value or shared reference and returns a
//! new matrix, so no output can alias an input.

mod error;
mod mat;
mod scalar;

pub use error::*;
pub use num_traits::{One, Zero};
pub use mat::*;
pub use scalar::*;
