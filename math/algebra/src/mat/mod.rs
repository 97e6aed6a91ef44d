mod approx;
mod dimension;
mod display;
mod mat2;
mod mat3;

#[cfg(test)]
mod test;

pub use approx::*;
pub use dimension::*;
pub use mat2::*;
pub use mat3::*;
