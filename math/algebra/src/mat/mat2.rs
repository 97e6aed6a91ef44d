use std::ops::{Add, Index, Mul};

use facet::Facet;
use serde::{Deserialize, Serialize};

use crate::*;

/// A 2x2 matrix stored row by row, the result type of [`Mat3::submatrix`].
#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Mat2<T> {
  pub a1: T, pub a2: T,
  pub b1: T, pub b2: T,
}

impl<T> Mat2<T> {
  pub fn map<X>(self, f: impl Fn(T) -> X) -> Mat2<X> {
    let arr: [T; 4] = self.into();
    arr.map(f).into()
  }
}

impl<T: Scalar> SquareMatrix<T> for Mat2<T> {
  fn identity() -> Self {
    Self::one()
  }
  fn transpose(&self) -> Self {
    let (a1, a2) = (self.a1, self.b1);
    let (b1, b2) = (self.a2, self.b2);
    #[rustfmt::skip]
    let m = Mat2 {
      a1, a2,
      b1, b2,
    };
    m
  }
  fn det(&self) -> T {
    self.a1 * self.b2 - self.a2 * self.b1
  }
  fn inverse(&self) -> Result<Self, MatrixError> {
    let det = self.det();
    if det == T::zero() {
      return Err(MatrixError::Singular);
    }
    let inv_det = T::one() / det;
    #[rustfmt::skip]
    let m = Self {
      a1:  self.b2 * inv_det, a2: -self.a2 * inv_det,
      b1: -self.b1 * inv_det, b2:  self.a1 * inv_det,
    };
    Ok(m)
  }
  fn trace(&self) -> T {
    self.a1 + self.b2
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat2<T> {}

impl<T> Add for Mat2<T>
where
  T: Copy + Add<Output = T>,
{
  type Output = Self;

  fn add(self, m: Self) -> Self {
    let a: [T; 4] = self.into();
    let b: [T; 4] = m.into();
    let r: [T; 4] = std::array::from_fn(|i| a[i] + b[i]);
    r.into()
  }
}

impl<T> Mul for Mat2<T>
where
  T: Copy + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, b: Self) -> Self {
    let a = self;

    Mat2 {
      a1: a.a1 * b.a1 + a.a2 * b.b1,
      a2: a.a1 * b.a2 + a.a2 * b.b2,
      b1: a.b1 * b.a1 + a.b2 * b.b1,
      b2: a.b1 * b.a2 + a.b2 * b.b2,
    }
  }
}

impl<T> Mat2<T>
where
  T: Copy,
{
  pub fn new(m11: T, m12: T, m21: T, m22: T) -> Self {
    Self {
      a1: m11,
      a2: m12,
      b1: m21,
      b2: m22,
    }
  }

  pub fn from_rows(rows: [[T; 2]; 2]) -> Self {
    let [[a1, a2], [b1, b2]] = rows;
    #[rustfmt::skip]
    let m = Self {
      a1, a2,
      b1, b2,
    };
    m
  }

  pub fn rows(&self) -> [[T; 2]; 2] {
    [[self.a1, self.a2], [self.b1, self.b2]]
  }
}

impl<T> Index<(usize, usize)> for Mat2<T> {
  type Output = T;

  fn index(&self, (row, col): (usize, usize)) -> &T {
    match (row, col) {
      (0, 0) => &self.a1,
      (0, 1) => &self.a2,
      (1, 0) => &self.b1,
      (1, 1) => &self.b2,
      _ => panic!("index ({row}, {col}) is out of range for a 2x2 matrix"),
    }
  }
}

impl<T> num_traits::Zero for Mat2<T>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: T::zero(), a2: T::zero(),
      b1: T::zero(), b2: T::zero(),
    };
    m
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T> num_traits::One for Mat2<T>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: T::one(),  a2: T::zero(),
      b1: T::zero(), b2: T::one(),
    };
    m
  }
}

impl<T> From<[T; 4]> for Mat2<T> {
  fn from(v: [T; 4]) -> Self {
    let [a1, a2, b1, b2] = v;
    #[rustfmt::skip]
    let m = Self {
      a1, a2,
      b1, b2,
    };
    m
  }
}

impl<T> From<Mat2<T>> for [T; 4] {
  fn from(m: Mat2<T>) -> Self {
    [m.a1, m.a2, m.b1, m.b2]
  }
}

#[test]
fn det() {
  let m = Mat2::<f32>::new(1., 3., 7., 9.);
  assert_eq!(m.det(), -12.);
  assert_eq!(Mat2::<f64>::identity().det(), 1.);
}

#[test]
fn inverse() {
  let m = Mat2::<f64>::new(4., 7., 2., 6.);
  let inv = m.inverse().unwrap();
  assert!((m * inv).approx_eq(&Mat2::identity()));
  assert!((inv * m).approx_eq(&Mat2::identity()));

  let cgmath_m = cgmath::Matrix2::<f64>::new(4., 7., 2., 6.);
  let cgmath_inv: [[f64; 2]; 2] = cgmath::SquareMatrix::invert(&cgmath_m).unwrap().into();
  assert!(inv.approx_eq(&Mat2::from_rows(cgmath_inv)));

  assert_eq!(
    Mat2::<f32>::new(1., 2., 2., 4.).inverse(),
    Err(MatrixError::Singular)
  );
}

#[test]
fn pod_layout() {
  let m = Mat2::<f32>::new(1., 2., 3., 4.);
  let flat: [f32; 4] = bytemuck::cast(m);
  assert_eq!(flat, [1., 2., 3., 4.]);
  assert_eq!(m[(1, 0)], 3.);
  assert_eq!(m.transpose()[(1, 0)], 2.);
  assert_eq!(m.map(|v| v * 2.).trace(), 10.);
}

#[test]
fn add_and_zero() {
  let a = Mat2::<f32>::new(1., 2., 3., 4.);
  let b = Mat2::<f32>::new(4., 3., 2., -4.);
  assert_eq!(a + b, Mat2::new(5., 5., 5., 0.));
  assert_eq!(a + Mat2::zero(), a);
  assert!(Mat2::<f64>::zero().is_zero());
  assert!(!Mat2::<f64>::one().is_zero());
}
