use std::ops::{Add, Index, Mul, Neg, Sub};

use facet::Facet;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::*;

/// A 3x3 matrix stored row by row.
///
/// The field letter names the row and the digit names the column, so `b3` is
/// the element at zero indexed `(1, 2)`.
#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Mat3<T> {
  pub a1: T, pub a2: T, pub a3: T,
  pub b1: T, pub b2: T, pub b3: T,
  pub c1: T, pub c2: T, pub c3: T,
}

impl<T: Scalar> SquareMatrix<T> for Mat3<T> {
  fn identity() -> Self {
    Self::one()
  }
  fn transpose(&self) -> Self {
    #[rustfmt::skip]
    let m = Mat3::new(
      self.a1, self.b1, self.c1,
      self.a2, self.b2, self.c2,
      self.a3, self.b3, self.c3,
    );
    m
  }

  /// Cofactor expansion along the first row.
  fn det(&self) -> T {
    let m1 = self.submatrix(0, 0).det();
    let m2 = self.submatrix(0, 1).det();
    let m3 = self.submatrix(0, 2).det();
    self.a1 * m1 - self.a2 * m2 + self.a3 * m3
  }

  /// Adjugate scaled by the reciprocal determinant.
  fn inverse(&self) -> Result<Self, MatrixError> {
    let det = self.det();
    if det == T::zero() {
      log::debug!("refuse to invert singular matrix {self:?}");
      return Err(MatrixError::Singular);
    }

    Ok(self.adjugate().scalar_mul(T::one() / det))
  }

  fn trace(&self) -> T {
    self.a1 + self.b2 + self.c3
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T> Mul for Mat3<T>
where
  T: Copy + Zero + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    let (a, b) = (self.rows(), m.rows());
    Self::from_fn(|i, j| {
      let mut sum = T::zero();
      for k in 0..3 {
        sum = sum + a[i][k] * b[k][j];
      }
      sum
    })
  }
}

impl<T> Add for Mat3<T>
where
  T: Copy + Add<Output = T>,
{
  type Output = Self;

  fn add(self, m: Self) -> Self {
    self.zip(m, |a, b| a + b)
  }
}

impl<T> Sub for Mat3<T>
where
  T: Copy + Sub<Output = T>,
{
  type Output = Self;

  fn sub(self, m: Self) -> Self {
    self.zip(m, |a, b| a - b)
  }
}

impl<T> Neg for Mat3<T>
where
  T: Neg<Output = T>,
{
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

impl<T> Mat3<T> {
  pub fn map<X>(self, f: impl Fn(T) -> X) -> Mat3<X> {
    let arr: [T; 9] = self.into();
    arr.map(f).into()
  }

  /// Upper left 2x2 block.
  pub fn to_mat2(self) -> Mat2<T> {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: self.a1, a2: self.a2,
      b1: self.b1, b2: self.b2,
    };
    m
  }
}

impl<T> Mat3<T>
where
  T: Copy,
{
  pub fn new(m11: T, m12: T, m13: T, m21: T, m22: T, m23: T, m31: T, m32: T, m33: T) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: m11, a2: m12, a3: m13,
      b1: m21, b2: m22, b3: m23,
      c1: m31, c2: m32, c3: m33,
    };
    m
  }

  pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
    let [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]] = rows;
    #[rustfmt::skip]
    let m = Self {
      a1, a2, a3,
      b1, b2, b3,
      c1, c2, c3,
    };
    m
  }

  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self::from_rows(std::array::from_fn(|row| {
      std::array::from_fn(|col| f(row, col))
    }))
  }

  pub fn rows(&self) -> [[T; 3]; 3] {
    [
      [self.a1, self.a2, self.a3],
      [self.b1, self.b2, self.b3],
      [self.c1, self.c2, self.c3],
    ]
  }

  pub fn zip<X: Copy, R>(self, other: Mat3<X>, f: impl Fn(T, X) -> R) -> Mat3<R> {
    let a: [T; 9] = self.into();
    let b: [X; 9] = other.into();
    let r: [R; 9] = std::array::from_fn(|i| f(a[i], b[i]));
    r.into()
  }

  /// The 2x2 matrix left after deleting `row` and `col`, remaining rows and
  /// columns keep their order.
  ///
  /// # Panics
  ///
  /// If `row` or `col` is not in `0..3`. Use [`Mat3::checked_submatrix`] for
  /// untrusted indices.
  pub fn submatrix(&self, row: usize, col: usize) -> Mat2<T> {
    assert!(
      row < 3 && col < 3,
      "submatrix index ({row}, {col}) is out of range for a 3x3 matrix"
    );
    let rows = self.rows();
    let r = remaining_indices(row);
    let c = remaining_indices(col);

    #[rustfmt::skip]
    let m = Mat2::new(
      rows[r[0]][c[0]], rows[r[0]][c[1]],
      rows[r[1]][c[0]], rows[r[1]][c[1]],
    );
    m
  }

  pub fn checked_submatrix(&self, row: usize, col: usize) -> Result<Mat2<T>, MatrixError> {
    if row >= 3 || col >= 3 {
      log::debug!("reject submatrix index ({row}, {col})");
      return Err(MatrixError::IndexOutOfRange { row, col });
    }
    Ok(self.submatrix(row, col))
  }
}

/// The two indices of `0..3` other than `skip`, ascending.
fn remaining_indices(skip: usize) -> [usize; 2] {
  match skip {
    0 => [1, 2],
    1 => [0, 2],
    _ => [0, 1],
  }
}

impl<T> Mat3<T>
where
  T: Scalar,
{
  pub fn scalar_add(self, s: T) -> Self {
    self.map(|v| v + s)
  }

  pub fn scalar_mul(self, s: T) -> Self {
    self.map(|v| v * s)
  }

  /// Signed minor of the element at (`row`, `col`), negative where `row + col` is odd.
  pub fn cofactor(&self, row: usize, col: usize) -> T {
    let minor = self.submatrix(row, col).det();
    if (row + col) % 2 == 1 {
      -minor
    } else {
      minor
    }
  }

  pub fn cofactor_matrix(&self) -> Self {
    Self::from_fn(|row, col| self.cofactor(row, col))
  }

  /// Transposed cofactor matrix.
  pub fn adjugate(&self) -> Self {
    self.cofactor_matrix().transpose()
  }
}

impl<T> Index<(usize, usize)> for Mat3<T> {
  type Output = T;

  fn index(&self, (row, col): (usize, usize)) -> &T {
    match (row, col) {
      (0, 0) => &self.a1,
      (0, 1) => &self.a2,
      (0, 2) => &self.a3,
      (1, 0) => &self.b1,
      (1, 1) => &self.b2,
      (1, 2) => &self.b3,
      (2, 0) => &self.c1,
      (2, 1) => &self.c2,
      (2, 2) => &self.c3,
      _ => panic!("index ({row}, {col}) is out of range for a 3x3 matrix"),
    }
  }
}

impl<T> num_traits::Zero for Mat3<T>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::zero(), a2: T::zero(), a3: T::zero(),
      b1: T::zero(), b2: T::zero(), b3: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::zero(),
    };
    m
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T> num_traits::One for Mat3<T>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::one(),  a2: T::zero(), a3: T::zero(),
      b1: T::zero(), b2: T::one(),  b3: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::one(),
    };
    m
  }
}

impl<T> From<[T; 9]> for Mat3<T> {
  fn from(v: [T; 9]) -> Self {
    let [a1, a2, a3, b1, b2, b3, c1, c2, c3] = v;
    #[rustfmt::skip]
    let m = Self {
      a1, a2, a3,
      b1, b2, b3,
      c1, c2, c3,
    };
    m
  }
}

impl<T> From<Mat3<T>> for [T; 9] {
  fn from(m: Mat3<T>) -> Self {
    [m.a1, m.a2, m.a3, m.b1, m.b2, m.b3, m.c1, m.c2, m.c3]
  }
}

impl<T: Copy> From<[[T; 3]; 3]> for Mat3<T> {
  fn from(rows: [[T; 3]; 3]) -> Self {
    Self::from_rows(rows)
  }
}

#[test]
fn mul() {
  #[rustfmt::skip]
  let a = Mat3::<f32>::new(
    1., 2., 3.,
    4., 5., 6.,
    7., 8., 9.,
  );
  #[rustfmt::skip]
  let b = Mat3::<f32>::new(
    1., 2., 3.,
    0., 1., 0.,
    0., 0., 1.,
  );
  #[rustfmt::skip]
  let expect = Mat3::new(
    1., 4., 6.,
    4., 13., 18.,
    7., 22., 30.,
  );
  assert_eq!(a * b, expect);
  assert_eq!(a * Mat3::identity(), a);
  assert_eq!(a * Mat3::zero(), Mat3::zero());
}

#[test]
fn elementwise() {
  let a = Mat3::<f32>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  let b = Mat3::<f32>::from_rows([[9., 8., 7.], [6., 5., 4.], [3., 2., 1.]]);
  assert_eq!(a + b, Mat3::<f32>::zero().scalar_add(10.));
  assert_eq!((a + b) - b, a);
  assert_eq!(-a, a.scalar_mul(-1.));
  assert_eq!(a.scalar_add(-2.)[(0, 0)], -1.);
  assert_eq!(a.scalar_mul(2.)[(2, 2)], 18.);
  assert_eq!(a.scalar_add(0.), a);
}

#[test]
fn trace_and_transpose() {
  let a = Mat3::<f32>::from_rows([[-1., -2., -3.], [4., -5., 6.], [7., 8., -9.]]);
  assert_eq!(a.trace(), -15.);
  assert_eq!(a.transpose().rows()[0], [-1., 4., 7.]);
  assert_eq!(a.transpose().transpose(), a);
  assert_eq!(a.transpose().trace(), a.trace());
  assert_eq!(a.to_mat2(), Mat2::new(-1., -2., 4., -5.));
}

#[test]
fn submatrix() {
  let m = Mat3::<f32>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  assert_eq!(m.submatrix(0, 0), Mat2::new(5., 6., 8., 9.));
  assert_eq!(m.submatrix(1, 1), Mat2::new(1., 3., 7., 9.));
  assert_eq!(m.submatrix(2, 2), Mat2::new(1., 2., 4., 5.));
  assert_eq!(m.submatrix(2, 0), Mat2::new(2., 3., 5., 6.));
  assert_eq!(m.checked_submatrix(0, 1), Ok(Mat2::new(4., 6., 7., 9.)));
  assert_eq!(
    m.checked_submatrix(3, 1),
    Err(MatrixError::IndexOutOfRange { row: 3, col: 1 })
  );
}

#[test]
#[should_panic]
fn submatrix_out_of_range() {
  let _ = Mat3::<f32>::identity().submatrix(0, 3);
}

#[test]
fn det() {
  let singular = Mat3::<f32>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  assert!(singular.det().abs() < f32::eq_tolerance());

  let m = Mat3::<f32>::from_rows([[3.5, 2.2, -4.1], [0.0, 1.1, 0.5], [2.0, -3.3, 1.0]]);
  assert!((m.det() - 20.845).abs() < 1e-3);

  assert_eq!(Mat3::<f64>::identity().det(), 1.);
  assert_eq!(Mat3::<f64>::identity().scalar_mul(2.).det(), 8.);
}

#[test]
fn cofactors() {
  let m = Mat3::<f64>::from_rows([[2., 1., 1.], [1., 3., 2.], [1., 0., 0.5]]);
  assert_eq!(m.cofactor(0, 0), 1.5);
  assert_eq!(m.cofactor(0, 1), 1.5);
  assert_eq!(m.cofactor(1, 0), -0.5);
  assert_eq!(m.cofactor_matrix()[(2, 1)], -3.);
  assert_eq!(m.adjugate()[(1, 2)], -3.);

  // row expansion through the cofactor matrix gives the same determinant
  let c = m.cofactor_matrix();
  assert_eq!(m.a1 * c.a1 + m.a2 * c.a2 + m.a3 * c.a3, m.det());
}

#[test]
fn inverse() {
  let m = Mat3::<f32>::from_rows([[2., 1., 1.], [1., 3., 2.], [1., 0., 0.5]]);
  let inv = m.inverse().unwrap();
  assert!((m * inv).approx_eq(&Mat3::identity()));
  assert!((inv * m).approx_eq(&Mat3::identity()));

  let singular = Mat3::<f32>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  assert_eq!(singular.inverse(), Err(MatrixError::Singular));
  assert_eq!(singular.inverse_or_identity(), Mat3::identity());
}

#[test]
fn pod_layout() {
  let m = Mat3::<f32>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
  let flat: [f32; 9] = bytemuck::cast(m);
  assert_eq!(flat, [1., 2., 3., 4., 5., 6., 7., 8., 9.]);
  assert_eq!(Mat3::from(flat), m);
  assert_eq!(m[(1, 2)], m.b3);
}

#[test]
fn non_finite_values_propagate() {
  let mut a = Mat3::<f64>::identity();
  a.a1 = f64::NAN;
  a.c3 = f64::INFINITY;
  let b = Mat3::<f64>::identity().scalar_add(1.);

  let sum = a + b;
  assert!(sum.a1.is_nan());
  assert_eq!(sum.c3, f64::INFINITY);
  assert_eq!(sum.b2, 3.);

  let scaled = a.scalar_mul(2.);
  assert!(scaled.a1.is_nan());
  assert_eq!(scaled.c3, f64::INFINITY);
  assert!(a.scalar_mul(0.).c3.is_nan());
  assert_eq!(a.scalar_add(1.).c3, f64::INFINITY);

  let product = a * Mat3::identity();
  assert!(product.a1.is_nan());
  assert!(product.a2.is_nan());
  assert_eq!(product.c3, f64::INFINITY);
  assert_eq!(product.b2, 1.);

  assert!(a.det().is_nan());
  assert!(a.trace().is_nan());

  // a NaN determinant is not zero, so the inverse is produced and carries NaN
  let inv = a.inverse().unwrap();
  assert!(inv.a1.is_nan());
}
