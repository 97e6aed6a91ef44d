use crate::*;

/// Tolerance based equality, the comparison every float matrix result should go
/// through instead of `==`.
pub trait ApproxEqual<T: Scalar> {
  /// True if every pair of corresponding elements differs by no more than `tolerance`.
  fn approx_eq_within(&self, other: &Self, tolerance: T) -> bool;

  fn approx_eq(&self, other: &Self) -> bool {
    self.approx_eq_within(other, T::eq_tolerance())
  }
}

macro_rules! impl_scalar_approx_eq {
  ($($ty:ty),*) => {
    $(
      impl ApproxEqual<$ty> for $ty {
        #[inline]
        fn approx_eq_within(&self, other: &Self, tolerance: $ty) -> bool {
          (self - other).abs() <= tolerance
        }
      }
    )*
  };
}

impl_scalar_approx_eq!(f32, f64);

impl<T: Scalar> ApproxEqual<T> for Mat2<T> {
  fn approx_eq_within(&self, other: &Self, tolerance: T) -> bool {
    let a: [T; 4] = (*self).into();
    let b: [T; 4] = (*other).into();
    a.iter()
      .zip(b.iter())
      .all(|(a, b)| (*a - *b).abs() <= tolerance)
  }
}

impl<T: Scalar> ApproxEqual<T> for Mat3<T> {
  fn approx_eq_within(&self, other: &Self, tolerance: T) -> bool {
    let a: [T; 9] = (*self).into();
    let b: [T; 9] = (*other).into();
    a.iter()
      .zip(b.iter())
      .all(|(a, b)| (*a - *b).abs() <= tolerance)
  }
}

#[test]
fn tolerance_boundary() {
  let base = Mat3::<f64>::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);

  let just_inside = base.scalar_add(0.99e-4);
  assert!(base.approx_eq(&just_inside));
  assert!(just_inside.approx_eq(&base));

  let mut one_cell_outside = base;
  one_cell_outside.b3 += 1.01e-4;
  assert!(!base.approx_eq(&one_cell_outside));

  assert!(base.approx_eq_within(&one_cell_outside, 1e-3));
  assert!(!base.approx_eq_within(&just_inside, 1e-5));

  // a difference of exactly the tolerance still compares equal
  let shifted = base.scalar_add(0.5);
  assert!(base.approx_eq_within(&shifted, 0.5));
  assert!(!base.approx_eq_within(&shifted, 0.25));
}

#[test]
fn nan_is_never_equal() {
  let mut a = Mat3::<f32>::identity();
  a.c1 = f32::NAN;
  assert!(!a.approx_eq(&a));
  assert!(1.0_f32.approx_eq(&1.00005));
}
