#[cfg(test)]
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(test)]
use crate::*;

#[cfg(test)]
const CASES: usize = 500;

#[cfg(test)]
fn rng() -> StdRng {
  StdRng::seed_from_u64(0x6d6d6c)
}

#[cfg(test)]
fn random_mat3(rng: &mut StdRng) -> Mat3<f64> {
  Mat3::from_fn(|_, _| rng.gen_range(-10.0..10.0))
}

/// cgmath stores columns, so feeding our rows in yields the transpose. Every
/// comparison below accounts for that.
#[cfg(test)]
fn to_cgmath(m: Mat3<f64>) -> cgmath::Matrix3<f64> {
  let [a1, a2, a3, b1, b2, b3, c1, c2, c3]: [f64; 9] = m.into();
  cgmath::Matrix3::new(a1, a2, a3, b1, b2, b3, c1, c2, c3)
}

#[cfg(test)]
fn from_cgmath(m: cgmath::Matrix3<f64>) -> Mat3<f64> {
  let rows: [[f64; 3]; 3] = m.into();
  Mat3::from_rows(rows)
}

#[test]
fn add_is_commutative_and_associative() {
  let mut rng = rng();
  for _ in 0..CASES {
    let (a, b, c) = (random_mat3(&mut rng), random_mat3(&mut rng), random_mat3(&mut rng));
    assert_eq!(a + b, b + a);
    assert!((a + (b + c)).approx_eq(&((a + b) + c)));
  }
}

#[test]
fn identity_is_neutral_for_mul() {
  let mut rng = rng();
  for _ in 0..CASES {
    let a = random_mat3(&mut rng);
    assert!((a * Mat3::identity()).approx_eq(&a));
    assert!((Mat3::identity() * a).approx_eq(&a));
  }
}

#[test]
fn transpose_twice_is_exact() {
  let mut rng = rng();
  for _ in 0..CASES {
    let a = random_mat3(&mut rng);
    assert_eq!(a.transpose().transpose(), a);
    assert_eq!(a.trace(), a[(0, 0)] + a[(1, 1)] + a[(2, 2)]);
  }
}

#[test]
fn inverse_round_trips_to_identity() {
  let mut rng = rng();
  let mut checked = 0;
  for _ in 0..CASES {
    let a = random_mat3(&mut rng);
    if a.det().abs() < 1. {
      continue;
    }
    let inv = a.inverse().unwrap();
    assert!((a * inv).approx_eq(&Mat3::identity()));
    assert!((inv * a).approx_eq(&Mat3::identity()));
    checked += 1;
  }
  assert!(checked > CASES / 2);
}

#[test]
fn matches_cgmath() {
  use cgmath::{Matrix, SquareMatrix as _};

  let mut rng = rng();
  for _ in 0..CASES {
    let (a, b) = (random_mat3(&mut rng), random_mat3(&mut rng));
    let (ca, cb) = (to_cgmath(a), to_cgmath(b));

    assert!((a.det() - ca.determinant()).abs() < 1e-9);
    assert_eq!(a.transpose(), from_cgmath(ca.transpose()));
    assert!((a * b).approx_eq(&from_cgmath(cb * ca)));

    if a.det().abs() < 1. {
      continue;
    }
    let inv = a.inverse().unwrap();
    let cinv = ca.invert().unwrap();
    assert!(inv.approx_eq(&from_cgmath(cinv)));
  }
}

#[test]
fn rank_deficient_matrices_are_singular() {
  let mut rng = rng();
  for _ in 0..CASES {
    // integer rows keep the determinant exact
    let r0: [f64; 3] = std::array::from_fn(|_| rng.gen_range(-5..5) as f64);
    let r1: [f64; 3] = std::array::from_fn(|_| rng.gen_range(-5..5) as f64);
    let k = rng.gen_range(-3..3) as f64;
    let r2 = [r0[0] + k * r1[0], r0[1] + k * r1[1], r0[2] + k * r1[2]];

    let m = Mat3::from_rows([r0, r1, r2]);
    assert_eq!(m.det(), 0.);
    assert_eq!(m.inverse(), Err(MatrixError::Singular));
  }
}
