//! Literal fixtures for every kernel operation, reported per operation.

use rendiation_matrix_math::*;

type M = Mat3<f32>;

pub const EXPECTED_PRINT: &str = concat!(
  " _____________________________\n",
  "|  55.5500| 999.0000|  12.2100|\n",
  " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
  "|  -1.5000|-900.5000|  44.4210|\n",
  " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
  "|  -0.1000|   5.0000|   0.5000|\n",
  " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
);

pub fn print_fixture() -> M {
  M::from_rows([
    [55.55, 999.0, 12.21],
    [-1.5, -900.50, 44.421],
    [-0.1, 5.0, 0.5],
  ])
}

fn counting() -> M {
  M::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]])
}

#[derive(Debug, Clone)]
pub struct OperationReport {
  pub operation: &'static str,
  pub passed: usize,
  pub total: usize,
}

impl OperationReport {
  fn from_checks(operation: &'static str, checks: &[bool]) -> Self {
    Self {
      operation,
      passed: checks.iter().filter(|c| **c).count(),
      total: checks.len(),
    }
  }

  pub fn all_passed(&self) -> bool {
    self.passed == self.total
  }
}

pub struct Summary {
  pub operations: usize,
  pub working_operations: usize,
  pub checks: usize,
  pub passed_checks: usize,
}

impl Summary {
  pub fn of(reports: &[OperationReport]) -> Self {
    Self {
      operations: reports.len(),
      working_operations: reports.iter().filter(|r| r.all_passed()).count(),
      checks: reports.iter().map(|r| r.total).sum(),
      passed_checks: reports.iter().map(|r| r.passed).sum(),
    }
  }

  pub fn check_percentage(&self) -> f64 {
    if self.checks == 0 {
      return 0.;
    }
    100. * self.passed_checks as f64 / self.checks as f64
  }
}

pub fn run_all() -> Vec<OperationReport> {
  vec![
    equals(),
    scalar_add(),
    scalar_mul(),
    add(),
    mul(),
    trace(),
    transpose(),
    submatrix(),
    determinant(),
    inverse(),
  ]
}

fn equals() -> OperationReport {
  let within_tolerance = M::from_rows([[1., 2., 3.], [4.00009, 5., 6.], [7., 8., 9.00009]]);
  let one_cell_off = M::from_rows([[1., 2., 3.], [4., 5., 6.0002], [7., 8., 9.]]);
  let one_cell_far_off = M::from_rows([[1., 2., 3.], [4., 5., 6.], [7.1, 8., 9.]]);

  OperationReport::from_checks(
    "equals",
    &[
      counting().approx_eq(&counting()),
      within_tolerance.approx_eq(&counting()),
      !one_cell_off.approx_eq(&counting()),
      !one_cell_far_off.approx_eq(&counting()),
    ],
  )
}

fn scalar_add() -> OperationReport {
  let m = counting();
  OperationReport::from_checks(
    "scalar_add",
    &[
      m.scalar_add(0.).approx_eq(&m),
      m.scalar_add(1.)
        .approx_eq(&M::from_rows([[2., 3., 4.], [5., 6., 7.], [8., 9., 10.]])),
      m.scalar_add(-2.)
        .approx_eq(&M::from_rows([[-1., 0., 1.], [2., 3., 4.], [5., 6., 7.]])),
      m.scalar_add(0.5)
        .approx_eq(&M::from_rows([[1.5, 2.5, 3.5], [4.5, 5.5, 6.5], [7.5, 8.5, 9.5]])),
    ],
  )
}

fn scalar_mul() -> OperationReport {
  let m = counting();
  OperationReport::from_checks(
    "scalar_mul",
    &[
      m.scalar_mul(-1.)
        .approx_eq(&M::from_rows([[-1., -2., -3.], [-4., -5., -6.], [-7., -8., -9.]])),
      m.scalar_mul(2.)
        .approx_eq(&M::from_rows([[2., 4., 6.], [8., 10., 12.], [14., 16., 18.]])),
    ],
  )
}

fn add() -> OperationReport {
  let reversed = M::from_rows([[9., 8., 7.], [6., 5., 4.], [3., 2., 1.]]);
  let fractions_a = M::from_rows([[1.5, 2.25, 3.75], [4.5, 5.125, 6.25], [7.75, 8.875, 9.125]]);
  let fractions_b = M::from_rows([[0.5, 0.75, 1.25], [1.5, 2.875, 3.75], [4.25, 5.125, 6.875]]);

  OperationReport::from_checks(
    "add",
    &[
      (counting() + reversed).approx_eq(&M::zero().scalar_add(10.)),
      (fractions_a + fractions_b)
        .approx_eq(&M::from_rows([[2., 3., 5.], [6., 8., 10.], [12., 14., 16.]])),
      (-counting() + reversed)
        .approx_eq(&M::from_rows([[8., 6., 4.], [2., 0., -2.], [-4., -6., -8.]])),
    ],
  )
}

fn mul() -> OperationReport {
  let shear = M::from_rows([[1., 2., 3.], [0., 1., 0.], [0., 0., 1.]]);

  OperationReport::from_checks(
    "mul",
    &[
      (counting() * M::identity()).approx_eq(&counting()),
      (counting() * M::zero()).approx_eq(&M::zero()),
      (counting() * shear)
        .approx_eq(&M::from_rows([[1., 4., 6.], [4., 13., 18.], [7., 22., 30.]])),
    ],
  )
}

fn trace() -> OperationReport {
  let mixed = M::from_rows([[-1., -2., -3.], [4., -5., 6.], [7., 8., -9.]]);
  OperationReport::from_checks("trace", &[counting().trace() == 15., mixed.trace() == -15.])
}

fn transpose() -> OperationReport {
  let a = M::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.99]]);
  let b = M::from_rows([[-1., -2.05, -3.], [4., 5., 6.], [7., -8., 9.]]);

  OperationReport::from_checks(
    "transpose",
    &[
      a.transpose()
        .approx_eq(&M::from_rows([[1., 4., 7.], [2., 5., 8.], [3., 6., 9.99]])),
      b.transpose()
        .approx_eq(&M::from_rows([[-1., 4., 7.], [-2.05, 5., -8.], [-3., 6., 9.]])),
    ],
  )
}

fn submatrix() -> OperationReport {
  let m = counting();
  OperationReport::from_checks(
    "submatrix",
    &[
      m.submatrix(0, 0).approx_eq(&Mat2::new(5., 6., 8., 9.)),
      m.submatrix(1, 1).approx_eq(&Mat2::new(1., 3., 7., 9.)),
      m.submatrix(2, 2).approx_eq(&Mat2::new(1., 2., 4., 5.)),
    ],
  )
}

fn determinant() -> OperationReport {
  let mixed = M::from_rows([[3.5, 2.2, -4.1], [0.0, 1.1, 0.5], [2.0, -3.3, 1.0]]);
  OperationReport::from_checks(
    "determinant",
    &[
      counting().det().abs() < f32::eq_tolerance(),
      (mixed.det() - 20.845).abs() < f32::eq_tolerance(),
    ],
  )
}

fn inverse() -> OperationReport {
  let round_trips = |m: M| match m.inverse() {
    Ok(inv) => (m * inv).approx_eq(&M::identity()),
    Err(err) => {
      log::warn!("fixture {m:?} failed to invert: {err}");
      false
    }
  };

  OperationReport::from_checks(
    "inverse",
    &[
      round_trips(M::from_rows([[2., 1., 1.], [1., 3., 2.], [1., 0., 0.5]])),
      round_trips(print_fixture()),
      counting().inverse() == Err(MatrixError::Singular),
    ],
  )
}

#[test]
fn every_fixture_passes() {
  let reports = run_all();
  for report in &reports {
    assert!(report.all_passed(), "{report:?}");
  }

  let summary = Summary::of(&reports);
  assert_eq!(summary.operations, 10);
  assert_eq!(summary.checks, 28);
  assert_eq!(summary.working_operations, 10);
  assert_eq!(summary.check_percentage(), 100.);
}

#[test]
fn printed_fixture_matches_expected_text() {
  assert_eq!(print_fixture().to_string(), EXPECTED_PRINT);
}

#[test]
fn partial_results_are_summarized() {
  let reports = [
    OperationReport::from_checks("a", &[true, false]),
    OperationReport::from_checks("b", &[true, true]),
  ];
  let summary = Summary::of(&reports);
  assert_eq!(summary.working_operations, 1);
  assert_eq!(summary.check_percentage(), 75.);
}
