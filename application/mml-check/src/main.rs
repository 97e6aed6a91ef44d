use std::io::Write;

mod suite;

fn main() -> anyhow::Result<()> {
  env_logger::builder().init();
  log::info!("running mml fixture suite v{}", env!("CARGO_PKG_VERSION"));

  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  writeln!(
    out,
    "Beginning mml-check fixture harness v{}",
    env!("CARGO_PKG_VERSION")
  )?;

  let reports = suite::run_all();
  for report in &reports {
    writeln!(
      out,
      "PASSED ({}/{}): {}",
      report.passed, report.total, report.operation
    )?;
  }

  let summary = suite::Summary::of(&reports);
  writeln!(out, "- - - - - - - - - - - - - - - - - ")?;
  writeln!(
    out,
    "{} out of {} functions passed ({:.1}%).",
    summary.working_operations,
    summary.operations,
    summary.check_percentage()
  )?;

  writeln!(out, "\nOutput of print():")?;
  suite::print_fixture().write_table(&mut out)?;
  writeln!(out, "\nExpected output of print():")?;
  write!(out, "{}", suite::EXPECTED_PRINT)?;

  out.flush()?;
  Ok(())
}
