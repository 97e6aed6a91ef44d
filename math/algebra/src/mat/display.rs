use std::{fmt, io};

use crate::*;

const TOP_BORDER: &str = " _____________________________";
const ROW_SEPARATOR: &str = " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ ";

/// Bordered table, every cell right aligned in 9 columns with 4 decimals.
impl<T: Scalar> fmt::Display for Mat3<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{TOP_BORDER}")?;
    for row in self.rows() {
      for v in row {
        write!(f, "|{v:9.4}")?;
      }
      writeln!(f, "|")?;
      writeln!(f, "{ROW_SEPARATOR}")?;
    }
    Ok(())
  }
}

impl<T: Scalar> Mat3<T> {
  /// Write the table followed by a blank line.
  pub fn write_table(&self, mut w: impl io::Write) -> io::Result<()> {
    writeln!(w, "{self}")
  }

  pub fn print(&self) {
    println!("{self}");
  }
}

#[test]
fn table_layout() {
  #[rustfmt::skip]
  let m = Mat3::<f32>::new(
    55.55, 999.0, 12.21,
    -1.5, -900.50, 44.421,
    -0.1, 5.0, 0.5,
  );

  let expect = concat!(
    " _____________________________\n",
    "|  55.5500| 999.0000|  12.2100|\n",
    " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
    "|  -1.5000|-900.5000|  44.4210|\n",
    " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
    "|  -0.1000|   5.0000|   0.5000|\n",
    " _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ \n",
  );
  assert_eq!(m.to_string(), expect);

  let mut out = Vec::new();
  m.write_table(&mut out).unwrap();
  assert_eq!(String::from_utf8(out).unwrap(), format!("{expect}\n"));
}
