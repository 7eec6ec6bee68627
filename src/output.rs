//! Comma-separated serialization of displacement matrices.

use crate::image::Matrix;
use crate::piv::DisplacementField;
use std::io::{self, Write};

/// Token written for undetermined cells.
pub const NAN_TOKEN: &str = "nan";

/// Writes one line per matrix row with comma-separated values.
///
/// Finite values use the shortest decimal that round-trips; NaN cells are
/// written as [`NAN_TOKEN`].
pub fn write_csv<W: Write>(matrix: &Matrix<f32>, mut out: W) -> io::Result<()> {
    for row in matrix.rows() {
        let mut first = true;
        for &value in row {
            if !first {
                out.write_all(b",")?;
            }
            first = false;
            if value.is_nan() {
                out.write_all(NAN_TOKEN.as_bytes())?;
            } else {
                write!(out, "{value}")?;
            }
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Writes the horizontal and vertical components to separate sinks.
pub fn write_field_csv<W1: Write, W2: Write>(
    field: &DisplacementField,
    dx_out: W1,
    dy_out: W2,
) -> io::Result<()> {
    write_csv(field.dx(), dx_out)?;
    write_csv(field.dy(), dy_out)
}
