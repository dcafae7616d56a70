//! Binary PGM export of a transition matrix.
//!
//! One pixel per matrix cell in row-major order; the gray value is the
//! rate magnitude normalized by the largest magnitude in the matrix
//! (an all-zero matrix renders black). The format is deliberately the
//! simplest image container that every viewer and converter understands.

use std::io::Write;

use crate::io::error::Error;
use crate::model::matrix::TransitionMatrix;

const MAX_GRAY: u16 = 255;

pub fn write_matrix_image<W: Write>(mut writer: W, matrix: &TransitionMatrix) -> Result<(), Error> {
    let size = matrix.size();
    writeln!(writer, "P5")?;
    writeln!(writer, "{size} {size}")?;
    writeln!(writer, "{MAX_GRAY}")?;

    let max = matrix.max_abs_rate();
    let mut pixels = Vec::with_capacity(size * size);
    for value in matrix.to_dense() {
        pixels.push(gray_value(value, max));
    }
    writer.write_all(&pixels)?;
    writer.flush()?;
    Ok(())
}

fn gray_value(rate: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    let scaled = (rate.abs() / max * f64::from(MAX_GRAY)).round();
    scaled.min(f64::from(MAX_GRAY)) as u8
}
