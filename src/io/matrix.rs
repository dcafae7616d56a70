//! JSON persistence of a built transition matrix.
//!
//! The file stores the sparse `(row, column, rate)` triples in row-major
//! order plus the dimensions, which is enough to restore an identical
//! matrix: `serde_json` round-trips `f64` values exactly.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::io::error::Error;
use crate::model::matrix::TransitionMatrix;

#[derive(Debug, Serialize, Deserialize)]
struct MatrixFile {
    size: usize,
    link_count: usize,
    entries: Vec<(usize, usize, f64)>,
}

pub fn write_matrix<W: Write>(
    mut writer: W,
    matrix: &TransitionMatrix,
    link_count: usize,
) -> Result<(), Error> {
    let file = MatrixFile {
        size: matrix.size(),
        link_count,
        entries: matrix.entries().collect(),
    };
    serde_json::to_writer(&mut writer, &file)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_matrix<R: Read>(reader: R) -> Result<(TransitionMatrix, usize), Error> {
    let file: MatrixFile = serde_json::from_reader(reader)?;

    let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); file.size];
    let mut last: Option<(usize, usize)> = None;
    for &(i, j, rate) in &file.entries {
        if i >= file.size || j >= file.size {
            return Err(Error::InvalidData(format!(
                "entry ({i}, {j}) is outside a {0}x{0} matrix",
                file.size
            )));
        }
        if let Some(previous) = last {
            if (i, j) <= previous {
                return Err(Error::InvalidData(format!(
                    "entries are not in strict row-major order at ({i}, {j})"
                )));
            }
        }
        last = Some((i, j));
        rows[i].push((j, rate));
    }

    Ok((TransitionMatrix::from_rows(file.size, rows), file.link_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build_matrix, enumerate_states};
    use std::io::Cursor;

    #[test]
    fn write_then_read_round_trips_exactly() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 1.0, 0.5).unwrap();

        let mut buffer = Vec::new();
        write_matrix(&mut buffer, &matrix, space.link_count()).unwrap();
        let (restored, link_count) = read_matrix(Cursor::new(buffer)).unwrap();

        assert_eq!(restored, matrix);
        assert_eq!(link_count, 2);
    }

    #[test]
    fn irrational_rates_survive_the_round_trip() {
        let space = enumerate_states(1).unwrap();
        let matrix = build_matrix(&space, 0.0, 1.0 / 3.0).unwrap();

        let mut buffer = Vec::new();
        write_matrix(&mut buffer, &matrix, 1).unwrap();
        let (restored, _) = read_matrix(Cursor::new(buffer)).unwrap();

        assert_eq!(restored, matrix);
    }

    #[test]
    fn out_of_range_entries_are_rejected() {
        let json = r#"{"size":2,"link_count":1,"entries":[[0,5,1.0]]}"#;
        let err = read_matrix(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn unordered_entries_are_rejected() {
        let json = r#"{"size":2,"link_count":1,"entries":[[1,0,1.0],[0,1,1.0]]}"#;
        let err = read_matrix(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = read_matrix(Cursor::new("{not json")).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
