//! Line-based persistence of an enumerated state space.
//!
//! One canonical conformation per line in the `U D L R S` alphabet, in
//! index order, so the file both round-trips the space exactly and doubles
//! as a human-readable listing.

use std::io::{BufRead, Write};

use crate::engine::StateSpace;
use crate::io::{Format, error::Error};

pub fn write_states<W: Write>(mut writer: W, space: &StateSpace) -> Result<(), Error> {
    for state in space.iter() {
        writeln!(writer, "{state}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_states<R: BufRead>(reader: R) -> Result<StateSpace, Error> {
    let mut states = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let state = trimmed
            .parse()
            .map_err(|e: crate::ParsePolymerError| {
                Error::parse(Format::States, number + 1, e.to_string())
            })?;
        states.push(state);
    }

    StateSpace::from_sequences(states).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::enumerate_states;
    use std::io::Cursor;

    #[test]
    fn write_then_read_round_trips_exactly() {
        let space = enumerate_states(2).unwrap();

        let mut buffer = Vec::new();
        write_states(&mut buffer, &space).unwrap();
        let restored = read_states(Cursor::new(buffer)).unwrap();

        assert_eq!(restored, space);
    }

    #[test]
    fn listing_is_one_state_per_line_in_index_order() {
        let space = enumerate_states(1).unwrap();

        let mut buffer = Vec::new();
        write_states(&mut buffer, &space).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "U\nD\nL\nR\nS\n");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let restored = read_states(Cursor::new("U\n\nD\n")).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.link_count(), 1);
    }

    #[test]
    fn invalid_symbol_reports_the_line() {
        let err = read_states(Cursor::new("UD\nUX\n")).unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let err = read_states(Cursor::new("UD\nUD\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
