use std::fmt;

pub mod error;

pub mod matrix;
pub mod pgm;
pub mod states;

pub use error::Error;
pub use matrix::{read_matrix, write_matrix};
pub use pgm::write_matrix_image;
pub use states::{read_states, write_states};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    States,
    Matrix,
    Pgm,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::States => write!(f, "state listing"),
            Format::Matrix => write!(f, "matrix JSON"),
            Format::Pgm => write!(f, "PGM image"),
        }
    }
}
