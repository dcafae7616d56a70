mod builder;
mod enumerate;
mod error;
mod moves;

pub use builder::build_matrix;
pub use enumerate::{StateSpace, enumerate_states};
pub use error::Error;
pub use moves::{HERNIA_PAIRS, MoveKind, MoveRates, elementary_moves, transition_rate};
