//! A pure Rust library for the van Leeuwen–Drzewiński stochastic lattice
//! polymer model: it enumerates every physically distinct conformation of a
//! linear chain with a given link count and assembles the continuous-time
//! Markov generator matrix of the lattice dynamics between those states.
//!
//! # Features
//!
//! - **State enumeration** — Exhaustive, deterministic depth-first
//!   construction of all conformations over the five-link lattice alphabet,
//!   with canonical-insert deduplication and dense index assignment
//! - **Transition rates** — The full elementary-move set of the model:
//!   reptation, hernia creation/annihilation/redirection, barrier crossing,
//!   and the end-reaction moves, parameterized by the hopping rate `h` and
//!   the end-reaction rate `c`
//! - **Generator matrix** — Sparse `N×N` rate matrix with per-row diagonal
//!   correction, so every row sums to zero
//! - **Persistence** — Text state listings, JSON matrix files with exact
//!   round-trip, and PGM image export of the rate structure
//!
//! # Quick Start
//!
//! The entry points are [`enumerate_states`], which produces a
//! [`StateSpace`], and [`build_matrix`], which turns it into a
//! [`TransitionMatrix`]:
//!
//! ```
//! use polymer_states::{Polymer, build_matrix, enumerate_states};
//!
//! // Every 2-link chain: 5^2 = 25 conformations.
//! let space = enumerate_states(2)?;
//! assert_eq!(space.len(), 25);
//!
//! // Generator matrix for hopping rate 1.0 and end-reaction rate 0.5.
//! let matrix = build_matrix(&space, 1.0, 0.5)?;
//!
//! // From the curled-up state "SS", hernia creation opens the chain into
//! // "UD" at the hopping rate, and end extension reaches "US" at the
//! // end-reaction rate.
//! let ss = space.index_of(&"SS".parse::<Polymer>().unwrap()).unwrap();
//! let ud = space.index_of(&"UD".parse::<Polymer>().unwrap()).unwrap();
//! let us = space.index_of(&"US".parse::<Polymer>().unwrap()).unwrap();
//! assert_eq!(matrix.get(ss, ud), 1.0);
//! assert_eq!(matrix.get(ss, us), 0.5);
//!
//! // Rows of a generator matrix sum to zero.
//! assert_eq!(matrix.row_sum(ss), 0.0);
//! # Ok::<(), polymer_states::EngineError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`engine`] — Enumeration, elementary moves, and matrix assembly
//! - [`io`] — State listings, matrix JSON, and PGM image export
//!
//! # Data Types
//!
//! - [`Link`] — One chain link: `Up`, `Down`, `Left`, `Right`, or `Slack`
//! - [`Polymer`] — An immutable conformation (ordered link sequence)
//! - [`StateSpace`] — Dense index over all conformations of one link count
//! - [`TransitionMatrix`] — The sparse generator matrix
//! - [`MoveKind`] / [`MoveRates`] — Move classification and the `(h, c)`
//!   rate table

pub mod engine;
pub mod io;

mod model;

pub use model::link::{Link, ParseLinkError};
pub use model::matrix::TransitionMatrix;
pub use model::polymer::{EmptyChainError, ParsePolymerError, Polymer};

pub use engine::{
    MoveKind, MoveRates, StateSpace, build_matrix, elementary_moves, enumerate_states,
    transition_rate,
};

pub use engine::Error as EngineError;
pub use io::Error as IoError;
