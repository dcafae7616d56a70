//! Core data structures for the stochastic lattice polymer model.
//!
//! - [`link`] – The five-symbol link alphabet of the 2D square lattice.
//! - [`polymer`] – Immutable chain conformations (ordered link sequences).
//! - [`matrix`] – The sparse generator matrix produced by the engine.
//!
//! The data model intentionally separates conformations ([`Polymer`]) from
//! the dynamics built over them ([`TransitionMatrix`]); the [`crate::engine`]
//! pipeline transforms the former into the latter without ever mutating a
//! conformation in place.
//!
//! [`Polymer`]: polymer::Polymer
//! [`TransitionMatrix`]: matrix::TransitionMatrix

pub mod link;
pub mod matrix;
pub mod polymer;
