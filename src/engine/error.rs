//! Error types for state enumeration and matrix construction.
//!
//! Errors are split into caller-correctable parameter problems and fatal
//! internal invariant violations; neither is ever silently swallowed, since
//! a partially built state space or matrix would corrupt every downstream
//! consumer.

use thiserror::Error;

/// Errors that can occur while enumerating states or building the
/// transition matrix.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter is out of range.
    ///
    /// Raised for `link_count < 1`, negative or non-finite rates, and
    /// structurally invalid state lists handed to
    /// [`StateSpace::from_sequences`](crate::StateSpace::from_sequences).
    #[error("invalid parameter '{name}': {detail}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the constraint that was violated.
        detail: String,
    },

    /// A candidate neighbor produced by the move set is missing from the
    /// enumerated state space.
    ///
    /// The matrix builder must never discover states the enumerator did not
    /// already canonicalize; this indicates an enumerator/rule-engine
    /// inconsistency (or a truncated state space) and aborts construction.
    #[error(
        "state space mismatch: state {from_index} reaches '{target}' by one elementary move, but that state is not in the enumerated space"
    )]
    StateSpaceMismatch {
        /// Index of the origin state.
        from_index: usize,
        /// Text form of the unreachable target conformation.
        target: String,
    },
}

impl Error {
    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            detail: detail.into(),
        }
    }

    /// Creates a [`StateSpaceMismatch`](Error::StateSpaceMismatch) error.
    pub fn state_space_mismatch(from_index: usize, target: impl Into<String>) -> Self {
        Self::StateSpaceMismatch {
            from_index,
            target: target.into(),
        }
    }
}
