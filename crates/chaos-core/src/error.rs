//! Parse errors for the core value types.

use thiserror::Error;

/// Errors from parsing coordinates and god names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not a cell name between `a1` and `h8`.
    #[error("invalid coordinate: {0:?}")]
    InvalidCoord(String),
    /// The string does not name one of the four gods.
    #[error("unknown god: {0:?}")]
    UnknownGod(String),
}
