//! Errors reported by the rules engine.

use chess_core::{FenError, Move};
use thiserror::Error;

/// Failures surfaced to the caller of the rules engine.
///
/// `MalformedPosition` and `IllegalMove` are user errors and always leave
/// the board untouched. `InvariantViolation` means the engine reached a
/// state valid input cannot produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("malformed position: {0}")]
    MalformedPosition(#[from] FenError),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
