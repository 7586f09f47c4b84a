//! Errors raised by board construction and field access.
//!
//! Illegal moves are not errors; see `moves::Rejection`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No setup is known for this board size.
    #[error("invalid board size {0}: no game configuration is known for this board size")]
    InvalidBoardSize(usize),

    /// Field coordinates outside `[0, size)`.
    #[error("field ({x}, {y}) is outside a {size}x{size} board")]
    IndexOutOfRange { x: usize, y: usize, size: usize },

    /// Restored field list does not cover the grid.
    #[error("expected {expected} fields for the board size, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Restored stacks and reserves do not add up to the starting setup.
    #[error("board state is inconsistent with the setup for size {0}")]
    InconsistentState(usize),
}
