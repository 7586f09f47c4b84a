//! Moves: placing a stone, or moving part of a stack.
//!
//! `Move` is a closed enum; every rule check and every state transition
//! dispatches through an exhaustive match.
//!
//! ## Validate, then apply
//!
//! - `check` reports the first broken rule as a `Rejection`
//! - `is_valid_move` is `check(..).is_ok()` and never mutates
//! - `apply_move` checks first; a rejected move leaves the board untouched
//!   and returns `false`, an accepted one mutates the board and appends the
//!   move to its history
//!
//! ## Example
//!
//! ```
//! use tak_engine::board::Board;
//! use tak_engine::core::{Player, Position, Stone};
//! use tak_engine::moves::Move;
//!
//! let mut board = Board::new(5).unwrap();
//!
//! // Opening: First places one of Second's flats.
//! let opening = Move::place(Player::First, Stone::flat(Player::Second), Position::new(0, 0));
//! assert!(opening.apply_move(&mut board));
//!
//! // Second may not place their own stone during the opening.
//! let own = Move::place(Player::Second, Stone::flat(Player::Second), Position::new(1, 0));
//! assert!(!own.apply_move(&mut board));
//! assert_eq!(board.ply(), 1);
//! ```

mod place;
mod slide;

pub use place::PlaceStone;
pub use slide::MoveStack;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Direction, Player, Position, Stone, StoneType};

/// Why a move was refused.
///
/// Rejection is an expected outcome, not a failure of the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("{actor} moved, but it is {active}'s turn")]
    NotYourTurn { actor: Player, active: Player },

    #[error("field {0} is outside the board")]
    OutsideBoard(Position),

    #[error("field {0} is occupied")]
    Occupied(Position),

    #[error("opening placements must use the opponent's stone")]
    OpeningOwnStone,

    #[error("opening placements must be flat stones")]
    OpeningNotFlat,

    #[error("{actor} cannot place a stone owned by {owner}")]
    WrongOwner { actor: Player, owner: Player },

    #[error("{owner} has no {kind:?} left in reserve")]
    NoPiecesLeft { owner: Player, kind: StoneType },

    #[error("the first two moves must be placements")]
    OpeningPlacementOnly,

    #[error("field {0} is empty")]
    EmptyStack(Position),

    #[error("{actor} does not control the stack at {position}")]
    NotControlled { actor: Player, position: Position },

    #[error("cannot carry {carried} stones (limit {limit})")]
    CarryLimit { carried: usize, limit: usize },

    #[error("cannot carry {carried} stones from a stack of {height}")]
    NotEnoughStones { carried: usize, height: usize },

    #[error("every field passed must receive at least one stone")]
    ZeroDrop,

    #[error("step {step} leaves the board")]
    LeavesBoard { step: usize },

    #[error("cannot drop onto the stack at {0}")]
    Blocked(Position),

    #[error("the game is over")]
    GameOver,
}

/// A single ply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a stone from a reserve onto an empty field.
    Place(PlaceStone),
    /// Pick up stones from a controlled stack and spread them in a line.
    Slide(MoveStack),
}

impl Move {
    /// Placement move.
    #[must_use]
    pub fn place(actor: Player, stone: Stone, position: Position) -> Self {
        Move::Place(PlaceStone::new(actor, stone, position))
    }

    /// Stack move dropping `drops[i]` stones on the `i + 1`-th field from `start`.
    #[must_use]
    pub fn slide(actor: Player, start: Position, direction: Direction, drops: impl IntoIterator<Item = u8>) -> Self {
        Move::Slide(MoveStack::new(actor, start, direction, drops))
    }

    /// Player executing the move.
    #[must_use]
    pub fn actor(&self) -> Player {
        match self {
            Move::Place(place) => place.actor,
            Move::Slide(slide) => slide.actor,
        }
    }

    /// Check every rule without touching the board.
    ///
    /// # Errors
    ///
    /// The first rule the move breaks.
    pub fn check(&self, board: &Board) -> Result<(), Rejection> {
        match self {
            Move::Place(place) => place.check(board),
            Move::Slide(slide) => slide.check(board),
        }
    }

    #[must_use]
    pub fn is_valid_move(&self, board: &Board) -> bool {
        self.check(board).is_ok()
    }

    /// Apply the move if it is legal.
    ///
    /// Returns `false` and leaves `board` unchanged when the move is rejected.
    pub fn apply_move(&self, board: &mut Board) -> bool {
        if let Err(reason) = self.check(board) {
            debug!(actor = %self.actor(), %reason, "move rejected");
            return false;
        }

        match self {
            Move::Place(place) => place.apply_unchecked(board),
            Move::Slide(slide) => slide.apply_unchecked(board),
        }
        board.record(self.clone());
        trace!(mv = %self, ply = board.ply(), "move applied");
        true
    }
}

impl From<PlaceStone> for Move {
    fn from(place: PlaceStone) -> Self {
        Move::Place(place)
    }
}

impl From<MoveStack> for Move {
    fn from(slide: MoveStack) -> Self {
        Move::Slide(slide)
    }
}
