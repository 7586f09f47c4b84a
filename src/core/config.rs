//! Game configuration.
//!
//! - `BOARD_SETUPS`: fixed table of starting reserves per board size
//! - `GameConfig`: everything a session needs to start a game
//!
//! The table is a compile-time constant; lookups never allocate.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::player::PlayerState;

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 8;

/// Starting reserve of each player for one board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSetup {
    pub stones: u32,
    pub capstones: u32,
}

impl BoardSetup {
    #[must_use]
    pub const fn new(stones: u32, capstones: u32) -> Self {
        Self { stones, capstones }
    }

    /// The reserve a player starts the game with.
    #[must_use]
    pub const fn reserve(self) -> PlayerState {
        PlayerState::new(self.stones, self.capstones)
    }
}

/// Starting reserves, keyed by board size.
pub const BOARD_SETUPS: [(usize, BoardSetup); 6] = [
    (3, BoardSetup::new(10, 0)),
    (4, BoardSetup::new(15, 0)),
    (5, BoardSetup::new(21, 1)),
    (6, BoardSetup::new(30, 1)),
    (7, BoardSetup::new(40, 1)),
    (8, BoardSetup::new(50, 2)),
];

/// Look up the starting reserve for a board size.
///
/// ```
/// use tak_engine::core::{board_setup, BoardSetup};
///
/// assert_eq!(board_setup(5), Some(BoardSetup::new(21, 1)));
/// assert_eq!(board_setup(9), None);
/// ```
#[must_use]
pub const fn board_setup(board_size: usize) -> Option<BoardSetup> {
    let mut i = 0;
    while i < BOARD_SETUPS.len() {
        if BOARD_SETUPS[i].0 == board_size {
            return Some(BOARD_SETUPS[i].1);
        }
        i += 1;
    }
    None
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fields per side.
    pub board_size: usize,

    /// Starting reserve for `board_size`.
    pub setup: BoardSetup,

    /// Run win detection after every accepted move (default: true).
    pub check_win_each_move: bool,
}

impl GameConfig {
    /// Create a configuration for a board size.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidBoardSize` if the size has no setup.
    pub fn new(board_size: usize) -> Result<Self, BoardError> {
        let setup = board_setup(board_size).ok_or(BoardError::InvalidBoardSize(board_size))?;
        Ok(Self {
            board_size,
            setup,
            check_win_each_move: true,
        })
    }

    /// Enable or disable win detection after each move.
    #[must_use]
    pub fn with_win_check(mut self, enabled: bool) -> Self {
        self.check_win_each_move = enabled;
        self
    }
}
