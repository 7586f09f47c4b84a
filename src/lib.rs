//! # tak-engine
//!
//! Rules engine for the board game Tak.
//!
//! ## Design Principles
//!
//! 1. **Board Owns the Truth**: Fields, reserves and history live in one
//!    `Board`. Moves validate against it and mutate it only when accepted.
//!
//! 2. **Rejection Is Not Failure**: An illegal move comes back as a
//!    `Rejection` value with the board untouched. Only construction and
//!    out-of-range queries return errors.
//!
//! 3. **Cheap Look-Ahead**: `Board::check_win` judges a candidate on a
//!    private clone, so callers can probe moves freely.
//!
//! ## Modules
//!
//! - `core`: Players, stones, positions, directions, setup table, errors
//! - `stack`: The ordered stone stack held by each field
//! - `board`: Grid, reserves, history and state audit
//! - `moves`: Placement and stack movement with their validation rules
//! - `rules`: Road and flat win detection, legal move enumeration
//! - `notation`: Text notation for moves
//! - `game`: Session driver that plays moves and records the result
//!
//! ## Example
//!
//! ```
//! use tak_engine::{TakGame, Turn};
//!
//! let mut game = TakGame::with_size(5).unwrap();
//! assert_eq!(game.play_notation("a0").unwrap(), Turn::Continues);
//! assert_eq!(game.play_notation("e4").unwrap(), Turn::Continues);
//! assert_eq!(game.board().ply(), 2);
//! ```

pub mod core;
pub mod stack;
pub mod board;
pub mod moves;
pub mod rules;
pub mod notation;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    board_setup, BoardSetup, GameConfig,
    BoardError,
    Player, PlayerMap, PlayerState,
    Direction, Position,
    Stone, StoneType,
};

pub use crate::stack::StoneStack;

pub use crate::board::Board;

pub use crate::moves::{Move, MoveStack, PlaceStone, Rejection};

pub use crate::rules::{GameResult, WinKind};

pub use crate::notation::{format_move, parse_move, NotationError};

pub use crate::game::{TakGame, Turn};
