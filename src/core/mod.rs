//! Core value types: players, stones, positions, configuration, errors.
//!
//! Everything here is a small `Copy` value. Board-level state lives in
//! `board`, stacks in `stack`.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod stone;

pub use config::{board_setup, BoardSetup, GameConfig, BOARD_SETUPS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::BoardError;
pub use player::{Player, PlayerMap, PlayerState};
pub use position::{Direction, Position};
pub use stone::{Stone, StoneType};
