//! Game-ending rules and move enumeration.
//!
//! - `engine`: `Board::check_win`, road search, flat count, `GameResult`
//! - `legal`: `Board::legal_moves`
//!
//! Both extend `Board` with inherent methods; the move rules themselves
//! live with the move types in `moves`.

pub mod engine;
mod legal;

pub use engine::{GameResult, WinKind};
