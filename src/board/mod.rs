//! The board: grid of stacks, reserves and move history.
//!
//! Win detection (`Board::check_win`) and legal move enumeration
//! (`Board::legal_moves`) are implemented in `rules`.

mod state;

pub use state::Board;
