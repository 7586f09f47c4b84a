//! Session driver: a board, its configuration and the result once the
//! game has ended.

mod session;

pub use session::{TakGame, Turn};
