//! Field coordinates and movement directions.
//!
//! `x` grows to the right (column), `y` grows upwards (row). Field `(0, 0)`
//! is the bottom-left corner as seen by `Player::First`.

use serde::{Deserialize, Serialize};

/// Coordinates of one board field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Field `distance` steps away in `direction`.
    ///
    /// Returns `None` when the result would have a negative coordinate.
    /// The upper bound depends on the board and is checked by the caller.
    #[must_use]
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dx, dy) = direction.vector();
        let x = self.x.checked_add_signed(dx.checked_mul(distance as isize)?)?;
        let y = self.y.checked_add_signed(dy.checked_mul(distance as isize)?)?;
        Some(Self { x, y })
    }

    /// The adjacent field in `direction`, if its coordinates are non-negative.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        self.offset(direction, 1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction, relative to `Player::First`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Unit step as `(dx, dy)`.
    #[must_use]
    pub const fn vector(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }

    /// Notation symbol (`<`, `+`, `>`, `-`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Up => '+',
            Direction::Right => '>',
            Direction::Down => '-',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '<' => Some(Direction::Left),
            '+' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            '-' => Some(Direction::Down),
            _ => None,
        }
    }
}
