//! Move notation.
//!
//! ## Placement
//!
//! Optional stone type (`F`, `S`, `C`; default `F`) followed by a square:
//! `a0`, `Sc2`, `Cb4`.
//!
//! ## Stack movement
//!
//! Optional carry count, square, direction (`<` left, `>` right, `+` up,
//! `-` down), then one digit per field passed giving the stones dropped
//! there: `a0+`, `3c2<12`. Without drop digits the whole carry lands on
//! the first field; without a count the carry is the sum of the drops
//! (one stone when neither is given).
//!
//! ## Squares
//!
//! A lowercase column letter from `a` and a row digit from `0`, both
//! inside the board: on a 5x5 board `a0` is `(0, 0)` and `e4` is `(4, 4)`.
//!
//! ## Example
//!
//! ```
//! use tak_engine::board::Board;
//! use tak_engine::notation::{format_move, parse_move};
//!
//! let board = Board::new(5).unwrap();
//! let mv = parse_move("c2", &board).unwrap();
//! assert!(mv.is_valid_move(&board));
//! assert_eq!(format_move(&mv), "c2");
//! ```

use thiserror::Error;

use crate::board::Board;
use crate::core::{Direction, Position, Stone, StoneType};
use crate::moves::Move;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move text")]
    Empty,

    #[error("invalid stone type '{0}'")]
    InvalidStoneType(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("square '{0}' is outside the board")]
    OutsideBoard(String),

    #[error("missing direction after '{0}'")]
    MissingDirection(String),

    #[error("invalid direction '{0}'")]
    InvalidDirection(String),

    #[error("invalid drop count '{0}'")]
    InvalidDropCount(String),

    #[error("carry count {count} does not match drops '{drops}'")]
    CountMismatch { count: u8, drops: String },

    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Parse move text for the player to move on `board`.
///
/// During the opening a placed stone belongs to the opponent of the
/// player to move.
///
/// # Errors
///
/// `NotationError` naming the offending part of `text`. A well-formed
/// move is returned even if it is illegal on `board`.
pub fn parse_move(text: &str, board: &Board) -> Result<Move, NotationError> {
    let actor = board.active_player();
    match parse_token(text.trim(), board.size())? {
        Parsed::Place { kind, position } => {
            let owner = if board.is_opening() { actor.opponent() } else { actor };
            Ok(Move::place(actor, Stone::new(owner, kind), position))
        }
        Parsed::Slide { start, direction, drops } => Ok(Move::slide(actor, start, direction, drops)),
    }
}

/// Canonical text for a move.
#[must_use]
pub fn format_move(mv: &Move) -> String {
    mv.to_string()
}

/// Square name of a position, e.g. `c2` for `(2, 2)`.
#[must_use]
pub fn square_name(pos: Position) -> String {
    let column = u32::try_from(pos.x)
        .ok()
        .and_then(|x| char::from_u32(u32::from(b'a') + x))
        .unwrap_or('?');
    format!("{column}{}", pos.y)
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(place) => {
                if place.stone.kind != StoneType::Flat {
                    write!(f, "{}", place.stone.kind.symbol())?;
                }
                write!(f, "{}", square_name(place.position))
            }
            Move::Slide(slide) => {
                let carried = slide.stones_taken();
                if carried != 1 {
                    write!(f, "{carried}")?;
                }
                write!(f, "{}{}", square_name(slide.start), slide.direction.symbol())?;
                if slide.drops.len() > 1 {
                    for drop in &slide.drops {
                        write!(f, "{drop}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

enum Parsed {
    Place { kind: StoneType, position: Position },
    Slide { start: Position, direction: Direction, drops: Vec<u8> },
}

fn parse_token(token: &str, size: usize) -> Result<Parsed, NotationError> {
    let chars: Vec<char> = token.chars().collect();
    let text = |range: std::ops::Range<usize>| -> String { chars[range].iter().collect() };
    let Some(&first) = chars.first() else {
        return Err(NotationError::Empty);
    };

    // Placement with an explicit stone type.
    if first.is_ascii_uppercase() {
        let kind = StoneType::from_symbol(first).ok_or_else(|| NotationError::InvalidStoneType(first.to_string()))?;
        let position = parse_square(&chars[1..], size)?;
        if chars.len() > 3 {
            return Err(NotationError::TrailingInput(text(3..chars.len())));
        }
        return Ok(Parsed::Place { kind, position });
    }

    let (count, square_at) = match first.to_digit(10) {
        Some(0) => return Err(NotationError::InvalidDropCount(first.to_string())),
        Some(d) => (Some(d as u8), 1),
        None => (None, 0),
    };
    let start = parse_square(&chars[square_at..], size)?;

    let dir_at = square_at + 2;
    let Some(&symbol) = chars.get(dir_at) else {
        return match count {
            Some(_) => Err(NotationError::MissingDirection(token.to_string())),
            None => Ok(Parsed::Place { kind: StoneType::Flat, position: start }),
        };
    };
    let direction = Direction::from_symbol(symbol).ok_or_else(|| NotationError::InvalidDirection(symbol.to_string()))?;

    let mut drops = Vec::new();
    for (i, &c) in chars.iter().enumerate().skip(dir_at + 1) {
        match c.to_digit(10) {
            Some(0) => return Err(NotationError::InvalidDropCount(c.to_string())),
            Some(d) => drops.push(d as u8),
            None => return Err(NotationError::TrailingInput(text(i..chars.len()))),
        }
    }

    let drops = match (count, drops.is_empty()) {
        (count, true) => vec![count.unwrap_or(1)],
        (None, false) => drops,
        (Some(count), false) => {
            let sum: u32 = drops.iter().map(|&d| u32::from(d)).sum();
            if sum != u32::from(count) {
                return Err(NotationError::CountMismatch {
                    count,
                    drops: text(dir_at + 1..chars.len()),
                });
            }
            drops
        }
    };
    Ok(Parsed::Slide { start, direction, drops })
}

/// Parse the two-character square at the start of `chars`.
fn parse_square(chars: &[char], size: usize) -> Result<Position, NotationError> {
    let name: String = chars.iter().take(2).collect();
    let (Some(&column), Some(&row)) = (chars.first(), chars.get(1)) else {
        return Err(NotationError::InvalidSquare(name));
    };
    if !column.is_ascii_lowercase() {
        return Err(NotationError::InvalidSquare(name));
    }
    let Some(y) = row.to_digit(10) else {
        return Err(NotationError::InvalidSquare(name));
    };

    let x = (column as u8 - b'a') as usize;
    let y = y as usize;
    if x >= size || y >= size {
        return Err(NotationError::OutsideBoard(name));
    }
    Ok(Position::new(x, y))
}
