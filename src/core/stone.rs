//! Stones: an owner plus a type tag.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Type (orientation) of a stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneType {
    /// Lying flat. Counts for roads and flat wins, can be stacked on.
    Flat,
    /// Standing stone (wall). Blocks roads and stacking.
    Standing,
    /// Capstone. Counts for roads, can flatten a lone wall.
    Capstone,
}

impl StoneType {
    pub const ALL: [StoneType; 3] = [StoneType::Flat, StoneType::Standing, StoneType::Capstone];

    /// Notation symbol (`F`, `S` or `C`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            StoneType::Flat => 'F',
            StoneType::Standing => 'S',
            StoneType::Capstone => 'C',
        }
    }

    /// Parse a notation symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(StoneType::Flat),
            'S' => Some(StoneType::Standing),
            'C' => Some(StoneType::Capstone),
            _ => None,
        }
    }
}

/// A single piece on the board or in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub owner: Player,
    pub kind: StoneType,
}

impl Stone {
    #[must_use]
    pub const fn new(owner: Player, kind: StoneType) -> Self {
        Self { owner, kind }
    }

    #[must_use]
    pub const fn flat(owner: Player) -> Self {
        Self::new(owner, StoneType::Flat)
    }

    #[must_use]
    pub const fn standing(owner: Player) -> Self {
        Self::new(owner, StoneType::Standing)
    }

    #[must_use]
    pub const fn capstone(owner: Player) -> Self {
        Self::new(owner, StoneType::Capstone)
    }

    /// Whether this stone counts towards a road when on top of a stack.
    #[must_use]
    pub const fn is_road(self) -> bool {
        !matches!(self.kind, StoneType::Standing)
    }

    /// The same stone laid flat. Only walls are ever flattened.
    #[must_use]
    pub const fn flattened(self) -> Self {
        Self::flat(self.owner)
    }

    /// Single-character rendering: uppercase for First, lowercase for Second.
    #[must_use]
    pub fn glyph(self) -> char {
        let symbol = self.kind.symbol();
        match self.owner {
            Player::First => symbol,
            Player::Second => symbol.to_ascii_lowercase(),
        }
    }
}
