//! Stone stacks.
//!
//! Every board field holds one `StoneStack`. Stones are added and removed
//! only at the top; the top stone controls the field.
//!
//! ## Invariant
//!
//! Only the top stone may be `Standing` or a `Capstone`. The stack itself
//! does not enforce this (moves do); `is_well_formed` lets the board audit it.
//!
//! ## Example
//!
//! ```
//! use tak_engine::core::{Player, Stone};
//! use tak_engine::stack::StoneStack;
//!
//! let mut stack = StoneStack::new();
//! stack.push(Stone::flat(Player::First));
//! stack.push(Stone::capstone(Player::Second));
//!
//! assert_eq!(stack.count(), 2);
//! assert_eq!(stack.controlling_player(), Some(Player::Second));
//!
//! // Iteration runs bottom to top.
//! let owners: Vec<_> = stack.iter().map(|s| s.owner).collect();
//! assert_eq!(owners, vec![Player::First, Player::Second]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Stone, StoneType};

/// LIFO stack of stones on one field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoneStack {
    /// Bottom first. Most stacks stay short, so eight stones live inline.
    stones: SmallVec<[Stone; 8]>,
}

impl StoneStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a stone on top.
    pub fn push(&mut self, stone: Stone) {
        self.stones.push(stone);
    }

    /// Remove and return the top stone.
    pub fn pop(&mut self) -> Option<Stone> {
        self.stones.pop()
    }

    /// The top stone, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Stone> {
        self.stones.last().copied()
    }

    /// Number of stones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Stones from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Stone> + ExactSizeIterator {
        self.stones.iter()
    }

    /// Owner of the top stone.
    #[must_use]
    pub fn controlling_player(&self) -> Option<Player> {
        self.peek().map(|top| top.owner)
    }

    /// Type of the top stone.
    #[must_use]
    pub fn top_kind(&self) -> Option<StoneType> {
        self.peek().map(|top| top.kind)
    }

    /// Player this field counts for in a road, if any.
    ///
    /// Empty fields and walls count for nobody.
    #[must_use]
    pub fn road_owner(&self) -> Option<Player> {
        self.peek().filter(|top| top.is_road()).map(|top| top.owner)
    }

    /// Whether a moving stone may be dropped here without flattening.
    #[must_use]
    pub fn accepts_drop(&self) -> bool {
        matches!(self.top_kind(), None | Some(StoneType::Flat))
    }

    /// Whether every stone below the top is flat.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.stones.split_last() {
            Some((_, below)) => below.iter().all(|s| s.kind == StoneType::Flat),
            None => true,
        }
    }
}

impl FromIterator<Stone> for StoneStack {
    /// Build a stack from stones listed bottom to top.
    fn from_iter<I: IntoIterator<Item = Stone>>(iter: I) -> Self {
        Self {
            stones: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StoneStack {
    type Item = &'a Stone;
    type IntoIter = std::slice::Iter<'a, Stone>;

    fn into_iter(self) -> Self::IntoIter {
        self.stones.iter()
    }
}
