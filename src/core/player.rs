//! Player identification, per-player storage and reserves.
//!
//! ## Player
//!
//! Tak is strictly a two-player game. `Player::First` always makes the
//! first ply; the active player is derived from the history length.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexable by `Player`.
//!
//! ## PlayerState
//!
//! A player's unplaced reserve of stones and capstones.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::stone::StoneType;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Get the 0-based index (First = 0, Second = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Player for a 0-based index; wraps modulo 2.
    ///
    /// ```
    /// use tak_engine::core::Player;
    ///
    /// assert_eq!(Player::from_ply(0), Player::First);
    /// assert_eq!(Player::from_ply(7), Player::Second);
    /// ```
    #[must_use]
    pub const fn from_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Get the opponent.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tak_engine::core::{Player, PlayerMap};
///
/// let mut flats: PlayerMap<u32> = PlayerMap::with_value(0);
/// flats[Player::Second] += 3;
///
/// assert_eq!(flats[Player::First], 0);
/// assert_eq!(flats[Player::Second], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::First), factory(Player::Second)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Unplaced pieces of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Regular stones, placeable flat or standing.
    pub stones: u32,
    /// Capstones.
    pub capstones: u32,
}

impl PlayerState {
    #[must_use]
    pub const fn new(stones: u32, capstones: u32) -> Self {
        Self { stones, capstones }
    }

    /// Stones plus capstones.
    #[must_use]
    pub const fn pieces_total(&self) -> u32 {
        self.stones + self.capstones
    }

    /// Whether a piece of the given type is left to place.
    #[must_use]
    pub const fn has_piece(&self, kind: StoneType) -> bool {
        match kind {
            StoneType::Capstone => self.capstones > 0,
            StoneType::Flat | StoneType::Standing => self.stones > 0,
        }
    }

    /// Remove one piece of the given type from the reserve.
    ///
    /// Callers check `has_piece` first; the counter never underflows.
    pub(crate) fn take(&mut self, kind: StoneType) {
        match kind {
            StoneType::Capstone => self.capstones = self.capstones.saturating_sub(1),
            StoneType::Flat | StoneType::Standing => self.stones = self.stones.saturating_sub(1),
        }
    }
}
