//! Win detection.
//!
//! A game ends when a player builds a road (a 4-connected chain of flat-
//! or capstone-topped fields they control joining two opposite edges), or
//! by a flat count once the board is full or a reserve is exhausted.
//!
//! ## Precedence
//!
//! 1. The mover's road
//! 2. The opponent's road
//! 3. Flat count (more flat-topped fields wins, equal counts draw)
//!
//! ## Result mapping
//!
//! `check_win` returns `None` while the game continues (no winner, score
//! -1), `Some(GameResult::Draw)` for an even flat count (both, score -1)
//! and `Some(GameResult::Win { .. })` otherwise.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::{Direction, Player, PlayerMap, Position};
use crate::moves::Move;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    Road,
    Flat,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Win { winner: Player, kind: WinKind, score: u32 },
    /// Even flat count.
    Draw,
}

impl GameResult {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    /// Winner's score, or -1 for a draw.
    #[must_use]
    pub fn score(&self) -> i32 {
        match self {
            GameResult::Win { score, .. } => i32::try_from(*score).unwrap_or(i32::MAX),
            GameResult::Draw => -1,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win { winner, kind, score } => write!(f, "{winner} wins by {kind:?} ({score})"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Board edges touched by one connected group.
#[derive(Clone, Copy, Debug, Default)]
struct Edges {
    left: bool,
    right: bool,
    bottom: bool,
    top: bool,
}

impl Edges {
    fn touch(&mut self, pos: Position, size: usize) {
        self.left |= pos.x == 0;
        self.right |= pos.x == size - 1;
        self.bottom |= pos.y == 0;
        self.top |= pos.y == size - 1;
    }

    fn spans(self) -> bool {
        (self.left && self.right) || (self.bottom && self.top)
    }
}

impl Board {
    /// Result the game would have after `candidate`.
    ///
    /// Works on a private clone; `self` is never modified. An illegal
    /// candidate leaves the clone as it is, so the current position is
    /// judged with `candidate.actor()` as the mover.
    #[instrument(level = "debug", skip(self, candidate), fields(actor = %candidate.actor(), ply = self.ply()))]
    #[must_use]
    pub fn check_win(&self, candidate: &Move) -> Option<GameResult> {
        let mut after = self.clone();
        if !candidate.apply_move(&mut after) {
            debug!("candidate rejected, judging current position");
        }
        let result = after.result_after(candidate.actor());
        if let Some(result) = &result {
            debug!(%result, "game over");
        }
        result
    }

    /// Result of the current position, with `mover` having moved last.
    #[must_use]
    pub fn result_after(&self, mover: Player) -> Option<GameResult> {
        let roads = self.roads(mover);
        for player in [mover, mover.opponent()] {
            if roads[player] {
                return Some(self.win(player, WinKind::Road));
            }
        }
        self.flat_result()
    }

    /// Whether each player has a road.
    ///
    /// Breadth-first search from every unvisited border field that counts
    /// for a player. Stops early once `mover` is known to have a road.
    fn roads(&self, mover: Player) -> PlayerMap<bool> {
        let size = self.size();
        let index = |pos: Position| pos.y * size + pos.x;
        let on_border = |pos: &Position| pos.x == 0 || pos.y == 0 || pos.x == size - 1 || pos.y == size - 1;

        let mut roads = PlayerMap::with_value(false);
        let mut visited = vec![false; size * size];
        let mut queue = VecDeque::with_capacity(size * 2);

        for start in self.positions().filter(on_border) {
            if visited[index(start)] {
                continue;
            }
            let Some(owner) = self.stack(start).road_owner() else {
                continue;
            };
            if roads[owner] {
                continue;
            }

            let mut edges = Edges::default();
            visited[index(start)] = true;
            queue.push_back(start);
            while let Some(current) = queue.pop_front() {
                edges.touch(current, size);
                for dir in Direction::ALL {
                    let Some(next) = current.neighbor(dir).filter(|&n| self.is_inside(n)) else {
                        continue;
                    };
                    if !visited[index(next)] && self.stack(next).road_owner() == Some(owner) {
                        visited[index(next)] = true;
                        queue.push_back(next);
                    }
                }
            }

            if edges.spans() {
                roads[owner] = true;
                if owner == mover {
                    break;
                }
            }
        }
        roads
    }

    /// Flat count, once the board is full or a reserve is empty.
    fn flat_result(&self) -> Option<GameResult> {
        let exhausted = Player::ALL.into_iter().any(|p| self.player_state(p).pieces_total() == 0);
        if !exhausted && !self.is_full() {
            return None;
        }

        let flats = self.flat_counts();
        let (first, second) = (flats[Player::First], flats[Player::Second]);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => self.win(Player::First, WinKind::Flat),
            std::cmp::Ordering::Less => self.win(Player::Second, WinKind::Flat),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Board area plus unplayed pieces.
    fn win(&self, winner: Player, kind: WinKind) -> GameResult {
        let area = u32::try_from(self.size() * self.size()).unwrap_or(u32::MAX);
        GameResult::Win {
            winner,
            kind,
            score: area + self.player_state(winner).pieces_total(),
        }
    }
}
