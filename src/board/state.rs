//! Authoritative board state.
//!
//! ## Board
//!
//! - `size x size` grid of `StoneStack`s
//! - Both players' reserves
//! - History of accepted moves (the active player is derived from it)
//!
//! All mutation goes through `Move::apply_move`. Reads hand out copies or
//! shared borrows only.
//!
//! ## Cloning
//!
//! `Clone` is a full, independent copy: every stack and both reserves are
//! copied. The history is an `im::Vector`, so clones share its storage
//! until one of them appends, which keeps speculative clones cheap
//! without aliasing.
//!
//! ## Deserialization
//!
//! A restored board is checked before use: the size must have a setup,
//! the field list must cover the grid, and `verify_state` must pass.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{board_setup, BoardError, BoardSetup, Player, PlayerMap, PlayerState, Position, StoneType};
use crate::moves::Move;
use crate::stack::StoneStack;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,

    /// Row-major: field `(x, y)` lives at `y * size + x`.
    fields: Vec<StoneStack>,

    players: PlayerMap<PlayerState>,

    history: Vector<Move>,
}

/// Unchecked wire form of `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    fields: Vec<StoneStack>,
    players: PlayerMap<PlayerState>,
    history: Vector<Move>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let size = repr.size;
        board_setup(size).ok_or(BoardError::InvalidBoardSize(size))?;
        if repr.fields.len() != size * size {
            return Err(BoardError::FieldCount {
                expected: size * size,
                found: repr.fields.len(),
            });
        }

        let board = Self {
            size,
            fields: repr.fields,
            players: repr.players,
            history: repr.history,
        };
        if !board.verify_state() {
            return Err(BoardError::InconsistentState(size));
        }
        Ok(board)
    }
}

impl Board {
    /// Create an empty board with full reserves.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidBoardSize` if `size` is not in the setup table.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let setup = board_setup(size).ok_or(BoardError::InvalidBoardSize(size))?;

        Ok(Self {
            size,
            fields: vec![StoneStack::new(); size * size],
            players: PlayerMap::with_value(setup.reserve()),
            history: Vector::new(),
        })
    }

    /// Starting reserve for a board size, without building a board.
    #[must_use]
    pub const fn board_setup(size: usize) -> Option<BoardSetup> {
        board_setup(size)
    }

    /// Fields per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Snapshot of a player's reserve.
    #[must_use]
    pub fn player_state(&self, player: Player) -> PlayerState {
        self.players[player]
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Whether the swap-rule opening (first two plies) is still running.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.ply() < 2
    }

    /// Player to make the next move.
    #[must_use]
    pub fn active_player(&self) -> Player {
        Player::from_ply(self.ply())
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// The most recently accepted move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[must_use]
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Copy of the stack at `pos`.
    ///
    /// # Errors
    ///
    /// `BoardError::IndexOutOfRange` if `pos` is not on the board.
    pub fn field_at(&self, pos: Position) -> Result<StoneStack, BoardError> {
        if !self.is_inside(pos) {
            return Err(BoardError::IndexOutOfRange {
                x: pos.x,
                y: pos.y,
                size: self.size,
            });
        }
        Ok(self.stack(pos).clone())
    }

    /// Copy of the stack at `(x, y)`.
    ///
    /// # Errors
    ///
    /// `BoardError::IndexOutOfRange` if `(x, y)` is not on the board.
    pub fn field_at_xy(&self, x: usize, y: usize) -> Result<StoneStack, BoardError> {
        self.field_at(Position::new(x, y))
    }

    /// All positions, row by row from `y = 0`.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Whether no field is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.fields.iter().all(|stack| !stack.is_empty())
    }

    /// Audit the board.
    ///
    /// Checks that only top stones are walls or capstones, and that for
    /// each player reserve plus pieces on the board adds up to the
    /// starting reserve. Returns `false` on any violation.
    #[must_use]
    pub fn verify_state(&self) -> bool {
        let Some(setup) = board_setup(self.size) else {
            return false;
        };
        if self.fields.len() != self.size * self.size {
            return false;
        }

        let mut on_board: PlayerMap<PlayerState> = PlayerMap::default();
        for stack in &self.fields {
            if !stack.is_well_formed() {
                return false;
            }
            for stone in stack {
                match stone.kind {
                    StoneType::Capstone => on_board[stone.owner].capstones += 1,
                    StoneType::Flat | StoneType::Standing => on_board[stone.owner].stones += 1,
                }
            }
        }

        Player::ALL.into_iter().all(|player| {
            let reserve = self.players[player];
            let placed = on_board[player];
            reserve.stones + placed.stones == setup.stones && reserve.capstones + placed.capstones == setup.capstones
        })
    }

    /// Number of flat-topped fields per player.
    #[must_use]
    pub fn flat_counts(&self) -> PlayerMap<u32> {
        let mut counts = PlayerMap::with_value(0);
        for top in self.fields.iter().filter_map(StoneStack::peek) {
            if top.kind == StoneType::Flat {
                counts[top.owner] += 1;
            }
        }
        counts
    }

    // === Crate-internal mutation (moves only) ===

    /// Borrow the stack at `pos`. Callers check `is_inside` first.
    pub(crate) fn stack(&self, pos: Position) -> &StoneStack {
        &self.fields[pos.y * self.size + pos.x]
    }

    pub(crate) fn stack_mut(&mut self, pos: Position) -> &mut StoneStack {
        &mut self.fields[pos.y * self.size + pos.x]
    }

    pub(crate) fn reserve_mut(&mut self, player: Player) -> &mut PlayerState {
        &mut self.players[player]
    }

    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push_back(mv);
    }
}

impl std::fmt::Display for Board {
    /// Top row first; each cell shows the top stone or `.` when empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.size).rev() {
            write!(f, "{y} ")?;
            for x in 0..self.size {
                let glyph = self.stack(Position::new(x, y)).peek().map_or('.', |s| s.glyph());
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..self.size {
            // Columns are lettered from 'a'; the board never exceeds 8 columns.
            write!(f, "{}", char::from(b'a' + x as u8))?;
        }
        writeln!(f)?;
        for (player, reserve) in self.players.iter() {
            writeln!(f, "{player}: {} stones, {} capstones", reserve.stones, reserve.capstones)?;
        }
        Ok(())
    }
}
