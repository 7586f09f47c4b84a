//! Placing a stone from a reserve onto an empty field.

use serde::{Deserialize, Serialize};

use super::Rejection;
use crate::board::Board;
use crate::core::{Player, Position, Stone, StoneType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceStone {
    pub actor: Player,
    /// Stone to place. Owned by the opponent during the opening.
    pub stone: Stone,
    pub position: Position,
}

impl PlaceStone {
    #[must_use]
    pub const fn new(actor: Player, stone: Stone, position: Position) -> Self {
        Self { actor, stone, position }
    }

    pub(super) fn check(&self, board: &Board) -> Result<(), Rejection> {
        let active = board.active_player();
        if self.actor != active {
            return Err(Rejection::NotYourTurn { actor: self.actor, active });
        }
        if !board.is_inside(self.position) {
            return Err(Rejection::OutsideBoard(self.position));
        }
        if !board.stack(self.position).is_empty() {
            return Err(Rejection::Occupied(self.position));
        }

        // Swap rule: each player's first placement is an opposing flat.
        if board.is_opening() {
            if self.stone.owner == self.actor {
                return Err(Rejection::OpeningOwnStone);
            }
            if self.stone.kind != StoneType::Flat {
                return Err(Rejection::OpeningNotFlat);
            }
        } else if self.stone.owner != self.actor {
            return Err(Rejection::WrongOwner {
                actor: self.actor,
                owner: self.stone.owner,
            });
        }

        if !board.player_state(self.stone.owner).has_piece(self.stone.kind) {
            return Err(Rejection::NoPiecesLeft {
                owner: self.stone.owner,
                kind: self.stone.kind,
            });
        }
        Ok(())
    }

    pub(super) fn apply_unchecked(&self, board: &mut Board) {
        board.stack_mut(self.position).push(self.stone);
        board.reserve_mut(self.stone.owner).take(self.stone.kind);
    }
}
