//! Moving part of a stack in a straight line.
//!
//! Up to `board.size()` stones are lifted off the top of a controlled
//! stack and carried in one direction, dropping at least one stone from
//! the bottom of the carried group on each field passed. Stones may only
//! land on empty or flat-topped fields, except that a capstone travelling
//! alone on the last step flattens a wall.
//!
//! Like placements, a stack move is only valid for the active player.
//! Controlling the source stack is not enough: an out-of-turn slide is
//! refused with `Rejection::NotYourTurn` before any stack is inspected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Rejection;
use crate::board::Board;
use crate::core::{Direction, Player, Position, StoneType};
use crate::stack::StoneStack;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveStack {
    pub actor: Player,
    pub start: Position,
    pub direction: Direction,
    /// Stones dropped on each field passed, nearest field first.
    pub drops: SmallVec<[u8; 8]>,
}

impl MoveStack {
    #[must_use]
    pub fn new(actor: Player, start: Position, direction: Direction, drops: impl IntoIterator<Item = u8>) -> Self {
        Self {
            actor,
            start,
            direction,
            drops: drops.into_iter().collect(),
        }
    }

    /// Total stones lifted from the start field.
    #[must_use]
    pub fn stones_taken(&self) -> usize {
        self.drops.iter().map(|&d| usize::from(d)).sum()
    }

    /// Field reached on step `step` (1-based), before bounds checking.
    fn step_position(&self, step: usize) -> Option<Position> {
        self.start.offset(self.direction, step)
    }

    pub(super) fn check(&self, board: &Board) -> Result<(), Rejection> {
        if board.is_opening() {
            return Err(Rejection::OpeningPlacementOnly);
        }
        let active = board.active_player();
        if self.actor != active {
            return Err(Rejection::NotYourTurn { actor: self.actor, active });
        }
        if !board.is_inside(self.start) {
            return Err(Rejection::OutsideBoard(self.start));
        }

        let source = board.stack(self.start);
        let top = source.peek().ok_or(Rejection::EmptyStack(self.start))?;
        if top.owner != self.actor {
            return Err(Rejection::NotControlled {
                actor: self.actor,
                position: self.start,
            });
        }

        if self.drops.iter().any(|&d| d == 0) {
            return Err(Rejection::ZeroDrop);
        }
        let carried = self.stones_taken();
        if carried == 0 || carried > board.size() {
            return Err(Rejection::CarryLimit {
                carried,
                limit: board.size(),
            });
        }
        if carried > source.count() {
            return Err(Rejection::NotEnoughStones {
                carried,
                height: source.count(),
            });
        }

        // The carried group's top is the source's top.
        let lone_capstone = self.drops.last() == Some(&1) && top.kind == StoneType::Capstone;
        let steps = self.drops.len();
        for step in 1..=steps {
            let pos = self
                .step_position(step)
                .filter(|&p| board.is_inside(p))
                .ok_or(Rejection::LeavesBoard { step })?;
            let dest = board.stack(pos);
            let flattens = step == steps && lone_capstone && dest.top_kind() == Some(StoneType::Standing);
            if !dest.accepts_drop() && !flattens {
                return Err(Rejection::Blocked(pos));
            }
        }
        Ok(())
    }

    pub(super) fn apply_unchecked(&self, board: &mut Board) {
        // Popping onto a second stack reverses the group, so the lowest
        // lifted stone comes off `carry` first.
        let mut carry = StoneStack::new();
        let source = board.stack_mut(self.start);
        for _ in 0..self.stones_taken() {
            if let Some(stone) = source.pop() {
                carry.push(stone);
            }
        }

        let steps = self.drops.len();
        for (i, &drop) in self.drops.iter().enumerate() {
            let Some(pos) = self.step_position(i + 1) else {
                break;
            };
            let dest = board.stack_mut(pos);
            if i + 1 == steps && dest.top_kind() == Some(StoneType::Standing) {
                if let Some(wall) = dest.pop() {
                    dest.push(wall.flattened());
                }
            }
            for _ in 0..drop {
                if let Some(stone) = carry.pop() {
                    dest.push(stone);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stone;
    use crate::moves::Move;

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    /// Opening in the two top corners, then the given placements
    /// alternately starting with First.
    fn board_with(size: usize, placements: &[(Stone, Position)]) -> Board {
        let mut board = Board::new(size).unwrap();
        assert!(Move::place(Player::First, Stone::flat(Player::Second), pos(0, size - 1)).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::First), pos(size - 1, size - 1)).apply_move(&mut board));
        for &(stone, at) in placements {
            let actor = board.active_player();
            assert!(Move::place(actor, stone, at).apply_move(&mut board), "placing {stone:?} at {at}");
        }
        board
    }

    fn slide(actor: Player, start: Position, direction: Direction, drops: &[u8]) -> Move {
        Move::slide(actor, start, direction, drops.iter().copied())
    }

    #[test]
    fn test_stones_taken() {
        let mv = MoveStack::new(Player::First, pos(0, 0), Direction::Right, [3, 1, 2]);
        assert_eq!(mv.stones_taken(), 6);
    }

    #[test]
    fn test_opening_rejects_slides() {
        let mut board = Board::new(5).unwrap();
        assert!(Move::place(Player::First, Stone::flat(Player::Second), pos(0, 0)).apply_move(&mut board));
        let mv = slide(Player::Second, pos(0, 0), Direction::Up, &[1]);
        assert_eq!(mv.check(&board), Err(Rejection::OpeningPlacementOnly));
    }

    #[test]
    fn test_single_stone_move() {
        let mut board = board_with(5, &[(Stone::flat(Player::First), pos(2, 2))]);
        // Second to move: place, then First slides.
        assert!(Move::place(Player::Second, Stone::flat(Player::Second), pos(0, 0)).apply_move(&mut board));

        assert!(slide(Player::First, pos(2, 2), Direction::Left, &[1]).apply_move(&mut board));
        assert!(board.field_at_xy(2, 2).unwrap().is_empty());
        assert_eq!(board.field_at_xy(1, 2).unwrap().peek(), Some(Stone::flat(Player::First)));
        assert!(board.verify_state());
    }

    #[test]
    fn test_out_of_turn_slide() {
        let mut board = Board::new(5).unwrap();
        assert!(Move::place(Player::First, Stone::flat(Player::Second), Position::new(1, 1)).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::First), Position::new(3, 3)).apply_move(&mut board));

        // Second controls (1, 1) but First is to move.
        let mv = MoveStack::new(Player::Second, Position::new(1, 1), Direction::Up, [1]);
        assert_eq!(
            mv.check(&board),
            Err(Rejection::NotYourTurn { actor: Player::Second, active: Player::First })
        );
    }

    #[test]
    fn test_empty_and_uncontrolled_sources() {
        let board = board_with(5, &[]);
        assert_eq!(
            slide(Player::First, pos(2, 2), Direction::Up, &[1]).check(&board),
            Err(Rejection::EmptyStack(pos(2, 2)))
        );
        assert_eq!(
            slide(Player::First, pos(0, 4), Direction::Down, &[1]).check(&board),
            Err(Rejection::NotControlled { actor: Player::First, position: pos(0, 4) })
        );
    }

    #[test]
    fn test_zero_drop_rejected() {
        let board = board_with(5, &[]);
        let cases: [&[u8]; 3] = [&[0], &[1, 0], &[0, 1]];
        for drops in cases {
            assert_eq!(
                slide(Player::First, pos(4, 4), Direction::Down, drops).check(&board),
                Err(Rejection::ZeroDrop),
                "drops {drops:?}"
            );
        }
    }

    #[test]
    fn test_carry_limits() {
        let board = board_with(5, &[]);
        assert_eq!(
            slide(Player::First, pos(4, 4), Direction::Down, &[]).check(&board),
            Err(Rejection::CarryLimit { carried: 0, limit: 5 })
        );
        assert_eq!(
            slide(Player::First, pos(4, 4), Direction::Down, &[2]).check(&board),
            Err(Rejection::NotEnoughStones { carried: 2, height: 1 })
        );
        assert_eq!(
            slide(Player::First, pos(4, 4), Direction::Down, &[3, 3]).check(&board),
            Err(Rejection::CarryLimit { carried: 6, limit: 5 })
        );
    }

    #[test]
    fn test_leaving_the_board() {
        let board = board_with(5, &[]);
        assert_eq!(
            slide(Player::First, pos(4, 4), Direction::Up, &[1]).check(&board),
            Err(Rejection::LeavesBoard { step: 1 })
        );
        assert_eq!(
            slide(Player::First, pos(4, 4), Direction::Right, &[1]).check(&board),
            Err(Rejection::LeavesBoard { step: 1 })
        );
    }

    #[test]
    fn test_wall_blocks() {
        let board = board_with(5, &[(Stone::flat(Player::First), pos(3, 3)), (Stone::standing(Player::Second), pos(3, 2))]);
        assert_eq!(
            slide(Player::First, pos(3, 3), Direction::Down, &[1]).check(&board),
            Err(Rejection::Blocked(pos(3, 2)))
        );
    }

    #[test]
    fn test_capstone_blocks() {
        let board = board_with(5, &[(Stone::flat(Player::First), pos(3, 3)), (Stone::capstone(Player::Second), pos(3, 2))]);
        assert_eq!(
            slide(Player::First, pos(3, 3), Direction::Down, &[1]).check(&board),
            Err(Rejection::Blocked(pos(3, 2)))
        );
    }

    #[test]
    fn test_lone_capstone_flattens_wall() {
        let mut board = board_with(5, &[(Stone::capstone(Player::First), pos(3, 3)), (Stone::standing(Player::Second), pos(3, 2))]);
        assert!(slide(Player::First, pos(3, 3), Direction::Down, &[1]).apply_move(&mut board));

        let landed = board.field_at_xy(3, 2).unwrap();
        let stones: Vec<_> = landed.iter().copied().collect();
        assert_eq!(stones, vec![Stone::flat(Player::Second), Stone::capstone(Player::First)]);
        assert!(board.verify_state());
    }

    #[test]
    fn test_multi_stone_group_cannot_flatten_wall() {
        // First's capstone on top of a First flat at (1, 1); wall at (2, 1).
        let mut board = board_with(
            5,
            &[
                (Stone::flat(Player::First), pos(1, 1)),
                (Stone::flat(Player::Second), pos(0, 0)),
                (Stone::capstone(Player::First), pos(1, 2)),
                (Stone::standing(Player::Second), pos(2, 1)),
            ],
        );
        assert!(slide(Player::First, pos(1, 2), Direction::Down, &[1]).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::Second), pos(4, 0)).apply_move(&mut board));
        assert_eq!(board.field_at_xy(1, 1).unwrap().top_kind(), Some(StoneType::Capstone));

        // Two stones landing together on the wall: rejected.
        let group = slide(Player::First, pos(1, 1), Direction::Right, &[2]);
        assert_eq!(group.check(&board), Err(Rejection::Blocked(pos(2, 1))));

        // Capstone alone at the end, but the wall is passed on step 1 of 2.
        let early = slide(Player::First, pos(1, 1), Direction::Right, &[1, 1]);
        assert_eq!(early.check(&board), Err(Rejection::Blocked(pos(2, 1))));

        // The capstone alone: accepted.
        let lone = slide(Player::First, pos(1, 1), Direction::Right, &[1]);
        assert!(lone.apply_move(&mut board));
        assert_eq!(board.field_at_xy(2, 1).unwrap().count(), 2);
        assert_eq!(board.field_at_xy(2, 1).unwrap().iter().next(), Some(&Stone::flat(Player::Second)));
        assert!(board.verify_state());
    }

    #[test]
    fn test_spread_preserves_order() {
        // Build (0, 0) = f F f F, bottom to top, with legal moves.
        let mut board = board_with(
            5,
            &[
                (Stone::flat(Player::First), pos(0, 1)),
                (Stone::flat(Player::Second), pos(0, 0)),
            ],
        );
        // (0, 0) = f F
        assert!(slide(Player::First, pos(0, 1), Direction::Down, &[1]).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::Second), pos(1, 0)).apply_move(&mut board));
        assert!(Move::place(Player::First, Stone::flat(Player::First), pos(2, 0)).apply_move(&mut board));
        // (0, 0) = f F f
        assert!(slide(Player::Second, pos(1, 0), Direction::Left, &[1]).apply_move(&mut board));
        assert!(slide(Player::First, pos(2, 0), Direction::Left, &[1]).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::Second), pos(3, 3)).apply_move(&mut board));
        // (0, 0) = f F f F
        assert!(slide(Player::First, pos(1, 0), Direction::Left, &[1]).apply_move(&mut board));
        assert!(Move::place(Player::Second, Stone::flat(Player::Second), pos(3, 2)).apply_move(&mut board));

        let tower: String = board.field_at_xy(0, 0).unwrap().iter().map(|s| s.glyph()).collect();
        assert_eq!(tower, "fFfF");

        // Carry the top three up: drop 1 on (0, 1), 2 on (0, 2).
        assert!(slide(Player::First, pos(0, 0), Direction::Up, &[1, 2]).apply_move(&mut board));
        let glyphs = |x, y| -> String { board.field_at_xy(x, y).unwrap().iter().map(|s| s.glyph()).collect() };
        assert_eq!(glyphs(0, 0), "f");
        assert_eq!(glyphs(0, 1), "F");
        assert_eq!(glyphs(0, 2), "fF");
        assert!(board.verify_state());
    }
}
