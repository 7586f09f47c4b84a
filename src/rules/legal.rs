//! Legal move enumeration.
//!
//! Candidates are generated per field and filtered through
//! `Move::is_valid_move`, so the result agrees with the validator by
//! construction.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Direction, Player, Position, Stone, StoneType};
use crate::moves::Move;

impl Board {
    /// Every legal move for the active player.
    ///
    /// Placements come first (field order, then Flat/Standing/Capstone),
    /// followed by stack moves (field order, direction, carry, drops).
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let actor = self.active_player();
        let mut moves = Vec::new();

        self.placements(actor, &mut moves);
        if !self.is_opening() {
            self.slides(actor, &mut moves);
        }
        moves
    }

    fn placements(&self, actor: Player, out: &mut Vec<Move>) {
        let empty: Vec<Position> = self.positions().filter(|&p| self.stack(p).is_empty()).collect();

        if self.is_opening() {
            let stone = Stone::flat(actor.opponent());
            out.extend(empty.into_iter().map(|pos| Move::place(actor, stone, pos)));
            return;
        }

        for pos in empty {
            for kind in StoneType::ALL {
                let mv = Move::place(actor, Stone::new(actor, kind), pos);
                if mv.is_valid_move(self) {
                    out.push(mv);
                }
            }
        }
    }

    fn slides(&self, actor: Player, out: &mut Vec<Move>) {
        let controlled: Vec<Position> = self
            .positions()
            .filter(|&p| self.stack(p).controlling_player() == Some(actor))
            .collect();

        for start in controlled {
            let max_carry = self.size().min(self.stack(start).count());
            for direction in Direction::ALL {
                let reach = self.reach(start, direction);
                for carry in 1..=max_carry {
                    for drops in compositions(carry, reach) {
                        let mv = Move::slide(actor, start, direction, drops);
                        if mv.is_valid_move(self) {
                            out.push(mv);
                        }
                    }
                }
            }
        }
    }

    /// Fields between `start` and the edge in `direction`.
    fn reach(&self, start: Position, direction: Direction) -> usize {
        let last = self.size() - 1;
        match direction {
            Direction::Left => start.x,
            Direction::Right => last - start.x,
            Direction::Down => start.y,
            Direction::Up => last - start.y,
        }
    }
}

/// Ordered ways to split `total` into at most `max_parts` positive parts.
fn compositions(total: usize, max_parts: usize) -> Vec<SmallVec<[u8; 8]>> {
    let mut out = Vec::new();
    let mut current = SmallVec::new();
    compose(total, max_parts, &mut current, &mut out);
    out
}

fn compose(remaining: usize, parts_left: usize, current: &mut SmallVec<[u8; 8]>, out: &mut Vec<SmallVec<[u8; 8]>>) {
    if remaining == 0 {
        if !current.is_empty() {
            out.push(current.clone());
        }
        return;
    }
    if parts_left == 0 {
        return;
    }
    for part in 1..=remaining {
        // `remaining` never exceeds the largest board size.
        current.push(part as u8);
        compose(remaining - part, parts_left - 1, current, out);
        current.pop();
    }
}
