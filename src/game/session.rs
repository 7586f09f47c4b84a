//! A game in progress.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{BoardError, GameConfig};
use crate::moves::{Move, Rejection};
use crate::notation::{parse_move, NotationError};
use crate::rules::GameResult;

/// Outcome of playing one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The move was refused; the board is unchanged.
    Rejected(Rejection),
    /// The move was applied and play goes on.
    Continues,
    /// The move was applied and ended the game.
    Ended(GameResult),
}

impl Turn {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Turn::Rejected(_))
    }
}

/// Board plus result bookkeeping for one game.
///
/// Once a result is stored every further move is rejected with
/// `Rejection::GameOver`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TakGame {
    config: GameConfig,
    board: Board,
    result: Option<GameResult>,
}

impl TakGame {
    /// Start a game from a configuration.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidBoardSize` if `config.board_size` has no setup.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.board_size)?;
        Ok(Self {
            config,
            board,
            result: None,
        })
    }

    /// Start a game with default settings.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidBoardSize` for sizes outside 3..=8.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        Self::new(GameConfig::new(size)?)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Validate, judge and apply a move.
    ///
    /// The win check runs against the current board before the move is
    /// applied, so its result describes the position the move creates.
    #[instrument(level = "debug", skip(self, mv), fields(ply = self.board.ply()))]
    pub fn play(&mut self, mv: &Move) -> Turn {
        if self.result.is_some() {
            return Turn::Rejected(Rejection::GameOver);
        }
        if let Err(reason) = mv.check(&self.board) {
            debug!(%reason, "move refused");
            return Turn::Rejected(reason);
        }

        let result = if self.config.check_win_each_move {
            self.board.check_win(mv)
        } else {
            None
        };
        let applied = mv.apply_move(&mut self.board);
        debug_assert!(applied, "validated move was refused");

        match result {
            Some(result) => {
                info!(%result, ply = self.board.ply(), "game ended");
                self.result = Some(result);
                Turn::Ended(result)
            }
            None => Turn::Continues,
        }
    }

    /// Parse `text` against the current board and play it.
    ///
    /// # Errors
    ///
    /// `NotationError` if the text is malformed. Legal-but-refused moves
    /// come back as `Ok(Turn::Rejected(_))`.
    #[instrument(level = "debug", skip(self))]
    pub fn play_notation(&mut self, text: &str) -> Result<Turn, NotationError> {
        let mv = parse_move(text, &self.board)?;
        Ok(self.play(&mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Player, Position, Stone, StoneType};
    use crate::rules::WinKind;

    fn place(actor: Player, owner: Player, kind: StoneType, x: usize, y: usize) -> Move {
        Move::place(actor, Stone::new(owner, kind), Position::new(x, y))
    }

    #[test]
    fn test_new_game() {
        let game = TakGame::with_size(5).unwrap();
        assert_eq!(game.board().size(), 5);
        assert_eq!(game.board().ply(), 0);
        assert!(!game.is_over());
        assert!(game.result().is_none());
        assert!(game.config().check_win_each_move);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(TakGame::with_size(9).unwrap_err(), BoardError::InvalidBoardSize(9));
    }

    #[test]
    fn test_sample_match() {
        use Player::{First, Second};
        let mut game = TakGame::with_size(5).unwrap();

        let moves = [
            place(First, Second, StoneType::Flat, 1, 1),
            place(Second, First, StoneType::Flat, 2, 2),
            Move::slide(First, Position::new(2, 2), Direction::Down, [1]),
            Move::slide(Second, Position::new(1, 1), Direction::Right, [1]),
            place(First, First, StoneType::Capstone, 0, 0),
            place(Second, Second, StoneType::Standing, 2, 0),
        ];
        for mv in &moves {
            assert_eq!(game.play(mv), Turn::Continues, "{mv}");
            assert!(game.board().verify_state());
        }

        let board = game.board();
        assert_eq!(board.ply(), 6);
        assert_eq!(board.history().len(), 6);
        assert_eq!(board.field_at_xy(2, 1).unwrap().peek(), Some(Stone::flat(Second)));
        assert_eq!(board.field_at_xy(2, 1).unwrap().count(), 2);
        assert!(board.field_at_xy(1, 1).unwrap().is_empty());
        assert!(board.field_at_xy(2, 2).unwrap().is_empty());
        assert_eq!(board.player_state(First).capstones, 0);
        assert_eq!(board.player_state(Second).stones, 19);
    }

    #[test]
    fn test_rejection_leaves_game_unchanged() {
        let mut game = TakGame::with_size(4).unwrap();
        let before = game.board().clone();

        let turn = game.play(&place(Player::Second, Player::First, StoneType::Flat, 0, 0));
        assert_eq!(
            turn,
            Turn::Rejected(Rejection::NotYourTurn {
                actor: Player::Second,
                active: Player::First
            })
        );
        assert!(!turn.is_accepted());
        assert_eq!(game.board(), &before);
    }

    fn road_game(check: bool) -> (TakGame, Turn) {
        use Player::{First, Second};
        let config = GameConfig::new(3).unwrap().with_win_check(check);
        let mut game = TakGame::new(config).unwrap();

        let moves = [
            place(First, Second, StoneType::Flat, 0, 2),
            place(Second, First, StoneType::Flat, 0, 0),
            place(First, First, StoneType::Flat, 1, 0),
            place(Second, Second, StoneType::Flat, 1, 2),
        ];
        for mv in &moves {
            assert_eq!(game.play(mv), Turn::Continues);
        }
        let last = game.play(&place(First, First, StoneType::Flat, 2, 0));
        (game, last)
    }

    #[test]
    fn test_road_ends_game() {
        let (mut game, last) = road_game(true);
        let expected = GameResult::Win {
            winner: Player::First,
            kind: WinKind::Road,
            score: 9 + 7,
        };
        assert_eq!(last, Turn::Ended(expected));
        assert_eq!(game.result(), Some(&expected));
        assert!(game.is_over());

        let after = game.play(&place(Player::Second, Player::Second, StoneType::Flat, 1, 1));
        assert_eq!(after, Turn::Rejected(Rejection::GameOver));
        assert_eq!(game.board().ply(), 5);
    }

    #[test]
    fn test_win_check_disabled() {
        let (game, last) = road_game(false);
        assert_eq!(last, Turn::Continues);
        assert!(!game.is_over());
    }

    #[test]
    fn test_play_notation() {
        let mut game = TakGame::with_size(5).unwrap();
        assert_eq!(game.play_notation("b1"), Ok(Turn::Continues));
        assert_eq!(game.play_notation("c2"), Ok(Turn::Continues));
        assert_eq!(game.play_notation("c2-"), Ok(Turn::Continues));
        assert_eq!(game.play_notation("Ca0"), Ok(Turn::Continues));
        assert_eq!(
            game.play_notation("b1>"),
            Ok(Turn::Rejected(Rejection::NotControlled {
                actor: Player::First,
                position: Position::new(1, 1)
            }))
        );
        assert_eq!(game.play_notation("z9"), Err(NotationError::OutsideBoard("z9".into())));
        assert_eq!(game.play_notation("a"), Err(NotationError::InvalidSquare("a".into())));
        assert_eq!(game.board().ply(), 4);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut game = TakGame::with_size(4).unwrap();
        game.play_notation("a0").unwrap();
        game.play_notation("d3").unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: TakGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.config(), game.config());
    }
}
