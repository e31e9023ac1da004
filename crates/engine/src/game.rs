//! The game state holder: the authoritative record a front end keeps between
//! engine calls.

use crate::board::Board;
use crate::constants::Player;
use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::move_gen;
use crate::r#move::{Move, Position};
use tracing::debug;

/// Result of clicking (or typing) a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A piece of the side to move was picked up; its legal destinations are
    /// in [`GameState::valid_moves`].
    Selected(Position),
    /// The picked-up piece was played.
    Moved(Move),
    /// A piece was held but the square was not one of its destinations.
    Cleared,
    /// Nothing happened.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub selected: Option<Position>,
    pub valid_moves: Vec<Position>,
    pub move_history: Vec<Move>,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub in_check: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Player::Red)
    }

    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            selected: None,
            valid_moves: Vec::new(),
            move_history: Vec::new(),
            game_over: false,
            winner: None,
            in_check: move_gen::is_in_check(&board, current_player),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn select_position(&mut self, pos: Position) -> Selection {
        if self.game_over {
            return Selection::Ignored;
        }

        if let Some(from) = self.selected.take() {
            let valid = std::mem::take(&mut self.valid_moves);
            if valid.contains(&pos) {
                if let Ok(mv) = self.play(from, pos) {
                    return Selection::Moved(mv);
                }
            }
            return Selection::Cleared;
        }

        match self.board.get(pos) {
            Some(piece) if piece.player == self.current_player => {
                self.valid_moves = move_gen::legal_destinations(&self.board, piece, pos);
                self.selected = Some(pos);
                Selection::Selected(pos)
            }
            _ => Selection::Ignored,
        }
    }

    /// Plays `from -> to` for the side to move after checking it is legal.
    pub fn play(&mut self, from: Position, to: Position) -> EngineResult<Move> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        let piece = self.board.get(from).ok_or(EngineError::EmptySquare(from))?;
        if piece.player != self.current_player {
            return Err(EngineError::NotYourPiece { square: from, owner: piece.player });
        }
        if !move_gen::legal_destinations(&self.board, piece, from).contains(&to) {
            return Err(EngineError::IllegalMove { from, to });
        }

        let mv = Move::new(from, to, piece, self.board.get(to));
        self.advance(mv);
        Ok(mv)
    }

    /// Plays a move chosen by the search. The move is re-validated against
    /// the current position, so a stale result is rejected.
    pub fn apply_engine_move(&mut self, mv: Move) -> EngineResult<Move> {
        if self.board.get(mv.from) != Some(mv.piece) {
            return Err(EngineError::IllegalMove { from: mv.from, to: mv.to });
        }
        self.play(mv.from, mv.to)
    }

    /// Ends the game when the side to move has no legal move: a loss if it is
    /// checkmated, otherwise a draw.
    pub fn finish_without_move(&mut self) {
        self.game_over = true;
        self.winner = if move_gen::is_checkmate(&self.board, self.current_player) {
            Some(self.current_player.opponent())
        } else {
            None
        };
        debug!(winner = ?self.winner, "game finished without a move");
    }

    pub fn legal_move_count(&self) -> usize {
        engine::legal_moves(&self.board, self.current_player).len()
    }

    fn advance(&mut self, mv: Move) {
        self.board = self.board.apply_move(mv.from, mv.to);
        self.move_history.push(mv);
        self.selected = None;
        self.valid_moves.clear();

        let next = self.current_player.opponent();
        self.current_player = next;
        self.in_check = move_gen::is_in_check(&self.board, next);
        if move_gen::is_checkmate(&self.board, next) {
            self.game_over = true;
            self.winner = Some(next.opponent());
        }

        debug!(
            mv = %mv.to_notation(),
            to_move = %next,
            in_check = self.in_check,
            game_over = self.game_over,
            "move applied"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{Piece, PieceType};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.board, Board::initial());
        assert_eq!(game.current_player, Player::Red);
        assert!(!game.game_over && !game.in_check);
        assert_eq!(game.legal_move_count(), 44);
    }

    #[test]
    fn test_select_then_move() {
        let mut game = GameState::new();
        assert_eq!(game.select_position(pos(6, 0)), Selection::Selected(pos(6, 0)));
        assert_eq!(game.valid_moves, vec![pos(5, 0)]);

        let Selection::Moved(mv) = game.select_position(pos(5, 0)) else {
            panic!("soldier should have moved");
        };
        assert_eq!(mv.piece, Piece::new(PieceType::Soldier, Player::Red));
        assert_eq!(game.current_player, Player::Black);
        assert_eq!(game.move_history, vec![mv]);
        assert!(game.selected.is_none() && game.valid_moves.is_empty());
    }

    #[test]
    fn test_select_ignores_opponent_and_empty_squares() {
        let mut game = GameState::new();
        assert_eq!(game.select_position(pos(3, 0)), Selection::Ignored);
        assert_eq!(game.select_position(pos(5, 5)), Selection::Ignored);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_select_elsewhere_clears() {
        let mut game = GameState::new();
        game.select_position(pos(6, 0));
        assert_eq!(game.select_position(pos(4, 0)), Selection::Cleared);
        assert!(game.selected.is_none());
        assert_eq!(game.current_player, Player::Red);
    }

    #[test]
    fn test_play_rejects_bad_moves() {
        let mut game = GameState::new();
        assert_eq!(game.play(pos(5, 0), pos(4, 0)), Err(EngineError::EmptySquare(pos(5, 0))));
        assert_eq!(
            game.play(pos(3, 0), pos(4, 0)),
            Err(EngineError::NotYourPiece { square: pos(3, 0), owner: Player::Black })
        );
        assert_eq!(
            game.play(pos(6, 0), pos(6, 1)),
            Err(EngineError::IllegalMove { from: pos(6, 0), to: pos(6, 1) })
        );
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn test_play_rejects_self_check() {
        let board = Board::empty()
            .with_piece(pos(9, 4), Piece::new(PieceType::King, Player::Red))
            .with_piece(pos(7, 4), Piece::new(PieceType::Horse, Player::Red))
            .with_piece(pos(2, 4), Piece::new(PieceType::Chariot, Player::Black))
            .with_piece(pos(0, 3), Piece::new(PieceType::King, Player::Black));
        let mut game = GameState::from_board(board, Player::Red);
        assert!(matches!(game.play(pos(7, 4), pos(5, 3)), Err(EngineError::IllegalMove { .. })));
    }

    #[test]
    fn test_mating_move_ends_game() {
        let board = Board::empty()
            .with_piece(pos(0, 3), Piece::new(PieceType::King, Player::Black))
            .with_piece(pos(9, 4), Piece::new(PieceType::King, Player::Red))
            .with_piece(pos(1, 8), Piece::new(PieceType::Chariot, Player::Red))
            .with_piece(pos(2, 7), Piece::new(PieceType::Chariot, Player::Red));
        let mut game = GameState::from_board(board, Player::Red);
        game.play(pos(2, 7), pos(0, 7)).unwrap();
        assert!(game.in_check);
        assert!(game.game_over);
        assert_eq!(game.winner, Some(Player::Red));
        assert_eq!(game.play(pos(0, 3), pos(1, 3)), Err(EngineError::GameOver));
        assert_eq!(game.select_position(pos(0, 3)), Selection::Ignored);
    }

    #[test]
    fn test_engine_move_is_revalidated() {
        let mut game = GameState::new();
        let mv = engine::legal_moves(&game.board, Player::Red)[0];
        let stale = mv;
        game.apply_engine_move(mv).unwrap();
        assert!(game.apply_engine_move(stale).is_err());
    }

    #[test]
    fn test_finish_without_move() {
        let mut game = GameState::new();
        game.finish_without_move();
        assert!(game.game_over);
        assert_eq!(game.winner, None);
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        game.play(pos(6, 0), pos(5, 0)).unwrap();
        game.reset();
        assert_eq!(game, GameState::new());
    }
}
