//! Evaluates a board position and returns a score.

use crate::board::Board;
use crate::config::Config;
use crate::constants::{PieceType, Player};
use crate::move_gen;

/// Static score of `board` from `perspective`'s point of view.
///
/// Material only, with crossed soldiers counted at a multiple of their base
/// value, plus a flat bonus or penalty for either side standing in check.
pub fn evaluate(board: &Board, perspective: Player, config: &Config) -> i32 {
    let mut score = 0;

    for (pos, piece) in board.pieces() {
        let mut value = piece.piece_type.value();
        if piece.piece_type == PieceType::Soldier && !move_gen::on_own_side(pos, piece.player) {
            value *= config.crossed_soldier_multiplier;
        }
        if piece.player == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    if move_gen::is_in_check(board, perspective) {
        score -= config.check_bonus;
    }
    if move_gen::is_in_check(board, perspective.opponent()) {
        score += config.check_bonus;
    }

    score
}
