//! Move generation, check and checkmate detection.
//!
//! The generator is permissive: it produces every destination allowed by a
//! piece's movement rule without asking whether the mover's own King is left
//! attacked. [`legal_destinations`] and the search apply that filter.

use crate::board::Board;
use crate::constants::{Piece, PieceType, Player};
use crate::r#move::Position;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ELEPHANT_STEPS: [(isize, isize); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

// Horse offsets paired with the leg square that must be empty for each.
const HORSE_STEPS: [((isize, isize), (isize, isize)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((-1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, -2), (0, -1)),
    ((1, 2), (0, 1)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
];

/// Whether `pos` lies in `player`'s 3x3 palace.
pub fn in_palace(pos: Position, player: Player) -> bool {
    let rows = match player {
        Player::Red => 7..=9,
        Player::Black => 0..=2,
    };
    rows.contains(&pos.row()) && (3..=5).contains(&pos.col())
}

/// Whether `pos` is on `player`'s own side of the river.
pub fn on_own_side(pos: Position, player: Player) -> bool {
    match player {
        Player::Red => pos.row() >= 5,
        Player::Black => pos.row() <= 4,
    }
}

/// A destination is reachable if it is empty or holds an opposing piece.
fn can_land(board: &Board, to: Position, player: Player) -> bool {
    board.get(to).is_none_or(|target| target.player != player)
}

/// Generates the destinations of `piece` standing on `from`.
///
/// The order is fixed per piece type and decides which of several equally
/// scored moves the search prefers.
pub fn piece_destinations(board: &Board, piece: Piece, from: Position) -> Vec<Position> {
    let player = piece.player;
    let mut moves = Vec::with_capacity(17);

    match piece.piece_type {
        PieceType::King | PieceType::Advisor => {
            let steps = if piece.piece_type == PieceType::King { &ORTHOGONAL } else { &DIAGONAL };
            for &(dr, dc) in steps {
                if let Some(to) = from.offset(dr, dc) {
                    if in_palace(to, player) && can_land(board, to, player) {
                        moves.push(to);
                    }
                }
            }
        }
        PieceType::Elephant => {
            for &(dr, dc) in &ELEPHANT_STEPS {
                let Some(to) = from.offset(dr, dc) else { continue };
                let Some(eye) = from.offset(dr / 2, dc / 2) else { continue };
                if on_own_side(to, player) && board.is_empty_at(eye) && can_land(board, to, player) {
                    moves.push(to);
                }
            }
        }
        PieceType::Horse => {
            for &((dr, dc), (lr, lc)) in &HORSE_STEPS {
                let Some(to) = from.offset(dr, dc) else { continue };
                let Some(leg) = from.offset(lr, lc) else { continue };
                if board.is_empty_at(leg) && can_land(board, to, player) {
                    moves.push(to);
                }
            }
        }
        PieceType::Chariot => {
            for &(dr, dc) in &ORTHOGONAL {
                let mut current = from.offset(dr, dc);
                while let Some(to) = current {
                    match board.get(to) {
                        None => moves.push(to),
                        Some(target) => {
                            if target.player != player {
                                moves.push(to);
                            }
                            break;
                        }
                    }
                    current = to.offset(dr, dc);
                }
            }
        }
        PieceType::Cannon => {
            for &(dr, dc) in &ORTHOGONAL {
                let mut screened = false;
                let mut current = from.offset(dr, dc);
                while let Some(to) = current {
                    match (screened, board.get(to)) {
                        (false, None) => moves.push(to),
                        (false, Some(_)) => screened = true,
                        (true, None) => {}
                        (true, Some(target)) => {
                            if target.player != player {
                                moves.push(to);
                            }
                            break;
                        }
                    }
                    current = to.offset(dr, dc);
                }
            }
        }
        PieceType::Soldier => {
            if let Some(to) = from.offset(player.forward(), 0) {
                if can_land(board, to, player) {
                    moves.push(to);
                }
            }
            if !on_own_side(from, player) {
                for dc in [-1, 1] {
                    if let Some(to) = from.offset(0, dc) {
                        if can_land(board, to, player) {
                            moves.push(to);
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Unit step from `from` towards `to` if both lie on one row or column.
fn line_step(from: Position, to: Position) -> Option<(isize, isize)> {
    let dr = to.row() as isize - from.row() as isize;
    let dc = to.col() as isize - from.col() as isize;
    if (dr == 0) == (dc == 0) {
        return None;
    }
    Some((dr.signum(), dc.signum()))
}

/// Counts the pieces strictly between two squares on the same row or column.
///
/// Returns `None` if the squares do not share a line (or are the same square).
pub fn count_pieces_between(board: &Board, from: Position, to: Position) -> Option<usize> {
    let (dr, dc) = line_step(from, to)?;
    let mut count = 0;
    let mut current = from.offset(dr, dc)?;
    while current != to {
        if !board.is_empty_at(current) {
            count += 1;
        }
        current = current.offset(dr, dc)?;
    }
    Some(count)
}

/// True if the squares share a line and nothing stands between them.
pub fn has_line_of_sight(board: &Board, from: Position, to: Position) -> bool {
    count_pieces_between(board, from, to) == Some(0)
}

/// Whether any opposing piece can reach `player`'s King.
///
/// A side without a King is treated as not in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let Some(king) = board.find_king(player) else {
        return false;
    };
    board
        .pieces_of(player.opponent())
        .any(|(pos, piece)| piece_destinations(board, piece, pos).contains(&king))
}

/// Whether `player` is in check and every reply leaves them in check.
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    if !is_in_check(board, player) {
        return false;
    }
    !board.pieces_of(player).any(|(from, piece)| {
        piece_destinations(board, piece, from)
            .into_iter()
            .any(|to| !is_in_check(&board.apply_move(from, to), player))
    })
}

/// Destinations of `piece` on `from` that do not leave its own King in check.
pub fn legal_destinations(board: &Board, piece: Piece, from: Position) -> Vec<Position> {
    piece_destinations(board, piece, from)
        .into_iter()
        .filter(|&to| !is_in_check(&board.apply_move(from, to), piece.player))
        .collect()
}
