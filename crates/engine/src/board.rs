//! The board representation for the Xiangqi engine.

use crate::constants::{COLS, Piece, PieceType, Player, ROWS};
use crate::error::{EngineError, EngineResult};
use crate::r#move::Position;
use once_cell::sync::Lazy;

pub const INITIAL_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR";

const BACK_RANK: [PieceType; COLS] = [
    PieceType::Chariot,
    PieceType::Horse,
    PieceType::Elephant,
    PieceType::Advisor,
    PieceType::King,
    PieceType::Advisor,
    PieceType::Elephant,
    PieceType::Horse,
    PieceType::Chariot,
];

// The orthodox starting position, built once.
static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    // (player, back rank, cannon rank, soldier rank)
    for (player, back, cannons, soldiers) in [(Player::Black, 0, 2, 3), (Player::Red, 9, 7, 6)] {
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board.cells[back][col] = Some(Piece::new(piece_type, player));
        }
        for col in [1, 7] {
            board.cells[cannons][col] = Some(Piece::new(PieceType::Cannon, player));
        }
        for col in (0..COLS).step_by(2) {
            board.cells[soldiers][col] = Some(Piece::new(PieceType::Soldier, player));
        }
    }
    board
});

/// A snapshot of the 10x9 grid.
///
/// Boards are plain values: moving a piece produces a new board and leaves
/// the one it was made from untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[None; COLS]; ROWS] }
    }

    pub fn initial() -> Self {
        *INITIAL_BOARD
    }

    /// Reads the piece placement field of a FEN string. Any fields after the
    /// first whitespace are ignored.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: &str| EngineError::InvalidFen(format!("{fen:?}: {reason}"));
        let layout = fen.split_whitespace().next().ok_or_else(|| invalid("empty"))?;

        let mut board = Board::empty();
        let ranks: Vec<&str> = layout.split('/').collect();
        if ranks.len() != ROWS {
            return Err(invalid("expected 10 ranks"));
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for ch in rank.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    col += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or_else(|| invalid("unknown piece letter"))?;
                    if col >= COLS {
                        return Err(invalid("rank too long"));
                    }
                    board.cells[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != COLS {
                return Err(invalid("rank does not have 9 files"));
            }
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);
        for (r, row) in self.cells.iter().enumerate() {
            let mut empty_count = 0;
            for cell in row {
                match cell {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if r < ROWS - 1 {
                fen.push('/');
            }
        }
        fen
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row()][pos.col()]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Places (or clears) a square. Used when setting up positions; move
    /// application goes through [`Board::apply_move`].
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.cells[pos.row()][pos.col()] = piece;
    }

    /// Builder form of [`Board::set`].
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Some(piece));
        self
    }

    /// Returns a new board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is overwritten. Legality is the caller's
    /// concern.
    pub fn apply_move(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        next.cells[to.row()][to.col()] = self.get(from);
        next.cells[from.row()][from.col()] = None;
        next
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// The squares of one side's pieces, in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.player == player)
    }

    pub fn find_king(&self, player: Player) -> Option<Position> {
        self.pieces_of(player)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
