//! Defines board coordinates and the representation of a move.

use crate::constants::{COLS, Piece, ROWS};
use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// A square on the board.
///
/// Row 0 is Black's back rank and row 9 is Red's. Positions can only be
/// built inside the 10x9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS { Some(Self { row, col }) } else { None }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Shifts the position, returning `None` if the result leaves the board.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Iterates over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
    }
}

/// Algebraic notation: file `a`..`i` for the column, rank `0`..`9` counted
/// from Red's back rank.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, 9 - self.row)
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidSquare(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !('a'..='i').contains(&file) {
            return Err(invalid());
        }
        let rank = rank.to_digit(10).ok_or_else(invalid)? as usize;
        Position::new(9 - rank, (file as u8 - b'a') as usize).ok_or_else(invalid)
    }
}

/// A single move, with the moving piece and whatever stood on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Position, to: Position, piece: Piece, captured: Option<Piece>) -> Self {
        Self { from, to, piece, captured }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Move in the coordinate notation used by the terminal front end, e.g. `h2e2`.
    pub fn to_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.piece.chinese_char(), self.to_notation())?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.chinese_char())?;
        }
        Ok(())
    }
}
