//! Error types for the fallible edges of the engine: parsing and the game
//! state holder. Move generation and search never fail.

use crate::constants::Player;
use crate::r#move::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Invalid square: {0:?} (expected a file a-i and a rank 0-9)")]
    InvalidSquare(String),

    #[error("No piece at {0}")]
    EmptySquare(Position),

    /// The piece on the source square belongs to the side not on move.
    #[error("Piece at {square} belongs to {owner}")]
    NotYourPiece { square: Position, owner: Player },

    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("The game is over")]
    GameOver,
}

pub type EngineResult<T> = Result<T, EngineError>;
