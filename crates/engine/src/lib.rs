pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod game;
pub mod move_gen;
pub mod r#move;

pub use board::Board;
pub use config::Config;
pub use constants::{Piece, PieceType, Player};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use game::{GameState, Selection};
pub use r#move::{Move, Position};

/// Destinations a human may be offered for `piece` on `position`: its
/// movement rule, minus anything that leaves its own King in check.
pub fn list_legal_destinations(board: &Board, piece: Piece, position: Position) -> Vec<Position> {
    move_gen::legal_destinations(board, piece, position)
}

pub fn apply_move(board: &Board, from: Position, to: Position) -> Board {
    board.apply_move(from, to)
}

pub fn is_in_check(board: &Board, player: Player) -> bool {
    move_gen::is_in_check(board, player)
}

pub fn is_checkmate(board: &Board, player: Player) -> bool {
    move_gen::is_checkmate(board, player)
}

/// Searches for a move with the default configuration.
pub fn choose_move(board: &Board, player: Player, depth_hint: i32) -> Option<Move> {
    Engine::new().search(board, player, depth_hint)
}
