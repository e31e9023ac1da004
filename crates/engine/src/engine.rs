//! The main search engine.

use crate::board::Board;
use crate::config::Config;
use crate::constants::{INFINITY, Player};
use crate::evaluate;
use crate::move_gen;
use crate::r#move::Move;
use std::time::Instant;
use tracing::info;

/// Every pseudo-legal move for `player`: pieces in row-major order, each
/// piece's destinations in generation order.
pub fn all_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .pieces_of(player)
        .flat_map(|(from, piece)| {
            move_gen::piece_destinations(board, piece, from)
                .into_iter()
                .map(move |to| Move::new(from, to, piece, board.get(to)))
        })
        .collect()
}

/// Moves for `player` that do not leave their own King in check.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    all_moves(board, player)
        .into_iter()
        .filter(|mv| !move_gen::is_in_check(&board.apply_move(mv.from, mv.to), player))
        .collect()
}

/// The search engine.
///
/// Holds only its configuration and the statistics of the last search; no
/// position state survives between calls.
pub struct Engine {
    pub config: Config,
    pub nodes_searched: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config, nodes_searched: 0 }
    }

    /// Picks a move for `player` with a fixed-depth alpha-beta search.
    ///
    /// `depth_hint` is clamped to the configured depth range. Returns `None`
    /// when `player` has no legal move, which the caller treats as game over.
    pub fn search(&mut self, board: &Board, player: Player, depth_hint: i32) -> Option<Move> {
        let depth = self.config.clamp_depth(depth_hint);
        self.nodes_searched = 0;
        let start_time = Instant::now();

        let (best_move, score) = self.minimax(board, depth, true, player, -INFINITY, INFINITY);

        info!(
            player = %player,
            depth,
            score,
            nodes = self.nodes_searched,
            time_ms = start_time.elapsed().as_millis() as u64,
            best = %best_move.map_or_else(|| "none".to_string(), |mv| mv.to_notation()),
            "search finished"
        );

        best_move
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Scores are always taken from `root`'s point of view: `root` maximizes
    /// and its opponent minimizes the same number.
    fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        root: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<Move>, i32) {
        self.nodes_searched += 1;

        if depth == 0 {
            return (None, evaluate::evaluate(board, root, &self.config));
        }

        let side = if maximizing { root } else { root.opponent() };
        let moves = all_moves(board, side);

        if moves.is_empty() {
            if move_gen::is_checkmate(board, side) {
                return (None, if maximizing { -INFINITY } else { INFINITY });
            }
            return (None, evaluate::evaluate(board, root, &self.config));
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let next = board.apply_move(mv.from, mv.to);
            if move_gen::is_in_check(&next, side) {
                continue;
            }

            let (_, score) = self.minimax(&next, depth - 1, !maximizing, root, alpha, beta);

            // The first legal move is kept even when it is lost outright, so a
            // side with any legal move always gets one back.
            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_move, best_score)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
