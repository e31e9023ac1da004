use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use xiangqi_engine::engine::{all_moves, legal_moves};
use xiangqi_engine::{
    Board, Engine, Piece, PieceType, Player, Position, apply_move, choose_move, is_checkmate, is_in_check, move_gen,
};

/// Plays random legal moves from the opening and collects the boards seen,
/// together with the side to move on each.
fn random_positions(seed: u64, plies: usize) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::initial();
    let mut player = Player::Red;
    let mut seen = Vec::new();

    for _ in 0..plies {
        seen.push((board, player));
        let moves = legal_moves(&board, player);
        let Some(mv) = moves.choose(&mut rng) else { break };
        board = apply_move(&board, mv.from, mv.to);
        player = player.opponent();
    }
    seen
}

#[test]
fn test_search_never_leaves_own_king_in_check() {
    for seed in 0..4 {
        for (board, player) in random_positions(seed, 40).into_iter().step_by(5) {
            let Some(mv) = choose_move(&board, player, 2) else {
                assert!(legal_moves(&board, player).is_empty());
                continue;
            };
            assert_eq!(board.get(mv.from), Some(mv.piece));
            assert_eq!(mv.piece.player, player);
            assert!(!is_in_check(&apply_move(&board, mv.from, mv.to), player));
        }
    }
}

#[test]
fn test_generated_destinations_stay_on_board_and_confined() {
    for seed in 10..14 {
        for (board, player) in random_positions(seed, 60) {
            for mv in all_moves(&board, player) {
                assert!(mv.to.row() < 10 && mv.to.col() < 9);
                assert_ne!(board.get(mv.to).map(|p| p.player), Some(player));
                match mv.piece.piece_type {
                    PieceType::King | PieceType::Advisor => {
                        assert!(move_gen::in_palace(mv.to, player))
                    }
                    PieceType::Elephant => assert!(move_gen::on_own_side(mv.to, player)),
                    PieceType::Soldier => {
                        // Never backwards, sideways only once across the river.
                        let forward = player.forward();
                        let dr = mv.to.row() as isize - mv.from.row() as isize;
                        assert!(dr == forward || dr == 0);
                        if dr == 0 {
                            assert!(!move_gen::on_own_side(mv.from, player));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn mated_positions() -> Vec<(Board, Player)> {
    let red = |piece_type| Piece::new(piece_type, Player::Red);
    let black = |piece_type| Piece::new(piece_type, Player::Black);
    vec![
        // Two chariots on the first two ranks, King in the palace corner.
        (
            Board::empty()
                .with_piece(pos(0, 3), black(PieceType::King))
                .with_piece(pos(9, 4), red(PieceType::King))
                .with_piece(pos(0, 8), red(PieceType::Chariot))
                .with_piece(pos(1, 8), red(PieceType::Chariot)),
            Player::Black,
        ),
        // Same pattern against Red, whose King has two squares to try.
        (
            Board::empty()
                .with_piece(pos(0, 4), black(PieceType::King))
                .with_piece(pos(9, 5), red(PieceType::King))
                .with_piece(pos(9, 0), black(PieceType::Chariot))
                .with_piece(pos(8, 0), black(PieceType::Chariot)),
            Player::Red,
        ),
        // A spare soldier still has moves, none of which answer the check.
        (
            Board::empty()
                .with_piece(pos(0, 3), black(PieceType::King))
                .with_piece(pos(3, 0), black(PieceType::Soldier))
                .with_piece(pos(9, 4), red(PieceType::King))
                .with_piece(pos(1, 8), red(PieceType::Chariot))
                .with_piece(pos(0, 7), red(PieceType::Chariot)),
            Player::Black,
        ),
    ]
}

#[test]
fn test_checkmate_means_no_legal_move() {
    for (board, player) in mated_positions() {
        assert!(is_checkmate(&board, player));
        assert!(legal_moves(&board, player).is_empty());
        assert_eq!(choose_move(&board, player, 3), None);
        assert!(!is_checkmate(&board, player.opponent()));
    }
}

#[test]
fn test_checkmate_agrees_with_move_lists_during_play() {
    for seed in 20..24 {
        for (board, player) in random_positions(seed, 80) {
            let stuck = legal_moves(&board, player).is_empty();
            assert_eq!(is_checkmate(&board, player), stuck && is_in_check(&board, player));
        }
    }
}

#[test]
fn test_black_reply_from_opening() {
    let board = Board::initial();
    let mut engine = Engine::new();
    let mv = engine.search(&board, Player::Black, 1).unwrap();
    assert_eq!(board.get(mv.from).map(|p| p.player), Some(Player::Black));
    assert!(!is_in_check(&apply_move(&board, mv.from, mv.to), Player::Black));
    assert!(engine.nodes_searched > 1);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::initial();
    assert_eq!(choose_move(&board, Player::Red, 2), choose_move(&board, Player::Red, 2));
}
