//! The Textual User Interface for the Xiangqi engine.

use crate::ai_worker::AiWorker;
use anyhow::{Context, bail};
use crossterm::style::Stylize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use xiangqi_engine::constants::{COLS, ROWS};
use xiangqi_engine::{Board, Config, GameState, Player, Position, list_legal_destinations};

/// How a session starts and who plays whom.
pub struct Options {
    pub board: Board,
    pub first_player: Player,
    pub ai: Option<Player>,
    pub depth: i32,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Position, Position),
    Moves(Position),
    New,
    Exit,
}

/// Runs the main game loop for the text-based UI.
pub async fn run(options: Options) -> anyhow::Result<()> {
    let worker = AiWorker::new(Config::default());
    let mut game = GameState::from_board(options.board, options.first_player);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("--- Xiangqi ---");
    println!("Enter moves like h2e2. Other commands: moves <square>, new, exit.");

    loop {
        println!();
        print!("{}", render(&game.board));

        if !game.game_over && game.legal_move_count() == 0 {
            game.finish_without_move();
        }

        if game.game_over {
            match game.winner {
                Some(winner) => println!("Checkmate! {} wins.", winner),
                None => println!("No legal moves left. It's a draw."),
            }
        } else {
            if game.in_check {
                println!("{} is in check.", game.current_player);
            }

            if options.ai == Some(game.current_player) {
                println!("Computer is thinking...");
                let Some(handle) = worker.request(game.board, game.current_player, options.depth)
                else {
                    bail!("a search was already running");
                };
                match handle.await.context("search task failed")? {
                    Some(mv) => {
                        game.apply_engine_move(mv)?;
                        println!("Computer moves: {}", mv);
                    }
                    None => game.finish_without_move(),
                }
                continue;
            }
        }

        print!("{} > ", game.current_player);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match parse_command(&line) {
            Some(Command::Exit) => return Ok(()),
            Some(Command::New) => game = GameState::from_board(options.board, options.first_player),
            Some(Command::Moves(square)) => match game.board.get(square) {
                Some(piece) => {
                    let destinations: Vec<String> = list_legal_destinations(&game.board, piece, square)
                        .iter()
                        .map(Position::to_string)
                        .collect();
                    println!("{} on {}: {}", piece, square, destinations.join(" "));
                }
                None => println!("{} is empty.", square),
            },
            Some(Command::Play(from, to)) => {
                if let Err(e) = game.play(from, to) {
                    warn!(%from, %to, error = %e, "rejected move");
                    println!("{}", e);
                }
            }
            None => println!("Unrecognised input. Try h2e2, moves h2, new or exit."),
        }
    }
}

fn parse_command(input: &str) -> Option<Command> {
    let mut words = input.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("exit" | "quit", None) => Command::Exit,
        ("new", None) => Command::New,
        ("moves", Some(square)) => Command::Moves(square.parse().ok()?),
        (mv, None) if mv.len() == 4 && mv.is_ascii() => {
            Command::Play(mv[..2].parse().ok()?, mv[2..].parse().ok()?)
        }
        _ => return None,
    };
    words.next().is_none().then_some(command)
}

/// The board with Red pieces in red and Black pieces in bold, rank and file
/// labels matching move notation.
fn render(board: &Board) -> String {
    let frame = format!("  +{}+\n", "-".repeat(COLS * 3 + 1));
    let mut out = frame.clone();
    for row in 0..ROWS {
        out.push_str(&format!("{} | ", 9 - row));
        for col in 0..COLS {
            let cell = Position::new(row, col).and_then(|pos| board.get(pos));
            match cell {
                Some(piece) if piece.is_red() => {
                    out.push_str(&format!("{} ", piece.chinese_char().to_string().red()));
                }
                Some(piece) => out.push_str(&format!("{} ", piece.chinese_char().to_string().bold())),
                None => out.push_str(" . "),
            }
        }
        out.push_str("|\n");
        if row == 4 {
            out.push_str(&format!("  |{:~^width$}|\n", " river ", width = COLS * 3 + 1));
        }
    }
    out.push_str(&frame);
    out.push_str("    a  b  c  d  e  f  g  h  i\n");
    out
}
