use clap::Parser;
use cli::Arguments;
use tracing_subscriber::EnvFilter;
use xiangqi_engine::{Board, Player};

mod ai_worker;
mod cli;
mod tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let arguments = Arguments::parse();
    let (board, first_player) = start_position(arguments.fen.as_deref())?;

    tui::run(tui::Options {
        board,
        first_player,
        ai: arguments.ai.player(),
        depth: arguments.depth,
    })
    .await
}

/// Reads `--fen`: a placement field, optionally followed by the side to move.
fn start_position(fen: Option<&str>) -> anyhow::Result<(Board, Player)> {
    let Some(fen) = fen else {
        return Ok((Board::initial(), Player::Red));
    };
    let board = Board::from_fen(fen)?;
    let player = match fen.split_whitespace().nth(1) {
        None | Some("w" | "r") => Player::Red,
        Some("b") => Player::Black,
        Some(other) => anyhow::bail!("unknown side to move `{}`", other),
    };
    Ok((board, player))
}
