use clap::{Parser, ValueEnum};
use xiangqi_engine::{Config, Player};

/// Which side, if any, the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiSide {
    Red,
    Black,
    None,
}

impl AiSide {
    pub fn player(self) -> Option<Player> {
        match self {
            AiSide::Red => Some(Player::Red),
            AiSide::Black => Some(Player::Black),
            AiSide::None => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "xiangqi", about = "Play Xiangqi against a small alpha-beta engine")]
pub struct Arguments {
    /// Search depth in plies, 1 (easy) to 4 (hard).
    #[arg(short, long, default_value_t = Config::default().default_depth, value_parser = clap::value_parser!(i32).range(1..=4))]
    pub depth: i32,

    /// Side played by the computer.
    #[arg(short, long, value_enum, default_value_t = AiSide::Black)]
    pub ai: AiSide,

    /// Start position as a FEN placement, optionally followed by `w` or `b`.
    #[arg(short, long)]
    pub fen: Option<String>,
}
