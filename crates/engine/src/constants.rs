//! Constants and primitive piece types used in the Xiangqi engine.

use std::fmt;

pub const ROWS: usize = 10;
pub const COLS: usize = 9;

/// Sentinel score used by the search for forced mates. Larger than any
/// static evaluation can reach.
pub const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// Get the opponent of the current player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row step a soldier of this player takes when moving forward.
    pub fn forward(self) -> isize {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceType {
    /// Material value of the piece type, before the river bonus.
    pub fn value(self) -> i32 {
        match self {
            PieceType::King => 10000,
            PieceType::Advisor => 200,
            PieceType::Elephant => 200,
            PieceType::Horse => 400,
            PieceType::Chariot => 900,
            PieceType::Cannon => 450,
            PieceType::Soldier => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub player: Player,
}

impl Piece {
    pub const fn new(piece_type: PieceType, player: Player) -> Self {
        Self { piece_type, player }
    }

    pub fn is_red(self) -> bool {
        self.player == Player::Red
    }

    pub fn to_fen_char(self) -> char {
        let c = match self.piece_type {
            PieceType::King => 'k',
            PieceType::Advisor => 'a',
            PieceType::Elephant => 'b',
            PieceType::Horse => 'n',
            PieceType::Chariot => 'r',
            PieceType::Cannon => 'c',
            PieceType::Soldier => 'p',
        };
        if self.is_red() { c.to_ascii_uppercase() } else { c }
    }

    /// Parses a FEN letter. Upper case is Red. `e` and `h` are accepted as
    /// aliases for the elephant and the horse.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'a' => PieceType::Advisor,
            'b' | 'e' => PieceType::Elephant,
            'n' | 'h' => PieceType::Horse,
            'r' => PieceType::Chariot,
            'c' => PieceType::Cannon,
            'p' => PieceType::Soldier,
            _ => return None,
        };
        let player = if c.is_ascii_uppercase() { Player::Red } else { Player::Black };
        Some(Piece::new(piece_type, player))
    }

    pub fn chinese_char(self) -> char {
        match (self.player, self.piece_type) {
            (Player::Red, PieceType::King) => '帥',
            (Player::Red, PieceType::Advisor) => '仕',
            (Player::Red, PieceType::Elephant) => '相',
            (Player::Red, PieceType::Cannon) => '炮',
            (Player::Red, PieceType::Soldier) => '兵',
            (Player::Black, PieceType::King) => '將',
            (Player::Black, PieceType::Advisor) => '士',
            (Player::Black, PieceType::Elephant) => '象',
            (Player::Black, PieceType::Cannon) => '砲',
            (Player::Black, PieceType::Soldier) => '卒',
            (_, PieceType::Horse) => '馬',
            (_, PieceType::Chariot) => '車',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
