use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's mark. `X` moves first; the session layer gives `X` to the
/// human and `O` to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Controls how often the bot plays a uniformly random legal move instead
/// of searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Unbeatable,
}

impl Difficulty {
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 0.3,
            Difficulty::Unbeatable => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Unbeatable => "Unbeatable",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Unbeatable
    }
}

/// A move chosen by the bot, with the search evaluation attached. Random
/// moves carry a score of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub position: Position,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

/// Attempted placement on an occupied or out-of-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move at ({}, {})", self.row, self.col)
    }
}

impl std::error::Error for IllegalMove {}

/// The bot was asked for a move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMovesAvailable;

impl fmt::Display for NoMovesAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no moves available")
    }
}

impl std::error::Error for NoMovesAvailable {}
