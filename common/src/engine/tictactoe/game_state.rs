use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// One human-vs-bot game. Turn order and rule checks live here; the board
/// underneath stays a pure value.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    /// The human plays X and moves first; the bot plays O.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            human_mark: Mark::X,
            bot_mark: Mark::O,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if mark != self.current_mark {
            return Err(format!("It is not {}'s turn", mark));
        }

        self.board = self
            .board
            .apply_move(row, col, mark)
            .map_err(|e| e.to_string())?;
        self.last_move = Some(Position::new(row, col));
        self.status = self.board.status();

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Clears the board for a fresh game; the human moves first again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
