mod board;
mod bot;
mod game_state;
mod stats;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot::{best_move, evaluate_board};
pub use game_state::TicTacToeGameState;
pub use stats::GameStats;
pub use types::{
    Difficulty, GameStatus, IllegalMove, Mark, MoveResult, NoMovesAvailable, Position, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
