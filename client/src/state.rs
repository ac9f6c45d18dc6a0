use std::sync::{Arc, Mutex};

use common::engine::tictactoe::{
    Board, Difficulty, GameStats, GameStatus, Mark, Position, WinningLine,
};

#[derive(Debug, Clone)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    NewGame,
    SetDifficulty(Difficulty),
    ResetStats,
}

/// Snapshot of the running game, published by the game loop after every
/// change and read by the UI each frame.
#[derive(Debug, Clone)]
pub struct GameView {
    pub board: Board,
    pub status: GameStatus,
    pub current_mark: Mark,
    pub human_mark: Mark,
    pub bot_thinking: bool,
    pub difficulty: Difficulty,
    pub stats: GameStats,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

impl GameView {
    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.current_mark == self.human_mark
            && !self.bot_thinking
    }

    pub fn game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

pub struct SharedState {
    view: Arc<Mutex<GameView>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new(initial: GameView) -> Self {
        Self {
            view: Arc::new(Mutex::new(initial)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_view(&self, view: GameView) {
        *self.view.lock().unwrap() = view;
    }

    pub fn get_view(&self) -> GameView {
        self.view.lock().unwrap().clone()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn take_error(&self) -> Option<String> {
        self.error.lock().unwrap().take()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            error: Arc::clone(&self.error),
        }
    }
}
