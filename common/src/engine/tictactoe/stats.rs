use super::types::{GameStatus, Mark};

/// Running win/loss/draw tally across the games of one client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
    pub games_played: u32,
}

impl GameStats {
    /// Records a finished game. In-progress states are ignored.
    pub fn record(&mut self, status: GameStatus, human_mark: Mark) {
        match status {
            GameStatus::Won(mark) if mark == human_mark => self.human_wins += 1,
            GameStatus::Won(_) => self.bot_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games_played += 1;
    }

    pub fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (self.human_wins as f64 / self.games_played as f64 * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
