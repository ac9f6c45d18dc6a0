use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use common::engine::tictactoe::{Board, Difficulty, GameStatus};

use crate::config::ClientConfig;
use crate::state::{ClientCommand, GameView, SharedState};
use crate::theme::Theme;

use super::board_view::BoardView;

const DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Unbeatable,
];

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    board_view: BoardView,
    theme: Theme,
    config: ClientConfig,
    config_path: PathBuf,
    last_error: Option<String>,
}

impl GameApp {
    pub fn new(
        ctx: &egui::Context,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config: ClientConfig,
        config_path: PathBuf,
    ) -> Self {
        ctx.set_visuals(config.theme.visuals());
        Self {
            shared_state,
            command_tx,
            board_view: BoardView::new(),
            theme: config.theme,
            config,
            config_path,
            last_error: None,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        self.persist_config();
    }

    fn persist_config(&mut self) {
        self.config.theme = self.theme;
        if let Err(e) = self.config.save(&self.config_path) {
            common::log!("Failed to save config: {}", e);
        }
    }

    fn status_message(view: &GameView) -> (String, Option<egui::Color32>) {
        if view.bot_thinking {
            return ("AI is thinking...".to_string(), Some(egui::Color32::ORANGE));
        }
        match view.status {
            GameStatus::Won(mark) if mark == view.human_mark => (
                "You won! Congratulations!".to_string(),
                Some(egui::Color32::GREEN),
            ),
            GameStatus::Won(_) => (
                "AI wins! Better luck next time!".to_string(),
                Some(egui::Color32::RED),
            ),
            GameStatus::Draw => (
                "It's a draw! Well played!".to_string(),
                Some(egui::Color32::LIGHT_BLUE),
            ),
            GameStatus::InProgress => (
                "Your turn! Click a cell to make your move.".to_string(),
                None,
            ),
        }
    }

    fn render_difficulty_selector(&mut self, ui: &mut egui::Ui, view: &GameView) {
        ui.heading("AI Difficulty");

        // Selectable only between games: on a fresh board or a finished one.
        let enabled = view.game_over() || view.board == Board::empty();

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                for difficulty in DIFFICULTIES {
                    let selected = view.difficulty == difficulty;
                    if ui.selectable_label(selected, difficulty.label()).clicked() && !selected {
                        let _ = self
                            .command_tx
                            .send(ClientCommand::SetDifficulty(difficulty));
                    }
                }
            });
        });
    }

    fn render_stats(&self, ui: &mut egui::Ui, view: &GameView) {
        ui.heading("Game Statistics");
        ui.label(format!("Your wins: {}", view.stats.human_wins));
        ui.label(format!("AI wins: {}", view.stats.bot_wins));
        ui.label(format!("Draws: {}", view.stats.draws));
        ui.label(format!("Win rate: {}%", view.stats.win_rate_percent()));
        ui.separator();
        ui.label(format!("Total games: {}", view.stats.games_played));

        if ui.button("Reset Stats").clicked() {
            let _ = self.command_tx.send(ClientCommand::ResetStats);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The game loop publishes asynchronously, so keep the view fresh.
        ctx.request_repaint_after(Duration::from_millis(100));

        let view = self.shared_state.get_view();

        if let Some(error) = self.shared_state.take_error() {
            common::log!("Client error: {}", error);
            self.last_error = Some(error);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tic-Tac-Toe AI");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.toggle_label()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::SidePanel::right("info_panel")
            .min_width(180.0)
            .show(ctx, |ui| {
                self.render_difficulty_selector(ui, &view);
                ui.separator();
                self.render_stats(ui, &view);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.last_error {
                ui.colored_label(egui::Color32::RED, error);
            }

            let (message, color) = Self::status_message(&view);
            match color {
                Some(color) => ui.colored_label(color, message),
                None => ui.label(message),
            };
            ui.add_space(8.0);

            self.board_view
                .render(ui, &view, &self.theme.board_palette(), &self.command_tx);

            ui.add_space(8.0);
            if ui.button("New Game").clicked() {
                self.last_error = None;
                let _ = self.command_tx.send(ClientCommand::NewGame);
            }
        });

        if view.difficulty != self.config.difficulty {
            self.config.difficulty = view.difficulty;
            self.persist_config();
        }
    }
}
