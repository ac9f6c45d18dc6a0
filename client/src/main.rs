mod config;
mod game_runner;
mod state;
mod theme;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::log;

use config::{ClientConfig, default_config_path};
use game_runner::{initial_view, run_game_loop};
use state::SharedState;
use ui::GameApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed, for reproducible bot behavior
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::logger::init_logger(Some("client"));

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = match ClientConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            ClientConfig::default()
        }
    };

    let shared_state = SharedState::new(initial_view(config.difficulty));
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let loop_state = shared_state.clone();
    let difficulty = config.difficulty;
    let bot_delay = Duration::from_millis(config.bot_delay_ms);
    let seed = args.seed;

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(run_game_loop(
            loop_state,
            command_rx,
            difficulty,
            bot_delay,
            seed,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("Tic-Tac-Toe AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe AI",
        options,
        Box::new(|cc| {
            Ok(Box::new(GameApp::new(
                &cc.egui_ctx,
                shared_state,
                command_tx,
                config,
                config_path,
            )))
        }),
    )?;

    Ok(())
}
