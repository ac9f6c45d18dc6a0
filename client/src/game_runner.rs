use std::time::Duration;

use tokio::sync::mpsc;

use common::engine::SessionRng;
use common::engine::tictactoe::{
    Difficulty, GameStats, GameStatus, TicTacToeGameState, best_move,
};
use common::log;

use crate::state::{ClientCommand, GameView, SharedState};

pub fn initial_view(difficulty: Difficulty) -> GameView {
    view_of(&TicTacToeGameState::new(), GameStats::default(), difficulty, false)
}

fn view_of(
    game: &TicTacToeGameState,
    stats: GameStats,
    difficulty: Difficulty,
    bot_thinking: bool,
) -> GameView {
    GameView {
        board: game.board,
        status: game.status,
        current_mark: game.current_mark,
        human_mark: game.human_mark,
        bot_thinking,
        difficulty,
        stats,
        last_move: game.last_move,
        winning_line: match game.status {
            GameStatus::Won(_) => game.winning_line(),
            _ => None,
        },
    }
}

fn publish(
    shared_state: &SharedState,
    game: &TicTacToeGameState,
    stats: GameStats,
    difficulty: Difficulty,
    bot_thinking: bool,
) {
    shared_state.set_view(view_of(game, stats, difficulty, bot_thinking));
}

fn finish_turn(game: &TicTacToeGameState, stats: &mut GameStats) {
    if game.status == GameStatus::InProgress {
        return;
    }
    stats.record(game.status, game.human_mark);
    match game.winner() {
        Some(mark) => log!("Game over: {} wins", mark),
        None => log!("Game over: draw"),
    }
}

/// Owns the game, the stats and the RNG. Everything the UI does arrives as
/// a command on the channel; every change goes back out as a fresh view.
pub async fn run_game_loop(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    initial_difficulty: Difficulty,
    bot_delay: Duration,
    seed: Option<u64>,
) {
    let mut rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Game loop started (rng seed {})", rng.seed());

    let mut game = TicTacToeGameState::new();
    let mut stats = GameStats::default();
    let mut difficulty = initial_difficulty;

    publish(&shared_state, &game, stats, difficulty, false);

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::PlaceMark { row, col } => {
                if game.is_bot_turn() {
                    continue;
                }
                if let Err(reason) = game.place_mark(game.human_mark, row, col) {
                    // Stale clicks are dropped, not surfaced.
                    log!("Ignored move at ({}, {}): {}", row, col, reason);
                    continue;
                }
                finish_turn(&game, &mut stats);
                publish(&shared_state, &game, stats, difficulty, false);

                if game.is_bot_turn() {
                    rng = play_bot_turn(
                        &shared_state,
                        &mut game,
                        &mut stats,
                        difficulty,
                        bot_delay,
                        rng,
                    )
                    .await;
                }
            }
            ClientCommand::NewGame => {
                game.reset();
                publish(&shared_state, &game, stats, difficulty, false);
            }
            ClientCommand::SetDifficulty(new_difficulty) => {
                difficulty = new_difficulty;
                log!("Difficulty set to {}", difficulty.label());
                publish(&shared_state, &game, stats, difficulty, false);
            }
            ClientCommand::ResetStats => {
                stats.reset();
                publish(&shared_state, &game, stats, difficulty, false);
            }
        }
    }
}

async fn play_bot_turn(
    shared_state: &SharedState,
    game: &mut TicTacToeGameState,
    stats: &mut GameStats,
    difficulty: Difficulty,
    bot_delay: Duration,
    mut rng: SessionRng,
) -> SessionRng {
    publish(shared_state, game, *stats, difficulty, true);

    // Cosmetic pause so the reply does not feel instantaneous. The move is
    // computed after the pause and is unaffected by it.
    tokio::time::sleep(bot_delay).await;

    let board = game.board;
    let bot_mark = game.bot_mark;
    let search = tokio::task::spawn_blocking(move || {
        let result = best_move(&board, bot_mark, difficulty, &mut rng);
        (result, rng)
    })
    .await;

    let result = match search {
        Ok((result, returned_rng)) => {
            rng = returned_rng;
            result
        }
        Err(e) => {
            shared_state.set_error(format!("Bot task failed: {}", e));
            publish(shared_state, game, *stats, difficulty, false);
            return SessionRng::from_random();
        }
    };

    match result {
        Ok(chosen) => {
            if let Err(reason) =
                game.place_mark(game.bot_mark, chosen.position.row, chosen.position.col)
            {
                shared_state.set_error(format!("Bot move rejected: {}", reason));
            } else {
                log!(
                    "Bot played ({}, {}) with score {}",
                    chosen.position.row,
                    chosen.position.col,
                    chosen.score
                );
                finish_turn(game, stats);
            }
        }
        Err(e) => {
            // A full board here means the turn logic upstream is broken.
            shared_state.set_error(format!("Bot search failed: {}", e));
        }
    }

    publish(shared_state, game, *stats, difficulty, false);
    rng
}
