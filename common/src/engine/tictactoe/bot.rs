use crate::engine::SessionRng;

use super::board::Board;
use super::types::{Difficulty, Mark, MoveResult, NoMovesAvailable};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Static evaluation from the bot's perspective: positive when the bot has
/// won, negative when the opponent has, zero otherwise (draws included).
pub fn evaluate_board(board: &Board, bot_mark: Mark) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_mark => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Chooses a move for `bot_mark`. Depending on the difficulty the move is
/// either a uniformly random legal one or the minimax-optimal one; score
/// ties go to the first candidate in row-major order.
pub fn best_move(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<MoveResult, NoMovesAvailable> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(NoMovesAvailable);
    }

    let random_probability = difficulty.random_move_probability();
    if random_probability > 0.0 && rng.random_f64() < random_probability {
        let position = moves[rng.random_index(moves.len())];
        return Ok(MoveResult { position, score: 0 });
    }

    let mut best_position = moves[0];
    let mut best_score = i32::MIN;

    for position in moves {
        let next = board.with_mark(position, bot_mark);
        let score = minimax(&next, bot_mark, 0, false, i32::MIN, i32::MAX);
        if score > best_score {
            best_score = score;
            best_position = position;
        }
    }

    Ok(MoveResult {
        position: best_position,
        score: best_score,
    })
}

fn minimax(
    board: &Board,
    bot_mark: Mark,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let score = evaluate_board(board, bot_mark);
    if score != 0 || board.is_full() {
        // Fast wins beat slow wins, slow losses beat fast losses. Draws take
        // the negative branch, so a later draw scores higher than an earlier
        // one.
        return score - depth * if score > 0 { 1 } else { -1 };
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.available_moves() {
            let next = board.with_mark(position, bot_mark);
            let eval = minimax(&next, bot_mark, depth + 1, false, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent = bot_mark.opponent();
        let mut min_eval = i32::MAX;
        for position in board.available_moves() {
            let next = board.with_mark(position, opponent);
            let eval = minimax(&next, bot_mark, depth + 1, true, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::{GameStatus, Position};

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    fn rng() -> SessionRng {
        SessionRng::new(42)
    }

    #[test]
    fn test_evaluate_board_is_signed_by_perspective() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate_board(&board, Mark::X), 10);
        assert_eq!(evaluate_board(&board, Mark::O), -10);
        assert_eq!(evaluate_board(&Board::empty(), Mark::O), 0);
    }

    #[test]
    fn test_takes_immediate_win_over_blocking() {
        // O completes its own row instead of blocking X's.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let result = best_move(&board, Mark::O, Difficulty::Unbeatable, &mut rng()).unwrap();
        assert_eq!(result.position, Position::new(1, 2));
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_blocks_open_diagonal() {
        let board = Board::from_rows([[X, E, E], [E, X, E], [E, E, E]]);
        let result = best_move(&board, Mark::O, Difficulty::Unbeatable, &mut rng()).unwrap();
        assert_eq!(result.position, Position::new(2, 2));
    }

    #[test]
    fn test_first_move_tie_breaks_to_top_left() {
        // Perfect play from any opening leads to a full-board draw at depth
        // 8, so all nine candidates score 8 and the first one wins the tie.
        let result = best_move(&Board::empty(), Mark::O, Difficulty::Unbeatable, &mut rng()).unwrap();
        assert_eq!(result.position, Position::new(0, 0));
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(
            best_move(&board, Mark::O, Difficulty::Unbeatable, &mut rng()),
            Err(NoMovesAvailable)
        );
    }

    #[test]
    fn test_self_play_unbeatable_always_draws() {
        for first in [Mark::X, Mark::O] {
            let mut board = Board::empty();
            let mut current = first;
            let mut rng = SessionRng::new(7);
            while board.status() == GameStatus::InProgress {
                let chosen = best_move(&board, current, Difficulty::Unbeatable, &mut rng).unwrap();
                board = board
                    .apply_move(chosen.position.row, chosen.position.col, current)
                    .unwrap();
                current = current.opponent();
            }
            assert_eq!(board.status(), GameStatus::Draw, "first mover {first}");
        }
    }

    #[test]
    fn test_unbeatable_never_loses_to_any_opponent_line() {
        // X tries every legal move at every turn; O always answers with the
        // search. No branch may end in an X win.
        fn explore(board: Board, rng: &mut SessionRng) {
            for position in board.available_moves() {
                let after_x = board.with_mark(position, Mark::X);
                match after_x.status() {
                    GameStatus::Won(_) => panic!("opponent forced a win via {position:?}"),
                    GameStatus::Draw => continue,
                    GameStatus::InProgress => {}
                }
                let reply = best_move(&after_x, Mark::O, Difficulty::Unbeatable, rng).unwrap();
                let after_o = after_x.with_mark(reply.position, Mark::O);
                if after_o.status() == GameStatus::InProgress {
                    explore(after_o, rng);
                }
            }
        }

        let mut rng = rng();

        // Opponent opens.
        explore(Board::empty(), &mut rng);

        // Bot opens.
        let opening = best_move(&Board::empty(), Mark::O, Difficulty::Unbeatable, &mut rng).unwrap();
        explore(Board::empty().with_mark(opening.position, Mark::O), &mut rng);
    }

    #[test]
    fn test_easy_randomizes_about_seventy_percent() {
        // The search always finds the winning move here with a positive
        // score, so a zero score marks the random branch.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut rng = SessionRng::new(1234);
        let mut random_picks = 0;
        for _ in 0..1000 {
            let result = best_move(&board, Mark::O, Difficulty::Easy, &mut rng).unwrap();
            if result.score == 0 {
                random_picks += 1;
            }
        }
        assert!(
            (650..=750).contains(&random_picks),
            "random branch hit {random_picks} times out of 1000"
        );
    }

    #[test]
    fn test_medium_randomizes_about_thirty_percent() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut rng = SessionRng::new(99);
        let mut random_picks = 0;
        for _ in 0..1000 {
            let result = best_move(&board, Mark::O, Difficulty::Medium, &mut rng).unwrap();
            if result.score == 0 {
                random_picks += 1;
            }
        }
        assert!(
            (250..=350).contains(&random_picks),
            "random branch hit {random_picks} times out of 1000"
        );
    }

    #[test]
    fn test_unbeatable_never_takes_the_random_branch() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut rng = SessionRng::new(0);
        for _ in 0..50 {
            let result = best_move(&board, Mark::O, Difficulty::Unbeatable, &mut rng).unwrap();
            assert_eq!(result.position, Position::new(1, 2));
            assert_eq!(result.score, 10);
        }
    }
}
