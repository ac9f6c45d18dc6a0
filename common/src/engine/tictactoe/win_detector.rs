use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Position, WinningLine};

// Rows, then columns, then the two diagonals.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Like `check_win`, but also reports the endpoints of the completed line
/// so the UI can highlight it.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let (row, col) = line[0];
        let Some(mark) = board.mark_at(row, col) else {
            continue;
        };
        if line[1..]
            .iter()
            .all(|&(r, c)| board.mark_at(r, c) == Some(mark))
        {
            let (end_row, end_col) = line[BOARD_SIZE - 1];
            return Some(WinningLine {
                mark,
                start: Position::new(row, col),
                end: Position::new(end_row, end_col),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_win_in_every_row() {
        for row in 0..BOARD_SIZE {
            let mut board = Board::empty();
            for col in 0..BOARD_SIZE {
                board = board.apply_move(row, col, Mark::X).unwrap();
            }
            assert_eq!(check_win(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_detects_win_in_every_column() {
        for col in 0..BOARD_SIZE {
            let mut board = Board::empty();
            for row in 0..BOARD_SIZE {
                board = board.apply_move(row, col, Mark::O).unwrap();
            }
            assert_eq!(check_win(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_detects_main_diagonal_win() {
        let mut board = Board::empty();
        for i in 0..BOARD_SIZE {
            board = board.apply_move(i, i, Mark::X).unwrap();
        }
        assert_eq!(check_win(&board), Some(Mark::X));
    }

    #[test]
    fn test_detects_anti_diagonal_win() {
        let mut board = Board::empty();
        for i in 0..BOARD_SIZE {
            board = board.apply_move(i, BOARD_SIZE - 1 - i, Mark::O).unwrap();
        }
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_on_empty_or_mixed_board() {
        assert_eq!(check_win(&Board::empty()), None);

        let board = Board::empty()
            .apply_move(0, 0, Mark::X)
            .unwrap()
            .apply_move(0, 1, Mark::O)
            .unwrap()
            .apply_move(0, 2, Mark::X)
            .unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_winning_line_reports_endpoints() {
        let mut board = Board::empty();
        for col in 0..BOARD_SIZE {
            board = board.apply_move(1, col, Mark::O).unwrap();
        }
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(1, 0));
        assert_eq!(line.end, Position::new(1, 2));
    }

    #[test]
    fn test_anti_diagonal_line_endpoints() {
        let mut board = Board::empty();
        for i in 0..BOARD_SIZE {
            board = board.apply_move(i, BOARD_SIZE - 1 - i, Mark::X).unwrap();
        }
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }
}
