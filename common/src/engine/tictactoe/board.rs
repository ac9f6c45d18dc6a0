use super::types::{GameStatus, IllegalMove, Mark, Position};
use super::win_detector::check_win;

pub const BOARD_SIZE: usize = 3;

/// The 3x3 board, as a plain value. Applying a move yields a new board and
/// leaves the original untouched, so sibling search branches can share one
/// parent position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The cell's mark, `None` when empty. Row and column must be in range.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.cells[row][col].is_none()
    }

    pub fn apply_move(&self, row: usize, col: usize, mark: Mark) -> Result<Board, IllegalMove> {
        if !self.is_legal_move(row, col) {
            return Err(IllegalMove { row, col });
        }
        Ok(self.with_mark(Position::new(row, col), mark))
    }

    /// Unvalidated placement, for callers that already hold a position from
    /// `available_moves`.
    pub(super) fn with_mark(&self, position: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[position.row][position.col] = Some(mark);
        next
    }

    /// Empty positions in row-major order. The order is load-bearing: the
    /// search breaks score ties in favor of the first candidate.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }

    /// A full board containing a completed line is `Won`, never `Draw`.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
