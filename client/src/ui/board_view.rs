use eframe::egui;
use tokio::sync::mpsc;

use common::engine::tictactoe::{BOARD_SIZE, Mark, Position};

use crate::state::{ClientCommand, GameView};
use crate::theme::BoardPalette;

pub struct BoardView {
    last_hover: Option<Position>,
}

impl BoardView {
    const BOARD_PADDING: f32 = 24.0;
    const MIN_CELL_SIZE: f32 = 48.0;
    const MAX_CELL_SIZE: f32 = 120.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_STROKE_WIDTH: f32 = 4.0;
    const WIN_LINE_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = (available_width.min(available_height) - Self::BOARD_PADDING * 2.0)
            / BOARD_SIZE as f32;
        side.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        view: &GameView,
        palette: &BoardPalette,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        let cell_size = Self::cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, palette.background);

        for i in 0..=BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, palette.grid_line),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::LINE_WIDTH, palette.grid_line),
            );
        }

        if let Some(last) = view.last_move {
            let last_rect = Self::cell_rect(rect, cell_size, last.row, last.col);
            painter.rect_filled(last_rect, 0.0, palette.last_move_fill);
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell_rect = Self::cell_rect(rect, cell_size, row, col);
                match view.board.mark_at(row, col) {
                    Some(Mark::X) => Self::draw_x(painter, cell_rect, palette),
                    Some(Mark::O) => Self::draw_o(painter, cell_rect, palette),
                    None => {}
                }
            }
        }

        if let Some(line) = &view.winning_line {
            let start = Self::cell_rect(rect, cell_size, line.start.row, line.start.col).center();
            let end = Self::cell_rect(rect, cell_size, line.end.row, line.end.col).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(Self::WIN_LINE_WIDTH, palette.win_line),
            );
        }

        self.last_hover = None;
        if view.is_human_turn() {
            if let Some(hover_pos) = response.hover_pos() {
                let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
                let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

                if row < BOARD_SIZE && col < BOARD_SIZE && view.board.is_legal_move(row, col) {
                    let hover_rect = Self::cell_rect(rect, cell_size, row, col);
                    painter.rect_filled(hover_rect, 0.0, palette.hover_fill);
                    self.last_hover = Some(Position::new(row, col));
                }
            }

            if response.clicked()
                && let Some(position) = self.last_hover
            {
                let _ = command_tx.send(ClientCommand::PlaceMark {
                    row: position.row,
                    col: position.col,
                });
            }
        }
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, row: usize, col: usize) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect, palette: &BoardPalette) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_STROKE_WIDTH, palette.x_stroke);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect, palette: &BoardPalette) {
        let padding = rect.width() * 0.2;
        let radius = rect.width() / 2.0 - padding;
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(Self::MARK_STROKE_WIDTH, palette.o_stroke),
        );
    }
}
