use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        }
    }

    pub fn board_palette(self) -> BoardPalette {
        match self {
            Theme::Light => BoardPalette {
                background: Color32::from_rgb(240, 240, 240),
                grid_line: Color32::from_rgb(30, 30, 30),
                x_stroke: Color32::from_rgb(220, 50, 50),
                o_stroke: Color32::from_rgb(50, 50, 220),
                hover_fill: Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                last_move_fill: Color32::from_rgba_unmultiplied(255, 215, 90, 40),
                win_line: Color32::from_rgb(50, 200, 80),
            },
            Theme::Dark => BoardPalette {
                background: Color32::from_rgb(32, 34, 37),
                grid_line: Color32::from_rgb(160, 165, 175),
                x_stroke: Color32::from_rgb(240, 90, 90),
                o_stroke: Color32::from_rgb(110, 110, 255),
                hover_fill: Color32::from_rgba_unmultiplied(100, 150, 255, 60),
                last_move_fill: Color32::from_rgba_unmultiplied(255, 215, 90, 30),
                win_line: Color32::from_rgb(80, 200, 120),
            },
        }
    }
}

/// Board drawing colors, one set per theme.
#[derive(Debug, Clone, Copy)]
pub struct BoardPalette {
    pub background: Color32,
    pub grid_line: Color32,
    pub x_stroke: Color32,
    pub o_stroke: Color32,
    pub hover_fill: Color32,
    pub last_move_fill: Color32,
    pub win_line: Color32,
}
