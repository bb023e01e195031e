use macroquad::prelude::*;

use crate::constants::{ERROR_COLOR, HEADER_COLOR, PANEL_HEIGHT, PANEL_TOP, WINDOW_TITLE};
use crate::state::StatusLine;

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_centered(text: &str, screen_w: f32, y: f32, font_size: u16, color: Color) {
    let size = measure_text(text, None, font_size, 1.0);
    draw_ui_text(text, ((screen_w - size.width) * 0.5).max(4.0), y, font_size, color);
}

pub(crate) fn draw_title(screen_w: f32) {
    draw_centered(WINDOW_TITLE, screen_w, 56.0, 34, HEADER_COLOR);
}

pub(crate) fn draw_status(status: &StatusLine, screen_w: f32) {
    let y = PANEL_TOP + PANEL_HEIGHT + 40.0;
    match status {
        StatusLine::Info(text) => draw_centered(text, screen_w, y, 18, DARKGRAY),
        StatusLine::Error(text) => draw_centered(text, screen_w, y, 18, ERROR_COLOR),
    }
    draw_centered(
        "Drag the sliders, then press Start Simulation (or Enter)",
        screen_w,
        y + 30.0,
        16,
        GRAY,
    );
}
