use macroquad::prelude::*;
use projectile_motion::{SimulationError, Trajectory, render_rgba};

use crate::constants::{
    CHART_HEIGHT, CHART_WIDTH, CLOSE_BUTTON_COLOR, CLOSE_BUTTON_H, CLOSE_BUTTON_HOVER,
    CLOSE_BUTTON_TEXT, CLOSE_BUTTON_W, HEADER_COLOR, PLOT_HEADER_H, PLOT_MARGIN,
};
use crate::render::draw_ui_text;
use crate::state::{PlotView, run_summary};

pub(crate) fn build_plot_view(trajectory: &Trajectory) -> Result<PlotView, SimulationError> {
    let rgba = render_rgba(trajectory, CHART_WIDTH, CHART_HEIGHT)?;
    let texture = Texture2D::from_rgba8(CHART_WIDTH as u16, CHART_HEIGHT as u16, &rgba);
    texture.set_filter(FilterMode::Linear);
    Ok(PlotView {
        texture,
        summary: run_summary(trajectory),
    })
}

/// Chart destination rect: as large as the window allows below the header,
/// keeping the bitmap's aspect ratio.
fn fit_chart(screen_w: f32, screen_h: f32) -> Rect {
    let avail_w = (screen_w - 2.0 * PLOT_MARGIN).max(1.0);
    let avail_h = (screen_h - PLOT_HEADER_H - PLOT_MARGIN).max(1.0);
    let scale = (avail_w / CHART_WIDTH as f32).min(avail_h / CHART_HEIGHT as f32);
    let w = CHART_WIDTH as f32 * scale;
    let h = CHART_HEIGHT as f32 * scale;
    Rect::new((screen_w - w) * 0.5, PLOT_HEADER_H, w, h)
}

/// Returns true once the user dismisses the plot.
pub(crate) fn draw_plot_view(plot: &PlotView, screen_w: f32, screen_h: f32) -> bool {
    draw_ui_text(&plot.summary, PLOT_MARGIN, 38.0, 18, HEADER_COLOR);

    let dest = fit_chart(screen_w, screen_h);
    draw_texture_ex(
        &plot.texture,
        dest.x,
        dest.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(dest.w, dest.h)),
            ..Default::default()
        },
    );
    draw_rectangle_lines(dest.x, dest.y, dest.w, dest.h, 1.0, LIGHTGRAY);

    draw_close_button(screen_w) || is_key_pressed(KeyCode::Escape)
}

fn draw_close_button(screen_w: f32) -> bool {
    let button_rect = Rect::new(
        screen_w - CLOSE_BUTTON_W - PLOT_MARGIN,
        (PLOT_HEADER_H - CLOSE_BUTTON_H) * 0.5,
        CLOSE_BUTTON_W,
        CLOSE_BUTTON_H,
    );

    let mouse = mouse_position();
    let hovered = button_rect.contains(vec2(mouse.0, mouse.1));
    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);

    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        if hovered {
            CLOSE_BUTTON_HOVER
        } else {
            CLOSE_BUTTON_COLOR
        },
    );
    draw_rectangle_lines(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        2.0,
        WHITE,
    );

    let size = measure_text(CLOSE_BUTTON_TEXT, None, 24, 1.0);
    draw_ui_text(
        CLOSE_BUTTON_TEXT,
        button_rect.x + (button_rect.w - size.width) * 0.5,
        button_rect.y + (button_rect.h + size.height) * 0.5 - 3.0,
        24,
        WHITE,
    );

    clicked
}
