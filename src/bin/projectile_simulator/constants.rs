use macroquad::prelude::Color;

pub const WINDOW_TITLE: &str = "Projectile Motion Simulator";
pub const INITIAL_WINDOW_WIDTH: i32 = 1000;
pub const INITIAL_WINDOW_HEIGHT: i32 = 780;
pub const MSAA_SAMPLES: i32 = 4;

pub const PANEL_WIDTH: f32 = 400.0;
pub const PANEL_HEIGHT: f32 = 230.0;
pub const PANEL_TOP: f32 = 90.0;
pub const START_BUTTON_TEXT: &str = "Start Simulation";

// Chart bitmap size in pixels; drawn scaled to fit the window.
pub const CHART_WIDTH: u32 = 960;
pub const CHART_HEIGHT: u32 = 680;
pub const PLOT_MARGIN: f32 = 20.0;
pub const PLOT_HEADER_H: f32 = 64.0;

pub const CLOSE_BUTTON_W: f32 = 150.0;
pub const CLOSE_BUTTON_H: f32 = 40.0;
pub const CLOSE_BUTTON_TEXT: &str = "Close Plot";

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const ERROR_COLOR: Color = Color::new(0.75, 0.16, 0.16, 1.0);
pub const CLOSE_BUTTON_COLOR: Color = Color::new(0.11, 0.31, 0.85, 1.0);
pub const CLOSE_BUTTON_HOVER: Color = Color::new(0.15, 0.39, 0.92, 1.0);
