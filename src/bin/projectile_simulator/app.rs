use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, WINDOW_TITLE,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::plot_view::draw_plot_view;
use crate::render::{draw_status, draw_title};
use crate::simulation::apply_actions;
use crate::state::{AppRuntime, AppScene};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = AppRuntime::new();
    tracing::info!("window open");

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        clear_background(BACKGROUND);

        match state.scene {
            AppScene::Controls => {
                draw_title(screen_w);
                let actions = hotkey_actions().merge(draw_control_panel(&mut state, screen_w));
                draw_status(&state.status, screen_w);
                apply_actions(&mut state, actions);
            }
            // The plot is modal: sliders are not drawn until it is closed.
            AppScene::Plot => {
                let closed = match state.plot.as_ref() {
                    Some(plot) => draw_plot_view(plot, screen_w, screen_h),
                    None => true,
                };
                if closed {
                    tracing::debug!("plot closed");
                    state.close_plot();
                }
            }
        }

        next_frame().await;
    }
}
