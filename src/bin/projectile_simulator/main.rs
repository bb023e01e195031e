use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod logging;
mod plot_view;
mod render;
mod simulation;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init_tracing();
    app::run().await;
}
