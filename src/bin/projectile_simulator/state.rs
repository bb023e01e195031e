use chrono::Local;
use macroquad::prelude::Texture2D;
use projectile_motion::{ParameterStore, SimulationError, Trajectory};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum AppScene {
    Controls,
    Plot,
}

/// A rendered chart waiting to be dismissed. The trajectory it came from is
/// not kept.
pub(crate) struct PlotView {
    pub(crate) texture: Texture2D,
    pub(crate) summary: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum StatusLine {
    Info(String),
    Error(String),
}

pub(crate) struct AppRuntime {
    pub(crate) params: ParameterStore,
    pub(crate) scene: AppScene,
    pub(crate) plot: Option<PlotView>,
    pub(crate) status: StatusLine,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            params: ParameterStore::default(),
            scene: AppScene::Controls,
            plot: None,
            status: StatusLine::Info("Ready".to_string()),
        }
    }

    pub(crate) fn show_plot(&mut self, plot: PlotView) {
        self.status = StatusLine::Info(stamped(&plot.summary));
        self.plot = Some(plot);
        self.scene = AppScene::Plot;
    }

    pub(crate) fn close_plot(&mut self) {
        self.plot = None;
        self.scene = AppScene::Controls;
    }

    pub(crate) fn set_error(&mut self, err: &SimulationError) {
        self.status = StatusLine::Error(stamped(&err.to_string()));
    }
}

pub(crate) fn run_summary(trajectory: &Trajectory) -> String {
    let launch = trajectory.parameters();
    format!(
        "v0 {:.0} m/s, {:.0} deg, h {:.0} m | flight {:.3} s | {} samples @ {:.4} s | peak {:.2} m",
        launch.velocity_mps(),
        launch.angle_deg(),
        launch.height_m(),
        trajectory.flight_time_s(),
        trajectory.len(),
        trajectory.time_step_s(),
        trajectory.peak_height_m()
    )
}

fn stamped(message: &str) -> String {
    format!("[{}] {message}", Local::now().format("%H:%M:%S"))
}
