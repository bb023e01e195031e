use projectile_motion::compute_trajectory;

use crate::controls::FrameActions;
use crate::plot_view::build_plot_view;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.start_simulation {
        start_simulation(state);
    }
}

/// Snapshot the sliders, compute the flight and hand it to the chart renderer.
fn start_simulation(state: &mut AppRuntime) {
    let launch = state.params.snapshot();
    tracing::info!(
        velocity_mps = launch.velocity_mps(),
        angle_deg = launch.angle_deg(),
        height_m = launch.height_m(),
        "starting simulation"
    );

    let result = compute_trajectory(launch).and_then(|trajectory| build_plot_view(&trajectory));
    match result {
        Ok(plot) => {
            tracing::info!(summary = %plot.summary, "plot ready");
            state.show_plot(plot);
        }
        Err(err) => {
            tracing::warn!(error = %err, "simulation failed");
            state.set_error(&err);
        }
    }
}
