pub mod core;

pub use crate::core::chart::{ChartPanel, ChartSeries, position_panel, render_rgba, velocity_panel};
pub use crate::core::error::SimulationError;
pub use crate::core::kinematics::{
    GRAVITY_MPS2, LaunchParameters, Trajectory, TrajectorySample, compute_trajectory, sample_at,
};
pub use crate::core::params::{Control, ParameterStore, SliderSpec};
