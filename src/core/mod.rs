pub mod chart;
pub mod error;
pub mod kinematics;
pub mod params;
pub mod window;
