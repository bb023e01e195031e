use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The horizontal distance rounds down to zero, so there is no step to divide
    /// the flight time by.
    #[error(
        "flight distance {distance_m:.3} m gives zero time steps; raise the velocity or the angle"
    )]
    ZeroSteps { distance_m: f64 },

    #[error("chart rendering failed: {0}")]
    Render(String),
}
