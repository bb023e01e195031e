use crate::core::error::SimulationError;
use crate::core::params::Control;

pub const GRAVITY_MPS2: f64 = 9.8;

/// Launch settings captured when a simulation starts.
///
/// Only values inside the slider ranges can be constructed, so every
/// `LaunchParameters` in the program is one the controls could have produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    velocity_mps: f64,
    angle_deg: f64,
    height_m: f64,
}

impl LaunchParameters {
    pub fn new(velocity_mps: f64, angle_deg: f64, height_m: f64) -> Result<Self, SimulationError> {
        Ok(Self {
            velocity_mps: checked(Control::Velocity, velocity_mps)?,
            angle_deg: checked(Control::Angle, angle_deg)?,
            height_m: checked(Control::Height, height_m)?,
        })
    }

    /// Callers guarantee the values already sit inside the slider ranges.
    pub(crate) fn from_clamped(velocity_mps: f64, angle_deg: f64, height_m: f64) -> Self {
        Self {
            velocity_mps,
            angle_deg,
            height_m,
        }
    }

    pub fn velocity_mps(&self) -> f64 {
        self.velocity_mps
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        let vx = self.velocity_mps * theta.cos();
        let vy = self.velocity_mps * theta.sin();
        (vx, vy)
    }

    /// Time to return to launch height; the launch height itself is ignored.
    pub fn flight_time_s(&self) -> f64 {
        let (_, vy) = self.velocity_components();
        2.0 * vy / GRAVITY_MPS2
    }

    pub fn total_distance_m(&self) -> f64 {
        let (vx, _) = self.velocity_components();
        vx * self.flight_time_s()
    }

    /// One step per whole metre of horizontal distance.
    pub fn step_count(&self) -> usize {
        self.total_distance_m().floor().max(0.0) as usize
    }
}

fn checked(control: Control, value: f64) -> Result<f64, SimulationError> {
    let spec = control.spec();
    if !value.is_finite() {
        return Err(SimulationError::NonFinite {
            name: spec.caption,
            value,
        });
    }
    if value < spec.min || value > spec.max {
        return Err(SimulationError::OutOfRange {
            name: spec.caption,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(value)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub horizontal_velocity_mps: f64,
    pub vertical_velocity_mps: f64,
    pub horizontal_position_m: f64,
    pub vertical_position_m: f64,
}

pub fn sample_at(params: LaunchParameters, time_s: f64) -> TrajectorySample {
    let (vx, vy) = params.velocity_components();
    let x = vx * time_s;
    let y = params.height_m + (vy * time_s) - (0.5 * GRAVITY_MPS2 * time_s * time_s);
    TrajectorySample {
        time_s,
        horizontal_velocity_mps: vx,
        vertical_velocity_mps: vy - GRAVITY_MPS2 * time_s,
        horizontal_position_m: x,
        vertical_position_m: y,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    parameters: LaunchParameters,
    flight_time_s: f64,
    time_step_s: f64,
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn parameters(&self) -> LaunchParameters {
        self.parameters
    }

    pub fn flight_time_s(&self) -> f64 {
        self.flight_time_s
    }

    pub fn time_step_s(&self) -> f64 {
        self.time_step_s
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last_sample(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn peak_height_m(&self) -> f64 {
        self.samples
            .iter()
            .fold(self.parameters.height_m, |acc, s| acc.max(s.vertical_position_m))
    }
}

/// Samples the flight on a fixed grid of `floor(total distance)` steps covering
/// `[0, flight_time)`.
pub fn compute_trajectory(params: LaunchParameters) -> Result<Trajectory, SimulationError> {
    let flight_time_s = params.flight_time_s();
    let steps = params.step_count();
    if steps == 0 {
        return Err(SimulationError::ZeroSteps {
            distance_m: params.total_distance_m(),
        });
    }

    let time_step_s = flight_time_s / steps as f64;
    let samples: Vec<TrajectorySample> = (0..steps)
        .map(|i| sample_at(params, time_step_s * i as f64))
        .collect();

    tracing::debug!(
        velocity_mps = params.velocity_mps,
        angle_deg = params.angle_deg,
        height_m = params.height_m,
        flight_time_s,
        steps,
        "computed trajectory"
    );

    Ok(Trajectory {
        parameters: params,
        flight_time_s,
        time_step_s,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::{GRAVITY_MPS2, LaunchParameters, compute_trajectory, sample_at};
    use crate::core::error::SimulationError;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn params(velocity: f64, angle: f64, height: f64) -> LaunchParameters {
        LaunchParameters::new(velocity, angle, height).expect("parameters should be valid")
    }

    #[test]
    fn default_launch_matches_hand_calculation() {
        let launch = params(20.0, 45.0, 10.0);
        let (vx, vy) = launch.velocity_components();
        assert_close(vx, 14.1421, 0.001);
        assert_close(vy, 14.1421, 0.001);
        assert_close(launch.flight_time_s(), 2.8862, 0.001);
        assert_close(launch.total_distance_m(), 40.8163, 0.001);

        let trajectory = compute_trajectory(launch).expect("calculation should succeed");
        assert_eq!(trajectory.len(), 40);
        assert_close(trajectory.time_step_s(), 0.07216, 0.0001);

        let first = trajectory.samples()[0];
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.horizontal_position_m, 0.0);
        assert_eq!(first.vertical_position_m, 10.0);
        assert_close(first.horizontal_velocity_mps, 14.1421, 0.001);
        assert_close(first.vertical_velocity_mps, 14.1421, 0.001);
    }

    #[test]
    fn zero_velocity_fails_instead_of_dividing_by_zero() {
        let err = compute_trajectory(params(0.0, 45.0, 10.0)).expect_err("calculation should fail");
        assert_eq!(err, SimulationError::ZeroSteps { distance_m: 0.0 });
    }

    #[test]
    fn flat_and_vertical_launches_have_no_steps() {
        for angle in [0.0, 90.0] {
            let err =
                compute_trajectory(params(50.0, angle, 5.0)).expect_err("calculation should fail");
            assert!(matches!(err, SimulationError::ZeroSteps { .. }));
        }
    }

    #[test]
    fn short_hop_with_single_step_starts_at_launch() {
        // v=4, 45deg travels ~1.63 m, so exactly one sample at t=0.
        let trajectory = compute_trajectory(params(4.0, 45.0, 3.0)).expect("one step expected");
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.samples()[0].vertical_position_m, 3.0);
        assert_close(trajectory.time_step_s(), trajectory.flight_time_s(), 1e-12);
    }

    #[test]
    fn rejects_values_outside_slider_ranges() {
        let err = LaunchParameters::new(51.0, 45.0, 10.0).expect_err("velocity too high");
        assert!(matches!(err, SimulationError::OutOfRange { name: "Initial Velocity", .. }));

        let err = LaunchParameters::new(20.0, -1.0, 10.0).expect_err("angle negative");
        assert!(matches!(err, SimulationError::OutOfRange { name: "Launch Angle", .. }));

        let err = LaunchParameters::new(20.0, 45.0, f64::NAN).expect_err("height not finite");
        assert!(matches!(err, SimulationError::NonFinite { name: "Launch Height", .. }));
    }

    #[test]
    fn sample_at_follows_closed_form() {
        let launch = params(30.0, 60.0, 4.0);
        let (vx, vy) = launch.velocity_components();
        let t = 1.25;
        let sample = sample_at(launch, t);
        assert_close(sample.horizontal_position_m, vx * t, 1e-12);
        assert_close(
            sample.vertical_position_m,
            vy * t - 0.5 * GRAVITY_MPS2 * t * t + 4.0,
            1e-12,
        );
        assert_close(sample.vertical_velocity_mps, vy - GRAVITY_MPS2 * t, 1e-12);
    }

    #[test]
    fn invariants_hold_across_slider_grid() {
        for velocity in (1..=50).step_by(7) {
            for angle in (1..90).step_by(4) {
                for height in [0.0, 7.0, 20.0] {
                    let launch = params(f64::from(velocity), f64::from(angle), height);
                    let flight_time = launch.flight_time_s();
                    assert!(flight_time > 0.0);

                    let trajectory = match compute_trajectory(launch) {
                        Ok(t) => t,
                        Err(SimulationError::ZeroSteps { distance_m }) => {
                            assert!(distance_m < 1.0);
                            continue;
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    };

                    let (vx, vy) = launch.velocity_components();
                    assert_eq!(
                        trajectory.len(),
                        (vx * flight_time).floor() as usize,
                        "v={velocity} angle={angle}"
                    );
                    assert_eq!(trajectory.samples()[0].vertical_position_m, height);

                    let mut prev: Option<f64> = None;
                    let mut prev_time = -1.0;
                    for sample in trajectory.samples() {
                        assert!(sample.time_s >= 0.0 && sample.time_s < flight_time);
                        assert!(sample.time_s > prev_time);
                        prev_time = sample.time_s;

                        assert_eq!(sample.horizontal_velocity_mps, vx);
                        assert_close(
                            sample.vertical_velocity_mps,
                            vy - GRAVITY_MPS2 * sample.time_s,
                            1e-9,
                        );
                        if let Some(p) = prev {
                            assert!(sample.vertical_velocity_mps < p);
                        }
                        prev = Some(sample.vertical_velocity_mps);
                    }
                }
            }
        }
    }

    #[test]
    fn peak_height_tracks_sampled_apex() {
        let trajectory = compute_trajectory(params(20.0, 45.0, 10.0)).expect("should succeed");
        let (_, vy) = trajectory.parameters().velocity_components();
        let apex = 10.0 + vy * vy / (2.0 * GRAVITY_MPS2);
        assert!(trajectory.peak_height_m() <= apex);
        assert_close(trajectory.peak_height_m(), apex, 0.05);
        let last = trajectory.last_sample().expect("non-empty");
        assert!(last.vertical_velocity_mps < 0.0);
    }
}
