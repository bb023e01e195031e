use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::error::SimulationError;
use crate::core::kinematics::{Trajectory, TrajectorySample};
use crate::core::window::{min_max, padded_range, time_range};

const FIRST_SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);
const SECOND_SERIES_COLOR: RGBColor = RGBColor(255, 127, 14);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const AXIS_FONT: (&str, u32) = ("sans-serif", 15);

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// One subplot: a title, axis descriptions and the two curves drawn against time.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: [ChartSeries; 2],
}

impl ChartPanel {
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = || self.series.iter().flat_map(|s| s.points.iter().copied());
        let last_time = points().map(|(t, _)| t).fold(0.0f64, f64::max);
        let y_range = match min_max(points().map(|(_, y)| y)) {
            Some((lo, hi)) => padded_range(lo, hi),
            None => padded_range(0.0, 0.0),
        };
        (time_range(last_time), y_range)
    }
}

fn series(
    trajectory: &Trajectory,
    name: &'static str,
    value: impl Fn(&TrajectorySample) -> f64,
) -> ChartSeries {
    ChartSeries {
        name,
        points: trajectory
            .samples()
            .iter()
            .map(|s| (s.time_s, value(s)))
            .collect(),
    }
}

pub fn velocity_panel(trajectory: &Trajectory) -> ChartPanel {
    ChartPanel {
        title: "Projectile Motion - Velocities",
        x_label: "Time (s)",
        y_label: "Velocity (m/s)",
        series: [
            series(trajectory, "Horizontal Velocity", |s| s.horizontal_velocity_mps),
            series(trajectory, "Vertical Velocity", |s| s.vertical_velocity_mps),
        ],
    }
}

pub fn position_panel(trajectory: &Trajectory) -> ChartPanel {
    ChartPanel {
        title: "Projectile Motion - Positions",
        x_label: "Time (s)",
        y_label: "Position (m)",
        series: [
            series(trajectory, "Horizontal Position", |s| s.horizontal_position_m),
            series(trajectory, "Vertical Position", |s| s.vertical_position_m),
        ],
    }
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> SimulationError
where
    E: std::error::Error + Send + Sync,
{
    SimulationError::Render(err.to_string())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ChartPanel,
) -> Result<(), SimulationError> {
    let (x_range, y_range) = panel.bounds();
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, CAPTION_FONT)
        .margin(14)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label)
        .axis_desc_style(AXIS_FONT)
        .draw()
        .map_err(render_error)?;

    for (line, color) in panel
        .series
        .iter()
        .zip([FIRST_SERIES_COLOR, SECOND_SERIES_COLOR])
    {
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(line.name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    Ok(())
}

/// Draws both panels stacked (velocities on top) into a `width` x `height`
/// bitmap and returns it as RGBA bytes.
pub fn render_rgba(
    trajectory: &Trajectory,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, SimulationError> {
    let mut rgb = vec![0u8; (width as usize) * (height as usize) * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;
        let (upper, lower) = root.split_vertically((height / 2) as i32);
        draw_panel(&upper, &velocity_panel(trajectory))?;
        draw_panel(&lower, &position_panel(trajectory))?;
        root.present().map_err(render_error)?;
    }
    tracing::debug!(width, height, samples = trajectory.len(), "rendered charts");
    Ok(rgb_to_rgba(&rgb))
}

fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(px);
        rgba.push(u8::MAX);
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::{position_panel, rgb_to_rgba, velocity_panel};
    use crate::core::kinematics::{LaunchParameters, compute_trajectory};

    fn default_trajectory() -> crate::core::kinematics::Trajectory {
        let launch = LaunchParameters::new(20.0, 45.0, 10.0).expect("valid launch");
        compute_trajectory(launch).expect("calculation should succeed")
    }

    #[test]
    fn panels_carry_titles_and_legend_names() {
        let trajectory = default_trajectory();
        let velocities = velocity_panel(&trajectory);
        assert_eq!(velocities.title, "Projectile Motion - Velocities");
        assert_eq!(velocities.y_label, "Velocity (m/s)");
        assert_eq!(velocities.series[0].name, "Horizontal Velocity");
        assert_eq!(velocities.series[1].name, "Vertical Velocity");

        let positions = position_panel(&trajectory);
        assert_eq!(positions.title, "Projectile Motion - Positions");
        assert_eq!(positions.x_label, "Time (s)");
        assert_eq!(positions.series[1].name, "Vertical Position");
    }

    #[test]
    fn series_follow_sample_order() {
        let trajectory = default_trajectory();
        let positions = position_panel(&trajectory);
        for line in &positions.series {
            assert_eq!(line.points.len(), trajectory.len());
            assert!(line.points.windows(2).all(|w| w[0].0 < w[1].0));
        }
        assert_eq!(positions.series[1].points[0], (0.0, 10.0));
    }

    #[test]
    fn bounds_cover_every_point() {
        let trajectory = default_trajectory();
        for panel in [velocity_panel(&trajectory), position_panel(&trajectory)] {
            let (x, y) = panel.bounds();
            for (t, v) in panel.series.iter().flat_map(|s| s.points.iter().copied()) {
                assert!(x.start <= t && t <= x.end, "{}: t={t}", panel.title);
                assert!(y.start <= v && v <= y.end, "{}: v={v}", panel.title);
            }
        }
    }

    #[test]
    fn rgba_expansion_adds_opaque_alpha() {
        let rgba = rgb_to_rgba(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
