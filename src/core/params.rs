use crate::core::kinematics::LaunchParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Velocity,
    Angle,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub caption: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const VELOCITY_SLIDER: SliderSpec = SliderSpec {
    caption: "Initial Velocity",
    min: 0.0,
    max: 50.0,
    default: 20.0,
};

pub const ANGLE_SLIDER: SliderSpec = SliderSpec {
    caption: "Launch Angle",
    min: 0.0,
    max: 90.0,
    default: 45.0,
};

pub const HEIGHT_SLIDER: SliderSpec = SliderSpec {
    caption: "Launch Height",
    min: 0.0,
    max: 20.0,
    default: 10.0,
};

impl Control {
    pub const ALL: [Control; 3] = [Control::Velocity, Control::Angle, Control::Height];

    pub fn spec(self) -> SliderSpec {
        match self {
            Control::Velocity => VELOCITY_SLIDER,
            Control::Angle => ANGLE_SLIDER,
            Control::Height => HEIGHT_SLIDER,
        }
    }
}

/// Current slider values. Every update produces a new store; nothing is shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterStore {
    velocity_mps: f64,
    angle_deg: f64,
    height_m: f64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            velocity_mps: VELOCITY_SLIDER.default,
            angle_deg: ANGLE_SLIDER.default,
            height_m: HEIGHT_SLIDER.default,
        }
    }
}

impl ParameterStore {
    pub fn value(&self, control: Control) -> f64 {
        match control {
            Control::Velocity => self.velocity_mps,
            Control::Angle => self.angle_deg,
            Control::Height => self.height_m,
        }
    }

    /// Applies one slider movement. Values are clamped to the slider range and
    /// truncated to whole units; non-finite input is ignored.
    pub fn with_value(self, control: Control, raw: f64) -> Self {
        if !raw.is_finite() {
            return self;
        }
        let spec = control.spec();
        let value = raw.clamp(spec.min, spec.max).trunc();

        let mut next = self;
        match control {
            Control::Velocity => next.velocity_mps = value,
            Control::Angle => next.angle_deg = value,
            Control::Height => next.height_m = value,
        }
        next
    }

    pub fn label(&self, control: Control) -> String {
        format!("{}: {}", control.spec().caption, self.value(control) as i64)
    }

    pub fn snapshot(&self) -> LaunchParameters {
        LaunchParameters::from_clamped(self.velocity_mps, self.angle_deg, self.height_m)
    }
}
