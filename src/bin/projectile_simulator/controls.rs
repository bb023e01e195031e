use macroquad::prelude::*;
use macroquad::ui::{Id, Ui, hash, root_ui, widgets};
use projectile_motion::{Control, ParameterStore};

use crate::constants::{PANEL_HEIGHT, PANEL_TOP, PANEL_WIDTH, START_BUTTON_TEXT};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) start_simulation: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            start_simulation: self.start_simulation || other.start_simulation,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        start_simulation: is_key_pressed(KeyCode::Enter),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime, screen_w: f32) -> FrameActions {
    let mut actions = FrameActions::default();
    let panel_x = ((screen_w - PANEL_WIDTH) * 0.5).max(0.0);

    widgets::Window::new(
        hash!(),
        vec2(panel_x, PANEL_TOP),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Parameters")
    .ui(&mut *root_ui(), |ui| {
        state.params = draw_slider(ui, hash!("velocity"), Control::Velocity, state.params);
        state.params = draw_slider(ui, hash!("angle"), Control::Angle, state.params);
        state.params = draw_slider(ui, hash!("height"), Control::Height, state.params);
        ui.separator();
        if ui.button(None, START_BUTTON_TEXT) {
            actions.start_simulation = true;
        }
    });

    actions
}

fn draw_slider(ui: &mut Ui, id: Id, control: Control, params: ParameterStore) -> ParameterStore {
    let spec = control.spec();
    ui.label(None, &params.label(control));

    let mut value = params.value(control) as f32;
    ui.slider(id, "", spec.min as f32..spec.max as f32, &mut value);

    let next = params.with_value(control, f64::from(value));
    if next != params {
        tracing::debug!(?control, value = next.value(control), "slider moved");
    }
    next
}
