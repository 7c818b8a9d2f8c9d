//! Per-frame evaluation of raw device state into action state.
use bevy::prelude::*;

use super::types::*;

pub fn system_update_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    pads: Query<&Gamepad>,
    mut input_map: ResMut<InputMap>,
) {
    let n = input_map.actions.len();
    let mut binary_now = vec![false; n];
    let mut axis_now = vec![0.0f32; n];

    for (i, sources) in input_map.bindings.iter().enumerate() {
        match input_map.actions[i].kind {
            ActionKind::Binary => {
                binary_now[i] = sources.iter().any(|s| match *s {
                    BindingSource::Key(k) => keyboard.pressed(k),
                    BindingSource::PadButton(b) => pads.iter().any(|g| g.pressed(b)),
                    BindingSource::PadAxis(_) => false,
                });
            }
            ActionKind::Axis1 => {
                // Largest magnitude across bound axes and connected pads wins.
                let mut value = 0.0f32;
                for s in sources {
                    if let BindingSource::PadAxis(axis) = *s {
                        for g in &pads {
                            if let Some(v) = g.get(axis) {
                                if v.abs() > value.abs() {
                                    value = v;
                                }
                            }
                        }
                    }
                }
                axis_now[i] = value;
            }
        }
    }

    for (i, state) in input_map.states.iter_mut().enumerate() {
        match state {
            ActionState::Binary(b) => {
                let now = binary_now[i];
                b.just_pressed = now && !b.pressed;
                b.just_released = !now && b.pressed;
                b.pressed = now;
            }
            ActionState::Axis1(a) => {
                a.value = axis_now[i];
                a.active = axis_now[i] != 0.0;
            }
        }
    }
}
