use bevy::prelude::*;
use bevy_rapier2d::prelude::{ExternalImpulse, LockedAxes};

use crate::core::components::{EngineState, Rocket};
use crate::core::config::GameConfig;
use crate::interaction::inputmap::InputMap;

use super::lifecycle::RocketPhase;

/// Flat per-frame snapshot of the actions gameplay cares about. Sampled once
/// from the input map so gameplay systems never touch device state directly.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ControlIntent {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub rotate_axis: f32,
    pub next_level: bool,
    pub toggle_collisions: bool,
}

pub fn sample_control_intent(
    input_map: Option<Res<InputMap>>,
    mut intent: ResMut<ControlIntent>,
) {
    let Some(map) = input_map else {
        *intent = ControlIntent::default();
        return;
    };
    intent.thrust = map.pressed("Thrust");
    intent.rotate_left = map.pressed("RotateLeft");
    intent.rotate_right = map.pressed("RotateRight");
    intent.rotate_axis = map.axis1("RotateAxis");
    intent.next_level = map.just_pressed("NextLevel");
    intent.toggle_collisions = map.just_pressed("ToggleCollisions");
}

/// Manual rotation. Keys and the analog stick are equivalent sources: left
/// input is evaluated first and wins a simultaneous conflict, so opposing
/// inputs never cancel or double up. The analog comparisons have no deadzone.
/// While steering, the body's angular response is locked so the manual
/// rotation stays authoritative; the lock is dropped when input ends.
pub fn apply_rotation(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    intent: Res<ControlIntent>,
    mut q: Query<(&RocketPhase, &mut Transform, &mut LockedAxes), With<Rocket>>,
) {
    for (phase, mut transform, mut locked) in &mut q {
        if *phase != RocketPhase::Alive {
            if *locked != LockedAxes::empty() {
                *locked = LockedAxes::empty();
            }
            continue;
        }
        let direction = if intent.rotate_left || intent.rotate_axis < 0.0 {
            1.0
        } else if intent.rotate_right || intent.rotate_axis > 0.0 {
            -1.0
        } else {
            0.0
        };
        if direction != 0.0 {
            if *locked != LockedAxes::ROTATION_LOCKED {
                *locked = LockedAxes::ROTATION_LOCKED;
            }
            let degrees = direction * cfg.rocket.rcs_thrust * time.delta_secs();
            transform.rotate_z(degrees.to_radians());
        } else if *locked != LockedAxes::empty() {
            *locked = LockedAxes::empty();
        }
    }
}

/// Main engine. Holding thrust writes an impulse along the craft's local up,
/// scaled by configured thrust and frame time; releasing zeroes the impulse
/// and stops the engine feedback. `EngineState` changes are edge-guarded so
/// downstream stop/start stays a no-op when nothing changed.
pub fn apply_thrust(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    intent: Res<ControlIntent>,
    mut q: Query<
        (
            &RocketPhase,
            &Transform,
            &mut ExternalImpulse,
            &mut EngineState,
        ),
        With<Rocket>,
    >,
) {
    for (phase, transform, mut impulse, mut engine) in &mut q {
        if *phase != RocketPhase::Alive {
            impulse.impulse = Vec2::ZERO;
            if engine.running {
                engine.running = false;
            }
            continue;
        }
        if intent.thrust {
            let up = (transform.rotation * Vec3::Y).truncate();
            impulse.impulse = up * cfg.rocket.main_thrust * time.delta_secs();
            if !engine.running {
                engine.running = true;
            }
        } else {
            impulse.impulse = Vec2::ZERO;
            if engine.running {
                engine.running = false;
            }
        }
    }
}
