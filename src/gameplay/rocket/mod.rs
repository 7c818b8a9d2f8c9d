pub mod controls;
pub mod lifecycle;
pub mod spawn;

use bevy::prelude::*;

use crate::core::system_order::{ControlSet, ResponseSet};
use crate::interaction::inputmap::InputActionUpdateSet;

use controls::{apply_rotation, apply_thrust, sample_control_intent, ControlIntent};
use lifecycle::{rocket_contact_response, CollisionGate, FeedbackCue};
use spawn::spawn_rocket_on_level_loaded;

pub struct RocketPlugin;

impl Plugin for RocketPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlIntent>()
            .init_resource::<CollisionGate>()
            .add_event::<FeedbackCue>()
            .add_systems(PreUpdate, sample_control_intent.after(InputActionUpdateSet))
            .add_systems(
                Update,
                (
                    (apply_rotation, apply_thrust).chain().in_set(ControlSet),
                    (rocket_contact_response, spawn_rocket_on_level_loaded)
                        .chain()
                        .in_set(ResponseSet),
                ),
            );
    }
}
