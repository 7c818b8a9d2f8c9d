use bevy::prelude::*;

use crate::core::config::log_config_warnings;
use crate::core::level::LevelLoaderPlugin;
use crate::core::system_order::{ControlSet, ResponseSet};
use crate::debug::DebugPlugin;
use crate::gameplay::feedback::FeedbackPlugin;
use crate::gameplay::rocket::RocketPlugin;
use crate::interaction::inputmap::InputActionsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (ControlSet, ResponseSet.after(ControlSet)))
            .add_plugins((
                CameraPlugin,
                PhysicsSetupPlugin,
                InputActionsPlugin,
                LevelLoaderPlugin,
                RocketPlugin,
                FeedbackPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_warnings);
    }
}
