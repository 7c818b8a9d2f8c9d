//! Debug module: feature gated cheat keys and the status overlay.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod overlay;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(feature = "debug")]
        {
            app.add_systems(Startup, overlay::spawn_debug_overlay)
                .add_systems(
                    Update,
                    (keys::debug_control_actions, overlay::update_debug_overlay),
                );
        }
        #[cfg(not(feature = "debug"))]
        {
            let _ = app;
        }
    }
}
