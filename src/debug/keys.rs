#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::level::progression::{LevelProgress, LoadLevel};
#[cfg(feature = "debug")]
use crate::core::level::registry::LevelCatalog;
#[cfg(feature = "debug")]
use crate::gameplay::rocket::controls::ControlIntent;
#[cfg(feature = "debug")]
use crate::gameplay::rocket::lifecycle::CollisionGate;

/// Debug-only cheats: `NextLevel` skips ahead without any delay, and
/// `ToggleCollisions` flips the collision gate. Both bindings only exist in
/// the debug input layer, so release builds never see them fire.
#[cfg(feature = "debug")]
pub fn debug_control_actions(
    intent: Res<ControlIntent>,
    mut gate: ResMut<CollisionGate>,
    catalog: Res<LevelCatalog>,
    progress: Res<LevelProgress>,
    mut ev_load: EventWriter<LoadLevel>,
) {
    if intent.toggle_collisions {
        gate.enabled = !gate.enabled;
        info!(
            target: "debug",
            "collision gate {}",
            if gate.enabled { "enabled" } else { "disabled" }
        );
    }
    if intent.next_level {
        let index = catalog.next_index(progress.index);
        info!(target: "debug", "force-advance to level {index}");
        ev_load.write(LoadLevel { index });
    }
}
