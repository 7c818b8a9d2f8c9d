use bevy::prelude::*;
use serde::Deserialize;

/// Marker for the player-controlled craft.
#[derive(Component, Debug, Clone, Copy)]
pub struct Rocket;

/// Everything spawned by the level loader; despawned wholesale on a scene change.
#[derive(Component, Debug, Clone, Copy)]
pub struct LevelEntity;

/// Contact category carried by level geometry. Geometry without a `Surface`
/// component classifies as hostile when touched.
#[derive(Component, Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Safe to touch (launch pad). No effect on contact.
    Friendly,
    /// Landing pad; completes the level on contact.
    Finish,
    /// Terrain and obstacles; lethal on contact.
    Hostile,
}

/// Whether the main engine is currently firing. Single source of truth for the
/// engine audio sink and the exhaust emitter, so stop/start stays idempotent.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EngineState {
    pub running: bool,
}
