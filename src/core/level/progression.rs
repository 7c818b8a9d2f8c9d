use bevy::prelude::*;

use super::registry::LevelCatalog;

/// Index of the level currently in play.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LevelProgress {
    pub index: usize,
}

/// What the pending scene change does once its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    /// Restart the current attempt.
    Reload,
    /// Move on to the next level in the catalog order.
    Advance,
}

/// One-shot deferred scene change, inserted at transition time and consumed
/// when the timer elapses. There is deliberately no cancellation path; once
/// scheduled it fires even if the rocket is long gone.
#[derive(Resource, Debug)]
pub struct PendingSceneChange {
    pub change: SceneChange,
    pub timer: Timer,
}

impl PendingSceneChange {
    pub fn after_seconds(change: SceneChange, delay: f32) -> Self {
        Self {
            change,
            timer: Timer::from_seconds(delay, TimerMode::Once),
        }
    }
}

/// Request to (re)load the level at `index`. Handled by the loader.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLevel {
    pub index: usize,
}

/// Emitted by the loader once geometry is in place; carries where the rocket
/// should appear.
#[derive(Event, Debug, Clone, Copy)]
pub struct LevelLoaded {
    pub index: usize,
    pub spawn_point: Vec2,
}

pub fn tick_scene_change(
    time: Res<Time>,
    pending: Option<ResMut<PendingSceneChange>>,
    progress: Res<LevelProgress>,
    catalog: Res<LevelCatalog>,
    mut ev_load: EventWriter<LoadLevel>,
    mut commands: Commands,
) {
    let Some(mut pending) = pending else {
        return;
    };
    pending.timer.tick(time.delta());
    if !pending.timer.finished() {
        return;
    }
    let index = match pending.change {
        SceneChange::Reload => progress.index,
        SceneChange::Advance => catalog.next_index(progress.index),
    };
    info!(target: "level", "scene change {:?} -> level {}", pending.change, index);
    ev_load.write(LoadLevel { index });
    commands.remove_resource::<PendingSceneChange>();
}
