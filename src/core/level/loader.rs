use bevy::prelude::*;
use bevy_rapier2d::prelude::{Collider, RigidBody};
use std::path::PathBuf;

use crate::core::components::{LevelEntity, Surface};
use crate::core::config::GameConfig;
use crate::core::system_order::ResponseSet;

use super::layout::LevelFile;
use super::progression::{tick_scene_change, LevelLoaded, LevelProgress, LoadLevel};
use super::registry::LevelCatalog;

/// Depth of level geometry; rocket and particles draw above it.
const BLOCK_Z: f32 = 10.0;

/// Starting level requested on the command line (`--level <id>`).
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelOverride(pub Option<String>);

/// Data-driven level loading: catalog + per-level RON layouts.
pub struct LevelLoaderPlugin;

impl Plugin for LevelLoaderPlugin {
    fn build(&self, app: &mut App) {
        // Tests may pre-insert a hand-built catalog; otherwise a missing or
        // corrupt catalog is a fatal misconfiguration discovered right here.
        if app.world().get_resource::<LevelCatalog>().is_none() {
            let path = assets_root().join("levels").join("levels.ron");
            let catalog = LevelCatalog::load_from_file(&path)
                .unwrap_or_else(|e| panic!("level catalog {}: {e}", path.display()));
            app.insert_resource(catalog);
        }
        app.init_resource::<LevelProgress>()
            .add_event::<LoadLevel>()
            .add_event::<LevelLoaded>()
            .add_systems(Startup, queue_initial_level)
            .add_systems(
                Update,
                (tick_scene_change, handle_load_level)
                    .chain()
                    .in_set(ResponseSet),
            );
    }
}

fn assets_root() -> PathBuf {
    let crate_root = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    PathBuf::from(crate_root).join("assets")
}

/// Resolve the starting level (CLI > env > config > first) and request it.
fn queue_initial_level(
    catalog: Res<LevelCatalog>,
    cfg: Res<GameConfig>,
    cli: Option<Res<LevelOverride>>,
    mut ev_load: EventWriter<LoadLevel>,
) {
    let requested = cli
        .and_then(|o| o.0.clone())
        .or_else(|| std::env::var("LEVEL_ID").ok().filter(|v| !v.trim().is_empty()));

    let mut index = None;
    if let Some(id) = &requested {
        index = catalog.index_of(id);
        if index.is_none() {
            warn!(target: "level", "requested level '{id}' not in catalog; falling back");
        }
    }
    if index.is_none() && !cfg.default_level_id.trim().is_empty() {
        index = catalog.index_of(cfg.default_level_id.trim());
        if index.is_none() {
            warn!(
                target: "level",
                "configured default level '{}' not in catalog; starting at first entry",
                cfg.default_level_id
            );
        }
    }
    let index = index.unwrap_or(0);
    info!(target: "level", "starting at level {} '{}'", index, catalog.levels[index].id);
    ev_load.write(LoadLevel { index });
}

/// Tear down the current scene and build the requested one. A layout that
/// fails to load logs an error and leaves the current scene in place.
pub fn handle_load_level(
    mut ev_load: EventReader<LoadLevel>,
    mut commands: Commands,
    q_level: Query<Entity, With<LevelEntity>>,
    catalog: Res<LevelCatalog>,
    mut progress: ResMut<LevelProgress>,
    mut ev_loaded: EventWriter<LevelLoaded>,
) {
    // Collapse bursts (debug key mashing); the last request wins.
    let Some(req) = ev_load.read().last().copied() else {
        return;
    };
    if req.index >= catalog.levels.len() {
        error!(target: "level", "load request index {} out of range", req.index);
        return;
    }
    let entry = &catalog.levels[req.index];
    let path = assets_root().join("levels").join(&entry.file);
    let level = match LevelFile::load_from_file(&path) {
        Ok(level) => level,
        Err(e) => {
            error!(target: "level", "FAILED to load level '{}': {e}", entry.id);
            return;
        }
    };

    for e in &q_level {
        commands.entity(e).despawn();
    }
    progress.index = req.index;

    for (i, block) in level.blocks.iter().enumerate() {
        let center: Vec2 = block.center.into();
        let half: Vec2 = block.half.into();
        if half.x <= 0.0 || half.y <= 0.0 {
            warn!(target: "level", "block {i} in '{}' has a degenerate extent; skipped", entry.id);
            continue;
        }
        let color = match block.kind {
            Surface::Friendly => Color::srgb(0.30, 0.55, 0.85),
            Surface::Finish => Color::srgb(0.88, 0.72, 0.22),
            Surface::Hostile => Color::srgb(0.42, 0.43, 0.50),
        };
        commands.spawn((
            Name::new(format!("Block{i}")),
            LevelEntity,
            block.kind,
            Sprite::from_color(color, half * 2.0),
            Transform::from_translation(center.extend(BLOCK_Z)),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
        ));
    }

    let spawn_point: Vec2 = level.spawn.into();
    info!(
        target: "level",
        "loaded level {} '{}' ({} blocks)",
        req.index,
        entry.id,
        level.blocks.len()
    );
    ev_loaded.write(LevelLoaded {
        index: req.index,
        spawn_point,
    });
}
