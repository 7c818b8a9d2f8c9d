use std::time::Duration;

use bevy::prelude::*;

use rocket_lander::core::level::progression::{
    tick_scene_change, LevelProgress, LoadLevel, PendingSceneChange, SceneChange,
};
use rocket_lander::core::level::registry::{LevelCatalog, LevelEntry};

fn catalog(n: usize) -> LevelCatalog {
    LevelCatalog {
        version: 1,
        wrap_to: 0,
        levels: (0..n)
            .map(|i| LevelEntry {
                id: format!("level_{i}"),
                file: format!("level_{i}.ron"),
            })
            .collect(),
    }
}

fn test_app(level_count: usize, index: usize) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.insert_resource(catalog(level_count));
    app.insert_resource(LevelProgress { index });
    app.add_event::<LoadLevel>();
    app.add_systems(Update, tick_scene_change);
    app
}

fn tick(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn drain(app: &mut App) -> Vec<LoadLevel> {
    app.world_mut()
        .resource_mut::<Events<LoadLevel>>()
        .drain()
        .collect()
}

#[test]
fn advance_fires_only_after_the_configured_delay() {
    let mut app = test_app(6, 3);
    app.insert_resource(PendingSceneChange::after_seconds(SceneChange::Advance, 1.5));

    tick(&mut app, 1.0);
    assert!(drain(&mut app).is_empty());
    assert!(app.world().get_resource::<PendingSceneChange>().is_some());

    tick(&mut app, 0.6);
    assert_eq!(drain(&mut app), vec![LoadLevel { index: 4 }]);
    assert!(app.world().get_resource::<PendingSceneChange>().is_none());
}

#[test]
fn reload_targets_the_current_level() {
    let mut app = test_app(6, 2);
    app.insert_resource(PendingSceneChange::after_seconds(SceneChange::Reload, 0.5));
    tick(&mut app, 0.6);
    assert_eq!(drain(&mut app), vec![LoadLevel { index: 2 }]);
}

#[test]
fn advance_from_the_last_level_wraps() {
    let mut app = test_app(6, 5);
    app.insert_resource(PendingSceneChange::after_seconds(SceneChange::Advance, 0.2));
    tick(&mut app, 0.3);
    assert_eq!(drain(&mut app), vec![LoadLevel { index: 0 }]);
}

#[test]
fn a_scheduled_change_fires_exactly_once() {
    let mut app = test_app(3, 1);
    app.insert_resource(PendingSceneChange::after_seconds(SceneChange::Advance, 0.1));
    tick(&mut app, 0.2);
    assert_eq!(drain(&mut app).len(), 1);
    for _ in 0..5 {
        tick(&mut app, 0.2);
    }
    assert!(drain(&mut app).is_empty());
}

#[test]
fn zero_delay_fires_on_the_next_tick() {
    let mut app = test_app(3, 0);
    app.insert_resource(PendingSceneChange::after_seconds(SceneChange::Advance, 0.0));
    tick(&mut app, 0.001);
    assert_eq!(drain(&mut app), vec![LoadLevel { index: 1 }]);
}
