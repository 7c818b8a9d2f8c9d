use bevy::audio::{PlaybackMode, Volume};
use bevy::prelude::*;
use bevy_rapier2d::prelude::{
    ActiveEvents, Collider, Damping, ExternalImpulse, LockedAxes, Restitution, RigidBody, Velocity,
};

use crate::core::components::{EngineState, LevelEntity, Rocket};
use crate::core::config::GameConfig;
use crate::core::level::progression::LevelLoaded;
use crate::gameplay::feedback::audio::AudioHandles;
use crate::gameplay::feedback::particles::ExhaustEmitter;

use super::lifecycle::RocketPhase;

const ROCKET_Z: f32 = 20.0;
const ROCKET_SIZE: Vec2 = Vec2::new(22.0, 44.0);

/// Fresh craft at the level's spawn point, one per `LevelLoaded`. The engine
/// loop sink rides on the rocket entity itself (one audio channel per craft)
/// and starts paused until thrust first fires.
pub fn spawn_rocket_on_level_loaded(
    mut ev_loaded: EventReader<LevelLoaded>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    audio: Option<Res<AudioHandles>>,
) {
    let Some(loaded) = ev_loaded.read().last().copied() else {
        return;
    };
    let mut rocket = commands.spawn((
        Name::new("Rocket"),
        Rocket,
        LevelEntity,
        RocketPhase::Alive,
        EngineState::default(),
        ExhaustEmitter::default(),
        Sprite::from_color(Color::srgb(0.82, 0.84, 0.9), ROCKET_SIZE),
        Transform::from_translation(loaded.spawn_point.extend(ROCKET_Z)),
        (
            RigidBody::Dynamic,
            Collider::capsule_y(ROCKET_SIZE.y * 0.5 - ROCKET_SIZE.x * 0.5, ROCKET_SIZE.x * 0.5),
            Velocity::zero(),
            ExternalImpulse::default(),
            Damping {
                linear_damping: 0.0,
                angular_damping: 2.0,
            },
            Restitution::coefficient(0.0),
            LockedAxes::empty(),
            ActiveEvents::COLLISION_EVENTS,
        ),
    ));
    if let Some(audio) = audio {
        rocket.insert((
            AudioPlayer::new(audio.engine.clone()),
            PlaybackSettings {
                mode: PlaybackMode::Loop,
                volume: Volume::Linear(cfg.audio.engine_volume),
                paused: true,
                ..default()
            },
        ));
    }
    info!(target: "rocket", "spawned at {:?} (level {})", loaded.spawn_point, loaded.index);
}
