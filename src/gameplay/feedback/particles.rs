use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{EngineState, Rocket};
use crate::gameplay::rocket::lifecycle::FeedbackCue;

const PARTICLE_Z: f32 = 15.0;

/// Simple CPU particle: drifts, fades, despawns when the timer runs out.
#[derive(Component, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub lifetime: Timer,
}

/// Exhaust spawner on the rocket; only ticks while the engine runs.
#[derive(Component, Debug)]
pub struct ExhaustEmitter {
    pub timer: Timer,
}

impl Default for ExhaustEmitter {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.02, TimerMode::Repeating),
        }
    }
}

pub fn emit_exhaust(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(&Transform, &EngineState, &mut ExhaustEmitter), With<Rocket>>,
) {
    let mut rng = rand::thread_rng();
    for (transform, engine, mut emitter) in &mut q {
        if !engine.running {
            continue;
        }
        emitter.timer.tick(time.delta());
        let down = (transform.rotation * Vec3::NEG_Y).truncate();
        let tail = transform.translation.truncate() + down * 26.0;
        for _ in 0..emitter.timer.times_finished_this_tick() {
            let jitter = Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-20.0..20.0));
            commands.spawn((
                Particle {
                    velocity: down * rng.gen_range(140.0..220.0) + jitter,
                    lifetime: Timer::from_seconds(rng.gen_range(0.25..0.45), TimerMode::Once),
                },
                Sprite::from_color(
                    Color::srgb(1.0, rng.gen_range(0.55..0.8), 0.2),
                    Vec2::splat(rng.gen_range(3.0..6.0)),
                ),
                Transform::from_translation(tail.extend(PARTICLE_Z)),
            ));
        }
    }
}

/// Radial one-shot burst at the rocket on every cue: gold shower for a
/// completed level, fireball for a crash.
pub fn burst_on_cue(
    mut ev_cue: EventReader<FeedbackCue>,
    q_rocket: Query<&Transform, With<Rocket>>,
    mut commands: Commands,
) {
    for cue in ev_cue.read() {
        let Ok(transform) = q_rocket.single() else {
            continue;
        };
        let origin = transform.translation.truncate();
        let (color, count, speed) = match cue {
            FeedbackCue::Success => (Color::srgb(0.95, 0.82, 0.3), 36, 170.0),
            FeedbackCue::Death => (Color::srgb(1.0, 0.45, 0.1), 48, 240.0),
        };
        let mut rng = rand::thread_rng();
        for i in 0..count {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU
                + rng.gen_range(-0.08..0.08);
            let velocity = Vec2::from_angle(angle) * speed * rng.gen_range(0.5..1.0);
            commands.spawn((
                Particle {
                    velocity,
                    lifetime: Timer::from_seconds(rng.gen_range(0.5..0.9), TimerMode::Once),
                },
                Sprite::from_color(color, Vec2::splat(rng.gen_range(3.0..7.0))),
                Transform::from_translation(origin.extend(PARTICLE_Z)),
            ));
        }
    }
}

pub fn update_particles(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Transform, &mut Sprite, &mut Particle)>,
) {
    let dt = time.delta_secs();
    for (entity, mut transform, mut sprite, mut particle) in &mut q {
        particle.lifetime.tick(time.delta());
        if particle.lifetime.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let step = particle.velocity * dt;
        transform.translation.x += step.x;
        transform.translation.y += step.y;
        let alpha = particle.lifetime.fraction_remaining();
        sprite.color = sprite.color.with_alpha(alpha);
    }
}
