use bevy::audio::{AudioSinkPlayback, AudioSource, Volume};
use bevy::prelude::*;

use crate::core::components::{EngineState, Rocket};
use crate::core::config::GameConfig;
use crate::gameplay::rocket::lifecycle::FeedbackCue;

/// Clip handles resolved from config paths at startup. Absent in headless
/// runs without an asset server; every consumer tolerates that.
#[derive(Resource, Debug, Clone)]
pub struct AudioHandles {
    pub engine: Handle<AudioSource>,
    pub success: Handle<AudioSource>,
    pub explosion: Handle<AudioSource>,
}

pub fn load_audio_handles(
    mut commands: Commands,
    server: Option<Res<AssetServer>>,
    cfg: Res<GameConfig>,
) {
    let Some(server) = server else {
        debug!(target: "audio", "no asset server; audio feedback disabled");
        return;
    };
    commands.insert_resource(AudioHandles {
        engine: server.load(cfg.audio.engine_clip.clone()),
        success: server.load(cfg.audio.success_clip.clone()),
        explosion: server.load(cfg.audio.explosion_clip.clone()),
    });
}

/// Keep the looping engine sink in step with `EngineState`. Both branches are
/// guarded on the sink's own state, so an already-stopped engine stays a no-op.
pub fn sync_engine_audio(q: Query<(&EngineState, &AudioSink), With<Rocket>>) {
    for (engine, sink) in &q {
        if engine.running && sink.is_paused() {
            sink.play();
        } else if !engine.running && !sink.is_paused() {
            sink.pause();
        }
    }
}

/// Fire-and-forget one-shots; the sink entity despawns itself when done.
pub fn play_cue_audio(
    mut ev_cue: EventReader<FeedbackCue>,
    audio: Option<Res<AudioHandles>>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
) {
    let Some(audio) = audio else {
        ev_cue.clear();
        return;
    };
    for cue in ev_cue.read() {
        let clip = match cue {
            FeedbackCue::Success => audio.success.clone(),
            FeedbackCue::Death => audio.explosion.clone(),
        };
        commands.spawn((
            AudioPlayer::new(clip),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(cfg.audio.effects_volume)),
        ));
    }
}
