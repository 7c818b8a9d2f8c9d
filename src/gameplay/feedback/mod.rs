pub mod audio;
pub mod particles;

use bevy::prelude::*;

use crate::core::system_order::ResponseSet;

use audio::{load_audio_handles, play_cue_audio, sync_engine_audio};
use particles::{burst_on_cue, emit_exhaust, update_particles};

/// Audio and particle reactions to engine state and lifecycle cues.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_audio_handles).add_systems(
            Update,
            (
                (sync_engine_audio, play_cue_audio, burst_on_cue).after(ResponseSet),
                emit_exhaust,
                update_particles,
            ),
        );
    }
}
