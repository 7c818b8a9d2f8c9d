use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Wall-clock cutoff armed from `window.autoClose`; absent when the config
/// leaves the session open-ended.
#[derive(Resource, Debug, Clone, Copy)]
struct SessionDeadline {
    seconds: f32,
}

/// Optional timed exit so the binary can be smoke-run headlessly.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline)
            .add_systems(Update, expire_session);
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let seconds = cfg.window.auto_close;
    if seconds > 0.0 {
        info!(target: "session", "closing automatically after {seconds} seconds");
        commands.insert_resource(SessionDeadline { seconds });
    }
}

fn expire_session(
    time: Res<Time>,
    deadline: Option<Res<SessionDeadline>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(deadline) = deadline else {
        return;
    };
    if time.elapsed_secs() >= deadline.seconds {
        info!(target: "session", "session deadline reached, exiting");
        ev_exit.write(AppExit::Success);
    }
}
