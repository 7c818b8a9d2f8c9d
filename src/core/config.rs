use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
            title: "Rocket Lander".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward gravity applied by Rapier (pixels/s^2; negative pulls down).
    pub gravity_y: f32,
    /// Draw collider wireframes (requires the rapier debug render plugin).
    pub debug_render: bool,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -260.0,
            debug_render: false,
        }
    }
}

/// Tuning for the craft itself. Read-only after startup.
///
/// `main_thrust` and `rcs_thrust` are expected to be positive and
/// `scene_transition_delay` non-negative; out-of-range values are a caller
/// error and are only surfaced as [`GameConfig::validate`] warnings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RocketConfig {
    /// Impulse per second along the craft's local up axis while thrusting.
    pub main_thrust: f32,
    /// Manual rotation rate in degrees per second.
    pub rcs_thrust: f32,
    /// Seconds between a terminal contact and the scheduled scene change.
    pub scene_transition_delay: f32,
}
impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            main_thrust: 2400.0,
            rcs_thrust: 160.0,
            scene_transition_delay: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub engine_volume: f32,
    pub effects_volume: f32,
    pub engine_clip: String,
    pub success_clip: String,
    pub explosion_clip: String,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            engine_volume: 0.7,
            effects_volume: 0.9,
            engine_clip: "audio/engine.ogg".into(),
            success_clip: "audio/success.ogg".into(),
            explosion_clip: "audio/explosion.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub rocket: RocketConfig,
    pub audio: AudioConfig,
    /// Starting level id; overridden by `--level` / `LEVEL_ID`.
    pub default_level_id: String,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path)
            .map_err(|e| format!("read config {:?}: {e}", path.as_ref()))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Non-fatal sanity pass; returns human readable warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.rocket.main_thrust <= 0.0 {
            w.push(format!(
                "rocket.main_thrust should be > 0 (got {})",
                self.rocket.main_thrust
            ));
        }
        if self.rocket.rcs_thrust <= 0.0 {
            w.push(format!(
                "rocket.rcs_thrust should be > 0 (got {})",
                self.rocket.rcs_thrust
            ));
        }
        if self.rocket.scene_transition_delay < 0.0 {
            w.push(format!(
                "rocket.scene_transition_delay should be >= 0 (got {})",
                self.rocket.scene_transition_delay
            ));
        }
        for (name, v) in [
            ("audio.engine_volume", self.audio.engine_volume),
            ("audio.effects_volume", self.audio.effects_volume),
        ] {
            if !(0.0..=1.0).contains(&v) {
                w.push(format!("{name} outside 0..=1 (got {v})"));
            }
        }
        w
    }
}

pub fn log_config_warnings(cfg: Res<GameConfig>) {
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_are_sane() {
        let cfg = GameConfig::default();
        assert!(cfg.rocket.main_thrust > 0.0);
        assert!(cfg.rocket.rcs_thrust > 0.0);
        assert!(cfg.rocket.scene_transition_delay >= 0.0);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn loads_partial_ron_with_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            "(rocket: (main_thrust: 1800.0), default_level_id: \"canyon_crossing\")"
        )
        .unwrap();
        let cfg = GameConfig::load_from_file(f.path()).unwrap();
        assert_eq!(cfg.rocket.main_thrust, 1800.0);
        // untouched sections fall back to defaults
        assert_eq!(cfg.rocket.rcs_thrust, RocketConfig::default().rcs_thrust);
        assert_eq!(cfg.default_level_id, "canyon_crossing");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GameConfig::load_from_file("/nonexistent/game.ron").is_err());
    }

    #[test]
    fn out_of_range_values_warn() {
        let mut cfg = GameConfig::default();
        cfg.rocket.main_thrust = -5.0;
        cfg.rocket.scene_transition_delay = -1.0;
        cfg.audio.engine_volume = 2.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("main_thrust"));
    }
}
