use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_update_actions;
use super::types::InputMap;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;

impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .configure_sets(PreUpdate, InputActionUpdateSet)
            .add_systems(PreStartup, load_initial_input_map)
            .add_systems(
                PreUpdate,
                system_update_actions.in_set(InputActionUpdateSet),
            );
    }
}

fn load_initial_input_map(mut commands: Commands) {
    let path =
        std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into());
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(target: "input", "input map {path} unreadable ({e}); controls disabled");
            String::new()
        }
    };
    let parsed = parse_input_toml(&raw, cfg!(feature = "debug"));
    if parsed.errors.is_empty() {
        info!(target: "input", "input map loaded: {} actions", parsed.input_map.actions.len());
    } else {
        for e in &parsed.errors {
            error!(target: "input", "input map error: {e}");
        }
    }
    commands.insert_resource(parsed.input_map);
}
