use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

use super::types::*;

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ActionDecl {
    description: Option<String>,
    kind: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct DebugSection {
    bindings: Option<HashMap<String, Vec<String>>>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    actions: Option<HashMap<String, ActionDecl>>,
    bindings: Option<HashMap<String, Vec<String>>>,
    debug: Option<DebugSection>,
}

/// Parse the action/binding TOML. Errors are collected, never fatal: a bad
/// line loses that binding, not the whole map. The `[debug.bindings]` layer
/// is merged only when `debug_layer` is set (debug builds).
pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };

    let mut actions: Vec<ActionMeta> = Vec::new();
    let mut name_to_id = HashMap::new();
    if let Some(map) = root.actions {
        for (name, decl) in map.into_iter() {
            if !validate_action_name(&name) {
                result
                    .errors
                    .push(format!("Invalid action name '{name}': must be PascalCase"));
                continue;
            }
            let kind = match decl.kind.as_deref().unwrap_or("Binary") {
                "Binary" => ActionKind::Binary,
                "Axis1" => ActionKind::Axis1,
                other => {
                    result.errors.push(format!(
                        "Action {name} unknown kind '{other}': expected Binary|Axis1"
                    ));
                    ActionKind::Binary
                }
            };
            // ids are array positions; count only accepted declarations
            let id = ActionId(actions.len() as u16);
            actions.push(ActionMeta {
                id,
                name: name.clone(),
                description: decl.description.unwrap_or_default(),
                kind,
            });
            name_to_id.insert(name, id);
        }
    }

    let states = actions
        .iter()
        .map(|meta| match meta.kind {
            ActionKind::Binary => ActionState::Binary(BinaryState::default()),
            ActionKind::Axis1 => ActionState::Axis1(AxisState::default()),
        })
        .collect();
    let bindings = vec![SmallVec::new(); actions.len()];

    let mut input_map = InputMap {
        actions,
        name_to_id,
        bindings,
        states,
    };

    // Merge binding layers (normal + debug overlay when allowed).
    let mut all_bindings: HashMap<String, Vec<String>> = HashMap::new();
    if let Some(b) = root.bindings {
        for (k, v) in b {
            all_bindings.entry(k).or_default().extend(v);
        }
    }
    if debug_layer {
        if let Some(db) = root.debug.and_then(|d| d.bindings) {
            for (k, v) in db {
                all_bindings.entry(k).or_default().extend(v);
            }
        }
    }

    for (action_name, specs) in all_bindings {
        let Some(id) = input_map.name_to_id.get(&action_name).copied() else {
            result
                .errors
                .push(format!("Binding references unknown action '{action_name}'"));
            continue;
        };
        let kind = input_map.actions[id.0 as usize].kind;
        for spec in &specs {
            match parse_source(spec) {
                Ok(source) => {
                    if kind == ActionKind::Axis1 && !matches!(source, BindingSource::PadAxis(_)) {
                        result.errors.push(format!(
                            "[binding {action_name} '{spec}'] Axis1 actions take PadAxis sources"
                        ));
                        continue;
                    }
                    input_map.bindings[id.0 as usize].push(source);
                }
                Err(err) => {
                    result
                        .errors
                        .push(format!("[binding {action_name} '{spec}'] {err}"));
                }
            }
        }
    }

    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return false;
    }
    !name.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn parse_source(s: &str) -> Result<BindingSource, String> {
    if let Some(rest) = s.strip_prefix("Key:") {
        return parse_keycode(rest);
    }
    if let Some(rest) = s.strip_prefix("Pad:") {
        let button = match rest {
            "South" => GamepadButton::South,
            "East" => GamepadButton::East,
            "North" => GamepadButton::North,
            "West" => GamepadButton::West,
            "LeftTrigger" => GamepadButton::LeftTrigger,
            "RightTrigger" => GamepadButton::RightTrigger,
            other => return Err(format!("Unknown gamepad button '{other}'")),
        };
        return Ok(BindingSource::PadButton(button));
    }
    if let Some(rest) = s.strip_prefix("PadAxis:") {
        let axis = match rest {
            "LeftStickX" => GamepadAxis::LeftStickX,
            "LeftStickY" => GamepadAxis::LeftStickY,
            "RightStickX" => GamepadAxis::RightStickX,
            "RightStickY" => GamepadAxis::RightStickY,
            other => return Err(format!("Unknown gamepad axis '{other}'")),
        };
        return Ok(BindingSource::PadAxis(axis));
    }
    Err(format!("Unrecognized token '{s}'"))
}

fn parse_keycode(name: &str) -> Result<BindingSource, String> {
    use bevy::input::keyboard::KeyCode;
    let kc = match name {
        "Space" => KeyCode::Space,
        "A" | "KeyA" => KeyCode::KeyA,
        "D" | "KeyD" => KeyCode::KeyD,
        "W" | "KeyW" => KeyCode::KeyW,
        "S" | "KeyS" => KeyCode::KeyS,
        "L" | "KeyL" => KeyCode::KeyL,
        "C" | "KeyC" => KeyCode::KeyC,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(BindingSource::Key(kc))
}
