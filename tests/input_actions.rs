use bevy::prelude::*;

use rocket_lander::interaction::inputmap::parse::parse_input_toml;
use rocket_lander::interaction::inputmap::systems::system_update_actions;
use rocket_lander::interaction::inputmap::InputMap;

const BINDINGS: &str = r#"
    [actions]
    Thrust = { description = "Main engine", kind = "Binary" }
    RotateLeft = { kind = "Binary" }
    RotateAxis = { kind = "Axis1" }

    [bindings]
    Thrust = ["Key:Space"]
    RotateLeft = ["Key:A", "Key:ArrowLeft"]
    RotateAxis = ["PadAxis:LeftStickX"]
"#;

fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    let parsed = parse_input_toml(BINDINGS, false);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    app.insert_resource(parsed.input_map);
    app.add_systems(Update, system_update_actions);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

#[test]
fn press_hold_release_edges() {
    let mut app = test_app();
    press(&mut app, KeyCode::Space);
    app.update();
    {
        let map = app.world().resource::<InputMap>();
        assert!(map.pressed("Thrust"));
        assert!(map.just_pressed("Thrust"));
    }

    // held: still pressed, no longer an edge
    app.update();
    {
        let map = app.world().resource::<InputMap>();
        assert!(map.pressed("Thrust"));
        assert!(!map.just_pressed("Thrust"));
    }

    release(&mut app, KeyCode::Space);
    app.update();
    {
        let map = app.world().resource::<InputMap>();
        assert!(!map.pressed("Thrust"));
        assert!(map.just_released("Thrust"));
    }
}

#[test]
fn any_bound_key_activates_the_action() {
    let mut app = test_app();
    press(&mut app, KeyCode::ArrowLeft);
    app.update();
    assert!(app.world().resource::<InputMap>().pressed("RotateLeft"));
}

#[test]
fn unbound_and_unknown_actions_are_inert() {
    let mut app = test_app();
    app.update();
    let map = app.world().resource::<InputMap>();
    assert!(!map.pressed("Thrust"));
    // axis with no connected gamepad reads zero
    assert_eq!(map.axis1("RotateAxis"), 0.0);
    // names that were never declared never fire
    assert!(!map.pressed("DoesNotExist"));
    assert_eq!(map.axis1("DoesNotExist"), 0.0);
}
