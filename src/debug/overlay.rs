#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::Rocket;
#[cfg(feature = "debug")]
use crate::core::level::progression::LevelProgress;
#[cfg(feature = "debug")]
use crate::core::level::registry::LevelCatalog;
#[cfg(feature = "debug")]
use crate::gameplay::rocket::lifecycle::{CollisionGate, RocketPhase};

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new("(debug)"),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.75, 0.85, 0.95)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub fn update_debug_overlay(
    progress: Res<LevelProgress>,
    catalog: Res<LevelCatalog>,
    gate: Res<CollisionGate>,
    q_phase: Query<&RocketPhase, With<Rocket>>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let id = catalog
        .levels
        .get(progress.index)
        .map(|e| e.id.as_str())
        .unwrap_or("?");
    let phase = q_phase
        .single()
        .map(|p| format!("{p:?}"))
        .unwrap_or_else(|_| "-".into());
    text.0 = format!(
        "level {} '{}' phase {} collisions {}",
        progress.index,
        id,
        phase,
        if gate.enabled { "on" } else { "OFF" }
    );
}
