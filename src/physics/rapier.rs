use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;

use crate::core::config::GameConfig;

/// Wrapper configuring Rapier for the lander: config-driven gravity, optional
/// collider wireframes.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .add_systems(Startup, configure_gravity);
        let debug_render = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.physics.debug_render)
            .unwrap_or(false);
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    // RapierConfiguration lives on the physics context entity in recent
    // bevy_rapier releases, hence the query instead of a ResMut.
    if let Ok(mut rapier) = q_cfg.single_mut() {
        rapier.gravity = Vect::new(0.0, cfg.physics.gravity_y);
    }
}
