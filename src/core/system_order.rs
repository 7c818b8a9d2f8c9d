use bevy::prelude::*;

/// Input-driven writes to the physics body (thrust impulse, manual rotation).
/// Runs before collision responses so a tick reads a coherent intent.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ControlSet;

/// Collision outcomes and deferred scene sequencing.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ResponseSet;
