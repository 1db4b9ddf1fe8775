//! Controller domain: player and follow-camera spawning from loaded settings.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimatorParameters;
use crate::camera::ThirdPersonCamera;
use crate::content::{CameraSettings, MovementSettings};
use crate::controller::{CharacterController, MovementTelemetry, Player};
use crate::physics::GameLayer;

/// Capsule radius and cylinder length; half height matches the default feet offset.
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.4;
pub const PLAYER_CAPSULE_LENGTH: f32 = 1.0;

/// Spawn a player-controlled capsule at `position`.
pub fn spawn_player(
    commands: &mut Commands,
    settings: &MovementSettings,
    position: Vec3,
) -> Entity {
    let config = settings.0.clone();
    let drag = config.air_drag;

    info!(
        "Spawning player at {:?}: walk={}, sprint={}, jump={}, max_jumps={}",
        position,
        config.walk_speed,
        config.sprint_speed(),
        config.jump_force,
        config.max_jumps
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Name::new("Player"),
                Player,
                CharacterController::new(config),
                MovementTelemetry::default(),
                AnimatorParameters::default(),
            ),
            Transform::from_translation(position),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_CAPSULE_RADIUS, PLAYER_CAPSULE_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                Mass(1.0),
                LinearVelocity::default(),
                LinearDamping(drag),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Prop],
                ),
            ),
        ))
        .id()
}

/// Spawn a 3D camera that orbits `target`.
pub fn spawn_follow_camera(
    commands: &mut Commands,
    settings: &CameraSettings,
    target: Entity,
) -> Entity {
    let config = settings.0.clone();
    let start = Transform::from_translation(config.offset).looking_at(Vec3::ZERO, Vec3::Y);

    commands
        .spawn((
            Name::new("Follow Camera"),
            Camera3d::default(),
            start,
            ThirdPersonCamera::following(config, target),
        ))
        .id()
}
