//! Controller domain: wires the movement core onto avian rigid bodies.
//!
//! Movement runs once per fixed tick, before the physics step, and consumes
//! the latched input frame. Facing runs every rendered frame so it stays
//! smooth at any frame rate.

mod bootstrap;
mod components;
pub mod dev;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::{
    PLAYER_CAPSULE_LENGTH, PLAYER_CAPSULE_RADIUS, spawn_follow_camera, spawn_player,
};
pub use components::{CharacterController, ControllerInert, MovementTelemetry, Player};

use bevy::prelude::*;

use crate::ControllerSet;
use crate::animation::publish_animation_parameters;
use crate::controller::systems::{rotate_characters, run_character_movement, validate_controllers};
use crate::movement::CharacterMovementEvent;

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CharacterMovementEvent>()
            .add_systems(PreUpdate, validate_controllers.in_set(ControllerSet::Setup))
            .add_systems(
                FixedUpdate,
                run_character_movement.in_set(ControllerSet::Movement),
            )
            .add_systems(Update, rotate_characters.in_set(ControllerSet::Rotation))
            .add_systems(
                Update,
                publish_animation_parameters.in_set(ControllerSet::Animation),
            );
    }
}
