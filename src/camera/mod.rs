//! Camera domain: third-person follow camera decoupled from movement.

mod config;
mod rig;
mod systems;


pub use config::CameraConfig;
pub use rig::CameraRig;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::ControllerSet;
use crate::camera::systems::{resolve_camera_targets, update_camera_rigs};

/// A camera that orbits and follows `target`. With no target it follows the player.
#[derive(Component, Debug)]
pub struct ThirdPersonCamera {
    pub rig: CameraRig,
    pub target: Option<Entity>,
}

impl ThirdPersonCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            rig: CameraRig::new(config),
            target: None,
        }
    }

    pub fn following(config: CameraConfig, target: Entity) -> Self {
        Self {
            rig: CameraRig::new(config),
            target: Some(target),
        }
    }
}

/// Camera whose target could not be resolved; it stays where it is.
#[derive(Component, Debug)]
pub struct CameraInert;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            resolve_camera_targets.in_set(ControllerSet::Setup),
        )
        .add_systems(
            PostUpdate,
            update_camera_rigs
                .in_set(ControllerSet::Camera)
                .before(TransformSystems::Propagate),
        );
    }
}
