//! Strider: a physics-driven third-person character controller for Bevy and avian3d.
//!
//! Add [`StriderPlugin`] after avian's `PhysicsPlugins`, then spawn a player with
//! [`controller::spawn_player`] and a camera with [`controller::spawn_follow_camera`].

pub mod animation;
pub mod camera;
pub mod content;
pub mod controller;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod error;
pub mod input;
pub mod movement;
pub mod physics;

use bevy::prelude::*;

use crate::camera::CameraPlugin;
use crate::content::{ContentPlugin, SettingsSource};
use crate::controller::ControllerPlugin;
use crate::input::ControllerInputPlugin;

/// Ordering of the controller's systems across schedules.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// PreUpdate: poll the active input backend into the latch
    Input,
    /// PreUpdate: validate new controllers and resolve camera targets
    Setup,
    /// FixedUpdate: one movement tick per character
    Movement,
    /// Update: smooth facing toward the move direction
    Rotation,
    /// Update: publish animator parameters
    Animation,
    /// PostUpdate: orbit and follow
    Camera,
}

#[derive(Default)]
pub struct StriderPlugin {
    pub settings: SettingsSource,
}

impl StriderPlugin {
    pub fn from_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            settings: SettingsSource::File(path.into()),
        }
    }
}

impl Plugin for StriderPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(PreUpdate, (ControllerSet::Input, ControllerSet::Setup).chain())
            .configure_sets(
                Update,
                (ControllerSet::Rotation, ControllerSet::Animation).chain(),
            );

        // Settings must exist before the input plugin picks its backend
        app.add_plugins(ContentPlugin {
            source: self.settings.clone(),
        })
        .add_plugins((ControllerInputPlugin, ControllerPlugin, CameraPlugin));
    }
}
