//! Data definitions for the controller settings file.
//!
//! `ControllerSettings` mirrors assets/config/controller.ron. Every section
//! falls back to its defaults when omitted, so a partial file is valid.

use std::sync::Arc;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::input::{ActionBindings, InputBackend};
use crate::movement::MovementConfig;

pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Settings file (controller.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub schema_version: u32,
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub input: InputSettings,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            movement: MovementConfig::default(),
            camera: CameraConfig::default(),
            input: InputSettings::default(),
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputSettings {
    pub backend: InputBackend,
    pub bindings: ActionBindings,
}

// ============================================================================
// Runtime resources
// ============================================================================

/// Movement tuning shared by every controller spawned from it.
#[derive(Resource, Debug, Clone, Default)]
pub struct MovementSettings(pub Arc<MovementConfig>);

#[derive(Resource, Debug, Clone, Default)]
pub struct CameraSettings(pub CameraConfig);
