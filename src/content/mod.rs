//! Content domain: controller settings loaded from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::{
    CameraSettings, ControllerSettings, InputSettings, MovementSettings, SETTINGS_SCHEMA_VERSION,
};
pub use loader::{ContentLoadError, load_settings, parse_settings};
pub use validation::{ConfigClamp, clamp_camera, clamp_movement, validate_settings};

use std::path::PathBuf;
use std::sync::Arc;

use bevy::prelude::*;

use crate::error::ControllerError;

pub const DEFAULT_SETTINGS_PATH: &str = "assets/config/controller.ron";

/// Where the settings come from.
#[derive(Debug, Clone)]
pub enum SettingsSource {
    File(PathBuf),
    /// Already-built settings, still validated
    Inline(ControllerSettings),
}

impl Default for SettingsSource {
    fn default() -> Self {
        SettingsSource::File(PathBuf::from(DEFAULT_SETTINGS_PATH))
    }
}

/// Loads the settings once, while the app is being built, so later plugins can read them.
#[derive(Default)]
pub struct ContentPlugin {
    pub source: SettingsSource,
}

impl ContentPlugin {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: SettingsSource::File(path.into()),
        }
    }

    pub fn inline(settings: ControllerSettings) -> Self {
        Self {
            source: SettingsSource::Inline(settings),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let mut settings = resolve_settings(&self.source);

        let clamps = validate_settings(&mut settings);
        for clamp in clamps {
            warn!("{}", ControllerError::from(clamp));
        }

        app.insert_resource(MovementSettings(Arc::new(settings.movement.clone())))
            .insert_resource(CameraSettings(settings.camera.clone()))
            .insert_resource(settings.input.clone())
            .insert_resource(settings);
    }
}

/// Read the settings, falling back to defaults when the file is missing or invalid.
pub fn resolve_settings(source: &SettingsSource) -> ControllerSettings {
    match source {
        SettingsSource::Inline(settings) => settings.clone(),
        SettingsSource::File(path) => match load_settings(path) {
            Ok(settings) => {
                info!("Loaded controller settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{}; using default settings", ControllerError::from(e));
                ControllerSettings::default()
            }
        },
    }
}
