//! Error taxonomy for setup-time failures.
//!
//! None of these stop the app. A missing dependency makes one controller or
//! camera inert, an out-of-range setting is clamped, and a settings file that
//! cannot be loaded is replaced by defaults.

use bevy::prelude::*;

use crate::content::{ConfigClamp, ContentLoadError};

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    MissingDependency {
        entity: Entity,
        dependency: &'static str,
    },
    ConfigOutOfRange(ConfigClamp),
    ContentLoad(ContentLoadError),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::MissingDependency { entity, dependency } => {
                write!(f, "Controller {:?} is missing {}", entity, dependency)
            }
            ControllerError::ConfigOutOfRange(clamp) => write!(f, "{}", clamp),
            ControllerError::ContentLoad(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::ContentLoad(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigClamp> for ControllerError {
    fn from(clamp: ConfigClamp) -> Self {
        ControllerError::ConfigOutOfRange(clamp)
    }
}

impl From<ContentLoadError> for ControllerError {
    fn from(e: ContentLoadError) -> Self {
        ControllerError::ContentLoad(e)
    }
}
