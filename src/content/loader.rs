//! Loader for the RON settings file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{ControllerSettings, SETTINGS_SCHEMA_VERSION};

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse settings from RON text. `file` only labels errors.
pub fn parse_settings(file: &str, contents: &str) -> Result<ControllerSettings, ContentLoadError> {
    let settings: ControllerSettings =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

    if settings.schema_version != SETTINGS_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                settings.schema_version, SETTINGS_SCHEMA_VERSION
            ),
        });
    }

    Ok(settings)
}

/// Load a settings file from disk.
pub fn load_settings(path: &Path) -> Result<ControllerSettings, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&file_name, &contents)
}
