//! Range checks for loaded settings.
//!
//! Out-of-range values are clamped to the nearest safe value rather than
//! rejected. Each clamp is reported so the caller can log it.

use super::data::ControllerSettings;
use crate::camera::CameraConfig;
use crate::movement::MovementConfig;

/// A setting that was outside its safe range and has been replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigClamp {
    pub section: &'static str,
    pub field: &'static str,
    pub original: f32,
    pub clamped: f32,
}

impl std::fmt::Display for ConfigClamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} is out of range, using {}",
            self.section, self.field, self.original, self.clamped
        )
    }
}

/// Helper macro for clamping a float field to a lower bound
macro_rules! at_least {
    ($clamps:expr, $section:expr, $owner:expr, $field:ident, $min:expr) => {
        let value = $owner.$field;
        if !(value >= $min) {
            // NaN also lands here
            $owner.$field = $min;
            $clamps.push(ConfigClamp {
                section: $section,
                field: stringify!($field),
                original: value,
                clamped: $min,
            });
        }
    };
}

/// Helper macro for clamping a float field into a closed range
macro_rules! within {
    ($clamps:expr, $section:expr, $owner:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $owner.$field;
        if !(($min..=$max).contains(&value)) {
            let clamped = if value > $max { $max } else { $min };
            $owner.$field = clamped;
            $clamps.push(ConfigClamp {
                section: $section,
                field: stringify!($field),
                original: value,
                clamped,
            });
        }
    };
}

pub fn clamp_movement(config: &mut MovementConfig) -> Vec<ConfigClamp> {
    let mut clamps = Vec::new();
    let section = "movement";

    at_least!(clamps, section, config, walk_speed, 0.0);
    at_least!(clamps, section, config, sprint_multiplier, 0.0);
    within!(clamps, section, config, air_control, 0.0, 1.0);
    at_least!(clamps, section, config, jump_force, 0.0);
    at_least!(clamps, section, config, coyote_time, 0.0);
    at_least!(clamps, section, config, ground_check_distance, 0.0);
    at_least!(clamps, section, config, ground_drag, 0.0);
    at_least!(clamps, section, config, air_drag, 0.0);
    at_least!(clamps, section, config, ground_probe_margin, 0.0);
    at_least!(clamps, section, config, ground_probe_radius, 0.0);
    at_least!(clamps, section, config, feet_offset, 0.0);
    within!(clamps, section, config, input_deadzone, 0.0, 1.0);
    at_least!(clamps, section, config, deceleration, 0.0);
    at_least!(clamps, section, config, stop_speed, 0.0);
    at_least!(clamps, section, config, rotation_smooth_time, 0.0);

    if config.max_jumps < 1 {
        clamps.push(ConfigClamp {
            section,
            field: "max_jumps",
            original: config.max_jumps as f32,
            clamped: 1.0,
        });
        config.max_jumps = 1;
    }

    clamps
}

pub fn clamp_camera(config: &mut CameraConfig) -> Vec<ConfigClamp> {
    let mut clamps = Vec::new();
    let section = "camera";

    within!(clamps, section, config, follow_smoothness, 0.0, 1.0);
    at_least!(clamps, section, config, collision_radius, 0.0);
    within!(clamps, section, config, min_vertical_angle, -89.0, 89.0);
    within!(clamps, section, config, max_vertical_angle, -89.0, 89.0);

    if config.min_vertical_angle > config.max_vertical_angle {
        clamps.push(ConfigClamp {
            section,
            field: "max_vertical_angle",
            original: config.max_vertical_angle,
            clamped: config.min_vertical_angle,
        });
        config.max_vertical_angle = config.min_vertical_angle;
    }

    clamps
}

/// Clamp every section of the settings file.
/// Returns the list of clamps applied, empty if everything was in range.
pub fn validate_settings(settings: &mut ControllerSettings) -> Vec<ConfigClamp> {
    let mut clamps = clamp_movement(&mut settings.movement);
    clamps.extend(clamp_camera(&mut settings.camera));
    clamps
}
