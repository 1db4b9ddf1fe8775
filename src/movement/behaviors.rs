//! Movement domain: walk, sprint and air-control force functions.

use bevy::prelude::*;
use serde::Serialize;

use crate::movement::{MovementConfig, MovementMode};

/// Speeds the behaviors scale their direction by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTable {
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub air_control: f32,
}

impl From<&MovementConfig> for SpeedTable {
    fn from(config: &MovementConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            sprint_multiplier: config.sprint_multiplier,
            air_control: config.air_control,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MovementBehavior {
    Walk,
    Sprint,
    AirControl,
}

impl MovementBehavior {
    /// Sprint only counts on the ground.
    pub fn select(mode: MovementMode, sprint_held: bool) -> Self {
        match mode {
            MovementMode::Grounded if sprint_held => MovementBehavior::Sprint,
            MovementMode::Grounded => MovementBehavior::Walk,
            MovementMode::Airborne | MovementMode::Jumping => MovementBehavior::AirControl,
        }
    }

    pub fn speed(self, table: &SpeedTable) -> f32 {
        match self {
            MovementBehavior::Walk => table.walk_speed,
            MovementBehavior::Sprint => table.walk_speed * table.sprint_multiplier,
            MovementBehavior::AirControl => table.walk_speed * table.air_control,
        }
    }

    /// Velocity change for one tick. `direction` is expected to be normalized.
    pub fn calculate_force(self, table: &SpeedTable, direction: Vec3, dt: f32) -> Vec3 {
        direction * self.speed(table) * dt
    }
}
