//! Camera domain: follow camera tuning.

use avian3d::prelude::LayerMask;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::{GameLayer, mask_of};

/// Angles are in degrees; sensitivities are degrees per unit of look input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset from the target before orbit rotation; +Z sits behind a target facing -Z
    pub offset: Vec3,
    /// 0 snaps to the desired position, values near 1 follow lazily
    pub follow_smoothness: f32,
    pub horizontal_sensitivity: f32,
    pub vertical_sensitivity: f32,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    pub collision_enabled: bool,
    pub collision_radius: f32,
    pub collision_layers: Vec<GameLayer>,
    pub initial_horizontal_angle: f32,
    pub initial_vertical_angle: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, 6.0),
            follow_smoothness: 0.1,
            horizontal_sensitivity: 0.15,
            vertical_sensitivity: 0.15,
            min_vertical_angle: -30.0,
            max_vertical_angle: 60.0,
            collision_enabled: true,
            collision_radius: 0.25,
            collision_layers: vec![GameLayer::Ground, GameLayer::Wall],
            initial_horizontal_angle: 0.0,
            initial_vertical_angle: 10.0,
        }
    }
}

impl CameraConfig {
    pub fn collision_mask(&self) -> LayerMask {
        mask_of(&self.collision_layers)
    }
}
