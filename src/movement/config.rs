//! Movement domain: tuning values shared by every part of the movement core.

use avian3d::prelude::LayerMask;
use serde::{Deserialize, Serialize};

use crate::physics::{GameLayer, mask_of};

/// Movement tuning. Loaded once, read-only during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Base horizontal speed (m/s)
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    /// Fraction of walk speed available while airborne
    pub air_control: f32,
    /// Upward impulse applied by a jump (N*s)
    pub jump_force: f32,
    /// Seconds after leaving the ground during which a jump still counts as grounded
    pub coyote_time: f32,
    /// Consecutive jumps allowed before the character has to land again
    pub max_jumps: u32,
    pub ground_check_distance: f32,
    pub ground_layers: Vec<GameLayer>,
    pub ground_drag: f32,
    pub air_drag: f32,
    /// Height above the feet the ground probe starts from
    pub ground_probe_margin: f32,
    /// 0 casts a ray, anything larger casts a sphere of that radius
    pub ground_probe_radius: f32,
    /// Distance from the body origin down to the feet
    pub feet_offset: f32,
    /// Move input below this magnitude counts as no input
    pub input_deadzone: f32,
    /// Horizontal speed removed per second while there is no input
    pub deceleration: f32,
    /// Horizontal speed under which an idle body snaps to rest
    pub stop_speed: f32,
    pub rotation_smooth_time: f32,
    /// When set, an airborne character outside the coyote window can only
    /// spend extra jumps, never the first one.
    pub coyote_gates_first_jump: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_multiplier: 1.6,
            air_control: 0.4,
            jump_force: 6.0,
            coyote_time: 0.15,
            max_jumps: 1,
            ground_check_distance: 0.2,
            ground_layers: vec![GameLayer::Ground],
            ground_drag: 1.0,
            air_drag: 0.1,
            ground_probe_margin: 0.1,
            ground_probe_radius: 0.0,
            feet_offset: 0.9,
            input_deadzone: 0.1,
            deceleration: 20.0,
            stop_speed: 0.2,
            rotation_smooth_time: 0.12,
            coyote_gates_first_jump: false,
        }
    }
}

impl MovementConfig {
    pub fn sprint_speed(&self) -> f32 {
        self.walk_speed * self.sprint_multiplier
    }

    pub fn air_speed(&self) -> f32 {
        self.walk_speed * self.air_control
    }

    pub fn ground_mask(&self) -> LayerMask {
        mask_of(&self.ground_layers)
    }

    /// Drag for the current ground state.
    pub fn drag(&self, grounded: bool) -> f32 {
        if grounded {
            self.ground_drag
        } else {
            self.air_drag
        }
    }
}
