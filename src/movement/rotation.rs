//! Movement domain: smoothed yaw-only facing.
//!
//! Yaw follows Bevy's convention: counter-clockwise seen from above, with a
//! yaw of zero facing -Z.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Yaw of a forward vector. Vertical vectors give 0.
pub fn yaw_of(forward: Vec3) -> f32 {
    if forward.x == 0.0 && forward.z == 0.0 {
        return 0.0;
    }
    (-forward.x).atan2(-forward.z)
}

/// Wrap an angle into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` carries the rate of change between calls. The result never
/// overshoots the target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// [`smooth_damp`] along the shortest arc between two angles.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + wrap_angle(target - current);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Turns a character to face its camera-relative move direction.
#[derive(Debug, Clone, Default)]
pub struct RotationHandler {
    yaw: f32,
    yaw_velocity: f32,
}

impl RotationHandler {
    pub fn new(yaw: f32) -> Self {
        Self {
            yaw: wrap_angle(yaw),
            yaw_velocity: 0.0,
        }
    }

    /// Yaw the character should face for `move_axis` seen from a camera at `camera_yaw`.
    pub fn target_yaw(move_axis: Vec2, camera_yaw: f32) -> f32 {
        camera_yaw - move_axis.x.atan2(move_axis.y)
    }

    /// Advance the facing by one frame. Returns `None` and keeps the last
    /// facing when there is no move input.
    pub fn rotate(
        &mut self,
        move_axis: Vec2,
        camera_yaw: f32,
        smooth_time: f32,
        dt: f32,
    ) -> Option<Quat> {
        if move_axis == Vec2::ZERO {
            return None;
        }

        let target = Self::target_yaw(move_axis, camera_yaw);
        let yaw = smooth_damp_angle(self.yaw, target, &mut self.yaw_velocity, smooth_time, dt);
        self.yaw = wrap_angle(yaw);
        Some(self.rotation())
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch and roll are always zero.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}
