//! Camera domain: orbit, collision avoidance and follow smoothing.

use bevy::prelude::*;

use crate::camera::CameraConfig;
use crate::physics::PhysicsWorld;

/// Orbiting follow camera. Knows nothing about the target except its position.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    horizontal: f32,
    vertical: f32,
    /// `None` until the first update
    position: Option<Vec3>,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let vertical = config
            .initial_vertical_angle
            .clamp(config.min_vertical_angle, config.max_vertical_angle);
        Self {
            horizontal: config.initial_horizontal_angle,
            vertical,
            position: None,
            config,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Horizontal and vertical orbit angles in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.horizontal, self.vertical)
    }

    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// Accumulate look input. Up is positive `y` and tilts the view upward.
    pub fn apply_look(&mut self, look: Vec2) {
        self.horizontal = (self.horizontal + look.x * self.config.horizontal_sensitivity) % 360.0;
        self.vertical = (self.vertical - look.y * self.config.vertical_sensitivity)
            .clamp(self.config.min_vertical_angle, self.config.max_vertical_angle);
    }

    pub fn orbit_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.horizontal.to_radians(),
            -self.vertical.to_radians(),
            0.0,
        )
    }

    /// Where the camera wants to be, pulled in front of anything between it and the target.
    pub fn desired_position(&self, target: Vec3, world: &dyn PhysicsWorld) -> Vec3 {
        let desired = target + self.orbit_rotation() * self.config.offset;
        if !self.config.collision_enabled {
            return desired;
        }

        let to_camera = desired - target;
        let hit = world.sphere_cast(
            target,
            self.config.collision_radius,
            to_camera,
            to_camera.length(),
            self.config.collision_mask(),
        );
        match hit {
            Some(hit) => hit.point + hit.normal * self.config.collision_radius,
            None => desired,
        }
    }

    /// Advance one frame and return the camera transform.
    ///
    /// The smoothing factor is applied per call, not per second.
    pub fn update(&mut self, look: Vec2, target: Vec3, world: &dyn PhysicsWorld) -> Transform {
        self.apply_look(look);
        let desired = self.desired_position(target, world);

        let position = match self.position {
            Some(current) => current.lerp(desired, 1.0 - self.config.follow_smoothness),
            None => desired,
        };
        self.position = Some(position);

        let transform = Transform::from_translation(position);
        if position.distance_squared(target) > f32::EPSILON {
            transform.looking_at(target, Vec3::Y)
        } else {
            transform
        }
    }
}
