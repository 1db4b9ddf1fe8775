//! Movement domain: ground probing, coyote time and ground edge detection.

use bevy::prelude::*;

use crate::movement::MovementConfig;
use crate::physics::{PhysicsWorld, ProbeHit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// Result of one [`GroundDetector::is_grounded`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundCheck {
    pub grounded: bool,
    pub hit: Option<ProbeHit>,
    /// Set only on the call where the grounded state flipped
    pub transition: Option<GroundTransition>,
}

/// Start and length of the downward ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    pub origin: Vec3,
    pub distance: f32,
    /// 0 for a ray
    pub radius: f32,
}

impl GroundProbe {
    pub fn for_body(position: Vec3, config: &MovementConfig) -> Self {
        let radius = config.ground_probe_radius.max(0.0);
        let feet = position - Vec3::Y * config.feet_offset;
        Self {
            // A sphere probe starts with its lowest point at the margin height.
            origin: feet + Vec3::Y * (config.ground_probe_margin + radius),
            distance: config.ground_check_distance + config.ground_probe_margin,
            radius,
        }
    }

    /// Where the probe's origin ends up when it travels the full distance.
    pub fn end(&self) -> Vec3 {
        self.origin - Vec3::Y * self.distance
    }

    pub fn cast(&self, world: &dyn PhysicsWorld, config: &MovementConfig) -> Option<ProbeHit> {
        let mask = config.ground_mask();
        if self.radius > 0.0 {
            world.sphere_cast(self.origin, self.radius, Vec3::NEG_Y, self.distance, mask)
        } else {
            world.raycast(self.origin, Vec3::NEG_Y, self.distance, mask)
        }
    }
}

/// Tracks ground contact across probes.
#[derive(Debug, Clone)]
pub struct GroundDetector {
    was_grounded: bool,
    last_grounded_at: f32,
}

impl Default for GroundDetector {
    fn default() -> Self {
        Self {
            was_grounded: false,
            last_grounded_at: f32::NEG_INFINITY,
        }
    }
}

impl GroundDetector {
    /// Probe below the body and compare with the previous call.
    ///
    /// Calling twice without the world changing returns the same answer and
    /// reports no transition the second time.
    pub fn is_grounded(
        &mut self,
        world: &dyn PhysicsWorld,
        position: Vec3,
        config: &MovementConfig,
        now: f32,
    ) -> GroundCheck {
        let hit = GroundProbe::for_body(position, config).cast(world, config);
        let grounded = hit.is_some();

        let transition = match (self.was_grounded, grounded) {
            (false, true) => Some(GroundTransition::Landed),
            (true, false) => Some(GroundTransition::LeftGround),
            _ => None,
        };

        if grounded {
            self.last_grounded_at = now;
        }
        self.was_grounded = grounded;

        GroundCheck {
            grounded,
            hit,
            transition,
        }
    }

    /// Inclusive at the window edge.
    pub fn is_within_coyote_time(&self, config: &MovementConfig, now: f32) -> bool {
        now - self.last_grounded_at <= config.coyote_time
    }

    /// Surface normal below the body, `None` when the probe hits nothing.
    pub fn ground_normal(
        &self,
        world: &dyn PhysicsWorld,
        position: Vec3,
        config: &MovementConfig,
    ) -> Option<Vec3> {
        GroundProbe::for_body(position, config)
            .cast(world, config)
            .map(|hit| hit.normal)
    }

    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    pub fn last_grounded_at(&self) -> f32 {
        self.last_grounded_at
    }
}
