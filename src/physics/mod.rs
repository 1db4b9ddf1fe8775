//! Physics domain: the narrow query/apply surface the movement core needs.
//!
//! The core never talks to avian directly. It casts probes through
//! [`PhysicsWorld`] and writes velocity, impulses and drag through
//! [`CharacterBody`]. The avian adapters live in `avian.rs`; the in-memory
//! fakes used by unit tests live in `testing.rs`.

mod avian;
mod layers;

#[cfg(test)]
pub(crate) mod testing;

pub use avian::{AvianBody, AvianWorld};
pub use layers::{GameLayer, mask_contains, mask_of};

use avian3d::prelude::LayerMask;
use bevy::prelude::*;

/// First surface hit by a probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// World-space contact point
    pub point: Vec3,
    /// Surface normal at the contact, pointing away from the surface
    pub normal: Vec3,
    /// Distance travelled along the cast before contact
    pub distance: f32,
}

/// World collision queries.
///
/// Degenerate casts (zero or non-finite distance, zero direction, non-positive
/// radius) report no hit instead of failing.
pub trait PhysicsWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit>;

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit>;

    fn overlap_sphere(&self, point: Vec3, radius: f32, filter: LayerMask) -> bool;
}

/// The rigid body a controller drives. The controller never owns it.
pub trait CharacterBody {
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    /// Mass-independent instantaneous velocity change.
    fn add_velocity_change(&mut self, delta: Vec3);
    /// Instantaneous impulse; the resulting velocity change scales with 1 / mass.
    fn add_impulse(&mut self, impulse: Vec3);
    fn set_drag(&mut self, drag: f32);
}

/// Validate a cast request, returning its direction if it can hit anything.
pub fn cast_direction(direction: Vec3, max_distance: f32) -> Option<Dir3> {
    if !max_distance.is_finite() || max_distance <= 0.0 {
        return None;
    }
    Dir3::new(direction).ok()
}

/// Horizontal part of `v`.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Flatten onto the horizontal plane and renormalize. Near-vertical vectors collapse to zero.
pub fn flatten_direction(v: Vec3) -> Vec3 {
    let flat = horizontal(v);
    if flat.length_squared() <= 1e-8 {
        return Vec3::ZERO;
    }
    flat.normalize()
}

/// Remove the component of `v` along `normal`.
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Clamp the body's horizontal speed to `max_speed`, leaving vertical velocity alone.
/// Returns true when the clamp had to act.
pub fn clamp_horizontal_speed(body: &mut dyn CharacterBody, max_speed: f32) -> bool {
    let velocity = body.velocity();
    let planar = horizontal(velocity);
    let speed = planar.length();
    if speed <= max_speed.max(0.0) {
        return false;
    }

    let clamped = planar * (max_speed.max(0.0) / speed);
    body.set_velocity(Vec3::new(clamped.x, velocity.y, clamped.z));
    true
}
