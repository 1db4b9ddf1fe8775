//! Physics domain: in-memory world and body fakes for unit tests.

use avian3d::prelude::LayerMask;
use bevy::prelude::*;

use crate::physics::{
    CharacterBody, GameLayer, PhysicsWorld, ProbeHit, cast_direction, mask_contains,
};

/// One-sided infinite plane. Only probes travelling against the normal hit it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestPlane {
    pub point: Vec3,
    pub normal: Vec3,
    pub layer: GameLayer,
}

/// A world made of infinite planes.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaneWorld {
    pub planes: Vec<TestPlane>,
    pub raycasts: std::cell::Cell<u32>,
}

impl PlaneWorld {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flat ground with its surface at `height`.
    pub fn flat_ground(height: f32) -> Self {
        Self::empty().with_plane(Vec3::new(0.0, height, 0.0), Vec3::Y, GameLayer::Ground)
    }

    pub fn with_plane(mut self, point: Vec3, normal: Vec3, layer: GameLayer) -> Self {
        self.planes.push(TestPlane {
            point,
            normal: normal.normalize(),
            layer,
        });
        self
    }

    fn nearest(
        &self,
        origin: Vec3,
        radius: f32,
        dir: Dir3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit> {
        self.planes
            .iter()
            .filter(|plane| mask_contains(filter, plane.layer))
            .filter_map(|plane| {
                let approach = dir.dot(plane.normal);
                let height = (origin - plane.point).dot(plane.normal);
                if height < -radius {
                    return None;
                }
                if height <= radius {
                    // Starts touching: report an immediate hit.
                    return Some(ProbeHit {
                        point: origin - plane.normal * height,
                        normal: plane.normal,
                        distance: 0.0,
                    });
                }
                if approach >= 0.0 {
                    return None;
                }
                let distance = (height - radius) / -approach;
                (distance <= max_distance).then(|| ProbeHit {
                    point: origin + *dir * distance - plane.normal * radius,
                    normal: plane.normal,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

impl PhysicsWorld for PlaneWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit> {
        self.raycasts.set(self.raycasts.get() + 1);
        let dir = cast_direction(direction, max_distance)?;
        self.nearest(origin, 0.0, dir, max_distance, filter)
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit> {
        if radius <= 0.0 {
            return None;
        }
        let dir = cast_direction(direction, max_distance)?;
        self.nearest(origin, radius, dir, max_distance, filter)
    }

    fn overlap_sphere(&self, point: Vec3, radius: f32, filter: LayerMask) -> bool {
        self.planes
            .iter()
            .filter(|plane| mask_contains(filter, plane.layer))
            .any(|plane| (point - plane.point).dot(plane.normal).abs() <= radius)
    }
}

/// Unit-mass body that records every write.
#[derive(Debug, Clone)]
pub(crate) struct TestBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub drag: f32,
    pub mass: f32,
    pub impulses: Vec<Vec3>,
    pub velocity_changes: Vec<Vec3>,
    pub velocity_writes: u32,
}

impl TestBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            drag: 0.0,
            mass: 1.0,
            impulses: Vec::new(),
            velocity_changes: Vec::new(),
            velocity_writes: 0,
        }
    }

    pub fn clear_log(&mut self) {
        self.impulses.clear();
        self.velocity_changes.clear();
        self.velocity_writes = 0;
    }
}

impl CharacterBody for TestBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity_writes += 1;
        self.velocity = velocity;
    }

    fn add_velocity_change(&mut self, delta: Vec3) {
        self.velocity_changes.push(delta);
        self.velocity += delta;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
        self.velocity += impulse / self.mass;
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = drag;
    }
}
