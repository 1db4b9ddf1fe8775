//! Physics domain: avian3d adapters for the query/apply traits.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::physics::{CharacterBody, PhysicsWorld, ProbeHit, cast_direction};

/// [`PhysicsWorld`] backed by avian's spatial query pipeline.
pub struct AvianWorld<'a> {
    pipeline: &'a SpatialQueryPipeline,
    excluded: Option<Entity>,
}

impl<'a> AvianWorld<'a> {
    pub fn new(pipeline: &'a SpatialQueryPipeline) -> Self {
        Self {
            pipeline,
            excluded: None,
        }
    }

    /// Ignore `entity` in every query (usually the character casting the probe).
    pub fn excluding(mut self, entity: Entity) -> Self {
        self.excluded = Some(entity);
        self
    }

    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        let filter = SpatialQueryFilter::from_mask(mask);
        match self.excluded {
            Some(entity) => filter.with_excluded_entities([entity]),
            None => filter,
        }
    }
}

impl PhysicsWorld for AvianWorld<'_> {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit> {
        let dir = cast_direction(direction, max_distance)?;

        self.pipeline
            .cast_ray(origin, dir, max_distance, true, &self.filter(filter))
            .map(|hit| ProbeHit {
                point: origin + *dir * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
            })
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<ProbeHit> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let dir = cast_direction(direction, max_distance)?;

        self.pipeline
            .cast_shape(
                &Collider::sphere(radius),
                origin,
                Quat::IDENTITY,
                dir,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter(filter),
            )
            .map(|hit| ProbeHit {
                point: hit.point1,
                normal: hit.normal1,
                distance: hit.distance,
            })
    }

    fn overlap_sphere(&self, point: Vec3, radius: f32, filter: LayerMask) -> bool {
        if !radius.is_finite() || radius <= 0.0 {
            return false;
        }

        !self
            .pipeline
            .shape_intersections(
                &Collider::sphere(radius),
                point,
                Quat::IDENTITY,
                &self.filter(filter),
            )
            .is_empty()
    }
}

/// [`CharacterBody`] over the avian components of one dynamic body.
pub struct AvianBody<'a> {
    position: Vec3,
    velocity: &'a mut LinearVelocity,
    damping: &'a mut LinearDamping,
    mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        position: &Position,
        velocity: &'a mut LinearVelocity,
        damping: &'a mut LinearDamping,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            position: position.0,
            velocity,
            damping,
            mass: mass.value(),
        }
    }
}

impl CharacterBody for AvianBody<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn add_velocity_change(&mut self, delta: Vec3) {
        self.velocity.0 += delta;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        // Impulses go straight into velocity: delta_v = impulse / mass
        if self.mass <= 0.0 || !self.mass.is_finite() {
            warn!("Dropping impulse {:?}: body has no usable mass", impulse);
            return;
        }
        self.velocity.0 += impulse / self.mass;
    }

    fn set_drag(&mut self, drag: f32) {
        if self.damping.0 != drag {
            self.damping.0 = drag;
        }
    }
}
