//! Controller domain: one-time dependency checks for new controllers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterController, ControllerInert};
use crate::error::ControllerError;

/// Check each new controller once. Missing physics makes it inert, missing
/// damping is replaced by a default.
pub(crate) fn validate_controllers(
    mut commands: Commands,
    added: Query<
        (Entity, Has<RigidBody>, Has<Collider>, Has<LinearDamping>),
        Added<CharacterController>,
    >,
) {
    for (entity, has_body, has_collider, has_damping) in &added {
        let missing = if !has_body {
            Some("RigidBody")
        } else if !has_collider {
            Some("Collider")
        } else {
            None
        };

        if let Some(dependency) = missing {
            error!(
                "{}; controller is inert",
                ControllerError::MissingDependency { entity, dependency }
            );
            commands.entity(entity).insert(ControllerInert);
            continue;
        }

        if !has_damping {
            warn!(
                "{}; inserting default damping",
                ControllerError::MissingDependency {
                    entity,
                    dependency: "LinearDamping",
                }
            );
            commands.entity(entity).insert(LinearDamping::default());
        }

        debug!("Controller {:?} ready", entity);
    }
}
