//! Camera domain: target resolution and per-frame rig updates.

use avian3d::prelude::SpatialQueryPipeline;
use bevy::prelude::*;

use crate::camera::{CameraInert, ThirdPersonCamera};
use crate::controller::Player;
use crate::input::InputLatch;
use crate::physics::AvianWorld;

/// Fill in a missing camera target with the player, once, when the camera appears.
pub(crate) fn resolve_camera_targets(
    mut commands: Commands,
    mut cameras: Query<(Entity, &mut ThirdPersonCamera), Added<ThirdPersonCamera>>,
    players: Query<Entity, With<Player>>,
    transforms: Query<(), With<Transform>>,
) {
    for (entity, mut camera) in &mut cameras {
        let target = match camera.target {
            Some(target) => target,
            None => match players.iter().next() {
                Some(player) => {
                    info!("Camera {:?} has no target, following player {:?}", entity, player);
                    camera.target = Some(player);
                    player
                }
                None => {
                    error!(
                        "Camera {:?} has no target and no player exists; camera is inert",
                        entity
                    );
                    commands.entity(entity).insert(CameraInert);
                    continue;
                }
            },
        };

        if !transforms.contains(target) {
            error!(
                "Camera {:?} target {:?} has no Transform; camera is inert",
                entity, target
            );
            commands.entity(entity).insert(CameraInert);
        }
    }
}

/// Orbit, collide and smooth every follow camera, after physics has moved its target.
pub(crate) fn update_camera_rigs(
    latch: Res<InputLatch>,
    pipeline: Res<SpatialQueryPipeline>,
    targets: Query<&Transform, Without<ThirdPersonCamera>>,
    mut cameras: Query<(&mut ThirdPersonCamera, &mut Transform), Without<CameraInert>>,
) {
    let look = latch.latest().look_axis();

    for (mut camera, mut transform) in &mut cameras {
        let Some(target) = camera.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let world = AvianWorld::new(&pipeline).excluding(target);
        *transform = camera
            .rig
            .update(look, target_transform.translation, &world);
    }
}
