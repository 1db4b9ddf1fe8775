//! Controller domain: fixed-tick movement and frame-rate facing.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraInert, ThirdPersonCamera};
use crate::controller::{CharacterController, ControllerInert, MovementTelemetry, Player};
use crate::input::{InputFrame, InputLatch};
use crate::movement::{CameraBasis, CharacterMovementEvent};
use crate::physics::{AvianBody, AvianWorld};

/// Basis of the first live camera following `entity`, or world axes.
fn camera_basis_for(
    entity: Entity,
    cameras: &Query<(&ThirdPersonCamera, &Transform), Without<CameraInert>>,
) -> CameraBasis {
    cameras
        .iter()
        .find(|(camera, _)| camera.target == Some(entity))
        .map(|(_, transform)| CameraBasis::from_rotation(transform.rotation))
        .unwrap_or_default()
}

pub(crate) fn run_character_movement(
    time: Res<Time>,
    pipeline: Res<SpatialQueryPipeline>,
    mut latch: ResMut<InputLatch>,
    cameras: Query<(&ThirdPersonCamera, &Transform), Without<CameraInert>>,
    mut characters: Query<
        (
            Entity,
            &mut CharacterController,
            &Position,
            &mut LinearVelocity,
            &mut LinearDamping,
            &ComputedMass,
            Has<Player>,
            Option<&mut MovementTelemetry>,
        ),
        Without<ControllerInert>,
    >,
    mut events: MessageWriter<CharacterMovementEvent>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let now = time.elapsed_secs();
    // One frame per tick: the jump edge is consumed here even with several characters.
    let player_input = latch.take_physics_frame();

    for (
        entity,
        mut controller,
        position,
        mut velocity,
        mut damping,
        mass,
        is_player,
        telemetry,
    ) in &mut characters
    {
        let input = if is_player {
            player_input
        } else {
            InputFrame::default()
        };
        let camera = camera_basis_for(entity, &cameras);
        let world = AvianWorld::new(&pipeline).excluding(entity);
        let mut body = AvianBody::new(position, &mut velocity, &mut damping, mass);

        let report = controller
            .system
            .process_movement(&world, &mut body, camera, &input, now, dt);

        for event in controller.system.drain_events() {
            events.write(CharacterMovementEvent { entity, event });
        }
        if let Some(mut telemetry) = telemetry {
            telemetry.record(report);
        }
    }
}

/// Turn player characters toward their camera-relative move direction.
pub(crate) fn rotate_characters(
    time: Res<Time>,
    latch: Res<InputLatch>,
    cameras: Query<(&ThirdPersonCamera, &Transform), Without<CameraInert>>,
    mut characters: Query<
        (Entity, &mut CharacterController, &mut Rotation, &mut Transform),
        (With<Player>, Without<ControllerInert>, Without<ThirdPersonCamera>),
    >,
) {
    let move_axis = latch.latest().move_axis();
    let dt = time.delta_secs();

    for (entity, mut controller, mut rotation, mut transform) in &mut characters {
        let camera_yaw = camera_basis_for(entity, &cameras).yaw();
        let smooth_time = controller.system.config().rotation_smooth_time;

        if let Some(facing) = controller
            .rotation
            .rotate(move_axis, camera_yaw, smooth_time, dt)
        {
            rotation.0 = facing;
            transform.rotation = facing;
        }
    }
}
