//! Controller domain: app-level tests for the ECS wiring.

use std::sync::Arc;
use std::time::Duration;

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{CharacterController, ControllerInert, ControllerPlugin, MovementTelemetry, Player};
use crate::animation::{AnimatorParameters, PARAM_JUMP};
use crate::input::{InputFrame, InputLatch};
use crate::movement::{CharacterMovementEvent, MovementConfig, MovementEvent, MovementMode};

const TICK: Duration = Duration::from_millis(20);

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<SpatialQueryPipeline>()
        .init_resource::<InputLatch>()
        .add_plugins(ControllerPlugin);
    app
}

fn spawn_character(app: &mut App, player: bool) -> Entity {
    let mut entity = app.world_mut().spawn((
        CharacterController::new(Arc::new(MovementConfig::default())),
        MovementTelemetry::default(),
        AnimatorParameters::default(),
        Transform::default(),
        Position(Vec3::new(0.0, 5.0, 0.0)),
        Rotation::default(),
        LinearVelocity::default(),
        LinearDamping::default(),
        ComputedMass::new(1.0),
        RigidBody::Dynamic,
        Collider::capsule(0.4, 1.0),
    ));
    if player {
        entity.insert(Player);
    }
    entity.id()
}

fn tick(app: &mut App) {
    app.world_mut().resource_mut::<Time>().advance_by(TICK);
    app.world_mut().run_schedule(FixedUpdate);
}

fn store_input(app: &mut App, frame: InputFrame) {
    app.world_mut().resource_mut::<InputLatch>().store(frame);
}

// -----------------------------------------------------------------------------
// Movement tick tests
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_player_gets_air_control() {
    let mut app = test_app();
    let player = spawn_character(&mut app, true);
    store_input(&mut app, InputFrame::moving(Vec2::Y));

    tick(&mut app);

    let velocity = app.world().get::<LinearVelocity>(player).unwrap();
    // walk 5 * air_control 0.4 * dt 0.02 toward -Z
    assert!((velocity.z + 0.04).abs() < 1e-5);
    assert_eq!(velocity.x, 0.0);

    let damping = app.world().get::<LinearDamping>(player).unwrap();
    assert_eq!(damping.0, MovementConfig::default().air_drag);

    let telemetry = app.world().get::<MovementTelemetry>(player).unwrap();
    assert!(!telemetry.last.grounded);
    assert_eq!(telemetry.last.mode, MovementMode::Airborne);
}

#[test]
fn test_jump_edge_consumed_by_one_tick() {
    let mut app = test_app();
    let player = spawn_character(&mut app, true);
    store_input(&mut app, InputFrame::default().with_jump(true, true));

    tick(&mut app);
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().y, 6.0);
    assert!(!app.world().resource::<InputLatch>().has_pending_jump());

    let messages = app.world().resource::<Messages<CharacterMovementEvent>>();
    let mut cursor = messages.get_cursor();
    let events: Vec<_> = cursor.read(messages).copied().collect();
    assert_eq!(
        events,
        vec![CharacterMovementEvent {
            entity: player,
            event: MovementEvent::JumpPerformed {
                jumps_used: 1,
                coyote: false,
            },
        }]
    );

    // Held but no new edge: no second jump
    app.world_mut().get_mut::<LinearVelocity>(player).unwrap().y = 0.0;
    tick(&mut app);
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().y, 0.0);
}

#[test]
fn test_non_player_ignores_input() {
    let mut app = test_app();
    let npc = spawn_character(&mut app, false);
    store_input(&mut app, InputFrame::moving(Vec2::X).with_jump(true, true));

    tick(&mut app);

    assert_eq!(app.world().get::<LinearVelocity>(npc).unwrap().0, Vec3::ZERO);
}

#[test]
fn test_inert_controller_is_skipped() {
    let mut app = test_app();
    let player = spawn_character(&mut app, true);
    app.world_mut().entity_mut(player).insert(ControllerInert);
    store_input(&mut app, InputFrame::moving(Vec2::Y));

    tick(&mut app);

    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0, Vec3::ZERO);
    assert_eq!(
        app.world().get::<MovementTelemetry>(player).unwrap().last,
        default()
    );
}

// -----------------------------------------------------------------------------
// Setup tests
// -----------------------------------------------------------------------------

#[test]
fn test_controller_without_rigid_body_is_inert() {
    let mut app = test_app();
    let entity = app
        .world_mut()
        .spawn((
            CharacterController::new(Arc::new(MovementConfig::default())),
            Collider::capsule(0.4, 1.0),
        ))
        .id();

    app.world_mut().run_schedule(PreUpdate);

    assert!(app.world().get::<ControllerInert>(entity).is_some());
}

#[test]
fn test_missing_damping_gets_default() {
    let mut app = test_app();
    let entity = app
        .world_mut()
        .spawn((
            CharacterController::new(Arc::new(MovementConfig::default())),
            RigidBody::Dynamic,
            Collider::capsule(0.4, 1.0),
        ))
        .id();

    app.world_mut().run_schedule(PreUpdate);

    assert!(app.world().get::<ControllerInert>(entity).is_none());
    assert!(app.world().get::<LinearDamping>(entity).is_some());
}

// -----------------------------------------------------------------------------
// Presentation tests
// -----------------------------------------------------------------------------

#[test]
fn test_player_turns_toward_move_direction() {
    let mut app = test_app();
    let player = spawn_character(&mut app, true);
    store_input(&mut app, InputFrame::moving(Vec2::X));

    app.world_mut().resource_mut::<Time>().advance_by(TICK);
    app.world_mut().run_schedule(Update);

    let controller = app.world().get::<CharacterController>(player).unwrap();
    // Target is -90 degrees (facing +X); one frame only gets part of the way
    let yaw = controller.rotation.yaw();
    assert!(yaw < 0.0 && yaw > -std::f32::consts::FRAC_PI_2);

    let rotation = app.world().get::<Rotation>(player).unwrap();
    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(rotation.0, transform.rotation);
    assert_ne!(transform.rotation, Quat::IDENTITY);
}

#[test]
fn test_jump_reaches_animator_once() {
    let mut app = test_app();
    let player = spawn_character(&mut app, true);
    store_input(&mut app, InputFrame::default().with_jump(true, true));

    tick(&mut app);
    app.world_mut().run_schedule(Update);
    let parameters = app.world().get::<AnimatorParameters>(player).unwrap();
    assert_eq!(parameters.bool(PARAM_JUMP), Some(true));

    app.world_mut().run_schedule(Update);
    let parameters = app.world().get::<AnimatorParameters>(player).unwrap();
    assert_eq!(parameters.bool(PARAM_JUMP), Some(false));
}
