//! Input domain: tests for frames, backends and the latch.

use bevy::prelude::*;

use super::{
    ActionBindings, ActionMapInput, ActiveInput, DeviceState, InputBackend, InputFrame,
    InputLatch, InputSource, LegacyInput, build_source,
};
use crate::content::InputSettings;

fn devices(keys: &ButtonInput<KeyCode>) -> DeviceState<'_> {
    DeviceState {
        keys,
        mouse_delta: Vec2::ZERO,
    }
}

// -----------------------------------------------------------------------------
// InputFrame tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_clamps_move_axis() {
    let frame = InputFrame::new(Vec2::new(3.0, -7.0), Vec2::new(40.0, -40.0));
    assert_eq!(frame.move_axis(), Vec2::new(1.0, -1.0));
    // Look input is raw motion and is not clamped
    assert_eq!(frame.look_axis(), Vec2::new(40.0, -40.0));
}

#[test]
fn test_frame_default_is_idle() {
    let frame = InputFrame::default();
    assert_eq!(frame.move_axis(), Vec2::ZERO);
    assert!(!frame.jump_held());
    assert!(!frame.jump_edge());
    assert!(!frame.sprint_held());
}

// -----------------------------------------------------------------------------
// LegacyInput tests
// -----------------------------------------------------------------------------

#[test]
fn test_legacy_maps_wasd_and_space() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    keys.press(KeyCode::Space);
    keys.press(KeyCode::ShiftLeft);

    let mut source = LegacyInput::default();
    let frame = source.poll(&devices(&keys));

    assert_eq!(frame.move_axis(), Vec2::new(1.0, 1.0));
    assert!(frame.jump_held());
    assert!(frame.jump_edge());
    assert!(frame.sprint_held());

    // Next frame: still held, no longer just pressed
    keys.clear();
    let frame = source.poll(&devices(&keys));
    assert!(frame.jump_held());
    assert!(!frame.jump_edge());
}

#[test]
fn test_legacy_opposing_keys_cancel() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyA);
    keys.press(KeyCode::KeyD);

    let frame = LegacyInput::default().poll(&devices(&keys));
    assert_eq!(frame.move_axis().x, 0.0);
}

#[test]
fn test_legacy_mouse_up_is_positive_look() {
    let keys = ButtonInput::<KeyCode>::default();
    let state = DeviceState {
        keys: &keys,
        mouse_delta: Vec2::new(5.0, -3.0),
    };

    let frame = LegacyInput::default().poll(&state);
    assert_eq!(frame.look_axis(), Vec2::new(5.0, 3.0));
}

// -----------------------------------------------------------------------------
// ActionMapInput tests
// -----------------------------------------------------------------------------

#[test]
fn test_action_map_uses_custom_bindings() {
    let bindings = ActionBindings {
        move_forward: vec![KeyCode::KeyI],
        move_back: vec![KeyCode::KeyK],
        move_left: vec![KeyCode::KeyJ],
        move_right: vec![KeyCode::KeyL],
        jump: vec![KeyCode::KeyU],
        sprint: vec![KeyCode::KeyO],
        ..default()
    };
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyI);
    keys.press(KeyCode::KeyJ);
    keys.press(KeyCode::KeyO);
    // Default layout keys are not bound any more
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::Space);

    let frame = ActionMapInput::new(bindings).poll(&devices(&keys));
    assert_eq!(frame.move_axis(), Vec2::new(-1.0, 1.0));
    assert!(frame.sprint_held());
    assert!(!frame.jump_held());
}

#[test]
fn test_action_map_jump_edge_once_per_press() {
    let mut keys = ButtonInput::<KeyCode>::default();
    let mut source = ActionMapInput::new(ActionBindings::default());

    keys.press(KeyCode::Space);
    assert!(source.poll(&devices(&keys)).jump_edge());
    assert!(!source.poll(&devices(&keys)).jump_edge());
    assert!(source.poll(&devices(&keys)).jump_held());

    keys.release(KeyCode::Space);
    assert!(!source.poll(&devices(&keys)).jump_held());

    keys.press(KeyCode::Space);
    assert!(source.poll(&devices(&keys)).jump_edge());
}

#[test]
fn test_action_map_look_scale_and_invert() {
    let keys = ButtonInput::<KeyCode>::default();
    let state = DeviceState {
        keys: &keys,
        mouse_delta: Vec2::new(2.0, 4.0),
    };

    let mut plain = ActionMapInput::new(ActionBindings {
        look_scale: 0.5,
        ..default()
    });
    assert_eq!(plain.poll(&state).look_axis(), Vec2::new(1.0, -2.0));

    let mut inverted = ActionMapInput::new(ActionBindings {
        look_scale: 0.5,
        invert_look_y: true,
        ..default()
    });
    assert_eq!(inverted.poll(&state).look_axis(), Vec2::new(1.0, 2.0));
}

#[test]
fn test_disabled_source_reports_idle_frames() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::Space);

    let mut source = ActionMapInput::new(ActionBindings::default());
    source.disable();
    assert!(!source.is_enabled());
    assert_eq!(source.poll(&devices(&keys)), InputFrame::default());

    // Jump still held from before: resuming must not invent an edge
    source.enable();
    let frame = source.poll(&devices(&keys));
    assert_eq!(frame.move_axis(), Vec2::new(0.0, 1.0));
    assert!(frame.jump_held());
    assert!(!frame.jump_edge());
}

#[test]
fn test_backends_are_interchangeable() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyS);

    for backend in [InputBackend::Legacy, InputBackend::ActionMap] {
        let mut source = build_source(backend, &ActionBindings::default());
        let frame = source.poll(&devices(&keys));
        assert_eq!(frame.move_axis(), Vec2::new(0.0, -1.0), "{}", source.name());
    }
}

#[test]
fn test_active_input_replace_toggles_lifecycle() {
    let mut active = ActiveInput::new(Box::new(LegacyInput::default()));
    let mut incoming = ActionMapInput::new(ActionBindings::default());
    incoming.disable();

    let previous = active.replace(Box::new(incoming));
    assert!(!previous.is_enabled());
    assert_eq!(previous.name(), "legacy");
    assert!(active.source().is_enabled());
    assert_eq!(active.source().name(), "action_map");
}

// -----------------------------------------------------------------------------
// InputLatch tests
// -----------------------------------------------------------------------------

#[test]
fn test_latch_last_value_wins() {
    let mut latch = InputLatch::default();
    latch.store(InputFrame::moving(Vec2::X));
    latch.store(InputFrame::moving(Vec2::Y));

    assert_eq!(latch.latest().move_axis(), Vec2::Y);
    assert_eq!(latch.take_physics_frame().move_axis(), Vec2::Y);
}

#[test]
fn test_latch_jump_edge_survives_frames_without_physics_tick() {
    let mut latch = InputLatch::default();
    latch.store(InputFrame::default().with_jump(true, true));
    // Next frame overwrites the edge before any physics tick ran
    latch.store(InputFrame::default().with_jump(true, false));

    assert!(latch.has_pending_jump());
    assert!(latch.take_physics_frame().jump_edge());
}

#[test]
fn test_latch_jump_edge_consumed_by_one_tick() {
    let mut latch = InputLatch::default();
    latch.store(InputFrame::default().with_jump(true, true));

    // Two physics ticks inside one rendered frame
    assert!(latch.take_physics_frame().jump_edge());
    let second = latch.take_physics_frame();
    assert!(!second.jump_edge());
    assert!(second.jump_held());
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[test]
fn test_sample_input_system_fills_latch() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(super::ControllerInputPlugin);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    app.update();

    let latch = app.world().resource::<InputLatch>();
    assert_eq!(latch.latest().move_axis(), Vec2::new(0.0, 1.0));
}

#[test]
fn test_editing_input_settings_swaps_backend() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(InputSettings::default())
        .add_plugins(super::ControllerInputPlugin);
    app.update();
    assert_eq!(app.world().resource::<ActiveInput>().source().name(), "action_map");

    app.world_mut().resource_mut::<InputSettings>().backend = InputBackend::Legacy;
    app.update();
    assert_eq!(app.world().resource::<ActiveInput>().source().name(), "legacy");

    // Legacy WASD works straight away with the new backend
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyD);
    app.update();
    let latch = app.world().resource::<InputLatch>();
    assert_eq!(latch.latest().move_axis(), Vec2::new(1.0, 0.0));
}
