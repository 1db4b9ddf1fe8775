//! Input domain: sampling and backend lifecycle systems.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::InputSettings;
use crate::input::{ActiveInput, DeviceState, InputLatch, build_source};

/// Poll the active backend once per frame and publish the result.
pub(crate) fn sample_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    mut active: ResMut<ActiveInput>,
    mut latch: ResMut<InputLatch>,
) {
    let devices = DeviceState {
        keys: &keys,
        mouse_delta: mouse_motion.map(|m| m.delta).unwrap_or(Vec2::ZERO),
    };

    let frame = active.source_mut().poll(&devices);
    latch.store(frame);
}

/// Disable input while the primary window is unfocused.
pub(crate) fn follow_window_focus(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut active: ResMut<ActiveInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let source = active.source_mut();
    if window.focused && !source.is_enabled() {
        source.enable();
        debug!("Input '{}' enabled (window focused)", source.name());
    } else if !window.focused && source.is_enabled() {
        source.disable();
        debug!("Input '{}' disabled (window unfocused)", source.name());
    }
}

/// Rebuild the backend when the input settings are edited at runtime.
pub(crate) fn apply_input_settings(
    settings: Option<Res<InputSettings>>,
    mut active: ResMut<ActiveInput>,
) {
    let Some(settings) = settings else {
        return;
    };
    if !settings.is_changed() || settings.is_added() {
        return;
    }

    active.replace(build_source(settings.backend, &settings.bindings));
}
