//! Debug domain: hotkey tests.

use bevy::prelude::*;

use super::DebugOverlay;
use super::systems::handle_debug_hotkeys;

fn hotkey_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<DebugOverlay>()
        .add_systems(Update, handle_debug_hotkeys);
    app
}

fn press(app: &mut App, keys: &[KeyCode]) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.clear();
    for key in keys {
        input.press(*key);
    }
}

#[test]
fn test_f3_toggles_probes() {
    let mut app = hotkey_app();

    press(&mut app, &[KeyCode::F3]);
    app.update();
    assert!(app.world().resource::<DebugOverlay>().show_probes);
    assert!(!app.world().resource::<DebugOverlay>().show_camera);

    // Still held: no second toggle
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();
    assert!(app.world().resource::<DebugOverlay>().show_probes);
}

#[test]
fn test_shift_f3_toggles_camera_lines() {
    let mut app = hotkey_app();

    press(&mut app, &[KeyCode::ShiftLeft, KeyCode::F3]);
    app.update();

    let overlay = app.world().resource::<DebugOverlay>();
    assert!(overlay.show_camera);
    assert!(!overlay.show_probes);
    assert!(overlay.any_visible());
}

#[test]
fn test_settings_dump_without_settings_is_harmless() {
    let mut app = hotkey_app();
    press(&mut app, &[KeyCode::F4]);
    app.update();
    assert!(!app.world().resource::<DebugOverlay>().any_visible());
}
