//! Debug domain: hotkeys and gizmo drawing.

use avian3d::prelude::Position;
use bevy::color::palettes::css::{LIME, ORANGE, RED, SKY_BLUE, YELLOW};
use bevy::prelude::*;

use crate::camera::{CameraInert, ThirdPersonCamera};
use crate::content::ControllerSettings;
use crate::controller::{CharacterController, MovementTelemetry};
use crate::debug::state::DebugOverlay;
use crate::movement::GroundProbe;

/// F3 toggles probe drawing, Shift+F3 the camera lines, F4 dumps the active settings
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlay>,
    settings: Option<Res<ControllerSettings>>,
) {
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if keyboard.just_pressed(KeyCode::F3) {
        if shift {
            overlay.show_camera = !overlay.show_camera;
            info!("[DEBUG] Camera lines {}", on_off(overlay.show_camera));
        } else {
            overlay.show_probes = !overlay.show_probes;
            info!("[DEBUG] Ground probes {}", on_off(overlay.show_probes));
        }
    }

    if keyboard.just_pressed(KeyCode::F4) {
        match settings {
            Some(settings) => match serde_json::to_string_pretty(&*settings) {
                Ok(json) => info!("[DEBUG] Controller settings:\n{}", json),
                Err(e) => warn!("[DEBUG] Could not serialize settings: {}", e),
            },
            None => warn!("[DEBUG] No controller settings loaded"),
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

pub(crate) fn draw_ground_probes(
    overlay: Res<DebugOverlay>,
    characters: Query<(&CharacterController, &Position, Option<&MovementTelemetry>)>,
    mut gizmos: Gizmos,
) {
    if !overlay.show_probes {
        return;
    }

    for (controller, position, telemetry) in &characters {
        let config = controller.system.config();
        let probe = GroundProbe::for_body(position.0, config);
        let grounded = controller.system.state().was_grounded_last_tick;
        let color = if grounded { LIME } else { RED };

        gizmos.line(probe.origin, probe.end(), color);
        if probe.radius > 0.0 {
            gizmos.sphere(Isometry3d::from_translation(probe.end()), probe.radius, color);
        }

        let Some(telemetry) = telemetry else {
            continue;
        };
        let report = &telemetry.last;
        if report.move_direction != Vec3::ZERO {
            gizmos.arrow(position.0, position.0 + report.move_direction * 1.5, YELLOW);
        }
        if let Some(normal) = report.ground_normal {
            let feet = position.0 - Vec3::Y * config.feet_offset;
            gizmos.line(feet, feet + normal, ORANGE);
        }
    }
}

pub(crate) fn draw_camera_lines(
    overlay: Res<DebugOverlay>,
    cameras: Query<(&ThirdPersonCamera, &Transform), Without<CameraInert>>,
    targets: Query<&Transform, Without<ThirdPersonCamera>>,
    mut gizmos: Gizmos,
) {
    if !overlay.show_camera {
        return;
    }

    for (camera, transform) in &cameras {
        let Some(target) = camera.target.and_then(|t| targets.get(t).ok()) else {
            continue;
        };
        gizmos.line(transform.translation, target.translation, SKY_BLUE);
    }
}
