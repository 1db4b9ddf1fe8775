//! Debug overlay for tuning the controller in a running app.
//!
//! Hotkeys:
//! - F3: ground probes, move direction and ground normal
//! - Shift+F3: camera-to-target lines
//! - F4: log the active settings as JSON

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::DebugOverlay;

use bevy::prelude::*;

use crate::debug::systems::{draw_camera_lines, draw_ground_probes, handle_debug_hotkeys};

pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(
                PostUpdate,
                (draw_ground_probes, draw_camera_lines)
                    .run_if(|overlay: Res<DebugOverlay>| overlay.any_visible()),
            );
    }
}
