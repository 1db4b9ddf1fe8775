//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Which debug drawings are on. Everything starts hidden.
#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    /// Ground probe, move direction and ground normal gizmos
    pub show_probes: bool,
    /// Line from each follow camera to its target
    pub show_camera: bool,
}

impl DebugOverlay {
    pub fn any_visible(&self) -> bool {
        self.show_probes || self.show_camera
    }
}
