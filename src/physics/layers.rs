//! Physics domain: collision layers shared by characters, level geometry and probes.

use avian3d::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, ramps, platforms)
    Ground,
    /// Vertical blockers the camera must not clip through
    Wall,
    /// Player character bodies
    Player,
    /// Loose dynamic props
    Prop,
}

/// Build a query mask from a list of layers. An empty list matches nothing.
pub fn mask_of(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

/// Whether `layer` passes `mask`.
pub fn mask_contains(mask: LayerMask, layer: GameLayer) -> bool {
    mask.0 & layer.to_bits() != 0
}
