//! Movement domain: the character state machine owned by a movement system.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MovementMode {
    Grounded,
    /// Spawned characters start here until the first ground probe lands them.
    #[default]
    Airborne,
    /// Set on the tick a jump impulse is applied; lasts until the next grounded tick.
    Jumping,
}

impl MovementMode {
    pub fn is_grounded(self) -> bool {
        self == MovementMode::Grounded
    }
}

/// Snapshot of one character's movement state after its latest tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterState {
    pub mode: MovementMode,
    pub jumps_used_since_grounded: u32,
    /// Time of the latest grounded probe, `-inf` before the first one
    pub last_grounded_at: f32,
    pub was_grounded_last_tick: bool,
    pub sprinting: bool,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            mode: MovementMode::default(),
            jumps_used_since_grounded: 0,
            last_grounded_at: f32::NEG_INFINITY,
            was_grounded_last_tick: false,
            sprinting: false,
        }
    }
}
