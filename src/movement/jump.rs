//! Movement domain: jump counting and gating.

use bevy::prelude::*;

use crate::movement::MovementConfig;
use crate::physics::CharacterBody;

/// What the jump handler needs to know about the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpInput {
    pub edge: bool,
    pub held: bool,
    pub grounded: bool,
    /// The body landed on this tick
    pub landed: bool,
    pub within_coyote: bool,
}

/// A jump that was performed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpOutcome {
    pub jumps_used: u32,
    pub coyote: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JumpHandler {
    jumps_used: u32,
    held: bool,
}

impl JumpHandler {
    /// Jumps counted against `max_jumps` on this tick.
    fn effective_jumps_used(&self, input: &JumpInput, config: &MovementConfig) -> u32 {
        if config.coyote_gates_first_jump && !input.grounded && !input.within_coyote {
            // Past the coyote window the ground jump is spent even if it was never taken.
            self.jumps_used.max(1)
        } else {
            self.jumps_used
        }
    }

    pub fn can_jump(&self, input: &JumpInput, config: &MovementConfig) -> bool {
        self.effective_jumps_used(input, config) < config.max_jumps
    }

    /// Run the jump state machine for one tick.
    ///
    /// Writes at most one velocity and one impulse to the body.
    ///
    /// Jumps are refunded only by `input.landed`. A body that jumps but never
    /// leaves ground check range (a low ceiling, say) keeps its spent jumps until it
    /// takes off and lands again.
    pub fn process_jump(
        &mut self,
        body: &mut dyn CharacterBody,
        input: JumpInput,
        config: &MovementConfig,
    ) -> Option<JumpOutcome> {
        self.held = input.held;
        if input.landed {
            self.jumps_used = 0;
        }

        if !input.edge {
            return None;
        }
        if !self.can_jump(&input, config) {
            debug!(
                "Jump refused: jumps_used={}, max_jumps={}, grounded={}",
                self.jumps_used, config.max_jumps, input.grounded
            );
            return None;
        }

        let spent = self.effective_jumps_used(&input, config);
        let velocity = body.velocity();
        body.set_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
        body.add_impulse(Vec3::Y * config.jump_force);
        self.jumps_used = spent + 1;

        Some(JumpOutcome {
            jumps_used: self.jumps_used,
            coyote: !input.grounded && input.within_coyote,
        })
    }

    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
