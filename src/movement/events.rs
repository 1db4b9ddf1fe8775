//! Movement domain: per-character movement events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Something that happened to one character during a movement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementEvent {
    Landed,
    BecameAirborne,
    JumpPerformed {
        /// Jumps spent since the character last landed, this one included
        jumps_used: u32,
        /// The jump was granted by the coyote window rather than ground contact
        coyote: bool,
    },
    SprintStarted,
    SprintEnded,
}

/// A [`MovementEvent`] tagged with the character it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterMovementEvent {
    pub entity: Entity,
    pub event: MovementEvent,
}

impl Message for CharacterMovementEvent {}
