//! Controller domain: components attached to controlled characters.

use std::sync::Arc;

use bevy::prelude::*;

use crate::movement::{MovementConfig, MovementSystem, RotationHandler, TickReport};

/// The character driven by player input.
#[derive(Component, Debug)]
pub struct Player;

/// Movement core plus facing state for one rigid body.
#[derive(Component, Debug)]
pub struct CharacterController {
    pub system: MovementSystem,
    pub rotation: RotationHandler,
}

impl CharacterController {
    pub fn new(config: Arc<MovementConfig>) -> Self {
        Self {
            system: MovementSystem::new(config),
            rotation: RotationHandler::default(),
        }
    }

    /// Start out facing `yaw` instead of -Z.
    pub fn facing(mut self, yaw: f32) -> Self {
        self.rotation = RotationHandler::new(yaw);
        self
    }
}

/// Latest tick report, for animation and debug readers.
#[derive(Component, Debug, Default)]
pub struct MovementTelemetry {
    pub last: TickReport,
    /// A jump happened on some tick that readers have not seen yet
    jump_pending: bool,
}

impl MovementTelemetry {
    pub fn record(&mut self, report: TickReport) {
        self.jump_pending |= report.jumped;
        self.last = report;
    }

    /// Read and clear the pending jump.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }
}

/// Controller that failed setup; the movement systems skip it.
#[derive(Component, Debug)]
pub struct ControllerInert;
