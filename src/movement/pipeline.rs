//! Movement domain: the per-tick movement pipeline.

use std::sync::Arc;

use bevy::prelude::*;
use serde::Serialize;

use crate::input::InputFrame;
use crate::movement::{
    CharacterState, GroundDetector, GroundTransition, JumpHandler, JumpInput, MovementBehavior,
    MovementConfig, MovementEvent, MovementMode, SpeedTable, yaw_of,
};
use crate::physics::{
    CharacterBody, PhysicsWorld, clamp_horizontal_speed, flatten_direction, horizontal,
    project_on_plane,
};

/// Horizontal basis of the camera the character is steered relative to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self::WORLD
    }
}

impl CameraBasis {
    /// No camera: forward is -Z, right is +X.
    pub const WORLD: Self = Self {
        forward: Vec3::NEG_Z,
        right: Vec3::X,
    };

    /// Basis of a camera with this rotation, flattened onto the horizontal plane.
    /// Falls back to [`CameraBasis::WORLD`] when the camera looks straight up or down.
    pub fn from_rotation(rotation: Quat) -> Self {
        let forward = flatten_direction(rotation * Vec3::NEG_Z);
        let right = flatten_direction(rotation * Vec3::X);
        if forward == Vec3::ZERO || right == Vec3::ZERO {
            return Self::WORLD;
        }
        Self { forward, right }
    }

    pub fn yaw(&self) -> f32 {
        yaw_of(self.forward)
    }

    /// World direction for a move axis (`y` forward, `x` right), normalized.
    pub fn move_direction(&self, move_axis: Vec2) -> Vec3 {
        (self.forward * move_axis.y + self.right * move_axis.x).normalize_or_zero()
    }
}

/// What one tick did, for telemetry consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TickReport {
    pub grounded: bool,
    pub mode: MovementMode,
    /// `None` when the input was inside the deadzone
    pub behavior: Option<MovementBehavior>,
    pub move_direction: Vec3,
    pub ground_normal: Option<Vec3>,
    /// Velocity change added by the behavior or by deceleration
    pub velocity_change: Vec3,
    pub jumped: bool,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub input_magnitude: f32,
}

/// Ground detection, jumping, drag and steering for one character.
///
/// Events are queued in an outbox owned by the instance and handed out by
/// [`MovementSystem::drain_events`].
#[derive(Debug, Clone)]
pub struct MovementSystem {
    config: Arc<MovementConfig>,
    ground: GroundDetector,
    jump: JumpHandler,
    state: CharacterState,
    outbox: Vec<MovementEvent>,
}

impl MovementSystem {
    pub fn new(config: Arc<MovementConfig>) -> Self {
        Self {
            config,
            ground: GroundDetector::default(),
            jump: JumpHandler::default(),
            state: CharacterState::default(),
            outbox: Vec::new(),
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn ground(&self) -> &GroundDetector {
        &self.ground
    }

    pub fn jump(&self) -> &JumpHandler {
        &self.jump
    }

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[MovementEvent] {
        &self.outbox
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = MovementEvent> + '_ {
        self.outbox.drain(..)
    }

    /// Run one fixed tick against `body`.
    pub fn process_movement(
        &mut self,
        world: &dyn PhysicsWorld,
        body: &mut dyn CharacterBody,
        camera: CameraBasis,
        input: &InputFrame,
        now: f32,
        dt: f32,
    ) -> TickReport {
        let config = Arc::clone(&self.config);
        let position = body.position();

        // 1. Ground state
        let check = self.ground.is_grounded(world, position, &config, now);
        let grounded = check.grounded;
        match check.transition {
            Some(GroundTransition::Landed) => {
                debug!("Landed at {:.3}s", now);
                self.outbox.push(MovementEvent::Landed);
            }
            Some(GroundTransition::LeftGround) => {
                debug!("Left ground at {:.3}s", now);
                self.outbox.push(MovementEvent::BecameAirborne);
            }
            None => {}
        }

        // 2. Jump
        let jump_input = JumpInput {
            edge: input.jump_edge(),
            held: input.jump_held(),
            grounded,
            landed: check.transition == Some(GroundTransition::Landed),
            within_coyote: self.ground.is_within_coyote_time(&config, now),
        };
        let jump = self.jump.process_jump(body, jump_input, &config);
        if let Some(outcome) = jump {
            debug!(
                "Jump performed: jumps_used={}, coyote={}",
                outcome.jumps_used, outcome.coyote
            );
            self.outbox.push(MovementEvent::JumpPerformed {
                jumps_used: outcome.jumps_used,
                coyote: outcome.coyote,
            });
        }

        let mode = if jump.is_some() {
            MovementMode::Jumping
        } else if grounded {
            MovementMode::Grounded
        } else if self.state.mode == MovementMode::Jumping {
            MovementMode::Jumping
        } else {
            MovementMode::Airborne
        };

        // 3. Drag
        body.set_drag(config.drag(grounded));

        // 4-5. Steering, or deceleration without input
        let input_magnitude = input.move_magnitude();
        let mut report = TickReport {
            grounded,
            mode,
            jumped: jump.is_some(),
            input_magnitude,
            ..default()
        };

        if input_magnitude >= config.input_deadzone {
            let mut direction = camera.move_direction(input.move_axis());
            if grounded {
                report.ground_normal = check.hit.map(|hit| hit.normal);
                if let Some(normal) = report.ground_normal {
                    let along_slope = project_on_plane(direction, normal).normalize_or_zero();
                    if along_slope != Vec3::ZERO {
                        direction = along_slope;
                    }
                }
            }

            let behavior = MovementBehavior::select(mode, input.sprint_held());
            let table = SpeedTable::from(config.as_ref());
            let force = behavior.calculate_force(&table, direction, dt);
            body.add_velocity_change(force);

            let max_speed = if mode.is_grounded() {
                behavior.speed(&table)
            } else {
                config.sprint_speed()
            };
            clamp_horizontal_speed(body, max_speed);

            report.behavior = Some(behavior);
            report.move_direction = direction;
            report.velocity_change = force;
        } else {
            report.velocity_change = decelerate(body, &config, dt);
        }

        // 6. Sprint edges, ground only
        if grounded && input.sprint_held() != self.state.sprinting {
            self.state.sprinting = input.sprint_held();
            self.outbox.push(if self.state.sprinting {
                MovementEvent::SprintStarted
            } else {
                MovementEvent::SprintEnded
            });
        }

        self.state.mode = mode;
        self.state.jumps_used_since_grounded = self.jump.jumps_used();
        self.state.last_grounded_at = self.ground.last_grounded_at();
        self.state.was_grounded_last_tick = grounded;

        let velocity = body.velocity();
        report.horizontal_speed = horizontal(velocity).length();
        report.vertical_speed = velocity.y;
        report
    }
}

/// Bring horizontal velocity toward rest, snapping once it is slow enough.
fn decelerate(body: &mut dyn CharacterBody, config: &MovementConfig, dt: f32) -> Vec3 {
    let velocity = body.velocity();
    let planar = horizontal(velocity);
    let speed = planar.length();
    if speed == 0.0 {
        return Vec3::ZERO;
    }

    if speed < config.stop_speed {
        body.set_velocity(Vec3::new(0.0, velocity.y, 0.0));
        return -planar;
    }

    let change = -planar / speed * (config.deceleration * dt).min(speed);
    body.add_velocity_change(change);
    change
}
