//! Movement domain: the engine-independent movement core.
//!
//! Everything here talks to the world through [`crate::physics::PhysicsWorld`]
//! and [`crate::physics::CharacterBody`], so it runs unchanged against avian
//! or against the in-memory fakes the tests use.

mod behaviors;
mod config;
mod events;
mod ground;
mod jump;
mod pipeline;
mod rotation;
mod state;


pub use behaviors::{MovementBehavior, SpeedTable};
pub use config::MovementConfig;
pub use events::{CharacterMovementEvent, MovementEvent};
pub use ground::{GroundCheck, GroundDetector, GroundProbe, GroundTransition};
pub use jump::{JumpHandler, JumpInput, JumpOutcome};
pub use pipeline::{CameraBasis, MovementSystem, TickReport};
pub use rotation::{RotationHandler, smooth_damp, smooth_damp_angle, wrap_angle, yaw_of};
pub use state::{CharacterState, MovementMode};
