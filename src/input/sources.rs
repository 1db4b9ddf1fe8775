//! Input domain: interchangeable input backends.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::InputFrame;

/// Raw device state handed to an input source for one poll.
pub struct DeviceState<'a> {
    pub keys: &'a ButtonInput<KeyCode>,
    /// Mouse motion accumulated since the previous frame, in pixels
    pub mouse_delta: Vec2,
}

/// Capability interface every input backend implements.
///
/// A disabled source still answers `poll`, with an empty frame.
pub trait InputSource: Send + Sync {
    fn poll(&mut self, devices: &DeviceState) -> InputFrame;
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;
    fn name(&self) -> &'static str;
}

/// Which backend the settings file asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputBackend {
    /// Hard-wired WASD / arrows / Space / Shift
    Legacy,
    /// Bindings read from the settings file
    #[default]
    ActionMap,
}

/// Key bindings for [`ActionMapInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionBindings {
    pub move_forward: Vec<KeyCode>,
    pub move_back: Vec<KeyCode>,
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub sprint: Vec<KeyCode>,
    /// Multiplier applied to raw mouse motion before it reaches the camera
    pub look_scale: f32,
    pub invert_look_y: bool,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            move_forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            move_back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space],
            sprint: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
            look_scale: 1.0,
            invert_look_y: false,
        }
    }
}

fn any_pressed(keys: &ButtonInput<KeyCode>, bound: &[KeyCode]) -> bool {
    bound.iter().any(|key| keys.pressed(*key))
}

fn axis(keys: &ButtonInput<KeyCode>, negative: &[KeyCode], positive: &[KeyCode]) -> f32 {
    let mut value = 0.0;
    if any_pressed(keys, negative) {
        value -= 1.0;
    }
    if any_pressed(keys, positive) {
        value += 1.0;
    }
    value
}

/// Fixed keyboard layout polled directly from key state.
#[derive(Debug)]
pub struct LegacyInput {
    enabled: bool,
}

impl Default for LegacyInput {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl InputSource for LegacyInput {
    fn poll(&mut self, devices: &DeviceState) -> InputFrame {
        if !self.enabled {
            return InputFrame::default();
        }
        let keys = devices.keys;

        let x = axis(
            keys,
            &[KeyCode::KeyA, KeyCode::ArrowLeft],
            &[KeyCode::KeyD, KeyCode::ArrowRight],
        );
        let y = axis(
            keys,
            &[KeyCode::KeyS, KeyCode::ArrowDown],
            &[KeyCode::KeyW, KeyCode::ArrowUp],
        );

        // Mouse up is positive look input; screen space grows downward.
        let look = Vec2::new(devices.mouse_delta.x, -devices.mouse_delta.y);

        InputFrame::new(Vec2::new(x, y), look)
            .with_jump(
                keys.pressed(KeyCode::Space),
                keys.just_pressed(KeyCode::Space),
            )
            .with_sprint(keys.pressed(KeyCode::ShiftLeft))
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}

/// Data-driven bindings. Tracks the jump edge itself so any bound key
/// (or several at once) produces exactly one edge per press.
#[derive(Debug)]
pub struct ActionMapInput {
    bindings: ActionBindings,
    enabled: bool,
    jump_was_held: bool,
}

impl ActionMapInput {
    pub fn new(bindings: ActionBindings) -> Self {
        Self {
            bindings,
            enabled: true,
            jump_was_held: false,
        }
    }

    pub fn bindings(&self) -> &ActionBindings {
        &self.bindings
    }
}

impl InputSource for ActionMapInput {
    fn poll(&mut self, devices: &DeviceState) -> InputFrame {
        if !self.enabled {
            return InputFrame::default();
        }
        let keys = devices.keys;
        let b = &self.bindings;

        let move_axis = Vec2::new(
            axis(keys, &b.move_left, &b.move_right),
            axis(keys, &b.move_back, &b.move_forward),
        );

        let mut look = devices.mouse_delta * b.look_scale;
        if !b.invert_look_y {
            look.y = -look.y;
        }

        let jump_held = any_pressed(keys, &b.jump);
        let jump_edge = jump_held && !self.jump_was_held;
        self.jump_was_held = jump_held;

        InputFrame::new(move_axis, look)
            .with_jump(jump_held, jump_edge)
            .with_sprint(any_pressed(keys, &b.sprint))
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
        // A press still down when input resumes must not count as a new edge.
        self.jump_was_held = true;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &'static str {
        "action_map"
    }
}

/// Build the backend named by the settings.
pub fn build_source(backend: InputBackend, bindings: &ActionBindings) -> Box<dyn InputSource> {
    match backend {
        InputBackend::Legacy => Box::new(LegacyInput::default()),
        InputBackend::ActionMap => Box::new(ActionMapInput::new(bindings.clone())),
    }
}
