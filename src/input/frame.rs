//! Input domain: the per-tick input snapshot.

use bevy::prelude::*;

/// One sampled frame of player intent.
///
/// `move_axis` is clamped into `[-1, 1]` on both axes at construction. Frames
/// are plain values: they are built once by an input source and read by one
/// movement tick and one camera tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    move_axis: Vec2,
    look_axis: Vec2,
    jump_held: bool,
    jump_edge: bool,
    sprint_held: bool,
}

impl InputFrame {
    pub fn new(move_axis: Vec2, look_axis: Vec2) -> Self {
        Self {
            move_axis: move_axis.clamp(Vec2::NEG_ONE, Vec2::ONE),
            look_axis,
            ..default()
        }
    }

    /// Frame with only a move axis, convenient for scripted input.
    pub fn moving(move_axis: Vec2) -> Self {
        Self::new(move_axis, Vec2::ZERO)
    }

    pub fn with_jump(mut self, held: bool, edge: bool) -> Self {
        self.jump_held = held;
        self.jump_edge = edge;
        self
    }

    pub fn with_sprint(mut self, held: bool) -> Self {
        self.sprint_held = held;
        self
    }

    pub(crate) fn with_jump_edge(mut self, edge: bool) -> Self {
        self.jump_edge = edge;
        self
    }

    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    pub fn look_axis(&self) -> Vec2 {
        self.look_axis
    }

    pub fn jump_held(&self) -> bool {
        self.jump_held
    }

    /// True only on the frame the jump control went down.
    pub fn jump_edge(&self) -> bool {
        self.jump_edge
    }

    pub fn sprint_held(&self) -> bool {
        self.sprint_held
    }

    pub fn move_magnitude(&self) -> f32 {
        self.move_axis.length()
    }
}
