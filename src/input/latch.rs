//! Input domain: hand-off of sampled frames between the two tick domains.

use bevy::prelude::*;

use crate::input::{InputFrame, InputSource};

/// Latest sampled frame plus a pending jump edge.
///
/// Both domains read the most recent frame (last value wins). The jump edge
/// is latched separately: it survives frames in which no physics tick runs
/// and is cleared by the first physics tick that reads it.
#[derive(Resource, Debug, Default)]
pub struct InputLatch {
    latest: InputFrame,
    jump_edge_pending: bool,
}

impl InputLatch {
    pub fn store(&mut self, frame: InputFrame) {
        self.jump_edge_pending |= frame.jump_edge();
        self.latest = frame;
    }

    /// Frame for the presentation domain (camera, facing).
    pub fn latest(&self) -> InputFrame {
        self.latest
    }

    /// Frame for one physics tick; consumes the pending jump edge.
    pub fn take_physics_frame(&mut self) -> InputFrame {
        let frame = self.latest.with_jump_edge(self.jump_edge_pending);
        self.jump_edge_pending = false;
        frame
    }

    pub fn has_pending_jump(&self) -> bool {
        self.jump_edge_pending
    }
}

/// The input backend currently feeding the latch.
#[derive(Resource)]
pub struct ActiveInput {
    source: Box<dyn InputSource>,
}

impl ActiveInput {
    pub fn new(source: Box<dyn InputSource>) -> Self {
        Self { source }
    }

    /// Swap backends; the old one is disabled and the new one enabled.
    pub fn replace(&mut self, mut source: Box<dyn InputSource>) -> Box<dyn InputSource> {
        source.enable();
        let mut previous = std::mem::replace(&mut self.source, source);
        previous.disable();
        info!(
            "Input backend switched: {} -> {}",
            previous.name(),
            self.source.name()
        );
        previous
    }

    pub fn source(&self) -> &dyn InputSource {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> &mut dyn InputSource {
        self.source.as_mut()
    }
}
