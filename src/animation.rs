//! Animation domain: fire-and-forget parameter publishing for animators.
//!
//! Movement never reads anything back from here. A character without an
//! [`AnimatorParameters`] component simply publishes nothing.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::controller::MovementTelemetry;
use crate::movement::TickReport;

pub const PARAM_SPEED: &str = "speed";
pub const PARAM_GROUNDED: &str = "grounded";
pub const PARAM_JUMP: &str = "jump";
pub const PARAM_FREE_FALL: &str = "free_fall";
pub const PARAM_MOTION_SPEED: &str = "motion_speed";

/// Receiver of animator parameter updates.
pub trait AnimationSink {
    fn set_float(&mut self, name: &'static str, value: f32);
    fn set_bool(&mut self, name: &'static str, value: bool);
}

/// Parameter store an animation graph can read from.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParameters {
    floats: HashMap<&'static str, f32>,
    bools: HashMap<&'static str, bool>,
}

impl AnimatorParameters {
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &'static str, value: f32) {
        self.floats.insert(name, value);
    }

    fn set_bool(&mut self, name: &'static str, value: bool) {
        self.bools.insert(name, value);
    }
}

/// Write one tick's parameters. `jumped` covers every tick since the last publish.
pub fn publish_parameters(report: &TickReport, jumped: bool, sink: &mut dyn AnimationSink) {
    sink.set_float(PARAM_SPEED, report.horizontal_speed);
    sink.set_bool(PARAM_GROUNDED, report.grounded);
    sink.set_bool(PARAM_JUMP, jumped);
    sink.set_bool(
        PARAM_FREE_FALL,
        !report.grounded && report.vertical_speed < 0.0,
    );
    sink.set_float(PARAM_MOTION_SPEED, report.input_magnitude.min(1.0));
}

pub(crate) fn publish_animation_parameters(
    mut query: Query<(&mut MovementTelemetry, &mut AnimatorParameters)>,
) {
    for (mut telemetry, mut parameters) in &mut query {
        let jumped = telemetry.take_jump();
        publish_parameters(&telemetry.last, jumped, &mut *parameters);
    }
}
