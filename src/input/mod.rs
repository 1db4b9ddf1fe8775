//! Input domain: input frames, interchangeable backends, and the frame latch.

mod frame;
mod latch;
mod sources;
mod systems;

#[cfg(test)]
mod tests;

pub use frame::InputFrame;
pub use latch::{ActiveInput, InputLatch};
pub use sources::{
    ActionBindings, ActionMapInput, DeviceState, InputBackend, InputSource, LegacyInput,
    build_source,
};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::ControllerSet;
use crate::content::InputSettings;
use crate::input::systems::{apply_input_settings, follow_window_focus, sample_input};

pub struct ControllerInputPlugin;

impl Plugin for ControllerInputPlugin {
    fn build(&self, app: &mut App) {
        let source = match app.world().get_resource::<InputSettings>() {
            Some(settings) => build_source(settings.backend, &settings.bindings),
            None => {
                warn!("InputSettings not available, using default action map");
                build_source(InputBackend::default(), &ActionBindings::default())
            }
        };
        info!("Input backend: {}", source.name());

        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<InputLatch>()
            .insert_resource(ActiveInput::new(source))
            .add_systems(
                PreUpdate,
                (apply_input_settings, follow_window_focus, sample_input)
                    .chain()
                    .in_set(ControllerSet::Input)
                    .after(InputSystems),
            );
    }
}
