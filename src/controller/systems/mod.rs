//! Controller domain: system registration lives in the plugin; systems live here.

mod movement;
mod setup;

pub(crate) use movement::{rotate_characters, run_character_movement};
pub(crate) use setup::validate_controllers;
