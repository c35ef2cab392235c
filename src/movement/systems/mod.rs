//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod presentation;

pub(crate) use collisions::{apply_collision_gate, detect_ground};
pub(crate) use input::read_input;
pub(crate) use movement::drive_player;
pub(crate) use presentation::sync_presentation;
