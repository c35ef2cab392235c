//! Movement domain: jump lifecycle, velocity resolution and the per-tick
//! control path, plus the systems that bind them to avian bodies.

mod body;
mod bootstrap;
mod components;
mod controller;
mod jump;
mod resources;
mod systems;
#[cfg(test)]
mod tests;
mod velocity;

#[cfg(test)]
pub use body::SimBody;
pub use body::{KinematicBody, PlayerBody};
pub use components::{
    Facing, GameLayer, MotionState, Player, PlayerEffect, PresentationSignals, Surface,
    SurfaceCategory,
};
pub use controller::{PlayerControl, TickContext};
pub use jump::{JumpController, JumpState};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::content::{LoadTuning, PlayerTuning};
use crate::movement::bootstrap::{spawn_player, spawn_test_room};
use crate::movement::systems::{
    apply_collision_gate, detect_ground, drive_player, read_input, sync_presentation,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (spawn_test_room, spawn_player).chain().after(LoadTuning),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    apply_collision_gate,
                    drive_player,
                    sync_presentation,
                )
                    .chain()
                    .run_if(resource_exists::<PlayerTuning>),
            );
    }
}
