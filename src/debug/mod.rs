//! Debug tooling for tuning the controller in a running game.
//!
//! Hotkeys:
//! - F1: toggle the player info overlay
//! - F2: log a JSON snapshot of the player's control state
//! - F3: toggle `control_enabled` on the player

mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use state::{AbilitySnapshot, DebugState, PlayerSnapshot};

use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            )
                .chain(),
        );
    }
}
