//! Core domain: camera, lifecycle messages and their logging subscriber.

mod events;
mod systems;

pub use events::{PlayerEvent, PlayerEventPublisher, PlayerLifecycleEvent};

use bevy::prelude::*;

use crate::core::systems::{log_player_events, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerLifecycleEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, log_player_events);
    }
}
