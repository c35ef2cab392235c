//! Core domain: camera setup and lifecycle logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{PlayerEvent, PlayerLifecycleEvent};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Subscriber that reports every lifecycle notification.
pub(crate) fn log_player_events(mut events: MessageReader<PlayerLifecycleEvent>) {
    for message in events.read() {
        match message.event {
            PlayerEvent::Jumped => info!("[PLAYER] {:?} jumped", message.player),
            PlayerEvent::Landed => info!("[PLAYER] {:?} landed", message.player),
            PlayerEvent::StoppedJump => debug!("[PLAYER] {:?} released jump", message.player),
            PlayerEvent::AbilityArmed(kind) => {
                info!("[PLAYER] {:?} {:?} armed", message.player, kind)
            }
            PlayerEvent::AbilityReleased(kind) => {
                debug!("[PLAYER] {:?} {:?} released", message.player, kind)
            }
            PlayerEvent::AbilityReady(kind) => {
                info!("[PLAYER] {:?} {:?} ready", message.player, kind)
            }
        }
    }
}
