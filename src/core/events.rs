//! Core domain: player lifecycle notifications and the publish seam.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;
use serde::Serialize;

use crate::abilities::AbilityKind;

/// Tag describing what happened to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerEvent {
    /// Left the ground after a jump impulse
    Jumped,
    /// Touched down after being in flight
    Landed,
    /// Jump button released (early release cuts the ascent)
    StoppedJump,
    /// Ability armed; velocity and gravity are now owned by it
    AbilityArmed(AbilityKind),
    /// Ability active flag cleared
    AbilityReleased(AbilityKind),
    /// Cooldown complete, ability can be triggered again
    AbilityReady(AbilityKind),
}

/// Message carrying a [`PlayerEvent`] and the player that emitted it.
#[derive(Debug, Clone, Copy)]
pub struct PlayerLifecycleEvent {
    pub player: Entity,
    pub event: PlayerEvent,
}

impl Message for PlayerLifecycleEvent {}

/// Narrow publish interface the controller depends on.
pub trait PlayerEventPublisher {
    fn publish(&mut self, event: PlayerEvent, player: Entity);
}

impl PlayerEventPublisher for MessageWriter<'_, PlayerLifecycleEvent> {
    fn publish(&mut self, event: PlayerEvent, player: Entity) {
        self.write(PlayerLifecycleEvent { player, event });
    }
}

/// Collects events in order, used by headless simulation.
impl PlayerEventPublisher for Vec<(PlayerEvent, Entity)> {
    fn publish(&mut self, event: PlayerEvent, player: Entity) {
        self.push((event, player));
    }
}
