//! Movement domain: jump lifecycle state machine.

use bevy::prelude::*;
use serde::Serialize;

use crate::core::{PlayerEvent, PlayerEventPublisher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum JumpState {
    #[default]
    Grounded,
    /// Held for exactly one evaluation before the impulse
    PrepareToJump,
    Jumping,
    InFlight,
    /// Held for exactly one evaluation after touchdown
    Landed,
}

#[derive(Component, Debug, Default)]
pub struct JumpController {
    pub state: JumpState,
    /// Raised on PrepareToJump -> Jumping, held until the velocity resolver
    /// consumes it (deferred while a dash drives the body)
    jump_impulse: bool,
    /// Raised on jump release, consumed by the velocity resolver
    stop_jump: bool,
}

impl JumpController {
    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn impulse_pending(&self) -> bool {
        self.jump_impulse
    }

    pub fn stop_pending(&self) -> bool {
        self.stop_jump
    }

    /// Jump button released. Accepted in every state.
    pub fn release(&mut self, player: Entity, events: &mut dyn PlayerEventPublisher) {
        self.stop_jump = true;
        events.publish(PlayerEvent::StoppedJump, player);
    }

    /// Run one evaluation. Exactly one state transition can happen per call.
    pub fn evaluate(
        &mut self,
        jump_pressed: bool,
        grounded: bool,
        player: Entity,
        events: &mut dyn PlayerEventPublisher,
    ) {
        match self.state {
            JumpState::Grounded => {
                if jump_pressed {
                    debug!("Jump requested");
                    self.state = JumpState::PrepareToJump;
                }
            }
            JumpState::PrepareToJump => {
                self.state = JumpState::Jumping;
                self.jump_impulse = true;
                self.stop_jump = false;
            }
            JumpState::Jumping => {
                if !grounded {
                    events.publish(PlayerEvent::Jumped, player);
                    self.state = JumpState::InFlight;
                }
            }
            JumpState::InFlight => {
                if grounded {
                    events.publish(PlayerEvent::Landed, player);
                    self.state = JumpState::Landed;
                }
            }
            JumpState::Landed => {
                self.state = JumpState::Grounded;
            }
        }
    }

    /// Consume the impulse signal.
    pub fn take_impulse(&mut self) -> bool {
        std::mem::take(&mut self.jump_impulse)
    }

    /// Consume the early-release signal.
    pub fn take_stop_jump(&mut self) -> bool {
        std::mem::take(&mut self.stop_jump)
    }
}
