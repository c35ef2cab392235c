//! Movement domain: one control tick for the player.

use bevy::prelude::*;
use std::time::Duration;

use crate::abilities::{Abilities, CollisionGate};
use crate::content::PlayerTuning;
use crate::core::PlayerEventPublisher;
use crate::movement::body::KinematicBody;
use crate::movement::components::{MotionState, PresentationSignals};
use crate::movement::jump::JumpController;
use crate::movement::resources::MovementInput;
use crate::movement::velocity::resolve_velocity;

/// Collaborators a tick writes to: body, presentation outputs, publisher.
pub struct TickContext<'a> {
    pub player: Entity,
    pub body: &'a mut dyn KinematicBody,
    pub signals: &'a mut PresentationSignals,
    pub events: &'a mut dyn PlayerEventPublisher,
}

/// Mutable view over the player's control state for one tick.
pub struct PlayerControl<'a> {
    pub jump: &'a mut JumpController,
    pub abilities: &'a mut Abilities,
    pub gate: &'a CollisionGate,
    pub motion: &'a mut MotionState,
}

impl PlayerControl<'_> {
    /// Ability timers first, then (unless a slam holds the body) jump
    /// release, ability triggers, jump evaluation and velocity resolution,
    /// in that order.
    pub fn tick(
        &mut self,
        dt: Duration,
        input: &MovementInput,
        tuning: &PlayerTuning,
        ctx: &mut TickContext,
    ) {
        self.abilities.tick(dt, ctx);
        if self.abilities.is_slamming() {
            return;
        }

        let idle = MovementInput::idle();
        let input = if self.motion.control_enabled {
            input
        } else {
            &idle
        };

        if input.jump_just_released {
            self.jump.release(ctx.player, &mut *ctx.events);
        }
        if input.dash_just_pressed {
            self.abilities.try_dash(self.motion.facing, ctx);
        }
        if input.slam_just_pressed && self.abilities.try_slam(self.gate, ctx) {
            return;
        }

        self.jump.evaluate(
            input.jump_just_pressed,
            ctx.body.is_grounded(),
            ctx.player,
            &mut *ctx.events,
        );

        let owns_velocity = !self.abilities.is_dashing();
        resolve_velocity(
            input.axis(),
            &mut *self.jump,
            &mut *self.motion,
            &mut *ctx.signals,
            tuning,
            &mut *ctx.body,
            owns_velocity,
        );
    }
}
