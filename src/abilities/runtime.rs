//! Abilities domain: one timed ability as an explicit phase machine.
//!
//! A triggered ability walks Active -> Impact -> Cooldown -> Idle. Phase
//! ends are driven by accumulated frame time; overflow carries into the next
//! phase so zero-length phases resolve in the same tick. Nothing can cancel
//! a sequence once it is armed.

use bevy::prelude::*;
use serde::Serialize;
use std::time::Duration;

use crate::content::AbilityTuning;
use crate::core::PlayerEvent;
use crate::movement::{Facing, TickContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbilityKind {
    /// Horizontal burst in the facing direction, gravity suspended
    Dash,
    /// Downward burst that suspends normal control until it settles
    Slam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AbilityPhase {
    /// Ready to trigger once `enabled` is set
    #[default]
    Idle,
    /// Driving velocity
    Active,
    /// Velocity released but still active (impact effect playing)
    Impact,
    Cooldown,
}

fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

#[derive(Debug, Clone)]
pub struct AbilityRuntime {
    kind: AbilityKind,
    speed: f32,
    active_time: Duration,
    impact_time: Duration,
    cooldown: Duration,
    phase: AbilityPhase,
    elapsed: Duration,
    enabled: bool,
    active: bool,
    saved_gravity: Option<f32>,
}

impl AbilityRuntime {
    pub fn new(kind: AbilityKind, tuning: &AbilityTuning) -> Self {
        Self {
            kind,
            speed: tuning.speed,
            active_time: seconds(tuning.active_time),
            impact_time: seconds(tuning.impact_time),
            cooldown: seconds(tuning.cooldown),
            phase: AbilityPhase::Idle,
            elapsed: Duration::ZERO,
            enabled: true,
            active: false,
            saved_gravity: None,
        }
    }

    pub fn kind(&self) -> AbilityKind {
        self.kind
    }

    pub fn phase(&self) -> AbilityPhase {
        self.phase
    }

    /// Time spent in the current phase.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining time until `enabled` comes back, zero when idle.
    pub fn time_until_ready(&self) -> Duration {
        let remaining_in_phase = self
            .phase_duration()
            .map(|limit| limit.saturating_sub(self.elapsed))
            .unwrap_or(Duration::ZERO);

        match self.phase {
            AbilityPhase::Idle => Duration::ZERO,
            AbilityPhase::Active => remaining_in_phase + self.impact_time + self.cooldown,
            AbilityPhase::Impact => remaining_in_phase + self.cooldown,
            AbilityPhase::Cooldown => remaining_in_phase,
        }
    }

    fn phase_duration(&self) -> Option<Duration> {
        match self.phase {
            AbilityPhase::Idle => None,
            AbilityPhase::Active => Some(self.active_time),
            AbilityPhase::Impact => Some(self.impact_time),
            AbilityPhase::Cooldown => Some(self.cooldown),
        }
    }

    /// Start the sequence. Callers check `enabled` first.
    pub(crate) fn arm(&mut self, facing: Facing, ctx: &mut TickContext) {
        self.enabled = false;
        self.active = true;
        self.phase = AbilityPhase::Active;
        self.elapsed = Duration::ZERO;

        match self.kind {
            AbilityKind::Dash => {
                self.saved_gravity = Some(ctx.body.gravity_scale());
                ctx.body.set_gravity_scale(0.0);
                ctx.body
                    .set_velocity(Vec2::new(facing.sign() * self.speed, 0.0));
                ctx.signals.dash_particles = true;
            }
            AbilityKind::Slam => {
                ctx.body.set_velocity(Vec2::new(0.0, -self.speed));
            }
        }
        ctx.signals.trail_emitting = true;

        debug!("{:?} armed", self.kind);
        ctx.events
            .publish(PlayerEvent::AbilityArmed(self.kind), ctx.player);
    }

    /// Advance the phase timer by `dt`, applying every phase end reached.
    pub(crate) fn advance(&mut self, dt: Duration, ctx: &mut TickContext) {
        if self.phase == AbilityPhase::Idle {
            return;
        }

        self.elapsed += dt;
        while let Some(limit) = self.phase_duration() {
            if self.elapsed < limit {
                break;
            }
            self.elapsed -= limit;
            self.finish_phase(ctx);
        }

        if self.phase == AbilityPhase::Idle {
            self.elapsed = Duration::ZERO;
        }
    }

    fn finish_phase(&mut self, ctx: &mut TickContext) {
        match self.phase {
            AbilityPhase::Idle => {}
            AbilityPhase::Active => {
                let mut velocity = ctx.body.velocity();
                match self.kind {
                    AbilityKind::Dash => velocity.x = 0.0,
                    AbilityKind::Slam => velocity.y = 0.0,
                }
                ctx.body.set_velocity(velocity);
                ctx.signals.trail_emitting = false;

                if self.kind == AbilityKind::Dash {
                    ctx.signals.dash_particles = false;
                }
                if let Some(gravity) = self.saved_gravity.take() {
                    ctx.body.set_gravity_scale(gravity);
                }

                if self.impact_time.is_zero() {
                    self.release(ctx);
                } else {
                    ctx.signals.impact_particles = true;
                    self.phase = AbilityPhase::Impact;
                }
            }
            AbilityPhase::Impact => {
                ctx.signals.impact_particles = false;
                self.release(ctx);
            }
            AbilityPhase::Cooldown => {
                self.enabled = true;
                self.phase = AbilityPhase::Idle;
                debug!("{:?} ready", self.kind);
                ctx.events
                    .publish(PlayerEvent::AbilityReady(self.kind), ctx.player);
            }
        }
    }

    fn release(&mut self, ctx: &mut TickContext) {
        self.active = false;
        self.phase = AbilityPhase::Cooldown;
        debug!("{:?} released, cooling down", self.kind);
        ctx.events
            .publish(PlayerEvent::AbilityReleased(self.kind), ctx.player);
    }
}
