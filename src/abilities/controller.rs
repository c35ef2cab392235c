//! Abilities domain: dash and slam arbitration.

use bevy::prelude::*;
use std::time::Duration;

use crate::abilities::gate::CollisionGate;
use crate::abilities::runtime::{AbilityKind, AbilityRuntime};
use crate::content::PlayerTuning;
use crate::movement::{Facing, TickContext};

#[derive(Component, Debug, Clone)]
pub struct Abilities {
    dash: AbilityRuntime,
    slam: AbilityRuntime,
    /// When set, neither ability can arm while the other is active
    exclusive: bool,
}

impl Abilities {
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            dash: AbilityRuntime::new(AbilityKind::Dash, &tuning.dash),
            slam: AbilityRuntime::new(AbilityKind::Slam, &tuning.slam),
            exclusive: tuning.exclusive_abilities,
        }
    }

    pub fn dash(&self) -> &AbilityRuntime {
        &self.dash
    }

    pub fn slam(&self) -> &AbilityRuntime {
        &self.slam
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    pub fn is_slamming(&self) -> bool {
        self.slam.is_active()
    }

    /// Advance both ability timers.
    pub fn tick(&mut self, dt: Duration, ctx: &mut TickContext) {
        self.dash.advance(dt, ctx);
        self.slam.advance(dt, ctx);
    }

    /// Arm the dash if it is off cooldown. Returns whether it armed.
    pub fn try_dash(&mut self, facing: Facing, ctx: &mut TickContext) -> bool {
        if !self.dash.is_enabled() {
            debug!("Dash ignored: cooling down");
            return false;
        }
        if self.exclusive && self.slam.is_active() {
            debug!("Dash ignored: slam active");
            return false;
        }
        self.dash.arm(facing, ctx);
        true
    }

    /// Arm the slam if it is off cooldown and the collision gate allows it.
    pub fn try_slam(&mut self, gate: &CollisionGate, ctx: &mut TickContext) -> bool {
        if !self.slam.is_enabled() {
            debug!("Slam ignored: cooling down");
            return false;
        }
        if !gate.slam_ready() {
            debug!("Slam ignored: touching {:?}", gate.surface());
            return false;
        }
        if self.exclusive && self.dash.is_active() {
            debug!("Slam ignored: dash active");
            return false;
        }
        // Slam has no facing; the argument only signs the dash
        self.slam.arm(Facing::Right, ctx);
        true
    }
}
