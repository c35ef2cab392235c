//! Debug domain: overlay state and the player snapshot it renders.

use bevy::prelude::*;
use serde::Serialize;

use crate::abilities::{Abilities, AbilityPhase, AbilityRuntime, CollisionGate};
use crate::movement::{Facing, JumpController, JumpState, MotionState, SurfaceCategory};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilitySnapshot {
    pub phase: AbilityPhase,
    pub enabled: bool,
    pub active: bool,
    pub ready_in_secs: f32,
}

impl From<&AbilityRuntime> for AbilitySnapshot {
    fn from(runtime: &AbilityRuntime) -> Self {
        Self {
            phase: runtime.phase(),
            enabled: runtime.is_enabled(),
            active: runtime.is_active(),
            ready_in_secs: runtime.time_until_ready().as_secs_f32(),
        }
    }
}

/// Point-in-time view of everything that drives the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub jump: JumpState,
    pub on_ground: bool,
    pub facing: Facing,
    pub control_enabled: bool,
    pub velocity: [f32; 2],
    pub gravity_scale: f32,
    pub dash: AbilitySnapshot,
    pub slam: AbilitySnapshot,
    pub gate_surface: SurfaceCategory,
    pub slam_gate_open: bool,
}

impl PlayerSnapshot {
    pub fn capture(
        jump: &JumpController,
        abilities: &Abilities,
        gate: &CollisionGate,
        motion: &MotionState,
        velocity: Vec2,
        gravity_scale: f32,
    ) -> Self {
        Self {
            jump: jump.state(),
            on_ground: motion.on_ground,
            facing: motion.facing,
            control_enabled: motion.control_enabled,
            velocity: velocity.to_array(),
            gravity_scale,
            dash: AbilitySnapshot::from(abilities.dash()),
            slam: AbilitySnapshot::from(abilities.slam()),
            gate_surface: gate.surface(),
            slam_gate_open: gate.slam_ready(),
        }
    }

    pub fn overlay_text(&self) -> String {
        format!(
            "Jump: {:?} (ground: {})\nFacing: {:?}  Control: {}\nVel: ({:.0}, {:.0})  Gravity: {:.2}\nDash: {:?} ready in {:.2}s\nSlam: {:?} ready in {:.2}s\nGate ({:?}): {}",
            self.jump,
            self.on_ground,
            self.facing,
            if self.control_enabled { "on" } else { "off" },
            self.velocity[0],
            self.velocity[1],
            self.gravity_scale,
            self.dash.phase,
            self.dash.ready_in_secs,
            self.slam.phase,
            self.slam.ready_in_secs,
            self.gate_surface,
            if self.slam_gate_open { "open" } else { "blocked" },
        )
    }
}
