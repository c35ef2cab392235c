//! Tuning data for the player controller, deserialized from RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::SurfaceCategory;

/// Timing and speed for one timed ability.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AbilityTuning {
    /// Speed applied along the driven axis when armed
    pub speed: f32,
    /// Seconds the ability drives velocity
    pub active_time: f32,
    /// Seconds the ability stays active after releasing velocity (slam impact)
    pub impact_time: f32,
    /// Seconds before the ability can be triggered again
    pub cooldown: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_speed: f32,
    pub jump_takeoff_speed: f32,
    /// Multiplier on the takeoff speed
    pub jump_modifier: f32,
    /// Multiplier applied to upward velocity on early jump release
    pub jump_deceleration: f32,
    /// World gravity magnitude, pointing down
    pub gravity: f32,
    /// Axis magnitude needed to flip facing
    pub facing_deadzone: f32,
    /// Length of the downward ground probe below the collider
    pub ground_probe_distance: f32,
    pub dash: AbilityTuning,
    pub slam: AbilityTuning,
    /// Reject an ability trigger while the other ability is active
    pub exclusive_abilities: bool,
    /// Contact with this surface blocks slam until the contact ends
    pub slam_gate_surface: SurfaceCategory,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            jump_takeoff_speed: 460.0,
            jump_modifier: 1.5,
            jump_deceleration: 0.5,
            gravity: 1800.0,
            facing_deadzone: 0.01,
            ground_probe_distance: 4.0,
            dash: AbilityTuning {
                speed: 1100.0,
                active_time: 0.12,
                impact_time: 0.0,
                cooldown: 5.0,
            },
            slam: AbilityTuning {
                speed: 690.0,
                active_time: 0.12,
                impact_time: 0.5,
                cooldown: 5.0,
            },
            exclusive_abilities: true,
            slam_gate_surface: SurfaceCategory::Level,
        }
    }
}

impl PlayerTuning {
    /// Vertical speed applied on takeoff.
    pub fn takeoff_velocity(&self) -> f32 {
        self.jump_takeoff_speed * self.jump_modifier
    }

    /// Apex height of an uninterrupted jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let v = self.takeoff_velocity();
        v * v / (2.0 * self.gravity)
    }
}
