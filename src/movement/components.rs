//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Component, Debug)]
pub struct MotionState {
    /// Written by ground detection, read as the body's grounded flag
    pub on_ground: bool,
    pub facing: Facing,
    /// When false, input is ignored but jumps still resolve
    pub control_enabled: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            on_ground: false,
            facing: Facing::Right,
            control_enabled: true,
        }
    }
}

/// Stable category tag for colliders, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum SurfaceCategory {
    /// The main level geometry (floor and walls)
    #[default]
    Level,
    /// Floating platforms
    Platform,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Surface(pub SurfaceCategory);

/// Output signals for sprite, animation and particle presentation.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct PresentationSignals {
    pub flip_x: bool,
    pub grounded: bool,
    /// |velocity.x| / max_speed
    pub speed_fraction: f32,
    pub trail_emitting: bool,
    pub dash_particles: bool,
    pub impact_particles: bool,
}

/// Child sprite driven by one of the presentation signals.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEffect {
    Trail,
    DashBurst,
    ImpactBurst,
}

impl PlayerEffect {
    pub fn is_on(self, signals: &PresentationSignals) -> bool {
        match self {
            PlayerEffect::Trail => signals.trail_emitting,
            PlayerEffect::DashBurst => signals.dash_particles,
            PlayerEffect::ImpactBurst => signals.impact_particles,
        }
    }
}
