//! Movement domain: the kinematic body seam.
//!
//! Control logic never touches avian components directly. It reads and
//! writes the body through [`KinematicBody`], which the runtime implements
//! over `LinearVelocity`/`GravityScale` and tests implement in memory.

use bevy::prelude::*;

pub trait KinematicBody {
    fn is_grounded(&self) -> bool;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Borrowed view of the player's physics components for one frame.
pub struct PlayerBody<'a> {
    pub grounded: bool,
    pub velocity: &'a mut Vec2,
    pub gravity_scale: &'a mut f32,
}

impl KinematicBody for PlayerBody<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec2 {
        *self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self.velocity = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        *self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        *self.gravity_scale = scale;
    }
}

/// Owned body used for headless simulation.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct SimBody {
    pub grounded: bool,
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

#[cfg(test)]
impl Default for SimBody {
    fn default() -> Self {
        Self {
            grounded: true,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
        }
    }
}

#[cfg(test)]
impl KinematicBody for SimBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}
