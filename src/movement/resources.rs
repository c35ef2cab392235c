//! Movement domain: per-frame input sample.

use bevy::prelude::*;

/// Raw input for the current frame. Edge flags are only true on the frame
/// the button changed.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
    pub slam_just_pressed: bool,
}

impl MovementInput {
    /// Input with every signal cleared, used while control is disabled.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn axis(&self) -> f32 {
        if self.axis_x.is_finite() {
            self.axis_x.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}
