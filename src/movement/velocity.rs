//! Movement domain: per-tick target velocity.

use crate::content::PlayerTuning;
use crate::movement::body::KinematicBody;
use crate::movement::components::{Facing, MotionState, PresentationSignals};
use crate::movement::jump::JumpController;

/// Turn movement intent and jump signals into the body's velocity.
///
/// When `owns_velocity` is false (an ability is driving the body) jump
/// signals stay pending and the computed velocity is discarded, but facing
/// and presentation outputs still update.
pub fn resolve_velocity(
    move_x: f32,
    jump: &mut JumpController,
    motion: &mut MotionState,
    signals: &mut PresentationSignals,
    tuning: &PlayerTuning,
    body: &mut dyn KinematicBody,
    owns_velocity: bool,
) {
    let grounded = body.is_grounded();
    let mut velocity = body.velocity();

    if owns_velocity {
        if jump.take_impulse() && grounded {
            velocity.y = tuning.takeoff_velocity();
        } else if jump.take_stop_jump() && velocity.y > 0.0 {
            velocity.y *= tuning.jump_deceleration;
        }
    }

    velocity.x = move_x * tuning.max_speed;

    if move_x > tuning.facing_deadzone {
        motion.facing = Facing::Right;
    } else if move_x < -tuning.facing_deadzone {
        motion.facing = Facing::Left;
    }

    if owns_velocity {
        body.set_velocity(velocity);
    }

    let shown = body.velocity();
    signals.flip_x = motion.facing == Facing::Left;
    signals.grounded = grounded;
    signals.speed_fraction = if tuning.max_speed > 0.0 {
        shown.x.abs() / tuning.max_speed
    } else {
        0.0
    };
}
