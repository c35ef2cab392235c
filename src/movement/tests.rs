//! Movement domain: headless control-tick tests.

use bevy::prelude::*;
use std::time::Duration;

use super::*;
use crate::abilities::{Abilities, AbilityKind, CollisionGate};
use crate::content::PlayerTuning;
use crate::core::PlayerEvent;

const TICK: Duration = Duration::from_millis(10);

/// One player's control state, driven without an App.
struct Rig {
    tuning: PlayerTuning,
    body: SimBody,
    signals: PresentationSignals,
    events: Vec<(PlayerEvent, Entity)>,
    jump: JumpController,
    abilities: Abilities,
    gate: CollisionGate,
    motion: MotionState,
}

impl Rig {
    fn new() -> Self {
        Self::with_tuning(PlayerTuning::default())
    }

    fn with_tuning(tuning: PlayerTuning) -> Self {
        Self {
            abilities: Abilities::from_tuning(&tuning),
            gate: CollisionGate::new(tuning.slam_gate_surface),
            tuning,
            body: SimBody::default(),
            signals: PresentationSignals::default(),
            events: Vec::new(),
            jump: JumpController::default(),
            motion: MotionState::default(),
        }
    }

    fn tick(&mut self, input: &MovementInput) {
        let mut ctx = TickContext {
            player: Entity::PLACEHOLDER,
            body: &mut self.body,
            signals: &mut self.signals,
            events: &mut self.events,
        };
        let mut control = PlayerControl {
            jump: &mut self.jump,
            abilities: &mut self.abilities,
            gate: &self.gate,
            motion: &mut self.motion,
        };
        control.tick(TICK, input, &self.tuning, &mut ctx);
    }

    fn idle(&mut self) {
        self.tick(&MovementInput::idle());
    }

    fn event_tags(&self) -> Vec<PlayerEvent> {
        self.events.iter().map(|(event, _)| *event).collect()
    }
}

fn press_jump() -> MovementInput {
    MovementInput {
        jump_just_pressed: true,
        ..default()
    }
}

fn release_jump() -> MovementInput {
    MovementInput {
        jump_just_released: true,
        ..default()
    }
}

fn axis(value: f32) -> MovementInput {
    MovementInput {
        axis_x: value,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Jump lifecycle
// -----------------------------------------------------------------------------

#[test]
fn test_jump_walks_through_every_state() {
    let mut rig = Rig::new();

    rig.tick(&press_jump());
    assert_eq!(rig.jump.state(), JumpState::PrepareToJump);
    assert_eq!(rig.body.velocity.y, 0.0);

    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Jumping);
    assert_eq!(rig.body.velocity.y, rig.tuning.takeoff_velocity());

    // Still touching the ground the frame after the impulse
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Jumping);

    rig.body.grounded = false;
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::InFlight);

    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::InFlight);

    rig.body.grounded = true;
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Landed);

    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Grounded);

    assert_eq!(
        rig.event_tags(),
        vec![PlayerEvent::Jumped, PlayerEvent::Landed]
    );
}

#[test]
fn test_impulse_applied_exactly_once() {
    let mut rig = Rig::new();

    rig.tick(&press_jump());
    rig.idle();
    assert!(!rig.jump.impulse_pending());

    // Physics bleeds off some speed; the controller must not re-apply it
    rig.body.velocity.y = 100.0;
    rig.idle();
    assert_eq!(rig.body.velocity.y, 100.0);
}

#[test]
fn test_impulse_needs_grounded_body() {
    let mut rig = Rig::new();
    rig.body.grounded = false;

    rig.tick(&press_jump());
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Jumping);
    assert_eq!(rig.body.velocity.y, 0.0);
}

#[test]
fn test_jump_press_ignored_outside_grounded_state() {
    let mut rig = Rig::new();
    rig.jump.state = JumpState::InFlight;
    rig.body.grounded = false;

    rig.tick(&press_jump());
    assert_eq!(rig.jump.state(), JumpState::InFlight);
}

#[test]
fn test_early_release_cuts_ascent() {
    let mut rig = Rig::new();
    rig.jump.state = JumpState::InFlight;
    rig.body.grounded = false;
    rig.body.velocity.y = 400.0;

    rig.tick(&release_jump());
    assert_eq!(rig.body.velocity.y, 200.0);
    assert!(!rig.jump.stop_pending());
    assert_eq!(rig.event_tags(), vec![PlayerEvent::StoppedJump]);

    // Applied once per release
    rig.idle();
    assert_eq!(rig.body.velocity.y, 200.0);
}

#[test]
fn test_release_while_falling_keeps_velocity() {
    let mut rig = Rig::new();
    rig.jump.state = JumpState::InFlight;
    rig.body.grounded = false;
    rig.body.velocity.y = -150.0;

    rig.tick(&release_jump());
    assert_eq!(rig.body.velocity.y, -150.0);
    assert!(!rig.jump.stop_pending());
}

#[test]
fn test_release_publishes_in_any_state() {
    let mut rig = Rig::new();

    rig.tick(&release_jump());
    assert_eq!(rig.jump.state(), JumpState::Grounded);
    assert_eq!(rig.event_tags(), vec![PlayerEvent::StoppedJump]);
}

// -----------------------------------------------------------------------------
// Velocity and facing
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_speed_and_fraction() {
    let mut rig = Rig::new();

    rig.tick(&axis(0.5));
    assert_eq!(rig.body.velocity.x, 0.5 * rig.tuning.max_speed);
    assert_eq!(rig.signals.speed_fraction, 0.5);
    assert!(!rig.signals.flip_x);
    assert!(rig.signals.grounded);

    rig.tick(&axis(-1.0));
    assert_eq!(rig.body.velocity.x, -rig.tuning.max_speed);
    assert_eq!(rig.signals.speed_fraction, 1.0);
    assert!(rig.signals.flip_x);
}

#[test]
fn test_facing_holds_inside_deadzone() {
    let mut rig = Rig::new();

    rig.tick(&axis(-1.0));
    assert_eq!(rig.motion.facing, Facing::Left);

    rig.tick(&axis(0.005));
    assert_eq!(rig.motion.facing, Facing::Left);

    rig.tick(&axis(0.0));
    assert_eq!(rig.motion.facing, Facing::Left);
    assert!(rig.signals.flip_x);

    rig.tick(&axis(0.02));
    assert_eq!(rig.motion.facing, Facing::Right);
    assert!(!rig.signals.flip_x);
}

#[test]
fn test_zero_max_speed_reports_zero_fraction() {
    let mut rig = Rig::with_tuning(PlayerTuning {
        max_speed: 0.0,
        ..PlayerTuning::default()
    });

    rig.tick(&axis(1.0));
    assert_eq!(rig.body.velocity.x, 0.0);
    assert_eq!(rig.signals.speed_fraction, 0.0);
}

#[test]
fn test_axis_is_clamped() {
    assert_eq!(axis(3.0).axis(), 1.0);
    assert_eq!(axis(-2.0).axis(), -1.0);
    assert_eq!(axis(f32::NAN).axis(), 0.0);
}

// -----------------------------------------------------------------------------
// Abilities through the control tick
// -----------------------------------------------------------------------------

#[test]
fn test_slam_suspends_movement_and_jump() {
    let mut rig = Rig::new();
    rig.body.grounded = false;

    rig.tick(&MovementInput {
        slam_just_pressed: true,
        ..default()
    });
    assert_eq!(rig.body.velocity, Vec2::new(0.0, -rig.tuning.slam.speed));

    let busy = MovementInput {
        axis_x: 1.0,
        jump_just_pressed: true,
        ..default()
    };
    for _ in 0..61 {
        rig.tick(&busy);
    }
    assert_eq!(rig.body.velocity.x, 0.0);
    assert_eq!(rig.jump.state(), JumpState::Grounded);

    // Slam active clears and control resumes in the same tick
    rig.tick(&busy);
    assert!(!rig.abilities.is_slamming());
    assert_eq!(rig.body.velocity.x, rig.tuning.max_speed);
    assert_eq!(rig.jump.state(), JumpState::PrepareToJump);
}

#[test]
fn test_blocked_slam_falls_through_to_jump() {
    let mut rig = Rig::new();
    rig.gate.contact_begin(SurfaceCategory::Level, &mut rig.body);

    rig.tick(&MovementInput {
        slam_just_pressed: true,
        jump_just_pressed: true,
        ..default()
    });
    assert!(!rig.abilities.is_slamming());
    assert_eq!(rig.jump.state(), JumpState::PrepareToJump);
    assert!(rig.events.is_empty());
}

#[test]
fn test_dash_owns_velocity_while_active() {
    let mut rig = Rig::new();

    rig.tick(&MovementInput {
        dash_just_pressed: true,
        ..default()
    });
    assert_eq!(rig.body.velocity, Vec2::new(rig.tuning.dash.speed, 0.0));

    for _ in 0..11 {
        rig.tick(&axis(-1.0));
    }
    assert_eq!(rig.body.velocity, Vec2::new(rig.tuning.dash.speed, 0.0));
    assert_eq!(rig.motion.facing, Facing::Left);
    assert!(rig.signals.flip_x);

    rig.tick(&axis(-1.0));
    assert!(!rig.abilities.is_dashing());
    assert_eq!(rig.body.velocity.x, -rig.tuning.max_speed);
    assert_eq!(rig.body.gravity_scale, 1.0);
}

#[test]
fn test_control_disabled_ignores_input_but_lands() {
    let mut rig = Rig::new();
    rig.motion.control_enabled = false;

    rig.tick(&MovementInput {
        axis_x: 1.0,
        jump_just_pressed: true,
        dash_just_pressed: true,
        ..default()
    });
    assert_eq!(rig.body.velocity.x, 0.0);
    assert_eq!(rig.jump.state(), JumpState::Grounded);
    assert!(rig.abilities.dash().is_enabled());

    rig.jump.state = JumpState::InFlight;
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Landed);
    assert_eq!(rig.event_tags(), vec![PlayerEvent::Landed]);
}

#[test]
fn test_presentation_effects_follow_signals() {
    let mut rig = Rig::new();

    rig.tick(&MovementInput {
        dash_just_pressed: true,
        ..default()
    });
    assert!(PlayerEffect::Trail.is_on(&rig.signals));
    assert!(PlayerEffect::DashBurst.is_on(&rig.signals));
    assert!(!PlayerEffect::ImpactBurst.is_on(&rig.signals));

    for _ in 0..12 {
        rig.idle();
    }
    assert!(!PlayerEffect::Trail.is_on(&rig.signals));
    assert!(!PlayerEffect::DashBurst.is_on(&rig.signals));
}

#[test]
fn test_jump_pressed_with_dash_takes_off_after_dash() {
    let mut rig = Rig::new();

    rig.tick(&MovementInput {
        jump_just_pressed: true,
        dash_just_pressed: true,
        ..default()
    });
    assert_eq!(rig.jump.state(), JumpState::PrepareToJump);

    // Impulse raised while the dash owns the body stays pending
    for _ in 0..11 {
        rig.idle();
    }
    assert_eq!(rig.jump.state(), JumpState::Jumping);
    assert!(rig.jump.impulse_pending());
    assert_eq!(rig.body.velocity.y, 0.0);

    rig.idle();
    assert!(!rig.abilities.is_dashing());
    assert!(!rig.jump.impulse_pending());
    assert_eq!(rig.body.velocity.y, rig.tuning.takeoff_velocity());

    rig.body.grounded = false;
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::InFlight);

    rig.body.grounded = true;
    rig.idle();
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::Grounded);

    // The lifecycle keeps cycling
    rig.tick(&press_jump());
    assert_eq!(rig.jump.state(), JumpState::PrepareToJump);
}

#[test]
fn test_dash_right_after_jump_press_keeps_impulse() {
    let mut rig = Rig::new();

    rig.tick(&press_jump());
    rig.tick(&MovementInput {
        dash_just_pressed: true,
        ..default()
    });
    assert_eq!(rig.jump.state(), JumpState::Jumping);
    assert!(rig.jump.impulse_pending());

    for _ in 0..11 {
        rig.idle();
    }
    assert_eq!(rig.body.velocity.y, 0.0);

    rig.idle();
    assert_eq!(rig.body.velocity.y, rig.tuning.takeoff_velocity());

    rig.body.grounded = false;
    rig.idle();
    assert_eq!(rig.jump.state(), JumpState::InFlight);
    assert_eq!(
        rig.event_tags(),
        vec![
            PlayerEvent::AbilityArmed(AbilityKind::Dash),
            PlayerEvent::AbilityReleased(AbilityKind::Dash),
            PlayerEvent::Jumped,
        ]
    );
}

#[test]
fn test_release_on_slam_frame_still_publishes() {
    let mut rig = Rig::new();
    rig.jump.state = JumpState::InFlight;
    rig.body.grounded = false;
    rig.body.velocity.y = 300.0;

    rig.tick(&MovementInput {
        slam_just_pressed: true,
        jump_just_released: true,
        ..default()
    });
    assert!(rig.abilities.is_slamming());
    assert_eq!(
        rig.event_tags(),
        vec![
            PlayerEvent::StoppedJump,
            PlayerEvent::AbilityArmed(AbilityKind::Slam),
        ]
    );
}
