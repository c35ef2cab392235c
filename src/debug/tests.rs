//! Debug domain: snapshot contents.

use bevy::prelude::*;

use super::PlayerSnapshot;
use crate::abilities::{Abilities, AbilityPhase, CollisionGate};
use crate::content::PlayerTuning;
use crate::core::PlayerEvent;
use crate::movement::{
    Facing, JumpController, JumpState, MotionState, PresentationSignals, SimBody,
    SurfaceCategory, TickContext,
};

fn fresh_snapshot(abilities: &Abilities) -> PlayerSnapshot {
    PlayerSnapshot::capture(
        &JumpController::default(),
        abilities,
        &CollisionGate::new(SurfaceCategory::Level),
        &MotionState::default(),
        Vec2::new(12.0, -3.0),
        1.0,
    )
}

#[test]
fn test_snapshot_of_idle_player() {
    let abilities = Abilities::from_tuning(&PlayerTuning::default());
    let snapshot = fresh_snapshot(&abilities);

    assert_eq!(snapshot.jump, JumpState::Grounded);
    assert_eq!(snapshot.facing, Facing::Right);
    assert!(snapshot.control_enabled);
    assert_eq!(snapshot.velocity, [12.0, -3.0]);
    assert_eq!(snapshot.dash.phase, AbilityPhase::Idle);
    assert_eq!(snapshot.dash.ready_in_secs, 0.0);
    assert!(snapshot.slam_gate_open);
}

#[test]
fn test_snapshot_tracks_armed_dash() {
    let mut abilities = Abilities::from_tuning(&PlayerTuning::default());
    let mut body = SimBody::default();
    let mut signals = PresentationSignals::default();
    let mut events: Vec<(PlayerEvent, Entity)> = Vec::new();
    let mut ctx = TickContext {
        player: Entity::PLACEHOLDER,
        body: &mut body,
        signals: &mut signals,
        events: &mut events,
    };
    abilities.try_dash(Facing::Right, &mut ctx);

    let snapshot = fresh_snapshot(&abilities);
    assert_eq!(snapshot.dash.phase, AbilityPhase::Active);
    assert!(snapshot.dash.active);
    assert!(!snapshot.dash.enabled);
    assert!(snapshot.dash.ready_in_secs > 5.0);
}

#[test]
fn test_snapshot_json_fields() {
    let abilities = Abilities::from_tuning(&PlayerTuning::default());
    let json = serde_json::to_value(fresh_snapshot(&abilities)).unwrap();

    assert_eq!(json["jump"], "Grounded");
    assert_eq!(json["gate_surface"], "Level");
    assert_eq!(json["slam"]["phase"], "Idle");
    assert_eq!(json["slam_gate_open"], true);
}

#[test]
fn test_overlay_text_mentions_gate_state() {
    let abilities = Abilities::from_tuning(&PlayerTuning::default());
    let text = fresh_snapshot(&abilities).overlay_text();

    assert!(text.contains("Jump: Grounded"));
    assert!(text.contains("Gate (Level): open"));
}
