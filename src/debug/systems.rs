//! Debug domain: hotkeys and overlay refresh.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{Abilities, CollisionGate};
use crate::debug::state::{DebugState, PlayerSnapshot};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{JumpController, MotionState, Player};

type SnapshotQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static JumpController,
        &'static Abilities,
        &'static CollisionGate,
        &'static MotionState,
        &'static LinearVelocity,
        &'static GravityScale,
    ),
    With<Player>,
>;

fn capture(query: &SnapshotQuery) -> Option<PlayerSnapshot> {
    let (jump, abilities, gate, motion, velocity, gravity) = query.iter().next()?;
    Some(PlayerSnapshot::capture(
        jump, abilities, gate, motion, velocity.0, gravity.0,
    ))
}

/// F1 overlay, F2 JSON snapshot to the log, F3 toggle player control.
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    snapshot_query: SnapshotQuery,
    mut motion_query: Query<&mut MotionState, With<Player>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "[DEBUG] Info overlay {}",
            if debug_state.show_info { "ON" } else { "OFF" }
        );

        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        match capture(&snapshot_query).map(|snapshot| serde_json::to_string(&snapshot)) {
            Some(Ok(json)) => info!("[DEBUG] Player snapshot: {}", json),
            Some(Err(err)) => warn!("[DEBUG] Failed to serialize snapshot: {}", err),
            None => warn!("[DEBUG] No player to snapshot"),
        }
    }

    if keyboard.just_pressed(KeyCode::F3) {
        for mut motion in &mut motion_query {
            motion.control_enabled = !motion.control_enabled;
            info!(
                "[DEBUG] Player control {}",
                if motion.control_enabled { "ON" } else { "OFF" }
            );
        }
    }
}

pub(crate) fn update_debug_info_overlay(
    snapshot_query: SnapshotQuery,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };
    if let Some(snapshot) = capture(&snapshot_query) {
        **text = snapshot.overlay_text();
    }
}
