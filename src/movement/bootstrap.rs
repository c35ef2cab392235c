//! Movement domain: player and test room spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{Abilities, CollisionGate};
use crate::content::PlayerTuning;
use crate::movement::{
    GameLayer, JumpController, MotionState, Player, PlayerEffect, PresentationSignals, Surface,
    SurfaceCategory,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player with controller state built from the loaded tuning.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Option<Res<PlayerTuning>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // Tuning is missing only when loading failed and the app is exiting
    let Some(tuning) = tuning else {
        return;
    };

    info!(
        "Spawning player: max_speed={}, exclusive_abilities={}, slam gate on {:?}",
        tuning.max_speed, tuning.exclusive_abilities, tuning.slam_gate_surface
    );

    commands
        .spawn((
            // Identity & control
            (
                Player,
                MotionState::default(),
                JumpController::default(),
                Abilities::from_tuning(&tuning),
                CollisionGate::new(tuning.slam_gate_surface),
                PresentationSignals::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerEffect::Trail,
                Sprite {
                    color: Color::srgba(0.6, 0.8, 1.0, 0.4),
                    custom_size: Some(Vec2::new(PLAYER_SIZE.x * 2.0, PLAYER_SIZE.y * 0.6)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.1),
                Visibility::Hidden,
            ));
            parent.spawn((
                PlayerEffect::DashBurst,
                Sprite {
                    color: Color::srgba(1.0, 1.0, 1.0, 0.7),
                    custom_size: Some(Vec2::splat(10.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, -PLAYER_SIZE.y * 0.3, 0.1),
                Visibility::Hidden,
            ));
            parent.spawn((
                PlayerEffect::ImpactBurst,
                Sprite {
                    color: Color::srgba(1.0, 0.7, 0.3, 0.8),
                    custom_size: Some(Vec2::new(PLAYER_SIZE.x * 3.0, 8.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, -PLAYER_SIZE.y * 0.5, 0.1),
                Visibility::Hidden,
            ));
        });
}

fn spawn_block(
    commands: &mut Commands,
    category: SurfaceCategory,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        Surface(category),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let level_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Level geometry: floor and walls
    spawn_block(
        &mut commands,
        SurfaceCategory::Level,
        ground_color,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
    );
    spawn_block(
        &mut commands,
        SurfaceCategory::Level,
        level_color,
        Vec2::new(-420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );
    spawn_block(
        &mut commands,
        SurfaceCategory::Level,
        level_color,
        Vec2::new(420.0, 50.0),
        Vec2::new(40.0, 500.0),
    );

    // Platforms do not gate the slam
    spawn_block(
        &mut commands,
        SurfaceCategory::Platform,
        platform_color,
        Vec2::new(-250.0, -50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        SurfaceCategory::Platform,
        platform_color,
        Vec2::new(250.0, 50.0),
        Vec2::new(150.0, 20.0),
    );
    spawn_block(
        &mut commands,
        SurfaceCategory::Platform,
        platform_color,
        Vec2::new(0.0, 150.0),
        Vec2::new(120.0, 20.0),
    );
}
