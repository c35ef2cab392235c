//! Movement domain: ground detection and the slam collision gate.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::abilities::CollisionGate;
use crate::content::PlayerTuning;
use crate::movement::{GameLayer, MotionState, Player, PlayerBody, Surface};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &Collider, &mut MotionState), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Ground contact gained");
        } else if !state.on_ground && was_on_ground {
            debug!("Ground contact lost");
        }
    }
}

/// Feeds contact begin/end against tagged surfaces into the player's gate.
pub(crate) fn apply_collision_gate(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    surfaces: Query<&Surface>,
    mut players: Query<
        (
            &mut CollisionGate,
            &MotionState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok(surface) = surfaces.get(other) else {
                continue;
            };
            let Ok((mut gate, motion, mut velocity, mut gravity)) = players.get_mut(player_entity)
            else {
                continue;
            };

            let mut body = PlayerBody {
                grounded: motion.on_ground,
                velocity: &mut velocity.0,
                gravity_scale: &mut gravity.0,
            };
            if gate.contact_begin(surface.0, &mut body) {
                debug!("Gate closed: touching {:?}", surface.0);
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok(surface) = surfaces.get(other) else {
                continue;
            };
            let Ok((mut gate, ..)) = players.get_mut(player_entity) else {
                continue;
            };

            if gate.contact_end(surface.0) && gate.slam_ready() {
                debug!("Gate open: left {:?}", surface.0);
            }
        }
    }
}
