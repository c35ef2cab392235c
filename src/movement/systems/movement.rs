//! Movement domain: per-frame player control.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{Abilities, CollisionGate};
use crate::content::PlayerTuning;
use crate::core::PlayerLifecycleEvent;
use crate::movement::{
    JumpController, MotionState, MovementInput, Player, PlayerBody, PlayerControl,
    PresentationSignals, TickContext,
};

pub(crate) fn drive_player(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<PlayerTuning>,
    mut events: MessageWriter<PlayerLifecycleEvent>,
    mut query: Query<
        (
            Entity,
            &mut JumpController,
            &mut Abilities,
            &CollisionGate,
            &mut MotionState,
            &mut PresentationSignals,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta();

    for (
        entity,
        mut jump,
        mut abilities,
        gate,
        mut motion,
        mut signals,
        mut velocity,
        mut gravity,
    ) in &mut query
    {
        let mut body = PlayerBody {
            grounded: motion.on_ground,
            velocity: &mut velocity.0,
            gravity_scale: &mut gravity.0,
        };
        let mut ctx = TickContext {
            player: entity,
            body: &mut body,
            signals: &mut *signals,
            events: &mut events,
        };
        let mut control = PlayerControl {
            jump: &mut *jump,
            abilities: &mut *abilities,
            gate,
            motion: &mut *motion,
        };

        control.tick(dt, &input, &tuning, &mut ctx);
    }
}
