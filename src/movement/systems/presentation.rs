//! Movement domain: mirror presentation signals onto sprites.

use bevy::prelude::*;

use crate::movement::{Player, PlayerEffect, PresentationSignals};

pub(crate) fn sync_presentation(
    mut players: Query<(&PresentationSignals, &mut Sprite), With<Player>>,
    mut effects: Query<(&PlayerEffect, &ChildOf, &mut Visibility), Without<Player>>,
) {
    for (signals, mut sprite) in &mut players {
        if sprite.flip_x != signals.flip_x {
            sprite.flip_x = signals.flip_x;
        }
    }

    for (effect, child_of, mut visibility) in &mut effects {
        let Ok((signals, _)) = players.get(child_of.parent()) else {
            continue;
        };

        let wanted = if effect.is_on(signals) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
