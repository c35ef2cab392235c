//! Content domain: player tuning data, loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{AbilityTuning, PlayerTuning};
pub use loader::{ContentLoadError, TUNING_PATH, load_player_tuning, parse_player_tuning};
pub use validation::{ValidationError, validate_tuning};

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

/// Startup set that inserts [`PlayerTuning`]; spawning must run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_tuning.in_set(LoadTuning));
    }
}

/// Load, validate and install the tuning. Bad tuning stops the app.
fn load_tuning(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    let path = Path::new(TUNING_PATH);

    let tuning = if path.exists() {
        match load_player_tuning(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                error!("{}", e);
                exit.write(AppExit::error());
                return;
            }
        }
    } else {
        warn!("{} not found, using default player tuning", path.display());
        PlayerTuning::default()
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        error!("Player tuning rejected with {} error(s)", errors.len());
        exit.write(AppExit::error());
        return;
    }

    info!(
        "Player tuning loaded: max_speed={}, takeoff={}, jump_height={:.0}, dash_speed={}, slam_speed={}",
        tuning.max_speed,
        tuning.takeoff_velocity(),
        tuning.jump_height(),
        tuning.dash.speed,
        tuning.slam.speed
    );

    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
    commands.insert_resource(tuning);
}
