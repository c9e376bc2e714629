//! Content domain: data-driven stats and level definitions loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    BlockDef, CharacterSpawnDef, CloneSpawnDef, GravityZoneDef, InputSourceDef, LevelData,
    LevelDef,
};
pub use loader::{ContentLoadError, LEVEL_FILE, STATS_FILE, load_level, load_stats, parse_ron};
pub use validation::{ValidationError, validate_level, validate_stats};

use bevy::prelude::*;
use std::path::PathBuf;

/// Where content files are read from
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub base: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            base: PathBuf::from("assets/data"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(PreStartup, load_content);
    }
}

/// Stats are required: without them no controller runs. The level falls back
/// to the built-in room.
fn load_content(mut commands: Commands, paths: Res<ContentPaths>) {
    match load_stats(&paths.base) {
        Ok(stats) => {
            info!(
                "Loaded movement stats: max_speed={}, jump_power={}, full_jump_height={:.2}",
                stats.max_speed,
                stats.jump_power,
                stats.full_jump_height()
            );
            commands.insert_resource(stats);
        }
        Err(e) => {
            error!("{}; movement controllers will be disabled", e);
        }
    }

    let level = match load_level(&paths.base) {
        Ok(level) => {
            info!(
                "Loaded level '{}': {} blocks, {} gravity zones",
                level.name,
                level.blocks.len(),
                level.gravity_zones.len()
            );
            level
        }
        Err(e) if e.is_missing() => {
            warn!("{}; using the built-in level", e);
            LevelDef::default()
        }
        Err(e) => {
            error!("{}; using the built-in level", e);
            LevelDef::default()
        }
    };

    commands.insert_resource(LevelData(level));
}
