//! Data definitions for the level RON file.
//!
//! These structs mirror the structure in assets/data/level.ron. Movement
//! tunables live in [`MovementStats`](crate::movement::MovementStats) and are
//! loaded from stats.ron directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GravityCommand;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    pub player: CharacterSpawnDef,
    pub clone: Option<CloneSpawnDef>,
    /// Seconds between automatic gravity flips of the player. None disables them.
    pub gravity_flip_interval: Option<f32>,
    pub blocks: Vec<BlockDef>,
    pub gravity_zones: Vec<GravityZoneDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterSpawnDef {
    pub position: (f32, f32),
    pub input: InputSourceDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum InputSourceDef {
    Keyboard,
    VirtualButtons,
    Wander { seed: u64, jump_chance: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CloneSpawnDef {
    pub position: (f32, f32),
    pub input: InputSourceDef,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub flip_gravity: bool,
}

/// Static solid rectangle on the ground layer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlockDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

/// Sensor rectangle that sends a gravity command to any controller entering it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GravityZoneDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
    pub command: GravityCommand,
}

impl Default for LevelDef {
    /// A closed room with a floor, a ceiling and two ledges
    fn default() -> Self {
        Self {
            schema_version: 1,
            name: "fallback_room".to_string(),
            player: CharacterSpawnDef {
                position: (-6.0, -4.0),
                input: InputSourceDef::Keyboard,
            },
            clone: Some(CloneSpawnDef {
                position: (6.0, 4.0),
                input: InputSourceDef::Keyboard,
                flip_horizontal: true,
                flip_vertical: false,
                flip_gravity: true,
            }),
            gravity_flip_interval: None,
            blocks: vec![
                BlockDef {
                    center: (0.0, -7.0),
                    size: (30.0, 1.0),
                },
                BlockDef {
                    center: (0.0, 7.0),
                    size: (30.0, 1.0),
                },
                BlockDef {
                    center: (-15.5, 0.0),
                    size: (1.0, 15.0),
                },
                BlockDef {
                    center: (15.5, 0.0),
                    size: (1.0, 15.0),
                },
                BlockDef {
                    center: (-5.0, -2.5),
                    size: (5.0, 0.5),
                },
                BlockDef {
                    center: (5.0, 2.5),
                    size: (5.0, 0.5),
                },
            ],
            gravity_zones: Vec::new(),
        }
    }
}

/// The level in play
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelData(pub LevelDef);
