//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::input::WanderInput;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, ceilings, platforms)
    Ground,
    /// Primary player character
    Player,
    /// Mirrored clone character
    Clone,
    /// Sensors (gravity zones) - should not block movement
    Sensor,
}

impl GameLayer {
    /// Layers owned by characters. The contact probe must never hit these.
    pub const CHARACTERS: [GameLayer; 2] = [GameLayer::Player, GameLayer::Clone];

    pub fn is_character(self) -> bool {
        Self::CHARACTERS.contains(&self)
    }
}

/// Marker for the primary, player-driven controller
#[derive(Component, Debug)]
pub struct Player;

/// Marker for the mirrored clone controller
#[derive(Component, Debug)]
pub struct MirrorClone;

/// Per-controller parameters that distinguish the clone from the primary.
/// Everything else runs through the same pipeline.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerVariant {
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub initial_gravity_reversed: bool,
}

impl ControllerVariant {
    pub const PRIMARY: Self = Self {
        flip_horizontal: false,
        flip_vertical: false,
        initial_gravity_reversed: false,
    };
}

/// Added to a controller that cannot run (missing stats).
/// Every movement system skips entities carrying it.
#[derive(Component, Debug)]
pub struct ControllerDisabled;

/// Where a controller gets its per-tick input sample from
#[derive(Component, Debug, Clone)]
pub enum InputSource {
    Keyboard,
    VirtualButtons,
    Wander(WanderInput),
}

/// The most recent input sample, consumed by the next fixed tick
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: Vec2,
    /// True only for the sample in which jump went from released to pressed
    pub jump_down: bool,
    pub jump_held: bool,
}

/// A gravity change requested for a single controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GravityCommand {
    Toggle,
    Set(bool),
}

impl GravityCommand {
    /// The reversed flag this command produces from `current`
    pub fn resolve(self, current: bool) -> bool {
        match self {
            GravityCommand::Toggle => !current,
            GravityCommand::Set(reversed) => reversed,
        }
    }
}

/// Gravity commands waiting for the owning controller's next fixed tick
#[derive(Component, Debug, Default)]
pub struct PendingGravityCommands(pub Vec<GravityCommand>);
