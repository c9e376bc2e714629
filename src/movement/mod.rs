//! Movement domain: the kinematic character controller and its plugin wiring.

mod bootstrap;
mod components;
mod events;
pub(crate) mod input;
pub(crate) mod probe;
mod resources;
mod state;
pub(crate) mod systems;


pub use components::{
    ControllerDisabled, ControllerVariant, FrameInput, GameLayer, GravityCommand, InputSource,
    MirrorClone, PendingGravityCommands, Player,
};
pub use events::{GravityReversedChanged, GroundedChanged, Jumped, MovementEvent};
pub use resources::{MovementStats, VirtualButton, VirtualButtons};
pub use state::MovementState;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_characters;
use crate::movement::systems::{
    apply_gravity_commands, clear_virtual_button_edges, disable_unconfigured_controllers,
    gather_input, hold_disabled_controllers, run_movement_pipeline,
};

/// Ordering hooks for other domains
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSystems {
    /// Update: clock advance and input sampling
    Input,
    /// FixedUpdate: gravity commands, then probe, jump, horizontal, gravity, commit
    Pipeline,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VirtualButtons>()
            .add_message::<GroundedChanged>()
            .add_message::<Jumped>()
            .add_message::<GravityReversedChanged>()
            .add_systems(Startup, spawn_characters)
            .add_systems(
                Update,
                (disable_unconfigured_controllers, gather_input)
                    .chain()
                    .in_set(MovementSystems::Input),
            )
            .add_systems(
                FixedUpdate,
                (
                    hold_disabled_controllers,
                    (apply_gravity_commands, run_movement_pipeline).chain(),
                )
                    .in_set(MovementSystems::Pipeline),
            )
            .add_systems(Last, clear_virtual_button_edges);
    }
}
