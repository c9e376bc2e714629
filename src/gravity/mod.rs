//! Gravity domain: what decides when a controller's gravity flips, and the
//! visual reaction once it has.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GravityFlipSchedule, GravityZone};
pub use events::ReverseGravity;

use bevy::prelude::*;

use crate::gravity::systems::{
    configure_flip_schedule, detect_gravity_zones, flip_sprites_on_gravity_change,
    route_gravity_commands, tick_flip_schedule,
};
use crate::movement::MovementSystems;

pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravityFlipSchedule>()
            .add_message::<ReverseGravity>()
            .add_systems(Startup, configure_flip_schedule)
            .add_systems(
                Update,
                (
                    (tick_flip_schedule, detect_gravity_zones),
                    route_gravity_commands,
                )
                    .chain()
                    .before(MovementSystems::Input),
            )
            .add_systems(Update, flip_sprites_on_gravity_change);
    }
}
