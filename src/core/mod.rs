//! Core domain: camera and simulation clock.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Fixed physics/controller rate. 50 Hz gives the 0.02 s step the tuning expects.
pub const FIXED_HZ: f64 = 50.0;

/// World units per screen pixel at the default camera zoom
pub const CAMERA_SCALE: f32 = 1.0 / 40.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_systems(Startup, setup_camera);
    }
}
