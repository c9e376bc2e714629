//! Core domain: core setup systems.

use bevy::prelude::*;

use crate::core::CAMERA_SCALE;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::new(CAMERA_SCALE, CAMERA_SCALE, 1.0)),
    ));
}
