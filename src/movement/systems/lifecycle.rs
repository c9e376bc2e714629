//! Movement domain: enabling and disabling controllers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerDisabled, MovementState, MovementStats};

/// A controller spawned without stats cannot run; disable it and say so once.
pub(crate) fn disable_unconfigured_controllers(
    mut commands: Commands,
    stats: Option<Res<MovementStats>>,
    query: Query<(Entity, Option<&Name>), (Added<MovementState>, Without<ControllerDisabled>)>,
) {
    if stats.is_some() {
        return;
    }

    for (entity, name) in &query {
        error!(
            "Controller {:?} ({}) has no movement stats; disabling it. Check assets/data/stats.ron",
            entity,
            name.map(Name::as_str).unwrap_or("unnamed")
        );
        commands.entity(entity).insert(ControllerDisabled);
    }
}

/// Disabled controllers contribute no velocity
pub(crate) fn hold_disabled_controllers(
    mut query: Query<&mut LinearVelocity, With<ControllerDisabled>>,
) {
    for mut velocity in &mut query {
        velocity.0 = Vec2::ZERO;
    }
}
