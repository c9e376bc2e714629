//! Debug tools for tuning the controller, compiled with the `dev-tools` feature.
//!
//! - G toggles the player's gravity
//! - F3 logs every controller's state
//! - Ground probe rays are drawn as gizmos (green while grounded)

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::gravity::ReverseGravity;
use crate::movement::probe::{ProbeGeometry, collider_half_extents};
use crate::movement::{GravityCommand, MovementState, MovementStats, Player};

use avian2d::prelude::Collider;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_gravity_on_key, log_controller_state, draw_probe_gizmos),
        );
    }
}

fn toggle_gravity_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    players: Query<Entity, With<Player>>,
    mut commands_out: MessageWriter<ReverseGravity>,
) {
    if !keyboard.just_pressed(KeyCode::KeyG) {
        return;
    }

    for target in &players {
        info!("[DEBUG] Manual gravity toggle for {:?}", target);
        commands_out.write(ReverseGravity {
            target,
            command: GravityCommand::Toggle,
        });
    }
}

fn log_controller_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, Option<&Name>, &MovementState)>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (entity, name, state) in &query {
        info!(
            "[DEBUG] {:?} ({}): t={:.2} v=({:.2}, {:.2}) grounded={} reversed={} coyote={} buffered={} early_release={}",
            entity,
            name.map(Name::as_str).unwrap_or("unnamed"),
            state.time,
            state.velocity.x,
            state.velocity.y,
            state.grounded,
            state.gravity_reversed,
            state.coyote_usable,
            state.buffered_jump_usable,
            state.ended_jump_early
        );
    }
}

fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    stats: Option<Res<MovementStats>>,
    query: Query<(&Transform, &Collider, &MovementState)>,
) {
    let Some(stats) = stats else {
        return;
    };

    for (transform, collider, state) in &query {
        let Some(half_extents) = collider_half_extents(collider) else {
            continue;
        };
        let geometry = ProbeGeometry {
            center: transform.translation.truncate(),
            half_extents,
        };

        let reach = Vec2::NEG_Y * state.up_sign() * (half_extents.y + stats.grounder_distance);
        let color = if state.grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };

        for origin in geometry.ground_ray_origins() {
            gizmos.line_2d(origin, origin + reach, color);
        }
    }
}
