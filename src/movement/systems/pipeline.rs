//! Movement domain: the fixed-step controller pipeline.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::events::MovementEvent;
use crate::movement::probe::{
    AvianContactQuery, ContactProbe, ProbeGeometry, collider_half_extents, probe_contacts,
};
use crate::movement::{
    ControllerDisabled, FrameInput, GravityReversedChanged, GroundedChanged, Jumped,
    MovementState, MovementStats, PendingGravityCommands,
};

fn probe_mask(stats: &MovementStats) -> LayerMask {
    LayerMask(
        stats
            .collision_mask
            .iter()
            .filter(|layer| !layer.is_character())
            .fold(0, |bits, layer| bits | layer.to_bits()),
    )
}

/// Outbound controller messages, written in the order the core produced them
#[derive(SystemParam)]
pub(crate) struct MovementMessages<'w> {
    grounded: MessageWriter<'w, GroundedChanged>,
    jumped: MessageWriter<'w, Jumped>,
    gravity: MessageWriter<'w, GravityReversedChanged>,
}

impl MovementMessages<'_> {
    fn publish(&mut self, entity: Entity, state: &MovementState, events: &mut Vec<MovementEvent>) {
        for event in events.drain(..) {
            match event {
                MovementEvent::GroundedChanged {
                    grounded,
                    impact_speed,
                } => {
                    if grounded {
                        debug!("Landed: entity={:?}, impact_speed={}", entity, impact_speed);
                    } else {
                        debug!("Left ground: entity={:?}, t={}", entity, state.time);
                    }
                    self.grounded.write(GroundedChanged {
                        entity,
                        grounded,
                        impact_speed,
                    });
                }
                MovementEvent::Jumped => {
                    debug!(
                        "Jump: entity={:?}, reversed={}, vy={}",
                        entity, state.gravity_reversed, state.velocity.y
                    );
                    self.jumped.write(Jumped { entity });
                }
                MovementEvent::GravityReversedChanged { reversed } => {
                    info!("Gravity flipped: entity={:?}, reversed={}", entity, reversed);
                    self.gravity.write(GravityReversedChanged { entity, reversed });
                }
            }
        }
    }
}

/// Start of every fixed tick: apply the gravity commands queued since the last one.
pub(crate) fn apply_gravity_commands(
    mut query: Query<
        (Entity, &mut MovementState, &mut PendingGravityCommands),
        Without<ControllerDisabled>,
    >,
    mut messages: MovementMessages,
) {
    let mut events = Vec::new();

    for (entity, mut state, mut pending) in &mut query {
        if pending.0.is_empty() {
            continue;
        }
        for command in pending.0.drain(..) {
            state.apply_gravity_command(command, &mut events);
        }
        messages.publish(entity, &state, &mut events);
    }
}

/// Per fixed tick and per controller: probe contacts, run the shared state
/// machine and commit the result to the body.
pub(crate) fn run_movement_pipeline(
    time: Res<Time>,
    stats: Option<Res<MovementStats>>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &FrameInput,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        Without<ControllerDisabled>,
    >,
    mut messages: MovementMessages,
) {
    let Some(stats) = stats else {
        return;
    };
    let dt = time.delta_secs();
    let mask = probe_mask(&stats);
    let mut events = Vec::new();

    for (entity, transform, collider, input, mut state, mut velocity) in &mut query {
        let contacts = match collider_half_extents(collider) {
            Some(half_extents) => {
                let geometry = ProbeGeometry {
                    center: transform.translation.truncate(),
                    half_extents,
                };
                let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([entity]);
                let contact_query = AvianContactQuery {
                    spatial_query: &spatial_query,
                    collider,
                    filter: &filter,
                };
                probe_contacts(
                    &contact_query,
                    geometry,
                    state.gravity_reversed,
                    stats.grounder_distance,
                )
            }
            // Unsupported shape: treat as airborne
            None => ContactProbe::default(),
        };

        let body_velocity = velocity.0;
        velocity.0 = state.tick(&stats, input, contacts, body_velocity, dt, &mut events);
        messages.publish(entity, &state, &mut events);
    }
}
