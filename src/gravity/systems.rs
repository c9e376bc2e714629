//! Gravity domain: schedule, trigger zones, command routing and sprite flip.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::LevelData;
use crate::gravity::{GravityFlipSchedule, GravityZone, ReverseGravity};
use crate::movement::{
    ControllerDisabled, GravityCommand, GravityReversedChanged, MovementState,
    PendingGravityCommands, Player,
};

pub(crate) fn configure_flip_schedule(
    level: Res<LevelData>,
    mut schedule: ResMut<GravityFlipSchedule>,
) {
    *schedule = GravityFlipSchedule::new(level.0.gravity_flip_interval);

    match schedule.active_interval() {
        Some(interval) => info!("Gravity flips every {}s", interval),
        None => info!("Timed gravity flips disabled"),
    }
}

pub(crate) fn tick_flip_schedule(
    time: Res<Time>,
    mut schedule: ResMut<GravityFlipSchedule>,
    players: Query<Entity, With<Player>>,
    mut commands_out: MessageWriter<ReverseGravity>,
) {
    if !schedule.tick(time.delta_secs()) {
        return;
    }

    for target in &players {
        commands_out.write(ReverseGravity {
            target,
            command: GravityCommand::Toggle,
        });
    }
}

pub(crate) fn detect_gravity_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    zones: Query<&GravityZone>,
    controllers: Query<(), With<MovementState>>,
    mut commands_out: MessageWriter<ReverseGravity>,
) {
    for event in collision_start_events.read() {
        let (zone, other) = if let Ok(zone) = zones.get(event.collider1) {
            (zone, event.collider2)
        } else if let Ok(zone) = zones.get(event.collider2) {
            (zone, event.collider1)
        } else {
            continue;
        };

        if !controllers.contains(other) {
            continue;
        }

        debug!("Gravity zone entered: entity={:?}, command={:?}", other, zone.command);
        commands_out.write(ReverseGravity {
            target: other,
            command: zone.command,
        });
    }
}

/// Queue each command on its controller; the controller applies it inside its own tick.
pub(crate) fn route_gravity_commands(
    mut commands_in: MessageReader<ReverseGravity>,
    mut targets: Query<&mut PendingGravityCommands, Without<ControllerDisabled>>,
) {
    for request in commands_in.read() {
        match targets.get_mut(request.target) {
            Ok(mut pending) => pending.0.push(request.command),
            Err(_) => warn!(
                "Gravity command {:?} for {:?} dropped: not an active controller",
                request.command, request.target
            ),
        }
    }
}

pub(crate) fn flip_sprites_on_gravity_change(
    mut events: MessageReader<GravityReversedChanged>,
    mut sprites: Query<&mut Sprite>,
) {
    for event in events.read() {
        if let Ok(mut sprite) = sprites.get_mut(event.entity) {
            sprite.flip_y = event.reversed;
        }
    }
}
