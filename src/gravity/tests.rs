//! Gravity domain: unit tests for flip sources.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::systems::route_gravity_commands;
use super::{GravityFlipSchedule, ReverseGravity};
use crate::movement::probe::ContactProbe;
use crate::movement::systems::apply_gravity_commands;
use crate::movement::{
    ControllerDisabled, GravityCommand, GravityReversedChanged, GroundedChanged, Jumped,
    MovementState, PendingGravityCommands, Player,
};

#[test]
fn test_schedule_fires_at_interval() {
    let mut schedule = GravityFlipSchedule::new(Some(1.0));

    assert!(!schedule.tick(0.5));
    assert!(!schedule.tick(0.25));
    assert!(schedule.tick(0.25));
    assert_eq!(schedule.elapsed, 0.0);
}

#[test]
fn test_schedule_restarts_after_firing() {
    let mut schedule = GravityFlipSchedule::new(Some(0.5));
    let mut flips = 0;

    for _ in 0..100 {
        if schedule.tick(0.05) {
            flips += 1;
        }
    }

    // 5 seconds at one flip per half second, give or take float drift
    assert!((9..=10).contains(&flips));
}

#[test]
fn test_schedule_disabled_for_unusable_intervals() {
    for interval in [None, Some(0.0), Some(-2.0), Some(f32::NAN), Some(f32::INFINITY)] {
        let mut schedule = GravityFlipSchedule::new(interval);
        assert_eq!(schedule.active_interval(), None);
        for _ in 0..1000 {
            assert!(!schedule.tick(1.0));
        }
    }
}

#[test]
fn test_schedule_ignores_bad_steps() {
    let mut schedule = GravityFlipSchedule::new(Some(1.0));

    assert!(!schedule.tick(f32::NAN));
    assert!(!schedule.tick(-5.0));
    assert_eq!(schedule.elapsed, 0.0);
}

#[test]
fn test_default_schedule_never_fires() {
    let mut schedule = GravityFlipSchedule::default();
    assert!(!schedule.tick(100.0));
}

#[test]
fn test_gravity_command_resolution() {
    assert!(GravityCommand::Toggle.resolve(false));
    assert!(!GravityCommand::Toggle.resolve(true));
    assert!(GravityCommand::Set(true).resolve(true));
    assert!(GravityCommand::Set(true).resolve(false));
    assert!(!GravityCommand::Set(false).resolve(true));
}

// -----------------------------------------------------------------------------
// Command routing in an app
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct Recorded {
    grounded: Vec<(Entity, bool)>,
    reversed: Vec<(Entity, bool)>,
}

fn record_messages(
    mut recorded: ResMut<Recorded>,
    mut grounded: MessageReader<GroundedChanged>,
    mut reversed: MessageReader<GravityReversedChanged>,
) {
    for message in grounded.read() {
        recorded.grounded.push((message.entity, message.grounded));
    }
    for message in reversed.read() {
        recorded.reversed.push((message.entity, message.reversed));
    }
}

fn routing_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Recorded>()
        .add_message::<ReverseGravity>()
        .add_message::<GroundedChanged>()
        .add_message::<Jumped>()
        .add_message::<GravityReversedChanged>()
        .add_systems(Update, route_gravity_commands)
        .add_systems(FixedUpdate, (apply_gravity_commands, record_messages).chain());
    app
}

fn standing_player(app: &mut App) -> Entity {
    let mut state = MovementState::new(false);
    state.apply_contacts(
        ContactProbe {
            ground_hit: true,
            ceiling_hit: false,
        },
        &mut Vec::new(),
    );
    app.world_mut()
        .spawn((Player, state, PendingGravityCommands::default()))
        .id()
}

#[test]
fn test_reverse_gravity_applies_on_next_fixed_tick() {
    let mut app = routing_app();
    let player = standing_player(&mut app);

    app.world_mut().write_message(ReverseGravity {
        target: player,
        command: GravityCommand::Toggle,
    });
    app.update();

    // Queued, not yet applied
    let world = app.world();
    assert_eq!(
        world.get::<PendingGravityCommands>(player).map(|p| p.0.len()),
        Some(1)
    );
    let state = world.get::<MovementState>(player).expect("player has state");
    assert!(!state.gravity_reversed);
    assert!(state.grounded);

    app.world_mut().run_schedule(FixedUpdate);

    let world = app.world();
    let state = world.get::<MovementState>(player).expect("player has state");
    assert!(state.gravity_reversed);
    assert!(!state.grounded);
    assert_eq!(
        world.get::<PendingGravityCommands>(player).map(|p| p.0.len()),
        Some(0)
    );

    let recorded = world.resource::<Recorded>();
    assert_eq!(recorded.reversed, vec![(player, true)]);
    assert_eq!(recorded.grounded, vec![(player, false)]);

    // Nothing queued, nothing written
    app.world_mut().run_schedule(FixedUpdate);
    let recorded = app.world().resource::<Recorded>();
    assert_eq!(recorded.reversed.len(), 1);
    assert_eq!(recorded.grounded.len(), 1);
}

#[test]
fn test_set_to_current_gravity_writes_nothing() {
    let mut app = routing_app();
    let player = standing_player(&mut app);

    app.world_mut().write_message(ReverseGravity {
        target: player,
        command: GravityCommand::Set(false),
    });
    app.update();
    app.world_mut().run_schedule(FixedUpdate);

    let world = app.world();
    let state = world.get::<MovementState>(player).expect("player has state");
    assert!(!state.gravity_reversed);
    assert!(state.grounded);
    assert!(world.resource::<Recorded>().reversed.is_empty());
    assert!(world.resource::<Recorded>().grounded.is_empty());
}

#[test]
fn test_command_for_disabled_controller_is_dropped() {
    let mut app = routing_app();
    let player = standing_player(&mut app);
    app.world_mut().entity_mut(player).insert(ControllerDisabled);

    app.world_mut().write_message(ReverseGravity {
        target: player,
        command: GravityCommand::Toggle,
    });
    app.update();
    app.world_mut().run_schedule(FixedUpdate);

    let world = app.world();
    assert_eq!(
        world.get::<PendingGravityCommands>(player).map(|p| p.0.len()),
        Some(0)
    );
    let state = world.get::<MovementState>(player).expect("player has state");
    assert!(!state.gravity_reversed);
    assert!(world.resource::<Recorded>().reversed.is_empty());
}
