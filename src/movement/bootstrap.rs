//! Movement domain: character bootstrap from level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{InputSourceDef, LevelData};
use crate::movement::input::WanderInput;
use crate::movement::{
    ControllerVariant, FrameInput, GameLayer, InputSource, MirrorClone, MovementState,
    PendingGravityCommands, Player,
};

const CHARACTER_RADIUS: f32 = 0.5;
/// Full width and height of the character capsule
const CHARACTER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

impl From<&InputSourceDef> for InputSource {
    fn from(def: &InputSourceDef) -> Self {
        match def {
            InputSourceDef::Keyboard => InputSource::Keyboard,
            InputSourceDef::VirtualButtons => InputSource::VirtualButtons,
            InputSourceDef::Wander { seed, jump_chance } => {
                InputSource::Wander(WanderInput::new(*seed, *jump_chance))
            }
        }
    }
}

/// Everything the movement pipeline needs on a controller entity
pub(crate) fn controller_bundle(variant: ControllerVariant, source: InputSource) -> impl Bundle {
    (
        MovementState::new(variant.initial_gravity_reversed),
        variant,
        source,
        FrameInput::default(),
        PendingGravityCommands::default(),
    )
}

fn character_body(layer: GameLayer) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::capsule(CHARACTER_RADIUS, CHARACTER_SIZE.y - 2.0 * CHARACTER_RADIUS),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        GravityScale(0.0), // Gravity is part of the controller
        Friction::new(0.0),
        CollisionEventsEnabled,
        CollisionLayers::new(
            layer,
            [GameLayer::Default, GameLayer::Ground, GameLayer::Sensor],
        ),
    )
}

pub(crate) fn spawn_characters(
    mut commands: Commands,
    level: Res<LevelData>,
    existing: Query<Entity, With<MovementState>>,
) {
    if !existing.is_empty() {
        info!("Characters already exist, skipping spawn");
        return;
    }

    let player = &level.0.player;
    let (x, y) = player.position;
    info!(
        "Spawning player at ({}, {}) with input {:?}",
        x, y, player.input
    );

    commands.spawn((
        Name::new("Player"),
        Player,
        controller_bundle(ControllerVariant::PRIMARY, InputSource::from(&player.input)),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(CHARACTER_SIZE),
            ..default()
        },
        Transform::from_xyz(x, y, 0.0),
        character_body(GameLayer::Player),
    ));

    let Some(clone) = &level.0.clone else {
        return;
    };

    let variant = ControllerVariant {
        flip_horizontal: clone.flip_horizontal,
        flip_vertical: clone.flip_vertical,
        initial_gravity_reversed: clone.flip_gravity,
    };
    let (x, y) = clone.position;
    info!(
        "Spawning clone at ({}, {}): input={:?}, variant={:?}",
        x, y, clone.input, variant
    );

    commands.spawn((
        Name::new("Clone"),
        MirrorClone,
        controller_bundle(variant, InputSource::from(&clone.input)),
        Sprite {
            color: Color::srgb(0.55, 0.75, 0.95),
            custom_size: Some(CHARACTER_SIZE),
            flip_y: variant.initial_gravity_reversed,
            ..default()
        },
        Transform::from_xyz(x, y, 0.0),
        character_body(GameLayer::Clone),
    ));
}
