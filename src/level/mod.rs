//! Level domain: static geometry and gravity zones built from level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelData;
use crate::gravity::GravityZone;
use crate::movement::GameLayer;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}

fn spawn_level(mut commands: Commands, level: Res<LevelData>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let zone_color = Color::srgba(0.6, 0.3, 0.8, 0.35);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Clone],
    );
    let sensor_layers = CollisionLayers::new(
        GameLayer::Sensor,
        [GameLayer::Player, GameLayer::Clone],
    );

    for (index, block) in level.0.blocks.iter().enumerate() {
        let size = Vec2::from(block.size);
        let (x, y) = block.center;
        commands.spawn((
            Name::new(format!("Block {}", index)),
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for zone in &level.0.gravity_zones {
        let size = Vec2::from(zone.size);
        let (x, y) = zone.center;
        commands.spawn((
            GravityZone {
                command: zone.command,
            },
            Sprite {
                color: zone_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, y, -1.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            sensor_layers,
        ));
    }

    info!(
        "Spawned level '{}': {} blocks, {} gravity zones",
        level.0.name,
        level.0.blocks.len(),
        level.0.gravity_zones.len()
    );
}
