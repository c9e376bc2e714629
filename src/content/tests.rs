//! Content domain: unit tests for RON parsing and validation.

use std::path::Path;

use super::*;
use crate::movement::{GameLayer, GravityCommand, MovementStats};

const BUNDLED_STATS: &str = include_str!("../../assets/data/stats.ron");
const BUNDLED_LEVEL: &str = include_str!("../../assets/data/level.ron");

#[test]
fn test_bundled_stats_parse_and_validate() {
    let stats: MovementStats = parse_ron(STATS_FILE, BUNDLED_STATS).expect("stats should parse");

    assert_eq!(validate_stats(&stats), Vec::new());
    assert_eq!(stats, MovementStats::default());
}

#[test]
fn test_bundled_level_parses_and_validates() {
    let level: LevelDef = parse_ron(LEVEL_FILE, BUNDLED_LEVEL).expect("level should parse");

    assert_eq!(validate_level(&level), Vec::new());
    assert_eq!(level.name, "mirror_room");
    assert_eq!(level.gravity_flip_interval, Some(12.0));

    let clone = level.clone.expect("bundled level has a clone");
    assert!(clone.flip_horizontal);
    assert!(clone.flip_gravity);

    assert_eq!(level.gravity_zones.len(), 2);
    assert!(matches!(
        level.gravity_zones[0].command,
        GravityCommand::Set(true)
    ));
}

#[test]
fn test_default_level_is_valid() {
    assert_eq!(validate_level(&LevelDef::default()), Vec::new());
}

#[test]
fn test_default_stats_are_valid() {
    assert_eq!(validate_stats(&MovementStats::default()), Vec::new());
}

#[test]
fn test_negative_durations_rejected() {
    let stats = MovementStats {
        coyote_time: -0.1,
        jump_buffer: f32::NAN,
        ..MovementStats::default()
    };

    let errors = validate_stats(&stats);

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::NegativeOrNonFinite {
            field: "coyote_time",
            ..
        }
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::NegativeOrNonFinite {
            field: "jump_buffer",
            ..
        }
    )));
}

#[test]
fn test_grounding_force_sign_is_free() {
    let stats = MovementStats {
        grounding_force: 2.0,
        ..MovementStats::default()
    };
    assert_eq!(validate_stats(&stats), Vec::new());

    let broken = MovementStats {
        grounding_force: f32::INFINITY,
        ..MovementStats::default()
    };
    assert_eq!(validate_stats(&broken).len(), 1);
}

#[test]
fn test_weak_early_release_modifier_rejected() {
    let stats = MovementStats {
        jump_end_early_gravity_modifier: 0.5,
        ..MovementStats::default()
    };

    assert_eq!(
        validate_stats(&stats),
        vec![ValidationError::WeakEarlyReleaseModifier(0.5)]
    );
}

#[test]
fn test_collision_mask_rules() {
    let empty = MovementStats {
        collision_mask: Vec::new(),
        ..MovementStats::default()
    };
    assert_eq!(
        validate_stats(&empty),
        vec![ValidationError::EmptyCollisionMask]
    );

    let self_hitting = MovementStats {
        collision_mask: vec![GameLayer::Ground, GameLayer::Player],
        ..MovementStats::default()
    };
    assert_eq!(
        validate_stats(&self_hitting),
        vec![ValidationError::CharacterLayerInMask(GameLayer::Player)]
    );
}

#[test]
fn test_degenerate_level_geometry_rejected() {
    let mut level = LevelDef::default();
    level.blocks.push(BlockDef {
        center: (0.0, 0.0),
        size: (0.0, 1.0),
    });
    level.gravity_zones.push(GravityZoneDef {
        center: (f32::NAN, 0.0),
        size: (1.0, 1.0),
        command: GravityCommand::Toggle,
    });
    level.gravity_flip_interval = Some(f32::INFINITY);

    let errors = validate_level(&level);

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&ValidationError::NonFiniteInterval(f32::INFINITY)));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::DegenerateVolume { kind: "Block", .. }
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::NonFinitePosition {
            field: "GravityZone",
            ..
        }
    )));
}

#[test]
fn test_optional_fields_use_implicit_some() {
    let source = r#"(
        schema_version: 1,
        name: "tiny",
        player: (position: (0.0, 0.0), input: Wander(seed: 3, jump_chance: 0.25)),
        clone: None,
        gravity_flip_interval: None,
        blocks: [(center: (0.0, -2.0), size: (4.0, 1.0))],
        gravity_zones: [],
    )"#;

    let level: LevelDef = parse_ron("tiny.ron", source).expect("level should parse");

    assert!(level.clone.is_none());
    assert_eq!(
        level.player.input,
        InputSourceDef::Wander {
            seed: 3,
            jump_chance: 0.25
        }
    );
}

#[test]
fn test_malformed_ron_is_a_parse_error() {
    let result: Result<MovementStats, _> = parse_ron(STATS_FILE, "(max_speed: )");

    assert!(matches!(result, Err(ContentLoadError::Parse { .. })));
}

#[test]
fn test_missing_directory_reports_missing_file() {
    let base = Path::new("this/directory/does/not/exist");

    let stats_err = load_stats(base).expect_err("no stats file");
    let level_err = load_level(base).expect_err("no level file");

    assert!(stats_err.is_missing());
    assert!(level_err.is_missing());
}

#[test]
fn test_bundled_content_loads_from_disk() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");

    assert!(load_stats(&base).is_ok());
    assert!(load_level(&base).is_ok());
}

#[test]
fn test_invalid_error_lists_every_problem() {
    let err = ContentLoadError::Invalid {
        file: STATS_FILE.to_string(),
        errors: vec![
            ValidationError::EmptyCollisionMask,
            ValidationError::WeakEarlyReleaseModifier(0.0),
        ],
    };

    let message = err.to_string();
    assert!(message.contains("collision_mask"));
    assert!(message.contains("jump_end_early_gravity_modifier"));
    assert!(!err.is_missing());
}
