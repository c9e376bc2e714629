//! Validation for loaded stats and level definitions.

use thiserror::Error;

use super::data::LevelDef;
use crate::movement::{GameLayer, MovementStats};

/// A single problem found in a content file
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("'{field}' must be finite and >= 0, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f32 },
    #[error("'jump_end_early_gravity_modifier' must be >= 1, got {0}")]
    WeakEarlyReleaseModifier(f32),
    #[error("'collision_mask' is empty, the probe would never find ground")]
    EmptyCollisionMask,
    #[error("'collision_mask' includes character layer {0:?}")]
    CharacterLayerInMask(GameLayer),
    #[error("{kind} #{index} must have a positive finite size, got {width}x{height}")]
    DegenerateVolume {
        kind: &'static str,
        index: usize,
        width: f32,
        height: f32,
    },
    #[error("'{field}' must be finite, got {value}")]
    NonFinitePosition { field: &'static str, value: f32 },
    #[error("'gravity_flip_interval' must be finite, got {0}")]
    NonFiniteInterval(f32),
}

fn check_non_negative(errors: &mut Vec<ValidationError>, field: &'static str, value: f32) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ValidationError::NegativeOrNonFinite { field, value });
    }
}

/// Validate movement stats.
/// Returns a list of validation errors, empty if the stats are usable.
pub fn validate_stats(stats: &MovementStats) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("max_speed", stats.max_speed),
        ("acceleration", stats.acceleration),
        ("ground_deceleration", stats.ground_deceleration),
        ("air_deceleration", stats.air_deceleration),
        ("fall_acceleration", stats.fall_acceleration),
        ("max_fall_speed", stats.max_fall_speed),
        ("jump_power", stats.jump_power),
        ("jump_buffer", stats.jump_buffer),
        ("coyote_time", stats.coyote_time),
        ("grounder_distance", stats.grounder_distance),
        (
            "horizontal_dead_zone_threshold",
            stats.horizontal_dead_zone_threshold,
        ),
        (
            "vertical_dead_zone_threshold",
            stats.vertical_dead_zone_threshold,
        ),
    ] {
        check_non_negative(&mut errors, field, value);
    }

    // Sign is free, magnitude must be real
    if !stats.grounding_force.is_finite() {
        errors.push(ValidationError::NegativeOrNonFinite {
            field: "grounding_force",
            value: stats.grounding_force,
        });
    }

    let modifier = stats.jump_end_early_gravity_modifier;
    if !modifier.is_finite() || modifier < 1.0 {
        errors.push(ValidationError::WeakEarlyReleaseModifier(modifier));
    }

    if stats.collision_mask.is_empty() {
        errors.push(ValidationError::EmptyCollisionMask);
    }
    for layer in &stats.collision_mask {
        if layer.is_character() {
            errors.push(ValidationError::CharacterLayerInMask(*layer));
        }
    }

    errors
}

fn check_volume(
    errors: &mut Vec<ValidationError>,
    kind: &'static str,
    index: usize,
    center: (f32, f32),
    size: (f32, f32),
) {
    let (width, height) = size;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        errors.push(ValidationError::DegenerateVolume {
            kind,
            index,
            width,
            height,
        });
    }
    check_position(errors, kind, center);
}

fn check_position(errors: &mut Vec<ValidationError>, field: &'static str, position: (f32, f32)) {
    for value in [position.0, position.1] {
        if !value.is_finite() {
            errors.push(ValidationError::NonFinitePosition { field, value });
        }
    }
}

/// Validate level geometry and spawn points.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_position(&mut errors, "player.position", level.player.position);
    if let Some(clone) = &level.clone {
        check_position(&mut errors, "clone.position", clone.position);
    }

    if let Some(interval) = level.gravity_flip_interval
        && !interval.is_finite()
    {
        errors.push(ValidationError::NonFiniteInterval(interval));
    }

    for (index, block) in level.blocks.iter().enumerate() {
        check_volume(&mut errors, "Block", index, block.center, block.size);
    }
    for (index, zone) in level.gravity_zones.iter().enumerate() {
        check_volume(&mut errors, "GravityZone", index, zone.center, zone.size);
    }

    errors
}
