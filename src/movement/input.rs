//! Movement domain: turning raw device or scripted input into a frame sample.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::movement::{ControllerVariant, FrameInput, MovementStats, VirtualButton, VirtualButtons};

const WANDER_MIN_DWELL: f32 = 0.4;
const WANDER_MAX_DWELL: f32 = 1.6;
const WANDER_MIN_JUMP_HOLD: f32 = 0.05;
const WANDER_MAX_JUMP_HOLD: f32 = 0.4;

/// NaN becomes 0, everything else is clamped to [-1, 1]
pub fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Quantize to {-1, 0, 1} using a dead zone. An exact zero stays zero for any dead zone.
pub fn snap_axis(value: f32, dead_zone: f32) -> f32 {
    if value == 0.0 || value.abs() < dead_zone {
        0.0
    } else {
        value.signum()
    }
}

/// Clamp, optionally snap, then apply the variant's axis inversion.
pub fn prepare_input(
    raw: FrameInput,
    stats: &MovementStats,
    variant: &ControllerVariant,
) -> FrameInput {
    let mut movement = Vec2::new(sanitize_axis(raw.movement.x), sanitize_axis(raw.movement.y));

    if stats.snap_input {
        movement.x = snap_axis(movement.x, stats.horizontal_dead_zone_threshold);
        movement.y = snap_axis(movement.y, stats.vertical_dead_zone_threshold);
    }

    if variant.flip_horizontal {
        movement.x = -movement.x;
    }
    if variant.flip_vertical {
        movement.y = -movement.y;
    }

    FrameInput {
        movement,
        jump_down: raw.jump_down,
        jump_held: raw.jump_held,
    }
}

pub fn read_keyboard(keyboard: &ButtonInput<KeyCode>) -> FrameInput {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    FrameInput {
        movement: Vec2::new(x, y),
        jump_down: keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyC),
        jump_held: keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyC),
    }
}

pub fn read_virtual_buttons(buttons: &VirtualButtons) -> FrameInput {
    FrameInput {
        movement: Vec2::new(buttons.axis_x(), 0.0),
        jump_down: buttons.just_pressed(VirtualButton::Jump),
        jump_held: buttons.is_pressed(VirtualButton::Jump),
    }
}

/// Seeded random walker used to drive a controller without a human.
///
/// Every dwell period it picks a new direction and may start a jump,
/// held for a random time so both short hops and full arcs happen.
#[derive(Debug, Clone)]
pub struct WanderInput {
    rng: ChaCha8Rng,
    jump_chance: f64,
    direction: f32,
    dwell_remaining: f32,
    jump_remaining: f32,
}

impl WanderInput {
    pub fn new(seed: u64, jump_chance: f64) -> Self {
        let jump_chance = if jump_chance.is_finite() {
            jump_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            jump_chance,
            direction: 0.0,
            dwell_remaining: 0.0,
            jump_remaining: 0.0,
        }
    }

    pub fn sample(&mut self, dt: f32) -> FrameInput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let was_jumping = self.jump_remaining > 0.0;
        self.jump_remaining = (self.jump_remaining - dt).max(0.0);
        self.dwell_remaining -= dt;

        let mut jump_down = false;
        if self.dwell_remaining <= 0.0 {
            self.direction = match self.rng.random_range(0..3) {
                0 => -1.0,
                1 => 0.0,
                _ => 1.0,
            };
            self.dwell_remaining = self.rng.random_range(WANDER_MIN_DWELL..WANDER_MAX_DWELL);

            if !was_jumping && self.rng.random_bool(self.jump_chance) {
                jump_down = true;
                self.jump_remaining = self
                    .rng
                    .random_range(WANDER_MIN_JUMP_HOLD..WANDER_MAX_JUMP_HOLD);
            }
        }

        FrameInput {
            movement: Vec2::new(self.direction, 0.0),
            jump_down,
            jump_held: jump_down || self.jump_remaining > 0.0,
        }
    }
}
