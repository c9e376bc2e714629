//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Tunable movement parameters, loaded once from `stats.ron`.
///
/// Durations are in seconds, distances in world units, speeds in units per second.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementStats {
    pub max_speed: f32,
    pub acceleration: f32,
    pub ground_deceleration: f32,
    pub air_deceleration: f32,
    /// Vertical velocity applied while grounded. Negative so it pushes into the ground.
    pub grounding_force: f32,
    pub fall_acceleration: f32,
    pub max_fall_speed: f32,
    pub jump_power: f32,
    /// Multiplier on fall acceleration after the jump button is released mid-rise
    pub jump_end_early_gravity_modifier: f32,
    pub jump_buffer: f32,
    pub coyote_time: f32,
    pub grounder_distance: f32,
    pub horizontal_dead_zone_threshold: f32,
    pub vertical_dead_zone_threshold: f32,
    pub snap_input: bool,
    /// Layers the contact probe may hit
    pub collision_mask: Vec<GameLayer>,
}

impl Default for MovementStats {
    fn default() -> Self {
        Self {
            max_speed: 14.0,
            acceleration: 120.0,
            ground_deceleration: 60.0,
            air_deceleration: 30.0,
            grounding_force: -1.5,
            fall_acceleration: 110.0,
            max_fall_speed: 40.0,
            jump_power: 36.0,
            jump_end_early_gravity_modifier: 3.0,
            jump_buffer: 0.2,
            coyote_time: 0.15,
            grounder_distance: 0.05,
            horizontal_dead_zone_threshold: 0.1,
            vertical_dead_zone_threshold: 0.3,
            snap_input: true,
            collision_mask: vec![GameLayer::Default, GameLayer::Ground],
        }
    }
}

impl MovementStats {
    /// Peak height of an uninterrupted jump on a flat floor: h = v² / (2g)
    pub fn full_jump_height(&self) -> f32 {
        if self.fall_acceleration <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_power * self.jump_power / (2.0 * self.fall_acceleration)
    }
}

/// On-screen left/right/jump buttons.
///
/// Whatever owns the touch surface calls [`press`](Self::press) and
/// [`release`](Self::release); the movement domain only reads the state.
#[derive(Resource, Debug, Default)]
pub struct VirtualButtons {
    left: ButtonState,
    right: ButtonState,
    jump: ButtonState,
}

#[derive(Debug, Default, Clone, Copy)]
struct ButtonState {
    pressed: bool,
    pressed_this_frame: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualButton {
    Left,
    Right,
    Jump,
}

impl VirtualButtons {
    fn state_mut(&mut self, button: VirtualButton) -> &mut ButtonState {
        match button {
            VirtualButton::Left => &mut self.left,
            VirtualButton::Right => &mut self.right,
            VirtualButton::Jump => &mut self.jump,
        }
    }

    pub fn press(&mut self, button: VirtualButton) {
        let state = self.state_mut(button);
        if !state.pressed {
            state.pressed_this_frame = true;
        }
        state.pressed = true;
    }

    pub fn release(&mut self, button: VirtualButton) {
        self.state_mut(button).pressed = false;
    }

    pub fn is_pressed(&self, button: VirtualButton) -> bool {
        match button {
            VirtualButton::Left => self.left.pressed,
            VirtualButton::Right => self.right.pressed,
            VirtualButton::Jump => self.jump.pressed,
        }
    }

    pub fn just_pressed(&self, button: VirtualButton) -> bool {
        match button {
            VirtualButton::Left => self.left.pressed_this_frame,
            VirtualButton::Right => self.right.pressed_this_frame,
            VirtualButton::Jump => self.jump.pressed_this_frame,
        }
    }

    /// Horizontal axis from the left/right pair
    pub fn axis_x(&self) -> f32 {
        let mut x = 0.0;
        if self.left.pressed {
            x -= 1.0;
        }
        if self.right.pressed {
            x += 1.0;
        }
        x
    }

    /// Clear per-frame edges. Runs once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.left.pressed_this_frame = false;
        self.right.pressed_this_frame = false;
        self.jump.pressed_this_frame = false;
    }
}
