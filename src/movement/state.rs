//! Movement domain: the controller state machine shared by every character.
//!
//! Nothing in here touches the ECS. Systems feed it an input sample, a contact
//! probe result and the fixed step, and it pushes [`MovementEvent`]s into an
//! outbound queue. The primary player and the mirrored clone both run
//! [`MovementState::tick`]; there is no second copy of these rules.

use bevy::prelude::*;

use crate::movement::events::MovementEvent;
use crate::movement::probe::ContactProbe;
use crate::movement::{FrameInput, GravityCommand, MovementStats};

/// Horizontal speed below which landing zeroes the x velocity
const LANDING_STICK_SPEED: f32 = 0.1;

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

fn sanitize_step(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Per-character clock, advanced once per rendered frame
    pub time: f32,
    /// Velocity the controller wants the body to have
    pub velocity: Vec2,
    pub grounded: bool,
    /// Clock value at the most recent grounded -> airborne transition
    pub frame_left_grounded: f32,
    pub gravity_reversed: bool,
    pub jump_to_consume: bool,
    /// Clock value of the last latched press, `f32::MIN` when there is none
    pub time_jump_was_pressed: f32,
    pub buffered_jump_usable: bool,
    pub coyote_usable: bool,
    pub ended_jump_early: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MovementState {
    pub fn new(gravity_reversed: bool) -> Self {
        Self {
            time: 0.0,
            velocity: Vec2::ZERO,
            grounded: false,
            frame_left_grounded: f32::MIN,
            gravity_reversed,
            jump_to_consume: false,
            time_jump_was_pressed: f32::MIN,
            buffered_jump_usable: false,
            coyote_usable: false,
            ended_jump_early: false,
        }
    }

    /// +1 when "up" is +y, -1 when gravity is reversed
    pub fn up_sign(&self) -> f32 {
        if self.gravity_reversed { -1.0 } else { 1.0 }
    }

    /// True when `vy` moves away from the ground under the current gravity
    fn is_rising(&self, vy: f32) -> bool {
        if self.gravity_reversed {
            vy < 0.0
        } else {
            vy > 0.0
        }
    }

    pub fn advance_clock(&mut self, dt: f32) {
        self.time += sanitize_step(dt);
    }

    /// Latch a jump press so a fixed tick running later still sees it.
    /// This is the source of the jump buffer.
    pub fn latch_jump(&mut self, input: &FrameInput) {
        if input.jump_down {
            self.jump_to_consume = true;
            self.time_jump_was_pressed = self.time;
        }
    }

    pub fn has_buffered_jump(&self, stats: &MovementStats) -> bool {
        self.buffered_jump_usable && self.time < self.time_jump_was_pressed + stats.jump_buffer
    }

    pub fn can_use_coyote(&self, stats: &MovementStats) -> bool {
        self.coyote_usable
            && !self.grounded
            && self.time < self.frame_left_grounded + stats.coyote_time
    }

    /// Apply a ground/ceiling probe result and handle grounded transitions.
    pub fn apply_contacts(&mut self, contacts: ContactProbe, events: &mut Vec<MovementEvent>) {
        if contacts.ceiling_hit {
            self.velocity.y = if self.gravity_reversed {
                self.velocity.y.max(0.0)
            } else {
                self.velocity.y.min(0.0)
            };
        }

        if !self.grounded && contacts.ground_hit {
            self.grounded = true;
            self.coyote_usable = true;
            self.buffered_jump_usable = true;
            self.ended_jump_early = false;
            events.push(MovementEvent::GroundedChanged {
                grounded: true,
                impact_speed: self.velocity.y.abs(),
            });

            if self.velocity.x.abs() < LANDING_STICK_SPEED {
                self.velocity.x = 0.0;
            }
        } else if self.grounded && !contacts.ground_hit {
            self.grounded = false;
            self.frame_left_grounded = self.time;
            events.push(MovementEvent::GroundedChanged {
                grounded: false,
                impact_speed: 0.0,
            });
        }
    }

    /// Early-release detection followed by fresh/buffered/coyote jump resolution.
    ///
    /// `body_vy` is the physics body's current vertical velocity, which can differ
    /// from [`velocity`](Self::velocity) after the solver resolved contacts.
    pub fn handle_jump(
        &mut self,
        input: &FrameInput,
        body_vy: f32,
        stats: &MovementStats,
        events: &mut Vec<MovementEvent>,
    ) {
        if !self.ended_jump_early && !self.grounded && !input.jump_held && self.is_rising(body_vy)
        {
            self.ended_jump_early = true;
        }

        if !self.jump_to_consume && !self.has_buffered_jump(stats) {
            return;
        }

        if self.grounded || self.can_use_coyote(stats) {
            self.execute_jump(stats, events);
        }

        self.jump_to_consume = false;
    }

    pub fn execute_jump(&mut self, stats: &MovementStats, events: &mut Vec<MovementEvent>) {
        self.ended_jump_early = false;
        self.time_jump_was_pressed = f32::MIN;
        self.buffered_jump_usable = false;
        self.coyote_usable = false;
        self.velocity.y = self.up_sign() * stats.jump_power;
        events.push(MovementEvent::Jumped);
    }

    pub fn handle_direction(&mut self, move_x: f32, stats: &MovementStats, dt: f32) {
        let dt = sanitize_step(dt);

        if move_x == 0.0 {
            let deceleration = if self.grounded {
                stats.ground_deceleration
            } else {
                stats.air_deceleration
            };
            self.velocity.x = move_towards(self.velocity.x, 0.0, deceleration * dt);
        } else {
            // Air control uses the ground rate as well
            self.velocity.x = move_towards(
                self.velocity.x,
                move_x * stats.max_speed,
                stats.acceleration * dt,
            );
        }
    }

    pub fn handle_gravity(&mut self, stats: &MovementStats, dt: f32) {
        let dt = sanitize_step(dt);

        let settled = if self.gravity_reversed {
            self.velocity.y >= 0.0
        } else {
            self.velocity.y <= 0.0
        };

        if self.grounded && settled {
            self.velocity.y = self.up_sign() * stats.grounding_force;
            return;
        }

        let mut in_air_gravity = stats.fall_acceleration;
        if self.ended_jump_early && self.is_rising(self.velocity.y) {
            in_air_gravity *= stats.jump_end_early_gravity_modifier;
        }

        let target_fall_speed = -self.up_sign() * stats.max_fall_speed;
        self.velocity.y = move_towards(self.velocity.y, target_fall_speed, in_air_gravity * dt);
    }

    /// Change the gravity direction. Returns false when nothing changed.
    ///
    /// A flip always leaves the character airborne with a fresh coyote window.
    pub fn set_gravity_reversed(
        &mut self,
        reversed: bool,
        events: &mut Vec<MovementEvent>,
    ) -> bool {
        if self.gravity_reversed == reversed {
            return false;
        }

        self.gravity_reversed = reversed;
        events.push(MovementEvent::GravityReversedChanged { reversed });

        if self.grounded {
            events.push(MovementEvent::GroundedChanged {
                grounded: false,
                impact_speed: 0.0,
            });
        }
        self.grounded = false;
        self.frame_left_grounded = self.time;
        true
    }

    pub fn apply_gravity_command(
        &mut self,
        command: GravityCommand,
        events: &mut Vec<MovementEvent>,
    ) -> bool {
        self.set_gravity_reversed(command.resolve(self.gravity_reversed), events)
    }

    /// One fixed step of the pipeline: contacts, jump, horizontal, gravity.
    /// Returns the velocity to commit to the physics body.
    pub fn tick(
        &mut self,
        stats: &MovementStats,
        input: &FrameInput,
        contacts: ContactProbe,
        body_velocity: Vec2,
        dt: f32,
        events: &mut Vec<MovementEvent>,
    ) -> Vec2 {
        self.apply_contacts(contacts, events);
        self.handle_jump(input, body_velocity.y, stats, events);
        self.handle_direction(input.movement.x, stats, dt);
        self.handle_gravity(stats, dt);
        self.velocity
    }
}
