//! Movement domain: outbound notifications from the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted by the pure controller core. Drained into messages once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementEvent {
    GroundedChanged { grounded: bool, impact_speed: f32 },
    Jumped,
    GravityReversedChanged { reversed: bool },
}

/// Fired on every grounded-state transition
#[derive(Debug)]
pub struct GroundedChanged {
    pub entity: Entity,
    pub grounded: bool,
    /// Absolute vertical speed at landing, 0 when leaving the ground
    pub impact_speed: f32,
}

impl Message for GroundedChanged {}

/// Fired on every successful jump (fresh, buffered or coyote)
#[derive(Debug)]
pub struct Jumped {
    pub entity: Entity,
}

impl Message for Jumped {}

/// Fired on every gravity flip
#[derive(Debug)]
pub struct GravityReversedChanged {
    pub entity: Entity,
    pub reversed: bool,
}

impl Message for GravityReversedChanged {}
