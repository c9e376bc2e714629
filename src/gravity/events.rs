//! Gravity domain: inbound gravity commands.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::GravityCommand;

/// Request a gravity change on one controller.
/// Queued on the controller and applied at its next fixed tick.
#[derive(Debug)]
pub struct ReverseGravity {
    pub target: Entity,
    pub command: GravityCommand,
}

impl Message for ReverseGravity {}
