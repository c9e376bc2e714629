//! Gravity domain: flip sources.

use bevy::prelude::*;

use crate::movement::GravityCommand;

/// Sensor volume that sends its command to any controller entering it
#[derive(Component, Debug, Clone, Copy)]
pub struct GravityZone {
    pub command: GravityCommand,
}

/// Toggles the player's gravity every `interval` seconds
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct GravityFlipSchedule {
    pub interval: Option<f32>,
    pub elapsed: f32,
}

impl GravityFlipSchedule {
    pub fn new(interval: Option<f32>) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Interval in use, if any. Zero, negative and non-finite intervals disable the schedule.
    pub fn active_interval(&self) -> Option<f32> {
        self.interval
            .filter(|interval| interval.is_finite() && *interval > 0.0)
    }

    /// Advance by `dt`. Returns true when a flip is due; the timer then restarts from zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(interval) = self.active_interval() else {
            return false;
        };

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }

        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
