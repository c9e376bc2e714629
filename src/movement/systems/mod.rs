//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod lifecycle;
pub(crate) mod pipeline;

pub(crate) use input::{clear_virtual_button_edges, gather_input};
pub(crate) use lifecycle::{disable_unconfigured_controllers, hold_disabled_controllers};
pub(crate) use pipeline::{apply_gravity_commands, run_movement_pipeline};
