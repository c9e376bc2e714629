//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::input::{prepare_input, read_keyboard, read_virtual_buttons};
use crate::movement::{
    ControllerDisabled, ControllerVariant, FrameInput, InputSource, MovementState,
    MovementStats, VirtualButtons,
};

/// Runs every rendered frame: advances each controller clock, samples its input
/// source and latches jump presses for the next fixed tick.
pub(crate) fn gather_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Res<VirtualButtons>,
    stats: Option<Res<MovementStats>>,
    mut query: Query<
        (
            &mut InputSource,
            &ControllerVariant,
            &mut FrameInput,
            &mut MovementState,
        ),
        Without<ControllerDisabled>,
    >,
) {
    let Some(stats) = stats else {
        return;
    };
    let dt = time.delta_secs();

    for (mut source, variant, mut frame_input, mut state) in &mut query {
        state.advance_clock(dt);

        let raw = match &mut *source {
            InputSource::Keyboard => read_keyboard(&keyboard),
            InputSource::VirtualButtons => read_virtual_buttons(&buttons),
            InputSource::Wander(wander) => wander.sample(dt),
        };

        let input = prepare_input(raw, &stats, variant);
        state.latch_jump(&input);
        *frame_input = input;
    }
}

pub(crate) fn clear_virtual_button_edges(mut buttons: ResMut<VirtualButtons>) {
    buttons.end_frame();
}
