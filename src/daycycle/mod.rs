//! Day cycle domain — the Skip-Day sequence: income, growth, rent, game over.
//!
//! Triggered by `FinishDayEvent`. Talks to the lighting and prompt
//! collaborators through ticketed request/answer events only.

use bevy::prelude::*;
use crate::shared::*;

pub mod finish_day;
pub mod insolvency;

pub use finish_day::{DayCycle, DayPhase};
pub use insolvency::MessagePicker;

pub struct DayCyclePlugin;

impl Plugin for DayCyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayCycle>()
            .init_resource::<MessagePicker>()
            .add_systems(
                Update,
                (
                    finish_day::begin_finish_day,
                    finish_day::on_confirmation_answered,
                    finish_day::on_transition_finished,
                    finish_day::on_insolvency_dismissed,
                    finish_day::on_game_over_acknowledged,
                )
                    .chain()
                    .run_if(not(in_state(GameState::Loading))),
            );
    }
}
