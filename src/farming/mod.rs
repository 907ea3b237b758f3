//! Farming domain — crop growth and harvest.
//!
//! Communicates with other domains exclusively through crate::shared events/resources.

use bevy::prelude::*;
use crate::shared::*;

mod growth;
mod harvest;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                growth::grow_crops_on_day_tick,
                harvest::begin_harvest,
                harvest::finish_harvest,
            )
                .chain()
                .run_if(not(in_state(GameState::Loading))),
        );
    }
}
