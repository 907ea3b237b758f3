//! Levels domain — the scripted Tutorial and the free-play Main level.
//!
//! The Tutorial runs a linear step queue that parks on dialogs and on the
//! quest gate. Main only routes menu buttons and keeps their availability
//! in line with the farm.

use bevy::prelude::*;
use crate::shared::*;

pub mod gate;
pub mod main_level;
pub mod script;
pub mod tutorial;

pub use gate::{GateError, QuestGate};
pub use script::{ScriptRunner, ScriptStep, TutorialQuest};
pub use tutorial::TutorialProgress;

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptRunner>()
            .init_resource::<TutorialProgress>()
            .add_systems(OnEnter(GameState::Tutorial), tutorial::start_tutorial)
            .add_systems(OnExit(GameState::Tutorial), tutorial::leave_tutorial)
            .add_systems(
                Update,
                (
                    tutorial::route_tutorial_menu,
                    tutorial::on_tutorial_placement,
                    tutorial::pen_loose_sheep,
                    tutorial::count_tutorial_harvest,
                    tutorial::tick_sheep_damage,
                    tutorial::run_tutorial_script,
                )
                    .chain()
                    .run_if(in_state(GameState::Tutorial)),
            )
            .add_systems(OnEnter(GameState::Main), main_level::start_main_level)
            .add_systems(
                Update,
                (main_level::route_main_menu, main_level::refresh_menu_availability)
                    .chain()
                    .run_if(in_state(GameState::Main)),
            );
    }
}
