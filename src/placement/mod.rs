//! Placement domain — interactive slots, placement sessions, commits.
//!
//! Flow: a level sends `EnablePlacementEvent` → eligible free slots are armed
//! → the hit-testing collaborator sends `SlotPressedEvent` → the press is
//! dispatched as a commit → the commit charges the ledger, spawns the entity
//! and blocks the slot, then reports `PlacementResolvedEvent`.

use bevy::prelude::*;
use crate::shared::*;

pub mod commit;
pub mod sessions;
pub mod slots;
pub mod spawning;

pub use sessions::PlacementSessions;
pub use spawning::FarmSpawner;

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementSessions>().add_systems(
            Update,
            (
                sessions::cancel_placement_sessions,
                sessions::open_placement_sessions,
                slots::apply_slot_hover,
                slots::dispatch_slot_presses,
                commit::commit_placements,
            )
                .chain()
                .run_if(not(in_state(GameState::Loading))),
        );
    }
}
