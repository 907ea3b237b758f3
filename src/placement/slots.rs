//! Slot press and hover dispatch.
//!
//! The hit-testing collaborator reports presses and hovers on slot entities.
//! A press detaches the slot's action and forwards it to whoever owns it.

use bevy::prelude::*;
use crate::shared::*;

pub fn dispatch_slot_presses(
    mut presses: EventReader<SlotPressedEvent>,
    mut slots: Query<&mut InteractiveSlot>,
    mut commits: EventWriter<CommitPlacementEvent>,
    mut harvests: EventWriter<HarvestRequestEvent>,
    mut cues: EventWriter<ScriptCueEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    for press in presses.read() {
        let Ok(mut slot) = slots.get_mut(press.slot) else {
            warn!("[Placement] Press on unknown slot {:?}", press.slot);
            continue;
        };
        // Disarm before anything else so a second press finds nothing.
        let Some(action) = slot.take_action() else {
            debug!("[Placement] Ignoring press on idle slot {:?}", press.slot);
            continue;
        };

        sfx.send(PlaySfxEvent {
            cue: SoundCue::Click,
        });
        match action {
            PressAction::Place(kind) => {
                commits.send(CommitPlacementEvent {
                    slot: press.slot,
                    kind,
                });
            }
            PressAction::Harvest => {
                harvests.send(HarvestRequestEvent { crop: press.slot });
            }
            PressAction::Script(cue) => {
                cues.send(ScriptCueEvent {
                    cue,
                    slot: press.slot,
                });
            }
        }
    }
}

pub fn apply_slot_hover(
    mut hovers: EventReader<SlotHoverEvent>,
    mut slots: Query<&mut InteractiveSlot>,
) {
    for hover in hovers.read() {
        if let Ok(mut slot) = slots.get_mut(hover.slot) {
            slot.set_hovered(hover.hovered);
        }
    }
}
