//! Placement sessions — "enable placement mode for kind X".
//!
//! One session per category (land, cattle, crop). Opening a new session in a
//! category closes the previous one there first.

use bevy::prelude::*;
use std::collections::HashMap;
use crate::shared::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSession {
    pub kind: Placeable,
    pub slots: Vec<Entity>,
}

#[derive(Resource, Debug, Default)]
pub struct PlacementSessions {
    open: HashMap<PlacementCategory, PlacementSession>,
}

impl PlacementSessions {
    pub fn get(&self, category: PlacementCategory) -> Option<&PlacementSession> {
        self.open.get(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open(&mut self, session: PlacementSession) -> Option<PlacementSession> {
        self.open.insert(session.kind.category(), session)
    }

    pub fn close(&mut self, category: PlacementCategory) -> Option<PlacementSession> {
        self.open.remove(&category)
    }

    pub fn close_all(&mut self) -> Vec<PlacementSession> {
        self.open.drain().map(|(_, session)| session).collect()
    }

    /// Drops a committed slot from its session; an emptied session closes.
    pub fn forget_slot(&mut self, slot: Entity) {
        for session in self.open.values_mut() {
            session.slots.retain(|s| *s != slot);
        }
        self.open.retain(|_, session| !session.slots.is_empty());
    }
}

/// Which slots a kind may be placed on.
pub fn is_eligible(kind: Placeable, parcel_land: Option<LandKind>, is_land_plot: bool) -> bool {
    match kind {
        Placeable::Land(_) => is_land_plot,
        Placeable::Cattle(_) => parcel_land == Some(LandKind::Fence),
        Placeable::Crop(_) => parcel_land == Some(LandKind::Ground),
    }
}

/// Disarms every slot of `session` that is still waiting for a placement.
pub fn disarm_session(session: &PlacementSession, slots: &mut Query<&mut InteractiveSlot>) {
    for entity in &session.slots {
        let Ok(mut slot) = slots.get_mut(*entity) else {
            continue;
        };
        if matches!(slot.action(), Some(PressAction::Place(_))) {
            slot.disable();
        }
    }
}

pub fn cancel_placement_sessions(
    mut cancels: EventReader<CancelPlacementEvent>,
    mut sessions: ResMut<PlacementSessions>,
    mut slots: Query<&mut InteractiveSlot>,
) {
    if cancels.is_empty() {
        return;
    }
    cancels.clear();

    for session in sessions.close_all() {
        disarm_session(&session, &mut slots);
        info!("[Placement] Cancelled {:?} placement", session.kind);
    }
}

pub fn open_placement_sessions(
    mut requests: EventReader<EnablePlacementEvent>,
    mut sessions: ResMut<PlacementSessions>,
    candidates: Query<(Entity, Option<&SlotOf>, Option<&LandPlot>), With<InteractiveSlot>>,
    parcels: Query<&Parcel>,
    mut slots: Query<&mut InteractiveSlot>,
) {
    for request in requests.read() {
        let kind = request.kind;
        if let Some(previous) = sessions.close(kind.category()) {
            disarm_session(&previous, &mut slots);
        }

        let mut eligible: Vec<Entity> = candidates
            .iter()
            .filter(|(entity, slot_of, plot)| {
                let land = slot_of
                    .and_then(|owner| parcels.get(owner.0).ok())
                    .map(|parcel| parcel.land);
                let free = slots.get(*entity).is_ok_and(|slot| !slot.is_blocked());
                free && is_eligible(kind, land, plot.is_some())
            })
            .map(|(entity, ..)| entity)
            .collect();
        eligible.sort();

        eligible.retain(|entity| {
            slots
                .get_mut(*entity)
                .map(|mut slot| slot.enable(Some(kind), PressAction::Place(kind)))
                .unwrap_or(false)
        });

        if eligible.is_empty() {
            info!("[Placement] No free slot for {:?}", kind);
            continue;
        }
        info!("[Placement] {:?} placement open on {} slot(s)", kind, eligible.len());
        sessions.open(PlacementSession {
            kind,
            slots: eligible,
        });
    }
}
