//! Commit handler — the funds-checked act of finalising a placement.
//!
//! Funds check, ledger charge, slot block and entity spawn all happen inside
//! one system run, so two presses in the same frame are checked against the
//! balance left by the first.

use bevy::prelude::*;
use crate::shared::*;
use super::sessions::{disarm_session, PlacementSessions};
use super::spawning::FarmSpawner;

/// Result of the funds guard for one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitCheck {
    Affordable { cost: i64 },
    InsufficientFunds { cost: i64, projected: i64 },
}

pub fn check_funds(ledger: &EconomyLedger, cost_table: &CostTable, kind: Placeable) -> CommitCheck {
    let cost = cost_table.cost(kind.cost_key());
    let projected = ledger.projected(cost);
    if projected < 0 {
        CommitCheck::InsufficientFunds { cost, projected }
    } else {
        CommitCheck::Affordable { cost }
    }
}

pub fn commit_placements(
    mut commits: EventReader<CommitPlacementEvent>,
    mut spawner: FarmSpawner,
    mut ledger: ResMut<EconomyLedger>,
    cost_table: Res<CostTable>,
    mut sessions: ResMut<PlacementSessions>,
    mut slots: Query<&mut InteractiveSlot>,
    slot_info: Query<(&Transform, Option<&LandPlot>), With<InteractiveSlot>>,
    mut resolved: EventWriter<PlacementResolvedEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut floating: EventWriter<FloatingAmountEvent>,
) {
    for commit in commits.read() {
        let kind = commit.kind;
        let Ok((transform, land_plot)) = slot_info.get(commit.slot) else {
            warn!("[Placement] Commit on missing slot {:?}", commit.slot);
            continue;
        };
        let transform = *transform;
        let is_land_plot = land_plot.is_some();

        let blocked = slots.get(commit.slot).map_or(true, |slot| slot.is_blocked());
        if blocked {
            warn!("[Placement] Slot {:?} already taken; {:?} dropped", commit.slot, kind);
            resolved.send(PlacementResolvedEvent {
                kind,
                slot: commit.slot,
                placed: None,
                committed: false,
            });
            continue;
        }

        let cost = match check_funds(&ledger, &cost_table, kind) {
            CommitCheck::Affordable { cost } => cost,
            CommitCheck::InsufficientFunds { cost, projected } => {
                warn!(
                    "[Placement] Cannot afford {:?} ({}): balance {} would become {}",
                    kind,
                    cost,
                    ledger.balance(),
                    projected
                );
                sfx.send(PlaySfxEvent {
                    cue: SoundCue::Negative,
                });
                if let Some(session) = sessions.close(kind.category()) {
                    disarm_session(&session, &mut slots);
                }
                resolved.send(PlacementResolvedEvent {
                    kind,
                    slot: commit.slot,
                    placed: None,
                    committed: false,
                });
                continue;
            }
        };

        ledger.add(cost, &format!("{:?}", kind));

        let placed = match kind {
            Placeable::Land(land) => {
                // Land keeps the plot's yaw only.
                let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
                let parcel_transform = Transform::from_translation(transform.translation)
                    .with_rotation(Quat::from_rotation_y(yaw));
                spawner.parcel(land, parcel_transform).0
            }
            Placeable::Cattle(cattle) => spawner.livestock(cattle, transform),
            Placeable::Crop(crop) => {
                spawner.crop(Crop::planted(crop, Some(commit.slot)), transform)
            }
        };

        // Cattle occupy the slot for good; crops until harvested.
        if let Ok(mut slot) = slots.get_mut(commit.slot) {
            slot.block(Some(placed));
        }
        if is_land_plot {
            // A plot takes exactly one parcel and then goes away.
            spawner.commands.entity(commit.slot).despawn_recursive();
        }
        sessions.forget_slot(commit.slot);

        floating.send(FloatingAmountEvent {
            amount: cost,
            position: transform.translation + Vec3::Y * 2.0,
        });
        sfx.send(PlaySfxEvent {
            cue: SoundCue::Coins,
        });
        info!("[Placement] Placed {:?} at {:?}", kind, commit.slot);

        resolved.send(PlacementResolvedEvent {
            kind,
            slot: commit.slot,
            placed: Some(placed),
            committed: true,
        });
    }
}
