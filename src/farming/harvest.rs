//! Harvest — pay out, play the disappear animation, then remove the crop and
//! free the slot it was planted on.

use bevy::prelude::*;
use std::collections::HashSet;
use crate::shared::*;

/// First half: pays the harvest income and starts the awaited animation.
pub fn begin_harvest(
    mut requests: EventReader<HarvestRequestEvent>,
    mut commands: Commands,
    crops: Query<(&Crop, &Transform), Without<Harvesting>>,
    cost_table: Res<CostTable>,
    mut ledger: ResMut<EconomyLedger>,
    mut tickets: ResMut<Tickets>,
    mut animations: EventWriter<PlayAnimationEvent>,
    mut floating: EventWriter<FloatingAmountEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    let mut started = HashSet::new();
    for request in requests.read() {
        let Ok((crop, transform)) = crops.get(request.crop) else {
            warn!("[Farming] Harvest request for unknown crop {:?}", request.crop);
            continue;
        };
        if !crop.is_mature() || !started.insert(request.crop) {
            warn!("[Farming] {:?} cannot be harvested now", request.crop);
            continue;
        }

        let income = cost_table.cost(CostKey::harvest(crop.kind));
        ledger.add(income, &format!("{:?} harvest", crop.kind));
        floating.send(FloatingAmountEvent {
            amount: income,
            position: transform.translation + Vec3::Y * 2.0,
        });
        sfx.send(PlaySfxEvent {
            cue: SoundCue::Coins,
        });

        let ticket = tickets.issue();
        commands.entity(request.crop).insert(Harvesting { ticket });
        animations.send(PlayAnimationEvent {
            ticket: Some(ticket),
            entity: request.crop,
            animation: Animation::Disappear,
            clip: None,
        });
    }
}

/// Second half: once the disappear animation is done, despawn the crop and
/// unblock its slot.
pub fn finish_harvest(
    mut finished: EventReader<AnimationFinishedEvent>,
    mut commands: Commands,
    harvesting: Query<(Entity, &Crop, &Harvesting)>,
    mut slots: Query<&mut InteractiveSlot, Without<Crop>>,
    cost_table: Res<CostTable>,
    mut context: ResMut<GameContext>,
    mut harvested: EventWriter<CropHarvestedEvent>,
) {
    for done in finished.read() {
        let Some((entity, crop, _)) = harvesting
            .iter()
            .find(|(_, _, harvesting)| harvesting.ticket == done.ticket)
        else {
            continue;
        };

        if let Some(mut slot) = crop.placed_at.and_then(|slot| slots.get_mut(slot).ok()) {
            slot.release();
        }
        context.forget(entity);
        commands.entity(entity).despawn_recursive();

        info!("[Farming] Harvested {:?} {:?}", crop.kind, entity);
        harvested.send(CropHarvestedEvent {
            crop: entity,
            kind: crop.kind,
            income: cost_table.cost(CostKey::harvest(crop.kind)),
        });
    }
}
