//! Crop growth — one stage per completed day.

use bevy::prelude::*;
use crate::shared::*;

/// Advances every crop one stage on `GrowCropsEvent`. A crop that reaches
/// maturity arms its own slot for harvest.
pub fn grow_crops_on_day_tick(
    mut grow_events: EventReader<GrowCropsEvent>,
    layouts: Res<LayoutRegistry>,
    mut crops: Query<(Entity, &mut Crop, &mut InteractiveSlot, Option<&mut Model>), Without<Harvesting>>,
) {
    if grow_events.is_empty() {
        return;
    }
    grow_events.clear();

    let mut matured = 0;
    for (entity, mut crop, mut slot, model) in crops.iter_mut() {
        let reached_maturity = crop.advance_stage();

        if let (Some(mut model), Some(def)) = (model, layouts.crops.get(&crop.kind)) {
            let asset = def.model_for(crop.stage());
            if model.asset != asset {
                model.asset = asset;
            }
        }

        if reached_maturity {
            slot.enable(None, PressAction::Harvest);
            matured += 1;
            debug!("[Farming] {:?} {:?} is ready to harvest", crop.kind, entity);
        }
    }

    info!("[Farming] Crops grew; {} newly mature", matured);
}
