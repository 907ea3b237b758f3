use bevy::prelude::*;
use crate::shared::*;

/// Populate the LayoutRegistry: parcel slot layouts, animal and crop models.
pub fn populate_layouts(registry: &mut LayoutRegistry) {
    registry.parcels.clear();
    registry.livestock.clear();
    registry.crops.clear();

    // ── Land ────────────────────────────────────────────────────────────────

    // Cattle pen: three animal spots, each turned a little differently.
    registry.parcels.insert(
        LandKind::Fence,
        ParcelDef {
            land: LandKind::Fence,
            model: "fence",
            scale: 1.0,
            slots: vec![
                SlotLayout { offset: Vec3::new(1.6, 0.0, 2.95), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(-0.2, 0.0, -2.3), yaw: 0.67 },
                SlotLayout { offset: Vec3::new(-1.5, 0.0, 2.65), yaw: -0.23 },
            ],
        },
    );

    // Cropland: two rows of three beds.
    registry.parcels.insert(
        LandKind::Ground,
        ParcelDef {
            land: LandKind::Ground,
            model: "ground",
            scale: 1.0,
            slots: vec![
                SlotLayout { offset: Vec3::new(-1.7, 0.0, -3.25), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(-1.7, 0.0, 0.0), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(-1.7, 0.0, 3.5), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(1.7, 0.0, -3.25), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(1.7, 0.0, 0.0), yaw: 0.0 },
                SlotLayout { offset: Vec3::new(1.7, 0.0, 3.5), yaw: 0.0 },
            ],
        },
    );

    // ── Livestock ───────────────────────────────────────────────────────────

    registry.livestock.insert(
        CattleKind::Chicken,
        LivestockDef {
            kind: CattleKind::Chicken,
            model: "chicken_1",
            scale: 1.0,
            idle_clip: "idle_chicken",
            action_clip: "action_chicken",
            voice: SoundCue::Chicken,
            ambient_min_interval: 30.0,
            ambient_max_interval: 120.0,
            ambient_volume: 0.2,
        },
    );
    registry.livestock.insert(
        CattleKind::Cow,
        LivestockDef {
            kind: CattleKind::Cow,
            model: "cow_1",
            scale: 1.0,
            idle_clip: "idle_cow",
            action_clip: "action_cow",
            voice: SoundCue::Cow,
            ambient_min_interval: 20.0,
            ambient_max_interval: 90.0,
            ambient_volume: 0.3,
        },
    );
    registry.livestock.insert(
        CattleKind::Sheep,
        LivestockDef {
            kind: CattleKind::Sheep,
            model: "sheep_1",
            scale: 1.0,
            idle_clip: "idle_sheep",
            action_clip: "action_sheep",
            voice: SoundCue::Sheep,
            ambient_min_interval: 15.0,
            ambient_max_interval: 90.0,
            ambient_volume: 0.4,
        },
    );

    // ── Crops ───────────────────────────────────────────────────────────────

    for (kind, stage_models) in [
        (CropKind::Corn, ["corn_1", "corn_2", "corn_3"]),
        (CropKind::Grape, ["grape_1", "grape_2", "grape_3"]),
        (CropKind::Strawberry, ["strawberry_1", "strawberry_2", "strawberry_3"]),
        (CropKind::Tomato, ["tomato_1", "tomato_2", "tomato_3"]),
    ] {
        registry.crops.insert(
            kind,
            CropDef {
                kind,
                stage_models,
                scale: 1.0,
            },
        );
    }
}
