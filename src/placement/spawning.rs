//! Farm entity construction, shared by placement commits and level scripts.
//!
//! Everything spawned here carries `FarmEntity` and is recorded in
//! `GameContext`, so a reset can find and remove it. Slots are spawned as
//! top-level entities with their world transform baked in at construction.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use crate::shared::*;

#[derive(SystemParam)]
pub struct FarmSpawner<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub context: ResMut<'w, GameContext>,
    pub animations: EventWriter<'w, PlayAnimationEvent>,
    pub ambient: EventWriter<'w, AmbientSoundEvent>,
    layouts: Res<'w, LayoutRegistry>,
}

impl FarmSpawner<'_, '_> {
    /// Spawns a Fence or Ground parcel and its slots. Returns the parcel and
    /// its slots (with their world transforms) in layout order.
    pub fn parcel(
        &mut self,
        land: LandKind,
        transform: Transform,
    ) -> (Entity, Vec<(Entity, Transform)>) {
        let parcel = self
            .commands
            .spawn((FarmEntity, Parcel { land }, transform))
            .id();

        let Some(def) = self.layouts.parcels.get(&land) else {
            warn!("[Placement] No layout for {:?}; parcel has no slots", land);
            self.commands.entity(parcel).insert(SlotRegistry::default());
            self.context.parcels.push(parcel);
            return (parcel, Vec::new());
        };

        let slots: Vec<(Entity, Transform)> = def
            .slots
            .iter()
            .map(|layout| {
                let world = transform.mul_transform(slot_local_transform(layout));
                let slot = self
                    .commands
                    .spawn((
                        FarmEntity,
                        InteractiveSlot::default(),
                        SlotOf(parcel),
                        SlotExtent::default(),
                        world,
                    ))
                    .id();
                (slot, world)
            })
            .collect();

        self.commands.entity(parcel).insert((
            Model {
                asset: def.model,
                scale: def.scale,
            },
            SlotRegistry {
                slots: slots.iter().map(|(slot, _)| *slot).collect(),
            },
        ));
        self.animations.send(PlayAnimationEvent {
            ticket: None,
            entity: parcel,
            animation: Animation::Bounce,
            clip: None,
        });
        self.context.parcels.push(parcel);
        (parcel, slots)
    }

    pub fn livestock(&mut self, kind: CattleKind, transform: Transform) -> Entity {
        let animal = self
            .commands
            .spawn((FarmEntity, Livestock::new(kind), transform))
            .id();

        if let Some(def) = self.layouts.livestock.get(&kind) {
            self.commands.entity(animal).insert(Model {
                asset: def.model,
                scale: def.scale,
            });
            self.ambient.send(AmbientSoundEvent {
                entity: animal,
                cue: def.voice,
                min_interval: def.ambient_min_interval,
                max_interval: def.ambient_max_interval,
                volume: def.ambient_volume,
            });
        } else {
            warn!("[Placement] No model for {:?}", kind);
        }

        for animation in [Animation::Idle, Animation::Effect] {
            self.animate_livestock(animal, kind, animation);
        }
        self.context.livestock.push(animal);
        animal
    }

    /// Requests an animation on an animal, with its rig's clip when it has one.
    pub fn animate_livestock(&mut self, animal: Entity, kind: CattleKind, animation: Animation) {
        self.animations.send(PlayAnimationEvent {
            ticket: None,
            entity: animal,
            animation,
            clip: self.layouts.clip_for(kind, animation),
        });
    }

    /// Spawns a crop with its own (disarmed) harvest slot.
    pub fn crop(&mut self, crop: Crop, transform: Transform) -> Entity {
        let model = self.layouts.crops.get(&crop.kind).map(|def| Model {
            asset: def.model_for(crop.stage()),
            scale: def.scale,
        });
        let mut entity = self.commands.spawn((
            FarmEntity,
            crop,
            InteractiveSlot::default(),
            SlotExtent(Vec3::new(1.5, 2.0, 1.5)),
            transform,
        ));
        match model {
            Some(model) => {
                entity.insert(model);
            }
            None => warn!("[Placement] No crop models registered"),
        }
        let id = entity.id();

        self.animations.send(PlayAnimationEvent {
            ticket: None,
            entity: id,
            animation: Animation::Effect,
            clip: None,
        });
        self.context.crops.push(id);
        id
    }

    /// A bare press volume that accepts one new parcel.
    pub fn land_plot(&mut self, transform: Transform, extent: Vec3) -> Entity {
        self.commands
            .spawn((
                FarmEntity,
                LandPlot,
                InteractiveSlot::default(),
                SlotExtent(extent),
                transform,
            ))
            .id()
    }
}

pub fn slot_local_transform(layout: &SlotLayout) -> Transform {
    Transform::from_translation(layout.offset).with_rotation(Quat::from_rotation_y(layout.yaw))
}
