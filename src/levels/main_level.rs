//! Main level — free play.
//!
//! No script: menu buttons start placement sessions, Skip-Day ends the day,
//! and button availability follows what is still free on the farm.

use bevy::prelude::*;
use crate::daycycle::DayCycle;
use crate::placement::FarmSpawner;
use crate::shared::*;

pub fn start_main_level(
    mut spawner: FarmSpawner,
    config: Res<GameConfig>,
    mut menu: ResMut<MenuState>,
) {
    spawner.context.level = Some(LevelKind::Main);
    for plot in &config.land_plots {
        spawner.land_plot(plot.transform(), Vec3::from_array(plot.extent));
    }

    menu.home_visible = true;
    menu.skip_day_visible = true;
    menu.money_visible = true;
    menu.enable_all();
    info!("[Main] Started with {} land plots", config.land_plots.len());
}

/// Menu presses become placement sessions or a day end. Nothing can be
/// placed while the day is ending.
pub fn route_main_menu(
    mut actions: EventReader<MenuActionEvent>,
    menu: Res<MenuState>,
    cycle: Res<DayCycle>,
    mut enable: EventWriter<EnablePlacementEvent>,
    mut finish_day: EventWriter<FinishDayEvent>,
) {
    for action in actions.read() {
        if !menu.is_enabled(action.button) {
            debug!("[Main] {:?} is disabled", action.button);
            continue;
        }
        if let Some(kind) = action.button.placeable() {
            if cycle.is_running() {
                debug!("[Main] {:?} ignored while the day ends", action.button);
                continue;
            }
            enable.send(EnablePlacementEvent { kind });
        } else if action.button == MenuButton::SkipDay {
            finish_day.send(FinishDayEvent);
        }
    }
}

/// What is still free on the farm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeSpace {
    pub land_plots: bool,
    pub fence_slots: bool,
    pub ground_slots: bool,
}

impl FreeSpace {
    pub fn apply(self, menu: &mut MenuState) {
        menu.set_enabled(self.land_plots, &[MenuButton::Land]);
        menu.set_enabled(self.land_plots, &MenuButton::LAND);
        menu.set_enabled(self.fence_slots, &[MenuButton::Cattle]);
        menu.set_enabled(self.fence_slots, &MenuButton::CATTLE);
        menu.set_enabled(self.ground_slots, &[MenuButton::Crop]);
        menu.set_enabled(self.ground_slots, &MenuButton::CROP);
    }
}

/// Greys out menus with nowhere left to place. Skip-Day belongs to the day
/// cycle and is left alone.
pub fn refresh_menu_availability(
    mut menu: ResMut<MenuState>,
    plots: Query<&InteractiveSlot, With<LandPlot>>,
    slots: Query<(&InteractiveSlot, &SlotOf)>,
    parcels: Query<&Parcel>,
) {
    let mut free = FreeSpace {
        land_plots: plots.iter().any(|plot| !plot.is_blocked()),
        ..default()
    };
    for (slot, owner) in slots.iter() {
        if slot.is_blocked() {
            continue;
        }
        match parcels.get(owner.0).map(|parcel| parcel.land) {
            Ok(LandKind::Fence) => free.fence_slots = true,
            Ok(LandKind::Ground) => free.ground_slots = true,
            Err(_) => {}
        }
    }

    let before = FreeSpace {
        land_plots: menu.is_enabled(MenuButton::Land),
        fence_slots: menu.is_enabled(MenuButton::Cattle),
        ground_slots: menu.is_enabled(MenuButton::Crop),
    };
    if before != free {
        debug!("[Main] Menu availability {:?}", free);
        free.apply(&mut menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_farm_greys_out_everything_but_skip_day() {
        let mut menu = MenuState::default();
        menu.enable_all();
        FreeSpace::default().apply(&mut menu);
        assert!(MenuButton::HOME.iter().all(|b| !menu.is_enabled(*b)));
        assert!(MenuButton::CROP.iter().all(|b| !menu.is_enabled(*b)));
        assert!(menu.is_enabled(MenuButton::SkipDay));
    }

    #[test]
    fn test_free_fence_enables_cattle_only() {
        let mut menu = MenuState::default();
        FreeSpace {
            fence_slots: true,
            ..default()
        }
        .apply(&mut menu);
        assert!(menu.is_enabled(MenuButton::Cattle));
        assert!(menu.is_enabled(MenuButton::Sheep));
        assert!(!menu.is_enabled(MenuButton::Corn));
        assert!(!menu.is_enabled(MenuButton::CattlePen));
    }
}
