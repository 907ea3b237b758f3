//! Context domain — tearing a run down and starting over.
//!
//! On `ResetGameEvent` every slot is disarmed, every farm entity despawned,
//! the run-scoped resources replaced with fresh defaults, and the state
//! machine sent back through `Loading`, which reseeds the ledger and starts
//! the Tutorial again.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use crate::daycycle::DayCycle;
use crate::levels::{ScriptRunner, TutorialProgress};
use crate::placement::PlacementSessions;
use crate::shared::*;

pub struct ContextPlugin;

impl Plugin for ContextPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, reset_game);
    }
}

#[derive(SystemParam)]
pub struct RunResources<'w> {
    context: ResMut<'w, GameContext>,
    menu: ResMut<'w, MenuState>,
    sessions: ResMut<'w, PlacementSessions>,
    day_cycle: ResMut<'w, DayCycle>,
    runner: ResMut<'w, ScriptRunner>,
    tutorial: ResMut<'w, TutorialProgress>,
}

impl RunResources<'_> {
    fn reset(&mut self) {
        *self.context = GameContext::default();
        *self.menu = MenuState::default();
        *self.sessions = PlacementSessions::default();
        self.day_cycle.reset();
        self.runner.clear();
        *self.tutorial = TutorialProgress::default();
    }
}

pub fn reset_game(
    mut events: EventReader<ResetGameEvent>,
    mut commands: Commands,
    mut slots: Query<&mut InteractiveSlot>,
    farm: Query<Entity, With<FarmEntity>>,
    mut run: RunResources,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    for mut slot in slots.iter_mut() {
        slot.disable();
    }
    let mut despawned = 0;
    for entity in farm.iter() {
        commands.entity(entity).despawn_recursive();
        despawned += 1;
    }
    run.reset();

    info!("[Context] Reset: removed {} farm entities", despawned);
    next_state.set(GameState::Loading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn test_reset_clears_farm_and_context() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<GameState>()
            .add_event::<ResetGameEvent>()
            .init_resource::<GameContext>()
            .init_resource::<MenuState>()
            .init_resource::<PlacementSessions>()
            .init_resource::<DayCycle>()
            .init_resource::<ScriptRunner>()
            .init_resource::<TutorialProgress>()
            .add_plugins(ContextPlugin);

        let mut slot = InteractiveSlot::default();
        slot.enable(None, PressAction::Harvest);
        let crop = app
            .world_mut()
            .spawn((FarmEntity, Crop::mature(CropKind::Corn, None), slot))
            .id();
        let bystander = app.world_mut().spawn(Transform::default()).id();
        {
            let mut context = app.world_mut().resource_mut::<GameContext>();
            context.crops.push(crop);
            context.days_survived = 4;
            context.level = Some(LevelKind::Main);
        }
        app.world_mut().resource_mut::<MenuState>().enable_all();

        app.world_mut().send_event(ResetGameEvent);
        app.update();

        assert!(!app.world().entities().contains(crop));
        assert!(app.world().entities().contains(bystander));
        let context = app.world().resource::<GameContext>();
        assert!(context.is_empty());
        assert_eq!(context.days_survived, 0);
        assert_eq!(context.level, None);
        assert!(!app.world().resource::<MenuState>().is_enabled(MenuButton::SkipDay));
    }
}
