mod shared;
mod data;
mod economy;
mod placement;
mod farming;
mod daycycle;
mod levels;
mod context;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Garden Makeover".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<CostTable>()
        .init_resource::<EconomyLedger>()
        .init_resource::<LayoutRegistry>()
        .init_resource::<GameConfig>()
        .init_resource::<GameContext>()
        .init_resource::<MenuState>()
        .init_resource::<Tickets>()
        // Collaborator requests
        .add_event::<ShowDialogEvent>()
        .add_event::<ShowConfirmationEvent>()
        .add_event::<ShowGameOverEvent>()
        .add_event::<PlayTransitionEvent>()
        .add_event::<PlayAnimationEvent>()
        .add_event::<FloatingAmountEvent>()
        .add_event::<PlaySfxEvent>()
        .add_event::<AmbientSoundEvent>()
        .add_event::<CameraShotEvent>()
        .add_event::<GuideEvent>()
        .add_event::<MoneyDisplayEvent>()
        // Collaborator answers
        .add_event::<DialogDismissedEvent>()
        .add_event::<ConfirmationAnsweredEvent>()
        .add_event::<GameOverAcknowledgedEvent>()
        .add_event::<TransitionFinishedEvent>()
        .add_event::<AnimationFinishedEvent>()
        .add_event::<SlotPressedEvent>()
        .add_event::<SlotHoverEvent>()
        .add_event::<MenuActionEvent>()
        // Cross-domain events
        .add_event::<EnablePlacementEvent>()
        .add_event::<CancelPlacementEvent>()
        .add_event::<CommitPlacementEvent>()
        .add_event::<PlacementResolvedEvent>()
        .add_event::<HarvestRequestEvent>()
        .add_event::<CropHarvestedEvent>()
        .add_event::<ScriptCueEvent>()
        .add_event::<GrowCropsEvent>()
        .add_event::<FinishDayEvent>()
        .add_event::<DayEndedEvent>()
        .add_event::<ResetGameEvent>()
        // Domain plugins
        .add_plugins(data::DataPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(placement::PlacementPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(daycycle::DayCyclePlugin)
        .add_plugins(levels::LevelsPlugin)
        .add_plugins(context::ContextPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
