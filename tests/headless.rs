//! Headless integration tests for Garden Makeover.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, add every domain plugin
//! (no rendering or UI), and stand in for the rendering/UI collaborators with
//! a test system that answers every prompt, transition and animation while
//! recording what was shown.
//!
//! Run with: `cargo test --test headless`

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use garden_makeover::context::ContextPlugin;
use garden_makeover::data::{costs, layouts, DataPlugin};
use garden_makeover::daycycle::finish_day::{FINISH_DAY_PROMPT, GAME_OVER_TEXT};
use garden_makeover::daycycle::insolvency::INSOLVENCY_MESSAGES;
use garden_makeover::daycycle::{DayCycle, DayCyclePlugin, MessagePicker};
use garden_makeover::economy::EconomyPlugin;
use garden_makeover::farming::FarmingPlugin;
use garden_makeover::levels::{LevelsPlugin, TutorialProgress, TutorialQuest};
use garden_makeover::placement::PlacementPlugin;
use garden_makeover::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test collaborator — answers every awaited request and keeps a transcript
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Resource, Debug)]
struct Collaborator {
    accept_day_end: bool,
    /// Leave confirmations unanswered; their tickets wait in `held_confirmations`.
    hold_confirmations: bool,
    held_confirmations: Vec<Ticket>,
    dialogs: Vec<String>,
    confirmations: Vec<String>,
    /// (text, fatal, balance when shown)
    game_overs: Vec<(String, bool, i64)>,
    transitions: Vec<TimeOfDay>,
    floating: Vec<i64>,
    sfx: Vec<SoundCue>,
    day_ends: Vec<(u32, i64)>,
    resolved: Vec<(Placeable, bool)>,
}

impl Default for Collaborator {
    fn default() -> Self {
        Self {
            accept_day_end: true,
            hold_confirmations: false,
            held_confirmations: Vec::new(),
            dialogs: Vec::new(),
            confirmations: Vec::new(),
            game_overs: Vec::new(),
            transitions: Vec::new(),
            floating: Vec::new(),
            sfx: Vec::new(),
            day_ends: Vec::new(),
            resolved: Vec::new(),
        }
    }
}

fn answer_requests(
    mut collaborator: ResMut<Collaborator>,
    ledger: Res<EconomyLedger>,
    mut dialogs: EventReader<ShowDialogEvent>,
    mut confirmations: EventReader<ShowConfirmationEvent>,
    mut game_overs: EventReader<ShowGameOverEvent>,
    mut transitions: EventReader<PlayTransitionEvent>,
    mut animations: EventReader<PlayAnimationEvent>,
    mut dismissed: EventWriter<DialogDismissedEvent>,
    mut answered: EventWriter<ConfirmationAnsweredEvent>,
    mut acknowledged: EventWriter<GameOverAcknowledgedEvent>,
    mut transitioned: EventWriter<TransitionFinishedEvent>,
    mut animated: EventWriter<AnimationFinishedEvent>,
) {
    for event in dialogs.read() {
        collaborator.dialogs.push(event.text.clone());
        dismissed.send(DialogDismissedEvent {
            ticket: event.ticket,
        });
    }
    for event in confirmations.read() {
        collaborator.confirmations.push(event.text.clone());
        if collaborator.hold_confirmations {
            collaborator.held_confirmations.push(event.ticket);
            continue;
        }
        answered.send(ConfirmationAnsweredEvent {
            ticket: event.ticket,
            accepted: collaborator.accept_day_end,
        });
    }
    for event in game_overs.read() {
        collaborator
            .game_overs
            .push((event.text.clone(), event.fatal, ledger.balance()));
        acknowledged.send(GameOverAcknowledgedEvent {
            ticket: event.ticket,
        });
    }
    for event in transitions.read() {
        collaborator.transitions.push(event.to);
        transitioned.send(TransitionFinishedEvent {
            ticket: event.ticket,
        });
    }
    for event in animations.read() {
        if let Some(ticket) = event.ticket {
            animated.send(AnimationFinishedEvent { ticket });
        }
    }
}

fn record_outcomes(
    mut collaborator: ResMut<Collaborator>,
    mut floating: EventReader<FloatingAmountEvent>,
    mut sfx: EventReader<PlaySfxEvent>,
    mut day_ends: EventReader<DayEndedEvent>,
    mut resolved: EventReader<PlacementResolvedEvent>,
) {
    for event in floating.read() {
        collaborator.floating.push(event.amount);
    }
    for event in sfx.read() {
        collaborator.sfx.push(event.cue);
    }
    for event in day_ends.read() {
        collaborator.day_ends.push((event.day, event.balance));
    }
    for event in resolved.read() {
        collaborator.resolved.push((event.kind, event.committed));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a headless app with all shared resources, events and domain
/// plugins registered (mirrors main.rs minus the window and UI), starting in
/// `initial`.
fn build_test_app(initial: GameState) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game State ───────────────────────────────────────────────────────
    app.insert_state(initial);

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<CostTable>()
        .init_resource::<EconomyLedger>()
        .init_resource::<LayoutRegistry>()
        .init_resource::<GameConfig>()
        .init_resource::<GameContext>()
        .init_resource::<MenuState>()
        .init_resource::<Tickets>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<ShowDialogEvent>()
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
        .add_event::<DialogDismissedEvent>()
        .add_event::<ConfirmationAnsweredEvent>()
        .add_event::<GameOverAcknowledgedEvent>()
        .add_event::<TransitionFinishedEvent>()
        .add_event::<AnimationFinishedEvent>()
        .add_event::<SlotPressedEvent>()
        .add_event::<SlotHoverEvent>()
        .add_event::<MenuActionEvent>()
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
        .add_event::<ResetGameEvent>();

    // ── Collaborator stand-in ────────────────────────────────────────────
    app.init_resource::<Collaborator>()
        .add_systems(Update, (answer_requests, record_outcomes));

    // ── Domain plugins ───────────────────────────────────────────────────
    app.add_plugins((
        EconomyPlugin,
        PlacementPlugin,
        FarmingPlugin,
        DayCyclePlugin,
        LevelsPlugin,
        ContextPlugin,
    ));

    app
}

/// The whole game from boot: Loading → Tutorial.
fn build_game_app() -> App {
    let mut app = build_test_app(GameState::Loading);
    app.add_plugins(DataPlugin);
    app
}

/// Starts straight in the Main level with seeded data and `balance`.
fn build_main_app(balance: i64) -> App {
    let mut app = build_test_app(GameState::Main);

    let mut table = CostTable::default();
    costs::populate_costs(&mut table);
    let mut registry = LayoutRegistry::default();
    layouts::populate_layouts(&mut registry);
    app.insert_resource(table)
        .insert_resource(registry)
        .insert_resource(EconomyLedger::new(balance));

    app.update(); // enter Main, spawn land plots
    app
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Ticks until `done` holds, up to `max_frames` frames.
fn run_until(app: &mut App, max_frames: usize, mut done: impl FnMut(&mut App) -> bool) -> bool {
    for _ in 0..max_frames {
        if done(app) {
            return true;
        }
        app.update();
    }
    done(app)
}

fn balance(app: &App) -> i64 {
    app.world().resource::<EconomyLedger>().balance()
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn collaborator(app: &App) -> &Collaborator {
    app.world().resource::<Collaborator>()
}

fn click(app: &mut App, button: MenuButton) {
    app.world_mut().send_event(MenuActionEvent { button });
}

fn press(app: &mut App, slot: Entity) {
    app.world_mut().send_event(SlotPressedEvent { slot });
}

fn finish_day(app: &mut App) {
    app.world_mut().send_event(FinishDayEvent);
}

/// Slots currently armed with `action`, in entity order.
fn armed_slots(app: &mut App, action: PressAction) -> Vec<Entity> {
    let mut query = app.world_mut().query::<(Entity, &InteractiveSlot)>();
    let mut found: Vec<Entity> = query
        .iter(app.world())
        .filter(|(_, slot)| slot.action() == Some(action))
        .map(|(entity, _)| entity)
        .collect();
    found.sort();
    found
}

fn count<T: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&T>();
    query.iter(app.world()).count()
}

fn parcels_of(app: &mut App, land: LandKind) -> Vec<Entity> {
    let mut query = app.world_mut().query::<(Entity, &Parcel)>();
    query
        .iter(app.world())
        .filter(|(_, parcel)| parcel.land == land)
        .map(|(entity, _)| entity)
        .collect()
}

fn slot(app: &App, entity: Entity) -> InteractiveSlot {
    app.world()
        .get::<InteractiveSlot>(entity)
        .cloned()
        .expect("slot exists")
}

/// Opens a placement session from the menu and commits on its first slot.
fn place_first(app: &mut App, button: MenuButton) -> Entity {
    let kind = button.placeable().expect("placement button");
    let action = PressAction::Place(kind);
    assert!(
        run_until(app, 10, |app| app.world().resource::<MenuState>().is_enabled(button)),
        "{:?} never became available",
        button
    );
    click(app, button);
    assert!(
        run_until(app, 10, |app| !armed_slots(app, action).is_empty()),
        "no slots armed for {:?}",
        kind
    );
    let target = armed_slots(app, action)[0];
    let resolved_before = collaborator(app).resolved.len();
    press(app, target);
    assert!(run_until(app, 10, |app| collaborator(app).resolved.len() > resolved_before));
    app.update(); // flush spawned slots
    target
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_boot_seeds_ledger_and_starts_tutorial() {
    let mut app = build_game_app();
    assert!(run_until(&mut app, 10, |app| state(app) == GameState::Tutorial));

    assert_eq!(balance(&app), DEFAULT_STARTING_BALANCE);
    let table = app.world().resource::<CostTable>();
    assert_eq!(table.entries.len(), CostKey::ALL.len());
    assert_eq!(table.cost(CostKey::RentDaily), -300);

    // The starting farm: six ripe corn on a ground, three chickens, one sheep.
    assert!(run_until(&mut app, 10, |app| count::<Livestock>(app) == 4));
    assert_eq!(count::<Crop>(&mut app), 6);
    assert_eq!(parcels_of(&mut app, LandKind::Ground).len(), 1);
    assert_eq!(count::<LandPlot>(&mut app), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Placement
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_a_ground_then_corn_is_charged_and_blocks_slot() {
    let mut app = build_main_app(50_000);
    assert_eq!(count::<LandPlot>(&mut app), 2);

    let plot = place_first(&mut app, MenuButton::Cropland);
    assert_eq!(balance(&app), 48_500);
    assert!(!app.world().entities().contains(plot), "land plot is consumed");
    let grounds = parcels_of(&mut app, LandKind::Ground);
    assert_eq!(grounds.len(), 1);
    let registry = app
        .world()
        .get::<SlotRegistry>(grounds[0])
        .expect("ground has slots");
    assert_eq!(registry.slots.len(), 6);

    let bed = place_first(&mut app, MenuButton::Corn);
    assert_eq!(balance(&app), 48_400);
    let bed_slot = slot(&app, bed);
    assert!(bed_slot.is_blocked());
    assert!(bed_slot.is_occupied());
    assert_eq!(count::<Crop>(&mut app), 1);
    assert!(collaborator(&app).floating.contains(&-1500));
    assert!(collaborator(&app).sfx.contains(&SoundCue::Coins));
}

#[test]
fn test_scenario_b_unaffordable_cow_is_rejected_and_slot_stays_free() {
    let mut app = build_main_app(1_000);
    place_first(&mut app, MenuButton::CattlePen);
    assert_eq!(balance(&app), 0);

    let slot_entity = place_first(&mut app, MenuButton::Cow);
    assert_eq!(balance(&app), 0);
    assert_eq!(
        collaborator(&app).resolved.last(),
        Some(&(Placeable::Cattle(CattleKind::Cow), false))
    );
    assert_eq!(count::<Livestock>(&mut app), 0);
    assert!(collaborator(&app).sfx.contains(&SoundCue::Negative));

    let rejected = slot(&app, slot_entity);
    assert!(!rejected.is_blocked());
    assert!(!rejected.is_occupied());
    // The whole session was cancelled.
    let cow = PressAction::Place(Placeable::Cattle(CattleKind::Cow));
    assert!(armed_slots(&mut app, cow).is_empty());

    // ...and the slot can be offered again.
    click(&mut app, MenuButton::Cow);
    assert!(run_until(&mut app, 10, |app| armed_slots(app, cow).contains(&slot_entity)));
}

#[test]
fn test_occupied_slot_is_not_offered_again() {
    let mut app = build_main_app(50_000);
    place_first(&mut app, MenuButton::CattlePen);
    let taken = place_first(&mut app, MenuButton::Cow);
    assert_eq!(balance(&app), 50_000 - 1_000 - 600);
    assert_eq!(count::<Livestock>(&mut app), 1);

    click(&mut app, MenuButton::Sheep);
    let sheep = PressAction::Place(Placeable::Cattle(CattleKind::Sheep));
    assert!(run_until(&mut app, 10, |app| !armed_slots(app, sheep).is_empty()));
    let offered = armed_slots(&mut app, sheep);
    assert_eq!(offered.len(), 2);
    assert!(!offered.contains(&taken));

    // A stale press on the occupied slot does nothing.
    press(&mut app, taken);
    app.update();
    app.update();
    assert_eq!(count::<Livestock>(&mut app), 1);
}

#[test]
fn test_same_frame_presses_cannot_overspend() {
    let mut app = build_main_app(2_100);
    place_first(&mut app, MenuButton::CattlePen);
    assert_eq!(balance(&app), 1_100);

    let cow = PressAction::Place(Placeable::Cattle(CattleKind::Cow));
    assert!(run_until(&mut app, 10, |app| {
        app.world().resource::<MenuState>().is_enabled(MenuButton::Cow)
    }));
    click(&mut app, MenuButton::Cow);
    assert!(run_until(&mut app, 10, |app| armed_slots(app, cow).len() >= 2));
    let armed = armed_slots(&mut app, cow);

    // Two presses land before either commit resolves.
    let resolved_before = collaborator(&app).resolved.len();
    press(&mut app, armed[0]);
    press(&mut app, armed[1]);
    assert!(run_until(&mut app, 10, |app| {
        collaborator(app).resolved.len() >= resolved_before + 2
    }));
    app.update();

    assert_eq!(balance(&app), 500);
    assert_eq!(count::<Livestock>(&mut app), 1);
    let outcomes: Vec<bool> = collaborator(&app).resolved[resolved_before..]
        .iter()
        .map(|(_, committed)| *committed)
        .collect();
    assert_eq!(outcomes, vec![true, false]);
    let occupied = [armed[0], armed[1]]
        .iter()
        .filter(|entity| slot(&app, **entity).is_occupied())
        .count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_menus_follow_free_space() {
    let mut app = build_main_app(50_000);
    assert!(run_until(&mut app, 5, |app| {
        let menu = app.world().resource::<MenuState>();
        menu.is_enabled(MenuButton::Land) && !menu.is_enabled(MenuButton::Cattle)
    }));

    place_first(&mut app, MenuButton::CattlePen);
    place_first(&mut app, MenuButton::Cropland);
    assert!(run_until(&mut app, 5, |app| {
        let menu = app.world().resource::<MenuState>();
        !menu.is_enabled(MenuButton::Land)
            && !menu.is_enabled(MenuButton::CattlePen)
            && menu.is_enabled(MenuButton::Cattle)
            && menu.is_enabled(MenuButton::Tomato)
    }));
    assert!(app.world().resource::<MenuState>().is_enabled(MenuButton::SkipDay));
}

// ─────────────────────────────────────────────────────────────────────────────
// Day cycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_c_corn_matures_after_two_nights_and_pays_on_harvest() {
    let mut app = build_main_app(50_000);
    place_first(&mut app, MenuButton::Cropland);
    let bed = place_first(&mut app, MenuButton::Corn);
    assert_eq!(balance(&app), 50_000 - 1_500 - 100);

    for day in 1..=2 {
        finish_day(&mut app);
        assert!(run_until(&mut app, 40, |app| collaborator(app).day_ends.len() == day));
    }
    assert_eq!(balance(&app), 50_000 - 1_500 - 100 - 600);

    let ready = armed_slots(&mut app, PressAction::Harvest);
    assert_eq!(ready.len(), 1);
    let crop = app.world().get::<Crop>(ready[0]).expect("armed slot is the crop");
    assert_eq!(crop.stage(), GrowthStage::Mature);

    press(&mut app, ready[0]);
    assert!(run_until(&mut app, 10, |app| count::<Crop>(app) == 0));
    assert_eq!(balance(&app), 50_000 - 1_500 - 100 - 600 + 250);
    assert!(!slot(&app, bed).is_blocked(), "bed is free again");
}

#[test]
fn test_scenario_d_income_before_rent_keeps_farm_solvent() {
    let mut app = build_main_app(200);
    app.world_mut()
        .spawn((Livestock::new(CattleKind::Cow), Transform::default()));
    app.world_mut()
        .spawn((Livestock::new(CattleKind::Sheep), Transform::default()));

    click(&mut app, MenuButton::SkipDay);
    assert!(run_until(&mut app, 40, |app| !collaborator(app).day_ends.is_empty()));

    let transcript = collaborator(&app);
    assert_eq!(transcript.confirmations, vec![FINISH_DAY_PROMPT.to_string()]);
    assert_eq!(
        transcript.transitions,
        vec![TimeOfDay::Evening, TimeOfDay::Night, TimeOfDay::Morning, TimeOfDay::Day]
    );
    assert!(transcript.game_overs.is_empty());
    assert_eq!(transcript.day_ends, vec![(1, 50)]);
    assert!(transcript.floating.contains(&100));
    assert!(transcript.floating.contains(&50));
    assert!(transcript.floating.contains(&-300));
    assert_eq!(balance(&app), 50);
    assert_eq!(app.world().resource::<GameContext>().days_survived, 1);
    assert!(app.world().resource::<MenuState>().is_enabled(MenuButton::SkipDay));
}

#[test]
fn test_scenario_e_unpaid_rent_ends_the_run() {
    let mut app = build_main_app(100);
    app.insert_resource(MessagePicker::Fixed(0));

    finish_day(&mut app);
    assert!(run_until(&mut app, 40, |app| !collaborator(app).game_overs.is_empty()));

    let transcript = collaborator(&app);
    assert_eq!(
        transcript.game_overs[0],
        (GAME_OVER_TEXT.to_string(), true, 100),
        "rent is never applied when it cannot be paid"
    );
    assert_eq!(transcript.dialogs, vec![INSOLVENCY_MESSAGES[0].to_string()]);
    assert!(transcript.day_ends.is_empty());

    // Acknowledging the game over tears the farm down.
    assert!(run_until(&mut app, 10, |app| state(app) == GameState::Loading));
    assert!(app.world().resource::<GameContext>().is_empty());
    assert_eq!(count::<FarmEntity>(&mut app), 0);
}

#[test]
fn test_declined_day_end_changes_nothing() {
    let mut app = build_main_app(500);
    app.world_mut().resource_mut::<Collaborator>().accept_day_end = false;

    finish_day(&mut app);
    assert!(run_until(&mut app, 20, |app| {
        collaborator(app).transitions == vec![TimeOfDay::Evening, TimeOfDay::Day]
    }));
    assert!(run_until(&mut app, 5, |app| {
        app.world().resource::<MenuState>().is_enabled(MenuButton::SkipDay)
    }));
    assert_eq!(balance(&app), 500);
    assert_eq!(app.world().resource::<GameContext>().days_survived, 0);
}

#[test]
fn test_placement_menus_are_ignored_while_the_day_ends() {
    let mut app = build_main_app(50_000);
    place_first(&mut app, MenuButton::CattlePen);
    assert!(run_until(&mut app, 10, |app| {
        app.world().resource::<MenuState>().is_enabled(MenuButton::Cow)
    }));
    app.world_mut().resource_mut::<Collaborator>().hold_confirmations = true;

    finish_day(&mut app);
    assert!(run_until(&mut app, 10, |app| {
        !collaborator(app).held_confirmations.is_empty()
    }));
    assert!(app.world().resource::<DayCycle>().is_running());

    let cow = PressAction::Place(Placeable::Cattle(CattleKind::Cow));
    click(&mut app, MenuButton::Cow);
    for _ in 0..5 {
        app.update();
    }
    assert!(armed_slots(&mut app, cow).is_empty());
    assert_eq!(count::<Livestock>(&mut app), 0);

    // Once the day is over the same button works again.
    let ticket = app
        .world_mut()
        .resource_mut::<Collaborator>()
        .held_confirmations
        .remove(0);
    app.world_mut().send_event(ConfirmationAnsweredEvent {
        ticket,
        accepted: true,
    });
    assert!(run_until(&mut app, 40, |app| !collaborator(app).day_ends.is_empty()));
    assert!(!app.world().resource::<DayCycle>().is_running());
    click(&mut app, MenuButton::Cow);
    assert!(run_until(&mut app, 10, |app| armed_slots(app, cow).len() == 3));
}

#[test]
fn test_second_finish_day_request_is_ignored_while_running() {
    let mut app = build_main_app(5_000);
    finish_day(&mut app);
    finish_day(&mut app);
    assert!(run_until(&mut app, 40, |app| !collaborator(app).day_ends.is_empty()));
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(collaborator(&app).confirmations.len(), 1);
    assert_eq!(balance(&app), 4_700);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tutorial
// ─────────────────────────────────────────────────────────────────────────────

fn waiting_for(app: &App, quest: TutorialQuest) -> bool {
    app.world()
        .resource::<TutorialProgress>()
        .gate
        .is_waiting_for(quest)
}

#[test]
fn test_tutorial_runs_through_to_main() {
    let mut app = build_game_app();

    // Tour dialogs play out, then the script waits for a fence.
    assert!(run_until(&mut app, 100, |app| waiting_for(app, TutorialQuest::FencePlaced)));
    {
        let menu = app.world().resource::<MenuState>();
        assert!(menu.money_visible);
        assert!(menu.is_enabled(MenuButton::CattlePen));
        assert!(!menu.is_enabled(MenuButton::Cropland));
        assert!(!menu.is_enabled(MenuButton::SkipDay));
    }

    place_first(&mut app, MenuButton::CattlePen);
    assert_eq!(parcels_of(&mut app, LandKind::Fence).len(), 1);

    // The sheep's pen spot is armed once the fence's slots exist.
    let pen = PressAction::Script(ScriptCue::PenSheep);
    assert!(run_until(&mut app, 20, |app| !armed_slots(app, pen).is_empty()));
    let target = armed_slots(&mut app, pen)[0];
    press(&mut app, target);
    assert!(run_until(&mut app, 60, |app| waiting_for(app, TutorialQuest::CornHarvested)));
    assert!(slot(&app, target).is_blocked());
    assert!(app.world().resource::<TutorialProgress>().sheep_damage.is_none());

    let corn = armed_slots(&mut app, PressAction::Harvest);
    assert_eq!(corn.len(), 6);
    for crop in corn {
        press(&mut app, crop);
    }

    assert!(run_until(&mut app, 100, |app| state(app) == GameState::Main));
    assert_eq!(count::<Crop>(&mut app), 0);

    let damage = collaborator(&app)
        .floating
        .iter()
        .filter(|amount| **amount == -10)
        .count() as i64;
    assert_eq!(balance(&app), 50_000 - 1_000 + 6 * 250 - 10 * damage);

    let transcript = collaborator(&app);
    assert_eq!(
        transcript.dialogs.first().map(String::as_str),
        Some("This is your Farm!\nSmall but cozy\nHowever...")
    );
    assert!(transcript.dialogs.last().is_some_and(|text| text.ends_with("Good luck!")));

    let menu = app.world().resource::<MenuState>();
    assert!(menu.skip_day_visible);
    assert!(menu.is_enabled(MenuButton::SkipDay));
    assert!(run_until(&mut app, 5, |app| count::<LandPlot>(app) == 2));
    assert_eq!(app.world().resource::<GameContext>().level, Some(LevelKind::Main));
}

#[test]
fn test_loose_sheep_costs_ten_every_three_seconds() {
    let mut app = build_game_app();
    assert!(run_until(&mut app, 100, |app| waiting_for(app, TutorialQuest::FencePlaced)));

    // Virtual time clamps each frame to 250 ms.
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    let before = balance(&app);
    for _ in 0..26 {
        app.update();
    }
    assert_eq!(balance(&app), before - 20);
}

#[test]
fn test_reset_restarts_the_tutorial_with_a_fresh_farm() {
    let mut app = build_game_app();
    assert!(run_until(&mut app, 100, |app| waiting_for(app, TutorialQuest::FencePlaced)));
    place_first(&mut app, MenuButton::CattlePen);
    assert!(balance(&app) <= 49_000);

    app.world_mut().send_event(ResetGameEvent);
    assert!(run_until(&mut app, 10, |app| state(app) == GameState::Loading));
    assert!(run_until(&mut app, 10, |app| state(app) == GameState::Tutorial));
    assert!(run_until(&mut app, 10, |app| count::<Livestock>(app) == 4));

    assert_eq!(balance(&app), DEFAULT_STARTING_BALANCE);
    assert!(parcels_of(&mut app, LandKind::Fence).is_empty());
    assert_eq!(parcels_of(&mut app, LandKind::Ground).len(), 1);
    assert_eq!(app.world().resource::<GameContext>().days_survived, 0);
}
