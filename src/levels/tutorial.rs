//! Tutorial level — a strictly linear script.
//!
//! Farm setup → farm tour → the runaway sheep (fence, then pen it) → corn
//! harvest → closing words → Main. Each sub-quest parks the script on the
//! quest gate until the player finishes it.

use bevy::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::placement::FarmSpawner;
use crate::shared::*;
use super::gate::QuestGate;
use super::script::{ScriptRunner, ScriptStep, TutorialQuest, Wait};

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

const GROUND_POSITION: Vec3 = Vec3::new(10.0, 0.0, 0.0);
const GROUND_YAW: f32 = FRAC_PI_2;

/// (x, z, yaw) of the three starting chickens.
const CHICKEN_SPOTS: [(f32, f32, f32); 3] = [
    (12.4, -8.7, PI),
    (9.9, -5.0, -FRAC_PI_4),
    (9.0, -7.0, PI * 1.2),
];
const CHICKEN_HEIGHT: f32 = -0.28;

const LOOSE_SHEEP_POSITION: Vec3 = Vec3::new(-8.2, 0.0, 8.05);
const LOOSE_SHEEP_YAW: f32 = 0.36;

const PEN_PLOT_POSITION: Vec3 = Vec3::new(-10.0, 0.0, -3.25);
const PEN_PLOT_YAW: f32 = FRAC_PI_2;
const PEN_PLOT_EXTENT: Vec3 = Vec3::new(6.0, 2.0, 10.0);

/// Index of the fence slot the runaway sheep goes back to.
const SHEEP_PEN_SLOT: usize = 1;

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Resource, Debug, Default)]
pub struct TutorialProgress {
    pub gate: QuestGate<TutorialQuest>,
    pub sheep: Option<Entity>,
    pub pen_plot: Option<Entity>,
    pub fence: Option<Entity>,
    pub sheep_target: Option<Entity>,
    /// Pre-placed corn still waiting to be harvested.
    pub corn: Vec<Entity>,
    /// Running while the sheep is loose.
    pub sheep_damage: Option<Timer>,
}

impl TutorialProgress {
    fn signal(&mut self, quest: TutorialQuest) {
        match self.gate.signal(quest) {
            Ok(()) => info!("[Tutorial] {:?} done", quest),
            Err(err) => warn!("[Tutorial] {}", err),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Script
// ─────────────────────────────────────────────────────────────────────────────

fn camera(position: Vec3, target: Vec3, lerp_speed: f32) -> ScriptStep {
    ScriptStep::Camera {
        position,
        target,
        lerp_speed,
    }
}

fn guide(visible: bool, side: GuideSide) -> ScriptStep {
    ScriptStep::Guide { visible, side }
}

/// Build the tutorial step queue.
pub fn build_tutorial_script() -> VecDeque<ScriptStep> {
    use ScriptStep::*;

    let mut steps = VecDeque::new();

    steps.push_back(SetupFarm);

    // ── Farm tour ──
    steps.push_back(camera(Vec3::new(0.0, 14.5, 22.0), Vec3::new(0.0, -18.0, -20.0), 0.01));
    steps.push_back(guide(true, GuideSide::Left));
    steps.push_back(Dialog("This is your Farm!\nSmall but cozy\nHowever..."));
    steps.push_back(Dialog("You still have to pay the rent\nand it could use\nsome management"));
    steps.push_back(camera(Vec3::new(-3.9, 10.1, 3.5), Vec3::new(20.0, -12.9, -4.6), 0.015));
    steps.push_back(guide(true, GuideSide::Right));
    steps.push_back(Dialog("You've already got some grown Corn\nready to be picked for profit"));
    steps.push_back(camera(Vec3::new(2.0, 8.6, -3.2), Vec3::new(12.6, -18.6, -7.0), 0.015));
    steps.push_back(Dialog(
        "Animals are the source of daily income.\nIn your Fence already placed\nChickens and a Sheep",
    ));
    steps.push_back(Dialog("By the way... Where's..."));

    // ── The runaway sheep ──
    steps.push_back(camera(Vec3::new(0.0, 10.5, 14.5), Vec3::new(-10.0, -10.5, -7.0), 0.03));
    steps.push_back(Dialog("Oh no... Your sheep has run amok!"));
    steps.push_back(ShowMoney);
    steps.push_back(StartSheepDamage);
    steps.push_back(Dialog("And it's already causing damage\nPlace a fence, quick!"));
    steps.push_back(guide(false, GuideSide::Right));
    steps.push_back(ArmQuest(TutorialQuest::FencePlaced));
    steps.push_back(ShowHomeMenu);
    steps.push_back(OnlyEnable(&[MenuButton::Land, MenuButton::CattlePen]));
    steps.push_back(AwaitQuest(TutorialQuest::FencePlaced));
    steps.push_back(ArmQuest(TutorialQuest::SheepPenned));
    steps.push_back(ArmSheepTarget);
    steps.push_back(AwaitQuest(TutorialQuest::SheepPenned));
    steps.push_back(StopSheepDamage);
    steps.push_back(OnlyEnable(&[]));
    steps.push_back(guide(true, GuideSide::Right));
    steps.push_back(Dialog("Cattle in the Pens provide income every morning"));

    // ── Harvest ──
    steps.push_back(camera(Vec3::new(0.0, 18.2, 12.3), Vec3::new(5.3, -10.5, -7.0), 0.03));
    steps.push_back(Dialog(
        "Now, when the Sheep's put in place,\nyou can collect what's\nleft of your Harvest",
    ));
    steps.push_back(guide(false, GuideSide::Right));
    steps.push_back(ArmQuest(TutorialQuest::CornHarvested));
    steps.push_back(ArmCornHarvest);
    steps.push_back(AwaitQuest(TutorialQuest::CornHarvested));

    // ── Closing words ──
    steps.push_back(camera(Vec3::new(-9.1, 30.0, 23.4), Vec3::new(3.8, -18.0, -13.4), 0.02));
    steps.push_back(guide(true, GuideSide::Left));
    steps.push_back(Dialog("Good job!\nYou can continue without handholding"));
    steps.push_back(ShowSkipDay);
    steps.push_back(Dialog(
        "You can rest till morning\nby pressing Next Day button.\nOr plant more Crops",
    ));
    steps.push_back(Dialog(
        "Crops take 2 nights to mature.\nIf you get enough Cattle to cover Rent\nconsider your problems solved",
    ));
    steps.push_back(Dialog(
        "Be wary of Rent pay every morning\nIt was 300 greens I believe?\nGood luck!",
    ));
    steps.push_back(guide(false, GuideSide::Left));

    steps.push_back(FinishLevel);

    steps
}

// ─────────────────────────────────────────────────────────────────────────────
// Level lifecycle
// ─────────────────────────────────────────────────────────────────────────────

pub fn start_tutorial(
    mut runner: ResMut<ScriptRunner>,
    mut progress: ResMut<TutorialProgress>,
    mut context: ResMut<GameContext>,
    mut menu: ResMut<MenuState>,
) {
    *progress = TutorialProgress::default();
    *menu = MenuState::default();
    context.level = Some(LevelKind::Tutorial);
    runner.load(build_tutorial_script());
    info!("[Tutorial] Started ({} steps)", runner.remaining());
}

pub fn leave_tutorial(mut runner: ResMut<ScriptRunner>, mut progress: ResMut<TutorialProgress>) {
    runner.clear();
    progress.sheep_damage = None;
    progress.gate.reset();
}

fn setup_farm(spawner: &mut FarmSpawner, progress: &mut TutorialProgress) {
    // Ground with six beds of ripe corn.
    let ground_transform =
        Transform::from_translation(GROUND_POSITION).with_rotation(Quat::from_rotation_y(GROUND_YAW));
    let (_, beds) = spawner.parcel(LandKind::Ground, ground_transform);
    for (bed, bed_transform) in beds {
        let corn = spawner.crop(Crop::mature(CropKind::Corn, Some(bed)), bed_transform);
        let mut taken = InteractiveSlot::default();
        taken.block(Some(corn));
        spawner.commands.entity(bed).insert(taken);
        progress.corn.push(corn);
    }

    for (i, (x, z, yaw)) in CHICKEN_SPOTS.into_iter().enumerate() {
        let transform = Transform::from_xyz(x, CHICKEN_HEIGHT, z)
            .with_rotation(Quat::from_rotation_y(yaw));
        let chicken = spawner.livestock(CattleKind::Chicken, transform);
        if i == 0 {
            spawner.animate_livestock(chicken, CattleKind::Chicken, Animation::Action);
        }
    }

    let sheep_transform = Transform::from_translation(LOOSE_SHEEP_POSITION)
        .with_rotation(Quat::from_rotation_y(LOOSE_SHEEP_YAW));
    let sheep = spawner.livestock(CattleKind::Sheep, sheep_transform);
    spawner.animate_livestock(sheep, CattleKind::Sheep, Animation::Action);
    progress.sheep = Some(sheep);

    let plot_transform = Transform::from_translation(PEN_PLOT_POSITION)
        .with_rotation(Quat::from_rotation_y(PEN_PLOT_YAW));
    progress.pen_plot = Some(spawner.land_plot(plot_transform, PEN_PLOT_EXTENT));

    info!(
        "[Tutorial] Farm ready: {} corn, {} chickens, 1 loose sheep",
        progress.corn.len(),
        CHICKEN_SPOTS.len()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

/// Runs the tutorial one step per frame.
pub fn run_tutorial_script(
    mut runner: ResMut<ScriptRunner>,
    mut progress: ResMut<TutorialProgress>,
    mut dismissed: EventReader<DialogDismissedEvent>,
    mut spawner: FarmSpawner,
    mut tickets: ResMut<Tickets>,
    mut menu: ResMut<MenuState>,
    config: Res<GameConfig>,
    mut slots: Query<&mut InteractiveSlot>,
    registries: Query<&SlotRegistry>,
    mut dialogs: EventWriter<ShowDialogEvent>,
    mut camera: EventWriter<CameraShotEvent>,
    mut guide: EventWriter<GuideEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for done in dismissed.read() {
        runner.dismiss(done.ticket);
    }

    if let Some(Wait::Quest(quest)) = runner.waiting() {
        if !progress.gate.take_resolved(quest) {
            return;
        }
        runner.resume();
    }

    let Some(step) = runner.current().cloned() else {
        return;
    };

    match step {
        ScriptStep::SetupFarm => {
            setup_farm(&mut spawner, &mut progress);
            runner.advance();
        }
        ScriptStep::Dialog(text) => {
            let ticket = tickets.issue();
            dialogs.send(ShowDialogEvent {
                ticket,
                text: text.to_string(),
            });
            runner.advance();
            runner.park(Wait::Dialog(ticket));
        }
        ScriptStep::Camera {
            position,
            target,
            lerp_speed,
        } => {
            camera.send(CameraShotEvent {
                position,
                target,
                lerp_speed,
            });
            runner.advance();
        }
        ScriptStep::Guide { visible, side } => {
            guide.send(GuideEvent { visible, side });
            runner.advance();
        }
        ScriptStep::ShowMoney => {
            menu.money_visible = true;
            runner.advance();
        }
        ScriptStep::ShowHomeMenu => {
            menu.home_visible = true;
            runner.advance();
        }
        ScriptStep::ShowSkipDay => {
            menu.skip_day_visible = true;
            runner.advance();
        }
        ScriptStep::OnlyEnable(buttons) => {
            menu.disable_all();
            menu.set_enabled(true, buttons);
            runner.advance();
        }
        ScriptStep::StartSheepDamage => {
            progress.sheep_damage = Some(Timer::from_seconds(
                config.sheep_damage_tick_secs,
                TimerMode::Repeating,
            ));
            if let Some(sheep) = progress.sheep {
                spawner.ambient.send(AmbientSoundEvent {
                    entity: sheep,
                    cue: SoundCue::Sheep,
                    min_interval: 3.0,
                    max_interval: 10.0,
                    volume: 0.4,
                });
            }
            runner.advance();
        }
        ScriptStep::StopSheepDamage => {
            progress.sheep_damage = None;
            runner.advance();
        }
        ScriptStep::ArmQuest(quest) => {
            if let Err(err) = progress.gate.arm(quest) {
                warn!("[Tutorial] {}", err);
            }
            runner.advance();
        }
        ScriptStep::ArmSheepTarget => {
            let target = progress
                .fence
                .and_then(|fence| registries.get(fence).ok())
                .and_then(|registry| registry.slots.get(SHEEP_PEN_SLOT).copied());
            // The fence's slots appear a frame after the commit.
            let Some(target) = target else {
                return;
            };
            if let Ok(mut slot) = slots.get_mut(target) {
                let hint = Placeable::Cattle(CattleKind::Sheep);
                if slot.enable(Some(hint), PressAction::Script(ScriptCue::PenSheep)) {
                    progress.sheep_target = Some(target);
                } else {
                    warn!("[Tutorial] Pen slot {:?} is blocked", target);
                }
            }
            runner.advance();
        }
        ScriptStep::ArmCornHarvest => {
            for corn in &progress.corn {
                if let Ok(mut slot) = slots.get_mut(*corn) {
                    slot.enable(None, PressAction::Harvest);
                }
            }
            runner.advance();
        }
        ScriptStep::AwaitQuest(quest) => {
            runner.advance();
            if progress.gate.take_resolved(quest) {
                return;
            }
            if progress.gate.is_waiting_for(quest) {
                runner.park(Wait::Quest(quest));
            } else {
                warn!("[Tutorial] Waiting on {:?} which was never armed", quest);
            }
        }
        ScriptStep::FinishLevel => {
            runner.advance();
            menu.enable_all();
            menu.home_visible = true;
            info!("[Tutorial] Finished");
            next_state.set(GameState::Main);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Player actions
// ─────────────────────────────────────────────────────────────────────────────

pub fn route_tutorial_menu(
    mut actions: EventReader<MenuActionEvent>,
    mut menu: ResMut<MenuState>,
    mut enable: EventWriter<EnablePlacementEvent>,
    mut camera: EventWriter<CameraShotEvent>,
) {
    for action in actions.read() {
        if !menu.is_enabled(action.button) {
            continue;
        }
        if action.button == MenuButton::CattlePen {
            enable.send(EnablePlacementEvent {
                kind: Placeable::Land(LandKind::Fence),
            });
            menu.set_enabled(false, &MenuButton::LAND);
            camera.send(CameraShotEvent {
                position: Vec3::new(-1.0, 10.5, 17.5),
                target: Vec3::new(-7.5, -10.5, -16.0),
                lerp_speed: 0.03,
            });
        }
    }
}

pub fn on_tutorial_placement(
    mut resolved: EventReader<PlacementResolvedEvent>,
    mut progress: ResMut<TutorialProgress>,
    mut menu: ResMut<MenuState>,
) {
    for outcome in resolved.read() {
        if outcome.kind != Placeable::Land(LandKind::Fence) {
            continue;
        }
        if outcome.committed {
            progress.fence = outcome.placed;
            progress.pen_plot = None;
            progress.signal(TutorialQuest::FencePlaced);
        } else {
            // Let the player try again.
            menu.set_enabled(true, &[MenuButton::Land, MenuButton::CattlePen]);
        }
    }
}

pub fn pen_loose_sheep(
    mut cues: EventReader<ScriptCueEvent>,
    mut progress: ResMut<TutorialProgress>,
    mut slots: Query<(&mut InteractiveSlot, &Transform), Without<Livestock>>,
    mut animals: Query<&mut Transform, (With<Livestock>, Without<InteractiveSlot>)>,
    layouts: Res<LayoutRegistry>,
    mut animations: EventWriter<PlayAnimationEvent>,
    mut ambient: EventWriter<AmbientSoundEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    for cue in cues.read() {
        if cue.cue != ScriptCue::PenSheep || progress.sheep_target != Some(cue.slot) {
            continue;
        }
        let Some(sheep) = progress.sheep else {
            continue;
        };
        let Ok((mut slot, slot_transform)) = slots.get_mut(cue.slot) else {
            continue;
        };

        if let Ok(mut transform) = animals.get_mut(sheep) {
            let (yaw, _, _) = slot_transform.rotation.to_euler(EulerRot::YXZ);
            transform.translation = Vec3::new(
                slot_transform.translation.x,
                0.0,
                slot_transform.translation.z,
            );
            transform.rotation = Quat::from_rotation_y(yaw);
        }
        slot.block(Some(sheep));

        for animation in [Animation::Idle, Animation::Effect] {
            animations.send(PlayAnimationEvent {
                ticket: None,
                entity: sheep,
                animation,
                clip: layouts.clip_for(CattleKind::Sheep, animation),
            });
        }
        ambient.send(AmbientSoundEvent {
            entity: sheep,
            cue: SoundCue::Sheep,
            min_interval: 15.0,
            max_interval: 90.0,
            volume: 0.4,
        });
        sfx.send(PlaySfxEvent {
            cue: SoundCue::Sheep,
        });

        progress.sheep_target = None;
        progress.signal(TutorialQuest::SheepPenned);
    }
}

pub fn count_tutorial_harvest(
    mut harvested: EventReader<CropHarvestedEvent>,
    mut progress: ResMut<TutorialProgress>,
) {
    for crop in harvested.read() {
        let before = progress.corn.len();
        progress.corn.retain(|corn| *corn != crop.crop);
        if progress.corn.len() < before && progress.corn.is_empty() {
            progress.signal(TutorialQuest::CornHarvested);
        }
    }
}

/// The loose sheep costs money every tick until it is penned.
pub fn tick_sheep_damage(
    time: Res<Time>,
    mut progress: ResMut<TutorialProgress>,
    mut ledger: ResMut<EconomyLedger>,
    cost_table: Res<CostTable>,
    animals: Query<&Transform, With<Livestock>>,
    mut floating: EventWriter<FloatingAmountEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    let sheep = progress.sheep;
    let Some(timer) = progress.sheep_damage.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    let ticks = timer.times_finished_this_tick();
    if ticks == 0 {
        return;
    }

    let damage = cost_table.cost(CostKey::SheepDamage);
    let position = sheep
        .and_then(|sheep| animals.get(sheep).ok())
        .map(|transform| transform.translation)
        .unwrap_or(LOOSE_SHEEP_POSITION);
    for _ in 0..ticks {
        ledger.add(damage, "sheep damage");
        floating.send(FloatingAmountEvent {
            amount: damage,
            position: position + Vec3::Y * 2.0,
        });
        sfx.send(PlaySfxEvent {
            cue: SoundCue::ThrowSpear,
        });
    }
}
