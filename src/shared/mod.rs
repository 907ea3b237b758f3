//! Shared components, resources, events, and states for Garden Makeover.
//!
//! This is the type contract. Every domain plugin imports from here.
//! Domains talk through these types; the few cross-domain imports are
//! shared helpers (`FarmSpawner`), the day-cycle guard on the Main menu, and
//! the reset of run-scoped resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// `Loading` seeds data and the ledger, then hands over to the Tutorial.
/// A reset after game-over goes back through `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Tutorial,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelKind {
    Tutorial,
    Main,
}

// ═══════════════════════════════════════════════════════════════════════
// KINDS — what can be placed
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CattleKind {
    Chicken,
    Cow,
    Sheep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropKind {
    Corn,
    Grape,
    Strawberry,
    Tomato,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandKind {
    Fence,
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementCategory {
    Land,
    Cattle,
    Crop,
}

/// Anything the player can drop onto an interactive slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeable {
    Land(LandKind),
    Cattle(CattleKind),
    Crop(CropKind),
}

impl Placeable {
    pub fn category(self) -> PlacementCategory {
        match self {
            Placeable::Land(_) => PlacementCategory::Land,
            Placeable::Cattle(_) => PlacementCategory::Cattle,
            Placeable::Crop(_) => PlacementCategory::Crop,
        }
    }

    /// The cost-table row charged when this is committed.
    pub fn cost_key(self) -> CostKey {
        match self {
            Placeable::Land(land) => CostKey::build_land(land),
            Placeable::Cattle(cattle) => CostKey::buy(cattle),
            Placeable::Crop(crop) => CostKey::plant(crop),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COST TABLE
// ═══════════════════════════════════════════════════════════════════════

/// One row of the cost table. Negative values are costs, positive are income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostKey {
    FenceMake,
    GroundMake,
    CornPlant,
    CornHarvest,
    StrawberryPlant,
    StrawberryHarvest,
    GrapePlant,
    GrapeHarvest,
    TomatoPlant,
    TomatoHarvest,
    CowBuy,
    CowDaily,
    SheepBuy,
    SheepDaily,
    SheepDamage,
    ChickenBuy,
    ChickenDaily,
    RentDaily,
}

impl CostKey {
    pub const ALL: [CostKey; 18] = [
        CostKey::FenceMake,
        CostKey::GroundMake,
        CostKey::CornPlant,
        CostKey::CornHarvest,
        CostKey::StrawberryPlant,
        CostKey::StrawberryHarvest,
        CostKey::GrapePlant,
        CostKey::GrapeHarvest,
        CostKey::TomatoPlant,
        CostKey::TomatoHarvest,
        CostKey::CowBuy,
        CostKey::CowDaily,
        CostKey::SheepBuy,
        CostKey::SheepDaily,
        CostKey::SheepDamage,
        CostKey::ChickenBuy,
        CostKey::ChickenDaily,
        CostKey::RentDaily,
    ];

    pub fn build_land(land: LandKind) -> Self {
        match land {
            LandKind::Fence => CostKey::FenceMake,
            LandKind::Ground => CostKey::GroundMake,
        }
    }

    pub fn plant(crop: CropKind) -> Self {
        match crop {
            CropKind::Corn => CostKey::CornPlant,
            CropKind::Grape => CostKey::GrapePlant,
            CropKind::Strawberry => CostKey::StrawberryPlant,
            CropKind::Tomato => CostKey::TomatoPlant,
        }
    }

    pub fn harvest(crop: CropKind) -> Self {
        match crop {
            CropKind::Corn => CostKey::CornHarvest,
            CropKind::Grape => CostKey::GrapeHarvest,
            CropKind::Strawberry => CostKey::StrawberryHarvest,
            CropKind::Tomato => CostKey::TomatoHarvest,
        }
    }

    pub fn buy(cattle: CattleKind) -> Self {
        match cattle {
            CattleKind::Chicken => CostKey::ChickenBuy,
            CattleKind::Cow => CostKey::CowBuy,
            CattleKind::Sheep => CostKey::SheepBuy,
        }
    }

    pub fn daily(cattle: CattleKind) -> Self {
        match cattle {
            CattleKind::Chicken => CostKey::ChickenDaily,
            CattleKind::Cow => CostKey::CowDaily,
            CattleKind::Sheep => CostKey::SheepDaily,
        }
    }
}

/// Authoritative money deltas. Seeded by the data plugin; read-only afterwards.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostTable {
    pub entries: HashMap<CostKey, i64>,
}

impl CostTable {
    /// Pure lookup. Rows that were never seeded cost nothing.
    pub fn cost(&self, key: CostKey) -> i64 {
        self.entries.get(&key).copied().unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ECONOMY LEDGER
// ═══════════════════════════════════════════════════════════════════════

/// The single authoritative balance. Only placement commits, harvests, the
/// tutorial's sheep damage and the day cycle call `add`.
///
/// The balance may go negative (sheep damage does not check); only the
/// on-screen figure is clamped, see [`EconomyLedger::display_amount`].
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyLedger {
    balance: i64,
}

impl EconomyLedger {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Balance after applying `delta`, without applying it.
    pub fn projected(&self, delta: i64) -> i64 {
        self.balance.saturating_add(delta)
    }

    pub fn can_afford(&self, delta: i64) -> bool {
        self.projected(delta) >= 0
    }

    /// Applies `delta` unconditionally. Callers run their own funds check first.
    pub fn add(&mut self, delta: i64, reason: &str) {
        self.balance = self.balance.saturating_add(delta);
        info!(
            "[Economy] {:+} ({}). New balance: {}",
            delta, reason, self.balance
        );
    }

    /// Replaces the balance outright; used when a run (re)starts.
    pub fn reset(&mut self, balance: i64) {
        self.balance = balance;
        info!("[Economy] Ledger reset to {}", balance);
    }

    pub fn display_amount(&self) -> i64 {
        self.balance.max(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTIVE SLOTS
// ═══════════════════════════════════════════════════════════════════════

/// What happens when the player presses an armed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Place(Placeable),
    Harvest,
    Script(ScriptCue),
}

/// Script-only press targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCue {
    PenSheep,
}

/// Mutually exclusive slot states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Available,
    Blocked,
    Armed,
}

/// A placement (or harvest, or script) target the player can press.
///
/// A slot holds at most one press action. Arming it makes it visible and
/// interactive; disarming clears action, hint and visibility together.
#[derive(Component, Debug, Clone, Default)]
pub struct InteractiveSlot {
    blocked: bool,
    visible: bool,
    hovered: bool,
    hint: Option<Placeable>,
    action: Option<PressAction>,
    occupant: Option<Entity>,
}

impl InteractiveSlot {
    /// Arms the slot, replacing any previous hint and action.
    /// Blocked slots refuse to arm and return `false`.
    pub fn enable(&mut self, hint: Option<Placeable>, action: PressAction) -> bool {
        if self.blocked {
            return false;
        }
        self.hint = hint;
        self.action = Some(action);
        self.visible = true;
        true
    }

    /// Idempotent.
    pub fn disable(&mut self) {
        self.action = None;
        self.hint = None;
        self.hovered = false;
        self.visible = false;
    }

    /// Detaches and returns the press action, leaving the slot disarmed.
    pub fn take_action(&mut self) -> Option<PressAction> {
        let action = self.action.take();
        self.disable();
        action
    }

    /// Marks the slot as occupied. Disarms it first.
    pub fn block(&mut self, occupant: Option<Entity>) {
        self.disable();
        self.blocked = true;
        self.occupant = occupant;
    }

    /// Frees the slot for future placements.
    pub fn release(&mut self) {
        self.blocked = false;
        self.occupant = None;
        self.visible = true;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered && self.is_interactive();
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }

    pub fn occupant(&self) -> Option<Entity> {
        self.occupant
    }

    pub fn hint(&self) -> Option<Placeable> {
        self.hint
    }

    pub fn action(&self) -> Option<PressAction> {
        self.action
    }

    pub fn state(&self) -> SlotState {
        if self.blocked {
            SlotState::Blocked
        } else if self.action.is_some() {
            SlotState::Armed
        } else {
            SlotState::Available
        }
    }
}

/// A slot that accepts a whole new parcel. Consumed once a parcel lands on it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LandPlot;

/// Back-reference from a slot to the parcel that owns it.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotOf(pub Entity);

/// Size of the invisible press volume around a slot.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotExtent(pub Vec3);

impl Default for SlotExtent {
    fn default() -> Self {
        Self(Vec3::splat(2.0))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PARCELS, CROPS, LIVESTOCK
// ═══════════════════════════════════════════════════════════════════════

/// Marks everything a level spawned; a reset despawns all of it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FarmEntity;

#[derive(Component, Debug, Clone, Copy)]
pub struct Parcel {
    pub land: LandKind,
}

/// The fixed set of slots a parcel owns, in layout order.
#[derive(Component, Debug, Clone, Default)]
pub struct SlotRegistry {
    pub slots: Vec<Entity>,
}

/// Which model the renderer should show, and at what scale.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Model {
    pub asset: &'static str,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrowthStage {
    Planted,
    Growing,
    Mature,
}

impl GrowthStage {
    pub fn next(self) -> Self {
        match self {
            GrowthStage::Planted => GrowthStage::Growing,
            GrowthStage::Growing | GrowthStage::Mature => GrowthStage::Mature,
        }
    }

    /// 1-based stage number.
    pub fn number(self) -> u8 {
        match self {
            GrowthStage::Planted => 1,
            GrowthStage::Growing => 2,
            GrowthStage::Mature => 3,
        }
    }
}

/// A planted crop. Carries its own `InteractiveSlot` that is armed for harvest
/// once the crop is mature.
#[derive(Component, Debug, Clone)]
pub struct Crop {
    pub kind: CropKind,
    stage: GrowthStage,
    pub placed_at: Option<Entity>,
}

impl Crop {
    pub fn planted(kind: CropKind, placed_at: Option<Entity>) -> Self {
        Self {
            kind,
            stage: GrowthStage::Planted,
            placed_at,
        }
    }

    pub fn mature(kind: CropKind, placed_at: Option<Entity>) -> Self {
        Self {
            kind,
            stage: GrowthStage::Mature,
            placed_at,
        }
    }

    pub fn stage(&self) -> GrowthStage {
        self.stage
    }

    pub fn is_mature(&self) -> bool {
        self.stage == GrowthStage::Mature
    }

    /// Moves one stage forward. Returns `true` only on the step that reaches
    /// maturity; a mature crop stays mature.
    pub fn advance_stage(&mut self) -> bool {
        if self.is_mature() {
            return false;
        }
        self.stage = self.stage.next();
        self.is_mature()
    }
}

/// Set on a crop while its disappear animation plays after harvest.
#[derive(Component, Debug, Clone, Copy)]
pub struct Harvesting {
    pub ticket: Ticket,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Livestock {
    kind: CattleKind,
}

impl Livestock {
    pub fn new(kind: CattleKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> CattleKind {
        self.kind
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GAME CONTEXT
// ═══════════════════════════════════════════════════════════════════════

/// Process-wide handle on the run: which level is active and what has been
/// placed. A reset replaces it with a fresh default.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameContext {
    pub level: Option<LevelKind>,
    pub parcels: Vec<Entity>,
    pub livestock: Vec<Entity>,
    pub crops: Vec<Entity>,
    pub days_survived: u32,
}

impl GameContext {
    pub fn forget(&mut self, entity: Entity) {
        self.parcels.retain(|e| *e != entity);
        self.livestock.retain(|e| *e != entity);
        self.crops.retain(|e| *e != entity);
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty() && self.livestock.is_empty() && self.crops.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MENUS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    // Home menu
    Crop,
    Cattle,
    Land,
    // Land menu
    CattlePen,
    Cropland,
    // Cattle menu
    Chicken,
    Cow,
    Sheep,
    // Crop menu
    Corn,
    Grape,
    Strawberry,
    Tomato,
    // Game controls
    SkipDay,
}

impl MenuButton {
    pub const HOME: [MenuButton; 3] = [MenuButton::Crop, MenuButton::Cattle, MenuButton::Land];
    pub const LAND: [MenuButton; 2] = [MenuButton::CattlePen, MenuButton::Cropland];
    pub const CATTLE: [MenuButton; 3] = [MenuButton::Chicken, MenuButton::Cow, MenuButton::Sheep];
    pub const CROP: [MenuButton; 4] = [
        MenuButton::Corn,
        MenuButton::Grape,
        MenuButton::Strawberry,
        MenuButton::Tomato,
    ];

    pub fn all() -> impl Iterator<Item = MenuButton> {
        Self::HOME
            .into_iter()
            .chain(Self::LAND)
            .chain(Self::CATTLE)
            .chain(Self::CROP)
            .chain([MenuButton::SkipDay])
    }

    /// The placement a sub-menu button starts, if any.
    pub fn placeable(self) -> Option<Placeable> {
        match self {
            MenuButton::CattlePen => Some(Placeable::Land(LandKind::Fence)),
            MenuButton::Cropland => Some(Placeable::Land(LandKind::Ground)),
            MenuButton::Chicken => Some(Placeable::Cattle(CattleKind::Chicken)),
            MenuButton::Cow => Some(Placeable::Cattle(CattleKind::Cow)),
            MenuButton::Sheep => Some(Placeable::Cattle(CattleKind::Sheep)),
            MenuButton::Corn => Some(Placeable::Crop(CropKind::Corn)),
            MenuButton::Grape => Some(Placeable::Crop(CropKind::Grape)),
            MenuButton::Strawberry => Some(Placeable::Crop(CropKind::Strawberry)),
            MenuButton::Tomato => Some(Placeable::Crop(CropKind::Tomato)),
            MenuButton::Crop | MenuButton::Cattle | MenuButton::Land | MenuButton::SkipDay => None,
        }
    }
}

/// Which menus are shown and which buttons accept clicks. The UI renders it;
/// levels and the day cycle write it.
#[derive(Resource, Debug, Clone, Default)]
pub struct MenuState {
    pub home_visible: bool,
    pub skip_day_visible: bool,
    pub money_visible: bool,
    enabled: HashSet<MenuButton>,
}

impl MenuState {
    pub fn set_enabled(&mut self, enabled: bool, buttons: &[MenuButton]) {
        for button in buttons {
            if enabled {
                self.enabled.insert(*button);
            } else {
                self.enabled.remove(button);
            }
        }
    }

    pub fn enable_all(&mut self) {
        self.enabled.extend(MenuButton::all());
    }

    pub fn disable_all(&mut self) {
        self.enabled.clear();
    }

    pub fn is_enabled(&self, button: MenuButton) -> bool {
        self.enabled.contains(&button)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TICKETS — handles for awaited collaborator work
// ═══════════════════════════════════════════════════════════════════════

/// Identifies one awaited request (prompt, transition, animation). The
/// collaborator echoes it back exactly once on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Resource, Debug, Default)]
pub struct Tickets {
    next: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COLLABORATOR VOCABULARY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Click,
    Coins,
    Negative,
    Chicken,
    Sheep,
    Cow,
    ThrowSpear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Elastic pop when a parcel lands.
    Bounce,
    /// Particle burst (dust for animals, leaves for crops).
    Effect,
    Idle,
    Action,
    /// Shrink-out before a harvested crop is removed.
    Disappear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSide {
    Left,
    Right,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — requests to collaborators (rendering, UI, audio)
// ═══════════════════════════════════════════════════════════════════════

/// Modal text, dismissed on click. Answer: [`DialogDismissedEvent`].
#[derive(Event, Debug, Clone)]
pub struct ShowDialogEvent {
    pub ticket: Ticket,
    pub text: String,
}

/// Yes/No prompt. Answer: [`ConfirmationAnsweredEvent`].
#[derive(Event, Debug, Clone)]
pub struct ShowConfirmationEvent {
    pub ticket: Ticket,
    pub text: String,
}

/// End-of-run prompt. `fatal` selects "Restart" over "Continue".
/// Answer: [`GameOverAcknowledgedEvent`].
#[derive(Event, Debug, Clone)]
pub struct ShowGameOverEvent {
    pub ticket: Ticket,
    pub text: String,
    pub fatal: bool,
}

/// Lighting tween to a time of day. Answer: [`TransitionFinishedEvent`].
#[derive(Event, Debug, Clone)]
pub struct PlayTransitionEvent {
    pub ticket: Ticket,
    pub to: TimeOfDay,
}

/// Animation on a farm entity. Only awaited when `ticket` is set; the answer
/// is then an [`AnimationFinishedEvent`].
#[derive(Event, Debug, Clone)]
pub struct PlayAnimationEvent {
    pub ticket: Option<Ticket>,
    pub entity: Entity,
    pub animation: Animation,
    /// Rig-specific clip name, for models that carry their own animations.
    pub clip: Option<&'static str>,
}

#[derive(Event, Debug, Clone)]
pub struct FloatingAmountEvent {
    pub amount: i64,
    pub position: Vec3,
}

#[derive(Event, Debug, Clone)]
pub struct PlaySfxEvent {
    pub cue: SoundCue,
}

/// Starts (or retunes) a looping ambient sound attached to an entity.
#[derive(Event, Debug, Clone)]
pub struct AmbientSoundEvent {
    pub entity: Entity,
    pub cue: SoundCue,
    pub min_interval: f32,
    pub max_interval: f32,
    pub volume: f32,
}

#[derive(Event, Debug, Clone)]
pub struct CameraShotEvent {
    pub position: Vec3,
    pub target: Vec3,
    pub lerp_speed: f32,
}

#[derive(Event, Debug, Clone)]
pub struct GuideEvent {
    pub visible: bool,
    pub side: GuideSide,
}

/// Sent whenever the ledger changes; `amount` is already clamped for display.
#[derive(Event, Debug, Clone)]
pub struct MoneyDisplayEvent {
    pub amount: i64,
    pub delta: i64,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — answers from collaborators
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DialogDismissedEvent {
    pub ticket: Ticket,
}

#[derive(Event, Debug, Clone)]
pub struct ConfirmationAnsweredEvent {
    pub ticket: Ticket,
    pub accepted: bool,
}

#[derive(Event, Debug, Clone)]
pub struct GameOverAcknowledgedEvent {
    pub ticket: Ticket,
}

#[derive(Event, Debug, Clone)]
pub struct TransitionFinishedEvent {
    pub ticket: Ticket,
}

#[derive(Event, Debug, Clone)]
pub struct AnimationFinishedEvent {
    pub ticket: Ticket,
}

/// Hit-testing delivered a press on a slot.
#[derive(Event, Debug, Clone)]
pub struct SlotPressedEvent {
    pub slot: Entity,
}

#[derive(Event, Debug, Clone)]
pub struct SlotHoverEvent {
    pub slot: Entity,
    pub hovered: bool,
}

#[derive(Event, Debug, Clone)]
pub struct MenuActionEvent {
    pub button: MenuButton,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain
// ═══════════════════════════════════════════════════════════════════════

/// Arms every eligible free slot for `kind`.
#[derive(Event, Debug, Clone)]
pub struct EnablePlacementEvent {
    pub kind: Placeable,
}

/// Disarms every slot of every open placement session.
#[derive(Event, Debug, Clone)]
pub struct CancelPlacementEvent;

/// A press on a slot armed with `PressAction::Place`.
#[derive(Event, Debug, Clone)]
pub struct CommitPlacementEvent {
    pub slot: Entity,
    pub kind: Placeable,
}

/// Outcome of a commit. `placed` is the new entity when `committed`.
#[derive(Event, Debug, Clone)]
pub struct PlacementResolvedEvent {
    pub kind: Placeable,
    pub slot: Entity,
    pub placed: Option<Entity>,
    pub committed: bool,
}

#[derive(Event, Debug, Clone)]
pub struct HarvestRequestEvent {
    pub crop: Entity,
}

/// A harvested crop finished its animation and was removed.
#[derive(Event, Debug, Clone)]
pub struct CropHarvestedEvent {
    pub crop: Entity,
    pub kind: CropKind,
    pub income: i64,
}

#[derive(Event, Debug, Clone)]
pub struct ScriptCueEvent {
    pub cue: ScriptCue,
    pub slot: Entity,
}

/// Advance every crop by one stage.
#[derive(Event, Debug, Clone)]
pub struct GrowCropsEvent;

/// Player asked to end the day (Skip-Day control).
#[derive(Event, Debug, Clone)]
pub struct FinishDayEvent;

#[derive(Event, Debug, Clone)]
pub struct DayEndedEvent {
    pub day: u32,
    pub balance: i64,
}

/// Tear the run down and start again from the Tutorial.
#[derive(Event, Debug, Clone)]
pub struct ResetGameEvent;

// ═══════════════════════════════════════════════════════════════════════
// DATA REGISTRIES — per-type tables, loaded from data
// ═══════════════════════════════════════════════════════════════════════

/// Slot position and facing relative to its parcel.
#[derive(Debug, Clone, Copy)]
pub struct SlotLayout {
    pub offset: Vec3,
    pub yaw: f32,
}

#[derive(Debug, Clone)]
pub struct ParcelDef {
    pub land: LandKind,
    pub model: &'static str,
    pub scale: f32,
    pub slots: Vec<SlotLayout>,
}

#[derive(Debug, Clone)]
pub struct LivestockDef {
    pub kind: CattleKind,
    pub model: &'static str,
    pub scale: f32,
    pub idle_clip: &'static str,
    pub action_clip: &'static str,
    pub voice: SoundCue,
    pub ambient_min_interval: f32,
    pub ambient_max_interval: f32,
    pub ambient_volume: f32,
}

impl LivestockDef {
    pub fn clip_for(&self, animation: Animation) -> Option<&'static str> {
        match animation {
            Animation::Idle => Some(self.idle_clip),
            Animation::Action => Some(self.action_clip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CropDef {
    pub kind: CropKind,
    /// One model per growth stage, in stage order.
    pub stage_models: [&'static str; 3],
    pub scale: f32,
}

impl CropDef {
    pub fn model_for(&self, stage: GrowthStage) -> &'static str {
        self.stage_models[(stage.number() - 1) as usize]
    }
}

/// Replaces the four crop, three animal and two land subclasses with data.
#[derive(Resource, Debug, Clone, Default)]
pub struct LayoutRegistry {
    pub parcels: HashMap<LandKind, ParcelDef>,
    pub livestock: HashMap<CattleKind, LivestockDef>,
    pub crops: HashMap<CropKind, CropDef>,
}

impl LayoutRegistry {
    pub fn clip_for(&self, kind: CattleKind, animation: Animation) -> Option<&'static str> {
        self.livestock
            .get(&kind)
            .and_then(|def| def.clip_for(animation))
    }
}

/// A Main-level land plot: where a new parcel may go.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlotConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub extent: [f32; 3],
}

impl PlotConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .with_rotation(Quat::from_rotation_y(self.yaw))
    }
}

/// Tunables. Built-in defaults, optionally overridden by a RON file.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_balance: i64,
    pub sheep_damage_tick_secs: f32,
    pub land_plots: Vec<PlotConfig>,
    /// Cost-table overrides, applied over the built-in table.
    pub costs: HashMap<CostKey, i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            sheep_damage_tick_secs: DEFAULT_SHEEP_DAMAGE_TICK_SECS,
            land_plots: vec![
                PlotConfig {
                    position: [-10.0, 0.0, 4.5],
                    yaw: std::f32::consts::FRAC_PI_2,
                    extent: [6.0, 2.0, 10.0],
                },
                PlotConfig {
                    position: [9.0, 0.0, 8.0],
                    yaw: -std::f32::consts::FRAC_PI_2,
                    extent: [6.0, 2.0, 10.0],
                },
            ],
            costs: HashMap::new(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const DEFAULT_STARTING_BALANCE: i64 = 50_000;
pub const DEFAULT_SHEEP_DAMAGE_TICK_SECS: f32 = 3.0;

/// Where rent and other farm-wide amounts float up from.
pub const FARMHOUSE_POSITION: Vec3 = Vec3::new(0.0, 4.0, -6.0);
