//! Step queue for scripted levels.
//!
//! Steps run one per frame, front to back. A step that waits (a dialog, a
//! quest) parks the runner until its answer arrives; nothing behind it runs
//! before that.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::shared::*;

/// Player-driven sub-quests of the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorialQuest {
    FencePlaced,
    SheepPenned,
    CornHarvested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Spawn the starting farm.
    SetupFarm,
    /// Modal text; waits for dismissal.
    Dialog(&'static str),
    Camera {
        position: Vec3,
        target: Vec3,
        lerp_speed: f32,
    },
    Guide {
        visible: bool,
        side: GuideSide,
    },
    ShowMoney,
    ShowHomeMenu,
    ShowSkipDay,
    /// Disable every menu button, then enable just these.
    OnlyEnable(&'static [MenuButton]),
    /// The loose sheep starts bleating and costing money.
    StartSheepDamage,
    StopSheepDamage,
    /// Arms the quest gate. Comes before whatever lets the player act.
    ArmQuest(TutorialQuest),
    /// Arms fence slot 1 as the sheep's pen spot; waits for the fence's slots.
    ArmSheepTarget,
    ArmCornHarvest,
    /// Waits until the quest is signaled.
    AwaitQuest(TutorialQuest),
    /// Enable all menus and move on to the Main level.
    FinishLevel,
}

/// What the runner is parked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    Dialog(Ticket),
    Quest(TutorialQuest),
}

#[derive(Resource, Debug, Default)]
pub struct ScriptRunner {
    steps: VecDeque<ScriptStep>,
    waiting: Option<Wait>,
}

impl ScriptRunner {
    pub fn load(&mut self, steps: VecDeque<ScriptStep>) {
        self.steps = steps;
        self.waiting = None;
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.waiting = None;
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty() && self.waiting.is_none()
    }

    pub fn waiting(&self) -> Option<Wait> {
        self.waiting
    }

    pub fn park(&mut self, wait: Wait) {
        self.waiting = Some(wait);
    }

    /// Clears a dialog wait when `ticket` is the one being waited on.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if self.waiting == Some(Wait::Dialog(ticket)) {
            self.waiting = None;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) {
        self.waiting = None;
    }

    /// The next step to run, unless the runner is parked.
    pub fn current(&self) -> Option<&ScriptStep> {
        if self.waiting.is_some() {
            return None;
        }
        self.steps.front()
    }

    pub fn advance(&mut self) {
        self.steps.pop_front();
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}
