//! Single-slot continuation for scripted quests.
//!
//! A script arms the gate for one quest, then waits. Whatever completes the
//! quest signals it; the script picks the resolution up and moves on. At most
//! one quest is outstanding at a time.

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("gate is already waiting for {current}; cannot arm {requested}")]
    AlreadyArmed { current: String, requested: String },
    #[error("{signaled} signaled but the gate is waiting for {expected}")]
    WrongQuest { expected: String, signaled: String },
    #[error("{signaled} signaled while nothing is waiting")]
    NotArmed { signaled: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState<Q> {
    Idle,
    Armed(Q),
    Resolved(Q),
}

#[derive(Debug, Clone)]
pub struct QuestGate<Q> {
    state: GateState<Q>,
}

impl<Q> Default for QuestGate<Q> {
    fn default() -> Self {
        Self {
            state: GateState::Idle,
        }
    }
}

impl<Q: Copy + PartialEq + Debug> QuestGate<Q> {
    pub fn arm(&mut self, quest: Q) -> Result<(), GateError> {
        match self.state {
            GateState::Idle => {
                self.state = GateState::Armed(quest);
                Ok(())
            }
            GateState::Armed(current) | GateState::Resolved(current) => {
                Err(GateError::AlreadyArmed {
                    current: format!("{:?}", current),
                    requested: format!("{:?}", quest),
                })
            }
        }
    }

    pub fn signal(&mut self, quest: Q) -> Result<(), GateError> {
        match self.state {
            GateState::Armed(expected) if expected == quest => {
                self.state = GateState::Resolved(quest);
                Ok(())
            }
            GateState::Armed(expected) => Err(GateError::WrongQuest {
                expected: format!("{:?}", expected),
                signaled: format!("{:?}", quest),
            }),
            GateState::Idle | GateState::Resolved(_) => Err(GateError::NotArmed {
                signaled: format!("{:?}", quest),
            }),
        }
    }

    pub fn is_waiting_for(&self, quest: Q) -> bool {
        self.state == GateState::Armed(quest)
    }

    /// Consumes a resolution for `quest`, returning the gate to idle.
    pub fn take_resolved(&mut self, quest: Q) -> bool {
        if self.state == GateState::Resolved(quest) {
            self.state = GateState::Idle;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }
}
