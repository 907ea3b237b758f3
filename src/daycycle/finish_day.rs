//! The end-of-day sequence.
//!
//! Evening → "FINISH THE DAY?" → livestock income → Night → Morning → crops
//! grow → rent (or game over) → Day. Each arrow that waits on a collaborator
//! is a ticketed request; a phase only advances on its own ticket.

use bevy::prelude::*;
use crate::shared::*;
use super::insolvency::MessagePicker;

pub const FINISH_DAY_PROMPT: &str = "FINISH THE DAY?";
pub const GAME_OVER_TEXT: &str = "GAME OVER\nYou could not pay the rent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayPhase {
    #[default]
    Idle,
    /// Waiting for the evening transition.
    Evening(Ticket),
    /// Waiting for the player's yes/no.
    Confirm(Ticket),
    /// Declined: waiting for the lighting to come back to day.
    Declined(Ticket),
    Night(Ticket),
    Morning(Ticket),
    /// Rent could not be paid: waiting for the flavor dialog.
    Insolvent(Ticket),
    GameOver(Ticket),
    /// Rent paid: waiting for the day transition.
    Dawn(Ticket),
}

#[derive(Resource, Debug, Default)]
pub struct DayCycle {
    phase: DayPhase,
}

impl DayCycle {
    pub fn phase(&self) -> DayPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != DayPhase::Idle
    }

    pub fn reset(&mut self) {
        self.phase = DayPhase::Idle;
    }
}

/// Outcome of the rent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentOutcome {
    Paid { rent: i64 },
    Insolvent { rent: i64, balance: i64 },
}

/// Rent is checked against the balance *before* it is applied; an
/// unaffordable rent leaves the ledger untouched.
pub fn settle_rent(ledger: &mut EconomyLedger, cost_table: &CostTable) -> RentOutcome {
    let rent = cost_table.cost(CostKey::RentDaily);
    if ledger.can_afford(rent) {
        ledger.add(rent, "rent");
        RentOutcome::Paid { rent }
    } else {
        RentOutcome::Insolvent {
            rent,
            balance: ledger.balance(),
        }
    }
}

fn request_transition(
    tickets: &mut Tickets,
    transitions: &mut EventWriter<PlayTransitionEvent>,
    to: TimeOfDay,
) -> Ticket {
    let ticket = tickets.issue();
    transitions.send(PlayTransitionEvent { ticket, to });
    ticket
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

pub fn begin_finish_day(
    mut requests: EventReader<FinishDayEvent>,
    mut cycle: ResMut<DayCycle>,
    mut tickets: ResMut<Tickets>,
    mut menu: ResMut<MenuState>,
    mut cancel: EventWriter<CancelPlacementEvent>,
    mut transitions: EventWriter<PlayTransitionEvent>,
) {
    for _ in requests.read() {
        if cycle.is_running() {
            warn!("[DayCycle] Day end already in progress ({:?})", cycle.phase);
            continue;
        }
        // Close the re-entry gap before anything is awaited.
        menu.set_enabled(false, &[MenuButton::SkipDay]);
        cancel.send(CancelPlacementEvent);

        let ticket = request_transition(&mut tickets, &mut transitions, TimeOfDay::Evening);
        cycle.phase = DayPhase::Evening(ticket);
        info!("[DayCycle] Finishing the day");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator answers
// ─────────────────────────────────────────────────────────────────────────────

pub fn on_confirmation_answered(
    mut answers: EventReader<ConfirmationAnsweredEvent>,
    mut cycle: ResMut<DayCycle>,
    mut tickets: ResMut<Tickets>,
    mut ledger: ResMut<EconomyLedger>,
    cost_table: Res<CostTable>,
    livestock: Query<(&Livestock, &Transform)>,
    mut floating: EventWriter<FloatingAmountEvent>,
    mut transitions: EventWriter<PlayTransitionEvent>,
) {
    for answer in answers.read() {
        let DayPhase::Confirm(waiting) = cycle.phase else {
            continue;
        };
        if waiting != answer.ticket {
            continue;
        }

        if !answer.accepted {
            info!("[DayCycle] Day end declined");
            let ticket = request_transition(&mut tickets, &mut transitions, TimeOfDay::Day);
            cycle.phase = DayPhase::Declined(ticket);
            continue;
        }

        let mut total = 0;
        for (animal, transform) in livestock.iter() {
            let income = cost_table.cost(CostKey::daily(animal.kind()));
            total += income;
            floating.send(FloatingAmountEvent {
                amount: income,
                position: transform.translation + Vec3::Y * 2.0,
            });
        }
        if total != 0 {
            ledger.add(total, "livestock income");
        }

        let ticket = request_transition(&mut tickets, &mut transitions, TimeOfDay::Night);
        cycle.phase = DayPhase::Night(ticket);
    }
}

pub fn on_transition_finished(
    mut finished: EventReader<TransitionFinishedEvent>,
    mut cycle: ResMut<DayCycle>,
    mut tickets: ResMut<Tickets>,
    mut ledger: ResMut<EconomyLedger>,
    cost_table: Res<CostTable>,
    picker: Res<MessagePicker>,
    mut menu: ResMut<MenuState>,
    mut context: ResMut<GameContext>,
    mut transitions: EventWriter<PlayTransitionEvent>,
    mut confirmations: EventWriter<ShowConfirmationEvent>,
    mut dialogs: EventWriter<ShowDialogEvent>,
    mut grow: EventWriter<GrowCropsEvent>,
    mut floating: EventWriter<FloatingAmountEvent>,
    mut day_ended: EventWriter<DayEndedEvent>,
) {
    for done in finished.read() {
        match cycle.phase {
            DayPhase::Evening(t) if t == done.ticket => {
                let ticket = tickets.issue();
                confirmations.send(ShowConfirmationEvent {
                    ticket,
                    text: FINISH_DAY_PROMPT.to_string(),
                });
                cycle.phase = DayPhase::Confirm(ticket);
            }
            DayPhase::Night(t) if t == done.ticket => {
                let ticket = request_transition(&mut tickets, &mut transitions, TimeOfDay::Morning);
                cycle.phase = DayPhase::Morning(ticket);
            }
            DayPhase::Morning(t) if t == done.ticket => {
                grow.send(GrowCropsEvent);

                match settle_rent(&mut ledger, &cost_table) {
                    RentOutcome::Paid { rent } => {
                        floating.send(FloatingAmountEvent {
                            amount: rent,
                            position: FARMHOUSE_POSITION,
                        });
                        let ticket = request_transition(&mut tickets, &mut transitions, TimeOfDay::Day);
                        cycle.phase = DayPhase::Dawn(ticket);
                    }
                    RentOutcome::Insolvent { rent, balance } => {
                        warn!(
                            "[DayCycle] Rent {} cannot be paid from {}; game over",
                            rent, balance
                        );
                        let ticket = tickets.issue();
                        dialogs.send(ShowDialogEvent {
                            ticket,
                            text: picker.message().to_string(),
                        });
                        cycle.phase = DayPhase::Insolvent(ticket);
                    }
                }
            }
            DayPhase::Declined(t) if t == done.ticket => {
                menu.set_enabled(true, &[MenuButton::SkipDay]);
                cycle.phase = DayPhase::Idle;
            }
            DayPhase::Dawn(t) if t == done.ticket => {
                context.days_survived += 1;
                menu.set_enabled(true, &[MenuButton::SkipDay]);
                cycle.phase = DayPhase::Idle;
                info!(
                    "[DayCycle] Day {} done. Balance: {}",
                    context.days_survived,
                    ledger.balance()
                );
                day_ended.send(DayEndedEvent {
                    day: context.days_survived,
                    balance: ledger.balance(),
                });
            }
            _ => {}
        }
    }
}

pub fn on_insolvency_dismissed(
    mut dismissed: EventReader<DialogDismissedEvent>,
    mut cycle: ResMut<DayCycle>,
    mut tickets: ResMut<Tickets>,
    mut game_over: EventWriter<ShowGameOverEvent>,
) {
    for done in dismissed.read() {
        if cycle.phase != DayPhase::Insolvent(done.ticket) {
            continue;
        }
        let ticket = tickets.issue();
        game_over.send(ShowGameOverEvent {
            ticket,
            text: GAME_OVER_TEXT.to_string(),
            fatal: true,
        });
        cycle.phase = DayPhase::GameOver(ticket);
    }
}

pub fn on_game_over_acknowledged(
    mut acknowledged: EventReader<GameOverAcknowledgedEvent>,
    mut cycle: ResMut<DayCycle>,
    mut reset: EventWriter<ResetGameEvent>,
) {
    for ack in acknowledged.read() {
        if cycle.phase != DayPhase::GameOver(ack.ticket) {
            continue;
        }
        info!("[DayCycle] Restarting after game over");
        cycle.phase = DayPhase::Idle;
        reset.send(ResetGameEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent_table() -> CostTable {
        let mut table = CostTable::default();
        table.entries.insert(CostKey::RentDaily, -300);
        table
    }

    #[test]
    fn test_rent_paid_when_affordable() {
        let mut ledger = EconomyLedger::new(350);
        assert_eq!(
            settle_rent(&mut ledger, &rent_table()),
            RentOutcome::Paid { rent: -300 }
        );
        assert_eq!(ledger.balance(), 50);
    }

    #[test]
    fn test_rent_exactly_affordable() {
        let mut ledger = EconomyLedger::new(300);
        assert_eq!(
            settle_rent(&mut ledger, &rent_table()),
            RentOutcome::Paid { rent: -300 }
        );
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_insolvency_leaves_ledger_untouched() {
        let mut ledger = EconomyLedger::new(100);
        assert_eq!(
            settle_rent(&mut ledger, &rent_table()),
            RentOutcome::Insolvent {
                rent: -300,
                balance: 100
            }
        );
        assert_eq!(ledger.balance(), 100);
    }
}
