use bevy::prelude::*;
use crate::shared::*;

/// Publishes a MoneyDisplayEvent whenever the ledger changed this frame.
///
/// The reported delta is measured against the last published balance, so
/// several ledger mutations in one frame still add up on screen.
pub fn publish_money_display(
    ledger: Res<EconomyLedger>,
    mut last_published: Local<Option<i64>>,
    mut display_events: EventWriter<MoneyDisplayEvent>,
) {
    if !ledger.is_changed() {
        return;
    }
    let balance = ledger.balance();
    let delta = last_published.map_or(0, |previous| balance - previous);
    if *last_published == Some(balance) {
        return;
    }
    *last_published = Some(balance);
    display_events.send(MoneyDisplayEvent {
        amount: ledger.display_amount(),
        delta,
    });
}

/// Format a money amount as a display string (e.g. "$1,234").
/// Negative balances are shown as zero.
pub fn format_money(amount: i64) -> String {
    let s = amount.max(0).to_string();
    let mut result = String::from("$");
    let digits: Vec<char> = s.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// Signed variant for floating amounts ("+$250", "-$1,500").
pub fn format_delta(delta: i64) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    format!("{}{}", sign, format_money(delta.saturating_abs()))
}
