//! Economy domain — money display publication and formatting.
//!
//! The ledger itself lives in `crate::shared` so every domain can charge or
//! pay through it. This plugin only mirrors it to the display collaborator.

use bevy::prelude::*;

pub mod money;

pub use money::{format_delta, format_money};
use money::publish_money_display;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        // Runs in every state; the balance is visible across levels.
        app.add_systems(PostUpdate, publish_money_display);
    }
}
