//! Data layer — seeds the cost table, layouts and config at startup.
//!
//! Runs in OnEnter(GameState::Loading): fills CostTable and LayoutRegistry
//! from the built-in tables, layers the optional RON config on top, resets
//! the ledger to the starting balance, then moves on to the Tutorial.
//! A reset after game-over comes back through here.

pub mod config;
pub mod costs;
pub mod layouts;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

fn read_config() -> GameConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let result = config::load_config(std::path::Path::new(config::CONFIG_PATH));
    #[cfg(target_arch = "wasm32")]
    let result = config::load_config(config::CONFIG_PATH);

    match result {
        Ok(Some(config)) => {
            info!("[Data] Loaded overrides from {}", config::CONFIG_PATH);
            config
        }
        Ok(None) => GameConfig::default(),
        Err(err) => {
            warn!("[Data] {}; using built-in defaults", err);
            GameConfig::default()
        }
    }
}

fn load_all_data(
    mut cost_table: ResMut<CostTable>,
    mut layouts: ResMut<LayoutRegistry>,
    mut game_config: ResMut<GameConfig>,
    mut ledger: ResMut<EconomyLedger>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("[Data] Populating registries…");

    let config = read_config();

    costs::populate_costs(&mut cost_table);
    costs::apply_overrides(&mut cost_table, &config.costs);
    info!(
        "[Data]   Cost rows: {} ({} overridden)",
        cost_table.entries.len(),
        config.costs.len()
    );

    layouts::populate_layouts(&mut layouts);
    info!(
        "[Data]   Parcels: {}, livestock: {}, crops: {}",
        layouts.parcels.len(),
        layouts.livestock.len(),
        layouts.crops.len()
    );

    ledger.reset(config.starting_balance);
    *game_config = config;

    info!("[Data] Ready. Transitioning to Tutorial.");
    next_state.set(GameState::Tutorial);
}
