//! Optional RON overrides for [`GameConfig`].

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use thiserror::Error;

use crate::shared::*;

pub const CONFIG_PATH: &str = "assets/config/economy.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

pub fn parse_config(text: &str) -> Result<GameConfig, ron::error::SpannedError> {
    ron::from_str(text)
}

/// Reads the config file if there is one. `Ok(None)` means "use defaults".
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config(path: &Path) -> Result<Option<GameConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    parse_config(&text)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path: display, source })
}

#[cfg(target_arch = "wasm32")]
pub fn load_config(_path: &str) -> Result<Option<GameConfig>, ConfigError> {
    Ok(None)
}
