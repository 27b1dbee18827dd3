//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use bingo_core::{BingoConfig, StaticCatalog};
use tracing::{info, warn};

/// Load the config file, falling back to defaults when it is absent or broken
pub fn load_config(path: Option<&Path>) -> BingoConfig {
    let Some(path) = path else {
        return BingoConfig::default();
    };

    match BingoConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", path, e);
            BingoConfig::default()
        }
    }
}

/// Load a catalog and check it against the configured Extreme center objective
pub fn load_catalog(path: &Path, config: &BingoConfig) -> Result<StaticCatalog> {
    let catalog = StaticCatalog::load(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    catalog
        .validate(&config.board.extreme_center_objective)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    Ok(catalog)
}
