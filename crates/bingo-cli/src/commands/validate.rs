//! Catalog validation command.

use std::path::Path;

use anyhow::Result;
use bingo_core::{BingoConfig, CatalogProvider, CatalogTier};

use crate::cli_utils;

pub fn run(config: &BingoConfig, catalog_path: &Path) -> Result<()> {
    let catalog = cli_utils::load_catalog(catalog_path, config)?;

    for tier in CatalogTier::ALL {
        println!("{:<8} {} objectives", tier, catalog.objectives(tier).len());
    }
    println!(
        "Extreme center: {} (ok)",
        config.board.extreme_center_objective
    );
    Ok(())
}
