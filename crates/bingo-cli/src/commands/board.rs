//! Board preview command.

use std::path::Path;

use anyhow::Result;
use bingo_core::{BingoConfig, BoardGenerator, Difficulty, board};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli_utils;
use crate::render;

pub fn run(
    config: &BingoConfig,
    catalog_path: &Path,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let catalog = cli_utils::load_catalog(catalog_path, config)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = BoardGenerator::new(config.board.extreme_center_objective.clone());
    let board = generator.generate(difficulty, &catalog, &mut rng)?;
    let snapshot = board::snapshot(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{} board ({}x{})", difficulty, board.width(), board.height());
        println!("{}", render::format_board(&snapshot));
    }
    Ok(())
}
