use rand::Rng;
use tracing::{debug, error};

use crate::board::{BingoCell, Board, Grid};
use crate::catalog::{CatalogProvider, CatalogTier};
use crate::config;
use crate::error::{Error, Result};
use crate::game::{Difficulty, WeaponTypeBonus};

/// Builds randomized boards from a catalog
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    extreme_center: String,
}

impl BoardGenerator {
    pub fn new(extreme_center: impl Into<String>) -> Self {
        Self {
            extreme_center: extreme_center.into(),
        }
    }

    pub fn extreme_center(&self) -> &str {
        &self.extreme_center
    }

    /// Generate a fresh board for `difficulty`.
    ///
    /// Each cell draws its objective and weapon bonus independently, so the
    /// same objective may appear more than once. Extreme boards pin the
    /// center cell to the configured boss objective; a catalog without that
    /// objective is a configuration error.
    pub fn generate<C, R>(&self, difficulty: Difficulty, catalog: &C, rng: &mut R) -> Result<Board>
    where
        C: CatalogProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let size = difficulty.board_size();
        let tier = difficulty.catalog_tier();
        let monsters = catalog.objectives(tier);

        if monsters.is_empty() {
            error!("Cannot generate {} board: {} catalog is empty", difficulty, tier);
            return Err(Error::EmptyCatalog(tier));
        }

        let mut board = Grid::from_fn(size, size, |_, _| {
            let monster = &monsters[rng.gen_range(0..monsters.len())];
            BingoCell::new(monster.clone(), WeaponTypeBonus::random(rng))
        });

        if difficulty.has_fixed_center() {
            let center = catalog
                .find(CatalogTier::Hard, &self.extreme_center)
                .ok_or_else(|| {
                    error!(
                        "Extreme center objective {:?} missing from hard catalog",
                        self.extreme_center
                    );
                    Error::CatalogEntryMissing {
                        name: self.extreme_center.clone(),
                        tier: CatalogTier::Hard,
                    }
                })?;

            if let Some(cell) = board.get_mut(size / 2, size / 2) {
                cell.monster = center;
            }
        }

        debug!("Generated {}x{} {} board", size, size, difficulty);
        Ok(board)
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(config::board::EXTREME_CENTER_OBJECTIVE)
    }
}

/// Generate a board using the default Extreme center objective
pub fn generate_board<C, R>(difficulty: Difficulty, catalog: &C, rng: &mut R) -> Result<Board>
where
    C: CatalogProvider + ?Sized,
    R: Rng + ?Sized,
{
    BoardGenerator::default().generate(difficulty, catalog, rng)
}

/// Draw a new weapon bonus for every cell. Completion state is untouched.
pub fn reroll_weapon_bonuses<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    for cell in board.iter_mut() {
        cell.weapon_bonus = WeaponTypeBonus::random(rng);
    }
}
