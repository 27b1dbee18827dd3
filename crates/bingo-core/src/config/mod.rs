//! Configuration.
//!
//! Compile-time defaults live in the nested constant modules; `BingoConfig`
//! lets a TOML file override them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::economy::CostTable;
use crate::error::Result;
use crate::game::Difficulty;

/// Economy defaults.
pub mod economy {
    /// Start cost per tier before boost multipliers: Easy, Medium, Hard, Extreme.
    pub const START_BASE_COSTS: [u64; 4] = [10, 20, 40, 80];

    /// Starting value of the reroll and cart costs. Each purchase doubles it.
    pub const ESCALATION_BASE: u64 = 2;

    /// Carts granted at session start: Easy, Medium, Hard, Extreme.
    pub const STARTING_CARTS: [u32; 4] = [5, 4, 3, 2];
}

/// Board defaults.
pub mod board {
    /// Objective pinned to the center of every Extreme board
    pub const EXTREME_CENTER_OBJECTIVE: &str = "Disufiroa";
}

/// Storage defaults.
pub mod storage {
    pub const HISTORY_DIR: &str = "bingo_history";
    pub const LEDGER_PATH: &str = "bingo_points.json";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEconomyConfig")]
pub struct EconomyConfig {
    pub start_base_costs: TierValues<u64>,
    pub escalation_base: u64,
    pub starting_carts: TierValues<u32>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            start_base_costs: TierValues::from(economy::START_BASE_COSTS),
            escalation_base: economy::ESCALATION_BASE,
            starting_carts: TierValues::from(economy::STARTING_CARTS),
        }
    }
}

impl EconomyConfig {
    /// Start cost must not fall as difficulty rises
    pub fn validate(&self) -> std::result::Result<(), String> {
        let costs = self.start_base_costs.to_array();
        if let Some(pair) = costs.windows(2).find(|w| w[0] > w[1]) {
            return Err(format!(
                "start_base_costs must not decrease with difficulty ({} > {})",
                pair[0], pair[1]
            ));
        }
        Ok(())
    }
}

/// `[economy]` as written in the file. Missing tiers fall back to the
/// defaults one by one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEconomyConfig {
    start_base_costs: PartialTierValues<u64>,
    escalation_base: Option<u64>,
    starting_carts: PartialTierValues<u32>,
}

impl TryFrom<RawEconomyConfig> for EconomyConfig {
    type Error = String;

    fn try_from(raw: RawEconomyConfig) -> std::result::Result<Self, Self::Error> {
        let config = Self {
            start_base_costs: raw.start_base_costs.or(economy::START_BASE_COSTS),
            escalation_base: raw.escalation_base.unwrap_or(economy::ESCALATION_BASE),
            starting_carts: raw.starting_carts.or(economy::STARTING_CARTS),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
struct PartialTierValues<T> {
    easy: Option<T>,
    medium: Option<T>,
    hard: Option<T>,
    extreme: Option<T>,
}

impl<T> Default for PartialTierValues<T> {
    fn default() -> Self {
        Self {
            easy: None,
            medium: None,
            hard: None,
            extreme: None,
        }
    }
}

impl<T: Copy> PartialTierValues<T> {
    fn or(self, defaults: [T; 4]) -> TierValues<T> {
        TierValues {
            easy: self.easy.unwrap_or(defaults[0]),
            medium: self.medium.unwrap_or(defaults[1]),
            hard: self.hard.unwrap_or(defaults[2]),
            extreme: self.extreme.unwrap_or(defaults[3]),
        }
    }
}

/// One value per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TierValues<T> {
    pub easy: T,
    pub medium: T,
    pub hard: T,
    pub extreme: T,
}

impl<T: Copy> TierValues<T> {
    pub fn get(&self, difficulty: Difficulty) -> T {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Extreme => self.extreme,
        }
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.easy, self.medium, self.hard, self.extreme]
    }
}

impl<T: Copy> From<[T; 4]> for TierValues<T> {
    fn from(values: [T; 4]) -> Self {
        Self {
            easy: values[0],
            medium: values[1],
            hard: values[2],
            extreme: values[3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub extreme_center_objective: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            extreme_center_objective: board::EXTREME_CENTER_OBJECTIVE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub history_dir: PathBuf,
    pub ledger_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from(storage::HISTORY_DIR),
            ledger_path: PathBuf::from(storage::LEDGER_PATH),
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BingoConfig {
    pub economy: EconomyConfig,
    pub board: BoardConfig,
    pub storage: StorageConfig,
}

impl BingoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn cost_table(&self) -> CostTable {
        CostTable::from(&self.economy)
    }
}
