use serde::Serialize;

use crate::config::{EconomyConfig, TierValues};
use crate::game::{Difficulty, GauntletBoosts};

/// Pure cost rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    start_base_costs: TierValues<u64>,
    starting_carts: TierValues<u32>,
    escalation_base: u64,
}

impl CostTable {
    /// Points needed to start a session.
    ///
    /// `base(difficulty) * (1 + active boosts + extra)`. Each extra flag adds
    /// one base cost, so the result never decreases as flags are added.
    pub fn start_cost(&self, boosts: GauntletBoosts, difficulty: Difficulty, extra_boost: bool) -> u64 {
        let multiplier = 1 + u64::from(boosts.count()) + u64::from(extra_boost);
        self.start_base_costs
            .get(difficulty)
            .saturating_mul(multiplier)
    }

    /// Carts granted when a session starts
    pub fn starting_carts(&self, difficulty: Difficulty) -> u32 {
        self.starting_carts.get(difficulty)
    }

    /// Initial reroll and cart cost
    pub fn escalation_base(&self) -> u64 {
        self.escalation_base
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::from(&EconomyConfig::default())
    }
}

impl From<&EconomyConfig> for CostTable {
    fn from(config: &EconomyConfig) -> Self {
        Self {
            start_base_costs: config.start_base_costs,
            starting_carts: config.starting_carts,
            escalation_base: config.escalation_base,
        }
    }
}

/// Start cost using the default table
pub fn calculate_bingo_start_cost(
    boosts: GauntletBoosts,
    difficulty: Difficulty,
    extra_boost: bool,
) -> u64 {
    CostTable::default().start_cost(boosts, difficulty, extra_boost)
}

/// Starting carts using the default table
pub fn calculate_carts_at_bingo_start(difficulty: Difficulty) -> u32 {
    CostTable::default().starting_carts(difficulty)
}

/// A cost that doubles after every successful purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EscalatingCost {
    base: u64,
    current: u64,
}

impl EscalatingCost {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            current: base,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn escalate(&mut self) {
        self.current = self.current.saturating_mul(2);
    }

    pub fn reset(&mut self) {
        self.current = self.base;
    }
}
