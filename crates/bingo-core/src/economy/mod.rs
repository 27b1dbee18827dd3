//! Bingo points economy: pure cost rules plus spending against an external
//! balance.

mod cost;
mod points;

pub use cost::{
    CostTable, EscalatingCost, calculate_bingo_start_cost, calculate_carts_at_bingo_start,
};
pub use points::{InMemoryPointStore, PointStore};

use std::sync::Arc;

use serde::Serialize;
use strum::IntoStaticStr;
use tracing::{debug, info};

use crate::game::{Difficulty, GauntletBoosts};

/// Something bought during a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Purchase {
    Start,
    Reroll,
    Cart,
}

impl std::fmt::Display for Purchase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Result of a spend attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendResult {
    Spent { cost: u64 },
    Declined { cost: u64, balance: u64 },
}

impl SpendResult {
    pub fn is_spent(&self) -> bool {
        matches!(self, Self::Spent { .. })
    }
}

/// Economy engine owned by one session
pub struct Economy {
    store: Arc<dyn PointStore>,
    costs: CostTable,
    reroll_cost: EscalatingCost,
    carts_cost: EscalatingCost,
}

impl Economy {
    pub fn new(store: Arc<dyn PointStore>, costs: CostTable) -> Self {
        let base = costs.escalation_base();
        Self {
            store,
            costs,
            reroll_cost: EscalatingCost::new(base),
            carts_cost: EscalatingCost::new(base),
        }
    }

    pub fn balance(&self) -> u64 {
        self.store.balance()
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn start_cost(&self, boosts: GauntletBoosts, difficulty: Difficulty, extra_boost: bool) -> u64 {
        self.costs.start_cost(boosts, difficulty, extra_boost)
    }

    pub fn starting_carts(&self, difficulty: Difficulty) -> u32 {
        self.costs.starting_carts(difficulty)
    }

    pub fn reroll_cost(&self) -> u64 {
        self.reroll_cost.current()
    }

    pub fn carts_cost(&self) -> u64 {
        self.carts_cost.current()
    }

    /// Check-and-deduct against the external balance
    pub fn spend_points(&self, amount: u64) -> bool {
        self.store.try_spend(amount)
    }

    /// Spend for `purchase` at its current price.
    ///
    /// Reroll and cart prices double after a successful purchase. `Start`
    /// takes the price from `start_cost`.
    pub fn purchase(&mut self, purchase: Purchase, start_cost: u64) -> SpendResult {
        let cost = match purchase {
            Purchase::Start => start_cost,
            Purchase::Reroll => self.reroll_cost.current(),
            Purchase::Cart => self.carts_cost.current(),
        };

        if !self.spend_points(cost) {
            let balance = self.balance();
            info!(
                "Insufficient points for {}: cost={}, balance={}",
                purchase, cost, balance
            );
            return SpendResult::Declined { cost, balance };
        }

        match purchase {
            Purchase::Start => {}
            Purchase::Reroll => self.reroll_cost.escalate(),
            Purchase::Cart => self.carts_cost.escalate(),
        }
        debug!("Spent {} points on {}", cost, purchase);
        SpendResult::Spent { cost }
    }

    /// Return reroll and cart prices to their base value
    pub fn reset_costs(&mut self) {
        self.reroll_cost.reset();
        self.carts_cost.reset();
    }
}

impl std::fmt::Debug for Economy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Economy")
            .field("balance", &self.balance())
            .field("reroll_cost", &self.reroll_cost)
            .field("carts_cost", &self.carts_cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy(balance: u64) -> Economy {
        Economy::new(Arc::new(InMemoryPointStore::new(balance)), CostTable::default())
    }

    #[test]
    fn test_reroll_cost_doubles_on_success() {
        let mut economy = economy(100);
        assert_eq!(economy.reroll_cost(), 2);

        assert_eq!(economy.purchase(Purchase::Reroll, 0), SpendResult::Spent { cost: 2 });
        assert_eq!(economy.reroll_cost(), 4);
        assert_eq!(economy.balance(), 98);
        // Independent of the cart price
        assert_eq!(economy.carts_cost(), 2);
    }

    #[test]
    fn test_declined_purchase_keeps_price() {
        let mut economy = economy(3);
        assert!(economy.purchase(Purchase::Cart, 0).is_spent());
        assert_eq!(economy.carts_cost(), 4);

        let result = economy.purchase(Purchase::Cart, 0);
        assert_eq!(result, SpendResult::Declined { cost: 4, balance: 1 });
        assert_eq!(economy.carts_cost(), 4);
        assert_eq!(economy.balance(), 1);
    }

    #[test]
    fn test_start_purchase_does_not_escalate() {
        let mut economy = economy(50);
        assert_eq!(economy.purchase(Purchase::Start, 30), SpendResult::Spent { cost: 30 });
        assert_eq!(economy.reroll_cost(), 2);
        assert_eq!(economy.carts_cost(), 2);
        assert_eq!(economy.balance(), 20);
    }

    #[test]
    fn test_reset_costs() {
        let mut economy = economy(100);
        economy.purchase(Purchase::Reroll, 0);
        economy.purchase(Purchase::Reroll, 0);
        economy.purchase(Purchase::Cart, 0);
        economy.reset_costs();
        assert_eq!(economy.reroll_cost(), 2);
        assert_eq!(economy.carts_cost(), 2);
    }
}
