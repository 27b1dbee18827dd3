use std::sync::Arc;

use serde::Serialize;

use crate::catalog::BingoMonster;
use crate::game::WeaponTypeBonus;

/// One square of the bingo board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoCell {
    pub monster: Arc<BingoMonster>,
    pub weapon_bonus: WeaponTypeBonus,
    pub is_complete: bool,
}

impl BingoCell {
    pub fn new(monster: Arc<BingoMonster>, weapon_bonus: WeaponTypeBonus) -> Self {
        Self {
            monster,
            weapon_bonus,
            is_complete: false,
        }
    }

    /// Mark complete if `quest_id` satisfies this cell's objective.
    /// Already-complete cells stay complete.
    pub fn apply_quest(&mut self, quest_id: u32) -> bool {
        if self.monster.is_satisfied_by(quest_id) {
            self.is_complete = true;
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> CellSnapshot {
        CellSnapshot {
            objective: self.monster.name.clone(),
            weapon_bonus: self.weapon_bonus,
            is_complete: self.is_complete,
        }
    }
}

/// Render-ready copy of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub objective: String,
    pub weapon_bonus: WeaponTypeBonus,
    pub is_complete: bool,
}
