//! Game-side value types shared by the board, economy and session.

mod boost;
mod difficulty;
mod weapon;

pub use boost::{GauntletBoost, GauntletBoosts};
pub use difficulty::Difficulty;
pub use weapon::WeaponTypeBonus;
