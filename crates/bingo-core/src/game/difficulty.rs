use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::catalog::CatalogTier;

/// Bingo difficulty tier
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    #[strum(serialize = "easy")]
    Easy = 0,
    #[strum(serialize = "medium")]
    Medium = 1,
    #[strum(serialize = "hard")]
    Hard = 2,
    #[strum(serialize = "extreme")]
    Extreme = 3,
}

impl Difficulty {
    pub const STANDARD_BOARD_SIZE: usize = 5;
    pub const EXTREME_BOARD_SIZE: usize = 10;

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Side length of the square board for this tier
    pub fn board_size(&self) -> usize {
        match self {
            Self::Extreme => Self::EXTREME_BOARD_SIZE,
            _ => Self::STANDARD_BOARD_SIZE,
        }
    }

    /// Catalog used to fill the board. Extreme has no catalog of its own.
    pub fn catalog_tier(&self) -> CatalogTier {
        match self {
            Self::Easy => CatalogTier::Easy,
            Self::Medium => CatalogTier::Medium,
            Self::Hard | Self::Extreme => CatalogTier::Hard,
        }
    }

    pub fn has_fixed_center(&self) -> bool {
        matches!(self, Self::Extreme)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
