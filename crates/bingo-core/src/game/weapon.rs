use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Weapon category attached to a bingo cell as a scoring tag
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
#[strum(ascii_case_insensitive)]
pub enum WeaponTypeBonus {
    #[strum(serialize = "GS")]
    GreatSword = 0,
    #[strum(serialize = "HBG")]
    HeavyBowgun = 1,
    #[strum(serialize = "HA")]
    Hammer = 2,
    #[strum(serialize = "LA")]
    Lance = 3,
    #[strum(serialize = "SNS")]
    SwordAndShield = 4,
    #[strum(serialize = "LBG")]
    LightBowgun = 5,
    #[strum(serialize = "DS")]
    DualSwords = 6,
    #[strum(serialize = "LS")]
    LongSword = 7,
    #[strum(serialize = "HH")]
    HuntingHorn = 8,
    #[strum(serialize = "GL")]
    Gunlance = 9,
    #[strum(serialize = "BW")]
    Bow = 10,
    #[strum(serialize = "TO")]
    Tonfa = 11,
    #[strum(serialize = "SAF")]
    SwitchAxeF = 12,
    #[strum(serialize = "MS")]
    MagnetSpike = 13,
}

impl WeaponTypeBonus {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Uniform draw over every weapon type
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.gen_range(0..Self::COUNT) as u8;
        // index is always within the discriminant range
        Self::from_repr(index).unwrap_or(Self::GreatSword)
    }
}

impl std::fmt::Display for WeaponTypeBonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_discriminants_are_contiguous() {
        for i in 0..WeaponTypeBonus::COUNT as u8 {
            assert!(WeaponTypeBonus::from_u8(i).is_some(), "gap at {}", i);
        }
        assert!(WeaponTypeBonus::from_u8(WeaponTypeBonus::COUNT as u8).is_none());
    }

    #[test]
    fn test_random_covers_full_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..2000).map(|_| WeaponTypeBonus::random(&mut rng)).collect();
        assert_eq!(seen.len(), WeaponTypeBonus::COUNT);
    }
}
