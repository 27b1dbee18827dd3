use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// A single gauntlet modifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GauntletBoost {
    Zenith,
    Solstice,
    Musou,
}

impl GauntletBoost {
    fn bit(self) -> u8 {
        match self {
            Self::Zenith => 0b001,
            Self::Solstice => 0b010,
            Self::Musou => 0b100,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Set of active gauntlet boosts.
///
/// Immutable value: toggling returns a new set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GauntletBoosts(u8);

impl GauntletBoosts {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b111);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, boost: GauntletBoost) -> bool {
        self.0 & boost.bit() != 0
    }

    #[must_use]
    pub fn with(self, boost: GauntletBoost) -> Self {
        Self(self.0 | boost.bit())
    }

    #[must_use]
    pub fn without(self, boost: GauntletBoost) -> Self {
        Self(self.0 & !boost.bit())
    }

    #[must_use]
    pub fn toggled(self, boost: GauntletBoost) -> Self {
        Self(self.0 ^ boost.bit())
    }

    /// Number of active flags
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = GauntletBoost> {
        use strum::IntoEnumIterator;
        let set = *self;
        GauntletBoost::iter().filter(move |b| set.contains(*b))
    }
}

impl FromIterator<GauntletBoost> for GauntletBoosts {
    fn from_iter<I: IntoIterator<Item = GauntletBoost>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl std::fmt::Display for GauntletBoosts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter().map(|b| b.name()).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_and_without() {
        let boosts = GauntletBoosts::NONE.with(GauntletBoost::Zenith);
        assert!(boosts.contains(GauntletBoost::Zenith));
        assert!(!boosts.contains(GauntletBoost::Musou));

        let boosts = boosts.with(GauntletBoost::Musou).without(GauntletBoost::Zenith);
        assert!(!boosts.contains(GauntletBoost::Zenith));
        assert!(boosts.contains(GauntletBoost::Musou));
        assert_eq!(boosts.count(), 1);
    }

    #[test]
    fn test_toggle_is_involution() {
        let original = GauntletBoosts::NONE.with(GauntletBoost::Solstice);
        let toggled = original.toggled(GauntletBoost::Zenith);
        assert_eq!(toggled.count(), 2);
        assert_eq!(toggled.toggled(GauntletBoost::Zenith), original);
    }

    #[test]
    fn test_from_bits_masks_unknown() {
        assert_eq!(GauntletBoosts::from_bits(0xFF), GauntletBoosts::ALL);
        assert_eq!(GauntletBoosts::ALL.count(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(GauntletBoosts::NONE.to_string(), "none");
        let boosts: GauntletBoosts = [GauntletBoost::Musou, GauntletBoost::Zenith]
            .into_iter()
            .collect();
        assert_eq!(boosts.to_string(), "zenith+musou");
    }
}
