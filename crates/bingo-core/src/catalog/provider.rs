use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, error};

use crate::catalog::BingoMonster;
use crate::error::{Error, Result};

/// Catalog lookup key. Extreme boards draw from `Hard`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatalogTier {
    Easy,
    Medium,
    Hard,
}

impl CatalogTier {
    pub const ALL: [CatalogTier; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

impl std::fmt::Display for CatalogTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        f.pad(name)
    }
}

/// Source of eligible objectives for a catalog tier
pub trait CatalogProvider {
    /// All objectives eligible for `tier`
    fn objectives(&self, tier: CatalogTier) -> &[Arc<BingoMonster>];

    /// Exact-name lookup within `tier`
    fn find(&self, tier: CatalogTier, name: &str) -> Option<Arc<BingoMonster>> {
        self.objectives(tier)
            .iter()
            .find(|m| m.name == name)
            .cloned()
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    easy: Vec<BingoMonster>,
    #[serde(default)]
    medium: Vec<BingoMonster>,
    #[serde(default)]
    hard: Vec<BingoMonster>,
}

/// In-memory catalog, usually loaded from a JSON file
///
/// File format: `{"easy": [...], "medium": [...], "hard": [...]}` where each
/// entry is `{"name": "...", "quest_ids": [..]}`.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    easy: Vec<Arc<BingoMonster>>,
    medium: Vec<Arc<BingoMonster>>,
    hard: Vec<Arc<BingoMonster>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| Error::CatalogParse(e.to_string()))?;

        let wrap = |list: Vec<BingoMonster>| list.into_iter().map(Arc::new).collect();
        let catalog = Self {
            easy: wrap(file.easy),
            medium: wrap(file.medium),
            hard: wrap(file.hard),
        };

        debug!(
            "Parsed catalog: easy={}, medium={}, hard={}",
            catalog.easy.len(),
            catalog.medium.len(),
            catalog.hard.len()
        );
        Ok(catalog)
    }

    /// Add an objective to a tier
    pub fn insert(&mut self, tier: CatalogTier, monster: BingoMonster) {
        self.list_mut(tier).push(Arc::new(monster));
    }

    #[must_use]
    pub fn with(mut self, tier: CatalogTier, monster: BingoMonster) -> Self {
        self.insert(tier, monster);
        self
    }

    /// Check that every tier has objectives and that the fixed Extreme
    /// center objective is present in the Hard catalog.
    pub fn validate(&self, extreme_center: &str) -> Result<()> {
        for tier in CatalogTier::iter() {
            if self.objectives(tier).is_empty() {
                error!("Catalog validation failed: {} catalog is empty", tier);
                return Err(Error::EmptyCatalog(tier));
            }
        }

        if self.find(CatalogTier::Hard, extreme_center).is_none() {
            error!(
                "Catalog validation failed: extreme center {:?} missing from hard catalog",
                extreme_center
            );
            return Err(Error::CatalogEntryMissing {
                name: extreme_center.to_string(),
                tier: CatalogTier::Hard,
            });
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_mut(&mut self, tier: CatalogTier) -> &mut Vec<Arc<BingoMonster>> {
        match tier {
            CatalogTier::Easy => &mut self.easy,
            CatalogTier::Medium => &mut self.medium,
            CatalogTier::Hard => &mut self.hard,
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn objectives(&self, tier: CatalogTier) -> &[Arc<BingoMonster>] {
        match tier {
            CatalogTier::Easy => &self.easy,
            CatalogTier::Medium => &self.medium,
            CatalogTier::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "easy": [{"name": "Yian Kut-Ku", "quest_ids": [1, 2]}],
        "medium": [{"name": "Rathian", "quest_ids": [10]}],
        "hard": [
            {"name": "Espinas", "quest_ids": [20]},
            {"name": "Disufiroa", "quest_ids": [99, 100]}
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = StaticCatalog::parse(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.objectives(CatalogTier::Hard).len(), 2);
        assert_eq!(catalog.objectives(CatalogTier::Easy)[0].name, "Yian Kut-Ku");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = StaticCatalog::parse("{ not json");
        assert!(matches!(result, Err(Error::CatalogParse(_))));
    }

    #[test]
    fn test_find_exact_name() {
        let catalog = StaticCatalog::parse(SAMPLE).unwrap();
        assert!(catalog.find(CatalogTier::Hard, "Disufiroa").is_some());
        assert!(catalog.find(CatalogTier::Hard, "disufiroa").is_none());
        assert!(catalog.find(CatalogTier::Easy, "Disufiroa").is_none());
    }

    #[test]
    fn test_validate_ok() {
        let catalog = StaticCatalog::parse(SAMPLE).unwrap();
        assert!(catalog.validate("Disufiroa").is_ok());
    }

    #[test]
    fn test_validate_missing_center() {
        let catalog = StaticCatalog::parse(SAMPLE).unwrap();
        let result = catalog.validate("Shantien");
        assert!(matches!(
            result,
            Err(Error::CatalogEntryMissing { tier: CatalogTier::Hard, .. })
        ));
    }

    #[test]
    fn test_validate_empty_tier() {
        let catalog = StaticCatalog::new().with(CatalogTier::Hard, BingoMonster::new("Disufiroa", [1]));
        assert!(matches!(
            catalog.validate("Disufiroa"),
            Err(Error::EmptyCatalog(CatalogTier::Easy))
        ));
    }
}
