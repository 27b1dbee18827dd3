use thiserror::Error;

use crate::catalog::CatalogTier;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Catalog entry not found: {name:?} in {tier} catalog")]
    CatalogEntryMissing { name: String, tier: CatalogTier },

    #[error("Catalog for {0} has no objectives")]
    EmptyCatalog(CatalogTier),

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Session service is no longer running")]
    ServiceClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.message().to_string())
    }
}
