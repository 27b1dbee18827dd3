//! Monster objective catalogs.
//!
//! The catalog itself is static data owned by the host application. This
//! module defines the seam the board generator consumes (`CatalogProvider`)
//! and a JSON-backed implementation (`StaticCatalog`).

mod monster;
mod provider;

pub use monster::BingoMonster;
pub use provider::{CatalogProvider, CatalogTier, StaticCatalog};
