pub mod catalog;
pub mod filter;
pub mod models;
pub mod store;

#[cfg(test)]
pub mod fixtures;

pub use store::{Page, Store};

use serde::Serialize;

use self::catalog::Catalog;

/// Which table layout the database file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaProfile {
    /// fighters, fighter_stats, events, fights (one row per bout).
    Normalized,
    /// fighters with inline stats, events, fight_results (one row per participant).
    Denormalized,
}

impl SchemaProfile {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            SchemaProfile::Normalized => &catalog::NORMALIZED,
            SchemaProfile::Denormalized => &catalog::DENORMALIZED,
        }
    }
}

impl std::fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SchemaProfile::Normalized => "normalized",
            SchemaProfile::Denormalized => "denormalized",
        };
        write!(f, "{s}")
    }
}
