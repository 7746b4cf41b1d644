//! Backends module - Catalog integrations
//!
//! Provides:
//! - record: Raw catalog response shapes
//! - raw_cache: Per-name on-disk cache of raw responses
//! - cocktaildb: HTTP client for the cocktail catalog
//!
//! The acquisition cache talks to a catalog only through [`Catalog`], so tests
//! can substitute a stub.

pub mod cocktaildb;
pub mod raw_cache;
pub mod record;

use thiserror::Error;

use crate::backends::record::DrinkRecord;

/// Where a found record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Fetched over the network during this call
    Network,
    /// Served from the per-name raw cache
    DiskCache,
}

/// Result of a successful catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found { record: T, source: FetchSource },
    NotFound,
}

/// Failures that say nothing about whether the name exists.
/// None of these are cached; a later run tries again.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response from {url}: {detail}")]
    InvalidResponse { url: String, detail: String },

    #[error("catalog lookups disabled (offline)")]
    Offline,
}

/// A source of cocktail records by name
pub trait Catalog {
    /// Look up a drink by name. Only the first match is returned.
    fn fetch_by_name(&self, name: &str) -> Result<Lookup<DrinkRecord>, CatalogError>;
}

/// Catalog standing in for a client that could not be built.
/// Every lookup fails with the build error.
#[derive(Debug, Clone)]
pub struct UnavailableCatalog {
    reason: String,
}

impl UnavailableCatalog {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Catalog for UnavailableCatalog {
    fn fetch_by_name(&self, _name: &str) -> Result<Lookup<DrinkRecord>, CatalogError> {
        Err(CatalogError::Client(self.reason.clone()))
    }
}
