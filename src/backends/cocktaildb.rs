//! Cocktail catalog HTTP client
//!
//! Wraps a blocking reqwest client around the catalog's `search.php` endpoint.
//! Raw responses (hits and explicit misses) are kept in a [`RawCache`] so a
//! name is only ever requested once; transport failures are never cached.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::backends::raw_cache::RawCache;
use crate::backends::record::{classify_body, BodyShape, Collection, DrinkRecord, IngredientRecord};
use crate::backends::{Catalog, CatalogError, FetchSource, Lookup};

/// Public catalog endpoint
pub const DEFAULT_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

/// Default timeout for catalog requests (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Root of the raw response cache, `None` disables it
    pub cache_dir: Option<PathBuf>,
    /// Serve from the raw cache only
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_dir: None,
            offline: false,
        }
    }
}

/// HTTP catalog client with a per-name raw cache
pub struct CocktailDbClient {
    client: Client,
    search_url: String,
    raw_cache: Option<RawCache>,
    offline: bool,
}

impl CocktailDbClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            client,
            search_url: search_url(&config.base_url),
            raw_cache: config.cache_dir.map(RawCache::new),
            offline: config.offline,
        })
    }

    /// Look up an ingredient by name
    pub fn search_ingredient(&self, name: &str) -> Result<Lookup<IngredientRecord>, CatalogError> {
        self.lookup(Collection::Ingredients, "i", name)
    }

    /// Resolve a name through the raw cache, then the network
    fn lookup<T: DeserializeOwned>(
        &self,
        collection: Collection,
        param: &str,
        name: &str,
    ) -> Result<Lookup<T>, CatalogError> {
        if let Some(body) = self.raw_cache.as_ref().and_then(|c| c.read(collection, name)) {
            match classify_body(&body, collection) {
                BodyShape::Found(entry) => match serde_json::from_value(entry) {
                    Ok(record) => {
                        return Ok(Lookup::Found {
                            record,
                            source: FetchSource::DiskCache,
                        })
                    }
                    Err(e) => warn!("Ignoring unusable cached entry for '{}': {}", name, e),
                },
                BodyShape::NotFound => {
                    debug!("'{}' cached as not found", name);
                    return Ok(Lookup::NotFound);
                }
                BodyShape::Invalid => warn!("Ignoring unusable cached entry for '{}'", name),
            }
        }

        if self.offline {
            return Err(CatalogError::Offline);
        }

        info!("Fetching '{}' from catalog", name);
        let body = self.get_json(param, name)?;

        match classify_body(&body, collection) {
            BodyShape::Found(entry) => {
                let record = serde_json::from_value(entry).map_err(|e| {
                    CatalogError::InvalidResponse {
                        url: self.search_url.clone(),
                        detail: e.to_string(),
                    }
                })?;
                self.remember(collection, name, &body);
                Ok(Lookup::Found {
                    record,
                    source: FetchSource::Network,
                })
            }
            BodyShape::NotFound => {
                info!("'{}' not found in catalog", name);
                self.remember(collection, name, &collection.not_found_body());
                Ok(Lookup::NotFound)
            }
            BodyShape::Invalid => Err(CatalogError::InvalidResponse {
                url: self.search_url.clone(),
                detail: format!("missing '{}' collection", collection.key()),
            }),
        }
    }

    /// Send `GET search.php?{param}={name}` and parse the body
    fn get_json(&self, param: &str, name: &str) -> Result<Value, CatalogError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[(param, name)])
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Transport(format!(
                "HTTP {} from {}",
                response.status(),
                self.search_url
            )));
        }

        response
            .json::<Value>()
            .map_err(|e| CatalogError::InvalidResponse {
                url: self.search_url.clone(),
                detail: e.to_string(),
            })
    }

    /// Write a body to the raw cache; failure only costs a future request
    fn remember(&self, collection: Collection, name: &str, body: &Value) {
        if let Some(cache) = &self.raw_cache {
            if let Err(e) = cache.write(collection, name, body) {
                warn!("Cache write error for '{}': {:#}", name, e);
            }
        }
    }
}

impl Catalog for CocktailDbClient {
    fn fetch_by_name(&self, name: &str) -> Result<Lookup<DrinkRecord>, CatalogError> {
        self.lookup(Collection::Drinks, "s", name)
    }
}

/// `search.php` under the base endpoint, with or without a trailing slash
fn search_url(base_url: &str) -> String {
    format!("{}/search.php", base_url.trim_end_matches('/'))
}
