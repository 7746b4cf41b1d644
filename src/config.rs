//! Run configuration
//!
//! Resolved settings for one invocation, assembled from command-line flags and
//! environment by the CLI layer and handed to every command.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::backends::cocktaildb::{ClientConfig, CocktailDbClient};
use crate::cache::acquire::RecipeCache;
use crate::cache::store::RecipeStore;
use crate::core::paths::{api_cache_dir, recipes_file};
use crate::core::render::{RenderConfig, Renderer};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Root for the durable store and the raw catalog cache
    pub data_dir: PathBuf,

    /// Overrides `<data_dir>/cocktails.json`
    pub store_path: Option<PathBuf>,

    pub api_base: String,

    pub timeout: Duration,

    /// Pause after each network fetch
    pub request_pause: Duration,

    /// Never contact the catalog
    pub offline: bool,

    pub render: RenderConfig,
}

impl Settings {
    /// Path of the durable recipe collection
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| recipes_file(&self.data_dir))
    }

    pub fn store(&self) -> RecipeStore {
        RecipeStore::new(self.store_path())
    }

    /// A fresh acquisition cache for this run
    pub fn recipe_cache(&self) -> RecipeCache {
        RecipeCache::new(self.store()).with_request_pause(self.request_pause)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base.clone(),
            timeout: self.timeout,
            cache_dir: Some(api_cache_dir(&self.data_dir)),
            offline: self.offline,
        }
    }

    /// Catalog client backed by the raw cache under the data directory
    pub fn catalog(&self) -> Result<CocktailDbClient> {
        CocktailDbClient::new(self.client_config()).context("Failed to set up catalog client")
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::with_config(self.render)
    }
}
