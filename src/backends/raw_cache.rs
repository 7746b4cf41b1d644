//! Raw response cache
//!
//! One JSON file per queried name, holding the catalog's response body
//! verbatim (including the not-found sentinel). Repeated lookups of the same
//! name never reach the network again, even across runs.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::backends::record::Collection;
use crate::core::paths::cache_file_name;

/// Per-name raw response cache rooted at a directory
#[derive(Debug, Clone)]
pub struct RawCache {
    root: PathBuf,
}

impl RawCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File holding the raw response for `name`
    pub fn path_for(&self, collection: Collection, name: &str) -> PathBuf {
        self.root
            .join(collection.cache_dir_name())
            .join(cache_file_name(name))
    }

    /// Read a cached body. Missing or unreadable files count as a miss.
    pub fn read(&self, collection: Collection, name: &str) -> Option<Value> {
        let path = self.path_for(collection, name);
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Cache read error for '{}': {}", name, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Loaded '{}' from raw cache {:?}", name, path);
                Some(value)
            }
            Err(e) => {
                warn!("Corrupt raw cache entry for '{}': {}", name, e);
                None
            }
        }
    }

    /// Store a body, replacing any previous entry
    pub fn write(&self, collection: Collection, name: &str, body: &Value) -> Result<()> {
        let path = self.path_for(collection, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(body)?;
        fs::write(&path, json).with_context(|| format!("Failed to write cache file: {:?}", path))?;
        Ok(())
    }

    /// Remove every cached entry of a collection
    pub fn clear(&self, collection: Collection) -> Result<()> {
        let dir = self.root.join(collection.cache_dir_name());
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove cache directory: {:?}", dir))?;
        }
        Ok(())
    }
}
