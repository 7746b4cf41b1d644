//! Durable recipe collection
//!
//! The whole working set of normalized recipes, stored as one JSON array and
//! always rewritten wholesale. Loading is forgiving: a missing, empty or
//! corrupt file reads as an empty collection.

use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::model::Recipe;

/// Failure to persist the collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed recipe collection
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every valid recipe. Never fails; problems are logged.
    pub fn load(&self) -> Vec<Recipe> {
        if !self.path.exists() {
            debug!("Recipe collection {:?} does not exist yet", self.path);
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read recipe collection {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Recipe collection {:?} is corrupt, treating as empty: {}",
                    self.path, e
                );
                return Vec::new();
            }
        };

        let recipes: Vec<Recipe> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| parse_entry(index, entry))
            .collect();

        debug!("Loaded {} recipes from {:?}", recipes.len(), self.path);
        recipes
    }

    /// Replace the stored collection.
    ///
    /// Written to a sibling temp file first and renamed into place, so readers
    /// only ever see the old or the new collection.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(recipes)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut file = File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        };

        if let Err(source) = write() {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(source));
        }

        info!("Saved {} recipes to {:?}", recipes.len(), self.path);
        Ok(())
    }

    /// Delete the stored collection, forcing the next load to come back empty
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| self.io_error(source))?;
        }
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Deserialize and validate one stored recipe
fn parse_entry(index: usize, entry: Value) -> Option<Recipe> {
    match serde_json::from_value::<Recipe>(entry) {
        Ok(recipe) if recipe.is_valid() => Some(recipe),
        Ok(recipe) => {
            warn!(
                "Skipping stored recipe #{} '{}': missing name or ingredients",
                index, recipe.name
            );
            None
        }
        Err(e) => {
            warn!("Skipping malformed stored recipe #{}: {}", index, e);
            None
        }
    }
}
