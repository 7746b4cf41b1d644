//! Recipe acquisition cache
//!
//! Produces the working set of recipes for a list of names. Policy:
//!
//! 1. If the durable collection holds at least one valid recipe, it is the
//!    answer. The catalog is not contacted and there is no per-name
//!    invalidation; clear the store to force a refresh.
//! 2. Otherwise each name is resolved through the in-memory map, then the
//!    catalog (which keeps its own raw per-name cache). Found records are
//!    normalized and accumulated; misses and failures are skipped.
//! 3. If anything new was acquired, the accumulated set replaces the durable
//!    collection in one write at the end of the batch.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::backends::{Catalog, CatalogError, FetchSource, Lookup};
use crate::cache::store::RecipeStore;
use crate::core::model::Recipe;
use crate::core::normalize::normalize;

/// Default pause after each network fetch
pub const DEFAULT_REQUEST_PAUSE: Duration = Duration::from_millis(200);

/// Classic cocktails fetched when no names are given
pub const CLASSIC_COCKTAILS: &[&str] = &[
    "Margarita",
    "Martini",
    "Old Fashioned",
    "Mojito",
    "Daiquiri",
    "Manhattan",
    "Gin and Tonic",
    "Negroni",
    "Whiskey Sour",
    "Cosmopolitan",
    "Moscow Mule",
    "Pina Colada",
];

/// In-memory tier entry
#[derive(Debug, Clone)]
enum MemoryEntry {
    Recipe(Recipe),
    /// The catalog said this name does not exist
    NotFound,
}

/// Counters for one acquisition call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcquireStats {
    pub from_store: usize,
    pub memory_hits: usize,
    pub fetched: usize,
    pub not_found: usize,
    pub malformed: usize,
    pub failed: usize,
    pub persisted: bool,
}

/// Three-tier recipe cache: memory, durable collection, catalog.
///
/// Construct one per run; nothing is shared between instances.
pub struct RecipeCache {
    store: RecipeStore,
    memory: HashMap<String, MemoryEntry>,
    request_pause: Duration,
    last_stats: AcquireStats,
}

impl RecipeCache {
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store,
            memory: HashMap::new(),
            request_pause: DEFAULT_REQUEST_PAUSE,
            last_stats: AcquireStats::default(),
        }
    }

    /// Set the pause applied after each network fetch
    pub fn with_request_pause(mut self, pause: Duration) -> Self {
        self.request_pause = pause;
        self
    }

    /// Counters from the most recent [`get_all_recipes`](Self::get_all_recipes) call
    pub fn last_stats(&self) -> AcquireStats {
        self.last_stats
    }

    /// Resolve the working set for `names`, in input order.
    ///
    /// A name repeated in `names` is fetched once but appears once per
    /// occurrence in the result and in the stored collection.
    pub fn get_all_recipes<S: AsRef<str>>(
        &mut self,
        catalog: &dyn Catalog,
        names: &[S],
    ) -> Vec<Recipe> {
        let mut stats = AcquireStats::default();

        let stored = self.store.load();
        if !stored.is_empty() {
            info!(
                "Using {} recipes from {:?}",
                stored.len(),
                self.store.path()
            );
            for recipe in &stored {
                self.memory
                    .insert(recipe.name.clone(), MemoryEntry::Recipe(recipe.clone()));
            }
            stats.from_store = stored.len();
            self.last_stats = stats;
            return stored;
        }

        let mut recipes = Vec::new();
        for name in names {
            let name = name.as_ref();

            match self.memory.get(name) {
                Some(MemoryEntry::Recipe(recipe)) => {
                    debug!("'{}' served from memory", name);
                    stats.memory_hits += 1;
                    recipes.push(recipe.clone());
                    continue;
                }
                Some(MemoryEntry::NotFound) => {
                    debug!("'{}' already known to be missing", name);
                    stats.memory_hits += 1;
                    continue;
                }
                None => {}
            }

            match catalog.fetch_by_name(name) {
                Ok(Lookup::Found { record, source }) => {
                    match normalize(&record) {
                        Some(recipe) => {
                            stats.fetched += 1;
                            self.memory
                                .insert(name.to_string(), MemoryEntry::Recipe(recipe.clone()));
                            recipes.push(recipe);
                        }
                        None => {
                            warn!("Discarding malformed catalog record for '{}'", name);
                            stats.malformed += 1;
                        }
                    }
                    if source == FetchSource::Network {
                        self.pause();
                    }
                }
                Ok(Lookup::NotFound) => {
                    info!("Cocktail '{}' not found in catalog", name);
                    stats.not_found += 1;
                    self.memory.insert(name.to_string(), MemoryEntry::NotFound);
                }
                Err(CatalogError::Offline) => {
                    debug!("'{}' not cached and catalog is offline", name);
                    stats.failed += 1;
                }
                Err(e) => {
                    warn!("Could not fetch '{}': {}", name, e);
                    stats.failed += 1;
                }
            }
        }

        if stats.fetched > 0 {
            match self.store.save(&recipes) {
                Ok(()) => stats.persisted = true,
                Err(e) => error!("Could not persist recipe collection: {}", e),
            }
        }

        info!(
            "Acquired {} recipes ({} fetched, {} not found, {} malformed, {} failed)",
            recipes.len(),
            stats.fetched,
            stats.not_found,
            stats.malformed,
            stats.failed
        );
        self.last_stats = stats;
        recipes
    }

    fn pause(&self) {
        if !self.request_pause.is_zero() {
            thread::sleep(self.request_pause);
        }
    }
}
