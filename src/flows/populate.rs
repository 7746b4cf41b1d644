//! Populate flow - Fill or refresh the durable recipe collection
//!
//! Steps:
//! 1. (refresh) Delete the stored collection, and with purge the raw cache
//! 2. Acquire the working set
//! 3. Re-save whatever was acquired so the file matches the current format

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::backends::raw_cache::RawCache;
use crate::backends::record::Collection;
use crate::config::Settings;
use crate::core::paths::api_cache_dir;
use crate::flows::menu::{acquire_recipes, working_set_names};

/// Run the populate command
pub fn run_populate(settings: &Settings, names: &[String], refresh: bool, purge: bool) -> Result<()> {
    let store = settings.store();

    if refresh || purge {
        info!("Clearing recipe collection {:?}", store.path());
        store.clear().context("Failed to clear recipe collection")?;
    }
    if purge {
        RawCache::new(api_cache_dir(&settings.data_dir))
            .clear(Collection::Drinks)
            .context("Failed to clear raw catalog cache")?;
    }

    let (recipes, stats) = acquire_recipes(settings, names);
    if stats.from_store > 0 {
        info!(
            "Collection already holds {} recipes; use --refresh to re-acquire",
            stats.from_store
        );
    } else {
        info!(
            "Resolved {} names: {} fetched, {} repeated, {} not found, {} malformed, {} failed",
            working_set_names(names).len(),
            stats.fetched,
            stats.memory_hits,
            stats.not_found,
            stats.malformed,
            stats.failed
        );
    }

    if recipes.is_empty() {
        warn!(
            "No recipes were found or fetched; {:?} was not written",
            store.path()
        );
    } else if stats.persisted {
        debug!("Collection already written during acquisition");
    } else if let Err(e) = store.save(&recipes) {
        // Acquired recipes are still printed below
        error!("Failed to save recipes to {:?}: {}", store.path(), e);
    }

    println!("{}", settings.renderer().render(&recipes));
    Ok(())
}
