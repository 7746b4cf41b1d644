//! Menu flows - Recipes and what the bar can make
//!
//! Steps:
//! 1. Resolve the working set through the acquisition cache
//! 2. (makeable) Load the inventory and filter recipes by availability
//! 3. Render the result

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use crate::backends::cocktaildb::CocktailDbClient;
use crate::backends::UnavailableCatalog;
use crate::cache::acquire::{AcquireStats, RecipeCache, CLASSIC_COCKTAILS};
use crate::config::Settings;
use crate::core::inventory::load_inventory;
use crate::core::matcher::find_makeable;
use crate::core::model::Recipe;

/// Names to acquire: the given list, or the classic set when empty
pub fn working_set_names(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        CLASSIC_COCKTAILS.iter().map(|n| n.to_string()).collect()
    } else {
        names.to_vec()
    }
}

/// Acquire the working set for this run
pub fn acquire_recipes(settings: &Settings, names: &[String]) -> (Vec<Recipe>, AcquireStats) {
    let mut cache = settings.recipe_cache();
    let recipes = acquire_with(&mut cache, settings.catalog(), names);
    (recipes, cache.last_stats())
}

/// Resolve through the cache; a catalog that failed to build only matters
/// once the stored collection turns out to be empty
fn acquire_with(
    cache: &mut RecipeCache,
    catalog: Result<CocktailDbClient>,
    names: &[String],
) -> Vec<Recipe> {
    let names = working_set_names(names);
    match catalog {
        Ok(catalog) => cache.get_all_recipes(&catalog, &names),
        Err(e) => {
            warn!("Catalog unavailable, using stored recipes only: {:#}", e);
            cache.get_all_recipes(&UnavailableCatalog::new(format!("{:#}", e)), &names)
        }
    }
}

/// Run the recipes command
pub fn run_recipes(settings: &Settings, names: &[String]) -> Result<()> {
    let (recipes, _) = acquire_recipes(settings, names);

    println!("{}", settings.renderer().render(&recipes));
    Ok(())
}

/// Run the makeable command
pub fn run_makeable(settings: &Settings, inventory_path: &Path, names: &[String]) -> Result<()> {
    let inventory = load_inventory(inventory_path);
    let (recipes, _) = acquire_recipes(settings, names);
    let makeable = find_makeable(&inventory, &recipes);

    info!(
        "{} of {} recipes can be made from {} inventory items",
        makeable.len(),
        recipes.len(),
        inventory.len()
    );

    println!("{}", settings.renderer().render(&makeable));
    Ok(())
}
