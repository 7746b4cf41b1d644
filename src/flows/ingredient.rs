//! Ingredient lookup flow

use anyhow::Result;
use tracing::info;

use crate::backends::record::IngredientRecord;
use crate::backends::Lookup;
use crate::config::Settings;

/// Run the ingredient command
pub fn run_ingredient(settings: &Settings, name: &str) -> Result<()> {
    let catalog = settings.catalog()?;

    let found: Vec<IngredientRecord> = match catalog.search_ingredient(name)? {
        Lookup::Found { record, .. } => vec![record],
        Lookup::NotFound => {
            info!("Ingredient '{}' not found in catalog", name);
            Vec::new()
        }
    };

    println!("{}", settings.renderer().render(&found));
    Ok(())
}
