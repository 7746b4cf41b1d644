//! Inventory loading
//!
//! Reads the bar inventory from a JSON array. Loading never fails: a missing
//! or unreadable file is an empty bar, and bad entries are skipped.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

use crate::core::model::InventoryItem;

/// Load inventory items from a JSON file
pub fn load_inventory(path: &Path) -> Vec<InventoryItem> {
    if !path.exists() {
        info!(
            "Inventory file {:?} not found, starting with an empty inventory",
            path
        );
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Could not read inventory file {:?}: {}", path, e);
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Could not decode inventory {:?}: {}", path, e);
            return Vec::new();
        }
    };

    let items: Vec<InventoryItem> = entries.into_iter().filter_map(parse_item).collect();
    info!("Loaded {} inventory items from {:?}", items.len(), path);
    items
}

/// Parse one entry, accepting files that tag items with `_type`
fn parse_item(mut entry: Value) -> Option<InventoryItem> {
    if let Some(obj) = entry.as_object_mut() {
        if !obj.contains_key("kind") {
            let kind = obj
                .remove("_type")
                .unwrap_or_else(|| Value::String("generic".to_string()));
            obj.insert("kind".to_string(), kind);
        }
    }

    match serde_json::from_value::<InventoryItem>(entry.clone()) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Skipping inventory entry: {}. Data: {}", e, entry);
            None
        }
    }
}
