//! Flows module - Commands combining the cache, catalog and matcher
//!
//! Provides:
//! - menu: List recipes and the ones the inventory can make
//! - populate: Fill or refresh the durable recipe collection
//! - ingredient: Look up an ingredient in the catalog

pub mod ingredient;
pub mod menu;
pub mod populate;
