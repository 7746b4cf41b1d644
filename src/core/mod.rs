//! Core module - Domain types and the logic that needs no I/O beyond files
//!
//! This module provides:
//! - Domain model (recipes, requirements, inventory items)
//! - Normalization of raw catalog records
//! - Availability matching
//! - Inventory loading
//! - Data directory layout
//! - Rendering for the supported output formats

pub mod inventory;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod paths;
pub mod render;
