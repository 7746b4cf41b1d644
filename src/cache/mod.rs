//! Cache module - Recipe acquisition and persistence
//!
//! Provides:
//! - store: The durable recipe collection (data/cocktails.json)
//! - acquire: The tiered acquisition cache built on top of it

pub mod acquire;
pub mod store;
