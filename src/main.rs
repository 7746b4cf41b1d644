//! barkeep - A home bar CLI
//!
//! barkeep provides:
//! - A tiered recipe cache (memory, stored collection, online catalog)
//! - Availability matching of recipes against a bar inventory
//! - Unified output format (jsonl/json/md)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cache;
mod cli;
mod config;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
