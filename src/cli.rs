//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::backends::cocktaildb::DEFAULT_API_BASE;
use crate::config::Settings;
use crate::core::paths::DEFAULT_DATA_DIR;
use crate::core::render::{OutputFormat, RenderConfig};

/// barkeep - cache cocktail recipes and find out what your bar can make.
#[derive(Parser, Debug)]
#[command(name = "barkeep")]
#[command(
    author,
    version,
    about,
    long_about = r#"barkeep keeps a local collection of cocktail recipes fetched from an online
catalog and matches it against your bar inventory.

The first run fetches every requested cocktail and saves the normalized
recipes to DATA_DIR/cocktails.json. Later runs read that file and never touch
the network. Delete it (or run `barkeep populate --refresh`) to start over.

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown

Examples:
    barkeep recipes
    barkeep makeable --inventory data/inventory.json --format md
    barkeep populate --refresh --names "Negroni,Gimlet"
    barkeep ingredient Campari
"#
)]
pub struct Cli {
    /// Directory holding the recipe collection and catalog cache.
    #[arg(
        long,
        global = true,
        env = "BARKEEP_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        value_name = "DIR",
        long_help = "Directory holding cocktails.json and the api_cache/ directory of raw\n\
catalog responses. Created on first write."
    )]
    pub data_dir: PathBuf,

    /// Recipe collection file (defaults to DATA_DIR/cocktails.json).
    #[arg(long, global = true, env = "BARKEEP_STORE", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Catalog API base URL.
    #[arg(
        long,
        global = true,
        env = "BARKEEP_API_BASE",
        default_value = DEFAULT_API_BASE,
        value_name = "URL"
    )]
    pub api_base: String,

    /// Catalog request timeout in seconds.
    #[arg(long, global = true, default_value = "10", value_name = "SECS")]
    pub timeout_secs: u64,

    /// Pause after each catalog request, in milliseconds.
    #[arg(
        long,
        global = true,
        default_value = "200",
        value_name = "MS",
        long_help = "Pause after each successful network request to keep the request rate\n\
polite. Cache hits are never delayed."
    )]
    pub pause_ms: u64,

    /// Never contact the catalog; use cached data only.
    #[arg(long, global = true, env = "BARKEEP_OFFLINE")]
    pub offline: bool,

    /// Output format (jsonl/json/md).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the recipe working set.
    #[command(
        long_about = "Resolve the recipe working set (stored collection, then catalog) and\n\
print every recipe.\n\n\
Examples:\n\
  barkeep recipes\n\
  barkeep recipes --names \"Negroni,Gimlet\" --format md\n"
    )]
    Recipes {
        /// Cocktail names to acquire (comma-separated; defaults to the classics).
        #[arg(long, value_name = "NAMES", value_delimiter = ',')]
        names: Vec<String>,
    },

    /// List the recipes the inventory can make.
    #[command(
        long_about = "Load the inventory, resolve the recipe working set and print only the\n\
recipes whose every ingredient is in stock. Categories match case-insensitively;\n\
brand-specific ingredients need that brand (or a self-branded item).\n\n\
Example:\n\
  barkeep makeable --inventory data/inventory.json\n"
    )]
    Makeable {
        /// Inventory JSON file.
        #[arg(
            long,
            env = "BARKEEP_INVENTORY",
            default_value = "data/inventory.json",
            value_name = "FILE"
        )]
        inventory: PathBuf,

        /// Cocktail names to acquire (comma-separated; defaults to the classics).
        #[arg(long, value_name = "NAMES", value_delimiter = ',')]
        names: Vec<String>,
    },

    /// Fill or refresh the stored recipe collection.
    #[command(
        long_about = "Acquire the working set and rewrite the stored collection with it.\n\n\
With --refresh the stored collection is deleted first, so every name is\n\
resolved again (raw catalog responses on disk are still reused). --purge\n\
also deletes those raw responses.\n\n\
Example:\n\
  barkeep populate --refresh\n"
    )]
    Populate {
        /// Cocktail names to acquire (comma-separated; defaults to the classics).
        #[arg(long, value_name = "NAMES", value_delimiter = ',')]
        names: Vec<String>,

        /// Delete the stored collection before acquiring.
        #[arg(long)]
        refresh: bool,

        /// Also delete cached raw catalog responses (implies --refresh).
        #[arg(long)]
        purge: bool,
    },

    /// Look up an ingredient in the catalog.
    Ingredient {
        /// Ingredient name.
        #[arg(value_name = "NAME")]
        name: String,
    },
}

impl Cli {
    /// Settings for this run
    pub fn settings(&self) -> Settings {
        let format: OutputFormat = self.format.parse().unwrap_or_default();

        Settings {
            data_dir: self.data_dir.clone(),
            store_path: self.store.clone(),
            api_base: self.api_base.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            request_pause: Duration::from_millis(self.pause_ms),
            offline: self.offline,
            render: RenderConfig::with_pretty(format, self.pretty),
        }
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings();

    match cli.command {
        Commands::Recipes { names } => crate::flows::menu::run_recipes(&settings, &names),

        Commands::Makeable { inventory, names } => {
            crate::flows::menu::run_makeable(&settings, &inventory, &names)
        }

        Commands::Populate {
            names,
            refresh,
            purge,
        } => crate::flows::populate::run_populate(&settings, &names, refresh, purge),

        Commands::Ingredient { name } => crate::flows::ingredient::run_ingredient(&settings, &name),
    }
}
