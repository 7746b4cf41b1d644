//! Data directory layout
//!
//! Everything barkeep persists lives under one data directory:
//!
//! ```text
//! data/
//!   cocktails.json           # durable recipe collection
//!   api_cache/
//!     cocktails/<name>.json  # raw catalog responses
//!     ingredients/<name>.json
//! ```

use std::path::{Path, PathBuf};

/// Default data directory (relative to the working directory)
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the durable recipe collection
pub const RECIPES_FILE: &str = "cocktails.json";

/// Directory name of the raw catalog cache
pub const API_CACHE_DIR: &str = "api_cache";

/// Durable recipe collection under a data directory
pub fn recipes_file(data_dir: &Path) -> PathBuf {
    data_dir.join(RECIPES_FILE)
}

/// Raw catalog cache root under a data directory
pub fn api_cache_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(API_CACHE_DIR)
}

/// Cache file name for a queried name: lowercased, spaces to underscores.
/// Path separators are replaced too so a name can never escape the cache.
pub fn cache_file_name(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}.json", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipes_file() {
        let data = Path::new("/bar/data");
        assert_eq!(recipes_file(data), PathBuf::from("/bar/data/cocktails.json"));
    }

    #[test]
    fn test_api_cache_dir() {
        let data = Path::new("data");
        assert_eq!(api_cache_dir(data), PathBuf::from("data/api_cache"));
    }

    #[test]
    fn test_cache_file_name() {
        assert_eq!(cache_file_name("Margarita"), "margarita.json");
        assert_eq!(cache_file_name("Gin and Tonic"), "gin_and_tonic.json");
        assert_eq!(cache_file_name("Piña Colada"), "piña_colada.json");
    }

    #[test]
    fn test_cache_file_name_strips_separators() {
        assert_eq!(cache_file_name("../etc/passwd"), ".._etc_passwd.json");
        assert_eq!(cache_file_name("a\\b"), "a_b.json");
    }
}
