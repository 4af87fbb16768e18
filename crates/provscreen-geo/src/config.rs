//! Geography configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the country cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Path of the JSON country cache
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            cache_file: default_cache_file(),
        }
    }
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("./caches/fast_cache.json")
}
