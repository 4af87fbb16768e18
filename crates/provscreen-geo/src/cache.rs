//! Country lookups backed by a cache file or an in-memory map

use crate::{GeoConfig, GeoError};
use provscreen_domain::traits::CountryLookup;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Normalize a location identifier to a cache key
///
/// Who's On First style URIs (`.../856/331/47/85633147.geojson`) reduce to
/// their trailing numeric id. Anything else is used as given, trimmed.
pub fn location_key(location_id: &str) -> String {
    let trimmed = location_id.trim();
    if !trimmed.contains('/') {
        return trimmed.to_string();
    }

    let last = trimmed.trim_end_matches('/').rsplit('/').next().unwrap_or(trimmed);
    let stem = last.strip_suffix(".geojson").unwrap_or(last);
    if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
        stem.to_string()
    } else {
        trimmed.to_string()
    }
}

/// On-disk shape of the cache
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    countries: BTreeMap<String, String>,
}

/// JSON file-backed country cache
///
/// The whole file is loaded on open; lookups never touch the disk.
#[derive(Debug)]
pub struct CacheLookup {
    path: PathBuf,
    countries: HashMap<String, String>,
}

impl CacheLookup {
    /// Open the cache named by the configuration
    pub fn open(config: &GeoConfig) -> Result<Self, GeoError> {
        Self::open_path(&config.cache_file)
    }

    /// Open a cache file
    ///
    /// A missing file opens as an empty cache. A malformed file is an error.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, GeoError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            info!(path = %path.display(), "country cache not found, starting empty");
            return Ok(Self {
                path,
                countries: HashMap::new(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let file: CacheFile = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), entries = file.countries.len(), "loaded country cache");

        Ok(Self {
            path,
            countries: file.countries.into_iter().collect(),
        })
    }

    /// Record the country for a location
    pub fn insert(&mut self, location_id: &str, country: impl Into<String>) {
        self.countries.insert(location_key(location_id), country.into());
    }

    /// Write the cache back to its file, creating parent directories
    pub fn save(&self) -> Result<(), GeoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = CacheFile {
            countries: self
                .countries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cached locations
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the cache holds no locations
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl CountryLookup for CacheLookup {
    type Error = Infallible;

    fn resolve_country(&self, location_id: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.countries.get(&location_key(location_id)).cloned())
    }
}

/// In-memory country lookup
///
/// Keys are normalized with [`location_key`] on insert and on lookup.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    countries: HashMap<String, String>,
}

impl MemoryLookup {
    /// Build a lookup from `(location id, country)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut lookup = Self::default();
        for (id, country) in pairs {
            lookup.insert(id.as_ref(), country);
        }
        lookup
    }

    /// Record the country for a location
    pub fn insert(&mut self, location_id: &str, country: impl Into<String>) {
        self.countries.insert(location_key(location_id), country.into());
    }
}

impl CountryLookup for MemoryLookup {
    type Error = Infallible;

    fn resolve_country(&self, location_id: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.countries.get(&location_key(location_id)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_location_key_whosonfirst_uri() {
        let uri = "https://whosonfirst.mapzen.com/data/856/331/47/85633147.geojson";
        assert_eq!(location_key(uri), "85633147");
    }

    #[test]
    fn test_location_key_passthrough() {
        assert_eq!(location_key(" 85633147 "), "85633147");
        assert_eq!(location_key("geonames:2988507"), "geonames:2988507");
        assert_eq!(
            location_key("http://example.org/places/paris"),
            "http://example.org/places/paris"
        );
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let cache = CacheLookup::open_path(dir.path().join("absent.json")).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.resolve_country("85633147").unwrap(), None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "not json").unwrap();

        let result = CacheLookup::open_path(&path);
        assert!(matches!(result, Err(GeoError::Json(_))));
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cache.json");

        let mut cache = CacheLookup::open_path(&path).unwrap();
        cache.insert(
            "https://whosonfirst.mapzen.com/data/856/331/47/85633147.geojson",
            "United States",
        );
        cache.save().unwrap();

        let reopened = CacheLookup::open_path(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(
            reopened.resolve_country("85633147").unwrap().as_deref(),
            Some("United States")
        );
    }

    #[test]
    fn test_open_from_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"countries": {"101751119": "France"}}"#).unwrap();

        let config = GeoConfig { cache_file: path };
        let cache = CacheLookup::open(&config).unwrap();
        assert_eq!(cache.resolve_country("101751119").unwrap().as_deref(), Some("France"));
    }

    #[test]
    fn test_memory_lookup_normalizes_keys() {
        let lookup = MemoryLookup::from_pairs([(
            "https://whosonfirst.mapzen.com/data/101/751/119/101751119.geojson",
            "France",
        )]);
        assert_eq!(lookup.resolve_country("101751119").unwrap().as_deref(), Some("France"));
    }
}
