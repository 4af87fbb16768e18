//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use provscreen_classifier::ClassifierConfig;
use provscreen_geo::GeoConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Run without the lenient heuristics
    #[serde(default)]
    pub strict: bool,

    /// Country cache file
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Records classified concurrently
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".provscreen").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location.
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, or defaults when the file is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::path(explicit)?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let path = Self::path(explicit)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, self.to_toml()?)?;
        Ok(path)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Classifier settings derived from this configuration.
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            strict: self.settings.strict,
            geo: GeoConfig {
                cache_file: self.settings.cache_file.clone(),
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            cache_file: default_cache_file(),
            format: OutputFormat::Table,
            color: true,
            jobs: default_jobs(),
        }
    }
}

fn default_cache_file() -> PathBuf {
    GeoConfig::default().cache_file
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_jobs() -> usize {
    1
}
