//! Classifier configuration

use crate::ClassifyError;
use provscreen_geo::GeoConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a classifier instance
///
/// Immutable once the classifier is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Disable the American-heritage short-circuit and the "artist" text
    /// match when skipping the first period
    #[serde(default)]
    pub strict: bool,

    /// Country cache settings
    #[serde(default)]
    pub geo: GeoConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ClassifierConfig {
    /// Lenient preset: heuristics enabled
    pub fn lenient() -> Self {
        Self {
            strict: false,
            geo: GeoConfig::default(),
        }
    }

    /// Strict preset: every period goes through the rule chain
    pub fn strict() -> Self {
        Self {
            strict: true,
            geo: GeoConfig::default(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifyError> {
        toml::from_str(toml_str)
            .map_err(|e| ClassifyError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifyError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifyError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
