//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Country cache error
    #[error("Geography error: {0}")]
    Geo(#[from] provscreen_geo::GeoError),

    /// Classifier construction error
    #[error("Classifier error: {0}")]
    Classify(#[from] provscreen_classifier::ClassifyError),

    /// Pre-parsed timeline data could not be loaded
    #[error("Timeline error: {0}")]
    Timeline(#[from] provscreen_classifier::ParseError),

    /// A worker task died before returning its results
    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// At least one record hit an engine fault
    #[error("{0} record(s) could not be classified")]
    Faults(usize),
}
