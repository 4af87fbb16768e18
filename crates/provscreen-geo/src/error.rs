//! Geography error types

use thiserror::Error;

/// Errors that can occur opening or persisting a country cache
#[derive(Error, Debug)]
pub enum GeoError {
    /// Cache file could not be read or written
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file is not valid JSON of the expected shape
    #[error("Cache format error: {0}")]
    Json(#[from] serde_json::Error),
}
