//! Classifier error types

use provscreen_domain::PeriodResult;
use provscreen_geo::GeoError;
use thiserror::Error;

/// Errors that can occur during classification
///
/// Missing or unreadable provenance is not an error: both are ordinary
/// problematic results.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Traversal finished without evaluating any period
    #[error("Engine fault on record {accession}: no period was evaluated")]
    EngineFault {
        /// Accession number of the record being classified
        accession: String,
        /// Whatever trail had been built when the fault was detected
        trail: Vec<PeriodResult>,
    },

    /// Geography could not be set up
    #[error("Geography error: {0}")]
    Geo(#[from] GeoError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClassifyError {
    /// Partial trail attached to an engine fault
    pub fn trail(&self) -> Option<&[PeriodResult]> {
        match self {
            ClassifyError::EngineFault { trail, .. } => Some(trail),
            _ => None,
        }
    }
}
