//! Trait definitions for external collaborators
//!
//! Narrative parsing and geographic lookup are not part of the domain.
//! These traits define the boundary; implementations live elsewhere.

use crate::Timeline;

/// Converts a free-text provenance narrative into an ordered timeline
///
/// Implementations must be shareable across threads so one classifier can
/// serve parallel batches.
pub trait TimelineParser: Send + Sync {
    /// Error type for unreadable narratives
    type Error: std::fmt::Display;

    /// Parse a narrative into a timeline
    fn parse(&self, text: &str) -> Result<Timeline, Self::Error>;
}

impl<F, E> TimelineParser for F
where
    F: Fn(&str) -> Result<Timeline, E> + Send + Sync,
    E: std::fmt::Display,
{
    type Error = E;

    fn parse(&self, text: &str) -> Result<Timeline, Self::Error> {
        self(text)
    }
}

/// Maps an opaque location identifier to a country name
///
/// Owns its own caching. Must allow concurrent reads.
pub trait CountryLookup: Send + Sync {
    /// Error type for lookup failures
    type Error: std::fmt::Display;

    /// Country for a location identifier, if known
    fn resolve_country(&self, location_id: &str) -> Result<Option<String>, Self::Error>;
}
