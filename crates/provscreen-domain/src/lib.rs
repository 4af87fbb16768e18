//! Provscreen Domain Layer
//!
//! Core data model for screening artwork provenance against the Nazi era.
//! Everything the classifier reasons about lives here: records as they are
//! exported from a collection, the parsed ownership timeline, and the
//! verdicts produced for each period.
//!
//! ## Key Concepts
//!
//! - **Record**: one artwork with its free-text provenance, places and actors
//! - **Ownership period**: one link in the chain of custody, bounded by
//!   possible and definite date ranges
//! - **Timeline**: the ordered chain of periods, owned as an arena and
//!   navigated by index
//! - **Verdict**: problematic, safe, skip or inconclusive
//!
//! ## Architecture
//!
//! Pure data and value logic only. Parsing narratives and resolving
//! geography are external collaborators, described by the traits in
//! [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod era;
pub mod period;
pub mod record;
pub mod timeline;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use era::{is_european, HistoricDate, ERA_END, ERA_START, EUROPEAN_COUNTRIES};
pub use period::{Location, OwnershipPeriod, Transfer};
pub use record::{Actor, Place, ProvenanceRecord, CREATOR_ROLE};
pub use timeline::{PeriodId, PeriodRef, Timeline};
pub use verdict::{ClassificationResult, PeriodResult, Verdict};
