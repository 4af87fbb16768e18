//! Provscreen Classifier
//!
//! Classifies an artwork's ownership history for possible Nazi-era looting
//! risk.
//!
//! The classifier provides:
//! - An ordered chain of twelve period rules against the 1932-1946 window
//! - The American-heritage short-circuit for domestic works
//! - Timeline traversal that stops at the first conclusive period
//! - An adapter for timelines produced by an upstream narrative parser
//!
//! # Architecture
//!
//! ```text
//! Record → parser → Timeline → (heritage check) → RuleChain per period → ClassificationResult
//!                                         ↘ GeoResolver ↙
//! ```
//!
//! # Examples
//!
//! ```
//! use provscreen_classifier::{ClassifierConfig, PeriodSpec, PreparsedTimelines, ProvenanceClassifier};
//! use provscreen_domain::{ProvenanceRecord, Verdict};
//! use provscreen_geo::{GeoResolver, MemoryLookup};
//!
//! let narrative = "Acquired by the museum, 1950.";
//! let mut timelines = PreparsedTimelines::new();
//! timelines.insert(narrative, vec![PeriodSpec::from_json(
//!     r#"{"party": "The Museum", "earliest_possible": "1950", "direct_transfer": true, "ongoing": true}"#,
//! ).unwrap()]);
//!
//! let classifier = ProvenanceClassifier::new(
//!     timelines,
//!     GeoResolver::new(MemoryLookup::default()),
//!     ClassifierConfig::default(),
//! );
//!
//! let record = ProvenanceRecord::new("1950.1", "Still Life").with_provenance(narrative);
//! let result = classifier.classify(&record).unwrap();
//! assert_eq!(result.status, Verdict::Problematic);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod dates;
mod error;
mod heritage;
mod parser;
mod rules;

pub use classifier::{
    ProvenanceClassifier, MSG_AMERICAN_HERITAGE, MSG_ARTIST_ONLY, MSG_NO_PROVENANCE, MSG_UNREADABLE,
};
pub use config::ClassifierConfig;
pub use error::ClassifyError;
pub use heritage::{american_heritage, artist_is_american, AMERICAN};
pub use parser::{ParseError, PeriodSpec, PreparsedTimelines};
pub use rules::{
    ChainOutcome, Rule, RuleChain, RuleContext, RuleFn, RuleName, RuleOutcome, STANDARD_RULES,
};
