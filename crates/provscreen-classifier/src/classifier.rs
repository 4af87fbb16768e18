//! Record-level classification: validation, parsing, heuristics, traversal

use crate::heritage::{american_heritage, artist_is_american};
use crate::rules::{RuleChain, RuleContext};
use crate::{ClassifierConfig, ClassifyError};
use provscreen_domain::traits::{CountryLookup, TimelineParser};
use provscreen_domain::{
    ClassificationResult, PeriodRef, PeriodResult, ProvenanceRecord, Timeline, Verdict,
};
use provscreen_geo::{CacheLookup, GeoResolver};
use tracing::{debug, warn};

/// Message for records without any provenance text
pub const MSG_NO_PROVENANCE: &str = "No recorded provenance";

/// Message for narratives the parser rejected
pub const MSG_UNREADABLE: &str = "The provenance text was unreadable.";

/// Message for the American-heritage short-circuit
pub const MSG_AMERICAN_HERITAGE: &str =
    "Artist is American, and none of the periods before 1946 mention Europe.";

/// Message when nothing remains after skipping the artist's own period
pub const MSG_ARTIST_ONLY: &str = "The only recorded provenance is the artist.";

/// Classifies provenance records
///
/// Each call to [`classify`](Self::classify) is a pure function of the record
/// and the resolver's answers; the classifier holds no per-record state and
/// can be shared across threads.
///
/// # Examples
///
/// ```
/// use provscreen_classifier::{ClassifierConfig, ProvenanceClassifier, MSG_NO_PROVENANCE};
/// use provscreen_domain::{ProvenanceRecord, Timeline, Verdict};
/// use provscreen_geo::{GeoResolver, MemoryLookup};
///
/// let parser = |_: &str| -> Result<Timeline, String> { Err("no parser".to_string()) };
/// let classifier = ProvenanceClassifier::new(
///     parser,
///     GeoResolver::new(MemoryLookup::default()),
///     ClassifierConfig::default(),
/// );
///
/// let result = classifier.classify(&ProvenanceRecord::new("1", "Untitled")).unwrap();
/// assert_eq!(result.status, Verdict::Problematic);
/// assert_eq!(result.message, MSG_NO_PROVENANCE);
/// ```
pub struct ProvenanceClassifier<P, L> {
    parser: P,
    geo: GeoResolver<L>,
    rules: RuleChain,
    config: ClassifierConfig,
}

impl<P: TimelineParser> ProvenanceClassifier<P, CacheLookup> {
    /// Create a classifier whose geography comes from the configured cache file
    pub fn from_config(parser: P, config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let lookup = CacheLookup::open(&config.geo)?;
        Ok(Self::new(parser, GeoResolver::new(lookup), config))
    }
}

impl<P: TimelineParser, L: CountryLookup> ProvenanceClassifier<P, L> {
    /// Create a classifier with the standard rule chain
    pub fn new(parser: P, geo: GeoResolver<L>, config: ClassifierConfig) -> Self {
        Self {
            parser,
            geo,
            rules: RuleChain::standard(),
            config,
        }
    }

    /// Replace the rule chain
    pub fn with_rules(mut self, rules: RuleChain) -> Self {
        self.rules = rules;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one record
    ///
    /// Missing and unreadable provenance yield problematic results. An error
    /// is only returned for an internal fault, with the partial trail
    /// attached.
    pub fn classify(&self, record: &ProvenanceRecord) -> Result<ClassificationResult, ClassifyError> {
        let Some(text) = record.provenance.as_deref() else {
            debug!(accession = %record.accession_number, "no provenance text");
            return Ok(ClassificationResult::short_circuit(
                Verdict::Problematic,
                MSG_NO_PROVENANCE,
            ));
        };

        let timeline = match self.parser.parse(text) {
            Ok(timeline) => timeline,
            Err(e) => {
                warn!(accession = %record.accession_number, "provenance text unreadable: {}", e);
                return Ok(ClassificationResult::short_circuit(
                    Verdict::Problematic,
                    MSG_UNREADABLE,
                ));
            }
        };

        let ctx = RuleContext::new(&record.places, &self.geo);

        if !self.config.strict && artist_is_american(record) && american_heritage(&timeline, &ctx) {
            debug!(accession = %record.accession_number, "american heritage short-circuit");
            return Ok(ClassificationResult::short_circuit(
                Verdict::Safe,
                MSG_AMERICAN_HERITAGE,
            ));
        }

        let Some(start) = self.entry_period(&timeline, record) else {
            return Ok(ClassificationResult::short_circuit(Verdict::Safe, MSG_ARTIST_ONLY));
        };

        let trail = self.traverse(start, &ctx);
        ClassificationResult::from_trail(trail).map_err(|trail| ClassifyError::EngineFault {
            accession: record.accession_number.clone(),
            trail,
        })
    }

    /// First period to evaluate, after skipping the artist's own ownership
    ///
    /// At most one period is skipped.
    fn entry_period<'t>(&self, timeline: &'t Timeline, record: &ProvenanceRecord) -> Option<PeriodRef<'t>> {
        let first = timeline.earliest()?;

        let named_creator = record.creators().any(|c| c.name == first.party);
        let mentions_artist =
            !self.config.strict && first.to_string().to_lowercase().contains("artist");

        if named_creator || mentions_artist {
            debug!(party = %first.party, "skipping artist's own period");
            first.next()
        } else {
            Some(first)
        }
    }

    /// Walk periods from `start` until one is conclusive or the chain ends
    fn traverse(&self, start: PeriodRef<'_>, ctx: &RuleContext<'_>) -> Vec<PeriodResult> {
        let mut trail = Vec::new();
        let mut current = Some(start);

        while let Some(period) = current {
            let decided = self.rules.evaluate(period, ctx);
            let status = decided.outcome.verdict;
            debug!(
                party = %period.party,
                verdict = %status,
                rule = decided.rule.map(|r| r.as_str()).unwrap_or("-"),
                "evaluated period"
            );

            trail.push(PeriodResult {
                period_text: period.to_string(),
                status,
                message: decided.outcome.message,
                rule: decided.rule.map(|r| r.as_str().to_string()),
            });

            current = if status.is_terminal() { None } else { period.next() };
        }

        trail
    }
}
