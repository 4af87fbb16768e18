//! Timelines produced ahead of time by an upstream narrative parser
//!
//! Narrative parsing happens outside this crate. Its output arrives as
//! structured period lists, keyed by the narrative they were parsed from;
//! [`PreparsedTimelines`] serves them back through the
//! [`TimelineParser`] interface.

use chrono::NaiveDate;
use provscreen_domain::traits::TimelineParser;
use provscreen_domain::{HistoricDate, Location, OwnershipPeriod, Timeline, Transfer};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;

const PREVIEW_CHARS: usize = 60;

/// Errors produced when a narrative cannot be turned into a timeline
#[derive(Error, Debug)]
pub enum ParseError {
    /// No structured timeline exists for the narrative
    #[error("Unrecognised provenance text: {0}")]
    Unrecognised(String),

    /// A period violates the timeline's invariants
    #[error("Invalid period {index}: {reason}")]
    InvalidPeriod {
        /// Position of the period
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Structured timeline data is not valid JSON
    #[error("Timeline JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One ownership period as emitted by the upstream parser
///
/// Dates accept `"YYYY-MM-DD"`, a bare year (`1932` or `"1932"`, meaning
/// January 1st), or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpec {
    /// Owning party
    pub party: String,

    /// Location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Earliest possible start
    #[serde(default, deserialize_with = "flexible_date")]
    pub earliest_possible: Option<HistoricDate>,

    /// Latest possible end
    #[serde(default, deserialize_with = "flexible_date")]
    pub latest_possible: Option<HistoricDate>,

    /// Earliest certain date
    #[serde(default, deserialize_with = "flexible_date")]
    pub earliest_definite: Option<HistoricDate>,

    /// Latest certain date
    #[serde(default, deserialize_with = "flexible_date")]
    pub latest_definite: Option<HistoricDate>,

    /// Direct transfer flag; absent means unknown
    #[serde(default)]
    pub direct_transfer: Option<bool>,

    /// Present-day holder
    #[serde(default)]
    pub ongoing: bool,

    /// Source sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PeriodSpec {
    /// Parse a single period from JSON
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    fn into_period(self) -> OwnershipPeriod {
        OwnershipPeriod {
            party: self.party,
            location: self.location.map(Location::new),
            earliest_possible: self.earliest_possible,
            latest_possible: self.latest_possible,
            earliest_definite: self.earliest_definite,
            latest_definite: self.latest_definite,
            transfer: Transfer::from_flag(self.direct_transfer),
            ongoing: self.ongoing,
            text: self.text,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateInput {
    Year(i32),
    Text(String),
}

fn parse_date(s: &str) -> Option<HistoricDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        s.parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    })
}

fn flexible_date<'de, D>(deserializer: D) -> Result<Option<HistoricDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DateInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DateInput::Year(year)) => NaiveDate::from_ymd_opt(year, 1, 1)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("year out of range: {}", year))),
        Some(DateInput::Text(text)) => parse_date(&text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {}", text))),
    }
}

/// Build a timeline from parser output, checking its invariants
pub(crate) fn build_timeline(specs: Vec<PeriodSpec>) -> Result<Timeline, ParseError> {
    let last = specs.len().saturating_sub(1);
    let mut periods = Vec::with_capacity(specs.len());

    for (index, spec) in specs.into_iter().enumerate() {
        let period = spec.into_period();
        if !period.bounds_consistent() {
            return Err(ParseError::InvalidPeriod {
                index,
                reason: "definite dates fall outside the possible range".to_string(),
            });
        }
        if period.ongoing && index != last {
            return Err(ParseError::InvalidPeriod {
                index,
                reason: "only the final period can be ongoing".to_string(),
            });
        }
        periods.push(period);
    }

    Ok(Timeline::new(periods))
}

/// Parser backed by already-structured timelines
///
/// Narratives are matched after trimming surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct PreparsedTimelines {
    timelines: HashMap<String, Vec<PeriodSpec>>,
}

impl PreparsedTimelines {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object mapping narratives to period arrays
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let raw: HashMap<String, Vec<PeriodSpec>> = serde_json::from_str(json)?;
        let mut timelines = Self::new();
        for (narrative, specs) in raw {
            timelines.insert(narrative, specs);
        }
        Ok(timelines)
    }

    /// Register the timeline for a narrative, replacing any earlier one
    pub fn insert(&mut self, narrative: impl AsRef<str>, specs: Vec<PeriodSpec>) {
        self.timelines.insert(narrative.as_ref().trim().to_string(), specs);
    }

    /// Merge another set into this one; `other` wins on shared narratives
    pub fn extend(&mut self, other: PreparsedTimelines) {
        self.timelines.extend(other.timelines);
    }

    /// Number of known narratives
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    /// Whether no narrative is known
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}

impl TimelineParser for PreparsedTimelines {
    type Error = ParseError;

    fn parse(&self, text: &str) -> Result<Timeline, Self::Error> {
        let specs = self
            .timelines
            .get(text.trim())
            .ok_or_else(|| ParseError::Unrecognised(text.trim().chars().take(PREVIEW_CHARS).collect()))?;
        build_timeline(specs.clone())
    }
}
