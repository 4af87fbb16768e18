//! Loading record exports and their parsed timelines.

use crate::error::{CliError, Result};
use provscreen_classifier::{PeriodSpec, PreparsedTimelines};
use provscreen_domain::ProvenanceRecord;
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A record as it appears in a batch file.
///
/// Alongside the record fields, an entry may carry the periods an upstream
/// parser produced for its narrative.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    /// The record itself
    #[serde(flatten)]
    pub record: ProvenanceRecord,

    /// Parsed periods for the record's narrative
    #[serde(default)]
    pub timeline: Option<Vec<PeriodSpec>>,
}

/// A loaded batch: records in input order plus every known timeline.
#[derive(Debug)]
pub struct Batch {
    /// Records in input order
    pub records: Vec<ProvenanceRecord>,

    /// Timelines keyed by narrative
    pub timelines: PreparsedTimelines,
}

impl Batch {
    /// Build a batch from a JSON array of records.
    ///
    /// Records sharing a narrative must carry identical inline timelines.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<InputRecord> = serde_json::from_str(json)?;
        let mut inline: HashMap<String, (String, Vec<PeriodSpec>)> = HashMap::new();
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            match (&entry.record.provenance, entry.timeline) {
                (Some(narrative), Some(specs)) => {
                    match inline.entry(narrative.trim().to_string()) {
                        Entry::Occupied(existing) => {
                            let (first, known) = existing.get();
                            if *known != specs {
                                return Err(CliError::InvalidInput(format!(
                                    "records {} and {} share a provenance text but carry different timelines",
                                    first, entry.record.accession_number
                                )));
                            }
                        }
                        Entry::Vacant(slot) => {
                            slot.insert((entry.record.accession_number.clone(), specs));
                        }
                    }
                }
                (None, Some(_)) => {
                    debug!(
                        accession = %entry.record.accession_number,
                        "timeline ignored for record without provenance"
                    );
                }
                _ => {}
            }
            records.push(entry.record);
        }

        let mut timelines = PreparsedTimelines::new();
        for (narrative, (_, specs)) in inline {
            timelines.insert(narrative, specs);
        }

        Ok(Self { records, timelines })
    }

    /// Load a batch file, merging an optional narrative-to-periods file.
    ///
    /// Inline timelines take precedence over the file for the same narrative.
    pub fn load(records: &Path, extra_timelines: Option<&Path>) -> Result<Self> {
        let mut batch = Self::from_json(&fs::read_to_string(records)?)?;

        if let Some(path) = extra_timelines {
            let mut merged = PreparsedTimelines::from_json(&fs::read_to_string(path)?)?;
            info!(count = merged.len(), path = %path.display(), "loaded timelines");
            // A record's own inline timeline wins over the shared file
            merged.extend(batch.timelines);
            batch.timelines = merged;
        }

        if batch.records.is_empty() {
            return Err(CliError::InvalidInput("No records provided".to_string()));
        }

        info!(
            records = batch.records.len(),
            timelines = batch.timelines.len(),
            "batch loaded"
        );
        Ok(batch)
    }
}
