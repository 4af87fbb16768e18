//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::Batch;
use crate::output::{Formatter, ReportEntry, ReportOptions, Summary};
use provscreen_classifier::{ClassifierConfig, ProvenanceClassifier};
use provscreen_domain::traits::{CountryLookup, TimelineParser};
use provscreen_domain::ProvenanceRecord;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Execute the classify command.
///
/// Faulted records are reported alongside the rest; the returned summary
/// lets the caller decide the exit status.
pub async fn execute_classify(
    args: ClassifyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<Summary> {
    let batch = Batch::load(&args.records, args.timelines.as_deref())?;
    let jobs = args.jobs.unwrap_or(config.settings.jobs).max(1);

    let classifier = ProvenanceClassifier::from_config(batch.timelines, effective_config(&args, config))?;
    info!(
        strict = classifier.config().strict,
        cache = %classifier.config().geo.cache_file.display(),
        jobs,
        "classifier ready"
    );

    let entries = classify_batch(Arc::new(classifier), batch.records, jobs).await?;

    for entry in &entries {
        if let Err(e) = &entry.outcome {
            error!(accession = %entry.record.accession_number, "{}", e);
        }
    }

    let options = ReportOptions {
        trail: args.trail,
        show_provenance: args.show_provenance,
    };
    println!("{}", formatter.format_report(&entries, options)?);

    Ok(Summary::of(&entries))
}

/// File settings overridden by command-line flags.
fn effective_config(args: &ClassifyArgs, config: &Config) -> ClassifierConfig {
    let mut classifier = config.classifier_config();
    if args.strict {
        classifier.strict = true;
    }
    if let Some(path) = &args.cache_file {
        classifier.geo.cache_file = path.clone();
    }
    classifier
}

/// Classify records on the blocking pool in up to `jobs` chunks.
///
/// Entries come back in input order regardless of completion order.
pub async fn classify_batch<P, L>(
    classifier: Arc<ProvenanceClassifier<P, L>>,
    records: Vec<ProvenanceRecord>,
    jobs: usize,
) -> Result<Vec<ReportEntry>>
where
    P: TimelineParser + 'static,
    L: CountryLookup + 'static,
{
    let total = records.len();
    let chunk_size = total.div_ceil(jobs.max(1)).max(1);

    let mut set = JoinSet::new();
    let mut pending = records.into_iter().enumerate().peekable();
    while pending.peek().is_some() {
        let chunk: Vec<(usize, ProvenanceRecord)> = pending.by_ref().take(chunk_size).collect();
        let classifier = Arc::clone(&classifier);
        set.spawn_blocking(move || {
            chunk
                .into_iter()
                .map(|(index, record)| {
                    let outcome = classifier.classify(&record);
                    (index, ReportEntry { record, outcome })
                })
                .collect::<Vec<_>>()
        });
    }

    let mut indexed = Vec::with_capacity(total);
    while let Some(joined) = set.join_next().await {
        indexed.extend(joined?);
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use provscreen_domain::{Timeline, Verdict};
    use provscreen_geo::{GeoResolver, MemoryLookup};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(records: PathBuf) -> ClassifyArgs {
        ClassifyArgs {
            records,
            timelines: None,
            strict: false,
            cache_file: None,
            jobs: None,
            trail: false,
            show_provenance: false,
        }
    }

    #[test]
    fn test_flags_override_file_settings() {
        let mut config = Config::default();
        config.settings.cache_file = PathBuf::from("from-file.json");

        let mut cli_args = args(PathBuf::from("records.json"));
        cli_args.strict = true;
        cli_args.cache_file = Some(PathBuf::from("from-flag.json"));

        let effective = effective_config(&cli_args, &config);
        assert!(effective.strict);
        assert_eq!(effective.geo.cache_file, PathBuf::from("from-flag.json"));
    }

    #[test]
    fn test_file_settings_apply_without_flags() {
        let mut config = Config::default();
        config.settings.strict = true;

        let effective = effective_config(&args(PathBuf::from("records.json")), &config);
        assert!(effective.strict);
        assert_eq!(effective.geo.cache_file, config.settings.cache_file);
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let parser = |_: &str| -> std::result::Result<Timeline, String> { Err("unparsed".to_string()) };
        let classifier = Arc::new(ProvenanceClassifier::new(
            parser,
            GeoResolver::new(MemoryLookup::default()),
            ClassifierConfig::default(),
        ));

        let records: Vec<_> = (0..7)
            .map(|i| {
                let record = ProvenanceRecord::new(format!("{}", i), "Untitled");
                if i % 2 == 0 {
                    record.with_provenance("Some narrative.")
                } else {
                    record
                }
            })
            .collect();

        let entries = classify_batch(classifier, records, 3).await.unwrap();
        let ids: Vec<_> = entries
            .iter()
            .map(|e| e.record.accession_number.as_str())
            .collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4", "5", "6"]);
        assert!(entries
            .iter()
            .all(|e| matches!(&e.outcome, Ok(r) if r.status == Verdict::Problematic)));
    }

    #[tokio::test]
    async fn test_execute_classify_end_to_end() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("records.json");
        fs::write(
            &records,
            r#"[
                {
                    "accession_number": "1970.1",
                    "title": "Landscape",
                    "provenance": "Sold to the museum, 1950.",
                    "actors": [{"role": "creator", "name": "Jane Painter", "nationality": "American"}],
                    "timeline": [
                        {"party": "Museum", "location": "Boston", "earliest_possible": 1950, "ongoing": true}
                    ]
                },
                {"accession_number": "1971.2", "title": "Still Life"}
            ]"#,
        )
        .unwrap();

        let mut cli_args = args(records);
        cli_args.cache_file = Some(dir.path().join("cache.json"));
        cli_args.jobs = Some(2);

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let summary = execute_classify(cli_args, &Config::default(), &formatter)
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.count(Verdict::Safe), 1);
        assert_eq!(summary.count(Verdict::Problematic), 1);
        assert_eq!(summary.faults, 0);
    }
}
