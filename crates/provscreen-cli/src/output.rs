//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use provscreen_classifier::ClassifyError;
use provscreen_domain::{ClassificationResult, PeriodResult, ProvenanceRecord, Verdict};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RULE_LINE: &str = "-----------";
const SUMMARY_ORDER: [Verdict; 4] = [
    Verdict::Problematic,
    Verdict::Safe,
    Verdict::Inconclusive,
    Verdict::Skip,
];

/// One classified record, paired with its outcome.
#[derive(Debug)]
pub struct ReportEntry {
    /// The record as submitted
    pub record: ProvenanceRecord,

    /// The classification, or the fault that prevented it
    pub outcome: std::result::Result<ClassificationResult, ClassifyError>,
}

impl ReportEntry {
    fn status_label(&self) -> &'static str {
        match &self.outcome {
            Ok(result) => result.status.as_str(),
            Err(_) => "fault",
        }
    }

    fn message(&self) -> String {
        match &self.outcome {
            Ok(result) => result.message.clone(),
            Err(e) => e.to_string(),
        }
    }

    fn trail(&self) -> &[PeriodResult] {
        match &self.outcome {
            Ok(result) => &result.periods,
            Err(e) => e.trail().unwrap_or(&[]),
        }
    }
}

/// What to include per record besides the verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Per-period trail
    pub trail: bool,

    /// Provenance narrative under the header
    pub show_provenance: bool,
}

/// Verdict tallies for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records in the batch
    pub total: usize,

    /// Count per final verdict: problematic, safe, inconclusive, skip
    pub counts: [usize; 4],

    /// Records that hit an engine fault
    pub faults: usize,
}

impl Summary {
    /// Tally a batch of report entries.
    pub fn of(entries: &[ReportEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match &entry.outcome {
                Ok(result) => {
                    if let Some(slot) = SUMMARY_ORDER.iter().position(|v| *v == result.status) {
                        summary.counts[slot] += 1;
                    }
                }
                Err(_) => summary.faults += 1,
            }
        }
        summary
    }

    /// Number of records that ended with `verdict`.
    pub fn count(&self, verdict: Verdict) -> usize {
        SUMMARY_ORDER
            .iter()
            .position(|v| *v == verdict)
            .map_or(0, |slot| self.counts[slot])
    }
}

/// Header line for a record, optionally followed by its narrative.
pub fn record_header(record: &ProvenanceRecord, show_provenance: bool) -> String {
    let mut header = format!("{:<10} - {}\n", record.accession_number, record.title);
    if show_provenance {
        header.push_str(RULE_LINE);
        header.push('\n');
        header.push_str(record.provenance.as_deref().unwrap_or(""));
        header.push('\n');
    }
    header
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a classified batch.
    pub fn format_report(&self, entries: &[ReportEntry], options: ReportOptions) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(entries),
            OutputFormat::Table => Ok(self.format_report_table(entries, options)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(entries)),
        }
    }

    fn format_report_json(&self, entries: &[ReportEntry]) -> Result<String> {
        let mut json_entries = Vec::with_capacity(entries.len());
        for entry in entries {
            let value = match &entry.outcome {
                Ok(result) => serde_json::json!({
                    "accession_number": entry.record.accession_number,
                    "title": entry.record.title,
                    "status": result.status,
                    "description": result.status.description(),
                    "message": result.message,
                    "periods": serde_json::to_value(&result.periods)?,
                }),
                Err(e) => serde_json::json!({
                    "accession_number": entry.record.accession_number,
                    "title": entry.record.title,
                    "error": e.to_string(),
                    "periods": serde_json::to_value(entry.trail())?,
                }),
            };
            json_entries.push(value);
        }

        Ok(serde_json::to_string_pretty(&json_entries)?)
    }

    fn format_report_table(&self, entries: &[ReportEntry], options: ReportOptions) -> String {
        if entries.is_empty() {
            return self.colorize("No records classified.", "yellow");
        }

        let mut out = String::new();
        if options.trail || options.show_provenance {
            for entry in entries {
                out.push_str(&record_header(&entry.record, options.show_provenance));
                if options.trail && !entry.trail().is_empty() {
                    out.push_str(&self.trail_table(entry.trail()));
                    out.push('\n');
                }
                out.push_str(&format!(
                    "=> {}: {}\n\n",
                    self.status(entry.status_label()),
                    entry.message()
                ));
            }
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Accession", "Title", "Verdict", "Message"]);
            for entry in entries {
                builder.push_record([
                    entry.record.accession_number.clone(),
                    entry.record.title.clone(),
                    self.status(entry.status_label()),
                    entry.message(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push_str(&table.to_string());
            out.push('\n');
        }

        out.push_str(&self.summary(&Summary::of(entries)));
        out
    }

    fn trail_table(&self, trail: &[PeriodResult]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Period", "Verdict", "Rule", "Message"]);
        for period in trail {
            builder.push_record([
                period.period_text.clone(),
                self.status(period.status.as_str()),
                period.rule.clone().unwrap_or_else(|| "-".to_string()),
                period.message.clone(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    fn format_report_quiet(&self, entries: &[ReportEntry]) -> String {
        entries
            .iter()
            .map(|e| format!("{}\t{}", e.record.accession_number, e.status_label()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the per-verdict summary line.
    pub fn summary(&self, summary: &Summary) -> String {
        let mut parts: Vec<String> = SUMMARY_ORDER
            .iter()
            .map(|v| format!("{} {}", summary.count(*v), v))
            .collect();
        parts.push(format!("{} fault(s)", summary.faults));

        let line = format!("{} record(s): {}", summary.total, parts.join(", "));
        if summary.faults > 0 {
            self.warning(&line)
        } else {
            self.info(&line)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn status(&self, label: &str) -> String {
        let color = match label {
            "problematic" | "fault" => "red",
            "safe" => "green",
            "inconclusive" => "yellow",
            _ => "cyan",
        };
        self.colorize(&label.to_uppercase(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
