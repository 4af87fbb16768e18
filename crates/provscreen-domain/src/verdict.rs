//! Verdicts and the results built from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating a period, or a whole record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Potential Nazi-era provenance
    Problematic,

    /// No potential Nazi-era provenance
    Safe,

    /// Period is irrelevant to the era
    Skip,

    /// Nothing of interest could be determined
    Inconclusive,
}

impl Verdict {
    /// Short label
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Problematic => "problematic",
            Verdict::Safe => "safe",
            Verdict::Skip => "skip",
            Verdict::Inconclusive => "inconclusive",
        }
    }

    /// Long-form meaning, as shown in reports
    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Problematic => "potential nazi era provenance",
            Verdict::Safe => "No potential nazi era provenance",
            Verdict::Skip => "This period is not relevant for nazi era provenance",
            Verdict::Inconclusive => "This test cannot determine anything of interest",
        }
    }

    /// Whether this verdict ends traversal of a timeline
    pub fn is_terminal(&self) -> bool {
        matches!(self, Verdict::Problematic | Verdict::Safe)
    }

    /// Parse a verdict label
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "problematic" => Some(Verdict::Problematic),
            "safe" => Some(Verdict::Safe),
            "skip" => Some(Verdict::Skip),
            "inconclusive" => Some(Verdict::Inconclusive),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verdict: {}", s))
    }
}

/// The verdict reached for one ownership period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Rendered period text
    pub period_text: String,

    /// Verdict for the period
    pub status: Verdict,

    /// Justification
    pub message: String,

    /// Name of the rule that decided the period, if one did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// Final classification of a record with its per-period trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Final verdict
    pub status: Verdict,

    /// Final justification
    pub message: String,

    /// Evaluated periods in traversal order; empty for short-circuits
    pub periods: Vec<PeriodResult>,
}

impl ClassificationResult {
    /// A verdict reached without walking any period
    pub fn short_circuit(status: Verdict, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            periods: Vec::new(),
        }
    }

    /// Build the final result from a trail: the last entry decides
    ///
    /// Returns the trail back unchanged when it is empty.
    pub fn from_trail(periods: Vec<PeriodResult>) -> Result<Self, Vec<PeriodResult>> {
        match periods.last() {
            Some(last) => Ok(Self {
                status: last.status,
                message: last.message.clone(),
                periods,
            }),
            None => Err(periods),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: Verdict, message: &str) -> PeriodResult {
        PeriodResult {
            period_text: "owner".to_string(),
            status,
            message: message.to_string(),
            rule: None,
        }
    }

    #[test]
    fn test_terminal_verdicts() {
        assert!(Verdict::Problematic.is_terminal());
        assert!(Verdict::Safe.is_terminal());
        assert!(!Verdict::Skip.is_terminal());
        assert!(!Verdict::Inconclusive.is_terminal());
    }

    #[test]
    fn test_verdict_parse() {
        assert_eq!("SAFE".parse::<Verdict>().unwrap(), Verdict::Safe);
        assert!("maybe".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_from_trail_uses_last_entry() {
        let trail = vec![
            entry(Verdict::Skip, "before"),
            entry(Verdict::Problematic, "gap"),
        ];
        let result = ClassificationResult::from_trail(trail).unwrap();
        assert_eq!(result.status, Verdict::Problematic);
        assert_eq!(result.message, "gap");
        assert_eq!(result.periods.len(), 2);
    }

    #[test]
    fn test_from_trail_empty() {
        assert!(ClassificationResult::from_trail(Vec::new()).is_err());
    }

    #[test]
    fn test_serialized_status() {
        let result = ClassificationResult::short_circuit(Verdict::Problematic, "No recorded provenance");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "problematic");
        assert_eq!(json["periods"].as_array().unwrap().len(), 0);
    }
}
