//! Ownership periods - the links of a provenance chain

use crate::era::HistoricDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a period was entered from the one before it
///
/// `Unknown` is a real state, not a missing value: the parser could not tell
/// whether the handover was direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transfer {
    /// Confirmed, unbroken handover from the previous owner
    Direct,

    /// Custody between the previous owner and this one is unaccounted for
    Gap,

    /// Transfer mode not established
    #[default]
    Unknown,
}

impl Transfer {
    /// Map a parser's optional direct-transfer flag onto the tri-state
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Transfer::Direct,
            Some(false) => Transfer::Gap,
            None => Transfer::Unknown,
        }
    }

    /// Whether the handover is confirmed direct
    pub fn is_direct(&self) -> bool {
        matches!(self, Transfer::Direct)
    }

    /// Whether the mode of transfer is established at all
    pub fn is_known(&self) -> bool {
        !matches!(self, Transfer::Unknown)
    }
}

/// A recorded location of a period, referenced by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Place name, matched against the record's places
    pub name: String,
}

impl Location {
    /// Create a location reference
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One interval during which a single party held the work
///
/// "Possible" bounds are the widest plausible range, "definite" bounds the
/// narrowest certain one. Any bound may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipPeriod {
    /// Owning party
    pub party: String,

    /// Where the party held the work
    pub location: Option<Location>,

    /// Earliest date the period could have started
    pub earliest_possible: Option<HistoricDate>,

    /// Latest date the period could have ended
    pub latest_possible: Option<HistoricDate>,

    /// Earliest date the party certainly held the work
    pub earliest_definite: Option<HistoricDate>,

    /// Latest date the party certainly held the work
    pub latest_definite: Option<HistoricDate>,

    /// How the period was entered
    pub transfer: Transfer,

    /// Present-day holder
    pub ongoing: bool,

    /// Source sentence, when the parser kept it
    pub text: Option<String>,
}

impl OwnershipPeriod {
    /// Create an undated period with unknown transfer
    pub fn new(party: impl Into<String>) -> Self {
        Self {
            party: party.into(),
            location: None,
            earliest_possible: None,
            latest_possible: None,
            earliest_definite: None,
            latest_definite: None,
            transfer: Transfer::Unknown,
            ongoing: false,
            text: None,
        }
    }

    /// Set the location
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(Location::new(location));
        self
    }

    /// Set both possible bounds
    pub fn possible(mut self, earliest: Option<HistoricDate>, latest: Option<HistoricDate>) -> Self {
        self.earliest_possible = earliest;
        self.latest_possible = latest;
        self
    }

    /// Set both definite bounds
    pub fn definite(mut self, earliest: Option<HistoricDate>, latest: Option<HistoricDate>) -> Self {
        self.earliest_definite = earliest;
        self.latest_definite = latest;
        self
    }

    /// Set the transfer mode
    pub fn transfer(mut self, transfer: Transfer) -> Self {
        self.transfer = transfer;
        self
    }

    /// Mark as the present-day holder
    pub fn ongoing(mut self) -> Self {
        self.ongoing = true;
        self
    }

    /// Keep the source sentence for display
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether definite bounds sit inside possible bounds where both exist
    pub fn bounds_consistent(&self) -> bool {
        let start_ok = match (self.earliest_possible, self.earliest_definite) {
            (Some(possible), Some(definite)) => definite >= possible,
            _ => true,
        };
        let end_ok = match (self.latest_possible, self.latest_definite) {
            (Some(possible), Some(definite)) => definite <= possible,
            _ => true,
        };
        start_ok && end_ok
    }
}

impl fmt::Display for OwnershipPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            return f.write_str(text);
        }

        f.write_str(&self.party)?;
        if let Some(location) = &self.location {
            write!(f, ", {}", location.name)?;
        }

        match (self.earliest_possible, self.latest_possible) {
            (Some(start), _) if self.ongoing => write!(f, " [{} - present]", start),
            (None, _) if self.ongoing => f.write_str(" [until present]"),
            (Some(start), Some(end)) => write!(f, " [{} - {}]", start, end),
            (Some(start), None) => write!(f, " [from {}]", start),
            (None, Some(end)) => write!(f, " [until {}]", end),
            (None, None) => Ok(()),
        }
    }
}
