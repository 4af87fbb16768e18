//! The ordered chain of ownership periods for one record
//!
//! A [`Timeline`] owns its periods in an arena. Neighbours are reached by
//! index through [`PeriodRef`], so forward and backward links are always
//! consistent inverses and nothing holds a live reference to anything else.

use crate::period::OwnershipPeriod;
use std::fmt;
use std::ops::Deref;

/// Position of a period inside its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodId(usize);

impl PeriodId {
    /// Id of the period at `index`, earliest being 0
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the timeline
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Chronologically ordered ownership periods, earliest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    periods: Vec<OwnershipPeriod>,
}

impl Timeline {
    /// Build a timeline from periods already in chronological order
    pub fn new(periods: Vec<OwnershipPeriod>) -> Self {
        Self { periods }
    }

    /// Entry point: the earliest period, if any
    pub fn earliest(&self) -> Option<PeriodRef<'_>> {
        self.get(PeriodId(0))
    }

    /// The latest period, if any
    pub fn latest(&self) -> Option<PeriodRef<'_>> {
        self.periods.len().checked_sub(1).and_then(|i| self.get(PeriodId(i)))
    }

    /// Cursor to the period at `id`
    pub fn get(&self, id: PeriodId) -> Option<PeriodRef<'_>> {
        (id.0 < self.periods.len()).then_some(PeriodRef { timeline: self, id })
    }

    /// Iterate periods from earliest to latest
    pub fn iter(&self) -> impl Iterator<Item = PeriodRef<'_>> {
        (0..self.periods.len()).map(move |i| PeriodRef {
            timeline: self,
            id: PeriodId(i),
        })
    }

    /// Number of periods
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the timeline has no periods
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl FromIterator<OwnershipPeriod> for Timeline {
    fn from_iter<I: IntoIterator<Item = OwnershipPeriod>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Navigation cursor onto one period of a timeline
#[derive(Clone, Copy)]
pub struct PeriodRef<'a> {
    timeline: &'a Timeline,
    id: PeriodId,
}

impl<'a> PeriodRef<'a> {
    /// Position of this period
    pub fn id(&self) -> PeriodId {
        self.id
    }

    /// The period itself, borrowed for the timeline's lifetime
    pub fn period(&self) -> &'a OwnershipPeriod {
        &self.timeline.periods[self.id.0]
    }

    /// The chronologically preceding period
    pub fn previous(&self) -> Option<PeriodRef<'a>> {
        self.id
            .0
            .checked_sub(1)
            .and_then(|i| self.timeline.get(PeriodId(i)))
    }

    /// The chronologically following period
    pub fn next(&self) -> Option<PeriodRef<'a>> {
        self.timeline.get(PeriodId(self.id.0 + 1))
    }

    /// Whether no period precedes this one
    pub fn is_first(&self) -> bool {
        self.id.0 == 0
    }

    /// Whether no period follows this one
    pub fn is_terminal(&self) -> bool {
        self.id.0 + 1 == self.timeline.periods.len()
    }
}

impl Deref for PeriodRef<'_> {
    type Target = OwnershipPeriod;

    fn deref(&self) -> &Self::Target {
        self.period()
    }
}

impl fmt::Debug for PeriodRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodRef")
            .field("id", &self.id)
            .field("party", &self.period().party)
            .finish()
    }
}

impl fmt::Display for PeriodRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.period(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(parties: &[&str]) -> Timeline {
        parties.iter().map(|p| OwnershipPeriod::new(*p)).collect()
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::default();
        assert!(t.is_empty());
        assert!(t.earliest().is_none());
        assert!(t.latest().is_none());
    }

    #[test]
    fn test_navigation() {
        let t = timeline(&["A", "B", "C"]);
        let first = t.earliest().unwrap();
        assert!(first.is_first());
        assert!(first.previous().is_none());

        let second = first.next().unwrap();
        assert_eq!(second.party, "B");
        assert_eq!(second.previous().unwrap().id(), first.id());

        let last = second.next().unwrap();
        assert!(last.is_terminal());
        assert!(last.next().is_none());
        assert_eq!(t.latest().unwrap().id(), last.id());
    }

    #[test]
    fn test_single_period_is_first_and_terminal() {
        let t = timeline(&["Only"]);
        let only = t.earliest().unwrap();
        assert!(only.is_first());
        assert!(only.is_terminal());
    }

    #[test]
    fn test_iter_order() {
        let t = timeline(&["A", "B", "C"]);
        let parties: Vec<_> = t.iter().map(|p| p.party.clone()).collect();
        assert_eq!(parties, ["A", "B", "C"]);
    }
}
