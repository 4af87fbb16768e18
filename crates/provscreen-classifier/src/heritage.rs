//! American-heritage short-circuit
//!
//! Works by a single American artist whose history before the end of the
//! era never touches Europe are presumed domestic and safe without walking
//! the rule chain.

use crate::dates::after;
use crate::rules::RuleContext;
use provscreen_domain::{is_european, ProvenanceRecord, Timeline, ERA_END};
use tracing::debug;

/// Nationality that enables the short-circuit
pub const AMERICAN: &str = "American";

/// Whether the work has exactly one creator, and that creator is American
pub fn artist_is_american(record: &ProvenanceRecord) -> bool {
    let mut creators = record.creators();
    match (creators.next(), creators.next()) {
        (Some(only), None) => only.nationality.as_deref() == Some(AMERICAN),
        _ => false,
    }
}

/// Whether the history up to the cutoff period never resolves to Europe
///
/// The cutoff is the first period that begins after the era, or the terminal
/// period. From there the timeline is walked backwards to the start; any
/// European country ends the check with `false`. Periods whose country
/// cannot be resolved do not count against the work.
pub fn american_heritage(timeline: &Timeline, ctx: &RuleContext<'_>) -> bool {
    let cutoff = timeline
        .iter()
        .find(|p| after(p.earliest_possible, ERA_END) || p.is_terminal());

    let mut current = cutoff;
    while let Some(period) = current {
        if let Some(country) = ctx.geo.country_of(&period, ctx.places) {
            if is_european(&country) {
                debug!(party = %period.party, country = %country, "european period before cutoff");
                return false;
            }
        }
        current = period.previous();
    }

    cutoff.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use provscreen_domain::{Actor, HistoricDate, OwnershipPeriod, Place};
    use provscreen_geo::{GeoResolver, MemoryLookup};

    fn year(y: i32) -> Option<HistoricDate> {
        HistoricDate::from_ymd_opt(y, 6, 1)
    }

    fn places() -> Vec<Place> {
        vec![
            Place::new("New York", "85977539"),
            Place::new("Boston", "85950361"),
            Place::new("London", "101750367"),
        ]
    }

    fn geo() -> GeoResolver<MemoryLookup> {
        GeoResolver::new(MemoryLookup::from_pairs([
            ("85977539", "United States"),
            ("85950361", "United States"),
            ("101750367", "United Kingdom"),
        ]))
    }

    #[test]
    fn test_single_american_creator() {
        let record = ProvenanceRecord::new("1", "Harbor")
            .with_actor(Actor::creator("Winslow", Some("American")));
        assert!(artist_is_american(&record));
    }

    #[test]
    fn test_not_american_when_several_creators() {
        let record = ProvenanceRecord::new("1", "Harbor")
            .with_actor(Actor::creator("Winslow", Some("American")))
            .with_actor(Actor::creator("Assistant", Some("American")));
        assert!(!artist_is_american(&record));
    }

    #[test]
    fn test_not_american_without_nationality() {
        let record = ProvenanceRecord::new("1", "Harbor").with_actor(Actor::creator("Anon", None));
        assert!(!artist_is_american(&record));
        assert!(!artist_is_american(&ProvenanceRecord::new("2", "Untitled")));
    }

    #[test]
    fn test_domestic_history() {
        let timeline = Timeline::new(vec![
            OwnershipPeriod::new("Artist").at("New York").possible(year(1900), year(1930)),
            OwnershipPeriod::new("Collector").at("Boston").possible(year(1930), year(1950)),
            OwnershipPeriod::new("Museum").possible(year(1950), None).ongoing(),
        ]);
        let places = places();
        let geo = geo();
        assert!(american_heritage(&timeline, &RuleContext::new(&places, &geo)));
    }

    #[test]
    fn test_european_period_before_cutoff() {
        let timeline = Timeline::new(vec![
            OwnershipPeriod::new("Artist").at("New York").possible(year(1900), year(1930)),
            OwnershipPeriod::new("Dealer").at("London").possible(year(1930), year(1950)),
            OwnershipPeriod::new("Museum").possible(year(1950), None).ongoing(),
        ]);
        let places = places();
        let geo = geo();
        assert!(!american_heritage(&timeline, &RuleContext::new(&places, &geo)));
    }

    #[test]
    fn test_european_period_after_cutoff_is_ignored() {
        let timeline = Timeline::new(vec![
            OwnershipPeriod::new("Artist").at("New York").possible(year(1900), year(1950)),
            OwnershipPeriod::new("Collector").at("Boston").possible(year(1950), year(1955)),
            OwnershipPeriod::new("Dealer").at("London").possible(year(1955), year(1960)),
            OwnershipPeriod::new("Museum").possible(year(1960), None).ongoing(),
        ]);
        let places = places();
        let geo = geo();
        assert!(american_heritage(&timeline, &RuleContext::new(&places, &geo)));
    }

    #[test]
    fn test_empty_timeline() {
        let places = places();
        let geo = geo();
        assert!(!american_heritage(&Timeline::default(), &RuleContext::new(&places, &geo)));
    }
}
