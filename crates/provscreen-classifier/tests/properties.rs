//! Property tests over generated periods and timelines

use proptest::prelude::*;
use provscreen_classifier::{ClassifierConfig, ProvenanceClassifier, RuleChain, RuleContext};
use provscreen_domain::{
    HistoricDate, OwnershipPeriod, Place, ProvenanceRecord, Timeline, Transfer, Verdict, ERA_END,
    ERA_START,
};
use provscreen_geo::{GeoResolver, MemoryLookup};

fn date_in(years: std::ops::Range<i32>) -> impl Strategy<Value = HistoricDate> {
    (years, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| HistoricDate::from_ymd_opt(y, m, d).unwrap_or(ERA_START))
}

fn transfer() -> impl Strategy<Value = Transfer> {
    prop_oneof![
        Just(Transfer::Direct),
        Just(Transfer::Gap),
        Just(Transfer::Unknown),
    ]
}

fn place_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Paris".to_string())),
        Just(Some("Boston".to_string())),
    ]
}

fn places() -> Vec<Place> {
    vec![Place::new("Paris", "101751119"), Place::new("Boston", "85950361")]
}

fn geo() -> GeoResolver<MemoryLookup> {
    GeoResolver::new(MemoryLookup::from_pairs([
        ("101751119", "France"),
        ("85950361", "United States"),
    ]))
}

/// A period whose whole possible range precedes the era
fn pre_era_period() -> impl Strategy<Value = OwnershipPeriod> {
    (
        date_in(1700..1931),
        any::<bool>(),
        transfer(),
        place_name(),
        any::<bool>(),
    )
        .prop_map(|(end, has_start, transfer, location, ongoing)| {
            let start = has_start.then(|| end.pred_opt().unwrap_or(end));
            let mut period = OwnershipPeriod::new("Owner")
                .possible(start, Some(end))
                .transfer(transfer);
            period.location = location.map(provscreen_domain::Location::new);
            period.ongoing = ongoing;
            period
        })
}

proptest! {
    /// Property: periods ending before the era are always skipped
    #[test]
    fn test_pre_era_period_is_skip(period in pre_era_period(), before in 0usize..3) {
        let mut periods: Vec<_> = (0..before)
            .map(|i| OwnershipPeriod::new(format!("Earlier {}", i)))
            .collect();
        periods.push(period);
        let timeline = Timeline::new(periods);

        let places = places();
        let geo = geo();
        let ctx = RuleContext::new(&places, &geo);
        let outcome = RuleChain::standard().evaluate(timeline.latest().unwrap(), &ctx);
        prop_assert_eq!(outcome.outcome.verdict, Verdict::Skip);
    }

    /// Property: a single owner holding the work across the whole era is safe
    #[test]
    fn test_owned_throughout_is_safe(
        ed in date_in(1700..1931),
        ld in date_in(1947..2020),
        transfer in transfer(),
        location in place_name(),
        first in any::<bool>(),
    ) {
        let mut owner = OwnershipPeriod::new("Family")
            .possible(Some(ed), Some(ld))
            .definite(Some(ed), Some(ld))
            .transfer(transfer);
        owner.location = location.map(provscreen_domain::Location::new);

        let mut periods = Vec::new();
        if !first {
            periods.push(OwnershipPeriod::new("Before").at("Paris"));
        }
        periods.push(owner);
        periods.push(OwnershipPeriod::new("After"));
        let timeline = Timeline::new(periods);
        let period = timeline.iter().find(|p| p.party == "Family").unwrap();

        let places = places();
        let geo = geo();
        let outcome = RuleChain::standard().evaluate(period, &RuleContext::new(&places, &geo));
        prop_assert_eq!(outcome.outcome.verdict, Verdict::Safe);
    }

    /// Property: skipped history followed by a present-day holder ends safe
    #[test]
    fn test_ongoing_terminal_period_halts_safe(
        history in prop::collection::vec(pre_era_period(), 1..5),
        start in date_in(1900..2020),
        transfer in transfer(),
    ) {
        let mut periods: Vec<_> = history
            .into_iter()
            .map(|mut p| { p.ongoing = false; p })
            .collect();
        let expected_len = periods.len() + 1;
        periods.push(
            OwnershipPeriod::new("The Museum")
                .possible(Some(start), None)
                .transfer(transfer)
                .ongoing(),
        );
        let timeline = Timeline::new(periods);

        let classifier = ProvenanceClassifier::new(
            move |_: &str| -> Result<Timeline, String> { Ok(timeline.clone()) },
            geo(),
            ClassifierConfig::strict(),
        );
        let record = ProvenanceRecord::new("1", "Untitled").with_provenance("history");
        let result = classifier.classify(&record).unwrap();

        prop_assert_eq!(result.status, Verdict::Safe);
        prop_assert_eq!(result.periods.len(), expected_len);
    }

    /// Property: the same record classified twice gives the same result
    #[test]
    fn test_classification_idempotent(
        periods in prop::collection::vec(
            (prop::option::of(date_in(1900..1990)), transfer(), place_name()),
            1..6,
        ),
        strict in any::<bool>(),
    ) {
        let timeline: Timeline = periods
            .into_iter()
            .enumerate()
            .map(|(i, (start, transfer, location))| {
                let mut period = OwnershipPeriod::new(format!("Owner {}", i))
                    .possible(start, None)
                    .transfer(transfer);
                period.location = location.map(provscreen_domain::Location::new);
                period
            })
            .collect();

        let config = if strict { ClassifierConfig::strict() } else { ClassifierConfig::lenient() };
        let classifier = ProvenanceClassifier::new(
            move |_: &str| -> Result<Timeline, String> { Ok(timeline.clone()) },
            geo(),
            config,
        );
        let mut record = ProvenanceRecord::new("1", "Untitled").with_provenance("history");
        record.places = places();

        let first = classifier.classify(&record).unwrap();
        let second = classifier.classify(&record).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_era_constants_are_ordered() {
    assert!(ERA_START < ERA_END);
}
