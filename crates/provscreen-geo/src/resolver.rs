//! Period-to-country resolution

use provscreen_domain::traits::CountryLookup;
use provscreen_domain::{OwnershipPeriod, Place};
use tracing::{trace, warn};

/// Object-safe view of a resolver, used by geography-dependent rules
pub trait CountryResolver: Send + Sync {
    /// Country of the period's recorded location, if it can be established
    fn country_of(&self, period: &OwnershipPeriod, places: &[Place]) -> Option<String>;
}

/// Resolves a period's location through the record's places and a lookup
///
/// # Thread Safety
///
/// Resolution only reads the lookup, so one resolver can be shared across
/// parallel classifications.
pub struct GeoResolver<L> {
    lookup: L,
}

impl<L: CountryLookup> GeoResolver<L> {
    /// Create a resolver over the given lookup
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve the period's location to a country name
    ///
    /// Returns `None` when the period has no location, when no place entry
    /// carries the location's name, or when the lookup knows nothing about
    /// the place. Lookup errors are logged and treated as absence.
    pub fn resolve(&self, period: &OwnershipPeriod, places: &[Place]) -> Option<String> {
        let location = period.location.as_ref()?;
        let place = places.iter().find(|p| p.name == location.name)?;

        match self.lookup.resolve_country(&place.location_id) {
            Ok(country) => {
                trace!(place = %place.name, country = ?country, "resolved location");
                country
            }
            Err(e) => {
                warn!(place = %place.name, location_id = %place.location_id, "country lookup failed: {}", e);
                None
            }
        }
    }
}

impl<L: CountryLookup> CountryResolver for GeoResolver<L> {
    fn country_of(&self, period: &OwnershipPeriod, places: &[Place]) -> Option<String> {
        self.resolve(period, places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryLookup;

    struct FailingLookup;

    impl CountryLookup for FailingLookup {
        type Error = String;

        fn resolve_country(&self, _location_id: &str) -> Result<Option<String>, Self::Error> {
            Err("lookup service unavailable".to_string())
        }
    }

    fn places() -> Vec<Place> {
        vec![
            Place::new("Paris", "101751119"),
            Place::new("New York", "85977539"),
        ]
    }

    fn resolver() -> GeoResolver<MemoryLookup> {
        GeoResolver::new(MemoryLookup::from_pairs([
            ("101751119", "France"),
            ("85977539", "United States"),
        ]))
    }

    #[test]
    fn test_resolves_matching_place() {
        let period = OwnershipPeriod::new("Dealer").at("New York");
        assert_eq!(resolver().resolve(&period, &places()).as_deref(), Some("United States"));
    }

    #[test]
    fn test_no_location() {
        let period = OwnershipPeriod::new("Dealer");
        assert!(resolver().resolve(&period, &places()).is_none());
    }

    #[test]
    fn test_no_places() {
        let period = OwnershipPeriod::new("Dealer").at("Paris");
        assert!(resolver().resolve(&period, &[]).is_none());
    }

    #[test]
    fn test_unmatched_place_name() {
        let period = OwnershipPeriod::new("Dealer").at("Vienna");
        assert!(resolver().resolve(&period, &places()).is_none());
    }

    #[test]
    fn test_lookup_miss() {
        let period = OwnershipPeriod::new("Dealer").at("Paris");
        let resolver = GeoResolver::new(MemoryLookup::default());
        assert!(resolver.resolve(&period, &places()).is_none());
    }

    #[test]
    fn test_lookup_error_is_absence() {
        let period = OwnershipPeriod::new("Dealer").at("Paris");
        let resolver = GeoResolver::new(FailingLookup);
        assert!(resolver.resolve(&period, &places()).is_none());
    }

    #[test]
    fn test_object_safe_view() {
        let resolver = resolver();
        let dynamic: &dyn CountryResolver = &resolver;
        let period = OwnershipPeriod::new("Dealer").at("Paris");
        assert_eq!(dynamic.country_of(&period, &places()).as_deref(), Some("France"));
    }
}
