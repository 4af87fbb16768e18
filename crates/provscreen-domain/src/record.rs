//! Artwork records as exported from a collection management system

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Actor role that marks the maker of the work
pub const CREATOR_ROLE: &str = "creator";

/// One artwork submitted for screening
///
/// Records are immutable inputs owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Collection accession identifier
    pub accession_number: String,

    /// Title of the work
    #[serde(default)]
    pub title: String,

    /// Free-text ownership history, if any was ever recorded
    #[serde(default)]
    pub provenance: Option<String>,

    /// Known places mentioned by the provenance
    #[serde(default)]
    pub places: Vec<Place>,

    /// People associated with the work
    #[serde(default)]
    pub actors: Vec<Actor>,
}

impl ProvenanceRecord {
    /// Create a record with no places or actors
    pub fn new(accession_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            accession_number: accession_number.into(),
            title: title.into(),
            provenance: None,
            places: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// Attach a provenance narrative
    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = Some(provenance.into());
        self
    }

    /// Add a known place
    pub fn with_place(mut self, place: Place) -> Self {
        self.places.push(place);
        self
    }

    /// Add an actor
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    /// Actors credited as creators of the work
    pub fn creators(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.role == CREATOR_ROLE)
    }
}

/// A place name paired with an opaque location identifier
///
/// Exports encode each place as a single-entry object,
/// `{ "Paris": "https://whosonfirst.mapzen.com/data/101/751/119/101751119.geojson" }`,
/// so that is the serialized shape here too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Place {
    /// Name as it appears in the provenance text
    pub name: String,

    /// Identifier handed to the geographic lookup
    pub location_id: String,
}

impl Place {
    /// Create a new place entry
    pub fn new(name: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location_id: location_id.into(),
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for Place {
    type Error = String;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "place must be a single name-to-location entry, found {} entries",
                map.len()
            ));
        }
        let (name, location_id) = map
            .into_iter()
            .next()
            .ok_or_else(|| "place entry is empty".to_string())?;
        Ok(Self { name, location_id })
    }
}

impl From<Place> for BTreeMap<String, String> {
    fn from(place: Place) -> Self {
        BTreeMap::from([(place.name, place.location_id)])
    }
}

/// A person associated with a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Role of the actor (e.g., "creator")
    pub role: String,

    /// Display name
    pub name: String,

    /// Nationality, when recorded
    #[serde(default)]
    pub nationality: Option<String>,
}

impl Actor {
    /// Create a creator actor
    pub fn creator(name: impl Into<String>, nationality: Option<&str>) -> Self {
        Self {
            role: CREATOR_ROLE.to_string(),
            name: name.into(),
            nationality: nationality.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_deserializes_from_single_entry() {
        let place: Place = serde_json::from_str(r#"{"Paris": "loc:101751119"}"#).unwrap();
        assert_eq!(place.name, "Paris");
        assert_eq!(place.location_id, "loc:101751119");
    }

    #[test]
    fn test_place_rejects_multiple_entries() {
        let result: Result<Place, _> = serde_json::from_str(r#"{"Paris": "a", "Rome": "b"}"#);
        assert!(result.is_err());

        let result: Result<Place, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_defaults() {
        let json = r#"{"accession_number": "1983.12"}"#;
        let record: ProvenanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.provenance.is_none());
        assert!(record.places.is_empty());
        assert!(record.actors.is_empty());
    }

    #[test]
    fn test_record_export_shape() {
        let json = r#"{
            "accession_number": "1921.45",
            "title": "Landscape",
            "provenance": "The artist; sold to John Doe, New York.",
            "places": [{"New York": "loc:85977539"}],
            "actors": [
                {"role": "creator", "name": "Jane Painter", "nationality": "American"},
                {"role": "donor", "name": "John Doe"}
            ]
        }"#;
        let record: ProvenanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.places[0].name, "New York");

        let creators: Vec<_> = record.creators().collect();
        assert_eq!(creators.len(), 1);
        assert_eq!(creators[0].nationality.as_deref(), Some("American"));
    }
}
