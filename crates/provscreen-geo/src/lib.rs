//! Provscreen Geography Layer
//!
//! Resolves the recorded location of an ownership period to a country.
//!
//! # Architecture
//!
//! - [`GeoResolver`] matches a period's location against the record's places
//!   and asks a [`CountryLookup`](provscreen_domain::traits::CountryLookup)
//!   for the country
//! - [`CacheLookup`] is a file-backed country cache
//! - [`MemoryLookup`] is an in-memory map for tests and embedders
//!
//! Resolution fails soft: every miss or lookup error is reported as "no
//! country", never as an error.
//!
//! # Examples
//!
//! ```
//! use provscreen_domain::{OwnershipPeriod, Place};
//! use provscreen_geo::{GeoResolver, MemoryLookup};
//!
//! let lookup = MemoryLookup::from_pairs([("101751119", "France")]);
//! let resolver = GeoResolver::new(lookup);
//!
//! let places = vec![Place::new("Paris", "101751119")];
//! let period = OwnershipPeriod::new("Galerie X").at("Paris");
//! assert_eq!(resolver.resolve(&period, &places).as_deref(), Some("France"));
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod resolver;

pub use cache::{location_key, CacheLookup, MemoryLookup};
pub use config::GeoConfig;
pub use error::GeoError;
pub use resolver::{CountryResolver, GeoResolver};
