//! Place hierarchy lookups and location guessing
//!
//! The place data itself is owned elsewhere; this module only reads it
//! through the [`PlaceDirectory`] capability.

pub mod memory;
pub mod resolver;

use crate::models::{City, District, Region};

pub use memory::InMemoryPlaceDirectory;
pub use resolver::{GeoService, LocationGuess, PlaceLevel};

/// Read access to the province → city → region → district hierarchy.
///
/// Every lookup is an exact match on the full chain of names and returns
/// `None` when nothing matches.
pub trait PlaceDirectory: Send + Sync {
    fn find_district(&self, province: &str, city: &str, region: &str, name: &str)
    -> Option<District>;

    fn find_region(&self, province: &str, city: &str, name: &str) -> Option<Region>;

    fn find_city(&self, province: &str, name: &str) -> Option<City>;
}
