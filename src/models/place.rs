//! Place hierarchy entities: province, city, region, district.
//!
//! Provinces are identified by name only; every other level carries the
//! names of its ancestors so that lookups can be keyed on the full chain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LatLng;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub province: String,
    pub name: String,
    #[serde(default)]
    pub center: Option<LatLng>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub province: String,
    pub city: String,
    pub name: String,
    #[serde(default)]
    pub center: Option<LatLng>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct District {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub province: String,
    pub city: String,
    pub region: String,
    pub name: String,
    #[serde(default)]
    pub center: Option<LatLng>,
}

impl City {
    #[must_use]
    pub fn new(province: &str, name: &str, center: Option<LatLng>) -> Self {
        Self {
            id: Uuid::new_v4(),
            province: province.to_string(),
            name: name.to_string(),
            center,
        }
    }
}

impl Region {
    #[must_use]
    pub fn new(province: &str, city: &str, name: &str, center: Option<LatLng>) -> Self {
        Self {
            id: Uuid::new_v4(),
            province: province.to_string(),
            city: city.to_string(),
            name: name.to_string(),
            center,
        }
    }
}

impl District {
    #[must_use]
    pub fn new(
        province: &str,
        city: &str,
        region: &str,
        name: &str,
        center: Option<LatLng>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            province: province.to_string(),
            city: city.to_string(),
            region: region.to_string(),
            name: name.to_string(),
            center,
        }
    }
}
