//! Saved customer address

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LatLng;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub province: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Free-text street address
    pub address: String,
    pub location: LatLng,
    /// Set once the address has been checked after creation
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Address {
    #[must_use]
    pub fn new(province: &str, city: &str, address: &str, location: LatLng) -> Self {
        Self {
            id: Uuid::new_v4(),
            province: province.to_string(),
            city: city.to_string(),
            region: None,
            district: None,
            address: address.to_string(),
            location,
            confirmed: false,
            created_at: Utc::now(),
        }
    }

    /// Two addresses are duplicates when they name the same street text in the same city
    #[must_use]
    pub fn is_duplicate_of(&self, other: &Address) -> bool {
        self.province.trim() == other.province.trim()
            && self.city.trim() == other.city.trim()
            && self.address.trim() == other.address.trim()
    }
}
