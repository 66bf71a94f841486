//! Geographic coordinate model

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl LatLng {
    /// Center of Tehran, used when no place level yields a center
    pub const TEHRAN_CENTER: LatLng = LatLng {
        lat: 35.692_288_292_787_2,
        lng: 51.386_215_738_020_8,
    };

    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components lie inside the valid degree ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tehran_center_constant() {
        assert_eq!(LatLng::TEHRAN_CENTER.lat, 35.6922882927872);
        assert_eq!(LatLng::TEHRAN_CENTER.lng, 51.3862157380208);
    }

    #[test]
    fn test_is_valid() {
        assert!(LatLng::new(35.7, 51.4).is_valid());
        assert!(LatLng::new(-90.0, 180.0).is_valid());
        assert!(!LatLng::new(91.0, 51.4).is_valid());
        assert!(!LatLng::new(35.7, -180.5).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(LatLng::new(10.0, 20.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 10.0, "lng": 20.0 }));
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(LatLng::TEHRAN_CENTER.format_coordinates(), "35.6923, 51.3862");
    }
}
