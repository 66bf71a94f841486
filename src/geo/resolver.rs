//! Location Guessing Module
//!
//! Resolves a human-entered province/city/region/district into the center
//! of the narrowest place level that has one, falling back to the center of
//! Tehran.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::PlaceDirectory;
use crate::models::LatLng;

/// Place level whose center produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceLevel {
    District,
    Region,
    City,
    Default,
}

impl fmt::Display for PlaceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::District => write!(f, "district"),
            Self::Region => write!(f, "region"),
            Self::City => write!(f, "city"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationGuess {
    #[serde(flatten)]
    pub location: LatLng,
    pub level: PlaceLevel,
}

/// Service for guessing a coordinate from a place description
#[derive(Clone)]
pub struct GeoService {
    places: Arc<dyn PlaceDirectory>,
}

impl GeoService {
    pub fn new(places: Arc<dyn PlaceDirectory>) -> Self {
        Self { places }
    }

    /// Best available center for the given place names. Never fails.
    pub fn guess_location(
        &self,
        province: Option<&str>,
        city: Option<&str>,
        region: Option<&str>,
        district: Option<&str>,
    ) -> LatLng {
        self.guess(province, city, region, district).location
    }

    /// Like [`GeoService::guess_location`] but also reports which level matched.
    ///
    /// Lookups run narrowest first. A district miss still issues the region
    /// lookup, and a region miss (or no region at all) still issues the city
    /// lookup.
    #[instrument(level = "debug", skip(self))]
    pub fn guess(
        &self,
        province: Option<&str>,
        city: Option<&str>,
        region: Option<&str>,
        district: Option<&str>,
    ) -> LocationGuess {
        let (Some(province), Some(city)) = (present(province), present(city)) else {
            debug!("Province or city missing, using default center");
            return Self::fallback();
        };
        let region = present(region);
        let district = present(district);

        let guess = region
            .and_then(|region| {
                district
                    .and_then(|district| self.district_center(province, city, region, district))
                    .or_else(|| self.region_center(province, city, region))
            })
            .or_else(|| self.city_center(province, city))
            .unwrap_or_else(Self::fallback);

        debug!(
            "Guessed location {} from {} level",
            guess.location.format_coordinates(),
            guess.level
        );
        guess
    }

    fn district_center(
        &self,
        province: &str,
        city: &str,
        region: &str,
        name: &str,
    ) -> Option<LocationGuess> {
        let district = self.places.find_district(province, city, region, name)?;
        if district.center.is_none() {
            warn!("guess_location: district {} doesn't have center", district.id);
        }
        district.center.map(|location| LocationGuess {
            location,
            level: PlaceLevel::District,
        })
    }

    fn region_center(&self, province: &str, city: &str, name: &str) -> Option<LocationGuess> {
        let region = self.places.find_region(province, city, name)?;
        if region.center.is_none() {
            warn!("guess_location: region {} doesn't have center", region.id);
        }
        region.center.map(|location| LocationGuess {
            location,
            level: PlaceLevel::Region,
        })
    }

    fn city_center(&self, province: &str, name: &str) -> Option<LocationGuess> {
        let city = self.places.find_city(province, name)?;
        if city.center.is_none() {
            warn!("guess_location: city {} doesn't have center", city.id);
        }
        city.center.map(|location| LocationGuess {
            location,
            level: PlaceLevel::City,
        })
    }

    fn fallback() -> LocationGuess {
        LocationGuess {
            location: LatLng::TEHRAN_CENTER,
            level: PlaceLevel::Default,
        }
    }
}

/// Blank names count as absent; anything else is looked up as given
fn present(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, District, Region};
    use rstest::rstest;
    use std::sync::Mutex;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Collects the message of every WARN event
    #[derive(Clone, Default)]
    struct WarningCapture(Arc<Mutex<Vec<String>>>);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for WarningCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                let mut visitor = MessageVisitor(String::new());
                event.record(&mut visitor);
                self.0.lock().unwrap().push(visitor.0);
            }
        }
    }

    fn with_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let capture = WarningCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        let warnings = capture.0.lock().unwrap().clone();
        (result, warnings)
    }

    /// Directory that answers from fixed entries and records every lookup
    #[derive(Default)]
    struct RecordingDirectory {
        district: Option<District>,
        region: Option<Region>,
        city: Option<City>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingDirectory {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlaceDirectory for RecordingDirectory {
        fn find_district(
            &self,
            province: &str,
            city: &str,
            region: &str,
            name: &str,
        ) -> Option<District> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("district:{province}/{city}/{region}/{name}"));
            self.district.clone()
        }

        fn find_region(&self, province: &str, city: &str, name: &str) -> Option<Region> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("region:{province}/{city}/{name}"));
            self.region.clone()
        }

        fn find_city(&self, province: &str, name: &str) -> Option<City> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("city:{province}/{name}"));
            self.city.clone()
        }
    }

    fn service(directory: RecordingDirectory) -> (GeoService, Arc<RecordingDirectory>) {
        let directory = Arc::new(directory);
        (GeoService::new(directory.clone()), directory)
    }

    fn district(center: Option<LatLng>) -> Option<District> {
        Some(District::new("P", "C", "R", "D", center))
    }

    fn region(center: Option<LatLng>) -> Option<Region> {
        Some(Region::new("P", "C", "R", center))
    }

    fn city(center: Option<LatLng>) -> Option<City> {
        Some(City::new("P", "C", center))
    }

    #[test]
    fn test_district_center_wins() {
        let (geo, dir) = service(RecordingDirectory {
            district: district(Some(LatLng::new(10.0, 20.0))),
            region: region(Some(LatLng::new(5.0, 5.0))),
            city: city(Some(LatLng::new(1.0, 1.0))),
            ..Default::default()
        });

        let (guess, warnings) =
            with_warnings(|| geo.guess(Some("P"), Some("C"), Some("R"), Some("D")));
        assert_eq!(guess.location, LatLng::new(10.0, 20.0));
        assert_eq!(guess.level, PlaceLevel::District);
        assert_eq!(dir.calls(), vec!["district:P/C/R/D"]);
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_district_without_center_falls_back_to_region() {
        let (geo, dir) = service(RecordingDirectory {
            district: district(None),
            region: region(Some(LatLng::new(5.0, 5.0))),
            ..Default::default()
        });

        let location = geo.guess_location(Some("P"), Some("C"), Some("R"), Some("D"));
        assert_eq!(location, LatLng::new(5.0, 5.0));
        assert_eq!(dir.calls(), vec!["district:P/C/R/D", "region:P/C/R"]);
    }

    #[test]
    fn test_district_not_found_falls_back_to_region() {
        let (geo, dir) = service(RecordingDirectory {
            region: region(Some(LatLng::new(5.0, 5.0))),
            ..Default::default()
        });

        let location = geo.guess_location(Some("P"), Some("C"), Some("R"), Some("D"));
        assert_eq!(location, LatLng::new(5.0, 5.0));
        assert_eq!(dir.calls(), vec!["district:P/C/R/D", "region:P/C/R"]);
    }

    #[test]
    fn test_missing_district_still_looks_up_region() {
        let (geo, dir) = service(RecordingDirectory {
            region: region(Some(LatLng::new(5.0, 5.0))),
            ..Default::default()
        });

        let location = geo.guess_location(Some("P"), Some("C"), Some("R"), None);
        assert_eq!(location, LatLng::new(5.0, 5.0));
        assert_eq!(dir.calls(), vec!["region:P/C/R"]);
    }

    #[rstest]
    #[case::region_without_center(region(None))]
    #[case::region_not_found(None)]
    fn test_region_miss_falls_back_to_city(#[case] region: Option<Region>) {
        let (geo, dir) = service(RecordingDirectory {
            region,
            city: city(Some(LatLng::new(1.0, 2.0))),
            ..Default::default()
        });

        let guess = geo.guess(Some("P"), Some("C"), Some("R"), None);
        assert_eq!(guess.location, LatLng::new(1.0, 2.0));
        assert_eq!(guess.level, PlaceLevel::City);
        assert_eq!(dir.calls(), vec!["region:P/C/R", "city:P/C"]);
    }

    #[test]
    fn test_missing_region_skips_district_and_region() {
        let (geo, dir) = service(RecordingDirectory {
            district: district(Some(LatLng::new(10.0, 20.0))),
            region: region(Some(LatLng::new(5.0, 5.0))),
            city: city(Some(LatLng::new(1.0, 2.0))),
            ..Default::default()
        });

        let location = geo.guess_location(Some("P"), Some("C"), None, Some("D"));
        assert_eq!(location, LatLng::new(1.0, 2.0));
        assert_eq!(dir.calls(), vec!["city:P/C"]);
    }

    #[rstest]
    #[case::city_without_center(city(None))]
    #[case::city_not_found(None)]
    fn test_city_miss_returns_tehran(#[case] city: Option<City>) {
        let (geo, dir) = service(RecordingDirectory {
            city,
            ..Default::default()
        });

        let guess = geo.guess(Some("P"), Some("C"), None, None);
        assert_eq!(guess.location, LatLng::new(35.6922882927872, 51.3862157380208));
        assert_eq!(guess.level, PlaceLevel::Default);
        assert_eq!(dir.calls(), vec!["city:P/C"]);
    }

    #[test]
    fn test_every_level_without_center_walks_whole_chain() {
        let (geo, dir) = service(RecordingDirectory {
            district: district(None),
            region: region(None),
            city: city(None),
            ..Default::default()
        });

        let (location, warnings) =
            with_warnings(|| geo.guess_location(Some("P"), Some("C"), Some("R"), Some("D")));
        assert_eq!(location, LatLng::TEHRAN_CENTER);
        assert_eq!(
            dir.calls(),
            vec!["district:P/C/R/D", "region:P/C/R", "city:P/C"]
        );

        let district_id = dir.district.as_ref().unwrap().id;
        let region_id = dir.region.as_ref().unwrap().id;
        let city_id = dir.city.as_ref().unwrap().id;
        assert_eq!(
            warnings,
            vec![
                format!("guess_location: district {district_id} doesn't have center"),
                format!("guess_location: region {region_id} doesn't have center"),
                format!("guess_location: city {city_id} doesn't have center"),
            ]
        );
    }

    #[rstest]
    #[case::no_province(None, Some("C"))]
    #[case::no_city(Some("P"), None)]
    #[case::blank_province(Some("  "), Some("C"))]
    #[case::empty_city(Some("P"), Some(""))]
    #[case::nothing(None, None)]
    fn test_missing_province_or_city_never_looks_anything_up(
        #[case] province: Option<&str>,
        #[case] city_name: Option<&str>,
    ) {
        let (geo, dir) = service(RecordingDirectory {
            district: district(Some(LatLng::new(10.0, 20.0))),
            region: region(Some(LatLng::new(5.0, 5.0))),
            city: city(Some(LatLng::new(1.0, 2.0))),
            ..Default::default()
        });

        let location = geo.guess_location(province, city_name, Some("R"), Some("D"));
        assert_eq!(location, LatLng::TEHRAN_CENTER);
        assert!(dir.calls().is_empty());
    }

    #[test]
    fn test_blank_district_is_treated_as_absent() {
        let (geo, dir) = service(RecordingDirectory {
            region: region(Some(LatLng::new(5.0, 5.0))),
            ..Default::default()
        });

        let location = geo.guess_location(Some("P"), Some("C"), Some("R"), Some(" "));
        assert_eq!(location, LatLng::new(5.0, 5.0));
        assert_eq!(dir.calls(), vec!["region:P/C/R"]);
    }

    #[test]
    fn test_names_reach_directory_unchanged() {
        let (geo, dir) = service(RecordingDirectory::default());

        geo.guess_location(Some(" P"), Some("C "), Some(" R "), Some("D"));
        assert_eq!(
            dir.calls(),
            vec!["district: P/C / R /D", "region: P/C / R ", "city: P/C "]
        );
    }

    #[test]
    fn test_only_centerless_place_warns() {
        let (geo, _) = service(RecordingDirectory {
            region: region(None),
            city: city(Some(LatLng::new(1.0, 2.0))),
            ..Default::default()
        });

        let (_, warnings) = with_warnings(|| geo.guess(Some("P"), Some("C"), Some("R"), None));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("guess_location: region "));
    }
}
