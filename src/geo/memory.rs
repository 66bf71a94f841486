use std::collections::HashMap;

use super::PlaceDirectory;
use crate::models::{City, District, Region};

type CityKey = (String, String);
type RegionKey = (String, String, String);
type DistrictKey = (String, String, String, String);

/// Hash-map backed place directory, filled once at startup
#[derive(Debug, Default)]
pub struct InMemoryPlaceDirectory {
    cities: HashMap<CityKey, City>,
    regions: HashMap<RegionKey, Region>,
    districts: HashMap<DistrictKey, District>,
}

impl InMemoryPlaceDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_city(&mut self, city: City) {
        let key = (city.province.clone(), city.name.clone());
        self.cities.insert(key, city);
    }

    pub fn insert_region(&mut self, region: Region) {
        let key = (
            region.province.clone(),
            region.city.clone(),
            region.name.clone(),
        );
        self.regions.insert(key, region);
    }

    pub fn insert_district(&mut self, district: District) {
        let key = (
            district.province.clone(),
            district.city.clone(),
            district.region.clone(),
            district.name.clone(),
        );
        self.districts.insert(key, district);
    }

    /// Number of cities, regions and districts held
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.cities.len(), self.regions.len(), self.districts.len())
    }
}

impl PlaceDirectory for InMemoryPlaceDirectory {
    fn find_district(
        &self,
        province: &str,
        city: &str,
        region: &str,
        name: &str,
    ) -> Option<District> {
        let key = (
            province.to_string(),
            city.to_string(),
            region.to_string(),
            name.to_string(),
        );
        self.districts.get(&key).cloned()
    }

    fn find_region(&self, province: &str, city: &str, name: &str) -> Option<Region> {
        let key = (province.to_string(), city.to_string(), name.to_string());
        self.regions.get(&key).cloned()
    }

    fn find_city(&self, province: &str, name: &str) -> Option<City> {
        let key = (province.to_string(), name.to_string());
        self.cities.get(&key).cloned()
    }
}
