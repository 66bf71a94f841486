//! Seed document for the in-memory collaborators
//!
//! The service ships with a small bundled data set (`data/seed.json`); a
//! different file can be configured with `data.seed_file`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::{InMemoryTokenAuthenticationService, UserAuthentication};
use crate::customer::InMemoryCustomerService;
use crate::geo::InMemoryPlaceDirectory;
use crate::models::{City, Customer, District, Region, UserRole};

const BUNDLED_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
pub struct SeedToken {
    pub token: String,
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub cities: Vec<City>,
    pub regions: Vec<Region>,
    pub districts: Vec<District>,
    pub customers: Vec<Customer>,
    pub tokens: Vec<SeedToken>,
}

impl SeedData {
    /// The data set compiled into the binary
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_SEED).context("Bundled seed data is malformed")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading seed data from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))
    }

    /// Load `path` when given, otherwise the bundled data set
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let seed = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::bundled()?,
        };
        info!(
            "Seed data: {} cities, {} regions, {} districts, {} customers, {} tokens",
            seed.cities.len(),
            seed.regions.len(),
            seed.districts.len(),
            seed.customers.len(),
            seed.tokens.len()
        );
        Ok(seed)
    }

    pub fn place_directory(&self) -> InMemoryPlaceDirectory {
        let mut directory = InMemoryPlaceDirectory::new();
        for city in &self.cities {
            directory.insert_city(city.clone());
        }
        for region in &self.regions {
            directory.insert_region(region.clone());
        }
        for district in &self.districts {
            directory.insert_district(district.clone());
        }
        directory
    }

    pub fn customer_service(&self, max_addresses: usize) -> InMemoryCustomerService {
        InMemoryCustomerService::with_customers(self.customers.clone(), max_addresses)
    }

    pub fn token_service(&self) -> InMemoryTokenAuthenticationService {
        let tokens = self
            .tokens
            .iter()
            .map(|t| {
                (
                    t.token.clone(),
                    UserAuthentication {
                        user_id: t.user_id,
                        role: t.role,
                    },
                )
            })
            .collect();
        InMemoryTokenAuthenticationService::new(tokens)
    }
}
