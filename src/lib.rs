//! Customer address service
//!
//! REST endpoints for a customer's saved addresses, plus a helper that
//! turns a province/city/region/district description into an approximate
//! map coordinate.

pub mod api;
pub mod auth;
pub mod config;
pub mod customer;
pub mod error;
pub mod geo;
pub mod logging;
pub mod models;
pub mod seed;
pub mod validation;
pub mod web;

// Re-export core types for public API
pub use api::ResultObject;
pub use config::AppConfig;
pub use error::AddressError;
pub use geo::{GeoService, InMemoryPlaceDirectory, PlaceDirectory};
pub use models::{Address, City, Customer, District, LatLng, Region, UserRole};
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AddressError>;
