//! Data models for the address service
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinate pair
//! - Place: province/city/region/district hierarchy
//! - Address and Customer: the customer's saved addresses

pub mod address;
pub mod customer;
pub mod location;
pub mod place;

// Re-export all public types for convenient access
pub use address::Address;
pub use customer::{Customer, UserRole};
pub use location::LatLng;
pub use place::{City, District, Region};
