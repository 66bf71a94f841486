use std::sync::Arc;

use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::web::AppState;

pub mod address;
pub mod geo;

pub use address::{AddAddressParams, AddressRequest, AddressView};
pub use geo::GuessLocationParams;

/// Response envelope shared by every endpoint. Both fields are always
/// present in the JSON, `null` when unset.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultObject<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ResultObject<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/public/address",
            get(address::get_addresses).post(address::add_address),
        )
        .route("/public/geo/guess-location", get(geo::guess_location))
}
