//! `/api/public/address` handlers

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::response::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::ResultObject;
use crate::auth::UserAuthentication;
use crate::error::SERVICE_ERROR_MESSAGE;
use crate::models::{Address, Customer, LatLng, UserRole};
use crate::validation::*;
use crate::web::AppState;
use crate::{AddressError, Result};

pub const ADDRESS_ADDED_MESSAGE: &str = "آدرس جدید اضافه شد";
pub const INVALID_REQUEST_MESSAGE: &str = "درخواست نامعتبر است";

const ADDRESS_ROLES: [UserRole; 2] = [UserRole::Customer, UserRole::Admin];

/// Public view of a saved address
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AddressView {
    pub id: Uuid,
    pub province: String,
    pub city: String,
    pub region: Option<String>,
    pub district: Option<String>,
    pub address: String,
    pub location: LatLng,
    pub primary: bool,
}

impl AddressView {
    fn new(address: &Address, customer: &Customer) -> Self {
        Self {
            id: address.id,
            province: address.province.clone(),
            city: address.city.clone(),
            region: address.region.clone(),
            district: address.district.clone(),
            address: address.address.clone(),
            location: address.location,
            primary: customer.is_primary(address.id),
        }
    }
}

/// Body of `POST /api/public/address`. Every field is optional here so that
/// a missing field is reported with its own message.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddressRequest {
    pub province: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub location: Option<LatLng>,
}

impl AddressRequest {
    /// Validate in field order and build a new, unconfirmed address
    pub fn into_address(self) -> Result<Address> {
        let province =
            required_small_text(self.province.as_deref(), PROVINCE_REQUIRED, PROVINCE_INVALID)?;
        let city = required_small_text(self.city.as_deref(), CITY_REQUIRED, CITY_INVALID)?;
        let text = required_large_text(self.address.as_deref(), ADDRESS_REQUIRED, ADDRESS_INVALID)?;
        let location = required_location(self.location)?;
        let region = optional_small_text(self.region.as_deref(), REGION_INVALID)?;
        let district = optional_small_text(self.district.as_deref(), DISTRICT_INVALID)?;

        Ok(Address {
            id: Uuid::new_v4(),
            province: province.to_string(),
            city: city.to_string(),
            region: region.map(str::to_string),
            district: district.map(str::to_string),
            address: text.to_string(),
            location,
            confirmed: false,
            created_at: Utc::now(),
        })
    }
}

/// Caller allowed to manage addresses. Resolved from the request head, so a
/// forbidden role is turned away before the body is read.
#[derive(Debug, Clone, Copy)]
pub struct AddressUser(pub UserAuthentication);

impl FromRequestParts<Arc<AppState>> for AddressUser {
    type Rejection = AddressError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self> {
        let user = UserAuthentication::from_request_parts(parts, state).await?;
        user.require_any(&ADDRESS_ROLES)?;
        Ok(Self(user))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddAddressParams {
    /// Make the new address the customer's primary one
    #[serde(default)]
    pub primary: bool,
}

#[instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn get_addresses(
    State(state): State<Arc<AppState>>,
    AddressUser(user): AddressUser,
) -> Result<Json<ResultObject<Vec<AddressView>>>> {
    let customer = state.customers.load_customer(user.user_id).await?;
    let views = customer
        .addresses
        .iter()
        .map(|a| AddressView::new(a, &customer))
        .collect::<Vec<_>>();

    debug!("Returning {} addresses", views.len());
    Ok(Json(ResultObject::data(views)))
}

#[instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn add_address(
    State(state): State<Arc<AppState>>,
    AddressUser(user): AddressUser,
    params: std::result::Result<Query<AddAddressParams>, QueryRejection>,
    body: std::result::Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<ResultObject<Uuid>>> {
    let Json(request) = body.map_err(|e| {
        debug!("Unreadable address body: {}", e);
        AddressError::bad_request(INVALID_REQUEST_MESSAGE)
    })?;
    let Query(params) = params.map_err(|e| {
        debug!("Invalid query parameters: {}", e);
        AddressError::bad_request(INVALID_REQUEST_MESSAGE)
    })?;

    let address = request.into_address()?;

    let added = state
        .customers
        .add_address(user.user_id, address)
        .await?
        .ok_or_else(|| AddressError::conflict(SERVICE_ERROR_MESSAGE))?;

    state.customers.confirm_address(user.user_id, added.id).await?;
    if params.primary {
        state
            .customers
            .change_primary_address(user.user_id, added.id)
            .await?;
    }

    info!("Address {} added (primary: {})", added.id, params.primary);
    Ok(Json(ResultObject::with_message(
        ADDRESS_ADDED_MESSAGE,
        added.id,
    )))
}
