use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::instrument;

use super::ResultObject;
use crate::geo::LocationGuess;
use crate::web::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GuessLocationParams {
    pub province: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
}

/// Best-effort coordinate for a place description; always succeeds
#[instrument(skip(state))]
pub async fn guess_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GuessLocationParams>,
) -> Json<ResultObject<LocationGuess>> {
    let guess = state.geo.guess(
        params.province.as_deref(),
        params.city.as_deref(),
        params.region.as_deref(),
        params.district.as_deref(),
    );
    Json(ResultObject::data(guess))
}
