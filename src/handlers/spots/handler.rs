//! Spot handler implementations

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

use crate::{
    error::AppResult,
    geo::{BoundingBox, LatLng},
    rules::EvaluationTime,
    services::SpotService,
    state::AppState,
};

use super::{
    request::{NearestQuery, ViewportQuery},
    response::{NearestSpotResponse, SpotsListResponse},
};

/// List evaluated spots inside a viewport
pub async fn list_spots(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> AppResult<Json<SpotsListResponse>> {
    let bounds = BoundingBox::new(query.south, query.west, query.north, query.east);
    let at = EvaluationTime::from_datetime(&query.at.unwrap_or_else(Utc::now));

    let spots = SpotService::spots_in_view(
        state.opendata(),
        &state.config().search,
        bounds,
        at,
        query.limit,
    )
    .await?;

    let total = spots.len();
    Ok(Json(SpotsListResponse { spots, total }))
}

/// Find the nearest evaluated spot around a point
pub async fn nearest_spot(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> AppResult<Json<NearestSpotResponse>> {
    let center = LatLng::new(query.lat, query.lng);
    let at = EvaluationTime::from_datetime(&query.at.unwrap_or_else(Utc::now));

    let nearest = SpotService::nearest_spot(
        state.opendata(),
        &state.config().search,
        center,
        query.radius,
        at,
    )
    .await?;

    Ok(Json(nearest))
}
