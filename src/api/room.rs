//! Room API handlers. All reads are public.

use crate::error::Result;
use crate::state::HasServices;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

/// Raw price-range query parameters.
///
/// Kept as strings so the service owns bound validation (both present,
/// both numeric) and can refuse to query on bad input.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRangeQuery {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

/// List all rooms with joined reviews and average rating
pub async fn list<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    let rooms = state.room_service().list().await?;
    Ok(Json(rooms))
}

/// List rooms within an inclusive price range
pub async fn list_by_price_range<S: HasServices>(
    State(state): State<S>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<impl IntoResponse> {
    let rooms = state
        .room_service()
        .list_by_price_range(query.min_price.as_deref(), query.max_price.as_deref())
        .await?;
    Ok(Json(rooms))
}

/// Six highest-rated rooms
pub async fn top_rated<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    let rooms = state.room_service().top_rated().await?;
    Ok(Json(rooms))
}

/// Room detail with joined reviews and bookings
pub async fn detail<S: HasServices>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let room = state.room_service().detail(&id).await?;
    Ok(Json(room))
}
