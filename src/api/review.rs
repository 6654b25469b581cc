//! Review API handlers
//!
//! Creation is bearer-gated; listings are public.

use crate::api::ReviewCreatedResponse;
use crate::domain::CreateReviewInput;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::state::HasServices;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Add a review for a completed stay
pub async fn create<S: HasServices>(
    auth: AuthUser,
    State(state): State<S>,
    Json(input): Json<CreateReviewInput>,
) -> Result<impl IntoResponse> {
    let review_id = state.review_service().add(&auth, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewCreatedResponse::new(review_id)),
    ))
}

/// All reviews for a room
pub async fn list_for_room<S: HasServices>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let reviews = state.review_service().list_for_room(&id).await?;
    Ok(Json(reviews))
}

/// All reviews, most recent first
pub async fn list_all<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    let reviews = state.review_service().list_all().await?;
    Ok(Json(reviews))
}
