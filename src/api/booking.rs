//! Booking API handlers. Every route is bearer-gated.

use crate::api::{BookingCreatedResponse, MessageResponse};
use crate::domain::{CreateBookingInput, DeleteBookingInput, UpdateBookingInput};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::state::HasServices;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Book a room on behalf of the authenticated caller
pub async fn create<S: HasServices>(
    auth: AuthUser,
    State(state): State<S>,
    Json(input): Json<CreateBookingInput>,
) -> Result<impl IntoResponse> {
    let data = input.clone();
    let booking_id = state.booking_service().create(&auth, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse::new(booking_id, data)),
    ))
}

/// List the caller's bookings with joined room details
pub async fn list_for_owner<S: HasServices>(
    auth: AuthUser,
    State(state): State<S>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse> {
    let bookings = state
        .booking_service()
        .list_for_owner(&auth, &email)
        .await?;
    Ok(Json(bookings))
}

/// Update a booking's date
pub async fn update<S: HasServices>(
    auth: AuthUser,
    State(state): State<S>,
    Path(id): Path<String>,
    Json(input): Json<UpdateBookingInput>,
) -> Result<impl IntoResponse> {
    state.booking_service().update(&auth, &id, input).await?;
    Ok(Json(MessageResponse::new("Booking updated successfully")))
}

/// Delete a booking
pub async fn remove<S: HasServices>(
    auth: AuthUser,
    State(state): State<S>,
    Path(id): Path<String>,
    Json(input): Json<DeleteBookingInput>,
) -> Result<impl IntoResponse> {
    state.booking_service().delete(&auth, &id, input).await?;
    Ok(Json(MessageResponse::new("Booking deleted successfully")))
}
