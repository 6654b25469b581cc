//! REST API shared utilities (response envelopes)
//!
//! Mutating routes answer with a `{success, message, ...}` envelope;
//! read routes return bare JSON. Error bodies share the same envelope
//! shape with `success: false` (see `error::AppError`).

pub mod booking;
pub mod health;
pub mod review;
pub mod room;

use crate::domain::CreateBookingInput;
use serde::{Deserialize, Serialize};

/// Envelope for update/delete responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Envelope for a created booking: the generated id plus an echo of the
/// persisted payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
    pub data: CreateBookingInput,
}

impl BookingCreatedResponse {
    pub fn new(booking_id: String, data: CreateBookingInput) -> Self {
        Self {
            success: true,
            message: "Room booked successfully".to_string(),
            booking_id,
            data,
        }
    }
}

/// Envelope for a created review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreatedResponse {
    pub success: bool,
    pub message: String,
    pub review_id: String,
}

impl ReviewCreatedResponse {
    pub fn new(review_id: String) -> Self {
        Self {
            success: true,
            message: "Review added successfully".to_string(),
            review_id,
        }
    }
}
