//! Room domain model
//!
//! Rooms are created out-of-band and are read-only from this service's
//! perspective. Descriptive attributes (name, capacity, amenities, ...)
//! are opaque to the core and carried as a flattened document.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use super::booking::Booking;
use super::review::Review;

/// Room entity as returned by read pipelines (`_id` already in hex form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub price: f64,
    /// Opaque descriptive attributes, passed through untouched
    #[serde(flatten)]
    pub attributes: Document,
}

/// Room annotated with its joined reviews and the derived average rating.
///
/// `average_rating` is the arithmetic mean of the joined ratings and is
/// `None` (never zero) for a room without reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithRating {
    #[serde(flatten)]
    pub room: Room,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Single-room detail: reviews plus all bookings for the room.
///
/// Bookings are not filtered by owner here; room detail intentionally
/// shows every booking for the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: Room,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}
