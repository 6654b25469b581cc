//! Booking domain model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::room::Room;

/// Booking entity as returned by read pipelines (`_id` in hex form)
///
/// `reviewed` is monotonic: false at creation, flipped to true by the
/// review flow, never reset. Documents written before the flag existed
/// deserialize as unreviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    pub user_email: String,
    pub booking_date: String,
    #[serde(default)]
    pub reviewed: bool,
}

/// Booking enriched with the joined room documents.
///
/// The join produces an array; a dangling or malformed `roomId` degrades
/// to an empty `roomDetails` rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRoom {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(default)]
    pub room_details: Vec<Room>,
}

/// Input for creating a booking.
///
/// Unknown fields are rejected rather than silently dropped or applied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBookingInput {
    pub room_id: String,
    #[validate(email)]
    pub user_email: String,
    pub booking_date: String,
}

/// Input for updating a booking.
///
/// Only `bookingDate` is ever applied; `userEmail` is carried solely for
/// the ownership check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookingInput {
    #[validate(email)]
    pub user_email: String,
    pub booking_date: String,
}

/// Input for deleting a booking: the requester's claimed identity,
/// checked against the verified token email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteBookingInput {
    #[validate(email)]
    pub user_email: String,
}
