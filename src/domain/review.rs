//! Review domain model
//!
//! Reviews are write-once: never updated or deleted. Each review
//! references its room and originating booking by canonical hex-string id.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review entity as returned by read pipelines (`_id` in hex form)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    pub booking_id: String,
    pub user_email: String,
    pub rating: f64,
    pub date: String,
}

/// Input for creating a review.
///
/// `date` is optional; when absent the service stamps the current time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReviewInput {
    pub room_id: String,
    pub booking_id: String,
    #[validate(email)]
    pub user_email: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub date: Option<String>,
}

/// A review ready for insertion (date resolved by the service)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub room_id: String,
    pub booking_id: String,
    pub user_email: String,
    pub rating: f64,
    pub date: String,
}
