//! Review business logic
//!
//! Creating a review also flips the originating booking's `reviewed`
//! flag. The two writes are not atomic: the flag update is best-effort
//! and its failure is logged, never surfaced. A reader may observe the
//! review before the flag; re-running the flag update is idempotent, so
//! the gap is repairable by re-deriving `reviewed` from the reviews
//! collection. This swallow is intentional and unique to this path; no
//! other handler suppresses a store error.

use crate::domain::{parse_object_id, CreateReviewInput, NewReview, Review};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::policy;
use crate::repository::{BookingRepository, ReviewRepository};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

pub struct ReviewService<V: ReviewRepository, B: BookingRepository> {
    repo: Arc<V>,
    booking_repo: Arc<B>,
}

impl<V: ReviewRepository, B: BookingRepository> ReviewService<V, B> {
    pub fn new(repo: Arc<V>, booking_repo: Arc<B>) -> Self {
        Self { repo, booking_repo }
    }

    /// Create a review and mark the referenced booking as reviewed.
    /// Returns the generated review id in canonical hex form.
    pub async fn add(&self, auth: &AuthUser, input: CreateReviewInput) -> Result<String> {
        input.validate()?;
        policy::require_owner(auth, &input.user_email)?;

        let review = NewReview {
            room_id: input.room_id,
            booking_id: input.booking_id,
            user_email: input.user_email,
            rating: input.rating,
            date: input
                .date
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        };

        let id = self.repo.insert(&review).await?;

        match parse_object_id(&review.booking_id) {
            Ok(booking_id) => match self.booking_repo.mark_reviewed(booking_id).await {
                Ok(0) => warn!(
                    booking_id = %review.booking_id,
                    "no booking matched while marking reviewed"
                ),
                Ok(_) => {}
                Err(e) => warn!(
                    booking_id = %review.booking_id,
                    error = %e,
                    "failed to mark booking reviewed"
                ),
            },
            Err(_) => warn!(
                booking_id = %review.booking_id,
                "review references a malformed booking id"
            ),
        }

        Ok(id.to_hex())
    }

    /// All reviews for a room, matched on the canonical hex-string id.
    pub async fn list_for_room(&self, room_id: &str) -> Result<Vec<Review>> {
        let object_id = parse_object_id(room_id)?;
        self.repo.list_by_room(&object_id.to_hex()).await
    }

    pub async fn list_all(&self) -> Result<Vec<Review>> {
        self.repo.list_all().await
    }
}
