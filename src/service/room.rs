//! Room query logic
//!
//! Everything here is read-side: ratings and joins are derived per
//! request from the reviews and bookings collections.

use crate::domain::{parse_object_id, PriceRange, RoomDetail, RoomWithRating};
use crate::error::{AppError, Result};
use crate::repository::RoomRepository;
use std::sync::Arc;

/// Default size of the top-rated listing
pub const TOP_RATED_LIMIT: i64 = 6;

pub struct RoomService<R: RoomRepository> {
    repo: Arc<R>,
}

impl<R: RoomRepository> RoomService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<RoomWithRating>> {
        self.repo.list_with_ratings(None).await
    }

    /// List rooms with price inside the inclusive `[min, max]` range.
    ///
    /// Both bounds must be present and numeric; otherwise no query is
    /// issued at all.
    pub async fn list_by_price_range(
        &self,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<Vec<RoomWithRating>> {
        let range = PriceRange::from_raw(min, max)?;
        self.repo.list_with_ratings(Some(range)).await
    }

    /// Highest-rated rooms first; rooms without reviews sort last.
    pub async fn top_rated(&self) -> Result<Vec<RoomWithRating>> {
        self.repo.top_rated(TOP_RATED_LIMIT).await
    }

    pub async fn detail(&self, id: &str) -> Result<RoomDetail> {
        let object_id = parse_object_id(id)?;
        self.repo
            .find_detail(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }
}
