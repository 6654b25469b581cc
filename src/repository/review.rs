//! Review repository
//!
//! `roomId` is stored and queried as a hex string. String-to-string
//! comparison, no native-id variant.

use crate::domain::{NewReview, Review};
use crate::error::Result;
use crate::repository::REVIEWS;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: &NewReview) -> Result<ObjectId>;
    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Review>>;
    /// All reviews, most recent first.
    async fn list_all(&self) -> Result<Vec<Review>>;
}

pub struct ReviewRepositoryImpl {
    reviews: Collection<Document>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Database) -> Self {
        Self {
            reviews: db.collection(REVIEWS),
        }
    }
}

/// Normalize `_id` to its hex form on the way out
fn id_to_string_stage() -> Document {
    doc! { "$addFields": { "_id": { "$toString": "$_id" } } }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn insert(&self, review: &NewReview) -> Result<ObjectId> {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "roomId": &review.room_id,
            "bookingId": &review.booking_id,
            "userEmail": &review.user_email,
            "rating": review.rating,
            "date": &review.date,
        };
        self.reviews.insert_one(document).await?;
        Ok(id)
    }

    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Review>> {
        let pipeline = vec![
            doc! { "$match": { "roomId": room_id } },
            id_to_string_stage(),
        ];

        let cursor = self
            .reviews
            .aggregate(pipeline)
            .with_type::<Review>()
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_all(&self) -> Result<Vec<Review>> {
        let pipeline = vec![
            doc! { "$sort": { "date": -1 } },
            id_to_string_stage(),
        ];

        let cursor = self
            .reviews
            .aggregate(pipeline)
            .with_type::<Review>()
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
