//! Room repository
//!
//! Rooms are read-only here; every read joins the reviews collection to
//! derive `averageRating` at query time. The join key is the room id in
//! hex-string form (`$toString` on `_id` matched against `Review.roomId`).

use crate::domain::{PriceRange, RoomDetail, RoomWithRating};
use crate::error::Result;
use crate::repository::{BOOKINGS, REVIEWS, ROOMS};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_with_ratings(&self, price: Option<PriceRange>) -> Result<Vec<RoomWithRating>>;
    async fn top_rated(&self, limit: i64) -> Result<Vec<RoomWithRating>>;
    async fn find_detail(&self, id: ObjectId) -> Result<Option<RoomDetail>>;
}

pub struct RoomRepositoryImpl {
    rooms: Collection<Document>,
}

impl RoomRepositoryImpl {
    pub fn new(db: Database) -> Self {
        Self {
            rooms: db.collection(ROOMS),
        }
    }
}

/// Stages that attach `reviews` and `averageRating` to each room and
/// normalize every id to its canonical hex-string form.
fn review_join_stages() -> Vec<Document> {
    vec![
        doc! { "$addFields": { "stringId": { "$toString": "$_id" } } },
        doc! { "$lookup": {
            "from": REVIEWS,
            "localField": "stringId",
            "foreignField": "roomId",
            "as": "reviews",
        } },
        doc! { "$addFields": {
            "averageRating": { "$avg": "$reviews.rating" },
            "_id": { "$toString": "$_id" },
            "reviews": { "$map": {
                "input": "$reviews",
                "as": "review",
                "in": { "$mergeObjects": [
                    "$$review",
                    { "_id": { "$toString": "$$review._id" } },
                ] },
            } },
        } },
        doc! { "$project": { "stringId": 0 } },
    ]
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn list_with_ratings(&self, price: Option<PriceRange>) -> Result<Vec<RoomWithRating>> {
        let mut pipeline = Vec::new();
        if let Some(range) = price {
            pipeline.push(doc! { "$match": {
                "price": { "$gte": range.min, "$lte": range.max },
            } });
        }
        pipeline.extend(review_join_stages());

        let cursor = self
            .rooms
            .aggregate(pipeline)
            .with_type::<RoomWithRating>()
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn top_rated(&self, limit: i64) -> Result<Vec<RoomWithRating>> {
        // Descending sort places null averages (rooms without reviews)
        // after all numeric averages, so unreviewed rooms come last.
        let mut pipeline = review_join_stages();
        pipeline.push(doc! { "$sort": { "averageRating": -1 } });
        pipeline.push(doc! { "$limit": limit });

        let cursor = self
            .rooms
            .aggregate(pipeline)
            .with_type::<RoomWithRating>()
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_detail(&self, id: ObjectId) -> Result<Option<RoomDetail>> {
        let pipeline = vec![
            doc! { "$match": { "_id": id } },
            doc! { "$addFields": { "stringId": { "$toString": "$_id" } } },
            doc! { "$lookup": {
                "from": REVIEWS,
                "localField": "stringId",
                "foreignField": "roomId",
                "as": "reviews",
            } },
            doc! { "$lookup": {
                "from": BOOKINGS,
                "localField": "stringId",
                "foreignField": "roomId",
                "as": "bookings",
            } },
            doc! { "$addFields": {
                "_id": { "$toString": "$_id" },
                "reviews": { "$map": {
                    "input": "$reviews",
                    "as": "review",
                    "in": { "$mergeObjects": [
                        "$$review",
                        { "_id": { "$toString": "$$review._id" } },
                    ] },
                } },
                "bookings": { "$map": {
                    "input": "$bookings",
                    "as": "booking",
                    "in": { "$mergeObjects": [
                        "$$booking",
                        { "_id": { "$toString": "$$booking._id" } },
                    ] },
                } },
            } },
            doc! { "$project": { "stringId": 0 } },
        ];

        let mut cursor = self
            .rooms
            .aggregate(pipeline)
            .with_type::<RoomDetail>()
            .await?;
        Ok(cursor.try_next().await?)
    }
}
