//! Booking repository
//!
//! Bookings reference their room by hex-string id. The owner listing
//! joins the rooms collection back through `$toObjectId`; a dangling or
//! malformed reference degrades to an empty `roomDetails` array
//! (`$convert` with `onError: null`) instead of failing the pipeline.

use crate::domain::{BookingWithRoom, CreateBookingInput};
use crate::error::Result;
use crate::repository::{BOOKINGS, ROOMS};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, input: &CreateBookingInput) -> Result<ObjectId>;
    async fn list_by_owner(&self, email: &str) -> Result<Vec<BookingWithRoom>>;
    /// Applies only `bookingDate`. Returns the modified-document count.
    async fn set_booking_date(&self, id: ObjectId, booking_date: &str) -> Result<u64>;
    /// Returns the deleted-document count.
    async fn delete(&self, id: ObjectId) -> Result<u64>;
    /// Sets the monotonic `reviewed` flag. Returns the modified count.
    async fn mark_reviewed(&self, id: ObjectId) -> Result<u64>;
}

pub struct BookingRepositoryImpl {
    bookings: Collection<Document>,
}

impl BookingRepositoryImpl {
    pub fn new(db: Database) -> Self {
        Self {
            bookings: db.collection(BOOKINGS),
        }
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn insert(&self, input: &CreateBookingInput) -> Result<ObjectId> {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "roomId": &input.room_id,
            "userEmail": &input.user_email,
            "bookingDate": &input.booking_date,
            "reviewed": false,
        };
        self.bookings.insert_one(document).await?;
        Ok(id)
    }

    async fn list_by_owner(&self, email: &str) -> Result<Vec<BookingWithRoom>> {
        let pipeline = vec![
            doc! { "$match": { "userEmail": email } },
            doc! { "$addFields": {
                "roomObjectId": { "$convert": {
                    "input": "$roomId",
                    "to": "objectId",
                    "onError": Bson::Null,
                } },
            } },
            doc! { "$lookup": {
                "from": ROOMS,
                "localField": "roomObjectId",
                "foreignField": "_id",
                "as": "roomDetails",
            } },
            doc! { "$addFields": {
                "_id": { "$toString": "$_id" },
                "roomDetails": { "$map": {
                    "input": "$roomDetails",
                    "as": "room",
                    "in": { "$mergeObjects": [
                        "$$room",
                        { "_id": { "$toString": "$$room._id" } },
                    ] },
                } },
            } },
            doc! { "$project": { "roomObjectId": 0 } },
        ];

        let cursor = self
            .bookings
            .aggregate(pipeline)
            .with_type::<BookingWithRoom>()
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn set_booking_date(&self, id: ObjectId, booking_date: &str) -> Result<u64> {
        let result = self
            .bookings
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "bookingDate": booking_date } },
            )
            .await?;
        Ok(result.modified_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64> {
        let result = self.bookings.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn mark_reviewed(&self, id: ObjectId) -> Result<u64> {
        let result = self
            .bookings
            .update_one(doc! { "_id": id }, doc! { "$set": { "reviewed": true } })
            .await?;
        Ok(result.modified_count)
    }
}
