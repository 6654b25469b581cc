//! Booking business logic
//!
//! Every operation is owner-scoped: the verified token email must match
//! the booking's `userEmail` before any write is issued. There is no
//! room-existence check and no overlap prevention: bookings are a plain
//! record of intent, not an inventory reservation.

use crate::domain::{
    parse_object_id, BookingWithRoom, CreateBookingInput, DeleteBookingInput, UpdateBookingInput,
};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy;
use crate::repository::BookingRepository;
use std::sync::Arc;
use validator::Validate;

pub struct BookingService<B: BookingRepository> {
    repo: Arc<B>,
}

impl<B: BookingRepository> BookingService<B> {
    pub fn new(repo: Arc<B>) -> Self {
        Self { repo }
    }

    /// Create a booking on behalf of the authenticated owner.
    /// Returns the generated id in canonical hex form.
    pub async fn create(&self, auth: &AuthUser, input: CreateBookingInput) -> Result<String> {
        input.validate()?;
        policy::require_owner(auth, &input.user_email)?;

        let id = self.repo.insert(&input).await?;
        Ok(id.to_hex())
    }

    /// List the caller's bookings, each enriched with its room documents.
    /// Callers may only list their own email.
    pub async fn list_for_owner(
        &self,
        auth: &AuthUser,
        email: &str,
    ) -> Result<Vec<BookingWithRoom>> {
        policy::require_owner(auth, email)?;
        self.repo.list_by_owner(email).await
    }

    /// Update a booking's date. Only `bookingDate` from the payload is
    /// ever applied.
    pub async fn update(
        &self,
        auth: &AuthUser,
        id: &str,
        input: UpdateBookingInput,
    ) -> Result<()> {
        input.validate()?;
        policy::require_owner(auth, &input.user_email)?;

        let object_id = parse_object_id(id)?;
        let modified = self
            .repo
            .set_booking_date(object_id, &input.booking_date)
            .await?;
        if modified == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }

    /// Delete a booking. Destructive; there is no soft-cancel state.
    pub async fn delete(
        &self,
        auth: &AuthUser,
        id: &str,
        input: DeleteBookingInput,
    ) -> Result<()> {
        input.validate()?;
        policy::require_owner(auth, &input.user_email)?;

        let object_id = parse_object_id(id)?;
        let deleted = self.repo.delete(object_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }
}
