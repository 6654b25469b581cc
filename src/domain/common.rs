//! Common types for domain models
//!
//! Identity normalization: documents carry a native `ObjectId`, but the
//! canonical cross-collection reference form is the 24-char hex string
//! (`Booking.roomId`, `Review.roomId`, `Review.bookingId` are all stored
//! that way). Conversion from the string form back to the native id
//! happens here, at the service boundary and never inline in query
//! construction, so joins depend on a single normalization function.

use crate::error::{AppError, Result};
use mongodb::bson::oid::ObjectId;

/// Parse a canonical hex-string document reference into a native id.
///
/// Malformed input is a caller error, not a store failure.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InvalidArgument(format!("Invalid id: {}", id)))
}

/// Inclusive price bounds for room queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Build a range from raw query parameters.
    ///
    /// Both bounds must be present and parse as numbers; anything else is
    /// `InvalidArgument` and the caller must not issue a query.
    pub fn from_raw(min: Option<&str>, max: Option<&str>) -> Result<Self> {
        let (min, max) = match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                return Err(AppError::InvalidArgument(
                    "Please provide both minPrice and maxPrice".to_string(),
                ))
            }
        };

        let min: f64 = min.parse().map_err(|_| {
            AppError::InvalidArgument(format!("Invalid minPrice: {}", min))
        })?;
        let max: f64 = max.parse().map_err(|_| {
            AppError::InvalidArgument(format!("Invalid maxPrice: {}", max))
        })?;

        Ok(Self { min, max })
    }
}
