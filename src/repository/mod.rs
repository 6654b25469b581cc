//! Data access layer (Repository pattern)
//!
//! One repository per collection. All cross-collection joins are computed
//! at query time with aggregation pipelines; no derived value (average
//! rating, room join) is ever stored.

pub mod booking;
pub mod review;
pub mod room;

pub use booking::BookingRepository;
pub use review::ReviewRepository;
pub use room::RoomRepository;

/// Collection names
pub(crate) const ROOMS: &str = "rooms";
pub(crate) const BOOKINGS: &str = "bookings";
pub(crate) const REVIEWS: &str = "reviews";
